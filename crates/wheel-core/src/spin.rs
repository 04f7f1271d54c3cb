//! The spin engine — an eased rotation timeline and its resolution.
//!
//! A spin is a fixed-duration timeline from the wheel's current
//! rotation to a randomized target at least eight full revolutions
//! away. The host drives it by passing *total elapsed time* to
//! [`SpinTimeline::sample`] each tick — rotation is recomputed from
//! scratch every time, so scheduling jitter can never accumulate into
//! the outcome.
//!
//! When the timeline completes, [`resolve_index`] maps the final
//! rotation back to the sector under the fixed pointer at 12 o'clock:
//! the wheel rotated clockwise by `final mod 360`, so the pointer —
//! which sits 90° "before" the angle origin used by the sector layout —
//! lands in sector `⌊((360 − final + 90) mod 360) / (360/N)⌋`.

use wheel_palette::Xorshift32;

/// Spin duration in milliseconds. Fixed, not configurable.
pub const SPIN_DURATION_MS: f64 = 5000.0;

/// Minimum whole revolutions per spin — guarantees perceived motion no
/// matter how close the random offset lands to the starting angle.
pub const FULL_SPINS: f64 = 8.0;

/// Ease-out quintic: `1 − (1−t)^5`. Fast start, slow finish.
#[must_use]
pub fn ease_out_quint(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(5)
}

/// One sampled frame of a spin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinSample {
    /// Rotation to display this frame, in degrees.
    pub rotation_deg: f64,
    /// True once the timeline has run its full duration.
    pub done: bool,
}

// ---------------------------------------------------------------------------
// SpinTimeline
// ---------------------------------------------------------------------------

/// An in-flight spin: fixed endpoints, sampled by elapsed time.
///
/// The sector width is captured at spin start; the item list must not
/// change while a timeline is live (the wheel enforces this).
#[derive(Debug, Clone, PartialEq)]
pub struct SpinTimeline {
    initial_deg: f64,
    target_deg: f64,
    deg_per_item: f64,
}

impl SpinTimeline {
    /// Begin a spin from `current_rotation_deg` over `item_count`
    /// sectors. Returns `None` for an empty wheel — there is nothing
    /// to land on.
    #[must_use]
    pub fn start(current_rotation_deg: f64, item_count: usize, rng: &mut Xorshift32) -> Option<Self> {
        if item_count == 0 {
            return None;
        }
        let initial_deg = current_rotation_deg.rem_euclid(360.0);
        let offset = rng.range_f64(0.0, 360.0);
        #[allow(clippy::cast_precision_loss)]
        let deg_per_item = 360.0 / item_count as f64;
        Some(Self {
            initial_deg,
            target_deg: FULL_SPINS.mul_add(360.0, offset),
            deg_per_item,
        })
    }

    /// Sample the rotation after `elapsed_ms` of wall time.
    ///
    /// Progress clamps at 1.0, so sampling past the duration keeps
    /// returning the settled target.
    #[must_use]
    pub fn sample(&self, elapsed_ms: f64) -> SpinSample {
        let progress = (elapsed_ms / SPIN_DURATION_MS).min(1.0);
        let eased = ease_out_quint(progress);
        SpinSample {
            rotation_deg: (self.target_deg - self.initial_deg).mul_add(eased, self.initial_deg),
            done: progress >= 1.0,
        }
    }

    /// Sector width captured when this spin began.
    #[must_use]
    pub const fn deg_per_item(&self) -> f64 {
        self.deg_per_item
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Map a settled rotation to the sector index under the pointer.
///
/// Always `Some(i)` with `i < item_count` for a nonzero wheel; `None`
/// only for `item_count == 0`.
#[must_use]
pub fn resolve_index(final_rotation_deg: f64, item_count: usize) -> Option<usize> {
    if item_count == 0 {
        return None;
    }
    let final_angle = final_rotation_deg.rem_euclid(360.0);
    let pointer_deg = (360.0 - final_angle + 90.0).rem_euclid(360.0);
    #[allow(clippy::cast_precision_loss)]
    let deg_per_item = 360.0 / item_count as f64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = (pointer_deg / deg_per_item).floor() as usize;
    // Floating-point roundoff at sector boundaries can land exactly on
    // item_count; fold it back onto the last sector.
    Some(index.min(item_count - 1))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // ── Easing ──────────────────────────────────────────────────────

    #[test]
    fn easing_endpoints() {
        assert!((ease_out_quint(0.0) - 0.0).abs() < 1e-12);
        assert!((ease_out_quint(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn easing_midpoint() {
        // 1 − 0.5^5 = 0.96875 — most of the motion happens early.
        assert!((ease_out_quint(0.5) - 0.968_75).abs() < 1e-12);
    }

    #[test]
    fn easing_is_monotonic() {
        let mut last = 0.0;
        for step in 1..=100 {
            let eased = ease_out_quint(f64::from(step) / 100.0);
            assert!(eased >= last);
            last = eased;
        }
    }

    // ── Timeline ────────────────────────────────────────────────────

    #[test]
    fn empty_wheel_cannot_spin() {
        let mut rng = Xorshift32::new(1);
        assert!(SpinTimeline::start(0.0, 0, &mut rng).is_none());
    }

    #[test]
    fn target_is_at_least_seven_revolutions_out() {
        // target ∈ [2880, 3240), initial ∈ [0, 360): the wheel always
        // travels between 7 and 9 full turns.
        for seed in 1..50 {
            let mut rng = Xorshift32::new(seed);
            let t = SpinTimeline::start(123.0, 5, &mut rng).unwrap();
            let travel = t.sample(SPIN_DURATION_MS).rotation_deg - t.sample(0.0).rotation_deg;
            assert!(travel > 7.0 * 360.0, "travel {travel}");
            assert!(travel < 9.0 * 360.0, "travel {travel}");
        }
    }

    #[test]
    fn sample_starts_from_the_normalized_rotation() {
        let mut rng = Xorshift32::new(5);
        let t = SpinTimeline::start(720.0 + 45.0, 4, &mut rng).unwrap();
        let first = t.sample(0.0);
        assert!((first.rotation_deg - 45.0).abs() < 1e-12);
        assert!(!first.done);
    }

    #[test]
    fn sample_is_monotonic_over_the_duration() {
        let mut rng = Xorshift32::new(9);
        let t = SpinTimeline::start(0.0, 6, &mut rng).unwrap();
        let mut last = f64::MIN;
        for step in 0..=100 {
            let sample = t.sample(f64::from(step) * 50.0);
            assert!(sample.rotation_deg >= last);
            last = sample.rotation_deg;
        }
    }

    #[test]
    fn sample_completes_exactly_at_the_duration() {
        let mut rng = Xorshift32::new(2);
        let t = SpinTimeline::start(0.0, 3, &mut rng).unwrap();
        assert!(!t.sample(SPIN_DURATION_MS - 1.0).done);
        assert!(t.sample(SPIN_DURATION_MS).done);
    }

    #[test]
    fn sampling_past_the_end_stays_settled() {
        let mut rng = Xorshift32::new(2);
        let t = SpinTimeline::start(0.0, 3, &mut rng).unwrap();
        let at_end = t.sample(SPIN_DURATION_MS);
        let later = t.sample(SPIN_DURATION_MS * 3.0);
        assert!((at_end.rotation_deg - later.rotation_deg).abs() < 1e-12);
        assert!(later.done);
    }

    #[test]
    fn deg_per_item_is_captured() {
        let mut rng = Xorshift32::new(4);
        let t = SpinTimeline::start(0.0, 5, &mut rng).unwrap();
        assert!((t.deg_per_item() - 72.0).abs() < 1e-12);
    }

    // ── Resolution ──────────────────────────────────────────────────

    #[test]
    fn zero_rotation_of_five_points_at_sector_one() {
        // pointer = (360 − 0 + 90) mod 360 = 90; 90 / 72 = 1.25.
        assert_eq!(resolve_index(0.0, 5), Some(1));
    }

    #[test]
    fn resolution_is_empty_for_an_empty_wheel() {
        assert_eq!(resolve_index(123.0, 0), None);
    }

    #[test]
    fn resolution_always_lands_in_range() {
        for n in 1..=12 {
            for tenth in 0..3600 {
                let rotation = f64::from(tenth) / 10.0;
                let index = resolve_index(rotation, n).unwrap();
                assert!(index < n, "rotation {rotation} of {n} gave {index}");
            }
        }
    }

    #[test]
    fn resolution_ignores_whole_revolutions() {
        for n in [3, 5, 8] {
            for deg in 0..360 {
                let rotation = f64::from(deg);
                assert_eq!(
                    resolve_index(rotation, n),
                    resolve_index(rotation + 8.0 * 360.0, n),
                );
            }
        }
    }

    #[test]
    fn quarter_turn_moves_the_winner() {
        // Rotating a 4-sector wheel a quarter turn clockwise brings the
        // previous sector under the pointer.
        let before = resolve_index(0.0, 4).unwrap();
        let after = resolve_index(90.0, 4).unwrap();
        assert_eq!((before + 4 - 1) % 4, after);
    }

    #[test]
    fn single_sector_always_wins() {
        for deg in [0.0, 17.3, 180.0, 359.9] {
            assert_eq!(resolve_index(deg, 1), Some(0));
        }
    }
}
