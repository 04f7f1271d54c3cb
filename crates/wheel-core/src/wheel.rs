//! The wheel itself — pure state plus one transition function.
//!
//! A `Wheel` is a value: the item store, the accumulated rotation, and
//! the optional in-flight spin timeline. Hosts poke it exclusively
//! through [`Wheel::apply`], which maps an event to an [`Effects`]
//! record describing what the outside world should do — notify the
//! persistence collaborator, repaint, clear the result display, report
//! a winner. The wheel never calls out; the host reads the effects and
//! acts.
//!
//! While a spin is in flight, mutation events are rejected outright.
//! The timeline captured its sector width at launch, and changing the
//! item count underneath it would silently skew the outcome — refusing
//! the edit is observable and testable, a quiet corruption is neither.

use crate::geometry::{self, Circle, Scene};
use crate::layout::TextMeasure;
use crate::spin::{SpinTimeline, resolve_index};
use crate::store::{Item, WheelStore};
use wheel_palette::Xorshift32;

// ---------------------------------------------------------------------------
// Events and effects
// ---------------------------------------------------------------------------

/// Everything the outside world can ask of the wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelEvent<'a> {
    /// Append an item (blank text is ignored).
    AddItem(&'a str),
    /// Replace the text at an index (out of range is ignored).
    EditItem(usize, &'a str),
    /// Remove the item at an index (out of range is ignored).
    RemoveItem(usize),
    /// Start a spin (ignored while spinning or when empty).
    SpinRequested,
    /// Advance an in-flight spin to `elapsed_ms` after its start
    /// (ignored while idle).
    Tick {
        /// Total elapsed time since the spin began, in milliseconds.
        elapsed_ms: f64,
    },
}

/// What the host should do after an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Effects {
    /// The item list changed — fire the change notification exactly
    /// once; the persistence collaborator may read the items now.
    pub changed: bool,
    /// The frame is stale — re-render exactly once.
    pub redraw: bool,
    /// Any displayed spin result is stale — blank it.
    pub clear_result: bool,
    /// A spin completed: the winning item's text, or an empty string
    /// if the index defensively fell out of range. Emitted exactly
    /// once per completed spin.
    pub outcome: Option<String>,
}

impl Effects {
    /// The event was a no-op.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    fn mutation(changed: bool, clear_result: bool) -> Self {
        Self {
            changed,
            redraw: changed,
            clear_result: clear_result && changed,
            outcome: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Wheel
// ---------------------------------------------------------------------------

/// The widget state: items, rotation, and spin phase.
#[derive(Debug, Clone)]
pub struct Wheel {
    store: WheelStore,
    rotation_deg: f64,
    spin: Option<SpinTimeline>,
    rng: Xorshift32,
}

impl Wheel {
    /// A wheel with the built-in starter items.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self::from_store(WheelStore::new(seed), seed)
    }

    /// A wheel restored from collaborator-supplied items.
    #[must_use]
    pub fn with_items(items: Vec<Item>, seed: u32) -> Self {
        Self::from_store(WheelStore::with_items(items, seed), seed)
    }

    fn from_store(store: WheelStore, seed: u32) -> Self {
        Self {
            store,
            rotation_deg: 0.0,
            // Offset the stream so the spin offsets don't replay the
            // shuffle sequence.
            rng: Xorshift32::new(seed ^ 0x9E37_79B9),
            spin: None,
        }
    }

    /// The items in sector order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        self.store.items()
    }

    /// Current rotation in degrees; accumulates across spins.
    #[must_use]
    pub const fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    /// True while a spin timeline is live.
    #[must_use]
    pub const fn is_spinning(&self) -> bool {
        self.spin.is_some()
    }

    /// Apply one event and report the required side effects.
    pub fn apply(&mut self, event: WheelEvent<'_>) -> Effects {
        match event {
            WheelEvent::AddItem(text) => {
                if self.is_spinning() {
                    return Effects::none();
                }
                Effects::mutation(self.store.add(text), true)
            }
            WheelEvent::EditItem(index, text) => {
                if self.is_spinning() {
                    return Effects::none();
                }
                Effects::mutation(self.store.edit(index, text), false)
            }
            WheelEvent::RemoveItem(index) => {
                if self.is_spinning() {
                    return Effects::none();
                }
                Effects::mutation(self.store.remove(index), true)
            }
            WheelEvent::SpinRequested => self.start_spin(),
            WheelEvent::Tick { elapsed_ms } => self.tick(elapsed_ms),
        }
    }

    /// Project the current frame onto a circle.
    #[must_use]
    pub fn scene(&self, circle: Circle, measure: &dyn TextMeasure) -> Scene {
        geometry::project(self.store.items(), circle, self.rotation_deg, measure)
    }

    fn start_spin(&mut self) -> Effects {
        if self.is_spinning() {
            return Effects::none();
        }
        let Some(timeline) = SpinTimeline::start(self.rotation_deg, self.store.len(), &mut self.rng)
        else {
            return Effects::none();
        };
        self.rotation_deg = timeline.sample(0.0).rotation_deg;
        self.spin = Some(timeline);
        Effects {
            changed: false,
            redraw: true,
            clear_result: true,
            outcome: None,
        }
    }

    fn tick(&mut self, elapsed_ms: f64) -> Effects {
        let Some(timeline) = &self.spin else {
            return Effects::none();
        };
        let sample = timeline.sample(elapsed_ms);
        self.rotation_deg = sample.rotation_deg;

        if !sample.done {
            return Effects {
                redraw: true,
                ..Effects::none()
            };
        }

        self.spin = None;
        let winner = resolve_index(self.rotation_deg, self.store.len())
            .and_then(|index| self.store.items().get(index))
            .map_or_else(String::new, |item| item.text.clone());
        Effects {
            changed: false,
            redraw: true,
            clear_result: false,
            outcome: Some(winner),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
