//! The ordered item list behind the wheel.
//!
//! Items have no identity beyond their position: the list order *is*
//! the sector order, and removing an item shifts everything after it
//! down by one. All mutation edge cases degrade to silent no-ops —
//! the methods report whether anything changed so the wheel layer can
//! decide what to notify.

use wheel_palette::{Color, PaletteCursor, Xorshift32};
use wheel_palette::contrast::{LABEL_LUMINANCE, ensure_contrast};
use wheel_palette::palette;

/// One sector: a label and a label-safe fill color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Label text.
    pub text: String,
    /// Fill color, guaranteed dark enough for white text.
    pub color: Color,
}

/// The authoritative, ordered item list plus its palette state.
#[derive(Debug, Clone)]
pub struct WheelStore {
    items: Vec<Item>,
    palette: PaletteCursor,
}

impl WheelStore {
    /// A store with the built-in starter set: five "Option N" items
    /// colored from a shuffled base palette.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        let mut rng = Xorshift32::new(seed);
        let colors = palette::generate_base(&mut rng);
        let items = colors
            .into_iter()
            .enumerate()
            .map(|(i, color)| Item {
                text: format!("Option {}", i + 1),
                color,
            })
            .collect();
        Self {
            items,
            palette: PaletteCursor::from_rng(rng),
        }
    }

    /// A store seeded with an explicit item list (typically restored by
    /// the persistence collaborator). Incoming colors pass through the
    /// contrast guarantee — external state may predate it.
    #[must_use]
    pub fn with_items(items: Vec<Item>, seed: u32) -> Self {
        let items = items
            .into_iter()
            .map(|item| Item {
                color: ensure_contrast(item.color, LABEL_LUMINANCE),
                ..item
            })
            .collect();
        Self {
            items,
            palette: PaletteCursor::new(seed),
        }
    }

    /// Append an item with the next palette color. Empty or
    /// whitespace-only text is ignored; returns whether the list
    /// changed.
    pub fn add(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let color = self.palette.next_color();
        self.items.push(Item {
            text: text.to_string(),
            color,
        });
        true
    }

    /// Replace the text at `index`. Out-of-range indices are ignored;
    /// returns whether the list changed.
    pub fn edit(&mut self, index: usize, text: &str) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.text = text.to_string();
                true
            }
            None => false,
        }
    }

    /// Remove the item at `index`, shifting later items down.
    /// Out-of-range indices are ignored; returns whether the list
    /// changed.
    pub fn remove(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.items.remove(index);
            true
        } else {
            false
        }
    }

    /// The items in sector order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of sectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the wheel has nothing to land on.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
