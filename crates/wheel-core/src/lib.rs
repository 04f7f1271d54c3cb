//! # wheel-core — the wheel of choices
//!
//! Everything that makes the wheel a wheel, with no rendering backend
//! and no clock attached:
//!
//! - **[`store`]** — `Item` and `WheelStore`: the ordered sector list
//!   with palette-backed color assignment
//! - **[`layout`]** — greedy pixel-width label wrapping behind the
//!   injected [`TextMeasure`](layout::TextMeasure) port
//! - **[`geometry`]** — sector angles, wedge paths, and label placement
//!   projected into a [`Scene`](geometry::Scene) of draw commands
//! - **[`spin`]** — the eased spin timeline and the final
//!   angle-to-sector resolution
//! - **[`wheel`]** — `Wheel` + `WheelEvent` + `Effects`: the single
//!   transition function a host drives
//!
//! The crate is deliberately pure: rendering is a projection, time is a
//! number the host passes in, and randomness comes from a seeded
//! generator. A test can run a complete spin without a frame callback
//! or a wall clock in sight.

pub mod geometry;
pub mod layout;
pub mod spin;
pub mod store;
pub mod wheel;

pub use geometry::{Circle, DrawCommand, Scene};
pub use layout::{TextMeasure, Wrapped};
pub use store::{Item, WheelStore};
pub use wheel::{Effects, Wheel, WheelEvent};
