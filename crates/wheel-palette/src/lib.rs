//! # wheel-palette — color engine for the spinning wheel
//!
//! Hands out vivid sector colors that are guaranteed to stay legible
//! under white label text, no matter what the curated sets contain.
//!
//! # Architecture
//!
//! ```text
//! seed
//!   │
//!   ▼
//! rng.rs:      Xorshift32 — deterministic shuffle + spin offsets
//!   │
//!   ▼
//! palette.rs:  shuffle a curated color set, advance a cursor,
//!              reshuffle when the set is exhausted
//!   │
//!   ▼
//! contrast.rs: darken every handed-out color until its relative
//!              luminance permits white text on top
//! ```
//!
//! # Color Space
//!
//! Colors are plain 8-bit sRGB ([`Color`]) — the wheel never blends or
//! interpolates, it only darkens whole channels, so a perceptual space
//! would buy nothing here. Luminance checks linearize on the fly.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]

pub mod color;
pub mod contrast;
pub mod palette;
pub mod rng;

pub use color::Color;
pub use palette::PaletteCursor;
pub use rng::Xorshift32;
