//! Meme layout computation: contain-fit placement, caption anchors, render
//! and speech planning.
//!
//! Pure computation — no pixel operations, no I/O, `no_std` compatible. The
//! caller owns the platform services (image decoding, 2D drawing, speech
//! audio) and replays this crate's decisions against them.
//!
//! # Modules
//!
//! - [`fit`] — contain-fit placement of a source image on a surface
//! - [`caption`] — caption band anchors and fill colors
//! - [`control`] — UI control enablement across the load/generate/clear cycle
//! - [`speech`] — read-aloud planning: voices, volume, utterance order
//! - [`plan`] — per-frame drawing command composition (`alloc`)
//! - [`svg`] — SVG preview of a composed frame (`svg` feature)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod caption;
pub mod control;
pub mod fit;
#[cfg(feature = "alloc")]
pub mod plan;
pub mod speech;
#[cfg(feature = "svg")]
pub mod svg;

// Re-exports: core types from the fit and caption modules
pub use caption::{CaptionSlot, CaptionStyle, Color, TextAnchor};
pub use control::{Controls, UiEvent};
pub use fit::{FitError, PixelPlacement, Placement, Surface, fit};
#[cfg(feature = "alloc")]
pub use plan::{Command, Meme};
pub use speech::{ReadAloud, Utterance, Voice, VolumeLevel};
