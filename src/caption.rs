//! Caption band anchors and fill colors.
//!
//! A meme carries up to two caption bands: one along the top edge, one along
//! the bottom. Text is horizontally centered and its baseline sits a fixed
//! inset from the band's edge. This module computes the draw anchor for each
//! band; actual text rasterization belongs to the caller.
//!
//! # Example
//!
//! ```
//! use memelayout::{CaptionSlot, CaptionStyle, Surface};
//!
//! let surface = Surface::new(400.0, 400.0).unwrap();
//! let style = CaptionStyle::default();
//!
//! let top = style.anchor(&surface, CaptionSlot::Top);
//! assert_eq!((top.x, top.y), (200.0, 25.0));
//!
//! let bottom = style.anchor(&surface, CaptionSlot::Bottom);
//! assert_eq!((bottom.x, bottom.y), (200.0, 375.0));
//! ```

use crate::fit::Surface;

/// Which caption band a piece of text belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CaptionSlot {
    /// Along the top edge of the surface.
    Top,
    /// Along the bottom edge of the surface.
    Bottom,
}

/// How caption text is drawn.
///
/// Defaults match the classic meme look: 48px serif, white fill, baseline
/// 25px in from the edge, centered.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CaptionStyle {
    /// Font size in pixels.
    pub font_px: f64,
    /// Distance from the surface edge to the text baseline, in pixels.
    pub edge_inset: f64,
    /// Text fill color.
    pub fill: Color,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            font_px: 48.0,
            edge_inset: 25.0,
            fill: Color::white(),
        }
    }
}

impl CaptionStyle {
    /// Compute the baseline anchor for a caption band on a surface.
    ///
    /// The anchor is the center-aligned baseline point: draw the text centered
    /// horizontally on `x` with its baseline at `y`.
    pub fn anchor(&self, surface: &Surface, slot: CaptionSlot) -> TextAnchor {
        let y = match slot {
            CaptionSlot::Top => self.edge_inset,
            CaptionSlot::Bottom => surface.height() - self.edge_inset,
        };
        TextAnchor {
            x: surface.width() / 2.0,
            y,
        }
    }
}

/// A center-aligned text baseline point on the surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextAnchor {
    /// Horizontal center of the text.
    pub x: f64,
    /// Baseline height.
    pub y: f64,
}

/// sRGB fill color with alpha (8-bit per channel).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// White, fully opaque.
    pub const fn white() -> Self {
        Self {
            r: 255,
            g: 255,
            b: 255,
            a: 255,
        }
    }

    /// Black, fully opaque.
    pub const fn black() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 255,
        }
    }
}
