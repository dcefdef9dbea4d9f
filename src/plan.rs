//! Render command planning.
//!
//! Composes the ordered drawing commands for one meme frame: clear the
//! surface, fill the background, draw the contain-fitted image, then draw
//! the caption bands. The caller replays the commands against its drawing
//! surface; this module never touches pixels.
//!
//! # Example
//!
//! ```
//! use memelayout::{Command, Meme};
//!
//! let commands = Meme::new(400.0, 400.0)
//!     .image(800.0, 400.0)
//!     .top_text("TOP")
//!     .bottom_text("BOTTOM")
//!     .compose()
//!     .unwrap();
//!
//! assert_eq!(commands.len(), 5);
//! assert_eq!(commands[0], Command::Clear);
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::caption::{CaptionSlot, CaptionStyle, Color, TextAnchor};
use crate::fit::{FitError, Placement, Surface};

/// A single drawing command, in replay order.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Clear the whole surface.
    Clear,
    /// Fill the whole surface with a color.
    Fill(Color),
    /// Draw the source image at the given placement.
    DrawImage(Placement),
    /// Draw one caption band.
    DrawCaption {
        /// Which band.
        slot: CaptionSlot,
        /// Center-aligned baseline anchor.
        anchor: TextAnchor,
        /// Caption text.
        text: String,
        /// Font, inset, and fill.
        style: CaptionStyle,
    },
}

/// Builder for one meme frame's command list.
///
/// An image is optional — captions may be drawn on an empty surface. The
/// surface dimensions are validated when [`compose`](Self::compose) runs.
#[derive(Clone, Debug, PartialEq)]
pub struct Meme {
    surface_width: f64,
    surface_height: f64,
    image: Option<(f64, f64)>,
    top: Option<String>,
    bottom: Option<String>,
    style: CaptionStyle,
    background: Color,
}

impl Meme {
    /// Start a frame for a surface of the given dimensions.
    pub fn new(surface_width: f64, surface_height: f64) -> Self {
        Self {
            surface_width,
            surface_height,
            image: None,
            top: None,
            bottom: None,
            style: CaptionStyle::default(),
            background: Color::black(),
        }
    }

    /// Set the source image dimensions.
    pub fn image(mut self, width: f64, height: f64) -> Self {
        self.image = Some((width, height));
        self
    }

    /// Set the top caption.
    pub fn top_text(mut self, text: impl Into<String>) -> Self {
        self.top = Some(text.into());
        self
    }

    /// Set the bottom caption.
    pub fn bottom_text(mut self, text: impl Into<String>) -> Self {
        self.bottom = Some(text.into());
        self
    }

    /// Override the caption style.
    pub fn style(mut self, style: CaptionStyle) -> Self {
        self.style = style;
        self
    }

    /// Override the background fill drawn behind the image.
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Compose the ordered command list for this frame.
    ///
    /// With an image: clear, background fill (gives the letterbox bars their
    /// color), fitted image, captions. Without: clear, captions.
    pub fn compose(&self) -> Result<Vec<Command>, FitError> {
        let surface = Surface::new(self.surface_width, self.surface_height)?;

        let mut commands = Vec::with_capacity(5);
        commands.push(Command::Clear);

        if let Some((iw, ih)) = self.image {
            commands.push(Command::Fill(self.background));
            commands.push(Command::DrawImage(surface.fit(iw, ih)?));
        }

        for (slot, text) in [
            (CaptionSlot::Top, &self.top),
            (CaptionSlot::Bottom, &self.bottom),
        ] {
            if let Some(text) = text {
                commands.push(Command::DrawCaption {
                    slot,
                    anchor: self.style.anchor(&surface, slot),
                    text: text.clone(),
                    style: self.style,
                });
            }
        }

        Ok(commands)
    }
}
