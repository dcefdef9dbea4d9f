//! Contain-fit placement computation.
//!
//! Computes the largest centered rectangle that preserves a source image's
//! aspect ratio and fits entirely within a target surface — letterbox /
//! pillarbox, CSS `object-fit: contain`, never cropping. Pure geometry —
//! no pixel operations, no allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use memelayout::{Placement, Surface};
//!
//! // A 2:1 image into a square surface: width constrains, letterboxed.
//! let placement = Surface::new(400.0, 400.0)
//!     .unwrap()
//!     .fit(800.0, 400.0)
//!     .unwrap();
//!
//! assert_eq!(
//!     placement,
//!     Placement { width: 400.0, height: 200.0, start_x: 0.0, start_y: 100.0 }
//! );
//! ```

/// Validated drawing-surface dimensions.
///
/// Construction rejects non-positive and non-finite values, so every
/// computation downstream of a `Surface` starts from usable numbers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Surface {
    width: f64,
    height: f64,
}

impl Surface {
    /// Create a surface, validating both dimensions.
    pub fn new(width: f64, height: f64) -> Result<Self, FitError> {
        if !dimension_ok(width) || !dimension_ok(height) {
            return Err(FitError::InvalidSurfaceDimension);
        }
        Ok(Self { width, height })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Compute the contain-fit placement for a source image of the given
    /// dimensions.
    ///
    /// The result preserves the source aspect ratio exactly (up to float
    /// precision), spans the full surface on the constrained axis, and is
    /// centered on the other axis. The placement is always fully inside the
    /// surface bounds.
    pub fn fit(&self, image_width: f64, image_height: f64) -> Result<Placement, FitError> {
        if !dimension_ok(image_width) || !dimension_ok(image_height) {
            return Err(FitError::InvalidSourceDimension);
        }

        let image_ratio = image_width / image_height;
        let surface_ratio = self.width / self.height;

        // The axis whose ratio is relatively larger runs out of room first.
        // Equal ratios route to the width branch; both branches agree there.
        if image_ratio >= surface_ratio {
            // Width constrains — full surface width, letterbox vertically.
            let height = self.width / image_ratio;
            Ok(Placement {
                width: self.width,
                height,
                start_x: 0.0,
                start_y: (self.height - height) / 2.0,
            })
        } else {
            // Height constrains — full surface height, pillarbox horizontally.
            let width = self.height * image_ratio;
            Ok(Placement {
                width,
                height: self.height,
                start_x: (self.width - width) / 2.0,
                start_y: 0.0,
            })
        }
    }
}

/// Computed size and top-left offset at which to draw a source image so it is
/// fully contained in the surface and centered on the unconstrained axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Scaled image width in pixels.
    pub width: f64,
    /// Scaled image height in pixels.
    pub height: f64,
    /// Left edge of the image on the surface.
    pub start_x: f64,
    /// Top edge of the image on the surface.
    pub start_y: f64,
}

impl Placement {
    /// Round to whole-pixel coordinates for raster drawing APIs.
    ///
    /// Offsets are non-negative by construction, so the cast is lossless.
    pub fn round_to_pixels(&self) -> PixelPlacement {
        PixelPlacement {
            x: num_traits::Float::round(self.start_x) as u32,
            y: num_traits::Float::round(self.start_y) as u32,
            width: num_traits::Float::round(self.width) as u32,
            height: num_traits::Float::round(self.height) as u32,
        }
    }
}

/// A [`Placement`] snapped to whole pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PixelPlacement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Fit computation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FitError {
    /// Surface width or height is zero, negative, or non-finite.
    InvalidSurfaceDimension,
    /// Source image width or height is zero, negative, or non-finite.
    InvalidSourceDimension,
}

/// Compute the contain-fit placement of a source image on a surface.
///
/// Convenience wrapper over [`Surface::new`] + [`Surface::fit`] matching the
/// four-argument call shape most callers want.
pub fn fit(
    surface_width: f64,
    surface_height: f64,
    image_width: f64,
    image_height: f64,
) -> Result<Placement, FitError> {
    Surface::new(surface_width, surface_height)?.fit(image_width, image_height)
}

fn dimension_ok(v: f64) -> bool {
    v.is_finite() && v > 0.0
}
