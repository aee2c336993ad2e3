//! Slide geometry in English Metric Units.
//!
//! All device coordinates in the engine are EMU: 914,400 per inch, the unit
//! used by presentation containers. Fractional anchor math happens in `f64`
//! and is truncated toward zero when it lands in these integral types.

use serde::{Deserialize, Serialize};

/// An English Metric Unit coordinate or distance.
pub type Emu = i64;

pub const EMU_PER_INCH: Emu = 914_400;
pub const EMU_PER_POINT: Emu = 12_700;

/// The drawable slide surface, in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: Emu,
    pub height: Emu,
}

impl CanvasSize {
    pub fn new(width: Emu, height: Emu) -> Self {
        Self { width, height }
    }

    /// The classic 10in x 7.5in slide surface.
    pub fn standard_4x3() -> Self {
        Self {
            width: 10 * EMU_PER_INCH,
            height: 7 * EMU_PER_INCH + EMU_PER_INCH / 2,
        }
    }

    /// The 13.333in x 7.5in widescreen surface.
    pub fn widescreen_16x9() -> Self {
        Self {
            width: 12_192_000,
            height: 6_858_000,
        }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::standard_4x3()
    }
}

/// A resolved anchor rectangle. Height is absent here; it is derived later
/// from the image's intrinsic aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: Emu,
    pub top: Emu,
    pub width: Emu,
}

impl Rect {
    pub fn new(left: Emu, top: Emu, width: Emu) -> Self {
        Self { left, top, width }
    }
}

/// The final rectangle at which a picture is drawn.
///
/// Derived per image at render time and immediately consumed; never stored
/// in the content tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub left: Emu,
    pub top: Emu,
    pub width: Emu,
    pub height: Emu,
}

impl Placement {
    pub fn new(left: Emu, top: Emu, width: Emu, height: Emu) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}
