//! Aspect-ratio-preserving placement.

use crate::error::LayoutError;
use dais_types::{Placement, Rect};

/// Derive the final picture rectangle from a resolved anchor rectangle and
/// the image's intrinsic pixel dimensions.
///
/// The width is the anchor's; the height follows the aspect ratio,
/// truncated toward zero into EMU so repeated renders are bit-identical.
pub fn compute_placement(
    rect: Rect,
    intrinsic_width: u32,
    intrinsic_height: u32,
) -> Result<Placement, LayoutError> {
    if intrinsic_width == 0 || intrinsic_height == 0 {
        return Err(LayoutError::InvalidImageDimensions {
            width: intrinsic_width,
            height: intrinsic_height,
        });
    }

    let height = (rect.width as f64 * intrinsic_height as f64 / intrinsic_width as f64) as i64;
    Ok(Placement::new(rect.left, rect.top, rect.width, height))
}
