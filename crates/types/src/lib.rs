pub mod geometry;

pub use geometry::{CanvasSize, Emu, Placement, Rect, EMU_PER_INCH, EMU_PER_POINT};
