//! Symbolic position resolution.
//!
//! A [`PositionTable`] maps position names to [`Anchor`] fractions of the
//! canvas. Resolution is a pure computation from anchor and canvas to an
//! EMU rectangle; the placed height never comes from here (it is derived
//! from the image's aspect ratio in [`crate::placement`]).

use crate::error::LayoutError;
use dais_types::{CanvasSize, Rect};
use std::collections::HashMap;

/// Normalized `(left, top, width)` fractions of the canvas. `left + width`
/// may exceed 1.0; tables are allowed to push pictures past the right
/// edge, and [`PositionTable::validate`] is the opt-in check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub left: f64,
    pub top: f64,
    pub width: f64,
}

impl Anchor {
    pub fn new(left: f64, top: f64, width: f64) -> Self {
        Self { left, top, width }
    }
}

#[derive(Debug, Clone)]
pub struct PositionTable {
    anchors: HashMap<String, Anchor>,
}

impl PositionTable {
    pub fn empty() -> Self {
        Self {
            anchors: HashMap::new(),
        }
    }

    /// The canonical nine-position table: edges, corners, and center, each
    /// 35% of the canvas wide.
    pub fn standard() -> Self {
        let mut table = Self::empty();
        table.insert("top", Anchor::new(0.32, 0.08, 0.35));
        table.insert("bottom", Anchor::new(0.32, 0.57, 0.35));
        table.insert("left", Anchor::new(0.05, 0.32, 0.35));
        table.insert("right", Anchor::new(0.60, 0.32, 0.35));
        table.insert("top_left", Anchor::new(0.05, 0.08, 0.35));
        table.insert("top_right", Anchor::new(0.60, 0.08, 0.35));
        table.insert("bottom_left", Anchor::new(0.05, 0.57, 0.35));
        table.insert("bottom_right", Anchor::new(0.60, 0.57, 0.35));
        table.insert("center", Anchor::new(0.32, 0.32, 0.35));
        table
    }

    pub fn insert(&mut self, name: impl Into<String>, anchor: Anchor) {
        self.anchors.insert(name.into(), anchor);
    }

    pub fn with_anchor(mut self, name: impl Into<String>, anchor: Anchor) -> Self {
        self.insert(name, anchor);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Anchor> {
        self.anchors.get(name)
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Registered names, sorted for stable error messages.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.anchors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolve a position name against a canvas. Coordinates truncate
    /// toward zero into EMU.
    pub fn resolve(&self, name: &str, canvas: CanvasSize) -> Result<Rect, LayoutError> {
        let anchor = self
            .anchors
            .get(name)
            .ok_or_else(|| LayoutError::UnknownPosition {
                name: name.to_string(),
                known: self.names().join(", "),
            })?;

        Ok(Rect::new(
            (canvas.width as f64 * anchor.left) as i64,
            (canvas.height as f64 * anchor.top) as i64,
            (canvas.width as f64 * anchor.width) as i64,
        ))
    }

    /// Opt-in strictness: every anchor must keep its rectangle on-canvas.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let invalid = |name: &str, message: String| LayoutError::InvalidAnchor {
            name: name.to_string(),
            message,
        };

        for name in self.names() {
            let anchor = &self.anchors[name];
            if !(0.0..=1.0).contains(&anchor.left) || !(0.0..=1.0).contains(&anchor.top) {
                return Err(invalid(
                    name,
                    format!(
                        "left {} and top {} must be fractions in [0, 1]",
                        anchor.left, anchor.top
                    ),
                ));
            }
            if anchor.width <= 0.0 || anchor.width > 1.0 {
                return Err(invalid(
                    name,
                    format!("width {} must be a fraction in (0, 1]", anchor.width),
                ));
            }
            if anchor.left + anchor.width > 1.0 {
                return Err(invalid(
                    name,
                    format!(
                        "left {} + width {} runs past the canvas edge",
                        anchor.left, anchor.width
                    ),
                ));
            }
        }
        Ok(())
    }
}

impl Default for PositionTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic_canvas() -> CanvasSize {
        CanvasSize::new(9_144_000, 6_858_000)
    }

    // One EMU of slop: fraction math runs in f64 and truncates.
    fn assert_emu_close(actual: i64, expected: i64) {
        assert!(
            (actual - expected).abs() <= 1,
            "expected about {expected}, got {actual}"
        );
    }

    #[test]
    fn test_resolve_bottom_on_classic_canvas() {
        let rect = PositionTable::standard()
            .resolve("bottom", classic_canvas())
            .unwrap();
        assert_emu_close(rect.left, 2_926_080);
        assert_emu_close(rect.top, 3_909_060);
        assert_emu_close(rect.width, 3_200_400);
    }

    #[test]
    fn test_all_standard_positions_stay_on_canvas() {
        let table = PositionTable::standard();
        let canvas = classic_canvas();
        for name in table.names() {
            let rect = table.resolve(name, canvas).unwrap();
            assert!((0..=canvas.width).contains(&rect.left), "{name} left");
            assert!((0..=canvas.height).contains(&rect.top), "{name} top");
            assert!((0..=canvas.width).contains(&rect.width), "{name} width");
        }
    }

    #[test]
    fn test_unknown_position_lists_known_names() {
        let err = PositionTable::standard()
            .resolve("diagonal", classic_canvas())
            .unwrap_err();
        match err {
            LayoutError::UnknownPosition { name, known } => {
                assert_eq!(name, "diagonal");
                assert!(known.contains("bottom_right"));
                assert!(known.contains("center"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_overflowing_anchor_resolves_by_default() {
        let table = PositionTable::empty().with_anchor("wide", Anchor::new(0.8, 0.1, 0.5));
        let rect = table.resolve("wide", classic_canvas()).unwrap();
        // 0.8 + 0.5 > 1.0: the rectangle runs off-canvas, and that's allowed.
        assert!(rect.left + rect.width > classic_canvas().width);
    }

    #[test]
    fn test_validate_rejects_overflowing_anchor() {
        let table = PositionTable::empty().with_anchor("wide", Anchor::new(0.8, 0.1, 0.5));
        let err = table.validate().unwrap_err();
        assert!(matches!(err, LayoutError::InvalidAnchor { name, .. } if name == "wide"));
    }

    #[test]
    fn test_validate_accepts_standard_table() {
        PositionTable::standard().validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_negative_fraction() {
        let table = PositionTable::empty().with_anchor("odd", Anchor::new(-0.1, 0.0, 0.2));
        assert!(table.validate().is_err());
    }
}
