//! Text sizing and justification attributes

use serde::{Deserialize, Serialize};

/// Horizontal text justification relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

impl Default for TextHAlign {
    fn default() -> Self {
        TextHAlign::Center
    }
}

/// Vertical text justification relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextVAlign {
    Top,
    Center,
    Bottom,
}

impl Default for TextVAlign {
    fn default() -> Self {
        TextVAlign::Center
    }
}

/// Character sizing and orientation shared by all text items.
///
/// Linear fields are in internal units; `orientation_degrees` rotates
/// counter-clockwise around the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextAttributes {
    pub height: i32,
    pub width: i32,
    pub thickness: i32,
    pub orientation_degrees: f64,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
}

impl Default for TextAttributes {
    /// 1.27 mm character cell with a zero-width stroke.
    fn default() -> Self {
        Self {
            height: 1_270_000,
            width: 1_270_000,
            thickness: 0,
            orientation_degrees: 0.0,
            h_align: TextHAlign::default(),
            v_align: TextVAlign::default(),
        }
    }
}
