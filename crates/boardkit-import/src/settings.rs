//! Import session configuration

use crate::error::SettingsError;
use boardkit_core::geometry::Vector2Mm;
use serde::{Deserialize, Serialize};

/// Transform parameters for one import session.
///
/// Fixed for the session: a uniform scale factor, a millimeter-space
/// translation applied before scaling, and the fallback stroke width (in
/// internal units) substituted for the negative "unspecified" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImportSettings {
    scale: f64,
    offset: Vector2Mm,
    default_line_width: i32,
}

impl ImportSettings {
    /// Validates at construction: a scale that is not finite and strictly
    /// positive is rejected immediately rather than surfacing later as
    /// garbage coordinates.
    pub fn new(
        scale: f64,
        offset: Vector2Mm,
        default_line_width: i32,
    ) -> Result<Self, SettingsError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(SettingsError::InvalidScale { scale });
        }
        Ok(Self {
            scale,
            offset,
            default_line_width,
        })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> Vector2Mm {
        self.offset
    }

    /// Fallback stroke width in internal units.
    pub fn default_line_width(&self) -> i32 {
        self.default_line_width
    }
}

impl Default for ImportSettings {
    /// Unit scale, no offset, 0.2 mm default stroke.
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Vector2Mm::default(),
            default_line_width: 200_000,
        }
    }
}
