//! Coordinate and line-width mapping
//!
//! Pure conversion from imported millimeter space onto the internal
//! integer grid, applying the session scale and offset. Rounding is
//! nearest with ties away from zero, applied exactly once per axis.

use crate::settings::ImportSettings;
use boardkit_core::geometry::{Vector2Iu, Vector2Mm};
use boardkit_core::units;

/// Stateless transform functions over one session's [`ImportSettings`].
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    settings: ImportSettings,
}

impl CoordinateMapper {
    pub fn new(settings: ImportSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ImportSettings {
        &self.settings
    }

    /// Convert an imported millimeter coordinate to an internal point:
    /// `round((p + offset) * scale)` on each axis.
    pub fn map_coordinate(&self, point_mm: Vector2Mm) -> Vector2Iu {
        let shifted = point_mm + self.settings.offset();
        Vector2Iu::new(
            units::from_mm(shifted.x * self.settings.scale()),
            units::from_mm(shifted.y * self.settings.scale()),
        )
    }

    /// Convert a millimeter length (radius, text height). Lengths are
    /// scaled but never offset.
    pub fn map_length(&self, length_mm: f64) -> i32 {
        units::from_mm(length_mm * self.settings.scale())
    }

    /// Convert an imported line width. A negative width is the
    /// "unspecified" sentinel and yields the session default. Zero and
    /// near-zero widths pass through unclamped; hairline handling is a
    /// rendering concern.
    pub fn map_line_width(&self, width_mm: f64) -> i32 {
        if width_mm < 0.0 {
            return self.settings.default_line_width();
        }
        self.map_length(width_mm)
    }
}
