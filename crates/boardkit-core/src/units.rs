//! Internal coordinate resolution
//!
//! The design database stores all geometry on a fixed integer grid of
//! 1,000,000 internal units per millimeter. Values arriving in millimeters
//! are quantized exactly once on the way in.

/// Internal units per millimeter.
pub const IU_PER_MM: f64 = 1_000_000.0;

/// Quantize a millimeter value to internal units.
///
/// Rounds to the nearest internal unit, ties away from zero.
pub fn from_mm(value_mm: f64) -> i32 {
    (value_mm * IU_PER_MM).round() as i32
}

/// Convert an internal-unit value back to millimeters.
pub fn to_mm(value_iu: i32) -> f64 {
    f64::from(value_iu) / IU_PER_MM
}
