//! # BoardKit Core
//!
//! Design-database model for BoardKit.
//! Provides the fixed internal coordinate grid, drawing layers, the board
//! and footprint containers, and the graphical items they hold.

pub mod board;
pub mod footprint;
pub mod geometry;
pub mod item;
pub mod layer;
pub mod text;
pub mod units;

pub use board::{Board, BoardShape, BoardText};
pub use footprint::{Footprint, FootprintShape, FootprintText};
pub use geometry::{ShapeGeometry, Vector2Iu, Vector2Mm};
pub use item::{DesignItem, ShapeItem, TextContent};
pub use layer::Layer;
pub use text::{TextAttributes, TextHAlign, TextVAlign};
