//! # BoardKit Import
//!
//! Adaptation layer between format-specific vector-graphics readers
//! (DXF, SVG and friends) and the BoardKit design database. A reader
//! hands over already-parsed millimeter-space primitives; this crate maps
//! them onto the internal integer grid and manufactures board- or
//! footprint-bound items out of them.
//!
//! ## Components
//!
//! - [`ImportSettings`]: per-session scale, offset and default line width
//! - [`CoordinateMapper`]: pure millimeter-to-internal-unit conversion
//! - [`GraphicsImporter`]: one `add_*` operation per primitive kind
//! - [`BoardTarget`] / [`FootprintTarget`]: interchangeable item factories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use boardkit_core::{Board, Layer, Vector2Mm};
//! use boardkit_import::{BoardTarget, GraphicsImporter, ImportSettings};
//!
//! let mut board = Board::new(2);
//! let mut importer =
//!     GraphicsImporter::new(BoardTarget::new(&board), ImportSettings::default());
//!
//! importer.set_layer(Layer::BoardOutline);
//! let outline = importer.add_line(
//!     Vector2Mm::new(0.0, 0.0),
//!     Vector2Mm::new(100.0, 0.0),
//!     -1.0,
//! )?;
//!
//! // Insertion stays with the caller.
//! board.add_shape(outline);
//! ```

pub mod error;
pub mod importer;
pub mod mapper;
pub mod settings;
pub mod target;

pub use error::{ImportError, SettingsError};
pub use importer::{GraphicsImporter, Imported, Primitive};
pub use mapper::CoordinateMapper;
pub use settings::ImportSettings;
pub use target::{BoardTarget, FootprintTarget, ImportTarget};
