//! Import target backends
//!
//! The factory hooks the generic importer delegates item allocation to.
//! A backend knows how to allocate an empty target-typed item and which
//! layers its target accepts; it owns no geometry logic and never inserts
//! into the container.

use crate::error::ImportError;
use boardkit_core::board::{Board, BoardShape, BoardText};
use boardkit_core::footprint::{Footprint, FootprintShape, FootprintText};
use boardkit_core::item::{DesignItem, ShapeItem, TextContent};
use boardkit_core::layer::Layer;
use uuid::Uuid;

/// Item-allocation capability supplied by a concrete import target.
///
/// Implementations validate the layer for their target type; this is the
/// one place layer-for-target checking belongs.
pub trait ImportTarget {
    type Shape: ShapeItem;
    type Text: DesignItem + TextContent;

    /// Allocate an empty shape item on `layer`, bound to the target
    /// container.
    fn new_shape(&self, layer: Layer) -> Result<Self::Shape, ImportError>;

    /// Allocate an empty text item on `layer`, bound to the target
    /// container.
    fn new_text(&self, layer: Layer) -> Result<Self::Text, ImportError>;
}

/// Backend manufacturing items bound to a board design.
///
/// Captures the board's identity and stackup at construction; items it
/// allocates carry the board id as their parent.
#[derive(Debug, Clone, Copy)]
pub struct BoardTarget {
    board: Uuid,
    copper_layers: u8,
}

impl BoardTarget {
    pub fn new(board: &Board) -> Self {
        Self {
            board: board.id(),
            copper_layers: board.copper_layers(),
        }
    }

    fn check_layer(&self, layer: Layer) -> Result<(), ImportError> {
        if layer.enabled_with_copper_count(self.copper_layers) {
            Ok(())
        } else {
            Err(ImportError::LayerNotEnabled { layer })
        }
    }
}

impl ImportTarget for BoardTarget {
    type Shape = BoardShape;
    type Text = BoardText;

    fn new_shape(&self, layer: Layer) -> Result<BoardShape, ImportError> {
        self.check_layer(layer)?;
        Ok(BoardShape::new(self.board, layer))
    }

    fn new_text(&self, layer: Layer) -> Result<BoardText, ImportError> {
        self.check_layer(layer)?;
        Ok(BoardText::new(self.board, layer))
    }
}

/// Backend manufacturing items bound to a footprint definition.
#[derive(Debug, Clone, Copy)]
pub struct FootprintTarget {
    footprint: Uuid,
}

impl FootprintTarget {
    pub fn new(footprint: &Footprint) -> Self {
        Self {
            footprint: footprint.id(),
        }
    }

    fn check_layer(layer: Layer) -> Result<(), ImportError> {
        if layer.allowed_in_footprint() {
            Ok(())
        } else {
            Err(ImportError::LayerNotAllowed { layer })
        }
    }
}

impl ImportTarget for FootprintTarget {
    type Shape = FootprintShape;
    type Text = FootprintText;

    fn new_shape(&self, layer: Layer) -> Result<FootprintShape, ImportError> {
        Self::check_layer(layer)?;
        Ok(FootprintShape::new(self.footprint, layer))
    }

    fn new_text(&self, layer: Layer) -> Result<FootprintText, ImportError> {
        Self::check_layer(layer)?;
        Ok(FootprintText::new(self.footprint, layer))
    }
}
