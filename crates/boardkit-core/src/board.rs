//! Board design container and board-bound items

use crate::geometry::{ShapeGeometry, Vector2Iu};
use crate::item::{DesignItem, ShapeItem, TextContent};
use crate::layer::Layer;
use crate::text::TextAttributes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Smallest supported copper stackup (front and back only).
pub const MIN_COPPER_LAYERS: u8 = 2;
/// Largest supported copper stackup (four inner layers).
pub const MAX_COPPER_LAYERS: u8 = 6;

/// A complete circuit-board design.
///
/// Owns the graphical items placed directly on the board. Items are
/// manufactured elsewhere and handed over through [`Board::add_shape`] and
/// [`Board::add_text`]; nothing inserts into a board implicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    id: Uuid,
    copper_layers: u8,
    shapes: Vec<BoardShape>,
    texts: Vec<BoardText>,
}

impl Board {
    pub fn new(copper_layers: u8) -> Self {
        let clamped = copper_layers.clamp(MIN_COPPER_LAYERS, MAX_COPPER_LAYERS);
        if clamped != copper_layers {
            tracing::warn!(
                "Unsupported copper layer count {}, clamping to {}",
                copper_layers,
                clamped
            );
        }
        Self {
            id: Uuid::new_v4(),
            copper_layers: clamped,
            shapes: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn copper_layers(&self) -> u8 {
        self.copper_layers
    }

    /// Whether this board's stackup carries `layer`.
    pub fn is_layer_enabled(&self, layer: Layer) -> bool {
        layer.enabled_with_copper_count(self.copper_layers)
    }

    pub fn add_shape(&mut self, shape: BoardShape) {
        self.shapes.push(shape);
    }

    pub fn add_text(&mut self, text: BoardText) {
        self.texts.push(text);
    }

    pub fn shapes(&self) -> &[BoardShape] {
        &self.shapes
    }

    pub fn texts(&self) -> &[BoardText] {
        &self.texts
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(MIN_COPPER_LAYERS)
    }
}

/// A graphical shape placed directly on a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardShape {
    id: Uuid,
    board: Uuid,
    layer: Layer,
    geometry: ShapeGeometry,
    width: i32,
}

impl BoardShape {
    /// Allocate an empty shape bound to the board identified by `board`,
    /// placed on `layer`.
    pub fn new(board: Uuid, layer: Layer) -> Self {
        Self {
            id: Uuid::new_v4(),
            board,
            layer,
            geometry: ShapeGeometry::default(),
            width: 0,
        }
    }
}

impl DesignItem for BoardShape {
    fn id(&self) -> Uuid {
        self.id
    }

    fn parent(&self) -> Uuid {
        self.board
    }

    fn layer(&self) -> Layer {
        self.layer
    }

    fn set_layer(&mut self, layer: Layer) {
        self.layer = layer;
    }
}

impl ShapeItem for BoardShape {
    fn geometry(&self) -> &ShapeGeometry {
        &self.geometry
    }

    fn set_geometry(&mut self, geometry: ShapeGeometry) {
        self.geometry = geometry;
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn set_width(&mut self, width: i32) {
        self.width = width;
    }
}

/// A free text item placed directly on a board.
///
/// One object behind two views: [`DesignItem`] for identity and layer,
/// [`TextContent`] for the string and sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardText {
    id: Uuid,
    board: Uuid,
    layer: Layer,
    text: String,
    position: Vector2Iu,
    attributes: TextAttributes,
}

impl BoardText {
    /// Allocate an empty text item bound to the board identified by
    /// `board`, placed on `layer`.
    pub fn new(board: Uuid, layer: Layer) -> Self {
        Self {
            id: Uuid::new_v4(),
            board,
            layer,
            text: String::new(),
            position: Vector2Iu::default(),
            attributes: TextAttributes::default(),
        }
    }
}

impl DesignItem for BoardText {
    fn id(&self) -> Uuid {
        self.id
    }

    fn parent(&self) -> Uuid {
        self.board
    }

    fn layer(&self) -> Layer {
        self.layer
    }

    fn set_layer(&mut self, layer: Layer) {
        self.layer = layer;
    }
}

impl TextContent for BoardText {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn position(&self) -> Vector2Iu {
        self.position
    }

    fn set_position(&mut self, position: Vector2Iu) {
        self.position = position;
    }

    fn attributes(&self) -> &TextAttributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut TextAttributes {
        &mut self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copper_count_is_clamped() {
        assert_eq!(Board::new(0).copper_layers(), MIN_COPPER_LAYERS);
        assert_eq!(Board::new(4).copper_layers(), 4);
        assert_eq!(Board::new(64).copper_layers(), MAX_COPPER_LAYERS);
    }

    #[test]
    fn test_layer_enablement_follows_stackup() {
        let two_layer = Board::new(2);
        assert!(two_layer.is_layer_enabled(Layer::FrontCopper));
        assert!(!two_layer.is_layer_enabled(Layer::Inner1Copper));

        let four_layer = Board::new(4);
        assert!(four_layer.is_layer_enabled(Layer::Inner2Copper));
        assert!(!four_layer.is_layer_enabled(Layer::Inner3Copper));
    }

    #[test]
    fn test_items_record_their_board() {
        let board = Board::new(2);
        let shape = BoardShape::new(board.id(), Layer::BoardOutline);
        assert_eq!(shape.parent(), board.id());
        assert_eq!(shape.layer(), Layer::BoardOutline);
        assert_eq!(shape.width(), 0);
    }

    #[test]
    fn test_insertion_is_explicit() {
        let mut board = Board::new(2);
        assert!(board.shapes().is_empty());

        let shape = BoardShape::new(board.id(), Layer::UserDrawings);
        board.add_shape(shape);
        assert_eq!(board.shapes().len(), 1);
    }

    #[test]
    fn test_text_views_share_one_object() {
        let board = Board::new(2);
        let mut item = BoardText::new(board.id(), Layer::FrontSilkscreen);

        // Mutate through the text view, observe through the item view and
        // back again.
        item.set_text("REF**");
        item.set_layer(Layer::BackSilkscreen);
        assert_eq!(item.text(), "REF**");
        assert_eq!(item.layer(), Layer::BackSilkscreen);

        item.attributes_mut().height = 2_000_000;
        assert_eq!(item.attributes().height, 2_000_000);
    }

    #[test]
    fn test_board_serialization_round_trip() {
        let mut board = Board::new(4);
        let mut shape = BoardShape::new(board.id(), Layer::UserComments);
        shape.set_width(150_000);
        board.add_shape(shape);

        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.copper_layers(), 4);
        assert_eq!(restored.shapes().len(), 1);
        assert_eq!(restored.shapes()[0].width(), 150_000);
    }
}
