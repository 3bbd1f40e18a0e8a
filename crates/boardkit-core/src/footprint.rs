//! Footprint definition container and footprint-bound items

use crate::geometry::{ShapeGeometry, Vector2Iu};
use crate::item::{DesignItem, ShapeItem, TextContent};
use crate::layer::Layer;
use crate::text::TextAttributes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A reusable component footprint definition.
///
/// Like [`crate::Board`], a footprint only receives items through its
/// explicit `add_*` methods; item manufacture happens elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Footprint {
    id: Uuid,
    reference: String,
    shapes: Vec<FootprintShape>,
    texts: Vec<FootprintText>,
}

impl Footprint {
    pub fn new(reference: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            reference: reference.to_string(),
            shapes: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Reference designator, e.g. `U1`.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn add_shape(&mut self, shape: FootprintShape) {
        self.shapes.push(shape);
    }

    pub fn add_text(&mut self, text: FootprintText) {
        self.texts.push(text);
    }

    pub fn shapes(&self) -> &[FootprintShape] {
        &self.shapes
    }

    pub fn texts(&self) -> &[FootprintText] {
        &self.texts
    }
}

/// A graphical shape belonging to a footprint definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintShape {
    id: Uuid,
    footprint: Uuid,
    layer: Layer,
    geometry: ShapeGeometry,
    width: i32,
}

impl FootprintShape {
    /// Allocate an empty shape bound to the footprint identified by
    /// `footprint`, placed on `layer`.
    pub fn new(footprint: Uuid, layer: Layer) -> Self {
        Self {
            id: Uuid::new_v4(),
            footprint,
            layer,
            geometry: ShapeGeometry::default(),
            width: 0,
        }
    }
}

impl DesignItem for FootprintShape {
    fn id(&self) -> Uuid {
        self.id
    }

    fn parent(&self) -> Uuid {
        self.footprint
    }

    fn layer(&self) -> Layer {
        self.layer
    }

    fn set_layer(&mut self, layer: Layer) {
        self.layer = layer;
    }
}

impl ShapeItem for FootprintShape {
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

/// A text item belonging to a footprint definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintText {
    id: Uuid,
    footprint: Uuid,
    layer: Layer,
    text: String,
    position: Vector2Iu,
    attributes: TextAttributes,
}

impl FootprintText {
    /// Allocate an empty text item bound to the footprint identified by
    /// `footprint`, placed on `layer`.
    pub fn new(footprint: Uuid, layer: Layer) -> Self {
        Self {
            id: Uuid::new_v4(),
            footprint,
            layer,
            text: String::new(),
            position: Vector2Iu::default(),
            attributes: TextAttributes::default(),
        }
    }
}

impl DesignItem for FootprintText {
    fn id(&self) -> Uuid {
        self.id
    }

    fn parent(&self) -> Uuid {
        self.footprint
    }

    fn layer(&self) -> Layer {
        self.layer
    }

    fn set_layer(&mut self, layer: Layer) {
        self.layer = layer;
    }
}

impl TextContent for FootprintText {
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
