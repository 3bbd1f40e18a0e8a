//! Item view traits
//!
//! A text item is one owned object seen through two views: the generic
//! [`DesignItem`] handle used for identity and placement, and the narrower
//! [`TextContent`] handle used for string and sizing access. Both views
//! observe the same state; a mutation through one is visible through the
//! other. Shape items expose [`DesignItem`] plus [`ShapeItem`].

use crate::geometry::{ShapeGeometry, Vector2Iu};
use crate::layer::Layer;
use crate::text::TextAttributes;
use uuid::Uuid;

/// Generic handle onto any design item: identity and layer placement.
pub trait DesignItem {
    /// Identifier of this item.
    fn id(&self) -> Uuid;

    /// Identifier of the container this item is bound to.
    fn parent(&self) -> Uuid;

    fn layer(&self) -> Layer;

    fn set_layer(&mut self, layer: Layer);
}

/// Mutable access to the geometric payload of a shape item.
pub trait ShapeItem: DesignItem {
    fn geometry(&self) -> &ShapeGeometry;

    fn set_geometry(&mut self, geometry: ShapeGeometry);

    /// Stroke width in internal units. Zero means hairline.
    fn width(&self) -> i32;

    fn set_width(&mut self, width: i32);
}

/// Narrow view onto the textual part of a text item.
pub trait TextContent {
    fn text(&self) -> &str;

    fn set_text(&mut self, text: &str);

    /// Anchor position in internal units.
    fn position(&self) -> Vector2Iu;

    fn set_position(&mut self, position: Vector2Iu);

    fn attributes(&self) -> &TextAttributes;

    fn attributes_mut(&mut self) -> &mut TextAttributes;
}
