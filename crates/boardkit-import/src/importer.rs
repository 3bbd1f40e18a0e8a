//! Generic graphics importer
//!
//! One `add_*` operation per imported primitive kind. Each call maps every
//! coordinate and the width through the session mapper, asks the backend
//! for an empty target-typed item on the current layer, populates it and
//! returns it. The importer never inserts into the owning design; callers
//! collect the returned items and finalize them.
//!
//! The current target layer is shared mutable state: every `add_*` call
//! reads the value current at that call. The intended usage pattern is
//! strictly sequential on one thread - set layer, add N primitives,
//! change layer, add more.

use crate::error::ImportError;
use crate::mapper::CoordinateMapper;
use crate::settings::ImportSettings;
use crate::target::ImportTarget;
use boardkit_core::geometry::{ShapeGeometry, Vector2Iu, Vector2Mm};
use boardkit_core::item::{ShapeItem, TextContent};
use boardkit_core::layer::Layer;
use boardkit_core::text::{TextHAlign, TextVAlign};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One already-parsed vector-graphics primitive in millimeter space.
///
/// Produced by a format-specific reader and consumed by exactly one
/// importer call. A negative width field means "use the session default".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Line {
        start: Vector2Mm,
        end: Vector2Mm,
        width: f64,
    },
    Circle {
        center: Vector2Mm,
        radius: f64,
        width: f64,
        filled: bool,
    },
    Arc {
        center: Vector2Mm,
        start: Vector2Mm,
        sweep_degrees: f64,
        width: f64,
    },
    Polygon {
        vertices: Vec<Vector2Mm>,
        width: f64,
    },
    Text {
        origin: Vector2Mm,
        text: String,
        height: f64,
        width: f64,
        thickness: f64,
        orientation_degrees: f64,
        h_align: TextHAlign,
        v_align: TextVAlign,
    },
    Spline {
        start: Vector2Mm,
        control1: Vector2Mm,
        control2: Vector2Mm,
        end: Vector2Mm,
        width: f64,
    },
}

/// Output of one primitive conversion: a shape item or a text item.
#[derive(Debug, Clone, PartialEq)]
pub enum Imported<S, T> {
    Shape(S),
    Text(T),
}

/// Converts imported primitives into items for one target container.
///
/// The backend is selected at construction and fixed for the importer's
/// lifetime; the layer and the mapper are shared by every operation.
#[derive(Debug)]
pub struct GraphicsImporter<T: ImportTarget> {
    target: T,
    mapper: CoordinateMapper,
    layer: Layer,
}

impl<T: ImportTarget> GraphicsImporter<T> {
    pub fn new(target: T, settings: ImportSettings) -> Self {
        Self {
            target,
            mapper: CoordinateMapper::new(settings),
            layer: Layer::default(),
        }
    }

    /// Set the target layer for subsequently imported items.
    pub fn set_layer(&mut self, layer: Layer) {
        self.layer = layer;
    }

    /// Return the target layer for imported items.
    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Convert an imported millimeter coordinate to an internal point,
    /// according to the session scale and offset. Exposed for callers
    /// that need the same transform outside the `add_*` path.
    pub fn map_coordinate(&self, point_mm: Vector2Mm) -> Vector2Iu {
        self.mapper.map_coordinate(point_mm)
    }

    /// Convert an imported line width to internal units; negative widths
    /// yield the session default.
    pub fn map_line_width(&self, width_mm: f64) -> i32 {
        self.mapper.map_line_width(width_mm)
    }

    fn make_shape(
        &self,
        geometry: ShapeGeometry,
        width_mm: f64,
    ) -> Result<T::Shape, ImportError> {
        let mut shape = self.target.new_shape(self.layer)?;
        shape.set_geometry(geometry);
        shape.set_width(self.mapper.map_line_width(width_mm));
        Ok(shape)
    }

    /// Import a straight line segment.
    pub fn add_line(
        &self,
        start: Vector2Mm,
        end: Vector2Mm,
        width: f64,
    ) -> Result<T::Shape, ImportError> {
        self.make_shape(
            ShapeGeometry::Segment {
                start: self.map_coordinate(start),
                end: self.map_coordinate(end),
            },
            width,
        )
    }

    /// Import a circle. The radius is a length: scaled, never offset.
    pub fn add_circle(
        &self,
        center: Vector2Mm,
        radius: f64,
        width: f64,
        filled: bool,
    ) -> Result<T::Shape, ImportError> {
        self.make_shape(
            ShapeGeometry::Circle {
                center: self.map_coordinate(center),
                radius: self.mapper.map_length(radius),
                filled,
            },
            width,
        )
    }

    /// Import a circular arc starting at `start` and sweeping
    /// `sweep_degrees` around `center`.
    pub fn add_arc(
        &self,
        center: Vector2Mm,
        start: Vector2Mm,
        sweep_degrees: f64,
        width: f64,
    ) -> Result<T::Shape, ImportError> {
        self.make_shape(
            ShapeGeometry::Arc {
                center: self.map_coordinate(center),
                start: self.map_coordinate(start),
                sweep_degrees,
            },
            width,
        )
    }

    /// Import a closed polygon outline. An empty vertex sequence produces
    /// a degenerate but well-formed empty polygon item.
    pub fn add_polygon(
        &self,
        vertices: &[Vector2Mm],
        width: f64,
    ) -> Result<T::Shape, ImportError> {
        if vertices.is_empty() {
            debug!("Importing a polygon with no vertices");
        }
        let vertices = vertices
            .iter()
            .map(|vertex| self.map_coordinate(*vertex))
            .collect();
        self.make_shape(ShapeGeometry::Polygon { vertices }, width)
    }

    /// Import a text run. Height and character width are lengths; the
    /// stroke thickness accepts the negative sentinel like a line width.
    #[allow(clippy::too_many_arguments)]
    pub fn add_text(
        &self,
        origin: Vector2Mm,
        text: &str,
        height: f64,
        width: f64,
        thickness: f64,
        orientation_degrees: f64,
        h_align: TextHAlign,
        v_align: TextVAlign,
    ) -> Result<T::Text, ImportError> {
        let mut item = self.target.new_text(self.layer)?;
        item.set_text(text);
        item.set_position(self.map_coordinate(origin));

        let attributes = item.attributes_mut();
        attributes.height = self.mapper.map_length(height);
        attributes.width = self.mapper.map_length(width);
        attributes.thickness = self.mapper.map_line_width(thickness);
        attributes.orientation_degrees = orientation_degrees;
        attributes.h_align = h_align;
        attributes.v_align = v_align;
        Ok(item)
    }

    /// Import a cubic Bezier span.
    pub fn add_spline(
        &self,
        start: Vector2Mm,
        control1: Vector2Mm,
        control2: Vector2Mm,
        end: Vector2Mm,
        width: f64,
    ) -> Result<T::Shape, ImportError> {
        self.make_shape(
            ShapeGeometry::Bezier {
                start: self.map_coordinate(start),
                control1: self.map_coordinate(control1),
                control2: self.map_coordinate(control2),
                end: self.map_coordinate(end),
            },
            width,
        )
    }

    /// Dispatch one parsed primitive to the matching `add_*` operation.
    pub fn add_primitive(
        &self,
        primitive: &Primitive,
    ) -> Result<Imported<T::Shape, T::Text>, ImportError> {
        match primitive {
            Primitive::Line { start, end, width } => {
                self.add_line(*start, *end, *width).map(Imported::Shape)
            }
            Primitive::Circle {
                center,
                radius,
                width,
                filled,
            } => self
                .add_circle(*center, *radius, *width, *filled)
                .map(Imported::Shape),
            Primitive::Arc {
                center,
                start,
                sweep_degrees,
                width,
            } => self
                .add_arc(*center, *start, *sweep_degrees, *width)
                .map(Imported::Shape),
            Primitive::Polygon { vertices, width } => {
                self.add_polygon(vertices, *width).map(Imported::Shape)
            }
            Primitive::Text {
                origin,
                text,
                height,
                width,
                thickness,
                orientation_degrees,
                h_align,
                v_align,
            } => self
                .add_text(
                    *origin,
                    text,
                    *height,
                    *width,
                    *thickness,
                    *orientation_degrees,
                    *h_align,
                    *v_align,
                )
                .map(Imported::Text),
            Primitive::Spline {
                start,
                control1,
                control2,
                end,
                width,
            } => self
                .add_spline(*start, *control1, *control2, *end, *width)
                .map(Imported::Shape),
        }
    }

    /// Feed a primitive sequence through [`Self::add_primitive`],
    /// collecting the produced items for the caller to insert. Stops at
    /// the first failing primitive.
    pub fn import_all<'p>(
        &self,
        primitives: impl IntoIterator<Item = &'p Primitive>,
    ) -> Result<Vec<Imported<T::Shape, T::Text>>, ImportError> {
        let items = primitives
            .into_iter()
            .map(|primitive| self.add_primitive(primitive))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Imported {} primitives", items.len());
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::BoardTarget;
    use boardkit_core::board::Board;
    use boardkit_core::item::DesignItem;

    fn board_importer(board: &Board) -> GraphicsImporter<BoardTarget> {
        GraphicsImporter::new(BoardTarget::new(board), ImportSettings::default())
    }

    #[test]
    fn test_layer_snapshot_per_call() {
        let board = Board::new(2);
        let mut importer = board_importer(&board);

        importer.set_layer(Layer::FrontSilkscreen);
        let first = importer
            .add_line(Vector2Mm::new(0.0, 0.0), Vector2Mm::new(1.0, 0.0), -1.0)
            .unwrap();

        importer.set_layer(Layer::BackSilkscreen);
        let second = importer
            .add_line(Vector2Mm::new(0.0, 0.0), Vector2Mm::new(1.0, 0.0), -1.0)
            .unwrap();

        assert_eq!(first.layer(), Layer::FrontSilkscreen);
        assert_eq!(second.layer(), Layer::BackSilkscreen);
    }

    #[test]
    fn test_default_layer() {
        let board = Board::new(2);
        let importer = board_importer(&board);
        assert_eq!(importer.layer(), Layer::UserDrawings);
    }

    #[test]
    fn test_circle_worked_example() {
        // scale 1.0, offset (0, 0): (10, 10) mm, radius 5 mm, default width.
        let board = Board::new(2);
        let importer = board_importer(&board);

        let circle = importer
            .add_circle(Vector2Mm::new(10.0, 10.0), 5.0, -1.0, false)
            .unwrap();

        assert_eq!(
            *circle.geometry(),
            ShapeGeometry::Circle {
                center: Vector2Iu::new(10_000_000, 10_000_000),
                radius: 5_000_000,
                filled: false,
            }
        );
        assert_eq!(
            circle.width(),
            ImportSettings::default().default_line_width()
        );
    }

    #[test]
    fn test_empty_polygon_is_degenerate_not_an_error() {
        let board = Board::new(2);
        let importer = board_importer(&board);

        let polygon = importer.add_polygon(&[], 0.1).unwrap();
        assert_eq!(
            *polygon.geometry(),
            ShapeGeometry::Polygon { vertices: vec![] }
        );
        assert_eq!(polygon.width(), 100_000);
    }

    #[test]
    fn test_zero_length_line_is_degenerate_not_an_error() {
        let board = Board::new(2);
        let importer = board_importer(&board);

        let point = Vector2Mm::new(4.2, -4.2);
        let line = importer.add_line(point, point, 0.0).unwrap();
        assert_eq!(
            *line.geometry(),
            ShapeGeometry::Segment {
                start: Vector2Iu::new(4_200_000, -4_200_000),
                end: Vector2Iu::new(4_200_000, -4_200_000),
            }
        );
        assert_eq!(line.width(), 0);
    }

    #[test]
    fn test_text_population() {
        let board = Board::new(2);
        let mut importer = board_importer(&board);
        importer.set_layer(Layer::UserComments);

        let item = importer
            .add_text(
                Vector2Mm::new(1.0, 2.0),
                "Imported note",
                2.0,
                1.5,
                -1.0,
                90.0,
                TextHAlign::Left,
                TextVAlign::Bottom,
            )
            .unwrap();

        assert_eq!(item.text(), "Imported note");
        assert_eq!(item.position(), Vector2Iu::new(1_000_000, 2_000_000));
        assert_eq!(item.layer(), Layer::UserComments);

        let attributes = item.attributes();
        assert_eq!(attributes.height, 2_000_000);
        assert_eq!(attributes.width, 1_500_000);
        // Sentinel thickness resolves like a line width.
        assert_eq!(
            attributes.thickness,
            ImportSettings::default().default_line_width()
        );
        assert_eq!(attributes.orientation_degrees, 90.0);
        assert_eq!(attributes.h_align, TextHAlign::Left);
        assert_eq!(attributes.v_align, TextVAlign::Bottom);
    }

    #[test]
    fn test_spline_control_points_are_mapped() {
        let board = Board::new(2);
        let importer = GraphicsImporter::new(
            BoardTarget::new(&board),
            ImportSettings::new(2.0, Vector2Mm::new(1.0, 0.0), 0).unwrap(),
        );

        let spline = importer
            .add_spline(
                Vector2Mm::new(0.0, 0.0),
                Vector2Mm::new(1.0, 1.0),
                Vector2Mm::new(2.0, 1.0),
                Vector2Mm::new(3.0, 0.0),
                0.25,
            )
            .unwrap();

        assert_eq!(
            *spline.geometry(),
            ShapeGeometry::Bezier {
                start: Vector2Iu::new(2_000_000, 0),
                control1: Vector2Iu::new(4_000_000, 2_000_000),
                control2: Vector2Iu::new(6_000_000, 2_000_000),
                end: Vector2Iu::new(8_000_000, 0),
            }
        );
        // Width sees the scale: 0.25 mm * 2.
        assert_eq!(spline.width(), 500_000);
    }

    #[test]
    fn test_add_primitive_dispatch() {
        let board = Board::new(2);
        let importer = board_importer(&board);

        let shape = importer
            .add_primitive(&Primitive::Circle {
                center: Vector2Mm::new(0.0, 0.0),
                radius: 1.0,
                width: -1.0,
                filled: true,
            })
            .unwrap();
        assert!(matches!(shape, Imported::Shape(_)));

        let text = importer
            .add_primitive(&Primitive::Text {
                origin: Vector2Mm::new(0.0, 0.0),
                text: "x".to_string(),
                height: 1.0,
                width: 1.0,
                thickness: -1.0,
                orientation_degrees: 0.0,
                h_align: TextHAlign::Center,
                v_align: TextVAlign::Center,
            })
            .unwrap();
        assert!(matches!(text, Imported::Text(_)));
    }

    #[test]
    fn test_import_all_stops_at_first_error() {
        let board = Board::new(2);
        let mut importer = board_importer(&board);
        importer.set_layer(Layer::Inner1Copper);

        let primitives = vec![Primitive::Line {
            start: Vector2Mm::new(0.0, 0.0),
            end: Vector2Mm::new(1.0, 1.0),
            width: -1.0,
        }];
        let result = importer.import_all(&primitives);
        assert_eq!(
            result,
            Err(ImportError::LayerNotEnabled {
                layer: Layer::Inner1Copper
            })
        );
    }
}
