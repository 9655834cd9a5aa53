use nalgebra::{Point2, Point3, Vector2};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShapeId(pub usize);

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct LabelId(pub usize);

/// Something we can draw bodies on.
///
/// Coordinates are in surface space: the origin is the top-left corner, x
/// grows to the right, and y grows downwards. Shapes are filled circles and
/// labels are single lines of text; both are positioned by their top-left
/// corner.
pub trait Surface {
    /// Width and height of the drawable area
    fn size(&self) -> Vector2<f64>;

    fn add_shape(&mut self, diameter: f64, color: Point3<f32>) -> ShapeId;
    fn add_label(&mut self, text: &str) -> LabelId;

    /// Rendered width and height
    fn shape_extent(&self, id: ShapeId) -> Vector2<f64>;
    fn label_extent(&self, id: LabelId) -> Vector2<f64>;

    fn place_shape(&mut self, id: ShapeId, top_left: Point2<f64>);
    fn place_label(&mut self, id: LabelId, top_left: Point2<f64>);
}

/// Converts a display-space position (origin at the star) to surface space.
pub fn to_screen(size: Vector2<f64>, scaled: Point2<f64>) -> Point2<f64> {
    Point2::from(size / 2.0) + scaled.coords
}

/// Rough size of a line of text, for surfaces that can't measure it. Glyphs
/// are assumed to be about half as wide as they are tall.
pub fn estimate_label_extent(text: &str, font_size: f64) -> Vector2<f64> {
    let num_chars = text.chars().count() as f64;
    Vector2::new(num_chars * font_size * 0.5, font_size)
}
