use nalgebra::{Point2, Point3, Vector2};

use super::surface::{estimate_label_extent, LabelId, ShapeId, Surface};
use crate::consts::LABEL_FONT_SIZE;

/// A surface that just remembers what was put where. Useful for tests, and
/// for exporting a frame to an image.
#[derive(Debug, Clone)]
pub struct Sheet {
    size: Vector2<f64>,
    font_size: f64,
    shapes: Vec<SheetShape>,
    labels: Vec<SheetLabel>,
}

#[derive(Debug, Clone)]
pub struct SheetShape {
    pub diameter: f64,
    pub color: Point3<f32>,
    pub top_left: Point2<f64>,
}

#[derive(Debug, Clone)]
pub struct SheetLabel {
    pub text: String,
    pub extent: Vector2<f64>,
    pub top_left: Point2<f64>,
}

impl SheetShape {
    pub fn center(&self) -> Point2<f64> {
        self.top_left + Vector2::repeat(self.diameter / 2.0)
    }
}

impl Sheet {
    pub fn new(width: f64, height: f64) -> Self {
        Sheet {
            size: Vector2::new(width, height),
            font_size: LABEL_FONT_SIZE,
            shapes: vec![],
            labels: vec![],
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.size = Vector2::new(width, height);
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn shape(&self, id: ShapeId) -> &SheetShape {
        &self.shapes[id.0]
    }

    pub fn label(&self, id: LabelId) -> &SheetLabel {
        &self.labels[id.0]
    }

    pub fn shapes(&self) -> impl Iterator<Item = &SheetShape> + '_ {
        self.shapes.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &SheetLabel> + '_ {
        self.labels.iter()
    }
}

impl Surface for Sheet {
    fn size(&self) -> Vector2<f64> {
        self.size
    }

    fn add_shape(&mut self, diameter: f64, color: Point3<f32>) -> ShapeId {
        self.shapes.push(SheetShape {
            diameter,
            color,
            top_left: Point2::origin(),
        });
        ShapeId(self.shapes.len() - 1)
    }

    fn add_label(&mut self, text: &str) -> LabelId {
        self.labels.push(SheetLabel {
            text: text.to_owned(),
            extent: estimate_label_extent(text, self.font_size),
            top_left: Point2::origin(),
        });
        LabelId(self.labels.len() - 1)
    }

    fn shape_extent(&self, id: ShapeId) -> Vector2<f64> {
        Vector2::repeat(self.shapes[id.0].diameter)
    }

    fn label_extent(&self, id: LabelId) -> Vector2<f64> {
        self.labels[id.0].extent
    }

    fn place_shape(&mut self, id: ShapeId, top_left: Point2<f64>) {
        self.shapes[id.0].top_left = top_left;
    }

    fn place_label(&mut self, id: LabelId, top_left: Point2<f64>) {
        self.labels[id.0].top_left = top_left;
    }
}
