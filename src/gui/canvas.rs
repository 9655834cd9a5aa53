use std::rc::Rc;

use kiss3d::scene::PlanarSceneNode;
use kiss3d::text::Font;
use kiss3d::window::Window;
use nalgebra::{Point2, Point3, Translation2, Vector2};

use crate::consts::{LABEL_COLOR, LABEL_FONT_SIZE};
use crate::view::{estimate_label_extent, FocusCamera, LabelId, ShapeId, Surface};

struct CanvasShape {
    node: PlanarSceneNode,
    diameter: f64,
    center: Point2<f64>,
}

struct CanvasLabel {
    text: String,
    extent: Vector2<f64>,
    top_left: Point2<f64>,
}

/// A [Surface] backed by a kiss3d window.
///
/// Shapes are planar circles. Positions are stored in surface space, and
/// only pushed to the scene nodes (through the camera) in `present`, since
/// kiss3d's planar scene has its origin in the middle and y pointing up.
/// Labels are drawn as overlay text every frame.
pub struct KissCanvas {
    root: PlanarSceneNode,
    shapes: Vec<CanvasShape>,
    labels: Vec<CanvasLabel>,
    font: Rc<Font>,
    // Logical pixels
    size: Vector2<f64>,
    // Physical pixels per logical pixel
    scale_factor: f64,
}

impl KissCanvas {
    pub fn new(window: &mut Window) -> Self {
        let mut canvas = KissCanvas {
            root: window.add_planar_group(),
            shapes: vec![],
            labels: vec![],
            font: Font::default(),
            size: Vector2::zeros(),
            scale_factor: 1.0,
        };
        canvas.sync_size(window);
        canvas
    }

    /// Picks up the current window size. Returns true if it changed.
    pub fn sync_size(&mut self, window: &Window) -> bool {
        let scale_factor = window.scale_factor();
        let size = Vector2::new(window.width() as f64, window.height() as f64) / scale_factor;
        let changed = size != self.size || scale_factor != self.scale_factor;
        self.size = size;
        self.scale_factor = scale_factor;
        changed
    }

    /// Converts a cursor position reported by the window to surface space
    /// (before the camera is undone).
    pub fn to_logical(&self, x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y) / self.scale_factor
    }

    fn to_planar(&self, point: Point2<f64>) -> Translation2<f32> {
        Translation2::new(
            (point.x - self.size.x / 2.0) as f32,
            (self.size.y / 2.0 - point.y) as f32,
        )
    }

    /// Moves the scene nodes to where the camera says they are, and draws
    /// the labels. Call once per frame, after rendering.
    pub fn present(&mut self, window: &mut Window, camera: &FocusCamera) {
        let scale = camera.scale();
        for i in 0..self.shapes.len() {
            let translation = self.to_planar(camera.to_screen(self.shapes[i].center));
            let node = &mut self.shapes[i].node;
            node.set_local_translation(translation);
            node.set_local_scale(scale as f32, scale as f32);
        }

        let color = Point3::from(LABEL_COLOR);
        let font_size = (LABEL_FONT_SIZE * scale * self.scale_factor) as f32;
        for label in self.labels.iter() {
            let top_left: Point2<f32> =
                nalgebra::convert(camera.to_screen(label.top_left) * self.scale_factor);
            window.draw_text(
                &label.text,
                &top_left,
                font_size,
                &self.font,
                &color,
            );
        }
    }

    /// Draws text in the top-left corner of the window, unaffected by the
    /// camera.
    pub fn draw_overlay(&self, window: &mut Window, text: &str) {
        window.draw_text(
            text,
            &Point2::origin(),
            (2.0 * LABEL_FONT_SIZE * self.scale_factor) as f32,
            &self.font,
            &Point3::from(LABEL_COLOR),
        );
    }
}

impl Surface for KissCanvas {
    fn size(&self) -> Vector2<f64> {
        self.size
    }

    fn add_shape(&mut self, diameter: f64, color: Point3<f32>) -> ShapeId {
        let mut node = self.root.add_circle((diameter / 2.0) as f32);
        node.set_color(color.x, color.y, color.z);
        self.shapes.push(CanvasShape {
            node,
            diameter,
            center: Point2::origin(),
        });
        ShapeId(self.shapes.len() - 1)
    }

    fn add_label(&mut self, text: &str) -> LabelId {
        self.labels.push(CanvasLabel {
            text: text.to_owned(),
            extent: estimate_label_extent(text, LABEL_FONT_SIZE),
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
        let shape = &mut self.shapes[id.0];
        shape.center = top_left + Vector2::repeat(shape.diameter / 2.0);
    }

    fn place_label(&mut self, id: LabelId, top_left: Point2<f64>) {
        self.labels[id.0].top_left = top_left;
    }
}
