use std::collections::HashMap;

use nalgebra::{Point2, Point3};

use super::surface::{to_screen, LabelId, ShapeId, Surface};
use crate::consts::BODY_COLOR;
use crate::model::{BodyID, Catalog};

/// What a body looks like on a surface: a circle, and maybe its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visual {
    pub shape: ShapeId,
    pub label: Option<LabelId>,
}

/// The visuals for every body in a catalog. Kept apart from the catalog so
/// the simulation doesn't need to know anything about drawing.
#[derive(Debug, Clone, Default)]
pub struct Visuals {
    visuals: HashMap<BodyID, Visual>,
}

impl Visuals {
    /// Creates one circle per body, plus a label for the bodies that show one.
    pub fn lay_out(catalog: &Catalog, surface: &mut impl Surface) -> Self {
        let color = Point3::from(BODY_COLOR);
        let mut visuals = HashMap::new();
        for body in catalog.bodies() {
            let shape = surface.add_shape(body.display_radius, color);
            let label = match body.show_label {
                true => Some(surface.add_label(&body.name)),
                false => None,
            };
            visuals.insert(body.id, Visual { shape, label });
        }
        Visuals { visuals }
    }

    /// Panics if the body was never laid out; every body in a catalog gets a
    /// visual before anything is rendered or clicked.
    pub fn get(&self, id: BodyID) -> &Visual {
        match self.visuals.get(&id) {
            Some(visual) => visual,
            None => panic!("Body {:?} has no visual; lay out the catalog first", id),
        }
    }

    pub fn len(&self) -> usize {
        self.visuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visuals.is_empty()
    }

    /// Whether `click` lands strictly inside the bounding box of the body's
    /// shape, where the body would be drawn at `time`.
    pub fn hit_test(
        &self,
        catalog: &Catalog,
        id: BodyID,
        surface: &impl Surface,
        click: Point2<f64>,
        time: f64,
    ) -> bool {
        let visual = self.get(id);
        let center = to_screen(surface.size(), catalog.scaled_position(id, time));
        let half_extent = surface.shape_extent(visual.shape) / 2.0;

        (click.x < center.x + half_extent.x)
            && (click.x > center.x - half_extent.x)
            && (click.y < center.y + half_extent.y)
            && (click.y > center.y - half_extent.y)
    }
}
