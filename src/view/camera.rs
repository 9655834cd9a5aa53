use nalgebra::{Point2, Similarity2, Translation2, UnitComplex, Vector2};
use tracing::info;

use super::surface::Surface;
use super::visuals::Visuals;
use crate::model::{BodyID, Catalog};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Unfocused,
    Focused(BodyID),
}

// Maps surface space to what's actually on screen. When unfocused, this is
// the identity. When focused, we zoom in around the surface origin and then
// translate so that the focused body lands in the middle of the screen.
//
// The transform is only recomputed by `track`, so changing the focus takes
// effect on the next frame.
#[derive(Debug, Clone)]
pub struct FocusCamera {
    focus: Focus,
    zoom: f64,
    transform: Similarity2<f64>,
}

impl FocusCamera {
    pub fn new(zoom: f64) -> Self {
        FocusCamera {
            focus: Focus::Unfocused,
            zoom,
            transform: Similarity2::identity(),
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn focused_body(&self) -> Option<BodyID> {
        match self.focus {
            Focus::Unfocused => None,
            Focus::Focused(id) => Some(id),
        }
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if focus != self.focus {
            info!("Camera focus: {:?}", focus);
        }
        self.focus = focus;
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Focuses on the first body (in catalog order) under `click`, or on
    /// nothing if the click missed everything. The click is in surface space.
    pub fn click(
        &mut self,
        catalog: &Catalog,
        visuals: &Visuals,
        surface: &impl Surface,
        click: Point2<f64>,
    ) -> Focus {
        let time = catalog.time();
        let hit = catalog
            .bodies()
            .map(|b| b.id)
            .find(|&id| visuals.hit_test(catalog, id, surface, click, time));

        self.set_focus(match hit {
            Some(id) => Focus::Focused(id),
            None => Focus::Unfocused,
        });
        self.focus
    }

    pub fn focus_next(&mut self, catalog: &Catalog) {
        let n = catalog.len();
        if n == 0 {
            return;
        }
        let next = match self.focus {
            Focus::Unfocused => 0,
            Focus::Focused(id) => (id.0 + 1) % n,
        };
        self.set_focus(Focus::Focused(BodyID(next)));
    }

    pub fn focus_prev(&mut self, catalog: &Catalog) {
        let n = catalog.len();
        if n == 0 {
            return;
        }
        let prev = match self.focus {
            Focus::Unfocused => n - 1,
            Focus::Focused(id) => (id.0 + n - 1) % n,
        };
        self.set_focus(Focus::Focused(BodyID(prev)));
    }

    /// Recomputes the transform so it follows the focused body to wherever it
    /// is now.
    pub fn track(&mut self, catalog: &Catalog, size: Vector2<f64>) {
        self.transform = match self.focus {
            Focus::Unfocused => Similarity2::identity(),
            Focus::Focused(id) => {
                let k = self.zoom;
                let position = catalog.scaled_position(id, catalog.time());
                // The body sits at size/2 + position before zooming; after
                // zooming by k, shift it back to size/2.
                let shift = -position.coords * k - size * (k - 1.0) / 2.0;
                Similarity2::from_parts(Translation2::from(shift), UnitComplex::identity(), k)
            }
        };
    }

    pub fn transform(&self) -> &Similarity2<f64> {
        &self.transform
    }

    pub fn scale(&self) -> f64 {
        self.transform.scaling()
    }

    pub fn translation(&self) -> Vector2<f64> {
        self.transform.isometry.translation.vector
    }

    /// Surface space to screen space
    pub fn to_screen(&self, point: Point2<f64>) -> Point2<f64> {
        self.transform * point
    }

    /// Screen space to surface space, e.g., for mouse clicks
    pub fn to_surface(&self, point: Point2<f64>) -> Point2<f64> {
        self.transform.inverse() * point
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::view::{to_screen, Sheet};

    const TEXT: &str = "Sun,star,,1,1,10000\nEarth,planet,Sun,100,365,1000\nMars,planet,Sun,1000,687,1000\n";

    fn setup() -> (Catalog, Sheet, Visuals) {
        let catalog = Catalog::load(TEXT.as_bytes()).unwrap();
        let mut sheet = Sheet::new(800.0, 600.0);
        let visuals = Visuals::lay_out(&catalog, &mut sheet);
        (catalog, sheet, visuals)
    }

    #[test]
    fn test_starts_unfocused() {
        let camera = FocusCamera::new(2.0);
        assert_eq!(camera.focus(), Focus::Unfocused);
        assert_relative_eq!(camera.scale(), 1.0);
        assert_relative_eq!(camera.translation(), Vector2::zeros());
    }

    #[test]
    fn test_click_selects_first_hit() {
        let (catalog, sheet, visuals) = setup();
        let mut camera = FocusCamera::new(2.0);

        let earth_center = to_screen(sheet.size(), catalog.scaled_position(BodyID(1), 0.0));
        assert_eq!(
            camera.click(&catalog, &visuals, &sheet, earth_center),
            Focus::Focused(BodyID(1))
        );

        // Empty space
        assert_eq!(
            camera.click(&catalog, &visuals, &sheet, Point2::new(5.0, 5.0)),
            Focus::Unfocused
        );
    }

    #[test]
    fn test_tracking_centers_the_focus() {
        let (mut catalog, sheet, _) = setup();
        let mut camera = FocusCamera::new(2.0);
        camera.set_focus(Focus::Focused(BodyID(1)));

        for _ in 0..5 {
            catalog.advance(17.0);
            camera.track(&catalog, sheet.size());

            let position = catalog.scaled_position(BodyID(1), catalog.time());
            let on_surface = to_screen(sheet.size(), position);
            assert_relative_eq!(
                camera.to_screen(on_surface),
                Point2::new(400.0, 300.0),
                epsilon = 1e-9
            );
            assert_relative_eq!(camera.scale(), 2.0);
            assert_relative_eq!(
                camera.translation(),
                -position.coords * 2.0 - Vector2::new(400.0, 300.0),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_unfocusing_resets_on_next_track() {
        let (catalog, sheet, visuals) = setup();
        let mut camera = FocusCamera::new(2.0);
        camera.set_focus(Focus::Focused(BodyID(2)));
        camera.track(&catalog, sheet.size());
        assert_relative_eq!(camera.scale(), 2.0);

        // Clicking empty space doesn't move the camera until the next frame
        camera.click(&catalog, &visuals, &sheet, Point2::new(1.0, 1.0));
        assert_relative_eq!(camera.scale(), 2.0);

        camera.track(&catalog, sheet.size());
        assert_relative_eq!(camera.scale(), 1.0);
        assert_relative_eq!(camera.translation(), Vector2::zeros());
    }

    #[test]
    fn test_screen_round_trip() {
        let (catalog, sheet, _) = setup();
        let mut camera = FocusCamera::new(2.0);
        camera.set_focus(Focus::Focused(BodyID(2)));
        camera.track(&catalog, sheet.size());

        let point = Point2::new(123.0, -45.0);
        assert_relative_eq!(
            camera.to_surface(camera.to_screen(point)),
            point,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_focus_cycling() {
        let (catalog, _, _) = setup();
        let mut camera = FocusCamera::new(2.0);

        camera.focus_next(&catalog);
        assert_eq!(camera.focus(), Focus::Focused(BodyID(0)));
        camera.focus_next(&catalog);
        camera.focus_next(&catalog);
        camera.focus_next(&catalog);
        assert_eq!(camera.focus(), Focus::Focused(BodyID(0)));

        camera.focus_prev(&catalog);
        assert_eq!(camera.focus(), Focus::Focused(BodyID(2)));

        camera.set_focus(Focus::Unfocused);
        camera.focus_prev(&catalog);
        assert_eq!(camera.focused_body(), Some(BodyID(2)));

        let mut camera = FocusCamera::new(2.0);
        camera.focus_next(&Catalog::new());
        assert_eq!(camera.focus(), Focus::Unfocused);
    }
}
