use nalgebra::Point2;

use super::camera::{Focus, FocusCamera};
use super::surface::Surface;
use super::visuals::Visuals;
use crate::config::SimulationConfig;
use crate::model::Catalog;

/// Owns everything that changes while the simulation runs, and advances it
/// one tick at a time. Whoever owns the timer calls `tick`; whoever owns the
/// mouse calls `click`.
pub struct Scheduler {
    catalog: Catalog,
    visuals: Visuals,
    camera: FocusCamera,
    time_step: f64,
}

impl Scheduler {
    /// Lays out the catalog on `surface` and renders the first frame.
    pub fn new(catalog: Catalog, surface: &mut impl Surface, config: &SimulationConfig) -> Self {
        let visuals = Visuals::lay_out(&catalog, surface);
        let mut scheduler = Scheduler {
            catalog,
            visuals,
            camera: FocusCamera::new(config.focus_zoom),
            time_step: config.time_step,
        };
        scheduler.refresh(surface);
        scheduler
    }

    /// Advance, then render
    pub fn tick(&mut self, surface: &mut impl Surface) {
        self.catalog.advance(self.time_step);
        self.refresh(surface);
    }

    /// Render the current time again, without advancing. Needed when the
    /// surface changes size, or when paused.
    pub fn refresh(&mut self, surface: &mut impl Surface) {
        self.catalog.render(surface, &self.visuals);
        self.camera.track(&self.catalog, surface.size());
    }

    /// Handles a click at `point`, given in surface space.
    pub fn click(&mut self, surface: &impl Surface, point: Point2<f64>) -> Focus {
        self.camera
            .click(&self.catalog, &self.visuals, surface, point)
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.camera.set_focus(focus);
    }

    pub fn focus_next(&mut self) {
        self.camera.focus_next(&self.catalog);
    }

    pub fn focus_prev(&mut self) {
        self.camera.focus_prev(&self.catalog);
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn visuals(&self) -> &Visuals {
        &self.visuals
    }

    pub fn camera(&self) -> &FocusCamera {
        &self.camera
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn set_time_step(&mut self, time_step: f64) {
        self.time_step = time_step;
    }

    /// Name of the focused body, if any
    pub fn focus_name(&self) -> Option<&str> {
        self.camera
            .focused_body()
            .map(|id| self.catalog.get_body(id).name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::Vector2;

    use super::*;
    use crate::model::BodyID;
    use crate::view::{to_screen, Sheet};

    const TEXT: &str = "Sun,star,,1,1,10000\nEarth,planet,Sun,100,365,1000\nMoon,moon,Earth,10,30,100\n";

    fn setup() -> (Scheduler, Sheet) {
        let catalog = Catalog::load(TEXT.as_bytes()).unwrap();
        let mut sheet = Sheet::new(800.0, 600.0);
        let scheduler = Scheduler::new(catalog, &mut sheet, &SimulationConfig::default());
        (scheduler, sheet)
    }

    #[test]
    fn test_first_frame_is_rendered() {
        let (scheduler, sheet) = setup();
        let sun = scheduler.visuals().get(BodyID(0));
        let earth = scheduler.visuals().get(BodyID(1));

        // Sun is 16 across, centered on the sheet
        assert_relative_eq!(sheet.shape(sun.shape).top_left, Point2::new(392.0, 292.0));
        assert_relative_eq!(sheet.shape(sun.shape).center(), Point2::new(400.0, 300.0));
        // Earth is 9 across, 60 to the right
        assert_relative_eq!(sheet.shape(earth.shape).center(), Point2::new(460.0, 300.0));

        // "Earth" is 30 x 12; its top sits 10 above the top of the circle,
        // less half the label height
        let label = sheet.label(earth.label.unwrap());
        assert_relative_eq!(
            label.top_left,
            Point2::new(460.0 - 15.0, 300.0 - 6.0 - 4.5 - 10.0)
        );
    }

    #[test]
    fn test_tick_advances_and_renders() {
        let (mut scheduler, mut sheet) = setup();
        for _ in 0..10 {
            scheduler.tick(&mut sheet);
        }
        assert_relative_eq!(scheduler.catalog().time(), 1.0, epsilon = 1e-12);

        let catalog = scheduler.catalog();
        let moon = scheduler.visuals().get(BodyID(2));
        let expected = to_screen(sheet.size(), catalog.scaled_position(BodyID(2), 1.0));
        assert_relative_eq!(sheet.shape(moon.shape).center(), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let (mut scheduler, mut sheet) = setup();
        scheduler.tick(&mut sheet);
        let before: Vec<_> = sheet.shapes().map(|s| s.top_left).collect();
        scheduler.refresh(&mut sheet);
        scheduler.refresh(&mut sheet);
        let after: Vec<_> = sheet.shapes().map(|s| s.top_left).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_focus_and_release() {
        let (mut scheduler, mut sheet) = setup();
        let earth_center = sheet.shape(scheduler.visuals().get(BodyID(1)).shape).center();

        assert_eq!(
            scheduler.click(&sheet, earth_center),
            Focus::Focused(BodyID(1))
        );
        assert_eq!(scheduler.focus_name(), Some("Earth"));
        scheduler.tick(&mut sheet);
        assert_relative_eq!(scheduler.camera().scale(), 2.0);

        // The camera keeps the moving focus in the middle of the screen
        let center = sheet.shape(scheduler.visuals().get(BodyID(1)).shape).center();
        assert_relative_eq!(
            scheduler.camera().to_screen(center),
            Point2::new(400.0, 300.0),
            epsilon = 1e-9
        );

        assert_eq!(
            scheduler.click(&sheet, Point2::new(2.0, 2.0)),
            Focus::Unfocused
        );
        scheduler.tick(&mut sheet);
        assert_relative_eq!(scheduler.camera().scale(), 1.0);
        assert_relative_eq!(scheduler.camera().translation(), Vector2::zeros());
        assert_eq!(scheduler.focus_name(), None);
    }

    #[test]
    fn test_resize_recenters() {
        let (mut scheduler, mut sheet) = setup();
        sheet.resize(1000.0, 1000.0);
        scheduler.refresh(&mut sheet);
        let sun = scheduler.visuals().get(BodyID(0));
        assert_relative_eq!(sheet.shape(sun.shape).center(), Point2::new(500.0, 500.0));
    }
}
