use approx::assert_relative_eq;
use nalgebra::{Point2, Vector2};
use rust_orrery::config::SimulationConfig;
use rust_orrery::file::read_bundled;
use rust_orrery::model::{BodyID, Catalog};
use rust_orrery::view::{to_screen, Focus, Scheduler, Sheet, Surface};

fn setup() -> (Scheduler, Sheet) {
    let mut sheet = Sheet::new(1200.0, 1200.0);
    let scheduler = Scheduler::new(
        read_bundled().unwrap(),
        &mut sheet,
        &SimulationConfig::default(),
    );
    (scheduler, sheet)
}

#[test]
fn test_ticks_add_up() {
    let (mut scheduler, mut sheet) = setup();
    for _ in 0..250 {
        scheduler.tick(&mut sheet);
    }
    assert_relative_eq!(scheduler.catalog().time(), 25.0, epsilon = 1e-9);

    // Same picture as a catalog that jumped straight there
    let mut jumped = read_bundled().unwrap();
    jumped.advance(25.0);
    for body in jumped.bodies() {
        let visual = scheduler.visuals().get(body.id);
        let expected = to_screen(sheet.size(), jumped.scaled_position(body.id, 25.0));
        assert_relative_eq!(
            sheet.shape(visual.shape).center(),
            expected,
            epsilon = 1e-6
        );
    }
}

#[test]
fn test_every_body_can_be_focused() {
    let (mut scheduler, mut sheet) = setup();
    let ids: Vec<BodyID> = scheduler.catalog().bodies().map(|b| b.id).collect();
    let middle = Point2::from(sheet.size() / 2.0);

    for id in ids {
        scheduler.set_focus(Focus::Focused(id));
        scheduler.tick(&mut sheet);

        let center = sheet.shape(scheduler.visuals().get(id).shape).center();
        assert_relative_eq!(scheduler.camera().to_screen(center), middle, epsilon = 1e-9);
        assert_relative_eq!(scheduler.camera().scale(), 2.0);
    }

    scheduler.set_focus(Focus::Unfocused);
    scheduler.refresh(&mut sheet);
    assert_relative_eq!(scheduler.camera().scale(), 1.0);
    assert_relative_eq!(scheduler.camera().translation(), Vector2::zeros());
}

#[test]
fn test_cycling_focus_wraps() {
    let (mut scheduler, _) = setup();
    let count = scheduler.catalog().len();

    scheduler.focus_next();
    assert_eq!(scheduler.focus_name(), Some("Sun"));
    scheduler.focus_prev();
    assert_eq!(scheduler.camera().focused_body(), Some(BodyID(count - 1)));
    assert_eq!(scheduler.focus_name(), Some("Charon"));
    scheduler.focus_next();
    assert_eq!(scheduler.focus_name(), Some("Sun"));
}

#[test]
fn test_empty_catalog() {
    let mut sheet = Sheet::new(600.0, 600.0);
    let mut scheduler = Scheduler::new(Catalog::new(), &mut sheet, &SimulationConfig::default());
    scheduler.tick(&mut sheet);
    scheduler.focus_next();
    assert_eq!(scheduler.focus_name(), None);
    assert_eq!(
        scheduler.click(&sheet, Point2::new(300.0, 300.0)),
        Focus::Unfocused
    );
    assert_eq!(sheet.shapes().count(), 0);
}
