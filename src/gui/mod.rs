use kiss3d::event::EventManager;
use kiss3d::window::{State, Window};

use self::canvas::KissCanvas;
use self::controller::Controller;
use crate::config::SimulationConfig;
use crate::consts::{BACKGROUND_COLOR, DEFAULT_SCALAR};
use crate::model::Catalog;
use crate::view::Scheduler;

mod canvas;
mod controller;

// Window edge length is clamped to this range, in pixels
const MIN_WINDOW_SIZE: u32 = 600;
const MAX_WINDOW_SIZE: u32 = 1600;
const WINDOW_MARGIN: f64 = 60.0;

pub struct Simulation {
    scheduler: Scheduler,
    canvas: KissCanvas,
    controller: Controller,
}

impl Simulation {
    pub fn new(catalog: Catalog, window: &mut Window, config: &SimulationConfig) -> Self {
        let [r, g, b] = BACKGROUND_COLOR;
        window.set_background_color(r, g, b);

        let mut canvas = KissCanvas::new(window);
        let scheduler = Scheduler::new(catalog, &mut canvas, config);
        Self {
            scheduler,
            canvas,
            controller: Controller::new(config),
        }
    }

    fn process_user_input(&mut self, mut events: EventManager) {
        // Process events
        for event in events.iter() {
            self.controller
                .process_event(event, &mut self.scheduler, &self.canvas);
        }
    }

    fn overlay_text(&self) -> String {
        format!(
            "Time: {:.1}\nTimestep: {} / tick{}\nFocus: {}\nFPS: {:.0}",
            self.scheduler.catalog().time(),
            self.scheduler.time_step(),
            if self.controller.is_paused() {
                " (paused)"
            } else {
                ""
            },
            self.scheduler.focus_name().unwrap_or("-"),
            self.controller.fps(),
        )
    }
}

impl State for Simulation {
    fn step(&mut self, window: &mut Window) {
        let resized = self.canvas.sync_size(window);
        self.process_user_input(window.events());

        let ticks = self.controller.due_ticks();
        for _ in 0..ticks {
            self.scheduler.tick(&mut self.canvas);
        }
        // Still need to follow focus changes and resizes while nothing moves
        if ticks == 0 || resized {
            self.scheduler.refresh(&mut self.canvas);
        }

        self.canvas.present(window, self.scheduler.camera());
        self.canvas.draw_overlay(window, &self.overlay_text());
        self.controller.increment_frame_counter();
    }
}

/// Edge length of a square window that fits the widest orbit in `catalog`,
/// when drawn unzoomed.
pub fn fitting_window_size(catalog: &Catalog) -> u32 {
    let max_radius = catalog.max_orbital_radius();
    if !max_radius.is_finite() {
        return MIN_WINDOW_SIZE;
    }
    let reach = max_radius.powi(2) * DEFAULT_SCALAR + WINDOW_MARGIN;
    ((2.0 * reach) as u32).clamp(MIN_WINDOW_SIZE, MAX_WINDOW_SIZE)
}
