use std::time::{Duration, Instant};

use kiss3d::event::{Action, Event, Key, MouseButton, WindowEvent};
use nalgebra::Point2;
use tracing::info;

use super::canvas::KissCanvas;
use crate::config::SimulationConfig;
use crate::view::{Focus, Scheduler};

// Key config, all in one place
const KEY_PREV_FOCUS: Key = Key::Q;
const KEY_NEXT_FOCUS: Key = Key::E;
const KEY_CLEAR_FOCUS: Key = Key::Home;
const KEY_SPEED_UP: Key = Key::Period;
const KEY_SLOW_DOWN: Key = Key::Comma;
const KEY_TOGGLE_PAUSE: Key = Key::Space;

pub struct Controller {
    paused: bool,
    // In surface space, i.e., logical pixels
    cursor: Point2<f64>,
    ticker: Ticker,
    frame_rate: FrameRate,
}

/// Turns wall-clock time into a whole number of fixed-length ticks. Whatever
/// doesn't add up to a full tick carries over to the next poll.
pub struct Ticker {
    interval: Duration,
    last: Instant,
    max_ticks: u32,
}

impl Ticker {
    pub fn new(interval: Duration, max_ticks: u32, now: Instant) -> Self {
        assert!(!interval.is_zero(), "Tick interval must be positive");
        Ticker {
            interval,
            last: now,
            max_ticks,
        }
    }

    /// Number of ticks that have come due since the last poll. If we've
    /// fallen further behind than `max_ticks`, the backlog is dropped.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last);
        let due = elapsed.as_nanos() / self.interval.as_nanos();

        if due > self.max_ticks as u128 {
            self.last = now;
            return self.max_ticks;
        }

        let due = due as u32;
        self.last += self.interval * due;
        due
    }
}

/// Frames per second, averaged over fixed windows of wall-clock time. The
/// value only changes when a window closes.
pub struct FrameRate {
    window: Duration,
    window_start: Instant,
    frames: u32,
    fps: f64,
}

impl FrameRate {
    pub fn new(window: Duration, now: Instant) -> Self {
        FrameRate {
            window,
            window_start: now,
            frames: 0,
            fps: 0.0,
        }
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Records a finished frame
    pub fn record_frame(&mut self, now: Instant) {
        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed > self.window {
            self.fps = self.frames as f64 / elapsed.as_secs_f64();
            self.window_start = now;
            self.frames = 0;
        }
    }
}

impl Controller {
    pub fn new(config: &SimulationConfig) -> Self {
        Controller {
            paused: false,
            cursor: Point2::origin(),
            ticker: Ticker::new(
                config.tick_interval,
                config.max_ticks_per_frame,
                Instant::now(),
            ),
            frame_rate: FrameRate::new(Duration::from_secs(1), Instant::now()),
        }
    }

    pub fn process_event(&mut self, event: Event, scheduler: &mut Scheduler, canvas: &KissCanvas) {
        match event.value {
            WindowEvent::CursorPos(x, y, _) => {
                self.cursor = canvas.to_logical(x, y);
            }
            WindowEvent::MouseButton(MouseButton::Button1, Action::Press, _) => {
                let point = scheduler.camera().to_surface(self.cursor);
                if let Focus::Focused(id) = scheduler.click(canvas, point) {
                    info!("{}", scheduler.catalog().describe(id));
                }
            }
            WindowEvent::Key(KEY_NEXT_FOCUS, Action::Press, _) => {
                scheduler.focus_next();
            }
            WindowEvent::Key(KEY_PREV_FOCUS, Action::Press, _) => {
                scheduler.focus_prev();
            }
            WindowEvent::Key(KEY_CLEAR_FOCUS, Action::Press, _) => {
                scheduler.set_focus(Focus::Unfocused);
            }
            WindowEvent::Key(KEY_SPEED_UP, Action::Press, _) => {
                scheduler.set_time_step(scheduler.time_step() * 2.0);
                info!("Timestep is {} / tick", scheduler.time_step());
            }
            WindowEvent::Key(KEY_SLOW_DOWN, Action::Press, _) => {
                scheduler.set_time_step(scheduler.time_step() / 2.0);
                info!("Timestep is {} / tick", scheduler.time_step());
            }
            WindowEvent::Key(KEY_TOGGLE_PAUSE, Action::Press, _) => {
                self.paused = !self.paused;
            }
            _ => {}
        }
    }

    /// How many ticks to run this frame
    pub fn due_ticks(&mut self) -> u32 {
        let due = self.ticker.poll(Instant::now());
        match self.paused {
            true => 0,
            false => due,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn fps(&self) -> f64 {
        self.frame_rate.fps()
    }

    pub fn increment_frame_counter(&mut self) {
        self.frame_rate.record_frame(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_ticker_counts_whole_ticks() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_millis(6), 100, start);

        assert_eq!(ticker.poll(start), 0);
        assert_eq!(ticker.poll(start + Duration::from_millis(5)), 0);
        assert_eq!(ticker.poll(start + Duration::from_millis(13)), 2);
        // The leftover millisecond carries over
        assert_eq!(ticker.poll(start + Duration::from_millis(18)), 1);
        assert_eq!(ticker.poll(start + Duration::from_millis(23)), 0);
        assert_eq!(ticker.poll(start + Duration::from_millis(24)), 1);
    }

    #[test]
    fn test_ticker_drops_backlog() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_millis(6), 8, start);

        assert_eq!(ticker.poll(start + Duration::from_secs(1)), 8);
        // Caught up; no more backlog
        assert_eq!(ticker.poll(start + Duration::from_millis(1003)), 0);
        assert_eq!(ticker.poll(start + Duration::from_millis(1006)), 1);
    }

    #[test]
    fn test_ticker_ignores_time_going_backwards() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_millis(6), 8, start + Duration::from_secs(1));
        assert_eq!(ticker.poll(start), 0);
    }

    #[test]
    fn test_frame_rate_updates_per_window() {
        let start = Instant::now();
        let mut rate = FrameRate::new(Duration::from_secs(1), start);

        for i in 1..=30 {
            rate.record_frame(start + Duration::from_millis(20 * i));
        }
        // 600ms in, the first window hasn't closed yet
        assert_eq!(rate.fps(), 0.0);

        for i in 31..=55 {
            rate.record_frame(start + Duration::from_millis(20 * i));
        }
        // Window closed on the 51st frame, at 1020ms
        assert_relative_eq!(rate.fps(), 51.0 / 1.02, epsilon = 1e-9);

        // The next window starts from scratch
        rate.record_frame(start + Duration::from_millis(2200));
        assert_relative_eq!(rate.fps(), 5.0 / 1.18, epsilon = 1e-9);
    }

    #[test]
    #[should_panic]
    fn test_ticker_rejects_zero_interval() {
        Ticker::new(Duration::ZERO, 8, Instant::now());
    }
}
