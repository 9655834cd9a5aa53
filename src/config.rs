use std::time::Duration;

/// Knobs for running a simulation.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Simulated time added on every tick
    pub time_step: f64,
    /// Wall-clock time between ticks
    pub tick_interval: Duration,
    /// How far the camera zooms in on a focused body
    pub focus_zoom: f64,
    /// Upper bound on ticks run in a single frame when catching up after a
    /// slow frame
    pub max_ticks_per_frame: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            time_step: 0.1,
            tick_interval: Duration::from_millis(6),
            focus_zoom: 2.0,
            max_ticks_per_frame: 8,
        }
    }
}
