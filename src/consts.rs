// Per-kind display knobs
pub const DEFAULT_SCALAR: f64 = 15.0;
pub const MOON_SCALAR: f64 = 5.0;

// Where the star sits in true (unscaled) coordinates. It never moves.
pub const STAR_POSITION: [f64; 2] = [300.0, 300.0];

// Column the kind label of `describe` is right-aligned to
pub const KIND_LABEL_WIDTH: usize = 18;

// Vertical gap between a body's shape and its name label
pub const LABEL_GAP: f64 = 10.0;
pub const LABEL_FONT_SIZE: f64 = 12.0;

// RGB, 0 to 1
pub const BODY_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
pub const LABEL_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const BACKGROUND_COLOR: [f32; 3] = [0.0, 0.0, 0.0];
