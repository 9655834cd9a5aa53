use std::f64::consts::TAU;

use nalgebra::Vector2;

/// Angle swept by uniform circular motion after `time`, starting from the
/// positive x-axis.
///
/// A period of zero (or one that isn't finite) describes something that
/// doesn't orbit at all, so it stays at angle 0 instead of producing NaN.
/// Negative periods are fine, and go around the other way.
pub fn orbital_angle(time: f64, period: f64) -> f64 {
    if period == 0.0 || !period.is_finite() {
        return 0.0;
    }
    TAU * time / period
}

/// Point at distance `radius` from the origin, in direction `angle`.
pub fn on_circle(radius: f64, angle: f64) -> Vector2<f64> {
    Vector2::new(radius * angle.cos(), radius * angle.sin())
}

/// Squashes lengths spanning many orders of magnitude into something that
/// fits on a screen: `log10(x)^2`.
pub fn log_squared(x: f64) -> f64 {
    x.log10().powi(2)
}
