use nalgebra::{Point2, Vector2};

use crate::consts::{DEFAULT_SCALAR, KIND_LABEL_WIDTH, MOON_SCALAR, STAR_POSITION};
use crate::math::polar::{log_squared, on_circle, orbital_angle};

/// Index of a body within its catalog. Ids are handed out in load order,
/// so a smaller id always means an earlier line.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BodyID(pub usize);

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum BodyKind {
    Star,
    Planet,
    DwarfPlanet,
    Moon,
    Comet,
    Asteroid,
    AsteroidBelt,
}

impl BodyKind {
    /// The kind named by a token in a catalog file. Only the kinds a file
    /// can actually declare are recognized; comets, asteroids and belts
    /// can't be loaded this way.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "star" => Some(BodyKind::Star),
            "planet" => Some(BodyKind::Planet),
            "dwarfplanet" => Some(BodyKind::DwarfPlanet),
            "moon" => Some(BodyKind::Moon),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BodyKind::Star => "Star: ",
            BodyKind::Planet => "Planet: ",
            BodyKind::DwarfPlanet => "Dwarf Planet: ",
            BodyKind::Moon => "Moon: ",
            BodyKind::Comet => "Comet: ",
            BodyKind::Asteroid => "Asteroid: ",
            BodyKind::AsteroidBelt => "Asteroid Belt: ",
        }
    }

    /// Whether bodies of this kind are positioned relative to another body
    pub fn takes_reference(self) -> bool {
        matches!(
            self,
            BodyKind::Planet | BodyKind::DwarfPlanet | BodyKind::Moon
        )
    }

    pub fn default_scalar(self) -> f64 {
        match self {
            BodyKind::Moon => MOON_SCALAR,
            _ => DEFAULT_SCALAR,
        }
    }

    pub fn shows_label(self) -> bool {
        !matches!(self, BodyKind::Moon)
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyID,
    pub name: String,
    pub kind: BodyKind,
    pub orbital_radius: i32,
    // None if the catalog entry couldn't be parsed
    pub orbital_period: Option<f64>,
    // Diameter of the body's shape on screen
    pub display_radius: f64,
    pub scalar: f64,
    pub show_label: bool,
    // Always None for kinds that don't take a reference
    reference: Option<BodyID>,
}

impl Body {
    pub fn new(id: BodyID, name: impl Into<String>, kind: BodyKind) -> Self {
        Body {
            id,
            name: name.into(),
            kind,
            orbital_radius: 0,
            orbital_period: None,
            display_radius: 0.0,
            scalar: kind.default_scalar(),
            show_label: kind.shows_label(),
            reference: None,
        }
    }

    pub fn reference(&self) -> Option<BodyID> {
        self.reference
    }

    /// Anchors this body to another one. Ignored for kinds that can't be
    /// anchored (stars, comets, ...).
    pub fn set_reference(&mut self, reference: Option<BodyID>) {
        if self.kind.takes_reference() {
            self.reference = reference;
        }
    }

    fn angle(&self, time: f64) -> f64 {
        orbital_angle(time, self.orbital_period.unwrap_or(0.0))
    }

    /// True position at `time`, around whatever this body orbits. This
    /// doesn't account for the reference point.
    pub fn position(&self, time: f64) -> Point2<f64> {
        match self.kind {
            BodyKind::Star => Point2::from(STAR_POSITION),
            _ => Point2::from(on_circle(self.orbital_radius as f64, self.angle(time))),
        }
    }

    /// Display-space offset from the reference point (or from the star, if
    /// there is none). The orbital radius is log-compressed, then multiplied
    /// by the scalar.
    pub fn scaled_offset(&self, time: f64) -> Vector2<f64> {
        match self.kind {
            BodyKind::Star => Vector2::zeros(),
            _ => {
                let radius = log_squared(self.orbital_radius as f64) * self.scalar;
                on_circle(radius, self.angle(time))
            }
        }
    }

    /// One-line summary. The caller supplies the name of the reference
    /// point, since the body only knows its id.
    pub fn describe(&self, reference_name: Option<&str>) -> String {
        let mut output = format!(
            "{:>width$}{:>10}, orbital radius: {:>8}, orbital period: {:>8},",
            self.kind.label(),
            self.name,
            self.orbital_radius,
            self.orbital_period.unwrap_or(0.0),
            width = KIND_LABEL_WIDTH,
        );
        if let Some(name) = reference_name {
            output.push_str(&format!(" reference point: {:>10},", name));
        }
        output
    }
}
