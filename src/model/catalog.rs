use std::io::{BufRead, BufReader, Read};

use nalgebra::Point2;
use tracing::{debug, info, trace};

use super::body::{Body, BodyID, BodyKind};
use crate::consts::LABEL_GAP;
use crate::error::{CatalogError, CatalogResult};
use crate::math::polar::log_squared;
use crate::view::{to_screen, Surface, Visuals};

const NUM_FIELDS: usize = 6;
const BYTE_ORDER_MARK: char = '\u{feff}';

/// The ordered collection of bodies, plus the simulation clock.
///
/// Bodies are kept in the order they were loaded. That order matters: a body
/// can only be anchored to one that came before it, and when bodies overlap on
/// screen, the earlier one wins a click.
#[derive(Debug, Clone)]
pub struct Catalog {
    bodies: Vec<Body>,
    time: f64,
}

/// One line of a catalog file, with every field parsed but the kind not yet
/// interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyRecord {
    pub name: String,
    pub kind: String,
    pub reference: String,
    pub orbital_radius: i32,
    pub orbital_period: Option<f64>,
    pub physical_radius: f64,
}

impl BodyRecord {
    /// Parses `name,kind,reference,orbital radius,orbital period,physical radius`.
    ///
    /// The orbital period is allowed to be garbage; the two radii are not.
    pub fn parse(line: &str, line_number: usize) -> CatalogResult<Self> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != NUM_FIELDS {
            return Err(CatalogError::FieldCount {
                line: line_number,
                expected: NUM_FIELDS,
                found: fields.len(),
            });
        }

        let orbital_radius =
            fields[3]
                .trim()
                .parse::<i32>()
                .map_err(|source| CatalogError::OrbitalRadius {
                    line: line_number,
                    value: fields[3].to_owned(),
                    source,
                })?;
        let orbital_period = fields[4].trim().parse::<f64>().ok();
        let physical_radius =
            fields[5]
                .trim()
                .parse::<f64>()
                .map_err(|source| CatalogError::PhysicalRadius {
                    line: line_number,
                    value: fields[5].to_owned(),
                    source,
                })?;

        Ok(BodyRecord {
            name: fields[0].to_owned(),
            kind: fields[1].to_owned(),
            reference: fields[2].to_owned(),
            orbital_radius,
            orbital_period,
            physical_radius,
        })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            bodies: vec![],
            time: 0.0,
        }
    }

    /// Reads a whole catalog, one body per line. Lines with a kind we don't
    /// know how to load are skipped, but anything malformed fails the entire
    /// load.
    pub fn load<R: Read>(reader: R) -> CatalogResult<Self> {
        let mut catalog = Catalog::new();
        let mut skipped = 0;

        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            // Files saved by some Windows editors start with a BOM
            let line = match idx {
                0 => line.strip_prefix(BYTE_ORDER_MARK).unwrap_or(&line),
                _ => &line,
            };
            let record = BodyRecord::parse(line, idx + 1)?;
            if catalog.insert(record).is_none() {
                skipped += 1;
            }
        }

        info!(
            "Loaded catalog with {} bodies ({} lines skipped)",
            catalog.len(),
            skipped
        );
        for body in catalog.bodies() {
            debug!("{}", catalog.report(body.id));
        }
        Ok(catalog)
    }

    /// Adds the body described by `record`, resolving its reference point
    /// against the bodies already present. Returns None (and adds nothing) if
    /// the record's kind isn't one that can be loaded.
    pub fn insert(&mut self, record: BodyRecord) -> Option<BodyID> {
        let kind = match BodyKind::from_token(&record.kind) {
            Some(kind) => kind,
            None => {
                debug!("Skipping {} of unknown kind {:?}", record.name, record.kind);
                return None;
            }
        };

        let reference = self.find(&record.reference);
        if kind.takes_reference() && reference.is_none() {
            trace!(
                "No earlier body named {:?}; {} is anchored at the star",
                record.reference,
                record.name
            );
        }

        let id = BodyID(self.bodies.len());
        let mut body = Body::new(id, record.name, kind);
        body.orbital_radius = record.orbital_radius;
        body.orbital_period = record.orbital_period;
        body.display_radius = log_squared(record.physical_radius);
        body.set_reference(reference);

        self.bodies.push(body);
        Some(id)
    }

    /// The first body with exactly this name
    pub fn find(&self, name: &str) -> Option<BodyID> {
        self.bodies.iter().find(|b| b.name == name).map(|b| b.id)
    }

    pub fn bodies(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.iter()
    }

    pub fn get_body(&self, id: BodyID) -> &Body {
        &self.bodies[id.0]
    }

    pub fn get_reference(&self, id: BodyID) -> Option<&Body> {
        self.get_body(id).reference().map(|r| self.get_body(r))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn advance(&mut self, delta_t: f64) {
        self.time += delta_t;
    }

    /// Where the body is drawn, relative to the center of the screen. Bodies
    /// with a reference point are placed relative to where their reference is
    /// drawn, not where it truly is.
    pub fn scaled_position(&self, id: BodyID, time: f64) -> Point2<f64> {
        let body = self.get_body(id);
        let offset = body.scaled_offset(time);
        match body.reference() {
            Some(parent) => self.scaled_position(parent, time) + offset,
            None => Point2::from(offset),
        }
    }

    pub fn describe(&self, id: BodyID) -> String {
        let reference_name = self.get_reference(id).map(|r| r.name.as_str());
        self.get_body(id).describe(reference_name)
    }

    /// Description, followed by the true position at the current time
    pub fn report(&self, id: BodyID) -> String {
        let position = self.get_body(id).position(self.time);
        format!(
            "{} x: {:>10} y: {:>10} ",
            self.describe(id),
            fixed_two(position.x),
            fixed_two(position.y)
        )
    }

    /// log10 of the largest orbital radius. Negative infinity if there's
    /// nothing to measure.
    pub fn max_orbital_radius(&self) -> f64 {
        let radius = self
            .bodies
            .iter()
            .map(|b| b.orbital_radius)
            .fold(0, i32::max);
        (radius as f64).log10()
    }

    /// Moves every body's shape (and label) to where it belongs at the
    /// current time. Calling this twice without advancing does nothing new.
    pub fn render(&self, surface: &mut impl Surface, visuals: &Visuals) {
        let size = surface.size();
        for body in self.bodies() {
            let visual = visuals.get(body.id);
            let center = to_screen(size, self.scaled_position(body.id, self.time));

            let shape_extent = surface.shape_extent(visual.shape);
            surface.place_shape(visual.shape, center - shape_extent / 2.0);

            if let Some(label) = visual.label {
                let label_extent = surface.label_extent(label);
                let top_left = Point2::new(
                    center.x - label_extent.x / 2.0,
                    center.y - label_extent.y / 2.0 - shape_extent.y / 2.0 - LABEL_GAP,
                );
                surface.place_label(label, top_left);
            }
        }
    }
}

/// Two decimal places, without a zero before the point when the integer
/// part is zero: 0.5 is ".50" and -0.25 is "-.25".
fn fixed_two(value: f64) -> String {
    let text = format!("{:.2}", value);
    match text.strip_prefix("-0.") {
        Some(rest) => format!("-.{}", rest),
        None => match text.strip_prefix("0.") {
            Some(rest) => format!(".{}", rest),
            None => text,
        },
    }
}
