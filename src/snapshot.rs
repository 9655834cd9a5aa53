//! Exports a single frame to an image file, using plotters.

use std::error::Error;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::consts::{BACKGROUND_COLOR, LABEL_COLOR};
use crate::view::{FocusCamera, Sheet, Surface};

/// Draws everything on `sheet`, as seen through `camera`. The format is
/// picked from the extension: `.svg` gives an SVG, anything else a bitmap.
pub fn draw_sheet(
    sheet: &Sheet,
    camera: &FocusCamera,
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();
    let size = sheet.size();
    let dimensions = (size.x.round() as u32, size.y.round() as u32);

    let is_svg = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);
    if is_svg {
        paint(SVGBackend::new(path, dimensions).into_drawing_area(), sheet, camera)
    } else {
        paint(BitMapBackend::new(path, dimensions).into_drawing_area(), sheet, camera)
    }
}

fn paint<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    sheet: &Sheet,
    camera: &FocusCamera,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    root.fill(&to_rgb(BACKGROUND_COLOR))?;

    let scale = camera.scale();
    for shape in sheet.shapes() {
        let center = camera.to_screen(shape.center());
        let radius = (shape.diameter * scale / 2.0).max(1.0);
        let color = to_rgb([shape.color.x, shape.color.y, shape.color.z]);
        root.draw(&Circle::new(
            (center.x.round() as i32, center.y.round() as i32),
            radius.round() as i32,
            color.filled(),
        ))?;
    }

    let font_size = sheet.font_size() * scale;
    for label in sheet.labels() {
        let top_left = camera.to_screen(label.top_left);
        root.draw(&Text::new(
            label.text.clone(),
            (top_left.x.round() as i32, top_left.y.round() as i32),
            ("sans-serif", font_size)
                .into_font()
                .color(&to_rgb(LABEL_COLOR)),
        ))?;
    }

    root.present()?;
    Ok(())
}

fn to_rgb(color: [f32; 3]) -> RGBColor {
    let [r, g, b] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    RGBColor(r, g, b)
}
