use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb,
};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use crate::core::approach::{ApproachMeasurement, ApproachResult, approach_path};
use crate::core::window::{format_axis_value, padded_axis_window_f64};
use crate::error::OutputError;
use crate::output::format::format_summary_lines;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;

const TEXT_LEFT_MM: f32 = 21.0;
const TITLE_Y_MM: f32 = 267.0;
const SUMMARY_TOP_MM: f32 = 252.0;
const SUMMARY_STEP_MM: f32 = 9.0;

// Plot frame on the page.
const PLOT_LEFT_MM: f32 = 40.0;
const PLOT_RIGHT_MM: f32 = 190.0;
const PLOT_TOP_MM: f32 = 180.0;
const PLOT_BOTTOM_MM: f32 = 60.0;
const GRID_LINES: usize = 5;
const MARKER_HALF_MM: f32 = 1.4;

const FONT_SIZE_TITLE: f32 = 20.0;
const FONT_SIZE_TEXT: f32 = 12.0;
const FONT_SIZE_TICK: f32 = 8.0;

/// Maps (distance, altitude) into the plot frame. Altitude zero sits at the
/// top edge, matching the inverted altitude axis of the other charts.
fn to_page(point: (f64, f64), x_span: f64, y_span: f64) -> (f32, f32) {
    let plot_w = PLOT_RIGHT_MM - PLOT_LEFT_MM;
    let plot_h = PLOT_TOP_MM - PLOT_BOTTOM_MM;
    let x = PLOT_LEFT_MM + (point.0 / x_span.max(1.0)) as f32 * plot_w;
    let y = PLOT_TOP_MM - (point.1 / y_span.max(1.0)) as f32 * plot_h;
    (x, y)
}

fn stroke(layer: &PdfLayerReference, points: &[(f32, f32)]) {
    layer.add_line(Line {
        points: points
            .iter()
            .map(|&(x, y)| (Point::new(Mm(x), Mm(y)), false))
            .collect(),
        is_closed: false,
    });
}

fn set_stroke_color(layer: &PdfLayerReference, r: f32, g: f32, b: f32, thickness: f32) {
    layer.set_outline_color(Color::Rgb(Rgb::new(r, g, b, None)));
    layer.set_outline_thickness(thickness);
}

// Builtin PDF fonts only cover WinAnsi text.
fn pdf_text(text: &str) -> String {
    text.replace('°', " deg")
}

fn draw_summary(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    measurement: &ApproachMeasurement,
    result: &ApproachResult,
) {
    layer.use_text(
        "Approach Report",
        FONT_SIZE_TITLE,
        Mm(TEXT_LEFT_MM),
        Mm(TITLE_Y_MM),
        font,
    );
    for (idx, line) in format_summary_lines(measurement, result).iter().enumerate() {
        layer.use_text(
            pdf_text(line),
            FONT_SIZE_TEXT,
            Mm(TEXT_LEFT_MM),
            Mm(SUMMARY_TOP_MM - idx as f32 * SUMMARY_STEP_MM),
            font,
        );
    }
}

fn draw_path_chart(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    measurement: &ApproachMeasurement,
) {
    let (x_span, y_span) =
        padded_axis_window_f64(measurement.horizontal_distance_ft, measurement.altitude_ft);

    layer.use_text(
        "Approach Path",
        FONT_SIZE_TEXT + 2.0,
        Mm(PLOT_LEFT_MM + 45.0),
        Mm(PLOT_TOP_MM + 8.0),
        font,
    );

    set_stroke_color(layer, 0.88, 0.89, 0.92, 0.4);
    for i in 0..=GRID_LINES {
        let t = i as f32 / GRID_LINES as f32;
        let x = PLOT_LEFT_MM + t * (PLOT_RIGHT_MM - PLOT_LEFT_MM);
        let y = PLOT_TOP_MM - t * (PLOT_TOP_MM - PLOT_BOTTOM_MM);
        stroke(layer, &[(x, PLOT_BOTTOM_MM), (x, PLOT_TOP_MM)]);
        stroke(layer, &[(PLOT_LEFT_MM, y), (PLOT_RIGHT_MM, y)]);

        let x_label = format_axis_value(t as f64 * x_span, x_span);
        layer.use_text(
            x_label,
            FONT_SIZE_TICK,
            Mm(x - 3.0),
            Mm(PLOT_BOTTOM_MM - 5.0),
            font,
        );
        let y_label = format_axis_value(t as f64 * y_span, y_span);
        layer.use_text(
            y_label,
            FONT_SIZE_TICK,
            Mm(PLOT_LEFT_MM - 12.0),
            Mm(y - 1.0),
            font,
        );
    }

    set_stroke_color(layer, 0.2, 0.2, 0.22, 0.8);
    stroke(
        layer,
        &[
            (PLOT_LEFT_MM, PLOT_TOP_MM),
            (PLOT_RIGHT_MM, PLOT_TOP_MM),
            (PLOT_RIGHT_MM, PLOT_BOTTOM_MM),
            (PLOT_LEFT_MM, PLOT_BOTTOM_MM),
            (PLOT_LEFT_MM, PLOT_TOP_MM),
        ],
    );

    layer.use_text(
        "Horizontal Distance (ft)",
        FONT_SIZE_TEXT - 2.0,
        Mm(PLOT_LEFT_MM + 50.0),
        Mm(PLOT_BOTTOM_MM - 14.0),
        font,
    );
    layer.use_text(
        "Altitude (ft)",
        FONT_SIZE_TEXT - 2.0,
        Mm(PLOT_LEFT_MM - 14.0),
        Mm(PLOT_TOP_MM + 3.0),
        font,
    );

    let path = approach_path(*measurement).map(|p| to_page(p, x_span, y_span));
    set_stroke_color(layer, 0.12, 0.47, 0.71, 1.6);
    stroke(layer, &path);
    for (x, y) in path {
        stroke(
            layer,
            &[
                (x - MARKER_HALF_MM, y - MARKER_HALF_MM),
                (x + MARKER_HALF_MM, y - MARKER_HALF_MM),
                (x + MARKER_HALF_MM, y + MARKER_HALF_MM),
                (x - MARKER_HALF_MM, y + MARKER_HALF_MM),
                (x - MARKER_HALF_MM, y - MARKER_HALF_MM),
            ],
        );
    }
}

/// Writes the one-page report, replacing any previous file at `path`.
pub fn write_report(
    path: &Path,
    measurement: &ApproachMeasurement,
    result: &ApproachResult,
) -> Result<(), OutputError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let (doc, page, layer) = PdfDocument::new(
        "Approach Report",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Report",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| OutputError::Report(e.to_string()))?;
    let layer = doc.get_page(page).get_layer(layer);

    draw_summary(&layer, &font, measurement, result);
    draw_path_chart(&layer, &font, measurement);

    let mut writer = BufWriter::new(File::create(path)?);
    doc.save(&mut writer)
        .map_err(|e| OutputError::Report(e.to_string()))?;

    log::debug!("Wrote approach report to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_point_maps_to_bottom_left() {
        let (x, y) = to_page((0.0, 1000.0), 1000.0, 1000.0);

        assert!((x - PLOT_LEFT_MM).abs() < 1e-4);
        assert!((y - PLOT_BOTTOM_MM).abs() < 1e-4);
    }

    #[test]
    fn threshold_maps_to_top_edge() {
        let (x, y) = to_page((500.0, 0.0), 1000.0, 1000.0);

        assert!((x - (PLOT_LEFT_MM + PLOT_RIGHT_MM) / 2.0).abs() < 1e-4);
        assert!((y - PLOT_TOP_MM).abs() < 1e-4);
    }

    #[test]
    fn degree_sign_is_spelled_out() {
        assert_eq!(pdf_text("Angle: 5.71°"), "Angle: 5.71 deg");
    }

    #[test]
    fn writes_a_pdf_file() {
        let dir = std::env::temp_dir().join(format!(
            "glide_approach_report_{}",
            std::process::id()
        ));
        let path = dir.join("approach_report.pdf");
        let measurement = ApproachMeasurement::new(1000.0, 10000.0, 3.0).expect("valid");
        let result = crate::core::approach::calculate_approach(measurement).expect("valid");

        write_report(&path, &measurement, &result).expect("report should be written");
        write_report(&path, &measurement, &result).expect("report should be overwritten");

        let bytes = fs::read(&path).expect("report exists");
        assert!(bytes.starts_with(b"%PDF"));
        let _ = fs::remove_dir_all(&dir);
    }
}
