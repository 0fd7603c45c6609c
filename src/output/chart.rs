use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

use crate::core::approach::{ApproachMeasurement, approach_path, approach_path_3d};
use crate::core::window::{format_axis_value, lateral_half_span, padded_axis_window_f64};

pub const PLOT_WIDTH: u32 = 900;
pub const PLOT_HEIGHT: u32 = 600;
pub const FONT_TUPLE_CHART_TITLE: (&str, i32) = ("sans-serif", 26);
pub const FONT_TUPLE_AXIS_LABEL: (&str, i32) = ("sans-serif", 16);
pub const POINT_MARKER_SIZE: u32 = 5;
pub const LINE_WIDTH_PATH: u32 = 2;

const PATH_2D_COLOR: RGBColor = RGBColor(31, 119, 180);
const PATH_3D_COLOR: RGBColor = RGBColor(214, 39, 40);

/// 2D approach path: distance on x, altitude on an inverted y axis.
pub fn render_path_chart(
    path: &Path,
    measurement: &ApproachMeasurement,
) -> Result<(), Box<dyn Error>> {
    let (x_span, y_span) =
        padded_axis_window_f64(measurement.horizontal_distance_ft, measurement.altitude_ft);

    let root = BitMapBackend::new(path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    // Altitude is drawn as depth below zero so that zero sits at the top.
    let mut chart = ChartBuilder::on(&root)
        .caption("Approach Path", FONT_TUPLE_CHART_TITLE)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..x_span, -y_span..0.0)?;

    chart
        .configure_mesh()
        .x_desc("Horizontal Distance (ft)")
        .y_desc("Altitude (ft)")
        .axis_desc_style(FONT_TUPLE_AXIS_LABEL)
        .x_label_formatter(&|x| format_axis_value(*x, x_span))
        .y_label_formatter(&|y| format_axis_value(y.abs(), y_span))
        .draw()?;

    let points = approach_path(*measurement).map(|(x, altitude)| (x, -altitude));
    chart.draw_series(
        LineSeries::new(points, PATH_2D_COLOR.stroke_width(LINE_WIDTH_PATH))
            .point_size(POINT_MARKER_SIZE),
    )?;

    root.present()?;
    log::debug!("Rendered 2D approach chart to {}", path.display());
    Ok(())
}

/// 3D approach path with a zero lateral offset. Plotters treats its second
/// axis as vertical, so altitude goes there and lateral offset goes last.
pub fn render_path_chart_3d(
    path: &Path,
    measurement: &ApproachMeasurement,
) -> Result<(), Box<dyn Error>> {
    let (x_span, y_span) =
        padded_axis_window_f64(measurement.horizontal_distance_ft, measurement.altitude_ft);
    let lateral = lateral_half_span(y_span);

    let root = BitMapBackend::new(path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("3D Approach Path", FONT_TUPLE_CHART_TITLE)
        .margin(20)
        .build_cartesian_3d(0.0..x_span, 0.0..y_span, -lateral..lateral)?;

    chart.with_projection(|mut pb| {
        pb.yaw = 0.6;
        pb.pitch = 0.35;
        pb.scale = 0.85;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.1))
        .max_light_lines(3)
        .draw()?;

    let points = approach_path_3d(*measurement)
        .map(|(distance, lateral_offset, altitude)| (distance, altitude, lateral_offset));
    chart
        .draw_series(
            LineSeries::new(points, PATH_3D_COLOR.stroke_width(LINE_WIDTH_PATH))
                .point_size(POINT_MARKER_SIZE),
        )?
        .label("Distance (ft) / Altitude (ft) / Lateral Offset (ft)")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], PATH_3D_COLOR.stroke_width(2))
        });

    chart
        .configure_series_labels()
        .label_font(FONT_TUPLE_AXIS_LABEL)
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    log::debug!("Rendered 3D approach chart to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn measurement() -> ApproachMeasurement {
        ApproachMeasurement::new(1500.0, 12000.0, 3.5).expect("valid")
    }

    fn scratch_png(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "glide_approach_chart_{name}_{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("scratch dir");
        dir.join(format!("{name}.png"))
    }

    fn assert_png(path: &Path) {
        let bytes = fs::read(path).expect("chart exists");
        assert!(bytes.starts_with(&PNG_SIGNATURE), "{}", path.display());
    }

    #[test]
    fn renders_2d_chart_png() {
        let path = scratch_png("path_2d");

        render_path_chart(&path, &measurement()).expect("2D chart should render");

        assert_png(&path);
        let _ = fs::remove_dir_all(path.parent().expect("scratch dir"));
    }

    #[test]
    fn renders_3d_chart_png() {
        let path = scratch_png("path_3d");

        render_path_chart_3d(&path, &measurement()).expect("3D chart should render");

        assert_png(&path);
        let _ = fs::remove_dir_all(path.parent().expect("scratch dir"));
    }
}
