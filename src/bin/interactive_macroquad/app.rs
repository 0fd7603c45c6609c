use glide_approach::config::Config;
use macroquad::prelude::*;
use std::path::Path;

use crate::actions::{advance_orbit, apply_frame};
use crate::constants::{
    BACKGROUND, BOTTOM_MARGIN, CONFIG_PATH, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH,
    LEFT_MARGIN, MSAA_SAMPLES, RIGHT_MARGIN, TOP_MARGIN, UI_FONT_PATH, WINDOW_TITLE,
};
use crate::controls::{draw_form_panel, hotkey_actions};
use crate::hud::{draw_error_notice, draw_hud};
use crate::projection::{PlotArea, compute_world_window, path_points, scene_points};
use crate::render::{
    draw_axes_legend_3d, draw_axis_tick_labels, draw_path_2d, draw_path_3d, draw_plot_grid,
};
use crate::state::{AppRuntime, PathView};

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn load_config() -> Config {
    let path = Path::new(CONFIG_PATH);
    if !path.exists() {
        return Config::default();
    }
    match Config::load(path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Could not load '{CONFIG_PATH}': {err}. Using defaults.");
            Config::default()
        }
    }
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            log::info!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new(load_config());

    loop {
        let frame_dt = get_frame_time();
        let screen_w = screen_width();
        let screen_h = screen_height();
        let area = PlotArea {
            left: LEFT_MARGIN,
            right: screen_w - RIGHT_MARGIN,
            top: TOP_MARGIN,
            bottom: screen_h - BOTTOM_MARGIN,
        };

        clear_background(BACKGROUND);

        let (world_max_x, world_max_y) = compute_world_window(state.last.map(|(m, _)| m));
        match state.view {
            PathView::TwoD => {
                draw_plot_grid(area);
                draw_axis_tick_labels(area, world_max_x, world_max_y, ui_font.as_ref());
                if let Some((measurement, _)) = state.last {
                    draw_path_2d(&path_points(measurement), world_max_x, world_max_y, area);
                }
            }
            PathView::ThreeD => {
                if let Some((measurement, _)) = state.last {
                    draw_path_3d(&scene_points(measurement), state.orbit_yaw);
                }
                draw_axes_legend_3d(area.left, area.top + 10.0, ui_font.as_ref());
            }
        }

        draw_hud(&state, area.left, screen_h, ui_font.as_ref());

        let mut actions = hotkey_actions();
        if let Some(notice) = &state.notice {
            if draw_error_notice(notice, screen_w, screen_h, ui_font.as_ref()) {
                actions.dismiss_notice = true;
            }
        } else {
            actions = actions.merge(draw_form_panel(&mut state));
        }
        apply_frame(&mut state, actions);
        advance_orbit(&mut state, frame_dt);

        next_frame().await;
    }
}
