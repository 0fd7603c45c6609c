use glide_approach::core::approach::{ApproachMeasurement, calculate_approach};
use glide_approach::error::ApproachError;
use glide_approach::session::run_calculation;

use crate::constants::{INPUT_ERROR_TEXT, INPUT_ERROR_TITLE, ORBIT_RATE_RAD_S};
use crate::controls::FrameActions;
use crate::state::{AppRuntime, ErrorNotice, PathView};

fn show_input_error(state: &mut AppRuntime, err: ApproachError) {
    log::warn!("Rejected form input: {err}");
    state.notice = Some(ErrorNotice {
        title: INPUT_ERROR_TITLE,
        message: INPUT_ERROR_TEXT.to_string(),
        detail: err.to_string(),
    });
}

/// Parses the form, shows the result, then hands it to the file sinks.
/// Invalid input raises the notice and touches nothing else.
pub(crate) fn calculate_from_form(state: &mut AppRuntime) {
    let parsed = ApproachMeasurement::parse(
        &state.form.altitude,
        &state.form.distance,
        &state.form.time,
    );
    let measurement = match parsed {
        Ok(m) => m,
        Err(err) => return show_input_error(state, err),
    };
    let result = match calculate_approach(measurement) {
        Ok(r) => r,
        Err(err) => return show_input_error(state, err),
    };
    state.last = Some((measurement, result));

    match run_calculation(measurement, &state.config.output) {
        Ok(record) => {
            state.status_line = format!("Saved {} output file(s)", record.artifacts.len());
        }
        Err(err) => {
            log::error!("Could not write approach outputs: {err}");
            state.status_line = format!("Could not write outputs: {err}");
        }
    }
}

pub(crate) fn use_sampled_data(state: &mut AppRuntime) {
    let measurement = state.sampler.sample();
    state.form.fill_from(measurement);
    calculate_from_form(state);
}

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if actions.dismiss_notice {
        state.notice = None;
    }
    if actions.use_sample {
        use_sampled_data(state);
    } else if actions.calculate {
        calculate_from_form(state);
    }
    if actions.toggle_view {
        state.view = state.view.toggled();
    }
}

/// One frame of input. While the notice is up only its dismissal gets through.
pub(crate) fn apply_frame(state: &mut AppRuntime, actions: FrameActions) {
    let blocked = state.is_blocked();
    apply_actions(state, actions.gated(blocked));
}

pub(crate) fn advance_orbit(state: &mut AppRuntime, frame_dt: f32) {
    if state.view == PathView::ThreeD {
        state.orbit_yaw = (state.orbit_yaw + frame_dt * ORBIT_RATE_RAD_S) % std::f32::consts::TAU;
    }
}
