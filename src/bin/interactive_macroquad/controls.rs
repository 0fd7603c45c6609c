use glide_approach::output::format::{
    ANGLE_PLACEHOLDER, SPEED_PLACEHOLDER, format_angle, format_speed,
};
use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::{
    ALTITUDE_LABEL, DISTANCE_LABEL, FORM_PANEL_H, FORM_PANEL_W, FORM_PANEL_X, FORM_PANEL_Y,
    TIME_LABEL,
};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) calculate: bool,
    pub(crate) use_sample: bool,
    pub(crate) toggle_view: bool,
    pub(crate) dismiss_notice: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            calculate: self.calculate || other.calculate,
            use_sample: self.use_sample || other.use_sample,
            toggle_view: self.toggle_view || other.toggle_view,
            dismiss_notice: self.dismiss_notice || other.dismiss_notice,
        }
    }

    /// While the error notice is up, only dismissal gets through.
    pub(crate) fn gated(self, blocked: bool) -> Self {
        if blocked {
            Self {
                dismiss_notice: self.dismiss_notice,
                ..Default::default()
            }
        } else {
            Self {
                dismiss_notice: false,
                ..self
            }
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        calculate: is_key_pressed(KeyCode::Enter),
        dismiss_notice: is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::Escape),
        ..Default::default()
    }
}

pub(crate) fn draw_form_panel(state: &mut AppRuntime) -> FrameActions {
    let mut actions = FrameActions::default();
    let angle_line = state
        .last
        .map_or_else(|| ANGLE_PLACEHOLDER.to_string(), |(_, r)| format_angle(&r));
    let speed_line = state
        .last
        .map_or_else(|| SPEED_PLACEHOLDER.to_string(), |(_, r)| format_speed(&r));
    let view_text = state.view.button_text();

    widgets::Window::new(
        hash!(),
        vec2(FORM_PANEL_X, FORM_PANEL_Y),
        vec2(FORM_PANEL_W, FORM_PANEL_H),
    )
    .label("Approach Inputs")
    .movable(false)
    .ui(&mut *root_ui(), |ui| {
        ui.input_text(hash!(), ALTITUDE_LABEL, &mut state.form.altitude);
        ui.input_text(hash!(), DISTANCE_LABEL, &mut state.form.distance);
        ui.input_text(hash!(), TIME_LABEL, &mut state.form.time);
        ui.separator();
        if ui.button(None, "Calculate") {
            actions.calculate = true;
        }
        if ui.button(None, "Use sampled data") {
            actions.use_sample = true;
        }
        ui.separator();
        ui.label(None, &angle_line);
        ui.label(None, &speed_line);
        ui.separator();
        if ui.button(None, view_text) {
            actions.toggle_view = true;
        }
    });

    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocked_frames_only_dismiss() {
        let all = FrameActions {
            calculate: true,
            use_sample: true,
            toggle_view: true,
            dismiss_notice: true,
        };

        let gated = all.gated(true);
        assert!(gated.dismiss_notice);
        assert!(!gated.calculate && !gated.use_sample && !gated.toggle_view);
    }

    #[test]
    fn open_frames_never_dismiss() {
        let actions = FrameActions {
            calculate: true,
            dismiss_notice: true,
            ..Default::default()
        }
        .gated(false);

        assert!(actions.calculate);
        assert!(!actions.dismiss_notice);
    }

    #[test]
    fn merge_keeps_any_request() {
        let merged = FrameActions {
            calculate: true,
            ..Default::default()
        }
        .merge(FrameActions {
            use_sample: true,
            ..Default::default()
        });

        assert!(merged.calculate && merged.use_sample);
        assert!(!merged.toggle_view);
    }
}
