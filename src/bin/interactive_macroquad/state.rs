use glide_approach::config::Config;
use glide_approach::core::approach::{ApproachMeasurement, ApproachResult};
use glide_approach::core::sampler::Sampler;
use glide_approach::output::format::float_text;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PathView {
    TwoD,
    ThreeD,
}

impl PathView {
    pub(crate) fn toggled(self) -> Self {
        match self {
            Self::TwoD => Self::ThreeD,
            Self::ThreeD => Self::TwoD,
        }
    }

    pub(crate) fn button_text(self) -> &'static str {
        match self {
            Self::TwoD => "Show 3D Path",
            Self::ThreeD => "Show 2D Path",
        }
    }
}

/// Text exactly as typed into the three entry fields.
#[derive(Default)]
pub(crate) struct FormFields {
    pub(crate) altitude: String,
    pub(crate) distance: String,
    pub(crate) time: String,
}

impl FormFields {
    pub(crate) fn fill_from(&mut self, measurement: ApproachMeasurement) {
        self.altitude = float_text(measurement.altitude_ft);
        self.distance = float_text(measurement.horizontal_distance_ft);
        self.time = float_text(measurement.time_min);
    }
}

pub(crate) struct ErrorNotice {
    pub(crate) title: &'static str,
    pub(crate) message: String,
    pub(crate) detail: String,
}

pub(crate) struct AppRuntime {
    pub(crate) config: Config,
    pub(crate) sampler: Sampler,
    pub(crate) form: FormFields,
    pub(crate) last: Option<(ApproachMeasurement, ApproachResult)>,
    pub(crate) notice: Option<ErrorNotice>,
    pub(crate) view: PathView,
    pub(crate) orbit_yaw: f32,
    pub(crate) status_line: String,
}

impl AppRuntime {
    pub(crate) fn new(config: Config) -> Self {
        let sampler = match config.sampler.seed {
            Some(seed) => Sampler::seeded(seed),
            None => Sampler::from_clock(),
        };
        Self {
            config,
            sampler,
            form: FormFields::default(),
            last: None,
            notice: None,
            view: PathView::TwoD,
            orbit_yaw: 0.0,
            status_line: "Enter values or use sampled data".to_string(),
        }
    }

    pub(crate) fn is_blocked(&self) -> bool {
        self.notice.is_some()
    }
}
