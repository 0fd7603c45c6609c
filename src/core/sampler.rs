use macroquad::rand::RandGenerator;

use crate::core::approach::ApproachMeasurement;

pub const ALTITUDE_RANGE_FT: (f64, f64) = (1000.0, 2000.0);
pub const DISTANCE_RANGE_FT: (f64, f64) = (10000.0, 15000.0);
pub const TIME_RANGE_MIN: (f64, f64) = (2.5, 4.0);

fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Synthetic sensor feed: uniform draws rounded to two decimals.
pub struct Sampler {
    rng: RandGenerator,
}

impl Sampler {
    pub fn seeded(seed: u64) -> Self {
        let rng = RandGenerator::new();
        rng.srand(seed);
        Self { rng }
    }

    pub fn from_clock() -> Self {
        let now = chrono::Utc::now();
        let seed = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_millis()) as u64;
        Self::seeded(seed)
    }

    fn draw(&self, range: (f64, f64)) -> f64 {
        round_2dp(self.rng.gen_range(range.0, range.1)).clamp(range.0, range.1)
    }

    pub fn sample(&self) -> ApproachMeasurement {
        // Every range is strictly positive, so the struct is valid without `new`.
        ApproachMeasurement {
            altitude_ft: self.draw(ALTITUDE_RANGE_FT),
            horizontal_distance_ft: self.draw(DISTANCE_RANGE_FT),
            time_min: self.draw(TIME_RANGE_MIN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::approach::calculate_approach;

    fn in_range(value: f64, range: (f64, f64)) -> bool {
        (range.0..=range.1).contains(&value)
    }

    #[test]
    fn samples_stay_in_documented_ranges() {
        let sampler = Sampler::seeded(7);
        for _ in 0..500 {
            let m = sampler.sample();
            assert!(in_range(m.altitude_ft, ALTITUDE_RANGE_FT), "{m:?}");
            assert!(in_range(m.horizontal_distance_ft, DISTANCE_RANGE_FT), "{m:?}");
            assert!(in_range(m.time_min, TIME_RANGE_MIN), "{m:?}");
        }
    }

    #[test]
    fn samples_produce_finite_positive_results() {
        let sampler = Sampler::from_clock();
        for _ in 0..200 {
            let result = calculate_approach(sampler.sample()).expect("sample should be valid");
            assert!(result.angle_deg.is_finite() && result.angle_deg > 0.0);
            assert!(result.speed_knots.is_finite() && result.speed_knots > 0.0);
        }
    }

    #[test]
    fn samples_are_rounded_to_hundredths() {
        let m = Sampler::seeded(99).sample();
        for value in [m.altitude_ft, m.horizontal_distance_ft, m.time_min] {
            assert!((value * 100.0 - (value * 100.0).round()).abs() < 1e-6, "{value}");
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = Sampler::seeded(1234);
        let b = Sampler::seeded(1234);
        for _ in 0..10 {
            assert_eq!(a.sample(), b.sample());
        }
    }
}
