//! Time-dependent hydraulic input.

use dk_core::Real;

/// One simulation interval with its hydraulic boundary conditions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeDependentInput {
    pub begin_time: Real,
    pub end_time: Real,
    pub water_level: Real,
    pub wave_height_hm0: Real,
    pub wave_period_tm10: Real,
    pub wave_angle: Real,
}

impl TimeDependentInput {
    pub fn new(
        begin_time: Real,
        end_time: Real,
        water_level: Real,
        wave_height_hm0: Real,
        wave_period_tm10: Real,
        wave_angle: Real,
    ) -> Self {
        Self {
            begin_time,
            end_time,
            water_level,
            wave_height_hm0,
            wave_period_tm10,
            wave_angle,
        }
    }

    pub fn duration(&self) -> Real {
        self.end_time - self.begin_time
    }
}
