//! Solar exposure requirement.
//!
//! Converts the last UV/cloud reading into a required-exposure target and
//! tracks progress toward it. The weather collaborator pushes readings in;
//! the exposure collaborator pushes accumulated minutes; this engine only
//! derives and clamps.

use serde::{Deserialize, Serialize};

/// Required minutes under clear skies (cloud cover <= 50%).
const CLEAR_SKY_MINUTES: u32 = 10;
/// Required minutes when overcast (cloud cover > 50%).
const OVERCAST_MINUTES: u32 = 20;

/// Derived solar status.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarStatus {
    pub uv_index: u32,
    pub required_minutes: u32,
    pub current_minutes: u32,
    /// Completion ratio, clamped to [0, 1].
    pub progress: f64,
}

impl SolarStatus {
    pub fn status_line(&self) -> String {
        if self.current_minutes >= self.required_minutes {
            "COMPLETE".to_string()
        } else {
            format!("{} MIN REMAINING", self.required_minutes - self.current_minutes)
        }
    }
}

/// Last weather reading plus accumulated exposure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolarRequirement {
    uv_index: u32,
    cloud_cover: f64,
    current_minutes: u32,
}

impl SolarRequirement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the last weather reading atomically. Cloud cover is a ratio
    /// in [0, 1]; out-of-range values are clamped.
    pub fn update_reading(&mut self, uv_index: u32, cloud_cover: f64) {
        self.uv_index = uv_index;
        self.cloud_cover = cloud_cover.clamp(0.0, 1.0);
    }

    /// Replace accumulated exposure minutes. The collaborator owns
    /// monotonicity; this engine reflects whatever it reports.
    pub fn update_exposure(&mut self, minutes: u32) {
        self.current_minutes = minutes;
    }

    /// Overcast (>50% cloud cover) doubles the requirement.
    pub fn required_minutes(&self) -> u32 {
        if self.cloud_cover > 0.5 {
            OVERCAST_MINUTES
        } else {
            CLEAR_SKY_MINUTES
        }
    }

    pub fn snapshot(&self) -> SolarStatus {
        let required = self.required_minutes();
        let progress = if required == 0 {
            0.0
        } else {
            (self.current_minutes as f64 / required as f64).min(1.0)
        };
        SolarStatus {
            uv_index: self.uv_index,
            required_minutes: required,
            current_minutes: self.current_minutes,
            progress,
        }
    }
}
