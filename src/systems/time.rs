//! time.rs
//!
//! Time-of-day state and the per-frame sun placement driven by it.

use bevy::prelude::*;
use chrono::NaiveTime;
use std::f32::consts::{PI, TAU};

use crate::Sun;
use crate::shading::sun_position;

pub struct TimeOfDayPlugin;

impl Plugin for TimeOfDayPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(TimeOfDay::default())
            .add_systems(Update, update_sun);
    }
}

/// Slider-controlled time of day, hours in [0, 24).
///
/// The angle mapping is taken verbatim from the original scene: hour 0 maps
/// to angle pi and the sun starts there. Note that hour 12 then maps to
/// angle 2*pi, i.e. the opposite side of the globe from the start position.
#[derive(Resource)]
pub struct TimeOfDay {
    pub hours: f32,
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self { hours: 0.0 }
    }
}

impl TimeOfDay {
    pub fn set_hours(&mut self, hours: f32) {
        self.hours = hours.clamp(0.0, 23.999);
    }

    /// Time angle in radians.
    pub fn angle(&self) -> f32 {
        hours_to_angle(self.hours)
    }

    /// Clock readout for the UI, e.g. "07:30".
    pub fn formatted(&self) -> String {
        let seconds = (self.hours * 3600.0) as u32 % 86_400;
        let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
            .unwrap_or(NaiveTime::MIN);
        time.format("%H:%M").to_string()
    }
}

/// Converts a 24-hour slider value to a sun angle in radians.
pub fn hours_to_angle(hours: f32) -> f32 {
    (hours / 24.0) * TAU + PI
}

// move the sun light along its XZ circle
// idempotent for a fixed time of day
fn update_sun(
    time_of_day: Res<TimeOfDay>,
    mut sun_query: Query<&mut Transform, With<Sun>>,
) {
    if let Ok(mut transform) = sun_query.single_mut() {
        *transform = Transform::from_translation(sun_position(time_of_day.angle()))
            .looking_at(Vec3::ZERO, Vec3::Y);
    }
}
