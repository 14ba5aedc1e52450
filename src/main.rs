use bevy::prelude::*;

mod config;
mod geo;
mod shading;
mod systems;

use config::{AMBIENT_COLOR, CAMERA_START_DISTANCE, SUN_ILLUMINANCE};
use shading::sun_position;
use systems::camera::{OrbitCamPlugin, OrbitCamera};
use systems::cities::CityPlugin;
use systems::earth::EarthPlugin;
use systems::stars::StarfieldPlugin;
use systems::time::{TimeOfDay, TimeOfDayPlugin};
use systems::ui::GlobeUIPlugin;

fn main() -> bevy::app::AppExit {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(TimeOfDayPlugin)
        .add_plugins(EarthPlugin)
        .add_plugins(CityPlugin)
        .add_plugins(StarfieldPlugin)
        .add_plugins(OrbitCamPlugin)
        .add_plugins(GlobeUIPlugin)
        .insert_resource(ClearColor(Color::srgb(0.0, 0.0, 0.0)))
        .insert_resource(AmbientLight {
            color: AMBIENT_COLOR,
            brightness: 80.0,
            ..default()
        })
        .add_systems(Startup, setup)
        .run()
}

// the sun light, moved each frame by the time-of-day system
#[derive(Component)]
pub struct Sun;

// scene setup here
fn setup(mut commands: Commands, time_of_day: Res<TimeOfDay>) {
    // sun light, placed at its time-of-day position from the first frame
    commands.spawn((
        Sun,
        DirectionalLight {
            illuminance: SUN_ILLUMINANCE,
            ..default()
        },
        Transform::from_translation(sun_position(time_of_day.angle()))
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // spawn camera
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 0.0, CAMERA_START_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
        OrbitCamera::new(CAMERA_START_DISTANCE, 0.5).with_target(Vec3::ZERO),
    ));
}
