use bevy::prelude::*;

// Globe measurements (scene units)
pub const EARTH_RADIUS: f32 = 5.0;
pub const CLOUD_RADIUS: f32 = 5.05;
pub const ATMOSPHERE_RADIUS: f32 = 5.3;
pub const CITY_MARKER_RADIUS: f32 = 5.01;

// Sphere mesh resolution (longitude, latitude subdivisions)
pub const SPHERE_SECTORS: u32 = 64;
pub const SPHERE_STACKS: u32 = 64;

// Rotation speeds (radians per second)
pub const CLOUD_ROTATION_SPEED: f32 = 0.012;

// Sun
pub const SUN_ORBIT_RADIUS: f32 = 10.0;
pub const SUN_ILLUMINANCE: f32 = 10_000.0;

// Colors
pub const ATMOSPHERE_COLOR: Color = Color::srgb(0.0, 0.467, 1.0); // #0077ff
pub const CITY_LIGHT_COLOR: Color = Color::srgb(1.0, 0.647, 0.0); // #ffa500
pub const AMBIENT_COLOR: Color = Color::srgb(0.2, 0.2, 0.2); // #333333

// City point lights
pub const CITY_LIGHT_INTENSITY: f32 = 40_000.0;
pub const CITY_LIGHT_RANGE: f32 = 0.5;

// Clouds
pub const CLOUD_OPACITY: f32 = 0.4;

// Camera
pub const CAMERA_START_DISTANCE: f32 = 15.0;
pub const CAMERA_MIN_DISTANCE: f32 = 8.0;
pub const CAMERA_MAX_DISTANCE: f32 = 50.0;

// Starfield
pub const STAR_COUNT: usize = 600;
pub const STARFIELD_RADIUS: f32 = 200.0;

// Asset paths
pub const EARTH_DAY_TEXTURE: &str = "textures/earth_day.jpg";
pub const EARTH_NIGHT_TEXTURE: &str = "textures/earth_night.jpg";
pub const EARTH_CLOUDS_TEXTURE: &str = "textures/earth_clouds.png";
