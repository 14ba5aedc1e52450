use bevy::color::ColorToComponents;
use bevy::prelude::*;
use serde::Deserialize;

pub mod labels;

use labels::setup_labels;

use crate::Sun;
use crate::config::{
    CITY_LIGHT_COLOR, CITY_LIGHT_INTENSITY, CITY_LIGHT_RANGE, CITY_MARKER_RADIUS,
};
use crate::geo::latlon_to_position;
use crate::shading::night_factor;
use crate::systems::earth::Earth;
use crate::systems::earth::materials::{CityGlowMaterial, GlowUniform};

// city table ships inside the binary, there is nothing to fetch
const CITY_DATA: &str = include_str!("../../../assets/cities.json");

pub struct CityPlugin;

impl Plugin for CityPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<CityGlowMaterial>::default())
            .add_systems(
                Startup,
                (setup_labels, start.after(crate::systems::earth::start)),
            )
            .add_systems(Update, (update_city_lights, labels::update_labels));
    }
}

// static marker record, parsed once at startup
#[derive(Deserialize, Clone, Debug)]
pub struct CityRecord {
    pub name: String,
    pub latitude: f32,
    pub longitude: f32,
    pub radius_scale: f32,
}

// marker component on the spawned entity
#[derive(Component)]
pub struct CityMarker {
    pub name: String,
}

pub fn parse_cities(data: &str) -> Result<Vec<CityRecord>, serde_json::Error> {
    serde_json::from_str(data)
}

fn start(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut glow_materials: ResMut<Assets<CityGlowMaterial>>,
    earth_query: Query<Entity, With<Earth>>,
) {
    let cities = match parse_cities(CITY_DATA) {
        Ok(cities) => cities,
        Err(err) => {
            // globe still works without markers
            error!("Failed to parse embedded city data: {err}");
            return;
        }
    };

    let Ok(earth) = earth_query.single() else {
        error!("No earth entity to attach city markers to");
        return;
    };

    info!("Spawning {} city markers", cities.len());

    // glow material is shared across all markers
    let glow_material = glow_materials.add(CityGlowMaterial {
        glow: GlowUniform {
            color: CITY_LIGHT_COLOR.to_linear().to_vec3(),
            _padding: 0.0,
        },
    });

    for city in cities {
        let position = latlon_to_position(city.latitude, city.longitude, CITY_MARKER_RADIUS);

        commands
            .spawn((
                Mesh3d(meshes.add(Sphere::new(city.radius_scale).mesh().uv(16, 16))),
                MeshMaterial3d(glow_material.clone()),
                PointLight {
                    color: CITY_LIGHT_COLOR,
                    intensity: CITY_LIGHT_INTENSITY,
                    range: CITY_LIGHT_RANGE,
                    shadows_enabled: false,
                    ..default()
                },
                Transform::from_translation(position),
                CityMarker { name: city.name },
            ))
            .insert(ChildOf(earth));
    }
}

// dim city lights on the day side, using the same terminator blend the
// earth shader applies per pixel
fn update_city_lights(
    sun_query: Query<&Transform, With<Sun>>,
    mut marker_query: Query<(&GlobalTransform, &mut PointLight), With<CityMarker>>,
) {
    let Ok(sun_transform) = sun_query.single() else {
        return;
    };
    let sun_direction = -sun_transform.forward();

    for (global_transform, mut light) in marker_query.iter_mut() {
        let surface_normal = global_transform.translation().normalize_or_zero();
        light.intensity =
            CITY_LIGHT_INTENSITY * night_factor(surface_normal, sun_direction.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_city_data_parses() {
        let cities = parse_cities(CITY_DATA).unwrap();
        assert_eq!(cities.len(), 10);
        assert!(cities.iter().any(|city| city.name == "Tokyo"));
    }

    #[test]
    fn test_city_records_are_plausible() {
        for city in parse_cities(CITY_DATA).unwrap() {
            assert!(city.latitude.abs() <= 90.0, "{}", city.name);
            assert!(city.longitude.abs() <= 180.0, "{}", city.name);
            assert!(city.radius_scale > 0.0, "{}", city.name);
        }
    }

    #[test]
    fn test_malformed_city_data_is_an_error() {
        assert!(parse_cities("[{\"name\": \"nowhere\"}]").is_err());
    }
}
