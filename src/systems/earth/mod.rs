use bevy::color::ColorToComponents;
use bevy::prelude::*;

pub mod materials;

use materials::{AtmosphereMaterial, CloudMaterial, EarthMaterial, GlowUniform, SunUniform};

use crate::Sun;
use crate::config::{
    ATMOSPHERE_COLOR, ATMOSPHERE_RADIUS, CLOUD_OPACITY, CLOUD_RADIUS, CLOUD_ROTATION_SPEED,
    EARTH_CLOUDS_TEXTURE, EARTH_DAY_TEXTURE, EARTH_NIGHT_TEXTURE, EARTH_RADIUS, SPHERE_SECTORS,
    SPHERE_STACKS,
};
use crate::shading::sun_direction;
use crate::systems::time::TimeOfDay;

pub struct EarthPlugin;

impl Plugin for EarthPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<EarthMaterial>::default())
            .add_plugins(MaterialPlugin::<AtmosphereMaterial>::default())
            .add_plugins(MaterialPlugin::<CloudMaterial>::default())
            .add_systems(Startup, start)
            .add_systems(Update, (update_shaders, rotate_clouds));
    }
}

// globe tag
#[derive(Component)]
pub struct Earth;

// cloud shell tag
#[derive(Component)]
pub struct Clouds;

pub fn start(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut earth_materials: ResMut<Assets<EarthMaterial>>,
    mut atmosphere_materials: ResMut<Assets<AtmosphereMaterial>>,
    mut cloud_materials: ResMut<Assets<CloudMaterial>>,
    asset_server: Res<AssetServer>,
    time_of_day: Res<TimeOfDay>,
) {
    let initial_sun = sun_direction(time_of_day.angle());

    // load textures
    let day_texture = asset_server.load(EARTH_DAY_TEXTURE);
    let night_texture = asset_server.load(EARTH_NIGHT_TEXTURE);
    let cloud_texture = asset_server.load(EARTH_CLOUDS_TEXTURE);

    // earth sphere
    let earth = commands
        .spawn((
            Earth,
            Mesh3d(meshes.add(
                Sphere::new(EARTH_RADIUS)
                    .mesh()
                    .uv(SPHERE_SECTORS, SPHERE_STACKS),
            )),
            MeshMaterial3d(earth_materials.add(EarthMaterial {
                day_texture,
                night_texture,
                sun_uniform: SunUniform {
                    direction: initial_sun,
                    _padding: 0.0,
                },
            })),
            Transform::from_xyz(0.0, 0.0, 0.0),
        ))
        .id();

    // cloud shell, child of the earth
    commands
        .spawn((
            Clouds,
            Mesh3d(meshes.add(
                Sphere::new(CLOUD_RADIUS)
                    .mesh()
                    .uv(SPHERE_SECTORS, SPHERE_STACKS),
            )),
            MeshMaterial3d(cloud_materials.add(CloudMaterial {
                cloud_texture,
                sun_uniform: SunUniform {
                    direction: initial_sun,
                    _padding: 0.0,
                },
                opacity: CLOUD_OPACITY,
            })),
            Transform::from_xyz(0.0, 0.0, 0.0),
        ))
        .insert(ChildOf(earth));

    // atmosphere shell, back faces only
    commands.spawn((
        Mesh3d(meshes.add(
            Sphere::new(ATMOSPHERE_RADIUS)
                .mesh()
                .uv(SPHERE_SECTORS, SPHERE_STACKS),
        )),
        MeshMaterial3d(atmosphere_materials.add(AtmosphereMaterial {
            glow: GlowUniform {
                color: ATMOSPHERE_COLOR.to_linear().to_vec3(),
                _padding: 0.0,
            },
        })),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));
}

// push the current sun direction into the shader uniforms
fn update_shaders(
    sun_query: Query<&Transform, (With<Sun>, Changed<Transform>)>,
    earth_query: Query<&MeshMaterial3d<EarthMaterial>, With<Earth>>,
    cloud_query: Query<&MeshMaterial3d<CloudMaterial>, With<Clouds>>,
    mut earth_materials: ResMut<Assets<EarthMaterial>>,
    mut cloud_materials: ResMut<Assets<CloudMaterial>>,
) {
    let Ok(sun_transform) = sun_query.single() else {
        return; // sun did not move this frame
    };

    // the light looks at the origin, so its backward axis is the direction
    // from the globe toward the sun
    let direction = -sun_transform.forward();

    if let Ok(earth_material_handle) = earth_query.single() {
        if let Some(earth_material) = earth_materials.get_mut(&earth_material_handle.0) {
            earth_material.sun_uniform.direction = direction.into();
        }
    }

    if let Ok(cloud_material_handle) = cloud_query.single() {
        if let Some(cloud_material) = cloud_materials.get_mut(&cloud_material_handle.0) {
            cloud_material.sun_uniform.direction = direction.into();
        }
    }
}

// slow cloud drift, independent of the static globe underneath
fn rotate_clouds(time: Res<Time>, mut cloud_query: Query<&mut Transform, With<Clouds>>) {
    let delta_rotation = Quat::from_rotation_y(CLOUD_ROTATION_SPEED * time.delta_secs());

    if let Ok(mut transform) = cloud_query.single_mut() {
        transform.rotation = transform.rotation * delta_rotation;
    }
}
