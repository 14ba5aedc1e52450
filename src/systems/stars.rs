use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;
use rand::Rng;

use crate::config::{STAR_COUNT, STARFIELD_RADIUS};

pub struct StarfieldPlugin;

impl Plugin for StarfieldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, start);
    }
}

// one point-list mesh for the whole sky, far outside the camera zoom range
fn create_star_mesh(count: usize, radius: f32) -> Mesh {
    let mut rng = rand::rng();
    let mut positions = Vec::with_capacity(count);

    while positions.len() < count {
        // rejection-sample a direction to avoid pole clustering
        let candidate = Vec3::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        );
        if candidate.length_squared() > 1e-4 && candidate.length_squared() <= 1.0 {
            let point = candidate.normalize() * radius;
            positions.push([point.x, point.y, point.z]);
        }
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::PointList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);

    mesh
}

fn start(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(create_star_mesh(STAR_COUNT, STARFIELD_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true, // stars glow on their own
            ..default()
        })),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));
}
