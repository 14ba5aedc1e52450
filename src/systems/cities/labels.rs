use std::collections::HashMap;

use bevy::prelude::*;
use bevy::render::camera::Camera;
use bevy::window::Window;

use crate::config::EARTH_RADIUS;
use crate::systems::cities::CityMarker;

// full ui screen container component
#[derive(Component)]
pub struct LabelContainer;

// individual city name labels
#[derive(Component)]
pub struct CityLabel {
    pub marker_entity: Entity,
}

// setup UI overlay
pub fn setup_labels(mut commands: Commands) {
    // create UI container covering entire screen
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        },
        BackgroundColor(Color::NONE),
        LabelContainer,
    ));
}

pub fn update_labels(
    mut commands: Commands,
    markers: Query<(Entity, &GlobalTransform, &CityMarker)>,
    camera: Query<(&Camera, &Transform), With<Camera3d>>,
    mut labels: Query<(Entity, &mut Node, &mut Visibility, &CityLabel)>,
    container: Query<Entity, With<LabelContainer>>,
    window: Query<&Window>,
) {
    let (Ok(window), Ok((camera, cam_transform)), Ok(container)) =
        (window.single(), camera.single(), container.single())
    else {
        return;
    };

    // map existing labels by marker entity
    let existing_labels: HashMap<Entity, Entity> = labels
        .iter()
        .map(|(label_entity, _, _, city_label)| (city_label.marker_entity, label_entity))
        .collect();

    for (marker_entity, marker_transform, marker) in markers.iter() {
        let marker_pos = marker_transform.translation();

        // check visibility, get screen position
        let visible = is_visible(marker_pos, cam_transform.translation, Vec3::ZERO, EARTH_RADIUS);
        let screen_pos =
            world_to_screen(marker_pos, camera, cam_transform, window.width(), window.height());

        let should_show = visible && screen_pos.is_some();

        if let Some(&label_entity) = existing_labels.get(&marker_entity) {
            // update existing label
            if let Ok((_, mut node, mut visibility, _)) = labels.get_mut(label_entity) {
                if should_show {
                    let pos = screen_pos.unwrap(); // known Some
                    *visibility = Visibility::Inherited;
                    node.left = Val::Px(pos.x);
                    node.top = Val::Px(pos.y);
                } else {
                    *visibility = Visibility::Hidden;
                }
            }
        } else if should_show {
            // create new label
            let pos = screen_pos.unwrap(); // known Some

            commands.entity(container).with_children(|parent| {
                parent.spawn((
                    Text::new(marker.name.clone()),
                    TextFont {
                        font_size: 10.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Px(pos.x),
                        top: Val::Px(pos.y),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)), // textbox background
                    CityLabel {
                        marker_entity,
                    },
                ));
            });
        }
    }
}

// UTILS

// convert world coordinates to screen coordinates
fn world_to_screen(
    world_pos: Vec3,
    camera: &Camera,
    camera_transform: &Transform,
    screen_width: f32,
    screen_height: f32,
) -> Option<Vec2> {
    let view_matrix = camera_transform.compute_matrix().inverse();
    let view_projection = camera.clip_from_view() * view_matrix;

    // transform to clip space
    let clip_pos = view_projection * Vec4::new(world_pos.x, world_pos.y, world_pos.z, 1.0);

    if clip_pos.w <= 0.0 {
        return None; // behind camera
    }

    // convert to NDC and check bounds
    let ndc = clip_pos.xyz() / clip_pos.w;
    if ndc.x.abs() > 1.0 || ndc.y.abs() > 1.0 {
        return None; // offscreen
    }

    // NDC to screen coordinates
    Some(Vec2::new(
        (ndc.x + 1.0) * 0.5 * screen_width,
        (1.0 - ndc.y) * 0.5 * screen_height, // Y is flipped
    ))
}

// check if a marker is visible from the camera (unblocked by the globe)
// simple ray-sphere intersection test
fn is_visible(marker_pos: Vec3, cam_pos: Vec3, earth_center: Vec3, earth_radius: f32) -> bool {
    let cam_to_marker = marker_pos - cam_pos;
    let cam_to_earth = earth_center - cam_pos;

    let projection = cam_to_earth.dot(cam_to_marker.normalize());
    if projection < 0.0 || projection > cam_to_marker.length() {
        return true;
    }

    let closest_point = cam_pos + cam_to_marker.normalize() * projection;
    (closest_point - earth_center).length() > earth_radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_facing_camera_is_visible() {
        // camera on +X, marker on the near side of the sphere
        assert!(is_visible(
            Vec3::new(5.01, 0.0, 0.0),
            Vec3::new(15.0, 0.0, 0.0),
            Vec3::ZERO,
            5.0,
        ));
    }

    #[test]
    fn test_marker_behind_globe_is_hidden() {
        assert!(!is_visible(
            Vec3::new(-5.01, 0.0, 0.0),
            Vec3::new(15.0, 0.0, 0.0),
            Vec3::ZERO,
            5.0,
        ));
    }

    #[test]
    fn test_marker_at_forty_five_degrees_is_visible() {
        // closest approach to the globe lies past the marker itself
        assert!(is_visible(
            Vec3::new(3.543, 3.543, 0.0),
            Vec3::new(15.0, 0.0, 0.0),
            Vec3::ZERO,
            5.0,
        ));
    }
}
