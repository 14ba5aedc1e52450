use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;

use crate::config::{CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE};

pub struct OrbitCamPlugin;

impl Plugin for OrbitCamPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, update);
    }
}

// camera component
#[derive(Component, Debug)]
pub struct OrbitCamera {
    pub radius: f32,
    pub speed: f32,
    pub angle: f32,
    pub v_angle: f32,
    pub is_dragging: bool,
    pub target: Vec3,

    // drag inertia, decays each frame
    pub angle_velocity: f32,
    pub v_angle_velocity: f32,
    pub damping: f32,

    pub min_radius: f32,
    pub max_radius: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            radius: 15.0,
            speed: 0.5,
            angle: 0.0,
            v_angle: 0.3,
            is_dragging: false,
            target: Vec3::ZERO,

            angle_velocity: 0.0,
            v_angle_velocity: 0.0,
            damping: 0.05,

            min_radius: CAMERA_MIN_DISTANCE,
            max_radius: CAMERA_MAX_DISTANCE,
        }
    }
}

impl OrbitCamera {
    pub fn new(radius: f32, speed: f32) -> Self {
        Self {
            radius,
            speed,
            ..default()
        }
    }

    // set target point for the camera to orbit
    pub fn with_target(mut self, target: Vec3) -> Self {
        self.target = target;
        self
    }

    #[allow(dead_code)]
    pub fn with_zoom_limits(mut self, min_radius: f32, max_radius: f32) -> Self {
        self.min_radius = min_radius;
        self.max_radius = max_radius;
        self
    }

    // calculate world position from spherical coordinates
    // https://en.wikipedia.org/wiki/Spherical_coordinate_system#Cartesian_coordinates
    pub fn calculate_position(&self) -> Vec3 {
        let x = self.radius * self.v_angle.cos() * self.angle.cos();
        let y = self.radius * self.v_angle.sin();
        let z = self.radius * self.v_angle.cos() * self.angle.sin();

        self.target + Vec3::new(x, y, z)
    }

    // zoom by a scroll delta, clamped to the configured limits
    pub fn zoom(&mut self, scroll_delta: f32) {
        self.radius = (self.radius - scroll_delta * 1.5).clamp(self.min_radius, self.max_radius);
    }

    // integrate one frame of drag inertia
    pub fn apply_damping(&mut self) {
        self.angle += self.angle_velocity;
        self.v_angle += self.v_angle_velocity;
        self.v_angle = self.v_angle.clamp(-1.5, 1.5);

        let decay = 1.0 - self.damping;
        self.angle_velocity *= decay;
        self.v_angle_velocity *= decay;
    }
}

fn update(
    mut camera_query: Query<(&mut Transform, &mut OrbitCamera)>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<CursorMoved>,
    mut scroll_events: EventReader<MouseWheel>,
) {
    for (mut transform, mut camera) in camera_query.iter_mut() {
        // handle mouse drag
        if mouse_buttons.just_pressed(MouseButton::Left) {
            camera.is_dragging = true;
        }
        if mouse_buttons.just_released(MouseButton::Left) {
            camera.is_dragging = false;
        }

        // drag feeds velocity, damping carries it after release
        if camera.is_dragging {
            for motion in mouse_motion.read() {
                if let Some(delta) = motion.delta {
                    camera.angle_velocity = delta.x * camera.speed * 0.01;
                    camera.v_angle_velocity = delta.y * camera.speed * 0.01;
                }
            }
        }
        camera.apply_damping();

        // handle mouse scroll
        for scroll in scroll_events.read() {
            camera.zoom(scroll.y);
        }

        // update camera position/orientation
        transform.translation = camera.calculate_position();
        transform.look_at(camera.target, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_respects_radius() {
        let camera = OrbitCamera::new(15.0, 0.5).with_target(Vec3::ZERO);
        assert!((camera.calculate_position().length() - 15.0).abs() < 1e-4);
    }

    #[test]
    fn test_position_offsets_from_target() {
        let target = Vec3::new(1.0, 2.0, 3.0);
        let camera = OrbitCamera::new(10.0, 0.5).with_target(target);
        assert!((camera.calculate_position().distance(target) - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_zoom_clamps_to_limits() {
        let mut camera = OrbitCamera::default();

        camera.zoom(100.0); // zoom far in
        assert!((camera.radius - CAMERA_MIN_DISTANCE).abs() < 1e-6);

        camera.zoom(-100.0); // zoom far out
        assert!((camera.radius - CAMERA_MAX_DISTANCE).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_moves_within_limits() {
        let mut camera = OrbitCamera::new(15.0, 0.5);
        camera.zoom(1.0);
        assert!((camera.radius - 13.5).abs() < 1e-6);
    }

    #[test]
    fn test_damping_decays_velocity() {
        let mut camera = OrbitCamera::default();
        camera.angle_velocity = 1.0;
        camera.apply_damping();
        assert!((camera.angle_velocity - 0.95).abs() < 1e-6);
        assert!((camera.angle - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_damping_clamps_pitch() {
        let mut camera = OrbitCamera::default();
        camera.v_angle_velocity = 10.0;
        camera.apply_damping();
        assert!((camera.v_angle - 1.5).abs() < 1e-6);
    }
}
