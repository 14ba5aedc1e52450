use bevy::prelude::*;
use bevy::ui::RelativeCursorPosition;

use crate::systems::time::TimeOfDay;

pub struct GlobeUIPlugin;

impl Plugin for GlobeUIPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_ui)
            .add_systems(Update, (drag_slider, sync_slider));
    }
}

// slider track, receives the drag interaction
#[derive(Component, Default)]
pub struct TimeSliderTrack {
    pub is_dragging: bool,
}

// slider handle, follows the time of day
#[derive(Component)]
pub struct TimeSliderHandle;

// clock readout above the slider
#[derive(Component)]
pub struct ClockDisplay;

const TRACK_WIDTH: f32 = 320.0;

fn setup_ui(mut commands: Commands) {
    // bottom-centered column: clock text over the slider track
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                bottom: Val::Px(30.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(8.0),
                ..default()
            },
            BackgroundColor(Color::NONE),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("00:00"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                ClockDisplay,
            ));

            parent
                .spawn((
                    Button,
                    Node {
                        width: Val::Px(TRACK_WIDTH),
                        height: Val::Px(10.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.25)),
                    RelativeCursorPosition::default(),
                    TimeSliderTrack::default(),
                ))
                .with_children(|track| {
                    track.spawn((
                        Node {
                            position_type: PositionType::Absolute,
                            left: Val::Percent(0.0),
                            top: Val::Px(-4.0),
                            width: Val::Px(10.0),
                            height: Val::Px(18.0),
                            ..default()
                        },
                        BackgroundColor(Color::WHITE),
                        TimeSliderHandle,
                    ));
                });
        });
}

// a grab on the track persists until the button is released, not merely
// until the cursor leaves the thin track node
fn drag_state(was_dragging: bool, pressed_on_track: bool, button_released: bool) -> bool {
    if button_released {
        return false;
    }
    was_dragging || pressed_on_track
}

// map the cursor position on the track to hours while the drag is held
fn drag_slider(
    mut track_query: Query<(&Interaction, &RelativeCursorPosition, &mut TimeSliderTrack)>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut time_of_day: ResMut<TimeOfDay>,
) {
    for (interaction, cursor_position, mut track) in track_query.iter_mut() {
        track.is_dragging = drag_state(
            track.is_dragging,
            *interaction == Interaction::Pressed,
            mouse_buttons.just_released(MouseButton::Left),
        );

        if !track.is_dragging {
            continue;
        }
        if let Some(normalized) = cursor_position.normalized {
            time_of_day.set_hours(normalized.x.clamp(0.0, 1.0) * 24.0);
        }
    }
}

// keep the handle and clock in step with the time of day
fn sync_slider(
    time_of_day: Res<TimeOfDay>,
    mut handle_query: Query<&mut Node, With<TimeSliderHandle>>,
    mut clock_query: Query<&mut Text, With<ClockDisplay>>,
) {
    if !time_of_day.is_changed() {
        return;
    }

    if let Ok(mut node) = handle_query.single_mut() {
        node.left = Val::Percent((time_of_day.hours / 24.0) * 100.0);
    }

    if let Ok(mut text) = clock_query.single_mut() {
        text.0 = time_of_day.formatted();
    }
}
