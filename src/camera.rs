//! Camera system for the orrery.
//!
//! A perspective camera looking along a fixed direction at a focus point.
//! The focus eases toward the selected planet and back to the Sun when the
//! selection clears; scrolling zooms along the viewing direction.

use bevy::{input::mouse::AccumulatedMouseScroll, prelude::*};

use crate::render::SelectedBody;
use crate::render::bodies::{CelestialBody, sync_body_positions};

/// Frame rate the focus easing rates are expressed at.
const EASING_REFERENCE_FPS: f32 = 60.0;

/// Focus distances below this snap to the goal.
const FOCUS_EPSILON: f32 = 1.0e-3;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Camera limits and defaults.
#[derive(Resource, Clone, Debug)]
pub struct CameraSettings {
    /// Initial offset from the Sun; its direction is kept while zooming.
    pub initial_offset: Vec3,
    /// Closest allowed distance from the Sun.
    pub min_distance: f32,
    /// Farthest allowed distance from the Sun.
    pub max_distance: f32,
    /// Fractional distance change per scroll line.
    pub zoom_speed: f32,
    /// Far clip plane.
    pub far: f32,
    /// Fraction of the way to the selected planet covered per 60 Hz frame.
    pub focus_rate: f32,
    /// Fraction of the way back to the Sun covered per 60 Hz frame.
    pub return_rate: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            initial_offset: Vec3::new(200.0, 300.0, 600.0),
            min_distance: 40.0,
            max_distance: 120_000.0,
            zoom_speed: 0.1,
            far: 1_000_000.0,
            focus_rate: 0.08,
            return_rate: 0.04,
        }
    }
}

/// Resource tracking camera state.
#[derive(Resource, Debug)]
pub struct CameraState {
    /// Current distance from the focus point.
    pub distance: f32,
    /// Point the camera looks at, in render space.
    pub focus: Vec3,
}

impl CameraState {
    pub fn new(settings: &CameraSettings) -> Self {
        Self {
            distance: settings.initial_offset.length(),
            focus: Vec3::ZERO,
        }
    }

    /// Multiply the distance by `factor`, within the configured bounds.
    pub fn zoom_by(&mut self, factor: f32, settings: &CameraSettings) {
        self.distance = (self.distance * factor).clamp(settings.min_distance, settings.max_distance);
    }

    /// Move the focus toward `goal`, covering `rate` of the gap per 60 Hz
    /// frame regardless of the actual frame time `dt`.
    pub fn ease_focus(&mut self, goal: Vec3, rate: f32, dt: f32) {
        let t = 1.0 - (1.0 - rate.clamp(0.0, 1.0)).powf(dt.max(0.0) * EASING_REFERENCE_FPS);
        self.focus = self.focus.lerp(goal, t);
        if self.focus.distance(goal) < FOCUS_EPSILON {
            self.focus = goal;
        }
    }

    /// Camera position for this state.
    pub fn eye(&self, settings: &CameraSettings) -> Vec3 {
        self.focus + settings.initial_offset.normalize_or(Vec3::Z) * self.distance
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSettings>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (camera_zoom, follow_selection, apply_camera_state)
                    .chain()
                    .after(sync_body_positions),
            );
    }
}

/// Spawn the main camera looking at the Sun.
fn setup_camera(mut commands: Commands, settings: Res<CameraSettings>) {
    commands.insert_resource(CameraState::new(&settings));
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 45f32.to_radians(),
            near: 1.0,
            far: settings.far,
            ..default()
        }),
        Transform::from_translation(settings.initial_offset).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}

/// Handle mouse scroll wheel for zoom.
fn camera_zoom(
    mouse_scroll: Res<AccumulatedMouseScroll>,
    settings: Res<CameraSettings>,
    mut camera_state: ResMut<CameraState>,
) {
    // Skip if no scroll input
    if mouse_scroll.delta.y == 0.0 {
        return;
    }

    // Logarithmic zoom: scroll up moves closer
    let zoom_factor = 1.0 - mouse_scroll.delta.y * settings.zoom_speed;
    camera_state.zoom_by(zoom_factor.max(0.1), &settings);
}

/// Ease the focus toward the selected planet, or back to the Sun.
pub fn follow_selection(
    time: Res<Time>,
    settings: Res<CameraSettings>,
    selected: Res<SelectedBody>,
    bodies: Query<(&CelestialBody, &Transform)>,
    camera_state: Option<ResMut<CameraState>>,
) {
    let Some(mut camera_state) = camera_state else {
        return;
    };
    let target = selected
        .id
        .and_then(|id| bodies.iter().find(|(body, _)| body.id == id))
        .map(|(_, transform)| transform.translation);
    let (goal, rate) = match target {
        Some(position) => (position, settings.focus_rate),
        None => (Vec3::ZERO, settings.return_rate),
    };
    // Untouched once settled.
    if camera_state.focus != goal {
        camera_state.ease_focus(goal, rate, time.delta_secs());
    }
}

/// Place the camera on its viewing ray through the focus.
fn apply_camera_state(
    camera_state: Option<Res<CameraState>>,
    settings: Res<CameraSettings>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let Some(camera_state) = camera_state else {
        return;
    };
    if !camera_state.is_changed() {
        return;
    }
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    *transform = Transform::from_translation(camera_state.eye(&settings))
        .looking_at(camera_state.focus, Vec3::Y);
}
