//! Celestial body rendering and spawning.
//!
//! Handles the visual representation of the Sun and planets.

use std::f32::consts::PI;

use bevy::prelude::*;

use crate::ephemeris::{CelestialBodyData, CelestialBodyId, Ephemeris};
use crate::render::hex_color;
use crate::scaling::{ScaleMode, ScaleSettings, ecliptic_to_render};
use crate::time::SimulationClock;

/// Sphere radius of the Sun in render units.
pub const SUN_RADIUS: f32 = 12.0;

/// Sun base color.
const SUN_COLOR: u32 = 0xFFCC00;

/// Axial spin in radians per real second for a body with `rotation_speed` 1.
pub const SPIN_RATE: f32 = 0.9;

/// Ring inner and outer radius as multiples of the planet radius.
const RING_SPAN: (f32, f32) = (1.6, 3.6);

/// Ring tilt about the render X axis.
const RING_TILT: f32 = PI / 2.2;

/// Atmosphere halo radius as a multiple of the planet radius.
const HALO_SCALE: f32 = 1.15;

const HALO_ALPHA: f32 = 0.25;

/// Inner and outer ring radius for a ringed planet.
pub fn ring_radii(body: &CelestialBodyData) -> Option<(f32, f32)> {
    body.visual.has_rings.then(|| {
        (
            body.display_radius * RING_SPAN.0,
            body.display_radius * RING_SPAN.1,
        )
    })
}

/// Halo radius and color for a planet with an atmosphere.
pub fn atmosphere_halo(body: &CelestialBodyData) -> Option<(f32, u32)> {
    body.visual
        .atmosphere_color
        .map(|color| (body.display_radius * HALO_SCALE, color))
}

/// Component marking an entity as a propagated planet.
#[derive(Component, Clone, Debug)]
pub struct CelestialBody {
    /// Identifier for this body.
    pub id: CelestialBodyId,
    /// Spin multiplier relative to Earth.
    pub rotation_speed: f32,
}

/// Marker for the Sun, fixed at the origin.
#[derive(Component)]
pub struct Sun;

/// Plugin providing celestial body spawning functionality.
pub struct CelestialBodyPlugin;

impl Plugin for CelestialBodyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_solar_system);
    }
}

/// Spawn the Sun and one sphere per planet at the clock's epoch.
fn spawn_solar_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    ephemeris: Res<Ephemeris>,
    clock: Res<SimulationClock>,
    mode: Res<ScaleMode>,
    scale: Res<ScaleSettings>,
) {
    let sun_color = hex_color(SUN_COLOR);
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(SUN_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: sun_color,
            emissive: sun_color.to_linear() * 4.0,
            ..default()
        })),
        Transform::default(),
        Sun,
    ));
    commands.spawn((
        PointLight {
            intensity: 5.0e9,
            range: 1.0e6,
            shadows_enabled: false,
            ..default()
        },
        Transform::default(),
    ));

    let states = ephemeris.states(clock.epoch(), *mode, &scale);
    for (body, state) in ephemeris.bodies().iter().zip(&states) {
        let color = hex_color(body.visual.color);
        let material = materials.add(StandardMaterial {
            base_color: color,
            // Keep the night side faintly visible
            emissive: color.to_linear() * 0.08,
            perceptual_roughness: 0.9,
            ..default()
        });

        let mut planet = commands.spawn((
            Mesh3d(meshes.add(Sphere::new(body.display_radius))),
            MeshMaterial3d(material),
            Transform::from_translation(ecliptic_to_render(state.display)),
            CelestialBody {
                id: body.id,
                rotation_speed: body.rotation_speed,
            },
        ));

        if let Some((inner, outer)) = ring_radii(body) {
            let ring_material = materials.add(StandardMaterial {
                base_color: color.with_alpha(0.8),
                alpha_mode: AlphaMode::Blend,
                double_sided: true,
                cull_mode: None,
                unlit: true,
                ..default()
            });
            let ring_mesh = meshes.add(Annulus::new(inner, outer));
            planet.with_children(|parent| {
                parent.spawn((
                    Mesh3d(ring_mesh),
                    MeshMaterial3d(ring_material),
                    Transform::from_rotation(Quat::from_rotation_x(RING_TILT)),
                ));
            });
        }

        if let Some((radius, glow)) = atmosphere_halo(body) {
            let halo_material = materials.add(StandardMaterial {
                base_color: hex_color(glow).with_alpha(HALO_ALPHA),
                alpha_mode: AlphaMode::Add,
                unlit: true,
                ..default()
            });
            let halo_mesh = meshes.add(Sphere::new(radius));
            planet.with_children(|parent| {
                parent.spawn((Mesh3d(halo_mesh), MeshMaterial3d(halo_material)));
            });
        }
    }

    info!("Spawned the Sun and {} planets", states.len());
}

/// Move every planet to its display position at the current epoch.
pub fn sync_body_positions(
    clock: Res<SimulationClock>,
    ephemeris: Res<Ephemeris>,
    mode: Res<ScaleMode>,
    scale: Res<ScaleSettings>,
    mut bodies: Query<(&CelestialBody, &mut Transform)>,
) {
    let epoch = clock.epoch();
    for (body, mut transform) in &mut bodies {
        let Some(state) = ephemeris.state(body.id, epoch, *mode, &scale) else {
            continue;
        };
        transform.translation = ecliptic_to_render(state.display);
    }
}

/// Cosmetic axial rotation. Stops while the clock is paused.
pub fn spin_bodies(
    clock: Res<SimulationClock>,
    time: Res<Time>,
    mut bodies: Query<(&CelestialBody, &mut Transform)>,
) {
    if clock.is_paused() {
        return;
    }
    let dt = time.delta_secs();
    for (body, mut transform) in &mut bodies {
        transform.rotate_y(body.rotation_speed * SPIN_RATE * dt);
    }
}
