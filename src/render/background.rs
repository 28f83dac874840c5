//! Starfield background.
//!
//! Stars sit on a thick spherical shell far outside Neptune's display orbit,
//! so they stay behind the planets in both scale modes.

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StarfieldSettings>()
            .add_systems(Startup, spawn_starfield)
            .add_systems(
                Update,
                apply_starfield_visibility.run_if(resource_changed::<StarfieldSettings>),
            );
    }
}

/// Starfield layout and visibility.
#[derive(Resource, Clone, Debug)]
pub struct StarfieldSettings {
    pub visible: bool,
    pub count: usize,
    /// Inner radius of the star shell in render units.
    pub inner_radius: f32,
    /// Outer radius of the star shell in render units.
    pub outer_radius: f32,
    /// Star sphere radius per render unit of distance, so stars keep a
    /// similar apparent size.
    pub size_per_distance: f32,
    pub seed: u64,
}

impl Default for StarfieldSettings {
    fn default() -> Self {
        Self {
            visible: true,
            count: 3000,
            inner_radius: 150_000.0,
            outer_radius: 550_000.0,
            size_per_distance: 0.0012,
            seed: 0x5EED_57A5,
        }
    }
}

/// Root entity of the starfield; toggling its visibility hides every star.
#[derive(Component)]
pub struct Starfield;

/// One background star.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub position: Vec3,
    /// Gray level in `[0.4, 1.0]`.
    pub brightness: f32,
}

/// Number of shared star materials; brightness is quantized to these levels.
const BRIGHTNESS_LEVELS: usize = 4;

/// Place stars uniformly in direction within the configured shell.
///
/// The same settings always give the same stars.
pub fn sample_stars(settings: &StarfieldSettings) -> Vec<Star> {
    let mut rng = ChaChaRng::seed_from_u64(settings.seed);
    let span = (settings.outer_radius - settings.inner_radius).max(0.0);

    (0..settings.count)
        .map(|_| {
            let r = settings.inner_radius + rng.random::<f32>() * span;
            let theta = TAU * rng.random::<f32>();
            let phi = (2.0 * rng.random::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
            let position = Vec3::new(
                r * phi.sin() * theta.cos(),
                r * phi.sin() * theta.sin(),
                r * phi.cos(),
            );
            let brightness = 0.4 + rng.random::<f32>() * 0.6;
            Star {
                position,
                brightness,
            }
        })
        .collect()
}

fn brightness_level(brightness: f32) -> usize {
    let t = ((brightness - 0.4) / 0.6).clamp(0.0, 1.0);
    ((t * BRIGHTNESS_LEVELS as f32) as usize).min(BRIGHTNESS_LEVELS - 1)
}

/// Spawn the starfield under a single root entity.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<StarfieldSettings>,
) {
    let star_mesh = meshes.add(Sphere::new(1.0));
    let palette: Vec<Handle<StandardMaterial>> = (0..BRIGHTNESS_LEVELS)
        .map(|level| {
            let l = 0.4 + 0.6 * (level as f32 + 0.5) / BRIGHTNESS_LEVELS as f32;
            materials.add(StandardMaterial {
                base_color: Color::srgba(l, l, (l + 0.1).min(1.0), 0.8),
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                ..default()
            })
        })
        .collect();

    let stars = sample_stars(&settings);
    let visibility = if settings.visible {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };

    commands
        .spawn((Starfield, Transform::default(), visibility))
        .with_children(|parent| {
            for star in &stars {
                let size = star.position.length() * settings.size_per_distance;
                parent.spawn((
                    Mesh3d(star_mesh.clone()),
                    MeshMaterial3d(palette[brightness_level(star.brightness)].clone()),
                    Transform::from_translation(star.position).with_scale(Vec3::splat(size)),
                ));
            }
        });

    info!("Spawned {} background stars", stars.len());
}

/// Show or hide the starfield to match the settings.
pub fn apply_starfield_visibility(
    settings: Res<StarfieldSettings>,
    mut roots: Query<&mut Visibility, With<Starfield>>,
) {
    for mut visibility in &mut roots {
        *visibility = if settings.visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}
