//! Planet labels using egui for text rendering.
//!
//! Names are projected from each planet's render position into screen space
//! and painted on a background egui layer.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass, egui};

use crate::camera::MainCamera;
use crate::ephemeris::Ephemeris;
use crate::render::bodies::CelestialBody;

/// Plugin providing planet label rendering.
pub struct LabelPlugin;

impl Plugin for LabelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LabelSettings>()
            .add_systems(EguiPrimaryContextPass, draw_body_labels);
    }
}

/// Settings for label rendering.
#[derive(Resource, Clone, Debug)]
pub struct LabelSettings {
    /// Whether labels are visible.
    pub visible: bool,
    /// Height above the planet's top, as a multiple of its radius.
    pub radius_factor: f32,
    /// Extra height above the planet in render units.
    pub lift: f32,
    pub font_size: f32,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            visible: true,
            radius_factor: 1.5,
            lift: 8.0,
            font_size: 13.0,
        }
    }
}

impl LabelSettings {
    /// World position a label is anchored to, above a planet of `radius`.
    pub fn anchor(&self, center: Vec3, radius: f32) -> Vec3 {
        center + Vec3::Y * (radius * self.radius_factor + self.lift)
    }
}

/// Draw labels for all planets.
fn draw_body_labels(
    mut contexts: EguiContexts,
    bodies: Query<(&CelestialBody, &GlobalTransform)>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    ephemeris: Res<Ephemeris>,
    settings: Res<LabelSettings>,
) {
    if !settings.visible {
        return;
    }
    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let painter = ctx.layer_painter(egui::LayerId::background());
    let font = egui::FontId::proportional(settings.font_size);

    for (body, transform) in &bodies {
        let radius = ephemeris
            .body(body.id)
            .map(|b| b.display_radius)
            .unwrap_or_default();
        let anchor = settings.anchor(transform.translation(), radius);

        let Ok(screen_pos) = camera.world_to_viewport(camera_transform, anchor) else {
            continue;
        };
        let pos = egui::pos2(screen_pos.x, screen_pos.y);
        let text = body.id.name().to_uppercase();

        // Shadow
        painter.text(
            pos + egui::vec2(1.0, 1.0),
            egui::Align2::CENTER_BOTTOM,
            &text,
            font.clone(),
            egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180),
        );
        painter.text(
            pos,
            egui::Align2::CENTER_BOTTOM,
            &text,
            font.clone(),
            egui::Color32::from_rgba_unmultiplied(255, 255, 255, 230),
        );
    }
}
