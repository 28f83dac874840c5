//! Phosphor icon definitions for the UI.
//!
//! Icons are initialized via `setup_fonts` when the app starts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

// Browse all icons at https://phosphoricons.com/

/// Play icon (triangle pointing right)
pub const PLAY: &str = egui_phosphor::regular::PLAY;
/// Pause icon (two vertical bars)
pub const PAUSE: &str = egui_phosphor::regular::PAUSE;
/// Year back
pub const REWIND: &str = egui_phosphor::regular::REWIND;
/// Year forward
pub const FAST_FORWARD: &str = egui_phosphor::regular::FAST_FORWARD;
/// Jump to today
pub const TODAY: &str = egui_phosphor::regular::CALENDAR_CHECK;
/// Scale mode toggle
pub const SCALE: &str = egui_phosphor::regular::ARROWS_OUT_LINE_HORIZONTAL;
/// Orbit line visibility
pub const ORBIT: &str = egui_phosphor::regular::PATH;
/// Planet label visibility
pub const LABELS: &str = egui_phosphor::regular::TAG;
/// Background star visibility
pub const STARS: &str = egui_phosphor::regular::STAR;
/// Close/clear
pub const CLOSE: &str = egui_phosphor::regular::X;
/// Planet/globe icon
pub const PLANET: &str = egui_phosphor::regular::GLOBE;
/// Warning/alert icon
pub const WARNING: &str = egui_phosphor::regular::WARNING;
