//! UI module providing the egui time panel and the planet info panel.

pub mod icons;
pub mod info_panel;
pub mod time_controls;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use time_controls::{TimePanelState, submit_date};

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TimePanelState>()
            .init_resource::<icons::FontsInitialized>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    time_controls::time_panel_system,
                    info_panel::info_panel_system,
                )
                    .chain()
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}
