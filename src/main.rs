//! Orrery - time-scrubbable model of the solar system
//!
//! A desktop application showing the eight planets on their orbits at any
//! date, with play/pause, date jumps and real or compressed scale.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use orrery::OrreryPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orrery".into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.01, 0.01, 0.03)))
        .add_plugins((EguiPlugin::default(), OrreryPlugin))
        .run();
}
