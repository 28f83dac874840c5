//! Info panel for the selected planet.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::ephemeris::{CelestialBodyData, Ephemeris};
use crate::render::SelectedBody;
use crate::time::SimulationClock;
use crate::types::DAYS_PER_YEAR;
use crate::ui::icons;

/// Periods shorter than this many years are shown in days.
const PERIOD_YEARS_THRESHOLD: f64 = 2.0;

/// Format a sidereal period, e.g. "88 days" or "11.9 years".
pub fn format_period(days: f64) -> String {
    let years = days / DAYS_PER_YEAR;
    if years < PERIOD_YEARS_THRESHOLD {
        format!("{days:.0} days")
    } else {
        format!("{years:.1} years")
    }
}

/// Label/value rows describing a planet at heliocentric distance `radius_au`.
pub fn body_facts(body: &CelestialBodyData, radius_au: f64) -> Vec<(&'static str, String)> {
    let trivia = &body.trivia;
    vec![
        ("Mass", trivia.mass.to_string()),
        ("Gravity", trivia.gravity.to_string()),
        ("Temperature", trivia.temperature.to_string()),
        ("Mean distance", trivia.distance_from_sun.to_string()),
        ("Orbital period", format_period(trivia.orbital_period_days)),
        ("Distance now", format!("{radius_au:.3} AU")),
    ]
}

/// System that renders the info panel while a planet is selected.
pub fn info_panel_system(
    mut contexts: EguiContexts,
    mut selected: ResMut<SelectedBody>,
    ephemeris: Res<Ephemeris>,
    clock: Res<SimulationClock>,
) {
    let Some(id) = selected.id else {
        return;
    };
    let Some(body) = ephemeris.body(id) else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let radius = ephemeris
        .position(id, clock.epoch())
        .map(|p| p.length())
        .unwrap_or_default();

    let panel_frame = egui::Frame::new()
        .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 30, 220))
        .inner_margin(egui::Margin::same(12));

    egui::SidePanel::right("info_panel")
        .resizable(false)
        .default_width(220.0)
        .frame(panel_frame)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(format!("{} {}", icons::PLANET, body.id));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(icons::CLOSE)
                        .on_hover_text("Back to the Sun (R)")
                        .clicked()
                    {
                        selected.id = None;
                    }
                });
            });
            ui.separator();

            ui.label(body.trivia.description);
            ui.add_space(8.0);

            egui::Grid::new("body_facts")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    for (label, value) in body_facts(body, radius) {
                        ui.label(egui::RichText::new(label).weak());
                        ui.label(value);
                        ui.end_row();
                    }
                });
        });
}
