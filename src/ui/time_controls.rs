//! Time panel at the bottom of the screen.
//!
//! Play/pause, date display and entry, year jumps, speed, scale mode, and the
//! overlay toggles.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::orbit_path::OrbitPathSettings;
use crate::render::{LabelSettings, StarfieldSettings};
use crate::scaling::ScaleMode;
use crate::time::{SimulationClock, TimeSettings};
use crate::types::{CalendarDate, DateError};
use crate::ui::icons;

/// Colors for the panel.
mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(26, 26, 36, 235);
    pub const PLAY_ICON: Color32 = Color32::from_rgb(85, 221, 136);
    pub const PAUSE_ICON: Color32 = Color32::from_rgb(221, 170, 85);
    pub const TEXT: Color32 = Color32::from_rgb(220, 220, 230);
    pub const MUTED: Color32 = Color32::from_rgb(140, 140, 155);
    pub const ERROR: Color32 = Color32::from_rgb(235, 110, 100);
}

/// Text-entry state of the panel.
#[derive(Resource, Default, Debug)]
pub struct TimePanelState {
    /// Contents of the date field.
    pub date_input: String,
    /// Last parse error, shown under the field until the next valid entry.
    pub error: Option<String>,
}

/// Parse `text` as `YYYY-MM-DD` and jump the clock there.
///
/// On error the clock is left untouched.
pub fn submit_date(text: &str, clock: &mut SimulationClock) -> Result<CalendarDate, DateError> {
    let date: CalendarDate = text.parse()?;
    clock.set_date(date);
    Ok(date)
}

/// System that renders the time panel.
pub fn time_panel_system(
    mut contexts: EguiContexts,
    mut clock: ResMut<SimulationClock>,
    settings: Res<TimeSettings>,
    mut mode: ResMut<ScaleMode>,
    mut orbits: ResMut<OrbitPathSettings>,
    mut labels: ResMut<LabelSettings>,
    mut stars: ResMut<StarfieldSettings>,
    mut panel: ResMut<TimePanelState>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::TopBottomPanel::bottom("time_panel")
        .frame(
            egui::Frame::new()
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(16, 8)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.spacing_mut().item_spacing.x = 12.0;

                render_play_pause(ui, &mut clock);
                ui.separator();

                if ui
                    .button(icons::REWIND)
                    .on_hover_text("Back one year ([)")
                    .clicked()
                {
                    clock.shift(-settings.year_jump_days);
                }
                ui.label(
                    egui::RichText::new(clock.date().long_form())
                        .monospace()
                        .size(14.0)
                        .color(colors::TEXT),
                );
                if ui
                    .button(icons::FAST_FORWARD)
                    .on_hover_text("Forward one year (])")
                    .clicked()
                {
                    clock.shift(settings.year_jump_days);
                }
                if ui
                    .button(icons::TODAY)
                    .on_hover_text("Jump to today (T)")
                    .clicked()
                {
                    clock.jump_to_today();
                    info!("Jumped to today ({})", clock.date());
                }
                ui.separator();

                render_date_entry(ui, &mut clock, &mut panel);
                ui.separator();

                let mut speed = clock.speed();
                let slider = egui::Slider::new(&mut speed, 0.0..=settings.max_speed)
                    .suffix(" d/s")
                    .fixed_decimals(0);
                if ui.add(slider).on_hover_text("Days per second (↑/↓)").changed() {
                    clock.set_speed(speed);
                }
                ui.separator();

                let scale_text = format!("{} {}", icons::SCALE, mode.label());
                if ui.button(scale_text).on_hover_text("Toggle scale (V)").clicked() {
                    *mode = mode.toggled();
                    info!("{}", mode.label());
                }
                if overlay_toggle(ui, icons::ORBIT, "Orbit lines (O)", orbits.visible) {
                    orbits.visible = !orbits.visible;
                }
                if overlay_toggle(ui, icons::LABELS, "Planet labels (L)", labels.visible) {
                    labels.visible = !labels.visible;
                }
                if overlay_toggle(ui, icons::STARS, "Background stars (G)", stars.visible) {
                    stars.visible = !stars.visible;
                }
            });
        });
}

/// Icon button for an overlay, dimmed while the overlay is off. True when clicked.
fn overlay_toggle(ui: &mut egui::Ui, icon: &str, tooltip: &str, visible: bool) -> bool {
    let color = if visible { colors::TEXT } else { colors::MUTED };
    ui.button(egui::RichText::new(icon).color(color))
        .on_hover_text(tooltip)
        .clicked()
}

/// Render the play/pause toggle button.
fn render_play_pause(ui: &mut egui::Ui, clock: &mut SimulationClock) {
    let (icon, color, tooltip) = if clock.is_paused() {
        (icons::PLAY, colors::PLAY_ICON, "Play (Space)")
    } else {
        (icons::PAUSE, colors::PAUSE_ICON, "Pause (Space)")
    };

    let button = egui::Button::new(egui::RichText::new(icon).size(22.0).color(color))
        .min_size(egui::vec2(40.0, 36.0));

    if ui.add(button).on_hover_text(tooltip).clicked() {
        clock.toggle();
    }
}

/// Date field; Enter or the button jumps to the typed date.
fn render_date_entry(ui: &mut egui::Ui, clock: &mut SimulationClock, panel: &mut TimePanelState) {
    ui.vertical(|ui| {
        let mut submitted = false;
        ui.horizontal(|ui| {
            let field = ui.add(
                egui::TextEdit::singleline(&mut panel.date_input)
                    .hint_text("YYYY-MM-DD")
                    .desired_width(96.0),
            );
            submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            submitted |= ui.button("Go").clicked();
        });

        if submitted {
            match submit_date(&panel.date_input, clock) {
                Ok(date) => {
                    info!("Jumped to {}", date);
                    panel.error = None;
                }
                Err(err) => {
                    warn!("Rejected date entry {:?}: {}", panel.date_input, err);
                    panel.error = Some(err.to_string());
                }
            }
        }

        if let Some(error) = &panel.error {
            ui.label(
                egui::RichText::new(format!("{} {}", icons::WARNING, error))
                    .size(11.0)
                    .color(colors::ERROR),
            );
        }
    });
}
