//! Planet selection.
//!
//! The selected planet's orbit is emphasized and the camera follows it.

use bevy::prelude::*;

use crate::ephemeris::CelestialBodyId;

/// Plugin providing the selection resource.
pub struct HighlightPlugin;

impl Plugin for HighlightPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectedBody>()
            .add_systems(Update, log_selection.run_if(resource_changed::<SelectedBody>));
    }
}

/// Resource tracking the currently selected planet.
#[derive(Resource, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectedBody {
    pub id: Option<CelestialBodyId>,
}

impl SelectedBody {
    pub fn is(&self, id: CelestialBodyId) -> bool {
        self.id == Some(id)
    }

    /// Select `id`, or clear the selection if it is already selected.
    pub fn toggle(&mut self, id: CelestialBodyId) {
        self.id = if self.is(id) { None } else { Some(id) };
    }
}

fn log_selection(selected: Res<SelectedBody>) {
    match selected.id {
        Some(id) => info!("Selected {}", id),
        None => debug!("Selection cleared"),
    }
}
