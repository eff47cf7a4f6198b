use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::field::ParticleField;
use super::state::AppState;

/// Systems that mutate the particle set. Rendering runs after this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimulationSet;

/// Bevy plugin for the simulation pipeline
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            simulation_tick
                .in_set(SimulationSet)
                .run_if(in_state(AppState::Simulate)),
        );
    }
}

/// Main simulation tick: one physics step per frame
fn simulation_tick(
    mut field: ResMut<ParticleField>,
    time: Res<Time>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    // Window cursor coordinates already match the simulation's (top-left origin, y down)
    let mouse = windows
        .get_single()
        .ok()
        .and_then(|window| window.cursor_position())
        .map(|cursor| [cursor.x, cursor.y]);

    field.tick(time.delta_secs(), mouse);
}
