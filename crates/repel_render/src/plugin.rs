use bevy::prelude::*;
use repel_sim::pipeline::SimulationSet;
use repel_sim::state::AppState;

use super::camera;
use super::particles;
use super::ui;

/// Main render plugin: camera, particle circles, HUD
pub struct RepelRenderPlugin;

impl Plugin for RepelRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ui::HudThrottle>()
            .init_resource::<particles::SpawnedGeneration>()
            .add_systems(Startup, camera::spawn_camera)
            .add_systems(OnEnter(AppState::Simulate), ui::spawn_hud)
            .add_systems(
                Update,
                (
                    particles::sync_particle_visuals.after(SimulationSet),
                    ui::update_hud.after(SimulationSet),
                )
                    .run_if(in_state(AppState::Simulate)),
            )
            .add_systems(Update, exit_on_escape);
    }
}

/// Escape closes the app from any screen, like closing the window
fn exit_on_escape(keyboard: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        info!("Escape pressed, exiting");
        exit.send(AppExit::Success);
    }
}
