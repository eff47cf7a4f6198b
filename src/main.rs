use bevy::prelude::*;
use repel_core::{SimConfig, WINDOW_TITLE};
use repel_render::audio::MusicPlugin;
use repel_render::menu::{AppState, MenuPlugin};
use repel_render::plugin::RepelRenderPlugin;
use repel_sim::field::ParticleField;
use repel_sim::pipeline::SimulationPlugin;

fn main() {
    let config = SimConfig::default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.into(),
                resolution: (config.width, config.height).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(ParticleField::empty(config))
        .init_state::<AppState>()
        .add_plugins(SimulationPlugin)
        .add_plugins(RepelRenderPlugin)
        .add_plugins(MenuPlugin)
        .add_plugins(MusicPlugin)
        .run();
}
