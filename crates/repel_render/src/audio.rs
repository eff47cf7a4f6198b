use bevy::asset::LoadState;
use bevy::audio::Volume;
use bevy::prelude::*;
use repel_core::MUSIC_ASSET;
use repel_sim::field::ParticleField;
use repel_sim::state::AppState;

/// Background music for the simulation screen.
/// A missing or undecodable track is reported once and the run continues silently.
pub struct MusicPlugin;

impl Plugin for MusicPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Simulate), start_music)
            .add_systems(
                Update,
                drop_failed_music.run_if(in_state(AppState::Simulate)),
            );
    }
}

/// Marker for the looping music entity
#[derive(Component)]
pub struct BackgroundMusic;

fn start_music(mut commands: Commands, asset_server: Res<AssetServer>, field: Res<ParticleField>) {
    let track: Handle<AudioSource> = asset_server.load(MUSIC_ASSET);
    commands.spawn((
        AudioPlayer::new(track),
        PlaybackSettings::LOOP.with_volume(Volume::new(field.config.music_volume)),
        BackgroundMusic,
    ));
}

fn drop_failed_music(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    query: Query<(Entity, &AudioPlayer), With<BackgroundMusic>>,
) {
    for (entity, player) in &query {
        if let Some(reason) = load_failure(asset_server.get_load_state(player.0.id())) {
            warn!("Background music unavailable, continuing without audio: {reason}");
            commands.entity(entity).despawn();
        }
    }
}

/// Failure message if the track failed to load. Pending or loaded tracks yield `None`.
pub fn load_failure(state: Option<LoadState>) -> Option<String> {
    match state {
        Some(LoadState::Failed(err)) => Some(err.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::asset::AssetLoadError;
    use bevy::asset::io::AssetReaderError;
    use std::path::PathBuf;

    #[test]
    fn test_missing_track_is_a_failure() {
        let err = AssetLoadError::from(AssetReaderError::NotFound(PathBuf::from(MUSIC_ASSET)));
        let reason = load_failure(Some(LoadState::Failed(err.into())));
        assert!(reason.is_some());
    }

    #[test]
    fn test_pending_or_loaded_track_is_kept() {
        assert_eq!(load_failure(None), None);
        assert_eq!(load_failure(Some(LoadState::NotLoaded)), None);
        assert_eq!(load_failure(Some(LoadState::Loading)), None);
        assert_eq!(load_failure(Some(LoadState::Loaded)), None);
    }
}
