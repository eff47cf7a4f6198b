use bevy::prelude::*;
use repel_core::WINDOW_TITLE;
use repel_sim::field::ParticleField;

/// Marker for the HUD stats line
#[derive(Component)]
pub struct HudText;

const RAY_WHITE: Color = Color::srgb(245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0);

/// Spawn the simulation overlay: title plus a stats line under it
pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new(WINDOW_TITLE),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(RAY_WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
    ));

    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(RAY_WHITE.with_alpha(0.7)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(36.0),
            left: Val::Px(10.0),
            ..default()
        },
        HudText,
    ));
}

/// HUD frame counter for throttling
#[derive(Resource, Default)]
pub struct HudThrottle {
    pub frame: u32,
}

/// Stats line shown under the title
pub fn hud_line(count: usize, mean_speed: f64, contacts: usize) -> String {
    format!(
        "{} particles | avg speed {:.1} px/s | contacts {}",
        count, mean_speed, contacts
    )
}

/// Update HUD text every 10th frame
pub fn update_hud(
    field: Res<ParticleField>,
    mut throttle: ResMut<HudThrottle>,
    mut query: Query<&mut Text, With<HudText>>,
) {
    throttle.frame = throttle.frame.wrapping_add(1);
    if throttle.frame % 10 != 0 {
        return;
    }

    if let Ok(mut text) = query.get_single_mut() {
        **text = hud_line(field.len(), field.mean_speed(), field.last_contacts);
    }
}
