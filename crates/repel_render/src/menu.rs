use bevy::prelude::*;
use repel_core::{MAX_PARTICLES, MIN_PARTICLES};
use repel_sim::field::ParticleField;
pub use repel_sim::state::{AppState, MenuAction, MenuSelection};

pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MenuSelection>()
            .add_systems(OnEnter(AppState::Menu), spawn_menu)
            .add_systems(OnExit(AppState::Menu), despawn_menu)
            .add_systems(
                Update,
                (menu_input_system, update_count_text.after(menu_input_system))
                    .run_if(in_state(AppState::Menu)),
            );
    }
}

// --- Markers ---

#[derive(Component)]
struct MenuRoot;

#[derive(Component)]
struct CountText;

const PANEL_COLOR: Color = Color::srgba(30.0 / 255.0, 30.0 / 255.0, 60.0 / 255.0, 220.0 / 255.0);
const SKY_BLUE: Color = Color::srgb(102.0 / 255.0, 191.0 / 255.0, 1.0);
const LIGHT_GRAY: Color = Color::srgb(200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0);

/// Translate this frame's key presses into menu actions, in the order
/// they are applied: adjustments first, then confirm.
pub fn menu_actions(keyboard: &ButtonInput<KeyCode>) -> Vec<MenuAction> {
    let mut actions = Vec::new();
    if keyboard.just_pressed(KeyCode::ArrowUp) {
        actions.push(MenuAction::Increase);
    }
    if keyboard.just_pressed(KeyCode::ArrowDown) {
        actions.push(MenuAction::Decrease);
    }
    if keyboard.any_just_pressed([KeyCode::Enter, KeyCode::NumpadEnter]) {
        actions.push(MenuAction::Confirm);
    }
    actions
}

// --- Menu ---

fn spawn_menu(mut commands: Commands, selection: Res<MenuSelection>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            MenuRoot,
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        width: Val::Px(600.0),
                        height: Val::Px(400.0),
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::top(Val::Px(40.0)),
                        row_gap: Val::Px(10.0),
                        ..default()
                    },
                    BackgroundColor(PANEL_COLOR),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new(format!(
                            "Select Particle Count ({}-{})",
                            MIN_PARTICLES, MAX_PARTICLES
                        )),
                        TextFont {
                            font_size: 32.0,
                            ..default()
                        },
                        TextColor(SKY_BLUE),
                    ));

                    panel.spawn((
                        Text::new(selection.count.to_string()),
                        TextFont {
                            font_size: 72.0,
                            ..default()
                        },
                        TextColor(SKY_BLUE),
                        Node {
                            margin: UiRect::vertical(Val::Px(20.0)),
                            ..default()
                        },
                        CountText,
                    ));

                    for line in ["Use UP / DOWN to adjust", "Press ENTER to start"] {
                        panel.spawn((
                            Text::new(line),
                            TextFont {
                                font_size: 20.0,
                                ..default()
                            },
                            TextColor(LIGHT_GRAY),
                        ));
                    }
                });
        });
}

fn despawn_menu(mut commands: Commands, query: Query<Entity, With<MenuRoot>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

fn menu_input_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut selection: ResMut<MenuSelection>,
    mut field: ResMut<ParticleField>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for action in menu_actions(&keyboard) {
        if let Some(state) = selection.apply(action) {
            field.start_run(selection.count);
            next_state.set(state);
            return;
        }
    }
}

fn update_count_text(
    selection: Res<MenuSelection>,
    mut query: Query<&mut Text, With<CountText>>,
) {
    if !selection.is_changed() {
        return;
    }
    for mut text in &mut query {
        **text = selection.count.to_string();
    }
}
