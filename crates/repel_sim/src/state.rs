use bevy::prelude::*;
use repel_core::{DEFAULT_PARTICLE_COUNT, PARTICLE_COUNT_STEP, clamp_particle_count};

/// Top-level application mode. There is no way back from `Simulate`;
/// the run ends when the window closes.
#[derive(States, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AppState {
    #[default]
    Menu,
    Simulate,
}

/// Inputs understood by the menu screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Increase,
    Decrease,
    Confirm,
}

/// Particle count currently chosen in the menu
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSelection {
    pub count: u32,
}

impl Default for MenuSelection {
    fn default() -> Self {
        Self {
            count: DEFAULT_PARTICLE_COUNT,
        }
    }
}

impl MenuSelection {
    /// Apply one menu action. Returns the state to switch to, if any.
    pub fn apply(&mut self, action: MenuAction) -> Option<AppState> {
        match action {
            MenuAction::Increase => {
                self.count = clamp_particle_count(self.count as i64 + PARTICLE_COUNT_STEP as i64);
                None
            }
            MenuAction::Decrease => {
                self.count = clamp_particle_count(self.count as i64 - PARTICLE_COUNT_STEP as i64);
                None
            }
            MenuAction::Confirm => Some(AppState::Simulate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use repel_core::{MAX_PARTICLES, MIN_PARTICLES};

    #[test]
    fn test_starts_in_menu_with_default_count() {
        assert_eq!(AppState::default(), AppState::Menu);
        assert_eq!(MenuSelection::default().count, 500);
    }

    #[test]
    fn test_steps_of_one_hundred() {
        let mut sel = MenuSelection::default();
        assert_eq!(sel.apply(MenuAction::Increase), None);
        assert_eq!(sel.count, 600);
        sel.apply(MenuAction::Decrease);
        sel.apply(MenuAction::Decrease);
        assert_eq!(sel.count, 400);
    }

    #[test]
    fn test_count_stays_in_range() {
        let mut sel = MenuSelection { count: MIN_PARTICLES };
        sel.apply(MenuAction::Decrease);
        assert_eq!(sel.count, MIN_PARTICLES);

        for _ in 0..50 {
            sel.apply(MenuAction::Increase);
        }
        assert_eq!(sel.count, MAX_PARTICLES);
    }

    #[test]
    fn test_confirm_starts_simulation() {
        let mut sel = MenuSelection { count: 1200 };
        assert_eq!(sel.apply(MenuAction::Confirm), Some(AppState::Simulate));
        assert_eq!(sel.count, 1200);
    }
}
