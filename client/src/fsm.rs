//! Game screen state machine
//!
//! A flat set of screens: the settings sub-screens are siblings reached
//! from the settings menu, not children of the playing state.

/// Screens the shell can be on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    Settings,
    AudioSettings,
    DifficultySettings,
    GraphicsSettings,
    ControlsSettings,
    Highscores,
    GameOver,
}

/// Actions that trigger screen transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    Crash,
    Restart,
    ToMenu,
    OpenSettings,
    OpenAudio,
    OpenDifficulty,
    OpenGraphics,
    OpenControls,
    OpenHighscores,
    Back,
    Exit,
}

/// Screen finite state machine
pub struct GameFsm {
    state: Screen,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: Screen::Menu,
        }
    }

    /// Get current screen
    pub fn state(&self) -> Screen {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.next_state(action).is_some()
    }

    /// Attempt a transition; false leaves the screen unchanged
    pub fn transition(&mut self, action: GameAction) -> bool {
        if let Some(next) = self.next_state(action) {
            self.state = next;
            true
        } else {
            false
        }
    }

    /// Get next screen for a given action (if valid)
    fn next_state(&self, action: GameAction) -> Option<Screen> {
        match (self.state, action) {
            // From Menu
            (Screen::Menu, GameAction::Start) => Some(Screen::Playing),
            (Screen::Menu, GameAction::OpenSettings) => Some(Screen::Settings),
            (Screen::Menu, GameAction::OpenHighscores) => Some(Screen::Highscores),

            // From Playing
            (Screen::Playing, GameAction::Crash) => Some(Screen::GameOver),

            // From Settings
            (Screen::Settings, GameAction::OpenAudio) => Some(Screen::AudioSettings),
            (Screen::Settings, GameAction::OpenDifficulty) => Some(Screen::DifficultySettings),
            (Screen::Settings, GameAction::OpenGraphics) => Some(Screen::GraphicsSettings),
            (Screen::Settings, GameAction::OpenControls) => Some(Screen::ControlsSettings),
            (Screen::Settings, GameAction::Back) => Some(Screen::Menu),

            // Sub-settings return to their parent
            (
                Screen::AudioSettings
                | Screen::DifficultySettings
                | Screen::GraphicsSettings
                | Screen::ControlsSettings,
                GameAction::Back,
            ) => Some(Screen::Settings),

            // From Highscores
            (Screen::Highscores, GameAction::Back) => Some(Screen::Menu),

            // From GameOver
            (Screen::GameOver, GameAction::Restart) => Some(Screen::Playing),
            (Screen::GameOver, GameAction::ToMenu) => Some(Screen::Menu),

            // Invalid transition
            _ => None,
        }
    }

    /// Reset to the menu
    pub fn reset(&mut self) {
        self.state = Screen::Menu;
    }

    pub fn is_playing(&self) -> bool {
        self.state == Screen::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.state == Screen::GameOver
    }

    /// Whether the current screen is one of the settings screens
    pub fn in_settings(&self) -> bool {
        matches!(
            self.state,
            Screen::Settings
                | Screen::AudioSettings
                | Screen::DifficultySettings
                | Screen::GraphicsSettings
                | Screen::ControlsSettings
        )
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}
