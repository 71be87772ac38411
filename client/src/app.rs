//! Game shell: screens, settings, sounds, and the high-score table
//!
//! An embedder owns the window, clock, and audio backend; it forwards key
//! events and a per-frame dt here and renders from [`SessionSnapshot`].

use std::path::PathBuf;

use game_core::{Config, Difficulty, Settings};

use crate::audio::{AudioCommand, AudioQueue, AudioSink, EffectTriggers, SoundEffect};
use crate::fsm::{GameAction, GameFsm, Screen};
use crate::highscores::{HighscoreEntry, HighscoreTable};
use crate::input::{apply_key_down, apply_key_up, drive_key};
use crate::session::{GameSession, SessionSnapshot};

pub struct GameApp {
    fsm: GameFsm,
    session: GameSession,
    settings: Settings,
    highscores: HighscoreTable,
    audio: AudioQueue,
    triggers: EffectTriggers,
    pending_entry: Option<u32>,
    exit_requested: bool,
}

impl GameApp {
    pub fn new(config: Config, seed: u64, highscore_path: impl Into<PathBuf>) -> Self {
        let settings = Settings::default();
        let mut audio = AudioQueue::new();
        // Bring the backend in sync with the initial volumes
        audio.submit(AudioCommand::SetMusicVolume(settings.music_volume));
        audio.submit(AudioCommand::SetEffectVolume(settings.sound_volume));
        Self {
            fsm: GameFsm::new(),
            session: GameSession::new(config, seed),
            settings,
            highscores: HighscoreTable::load(highscore_path),
            audio,
            triggers: EffectTriggers::new(),
            pending_entry: None,
            exit_requested: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.fsm.state()
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn highscores(&self) -> &[HighscoreEntry] {
        self.highscores.entries()
    }

    pub fn score(&self) -> u32 {
        self.session.score.points
    }

    /// A crash left a qualifying score waiting for a player name
    pub fn pending_name_entry(&self) -> bool {
        self.pending_entry.is_some()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    /// Commands accumulated since the last drain, oldest first
    pub fn drain_audio(&mut self) -> Vec<AudioCommand> {
        self.audio.drain()
    }

    /// Apply a discrete menu/flow action
    pub fn handle_action(&mut self, action: GameAction) {
        if action == GameAction::Exit {
            if self.fsm.state() == Screen::Menu {
                self.exit_requested = true;
            }
            return;
        }

        if !self.fsm.transition(action) {
            return;
        }

        match action {
            GameAction::Start | GameAction::Restart => {
                self.pending_entry = None;
                self.triggers = EffectTriggers::new();
                self.session.reset();
                self.audio.submit(AudioCommand::StartMusic);
            }
            GameAction::Crash => {
                self.triggers.silence(&mut self.audio);
                self.audio.submit(AudioCommand::Play(SoundEffect::Crash));
                self.audio.submit(AudioCommand::StopMusic);
                let score = self.session.score.points;
                if self.highscores.qualifies(score) {
                    self.pending_entry = Some(score);
                }
            }
            GameAction::ToMenu => {
                // Leaving game over without a name discards the entry
                self.pending_entry = None;
            }
            _ => {}
        }
    }

    /// Advance the game one frame; only the playing screen simulates
    pub fn frame(&mut self, dt: f32) {
        if !self.fsm.is_playing() {
            return;
        }

        let events = self.session.tick(dt, &self.settings);
        self.triggers
            .update(&self.session.input, self.settings.auto_acceleration, &mut self.audio);

        if events.crashed {
            self.handle_action(GameAction::Crash);
        }
    }

    /// Key-down event from the embedder
    pub fn key_down(&mut self, key: &str) {
        match self.fsm.state() {
            Screen::Playing => {
                if let Some(key) = drive_key(key) {
                    apply_key_down(
                        &mut self.session.input,
                        key,
                        self.settings.auto_acceleration,
                    );
                }
            }
            Screen::GameOver => match key {
                "r" | "R" => self.handle_action(GameAction::Restart),
                "m" | "M" => self.handle_action(GameAction::ToMenu),
                _ => {}
            },
            _ if self.fsm.in_settings() || self.fsm.state() == Screen::Highscores => {
                if matches!(key, "Escape" | "m" | "M") {
                    self.handle_action(GameAction::Back);
                }
            }
            _ => {}
        }
    }

    /// Key-up event from the embedder
    pub fn key_up(&mut self, key: &str) {
        if self.fsm.is_playing() {
            if let Some(key) = drive_key(key) {
                apply_key_up(&mut self.session.input, key);
            }
        }
    }

    /// Finalize the pending high-score entry with the player's name
    pub fn submit_name(&mut self, name: &str) {
        if let Some(score) = self.pending_entry.take() {
            self.highscores.insert(name, score);
        }
    }

    // Settings screens mutate the flat settings struct directly; volume
    // changes are mirrored to the audio backend immediately.

    pub fn set_music_volume(&mut self, volume: u8) {
        self.settings.set_music_volume(volume);
        self.audio
            .submit(AudioCommand::SetMusicVolume(self.settings.music_volume));
    }

    pub fn set_sound_volume(&mut self, volume: u8) {
        self.settings.set_sound_volume(volume);
        self.audio
            .submit(AudioCommand::SetEffectVolume(self.settings.sound_volume));
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.settings.difficulty = difficulty;
    }

    pub fn set_graphics_quality(&mut self, quality: u8) {
        self.settings.set_graphics_quality(quality);
    }

    pub fn set_auto_acceleration(&mut self, enabled: bool) {
        self.settings.auto_acceleration = enabled;
    }
}
