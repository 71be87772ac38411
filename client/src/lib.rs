//! Game shell for the roadrush driving game
//!
//! Wraps the `game_core` simulation with everything a frontend needs:
//! screen state machine, keyboard mapping, audio command stream, settings,
//! and the persisted high-score table. The embedder forwards input events
//! and a per-frame dt, renders from snapshots, and plays drained audio
//! commands.

pub mod app;
pub mod audio;
pub mod fsm;
pub mod highscores;
pub mod input;
pub mod session;

pub use app::GameApp;
pub use audio::{AudioCommand, AudioSink, SoundEffect};
pub use fsm::{GameAction, GameFsm, Screen};
pub use highscores::{HighscoreEntry, HighscoreTable};
pub use session::{GameSession, SessionSnapshot, TrafficView};
