//! Audio command stream
//!
//! The shell never plays sound itself; it emits discrete commands that an
//! embedder's backend consumes. A missing or broken backend simply drops
//! them and the game carries on silent.

use game_core::InputState;

/// Named sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    Gas,
    Brake,
    Crash,
    Horn,
}

/// Fire-and-forget commands consumed by the audio backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCommand {
    Play(SoundEffect),
    Stop(SoundEffect),
    SetEffectVolume(u8),
    SetMusicVolume(u8),
    StartMusic,
    StopMusic,
}

/// Receives audio commands; implementations must not block
pub trait AudioSink {
    fn submit(&mut self, command: AudioCommand);
}

/// Buffers commands for an embedder to drain each frame
#[derive(Debug, Default)]
pub struct AudioQueue {
    commands: Vec<AudioCommand>,
}

impl AudioQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&mut self) -> Vec<AudioCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl AudioSink for AudioQueue {
    fn submit(&mut self, command: AudioCommand) {
        self.commands.push(command);
    }
}

/// Edge-triggered state for the looping driving effects.
///
/// Gas and brake only sound under manual throttle; the horn sounds in
/// either mode. Each effect gets one Play when its key goes down and one
/// Stop when it goes up.
#[derive(Debug, Clone, Copy, Default)]
pub struct EffectTriggers {
    gas: bool,
    brake: bool,
    horn: bool,
}

impl EffectTriggers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit Play/Stop pairs for effects whose key state changed
    pub fn update(
        &mut self,
        input: &InputState,
        auto_acceleration: bool,
        sink: &mut impl AudioSink,
    ) {
        let gas = input.throttle && !auto_acceleration;
        if gas != self.gas {
            sink.submit(toggle(SoundEffect::Gas, gas));
            self.gas = gas;
        }

        let brake = input.brake && !auto_acceleration;
        if brake != self.brake {
            sink.submit(toggle(SoundEffect::Brake, brake));
            self.brake = brake;
        }

        if input.horn != self.horn {
            sink.submit(toggle(SoundEffect::Horn, input.horn));
            self.horn = input.horn;
        }
    }

    /// Stop every active looping effect (leaving the playing state)
    pub fn silence(&mut self, sink: &mut impl AudioSink) {
        if self.gas {
            sink.submit(AudioCommand::Stop(SoundEffect::Gas));
        }
        if self.brake {
            sink.submit(AudioCommand::Stop(SoundEffect::Brake));
        }
        if self.horn {
            sink.submit(AudioCommand::Stop(SoundEffect::Horn));
        }
        *self = Self::default();
    }
}

fn toggle(effect: SoundEffect, on: bool) -> AudioCommand {
    if on {
        AudioCommand::Play(effect)
    } else {
        AudioCommand::Stop(effect)
    }
}
