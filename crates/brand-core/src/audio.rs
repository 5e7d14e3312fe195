//! Background audio autoplay with a manual fallback button.
//!
//! Browsers resolve `play()` asynchronously, so the controller is split into
//! a synchronous [`prepare`](AudioController::prepare) step and result
//! handlers the frontend calls once each play promise settles.

use crate::constants::AUDIO_VOLUME;
use crate::env::{EnvError, MediaElement, PlayButtonHost};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioPhase {
    Idle,
    Attempting,
    Playing,
    Blocked,
}

#[derive(Debug)]
pub struct AudioController {
    volume: f64,
    phase: AudioPhase,
}

impl Default for AudioController {
    fn default() -> Self {
        Self::new(AUDIO_VOLUME)
    }
}

impl AudioController {
    pub fn new(volume: f64) -> Self {
        Self {
            volume,
            phase: AudioPhase::Idle,
        }
    }

    pub fn phase(&self) -> AudioPhase {
        self.phase
    }

    /// Mute and set the volume ahead of the autoplay attempt; muted playback
    /// is far more likely to be allowed.
    pub fn prepare<M: MediaElement + ?Sized>(&mut self, media: &mut M) {
        if let Err(e) = media.set_muted(true) {
            log::debug!("[audio] mute failed: {e}");
        }
        if let Err(e) = media.set_volume(self.volume) {
            log::debug!("[audio] volume not set: {e}");
        }
        self.phase = AudioPhase::Attempting;
    }

    /// Outcome of the initial `play()`.
    pub fn on_autoplay_result<M, H>(&mut self, result: Result<(), EnvError>, media: &mut M, host: &mut H)
    where
        M: MediaElement + ?Sized,
        H: PlayButtonHost + ?Sized,
    {
        match result {
            Ok(()) => {
                unmute(media);
                self.phase = AudioPhase::Playing;
                log::info!("[audio] autoplay started");
            }
            Err(e) => {
                log::info!("[audio] autoplay blocked ({e}); offering play button");
                self.phase = AudioPhase::Blocked;
                self.show_play_button(host);
            }
        }
    }

    /// Insert the fallback button unless one already exists. Returns whether
    /// a button was inserted.
    pub fn show_play_button<H: PlayButtonHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if host.has_play_button() {
            return false;
        }
        match host.insert_play_button() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("[audio] play button unavailable: {e}");
                false
            }
        }
    }

    /// Outcome of a `play()` triggered by the fallback button. A rejection
    /// leaves the button in place for another try.
    pub fn on_manual_play_result<M, H>(&mut self, result: Result<(), EnvError>, media: &mut M, host: &mut H)
    where
        M: MediaElement + ?Sized,
        H: PlayButtonHost + ?Sized,
    {
        match result {
            Ok(()) => {
                unmute(media);
                if let Err(e) = host.remove_play_button() {
                    log::debug!("[audio] play button not removed: {e}");
                }
                self.phase = AudioPhase::Playing;
                log::info!("[audio] playback started from button");
            }
            Err(e) => {
                log::debug!("[audio] manual play rejected: {e}");
                self.phase = AudioPhase::Blocked;
            }
        }
    }
}

fn unmute<M: MediaElement + ?Sized>(media: &mut M) {
    if let Err(e) = media.set_muted(false) {
        log::debug!("[audio] unmute failed: {e}");
    }
}
