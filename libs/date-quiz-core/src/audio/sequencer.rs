//! Back-to-back playback of audio tokens with cooperative cancellation.
//!
//! Every call to [`AudioSequencer::play_sequence`] bumps a generation counter
//! and receives a [`SequenceToken`] for the new generation. The sequence
//! checks its token before each step and races each clip against the token
//! being superseded, so a newer sequence (or disabling audio) stops it
//! without locks.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::audio::manifest::AudioManifest;
use crate::audio::tokens::audio_tokens;
use crate::error::AudioError;
use crate::settings::{clamp_volume, Settings};
use crate::types::Item;

/// Decodes and outputs clips.
pub trait ClipPlayer: Send + Sync {
    type Clip: Clone + Send + Sync;

    /// Load and decode the clip at `path`.
    fn decode(&self, path: &str) -> impl Future<Output = Result<Self::Clip, AudioError>> + Send;

    /// Play a clip. Resolves when playback reaches its end.
    ///
    /// Dropping the returned future must end output of that clip: a
    /// superseded sequence drops it rather than calling [`stop`](Self::stop),
    /// which may already belong to a newer sequence.
    fn play(&self, clip: &Self::Clip, volume: f32) -> impl Future<Output = ()> + Send;

    /// Stop whatever is currently playing.
    fn stop(&self);
}

/// Handle identifying one playback sequence.
#[derive(Debug, Clone)]
pub struct SequenceToken {
    id: u64,
    current: watch::Receiver<u64>,
}

impl SequenceToken {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Whether no newer sequence has started.
    pub fn is_current(&self) -> bool {
        *self.current.borrow() == self.id
    }

    /// Resolves once this sequence has been superseded.
    pub async fn cancelled(&mut self) {
        let id = self.id;
        let _ = self.current.wait_for(|generation| *generation != id).await;
    }
}

/// How a sequence ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    Completed { played: usize, skipped: usize },
    Cancelled,
    Disabled,
}

#[derive(Debug, Clone, Copy)]
struct PlaybackSettings {
    enabled: bool,
    volume: f32,
}

pub struct AudioSequencer<P: ClipPlayer> {
    player: P,
    manifest: Arc<AudioManifest>,
    base_path: String,
    cache: Mutex<HashMap<String, P::Clip>>,
    generation: watch::Sender<u64>,
    settings: RwLock<PlaybackSettings>,
}

impl<P: ClipPlayer> AudioSequencer<P> {
    pub fn new(player: P, manifest: Arc<AudioManifest>, base_path: impl Into<String>) -> Self {
        let (generation, _) = watch::channel(0);
        Self {
            player,
            manifest,
            base_path: base_path.into(),
            cache: Mutex::new(HashMap::new()),
            generation,
            settings: RwLock::new(PlaybackSettings {
                enabled: true,
                volume: 1.0,
            }),
        }
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn manifest(&self) -> &AudioManifest {
        &self.manifest
    }

    fn playback(&self) -> PlaybackSettings {
        *self.settings.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_enabled(&self) -> bool {
        self.playback().enabled
    }

    pub fn volume(&self) -> f32 {
        self.playback().volume
    }

    /// Turning audio off also stops the running sequence.
    pub fn set_enabled(&self, enabled: bool) {
        self.settings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .enabled = enabled;
        if !enabled {
            self.stop();
        }
    }

    pub fn set_volume(&self, volume: f32) {
        self.settings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .volume = clamp_volume(volume);
    }

    /// Pick up the audio fields of the user settings.
    pub fn apply_settings(&self, settings: &Settings) {
        self.set_volume(settings.audio_volume);
        self.set_enabled(settings.audio_enabled);
    }

    /// Invalidate the running sequence, if any, and silence the player.
    pub fn stop(&self) {
        self.generation.send_modify(|generation| *generation += 1);
        self.player.stop();
    }

    fn begin(&self) -> SequenceToken {
        let mut id = 0;
        self.generation.send_modify(|generation| {
            *generation += 1;
            id = *generation;
        });
        self.player.stop();
        SequenceToken {
            id,
            current: self.generation.subscribe(),
        }
    }

    /// Cached clip for a token, decoding it on first use.
    async fn resolve(&self, token: &str) -> Option<P::Clip> {
        let cached = self
            .cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned();
        if cached.is_some() {
            return cached;
        }

        let Some(path) = self.manifest.resolve_path(token, &self.base_path) else {
            warn!(token, "no audio mapped for token, skipping");
            return None;
        };

        match self.player.decode(&path).await {
            Ok(clip) => {
                self.cache
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .insert(token.to_string(), clip.clone());
                Some(clip)
            }
            Err(e) => {
                warn!(token, error = %e, "audio clip unavailable, skipping");
                None
            }
        }
    }

    /// Play the tokens in order, one clip at a time.
    ///
    /// Unmapped or undecodable tokens are skipped. A no-op when audio is
    /// disabled.
    pub async fn play_sequence(&self, tokens: &[String]) -> PlaybackOutcome {
        if !self.is_enabled() {
            return PlaybackOutcome::Disabled;
        }

        let mut token = self.begin();
        debug!(sequence = token.id(), ?tokens, "starting audio sequence");

        let mut played = 0;
        let mut skipped = 0;
        for name in tokens {
            if !token.is_current() {
                return PlaybackOutcome::Cancelled;
            }

            let Some(clip) = self.resolve(name).await else {
                skipped += 1;
                continue;
            };

            if !token.is_current() {
                return PlaybackOutcome::Cancelled;
            }

            let volume = self.volume();
            tokio::select! {
                _ = self.player.play(&clip, volume) => played += 1,
                _ = token.cancelled() => {
                    debug!(sequence = token.id(), "audio sequence superseded");
                    return PlaybackOutcome::Cancelled;
                }
            }
        }

        PlaybackOutcome::Completed { played, skipped }
    }

    /// Speak a vocabulary item.
    pub async fn play_item(&self, item: &Item) -> PlaybackOutcome {
        let tokens = audio_tokens(item, &self.manifest);
        self.play_sequence(&tokens).await
    }
}
