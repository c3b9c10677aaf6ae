//! Sound effect playback
//!
//! Small procedurally generated tones, fire-and-forget. A failed load
//! disables that one effect; a missing effect at play time is logged and
//! skipped. Audio problems never interrupt the game loop.

use macroquad::audio::{PlaySoundParams, Sound, load_sound_from_bytes, play_sound};

const SAMPLE_RATE: u32 = 44_100;
const SFX_VOLUME: f32 = 0.6;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// A coin landed on the paddle
    CoinCaught,
    /// Persisted high score beaten
    HighScore,
    /// Session over (kept for completeness, not triggered during play)
    GameOver,
}

/// Holds the decoded effects for the lifetime of the process
pub struct AudioManager {
    coin: Option<Sound>,
    high_score: Option<Sound>,
    game_over: Option<Sound>,
}

impl AudioManager {
    /// Generate and decode every effect up front
    pub async fn load() -> Self {
        Self {
            coin: load_tone(988.0, 0.08, 0.45).await,
            high_score: load_tone(1319.0, 0.35, 0.5).await,
            game_over: load_tone(131.0, 0.5, 0.5).await,
        }
    }

    /// Best-effort playback
    pub fn play(&self, effect: SoundEffect) {
        let sound = match effect {
            SoundEffect::CoinCaught => &self.coin,
            SoundEffect::HighScore => &self.high_score,
            SoundEffect::GameOver => &self.game_over,
        };
        match sound {
            Some(sound) => play_sound(
                sound,
                PlaySoundParams {
                    looped: false,
                    volume: SFX_VOLUME,
                },
            ),
            None => log::debug!("{effect:?} sound unavailable, skipping"),
        }
    }
}

async fn load_tone(freq: f32, duration: f32, volume: f32) -> Option<Sound> {
    match load_sound_from_bytes(&tone_wav(freq, duration, volume)).await {
        Ok(sound) => Some(sound),
        Err(e) => {
            log::warn!("failed to load {freq} Hz tone: {e}");
            None
        }
    }
}

/// Build a mono 16-bit PCM WAV containing a decaying sine tone with a touch
/// of second harmonic for a chime-like timbre
fn tone_wav(freq: f32, duration: f32, volume: f32) -> Vec<u8> {
    let total = (duration * SAMPLE_RATE as f32) as usize;

    let mut samples = Vec::<i16>::with_capacity(total);
    for i in 0..total {
        let t = i as f32 / SAMPLE_RATE as f32;
        let envelope = 1.0 - i as f32 / total as f32;
        let fundamental = (2.0 * std::f32::consts::PI * freq * t).sin();
        let harmonic = (2.0 * std::f32::consts::PI * freq * 2.0 * t).sin();
        let s = ((fundamental + 0.35 * harmonic) * volume * envelope).clamp(-1.0, 1.0);
        samples.push((s * i16::MAX as f32) as i16);
    }

    encode_wav(&samples)
}

/// Wrap raw mono 16-bit samples in a RIFF/WAVE header
fn encode_wav(samples: &[i16]) -> Vec<u8> {
    let num_channels = 1u16;
    let bits_per_sample = 16u16;
    let byte_rate = SAMPLE_RATE * num_channels as u32 * bits_per_sample as u32 / 8;
    let block_align = num_channels * bits_per_sample / 8;
    let data_len = (samples.len() * 2) as u32;

    let mut out = Vec::with_capacity(44 + data_len as usize);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&num_channels.to_le_bytes());
    out.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&bits_per_sample.to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    for s in samples {
        out.extend_from_slice(&s.to_le_bytes());
    }
    out
}
