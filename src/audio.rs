//! Audio output using the Web Audio API
//!
//! Procedurally generated sound effects and background music - no
//! external files needed!

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::game::Sound;

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    /// Running background music voices, if started
    music: Option<(OscillatorNode, OscillatorNode, GainNode)>,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            music: None,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.5,
            muted: false,
        }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
        self.apply_music_volume();
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.apply_music_volume();
    }

    fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }

    fn apply_music_volume(&self) {
        if let Some((_, _, gain)) = &self.music {
            gain.gain().set_value(self.effective_music_volume());
        }
    }

    /// Play a sound effect
    pub fn play(&self, sound: Sound) {
        let vol = self.effective_sfx_volume();
        if vol <= 0.0 {
            return;
        }

        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match sound {
            Sound::Movement => self.play_movement(ctx, vol),
            Sound::Jump => self.play_jump(ctx, vol),
        }
    }

    /// Start the looping background music, restarting it if already on
    pub fn start_music(&mut self) {
        self.stop_music();

        let Some(ctx) = &self.ctx else { return };
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        // Two-voice pad: root plus a fifth, held until stopped
        let Some((root, gain)) = self.create_osc(ctx, 110.0, OscillatorType::Triangle) else {
            return;
        };
        let Ok(fifth) = ctx.create_oscillator() else {
            return;
        };
        fifth.set_type(OscillatorType::Triangle);
        fifth.frequency().set_value(165.0);
        if fifth.connect_with_audio_node(&gain).is_err() {
            return;
        }

        gain.gain().set_value(self.effective_music_volume());
        root.start().ok();
        fifth.start().ok();
        self.music = Some((root, fifth, gain));
    }

    /// Stop the background music if it is playing
    pub fn stop_music(&mut self) {
        if let Some((root, fifth, gain)) = self.music.take() {
            root.stop().ok();
            fifth.stop().ok();
            gain.disconnect().ok();
        }
    }

    /// Silence everything at once (session end)
    pub fn stop_all(&mut self) {
        self.stop_music();
    }

    // === Sound generators ===

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Movement - short tick, retriggered every steering frame
    fn play_movement(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 220.0, OscillatorType::Sine) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.12, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.04)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.05).ok();
    }

    /// Jump - rising whoosh
    fn play_jump(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 180.0, OscillatorType::Triangle) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.3, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.18)
            .ok();
        osc.frequency().set_value_at_time(180.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(520.0, t + 0.15)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.2).ok();
    }
}
