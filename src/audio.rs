//! Sound hook for burst effects.
//!
//! The engine does not play audio itself. When the `sounds` option is on
//! and a player is installed, it calls [`SoundPlayer::play`] once per burst
//! and leaves the actual playback to the host application.

/// Index of the burst sound effect passed to the player.
pub const BURST_SOUND: usize = 0;

/// Receiver for sound-effect triggers.
///
/// Implemented for free by any `FnMut(usize, usize)` closure:
///
/// ```ignore
/// fireworks.with_sound_player(|sound, channels| {
///     mixer.play(sound, channels);
/// });
/// ```
pub trait SoundPlayer {
    /// Play sound `sound` on up to `channels` mixer channels.
    fn play(&mut self, sound: usize, channels: usize);
}

impl<F: FnMut(usize, usize)> SoundPlayer for F {
    fn play(&mut self, sound: usize, channels: usize) {
        self(sound, channels)
    }
}
