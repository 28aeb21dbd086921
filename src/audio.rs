/// Fire-and-forget sound playback.

use std::io::Write;

use tracing::trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    /// A shot was fired.
    Gun,
    /// A coin was destroyed.
    Hit,
}

pub trait Audio {
    /// Start playing `cue`.  Never blocks and never fails; a dropped cue
    /// is acceptable.
    fn play(&mut self, cue: SoundCue);
}

/// Rings the terminal bell.
pub struct Bell<W: Write> {
    out: W,
}

impl<W: Write> Bell<W> {
    pub fn new(out: W) -> Self {
        Bell { out }
    }
}

impl<W: Write> Audio for Bell<W> {
    fn play(&mut self, cue: SoundCue) {
        trace!(?cue, "bell");
        let _ = self.out.write_all(b"\x07").and_then(|_| self.out.flush());
    }
}

pub struct Mute;

impl Audio for Mute {
    fn play(&mut self, _cue: SoundCue) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bell_writes_one_bel_per_cue() {
        let mut bell = Bell::new(Vec::new());
        bell.play(SoundCue::Gun);
        bell.play(SoundCue::Hit);
        assert_eq!(bell.out, b"\x07\x07");
    }
}
