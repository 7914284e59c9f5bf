use std::io::{self, Write};

use log::warn;
use thiserror::Error;

/// Failure to start a sound cue.
#[derive(Debug, Error)]
pub enum SoundError {
    #[error("failed to ring terminal bell: {0}")]
    Bell(#[from] io::Error),
}

/// Something that can play the bite cue when food is eaten.
pub trait SoundPlayer {
    fn play_bite(&mut self) -> Result<(), SoundError>;
}

/// Rings the terminal bell on an output stream.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
}

impl TerminalBell<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> SoundPlayer for TerminalBell<W> {
    fn play_bite(&mut self) -> Result<(), SoundError> {
        self.out.write_all(b"\x07")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Plays nothing; selected by `--mute`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl SoundPlayer for Silent {
    fn play_bite(&mut self) -> Result<(), SoundError> {
        Ok(())
    }
}

/// Plays the bite cue, logging and swallowing any failure.
pub fn play_best_effort(player: &mut dyn SoundPlayer) {
    if let Err(error) = player.play_bite() {
        warn!("Sound playback failed: {error}");
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::{Silent, SoundError, SoundPlayer, TerminalBell, play_best_effort};

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn bell_writes_bel_byte() {
        let mut bell = TerminalBell::new(Vec::new());

        bell.play_bite().expect("writing to a vec should succeed");

        assert_eq!(bell.out, vec![0x07]);
    }

    #[test]
    fn bell_reports_write_failures() {
        let mut bell = TerminalBell::new(BrokenPipe);

        assert!(matches!(bell.play_bite(), Err(SoundError::Bell(_))));
    }

    #[test]
    fn best_effort_swallows_failures() {
        let mut bell = TerminalBell::new(BrokenPipe);
        play_best_effort(&mut bell);

        let mut silent = Silent;
        play_best_effort(&mut silent);
    }
}
