//! Terminal backends for the prompt read loop.
//!
//! [`CrosstermTty`] draws frames inline on stderr, redrawing in place on every
//! cycle, so the selected value can be printed cleanly on stdout. [`ScriptedTty`]
//! replays a fixed list of key presses and records the frames, for tests and
//! non-interactive runs.

use std::collections::VecDeque;
use std::io::{stderr, Stderr, Write};

use crossterm::cursor::{Hide, MoveToColumn, MoveUp, Show};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::{execute, queue};
use log::debug;

use rust_prompts_core::error::{Error, Result};

use crate::prompt::keys::KeyPress;
use crate::prompt::style::strip_ansi;
use crate::prompt::Frame;

pub trait Tty {
    /// Replaces the previously drawn frame.
    ///
    /// # Errors
    ///
    /// Fails when the terminal cannot be written to.
    fn draw(&mut self, frame: &Frame) -> Result<()>;

    /// Blocks until the next key press.
    ///
    /// # Errors
    ///
    /// Fails when no more input can be read.
    fn read_key(&mut self) -> Result<KeyPress>;

    /// Clears the last frame and leaves `line` in its place.
    ///
    /// # Errors
    ///
    /// Fails when the terminal cannot be written to.
    fn finish(&mut self, line: &str) -> Result<()>;
}

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stderr(), Show);
    }
}

pub struct CrosstermTty {
    out: Stderr,
    /// Lines below the first line of the last drawn frame.
    drawn_lines: u16,
    /// Row of the cursor within the last drawn frame.
    cursor_line: u16,
    _guard: RawModeGuard,
}

impl CrosstermTty {
    /// Switches the terminal into raw mode until the backend is dropped.
    ///
    /// # Errors
    ///
    /// Fails when raw mode cannot be enabled.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let guard = RawModeGuard;
        let mut out = stderr();
        execute!(out, Hide)?;
        Ok(Self {
            out,
            drawn_lines: 0,
            cursor_line: 0,
            _guard: guard,
        })
    }

    fn clear_frame(&mut self) -> Result<()> {
        if self.cursor_line > 0 {
            queue!(self.out, MoveUp(self.cursor_line))?;
        }
        queue!(self.out, MoveToColumn(0), Clear(ClearType::FromCursorDown))?;
        self.drawn_lines = 0;
        self.cursor_line = 0;
        Ok(())
    }
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

impl Tty for CrosstermTty {
    fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.clear_frame()?;

        let lines: Vec<&str> = frame.text.split('\n').collect();
        for (index, line) in lines.iter().enumerate() {
            if index > 0 {
                queue!(self.out, Print("\r\n"))?;
            }
            queue!(self.out, Print(line))?;
        }
        self.drawn_lines = to_u16(lines.len().saturating_sub(1));
        self.cursor_line = self.drawn_lines;

        match frame.cursor_column {
            Some(column) => {
                if self.drawn_lines > 0 {
                    queue!(self.out, MoveUp(self.drawn_lines))?;
                }
                self.cursor_line = 0;
                queue!(self.out, MoveToColumn(to_u16(column)), Show)?;
            }
            None => queue!(self.out, Hide)?,
        }

        self.out.flush()?;
        Ok(())
    }

    fn read_key(&mut self) -> Result<KeyPress> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    return Ok(KeyPress::from(key));
                }
            }
        }
    }

    fn finish(&mut self, line: &str) -> Result<()> {
        self.clear_frame()?;
        queue!(self.out, Print(line), Print("\r\n"), Show)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Replays predefined key presses.
#[derive(Debug, Default)]
pub struct ScriptedTty {
    keys: VecDeque<KeyPress>,
    frames: Vec<String>,
    finished: Option<String>,
}

impl ScriptedTty {
    pub fn new(keys: impl IntoIterator<Item = KeyPress>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Every drawn frame, styling removed.
    #[must_use]
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    /// The final line, styling removed.
    #[must_use]
    pub fn finished(&self) -> Option<&str> {
        self.finished.as_deref()
    }
}

impl Tty for ScriptedTty {
    fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.frames.push(strip_ansi(&frame.text));
        Ok(())
    }

    fn read_key(&mut self) -> Result<KeyPress> {
        self.keys.pop_front().ok_or_else(|| {
            debug!("Scripted input exhausted");
            Error::Interrupted
        })
    }

    fn finish(&mut self, line: &str) -> Result<()> {
        self.finished = Some(strip_ansi(line));
        Ok(())
    }
}
