//! Crossterm terminal output backend.
//!
//! The `Driver` wraps a buffered writer and provides methods for entering and
//! leaving the alternate screen, applying cell updates from a frame diff, and
//! controlling the cursor.

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor, execute, queue,
    style::Print,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use super::compositor::CellUpdate;

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Terminal output backend using crossterm.
///
/// Writes are batched with `queue!`; nothing reaches the terminal until
/// [`flush`](Self::flush). The driver does NOT automatically enter the
/// alternate screen on creation; call `enter_alt_screen` explicitly.
pub struct Driver<W: Write = BufWriter<Stdout>> {
    writer: W,
}

impl Driver {
    /// Create a new driver wrapping stdout.
    pub fn new() -> io::Result<Self> {
        Ok(Self::with_writer(BufWriter::new(io::stdout())))
    }

    /// Get the terminal size (columns, rows) via crossterm.
    pub fn terminal_size() -> io::Result<(u16, u16)> {
        terminal::size()
    }
}

impl<W: Write> Driver<W> {
    /// Drive an arbitrary writer, e.g. a byte buffer in tests.
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Enter alternate screen and enable raw mode.
    pub fn enter_alt_screen(&mut self) -> io::Result<()> {
        execute!(self.writer, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        Ok(())
    }

    /// Leave alternate screen and disable raw mode.
    pub fn leave_alt_screen(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.writer, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Queue a batch of cell updates: move to each cell and print it.
    ///
    /// Call `flush()` afterward to send to the terminal.
    pub fn apply_updates(&mut self, updates: &[CellUpdate]) -> io::Result<()> {
        for update in updates {
            queue!(
                self.writer,
                cursor::MoveTo(update.column, update.row),
                Print(update.ch)
            )?;
        }
        Ok(())
    }

    /// Flush the internal write buffer to the terminal.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn hide_cursor(&mut self) -> io::Result<()> {
        execute!(self.writer, cursor::Hide)
    }

    pub fn show_cursor(&mut self) -> io::Result<()> {
        execute!(self.writer, cursor::Show)
    }

    /// Consume the driver, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

// ===========================================================================
// Tests
// ===========================================================================
