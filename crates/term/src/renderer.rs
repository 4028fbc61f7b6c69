//! TextRenderer: prints menu and state to a terminal (or any writer).
//!
//! Output is built in an internal buffer with crossterm commands and written
//! in one go on [`TextRenderer::flush`]. With color disabled no escape
//! sequences are emitted, so the output can be compared as plain text.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::core::{CoreError, Outcome, SessionSnapshot};
use crate::palette::{self, Rgb};
use crate::types::Piece;
use crate::view;

pub struct TextRenderer<W: Write> {
    out: W,
    buf: Vec<u8>,
    color: bool,
}

impl TextRenderer<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(1024),
            color,
        }
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Consume the renderer, returning the writer (pending output is dropped).
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn draw_menu(&mut self) -> Result<()> {
        self.newline()?;
        self.styled(view::MENU_TITLE, palette::NOTICE, true)?;
        self.newline()?;
        for line in view::menu_lines() {
            self.buf.queue(Print(line))?;
            self.newline()?;
        }
        self.buf.queue(Print(view::PROMPT))?;
        Ok(())
    }

    /// Queue front-to-back, then reserve top-to-bottom.
    ///
    /// Without color this prints [`view::state_lines`] as is.
    pub fn draw_state(&mut self, snap: &SessionSnapshot) -> Result<()> {
        if !self.color {
            for line in view::state_lines(snap) {
                self.buf.queue(Print(line))?;
                self.newline()?;
            }
            return Ok(());
        }

        self.draw_pieces(view::QUEUE_LABEL, &snap.queue)?;
        self.draw_pieces(view::RESERVE_LABEL, &snap.reserve)?;
        Ok(())
    }

    pub fn draw_outcome(&mut self, outcome: &Outcome) -> Result<()> {
        if let Some(msg) = view::describe_outcome(outcome) {
            self.styled(&msg, palette::NOTICE, false)?;
            self.newline()?;
        }
        Ok(())
    }

    pub fn draw_error(&mut self, err: &CoreError) -> Result<()> {
        self.styled(&view::describe_error(err), palette::WARNING, false)?;
        self.newline()?;
        Ok(())
    }

    pub fn draw_invalid(&mut self, input: &str) -> Result<()> {
        self.styled(&view::describe_invalid(input), palette::WARNING, false)?;
        self.newline()?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        self.buf.clear();
        Ok(())
    }

    fn draw_pieces(&mut self, label: &str, pieces: &[Piece]) -> Result<()> {
        self.styled(label, palette::LABEL, false)?;
        for piece in pieces {
            self.buf.queue(Print(' '))?;
            self.styled(&piece.to_string(), palette::piece_color(piece.kind()), true)?;
        }
        self.newline()?;
        Ok(())
    }

    fn styled(&mut self, text: &str, fg: Rgb, bold: bool) -> Result<()> {
        if !self.color {
            self.buf.queue(Print(text))?;
            return Ok(());
        }

        self.buf.queue(SetForegroundColor(Color::Rgb {
            r: fg.r,
            g: fg.g,
            b: fg.b,
        }))?;
        if bold {
            self.buf.queue(SetAttribute(Attribute::Bold))?;
        }
        self.buf.queue(Print(text))?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(ResetColor)?;
        Ok(())
    }

    fn newline(&mut self) -> Result<()> {
        self.buf.queue(Print('\n'))?;
        Ok(())
    }
}
