use super::fabric::Fabric;

use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo as MoveCursorTo;
use crossterm::style::{Color, Print, SetBackgroundColor, SetForegroundColor};
use crossterm::QueueableCommand;

pub struct Renderer {
    stdout: Stdout,
}

impl Renderer {
    pub fn new() -> Self {
        let stdout = io::stdout();
        Renderer { stdout }
    }

    pub fn render(&mut self, fabric: &Fabric) -> io::Result<()> {
        for (row_number, row) in fabric.rows().iter().enumerate() {
            self.lazy_move_cursor(row_number, 0)?;

            let attributes = itertools::izip!(
                row.characters(),
                row.colors()
                    .iter()
                    .copied()
                    .chain(std::iter::repeat(None)),
                row.backgrounds()
                    .iter()
                    .copied()
                    .chain(std::iter::repeat(None)),
            );

            // Only emit style changes when the style actually changes.
            let mut current_color: Option<Color> = None;
            let mut current_background: Option<Color> = None;
            self.lazy_reset_colors()?;
            for (character, color, background) in attributes {
                if color != current_color {
                    self.stdout
                        .queue(SetForegroundColor(color.unwrap_or(Color::Reset)))?;
                    current_color = color;
                }
                if background != current_background {
                    self.stdout
                        .queue(SetBackgroundColor(background.unwrap_or(Color::Reset)))?;
                    current_background = background;
                }
                self.stdout.queue(Print(character))?;
            }
            self.lazy_reset_colors()?;
        }

        self.stdout.flush()
    }

    fn lazy_move_cursor(&mut self, row: usize, column: usize) -> io::Result<()> {
        let row: u16 = row.try_into().unwrap_or(u16::MAX);
        let column: u16 = column.try_into().unwrap_or(u16::MAX);
        self.stdout.queue(MoveCursorTo(column, row))?;
        Ok(())
    }

    fn lazy_reset_colors(&mut self) -> io::Result<()> {
        self.stdout.queue(SetForegroundColor(Color::Reset))?;
        self.stdout.queue(SetBackgroundColor(Color::Reset))?;
        Ok(())
    }
}
