//! Drawing the app state onto the terminal with crossterm.
//!
//! Screen layout, top to bottom: status line, rain band, scrollback,
//! prompt line, helper line.

use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use siteterm_skin::{RainCell, Theme};
use siteterm_terminal::{LineStyle, OutputBlock};

use crate::app_state::{AppState, RAIN_ROWS};

/// Frames a glyph stays visible after being drawn.
const TRAIL_FRAMES: u8 = 12;

/// Persistent rain picture: new glyphs are painted over fading old ones.
#[derive(Debug, Clone)]
pub struct RainCanvas {
    width: u16,
    rows: u16,
    cells: Vec<Option<(char, u8)>>,
}

impl RainCanvas {
    pub fn new(width: u16, rows: u16) -> Self {
        Self {
            width,
            rows,
            cells: vec![None; usize::from(width) * usize::from(rows)],
        }
    }

    /// Age every glyph one frame, then paint `cells` (rows are 1-based).
    pub fn paint(&mut self, cells: &[RainCell]) {
        for slot in &mut self.cells {
            *slot = match slot.take() {
                Some((glyph, age)) if age + 1 < TRAIL_FRAMES => Some((glyph, age + 1)),
                _ => None,
            };
        }
        for cell in cells {
            if cell.row == 0 || cell.row > self.rows || cell.column >= self.width {
                continue;
            }
            let idx = usize::from(cell.row - 1) * usize::from(self.width) + usize::from(cell.column);
            self.cells[idx] = Some((cell.glyph, 0));
        }
    }

    /// Glyph and age at a position, if any.
    pub fn at(&self, column: u16, row: u16) -> Option<(char, u8)> {
        if column >= self.width || row >= self.rows {
            return None;
        }
        self.cells[usize::from(row) * usize::from(self.width) + usize::from(column)]
    }
}

fn rain_color(age: u8) -> Color {
    match age {
        0 => Color::White,
        1..=3 => Color::Green,
        _ => Color::DarkGreen,
    }
}

fn palette(theme: Theme) -> (Color, Color) {
    match theme {
        Theme::Hacker => (Color::Green, Color::DarkGreen),
        Theme::Professional => (Color::Reset, Color::DarkGrey),
    }
}

/// Clip to `width` chars.
fn clip(text: &str, width: u16) -> String {
    text.chars().take(usize::from(width)).collect()
}

/// Slice of `input` that fits in `room` columns with the caret visible.
///
/// Returns the visible text and the caret's column inside it.
fn input_window(input: &str, caret: usize, room: usize) -> (String, usize) {
    let room = room.max(1);
    let len = input.chars().count();
    let caret = caret.min(len);
    let start = (caret + 1).saturating_sub(room);
    let visible = input.chars().skip(start).take(room).collect();
    (visible, caret - start)
}

/// Redraw the whole screen.
pub fn draw(out: &mut impl Write, state: &AppState, width: u16, height: u16) -> std::io::Result<()> {
    let theme = state.theme.theme();
    let (fg, dim) = palette(theme);
    queue!(out, Clear(ClearType::All), ResetColor)?;

    let status = format!("{}  /{}  ", state.clock_text, state.current_page());
    let button = format!("[{}]", state.theme.button_label());
    let hint = format!("  F2: {}", state.theme.aria_label());
    let button_attr = if state.theme.pressed() {
        Attribute::Reverse
    } else {
        Attribute::NoReverse
    };
    let status_len = status.chars().count() as u16;
    let button_len = button.chars().count() as u16;
    queue!(
        out,
        MoveTo(0, 0),
        SetForegroundColor(dim),
        Print(clip(&status, width)),
        SetForegroundColor(fg),
        SetAttribute(button_attr),
        Print(clip(&button, width.saturating_sub(status_len))),
        SetAttribute(Attribute::Reset),
        SetForegroundColor(dim),
        Print(clip(&hint, width.saturating_sub(status_len + button_len)))
    )?;

    if theme == Theme::Hacker {
        for row in 0..RAIN_ROWS {
            for column in 0..width {
                if let Some((glyph, age)) = state.canvas.at(column, row) {
                    queue!(
                        out,
                        MoveTo(column, row + 1),
                        SetForegroundColor(rain_color(age)),
                        Print(glyph)
                    )?;
                }
            }
        }
    }

    let top = RAIN_ROWS + 1;
    let prompt_row = height.saturating_sub(2);
    let visible = usize::from(prompt_row.saturating_sub(top));

    let mut lines: Vec<(String, Color)> = Vec::new();
    for block in state.surface.blocks() {
        match block {
            OutputBlock::Echo(command) => {
                lines.push((format!("{}{command}", state.config.prompt), fg));
            },
            OutputBlock::Lines { style, lines: body } => {
                let color = match style {
                    LineStyle::Normal => fg,
                    LineStyle::Error => Color::Red,
                };
                lines.extend(body.iter().map(|l| (l.clone(), color)));
            },
        }
    }
    let skip = lines.len().saturating_sub(visible);
    let fading = state.navigator.is_fading();
    for (i, (line, color)) in lines.iter().skip(skip).enumerate() {
        let color = if fading { dim } else { *color };
        queue!(
            out,
            MoveTo(0, top + i as u16),
            SetForegroundColor(color),
            Print(clip(line, width))
        )?;
    }

    let prompt = clip(&state.config.prompt, width);
    let prompt_len = prompt.chars().count();
    let room = usize::from(width).saturating_sub(prompt_len);
    let input = state.surface.input();
    queue!(out, MoveTo(0, prompt_row), SetForegroundColor(fg), Print(&prompt))?;
    let caret_col = if input.is_empty() {
        queue!(
            out,
            SetForegroundColor(dim),
            SetAttribute(Attribute::Italic),
            Print(input_window(&state.config.placeholder, 0, room).0),
            SetAttribute(Attribute::Reset)
        )?;
        0
    } else {
        let (visible, col) = input_window(input, state.surface.caret(), room);
        queue!(out, SetForegroundColor(fg), Print(visible))?;
        col
    };

    queue!(
        out,
        MoveTo(0, prompt_row + 1),
        SetForegroundColor(dim),
        Print(clip(&state.config.helper_text, width)),
        ResetColor
    )?;

    let caret = (prompt_len + caret_col).min(usize::from(width.saturating_sub(1))) as u16;
    queue!(out, MoveTo(caret, prompt_row))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(column: u16, row: u16, glyph: char) -> RainCell {
        RainCell { column, row, glyph }
    }

    #[test]
    fn paint_places_glyphs_one_based() {
        let mut canvas = RainCanvas::new(4, 3);
        canvas.paint(&[cell(2, 1, 'A'), cell(0, 3, 'B')]);
        assert_eq!(canvas.at(2, 0), Some(('A', 0)));
        assert_eq!(canvas.at(0, 2), Some(('B', 0)));
        assert_eq!(canvas.at(1, 1), None);
    }

    #[test]
    fn cells_outside_band_are_clipped() {
        let mut canvas = RainCanvas::new(4, 3);
        canvas.paint(&[cell(0, 0, 'x'), cell(1, 4, 'y'), cell(9, 1, 'z')]);
        for row in 0..3 {
            for column in 0..4 {
                assert_eq!(canvas.at(column, row), None);
            }
        }
    }

    #[test]
    fn trail_fades_out() {
        let mut canvas = RainCanvas::new(1, 1);
        canvas.paint(&[cell(0, 1, 'Q')]);
        canvas.paint(&[]);
        assert_eq!(canvas.at(0, 0), Some(('Q', 1)));
        for _ in 0..TRAIL_FRAMES {
            canvas.paint(&[]);
        }
        assert_eq!(canvas.at(0, 0), None);
    }

    #[test]
    fn short_input_shown_whole() {
        assert_eq!(input_window("help", 4, 20), ("help".to_string(), 4));
        assert_eq!(input_window("help", 1, 20), ("help".to_string(), 1));
    }

    #[test]
    fn long_input_scrolls_with_caret() {
        let line = "a".repeat(190) + "0123456789";
        let (visible, col) = input_window(&line, 200, 10);
        assert_eq!(visible, "123456789");
        assert_eq!(col, 9);

        let (visible, col) = input_window(&line, 0, 10);
        assert_eq!(visible, "a".repeat(10));
        assert_eq!(col, 0);
    }

    #[test]
    fn window_never_wider_than_room() {
        let line = "x".repeat(200);
        for caret in [0, 5, 99, 150, 200] {
            let (visible, col) = input_window(&line, caret, 30);
            assert!(visible.chars().count() <= 30);
            assert!(col < 30);
        }
    }

    #[test]
    fn clip_counts_chars() {
        assert_eq!(clip("héllo", 3), "hél");
        assert_eq!(clip("ab", 10), "ab");
    }
}
