//! Interactive word-motion demo
//!
//! Renders a small mixed-script buffer and maps the vim word-motion keys
//! onto the library: `w`, `b`, `e`, `W`, `B`, `E`, plus `g`-prefixed
//! `ge`/`gE`. Pass a UTF-8 text file path to browse your own text; `q` or
//! Escape quits.

use std::fs;
use std::io::{stdout, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use unicode_width::UnicodeWidthStr;

use hanmotion::{navigate, JiebaSegmenter, Position, WordMotion};

const SAMPLE: &str = "Pixelmator Pro 在设计时就已经充分利用了机器学习技术。\n\
    许多编辑器，比如 vim，默认把整行中文当成一个词。\n\
    \n\
    Word motions (w, b, e, ge) rely on whitespace that 中文 never writes,\n\
    所以需要分词器来补上隐藏的词边界。";

fn main() -> Result<()> {
    let buffer = load_buffer()?;
    // Building the dictionary takes a moment; do it before entering raw
    // mode so the delay reads as startup time, not a frozen screen.
    let segmenter = JiebaSegmenter::new();

    init_terminal().context("failed to set up the terminal")?;
    let result = run(&segmenter, &buffer);
    restore_terminal();
    result
}

fn load_buffer() -> Result<Vec<String>> {
    let text = match std::env::args().nth(1) {
        Some(path) => {
            fs::read_to_string(&path).with_context(|| format!("failed to read `{path}`"))?
        }
        None => SAMPLE.to_string(),
    };
    let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
    // A buffer always has at least one line, like any editor's
    if lines.is_empty() {
        lines.push(String::new());
    }
    Ok(lines)
}

fn init_terminal() -> Result<()> {
    execute!(stdout(), EnterAlternateScreen, Hide)?;
    terminal::enable_raw_mode()?;
    Ok(())
}

fn restore_terminal() {
    let _ = terminal::disable_raw_mode();
    let _ = execute!(stdout(), Show, LeaveAlternateScreen);
}

fn run(segmenter: &JiebaSegmenter, buffer: &[String]) -> Result<()> {
    let mut cursor = Position::new(1, 0);
    let mut pending_g = false;
    loop {
        draw(buffer, cursor)?;
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let motion = match key.code {
            KeyCode::Esc | KeyCode::Char('q') => break,
            KeyCode::Char('g') => {
                pending_g = true;
                continue;
            }
            KeyCode::Char('e') if pending_g => Some(WordMotion::PREV_WORD_END),
            KeyCode::Char('E') if pending_g => Some(WordMotion::PREV_BIG_WORD_END),
            KeyCode::Char('w') => Some(WordMotion::NEXT_WORD_START),
            KeyCode::Char('b') => Some(WordMotion::PREV_WORD_START),
            KeyCode::Char('e') => Some(WordMotion::NEXT_WORD_END),
            KeyCode::Char('W') => Some(WordMotion::NEXT_BIG_WORD_START),
            KeyCode::Char('B') => Some(WordMotion::PREV_BIG_WORD_START),
            KeyCode::Char('E') => Some(WordMotion::NEXT_BIG_WORD_END),
            _ => None,
        };
        pending_g = false;
        if let Some(motion) = motion {
            cursor = navigate(segmenter, buffer, cursor, motion);
        }
    }
    Ok(())
}

fn draw(buffer: &[String], cursor: Position) -> Result<()> {
    let mut out = stdout();
    let (_cols, rows) = terminal::size()?;
    let height = rows.saturating_sub(1).max(1) as usize;
    // Keep the cursor row in view, pinned to the bottom once it scrolls
    let top = cursor.row.saturating_sub(height);

    queue!(out, Hide, Clear(ClearType::All))?;
    for (i, line) in buffer.iter().skip(top).take(height).enumerate() {
        queue!(out, MoveTo(0, i as u16), Print(line))?;
    }
    let status = format!(
        "({}, {})  w/b/e/W/B/E move, ge/gE backward ends, q quits",
        cursor.row, cursor.col
    );
    queue!(out, MoveTo(0, rows.saturating_sub(1)), Print(status))?;

    // Put the terminal cursor on the character the motion landed on. The
    // column is a byte offset; the screen x is the display width of the
    // line up to it (Han glyphs are two cells wide).
    let line = buffer[cursor.row - 1].as_str();
    let x = line[..cursor.col].width() as u16;
    let y = (cursor.row - 1 - top) as u16;
    queue!(out, MoveTo(x, y), Show)?;
    out.flush()?;
    Ok(())
}
