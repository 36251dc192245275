use crate::app::{App, ScreenState};
use crate::game::Game;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Color, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io;
use wordsearch_core::Position;

/// Width of the side panel next to the grid
const PANEL_WIDTH: u16 = 26;

pub fn render(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(
        stdout,
        Hide,
        SetBackgroundColor(app.theme.bg),
        Clear(ClearType::All)
    )?;

    match app.screen_state {
        ScreenState::Setup => render_setup_screen(stdout, app, term_width, term_height)?,
        ScreenState::Playing | ScreenState::Complete => {
            render_game_screen(stdout, app, term_width, term_height)?;
        }
    }

    if let Some(msg) = app.message.clone() {
        render_message(stdout, app, &msg, term_width, term_height)?;
    }

    Ok(())
}

fn print_centered(
    stdout: &mut io::Stdout,
    text: &str,
    y: u16,
    term_width: u16,
    color: Color,
) -> io::Result<()> {
    let x = term_width.saturating_sub(text.chars().count() as u16) / 2;
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(color),
        Print(text)
    )
}

fn render_setup_screen(
    stdout: &mut io::Stdout,
    app: &App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let x = term_width.saturating_sub(60) / 2;

    print_centered(stdout, "W O R D   S E A R C H", 1, term_width, theme.key)?;
    print_centered(
        stdout,
        "Build a word list, then generate the puzzle",
        2,
        term_width,
        theme.info,
    )?;

    // Entry buffer
    execute!(
        stdout,
        MoveTo(x, 4),
        SetForegroundColor(theme.fg),
        Print("Words (comma separated): "),
        SetForegroundColor(theme.input),
        Print(&app.input)
    )?;
    let input_cursor = (x + 25 + app.input.chars().count() as u16, 4);

    // Word list
    execute!(
        stdout,
        MoveTo(x, 6),
        SetForegroundColor(theme.fg),
        Print(format!("Word list ({}):", app.words.len()))
    )?;

    let list_height = term_height.saturating_sub(12) as usize;
    for (i, word) in app.words.iter().take(list_height.max(1)).enumerate() {
        let selected = i == app.word_selection;
        let marker = if selected { "> " } else { "  " };
        execute!(
            stdout,
            MoveTo(x, 7 + i as u16),
            SetForegroundColor(if selected { theme.key } else { theme.fg }),
            SetBackgroundColor(theme.word_color(i)),
            Print(" "),
            SetBackgroundColor(theme.bg),
            Print(format!("{marker}{word}"))
        )?;
    }

    let footer_y = term_height.saturating_sub(4);
    execute!(
        stdout,
        MoveTo(x, footer_y.saturating_sub(1)),
        SetForegroundColor(theme.fg),
        Print(format!("Random words to fetch: {}", app.config.word_count))
    )?;

    render_keys(
        stdout,
        app,
        x,
        footer_y,
        &[
            ("enter", "add / start"),
            ("ctrl+r", "random words"),
            ("+/-", "count"),
            ("del", "remove"),
            ("ctrl+u", "clear"),
            ("ctrl+t", "theme"),
            ("esc", "quit"),
        ],
    )?;

    // Leave the terminal cursor in the entry buffer.
    execute!(stdout, MoveTo(input_cursor.0, input_cursor.1), Show)?;
    Ok(())
}

fn render_game_screen(
    stdout: &mut io::Stdout,
    app: &mut App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let Some(game) = app.game.as_ref() else {
        return Ok(());
    };

    let size = game.grid().size() as u16;
    let grid_width = size * 2;
    let total_width = grid_width + 3 + PANEL_WIDTH;

    let start_x = term_width.saturating_sub(total_width) / 2;
    let start_y = if term_height > size + 8 { 3 } else { 1 };

    // Recorded for mouse hit-testing.
    app.grid_origin = (start_x, start_y);
    let game = app.game.as_ref().expect("checked above");

    let status = format!(
        "Time {}   Found {}/{}   Hints {}",
        game.elapsed_string(),
        game.found().len(),
        game.words().len(),
        game.hints_used()
    );
    print_centered(stdout, &status, start_y.saturating_sub(2), term_width, app.theme.info)?;

    render_grid(stdout, app, game, start_x, start_y)?;
    render_word_panel(
        stdout,
        app,
        game,
        start_x + grid_width + 3,
        start_y,
        term_height,
    )?;

    let footer_y = start_y + size + 1;
    if app.screen_state == ScreenState::Complete {
        let banner = format!("All words found in {}!", game.elapsed_string());
        print_centered(stdout, &banner, footer_y, term_width, app.theme.success)?;
        render_keys(
            stdout,
            app,
            start_x,
            footer_y + 1,
            &[("enter", "play again"), ("n", "new words"), ("q", "quit")],
        )?;
    } else {
        render_keys(
            stdout,
            app,
            start_x,
            footer_y,
            &[
                ("space", "select"),
                ("arrows", "move"),
                ("?", "hint"),
                ("p", "pause"),
                ("r", "reshuffle"),
                ("n", "new words"),
                ("q", "quit"),
            ],
        )?;
    }

    Ok(())
}

fn render_grid(
    stdout: &mut io::Stdout,
    app: &App,
    game: &Game,
    x: u16,
    y: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let size = game.grid().size();

    for row in 0..size {
        execute!(stdout, MoveTo(x, y + row as u16))?;

        for col in 0..size {
            let pos = Position::new(row, col);
            let index = pos.index(size);

            let is_cursor = pos == app.cursor;
            let is_selected = game.selection().contains(index);
            let is_hint = app.hint_cell == Some(pos);
            let found_word = game.found_word_covering(pos);

            let bg = if is_cursor {
                theme.cursor_bg
            } else if is_selected {
                theme.selection_bg
            } else if is_hint {
                theme.hint_bg
            } else if let Some(word_index) = found_word {
                theme.word_color(word_index)
            } else {
                theme.bg
            };

            let fg = if is_selected || found_word.is_some() {
                Color::White
            } else if is_hint {
                Color::Black
            } else {
                theme.letter
            };

            // Letters are hidden while paused.
            let letter = if game.is_paused() {
                '\u{b7}'
            } else {
                game.grid().get(pos)
            };

            execute!(
                stdout,
                SetBackgroundColor(bg),
                SetForegroundColor(fg),
                Print(letter),
                SetBackgroundColor(theme.bg),
                Print(' ')
            )?;
        }
    }

    Ok(())
}

fn render_word_panel(
    stdout: &mut io::Stdout,
    app: &App,
    game: &Game,
    x: u16,
    y: u16,
    term_height: u16,
) -> io::Result<()> {
    let theme = &app.theme;

    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.fg),
        Print(if game.is_paused() { "PAUSED" } else { "Words" })
    )?;

    // Stop at the terminal bottom rather than scrolling the frame.
    let panel_height = term_height.saturating_sub(y + 1) as usize;
    for (i, word) in game.words().iter().take(panel_height.max(1)).enumerate() {
        let row = y + 1 + i as u16;
        if game.is_found(word) {
            execute!(
                stdout,
                MoveTo(x, row),
                SetBackgroundColor(theme.word_color(i)),
                SetForegroundColor(Color::White),
                Print(format!(" {word} ")),
                SetBackgroundColor(theme.bg)
            )?;
        } else {
            execute!(
                stdout,
                MoveTo(x, row),
                SetForegroundColor(theme.fg),
                Print(format!(" {word} "))
            )?;
        }
    }

    Ok(())
}

/// Print a two-tone `key description` help line.
fn render_keys(
    stdout: &mut io::Stdout,
    app: &App,
    x: u16,
    y: u16,
    keys: &[(&str, &str)],
) -> io::Result<()> {
    execute!(stdout, MoveTo(x, y))?;
    for (key, description) in keys {
        execute!(
            stdout,
            SetForegroundColor(app.theme.key),
            Print(*key),
            SetForegroundColor(app.theme.info),
            Print(format!(" {description}  "))
        )?;
    }
    Ok(())
}

fn render_message(
    stdout: &mut io::Stdout,
    app: &App,
    msg: &str,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let color = if msg.starts_with("Found") || msg.starts_with("Added") {
        app.theme.success
    } else if msg.contains("failed") || msg.starts_with("Could not") {
        app.theme.error
    } else {
        app.theme.key
    };
    print_centered(
        stdout,
        &format!(" {msg} "),
        term_height.saturating_sub(2),
        term_width,
        color,
    )
}
