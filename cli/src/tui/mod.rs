pub mod app;
pub mod ui;

use std::io;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dailygen_core::{EntryRepository, GenerationService};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::tui::app::{App, InputMode, Tab};

pub fn run<R: EntryRepository>(service: GenerationService<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(service);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res.context("Terminal UI failed")
}

fn run_app<B: Backend, R: EntryRepository>(terminal: &mut Terminal<B>, app: &mut App<R>) -> io::Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| io::Error::other(e.to_string()))?;

        if event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key(app, key) {
                    return Ok(());
                }
            }
        }
    }
}

/// Returns true when the user asked to quit.
fn handle_key<R: EntryRepository>(app: &mut App<R>, key: KeyEvent) -> bool {
    match app.input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('a') | KeyCode::Enter => app.enter_form(),
            KeyCode::Char('c') => app.clear_form(),
            KeyCode::Char('e') => app.begin_export(),
            KeyCode::Char('i') => app.begin_import(),
            KeyCode::Char('1') => app.select_tab(Tab::Table),
            KeyCode::Char('2') => app.select_tab(Tab::Chart),
            KeyCode::Char('3') => app.select_tab(Tab::Summary),
            KeyCode::Right | KeyCode::Char('l') => app.next_tab(),
            KeyCode::Left | KeyCode::Char('h') => app.previous_tab(),
            KeyCode::Down | KeyCode::Char('j') => app.next(),
            KeyCode::Up | KeyCode::Char('k') => app.previous(),
            _ => {}
        },
        InputMode::Editing => match key.code {
            KeyCode::Enter => app.submit_entry(),
            KeyCode::Esc => app.exit_input_mode(),
            KeyCode::Tab | KeyCode::Down => app.next_field(),
            KeyCode::BackTab | KeyCode::Up => app.previous_field(),
            KeyCode::Char(c) => app.input_char(c),
            KeyCode::Backspace => app.delete_char(),
            KeyCode::Left => app.move_cursor_left(),
            KeyCode::Right => app.move_cursor_right(),
            _ => {}
        },
        InputMode::Exporting | InputMode::Importing => match key.code {
            KeyCode::Enter => app.submit_path(),
            KeyCode::Esc => app.exit_input_mode(),
            KeyCode::Char(c) => app.input_char(c),
            KeyCode::Backspace => app.delete_char(),
            KeyCode::Left => app.move_cursor_left(),
            KeyCode::Right => app.move_cursor_right(),
            _ => {}
        },
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::Status;
    use crossterm::event::KeyModifiers;
    use dailygen_core::FileEntryRepository;
    use tempfile::tempdir;

    fn app_in(dir: &std::path::Path) -> App<FileEntryRepository> {
        let repo = FileEntryRepository::new(dir.join("generation_data.csv"));
        App::new(GenerationService::open(repo).unwrap())
    }

    fn press(app: &mut App<FileEntryRepository>, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_keys(app: &mut App<FileEntryRepository>, s: &str) {
        for c in s.chars() {
            assert!(!press(app, KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_q_quits_only_in_normal_mode() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());

        assert!(!press(&mut app, KeyCode::Char('a')));
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.fields[0], "q");

        press(&mut app, KeyCode::Esc);
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_form_keys_add_entry() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());

        press(&mut app, KeyCode::Char('a'));
        type_keys(&mut app, "10");
        press(&mut app, KeyCode::Tab);
        type_keys(&mut app, "200");
        press(&mut app, KeyCode::Tab);
        type_keys(&mut app, "5");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.views.entries.len(), 1);
        assert_eq!(app.views.entries[0].diesel, "10");
        assert_eq!(app.views.entries[0].gas, "200");
        assert_eq!(app.views.entries[0].hfo, "5");
        assert!(dir.path().join("generation_data.csv").exists());
    }

    #[test]
    fn test_c_is_text_while_editing() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());

        press(&mut app, KeyCode::Enter);
        type_keys(&mut app, "1");
        press(&mut app, KeyCode::BackTab);
        type_keys(&mut app, "c");
        assert_eq!(app.fields[0], "1");
        assert_eq!(app.fields[2], "c");

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.fields, [String::new(), String::new(), String::new()]);
    }

    #[test]
    fn test_export_prompt_writes_file() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.service.add_entry_on("2024-01-05", "1", "2", "3").unwrap();

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.input_mode, InputMode::Exporting);
        app.path_input.clear();
        app.cursor_position = 0;
        let target = dir.path().join("report");
        type_keys(&mut app, target.to_str().unwrap());
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(matches!(app.status, Some(Status::Info(_))));
        assert!(dir.path().join("report.csv").exists());
        assert!(app.fields.iter().all(|f| f.is_empty()));
    }

    #[test]
    fn test_tab_and_prompt_keys() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.tab, Tab::Summary);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.tab, Tab::Table);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.tab, Tab::Summary);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.tab, Tab::Chart);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.tab, Tab::Table);

        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.input_mode, InputMode::Importing);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
    }
}
