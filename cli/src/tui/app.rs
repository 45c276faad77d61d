use std::path::PathBuf;

use chrono::Local;
use dailygen_core::{
    ChartData, Entry, EntryRepository, FileEntryRepository, Fuel, GenerationError,
    GenerationService, Totals,
};
use ratatui::widgets::TableState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    Editing,
    Exporting,
    Importing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tab {
    Table,
    Chart,
    Summary,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Table, Tab::Chart, Tab::Summary];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Table => "Data Table",
            Tab::Chart => "Chart View",
            Tab::Summary => "Summary",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Table => 0,
            Tab::Chart => 1,
            Tab::Summary => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Info(String),
    Error(String),
}

/// What the report tabs show. Recomputed from the whole store after every change.
pub struct Views {
    pub entries: Vec<Entry>,
    pub chart: Result<Option<ChartData>, String>,
    pub totals: Result<Option<Totals>, String>,
}

pub struct App<R: EntryRepository = FileEntryRepository> {
    pub service: GenerationService<R>,
    pub views: Views,
    pub state: TableState,
    pub tab: Tab,
    pub input_mode: InputMode,
    /// Diesel, gas, hfo, in form order.
    pub fields: [String; 3],
    pub focused: usize,
    pub cursor_position: usize,
    pub path_input: String,
    pub status: Option<Status>,
}

impl<R: EntryRepository> App<R> {
    pub fn new(service: GenerationService<R>) -> App<R> {
        let views = build_views(&service);
        let mut state = TableState::default();
        if !views.entries.is_empty() {
            state.select(Some(0));
        }
        App {
            service,
            views,
            state,
            tab: Tab::Table,
            input_mode: InputMode::Normal,
            fields: Default::default(),
            focused: 0,
            cursor_position: 0,
            path_input: String::new(),
            status: None,
        }
    }

    fn refresh(&mut self) {
        self.views = build_views(&self.service);
        if self.views.entries.is_empty() {
            self.state.select(None);
        } else {
            self.state.select(Some(0));
        }
    }

    pub fn next(&mut self) {
        let len = self.views.entries.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.views.entries.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.tab = Tab::ALL[(self.tab.index() + 1) % Tab::ALL.len()];
    }

    pub fn previous_tab(&mut self) {
        self.tab = Tab::ALL[(self.tab.index() + Tab::ALL.len() - 1) % Tab::ALL.len()];
    }

    // Form

    pub fn enter_form(&mut self) {
        self.input_mode = InputMode::Editing;
        self.status = None;
        self.cursor_position = self.fields[self.focused].chars().count();
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn focused_fuel(&self) -> Fuel {
        Fuel::ALL[self.focused]
    }

    pub fn next_field(&mut self) {
        self.focus((self.focused + 1) % self.fields.len());
    }

    pub fn previous_field(&mut self) {
        self.focus((self.focused + self.fields.len() - 1) % self.fields.len());
    }

    fn focus(&mut self, index: usize) {
        self.focused = index;
        self.cursor_position = self.fields[index].chars().count();
    }

    pub fn clear_form(&mut self) {
        for field in self.fields.iter_mut() {
            field.clear();
        }
        self.focused = 0;
        self.cursor_position = 0;
    }

    fn active_input(&mut self) -> &mut String {
        match self.input_mode {
            InputMode::Exporting | InputMode::Importing => &mut self.path_input,
            InputMode::Normal | InputMode::Editing => &mut self.fields[self.focused],
        }
    }

    pub fn input_char(&mut self, c: char) {
        let cursor = self.cursor_position;
        let input = self.active_input();
        let byte_index = input.chars().take(cursor).map(|c| c.len_utf8()).sum();
        input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let cursor = self.cursor_position;
            let input = self.active_input();
            let byte_index: usize = input.chars().take(cursor - 1).map(|c| c.len_utf8()).sum();
            input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let cursor = self.cursor_position;
        if cursor < self.active_input().chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn submit_entry(&mut self) {
        let [diesel, gas, hfo] = &self.fields;
        match self.service.add_entry(diesel, gas, hfo) {
            Ok(_) => {
                self.refresh();
                self.clear_form();
                self.exit_input_mode();
                self.status = Some(Status::Info("Entry added successfully".to_string()));
            }
            Err(GenerationError::Validation(e)) => {
                self.status = Some(Status::Error(e.to_string()));
            }
            Err(e) => {
                // The entry may be in memory even though the write failed.
                self.refresh();
                self.status = Some(Status::Error(format!("An error occurred: {}", e)));
            }
        }
    }

    // Export / import prompts

    pub fn begin_export(&mut self) {
        self.path_input = format!("generation_report_{}.csv", Local::now().format("%Y%m%d"));
        self.cursor_position = self.path_input.chars().count();
        self.input_mode = InputMode::Exporting;
    }

    pub fn begin_import(&mut self) {
        self.path_input.clear();
        self.cursor_position = 0;
        self.input_mode = InputMode::Importing;
    }

    pub fn submit_path(&mut self) {
        let raw = self.path_input.trim().to_string();
        let mode = self.input_mode;
        self.exit_input_mode();
        if raw.is_empty() {
            return;
        }
        let path = PathBuf::from(raw);

        let status = match mode {
            InputMode::Exporting => match self.service.export_to(&path) {
                Ok(written) => Status::Info(format!("Report exported to {}", written.display())),
                Err(e) => Status::Error(format!("Export failed: {}", e)),
            },
            InputMode::Importing => match self.service.import_from(&path) {
                Ok(count) => {
                    self.refresh();
                    Status::Info(format!("Data imported successfully ({} entries)", count))
                }
                Err(e) => {
                    self.refresh();
                    Status::Error(format!("Import failed: {}", e))
                }
            },
            InputMode::Normal | InputMode::Editing => return,
        };
        self.status = Some(status);
    }
}

fn build_views<R: EntryRepository>(service: &GenerationService<R>) -> Views {
    let empty = service.store().is_empty();
    Views {
        entries: service.list_sorted(),
        chart: service.chart().map_err(|e| e.to_string()),
        totals: if empty {
            Ok(None)
        } else {
            service.totals().map(Some).map_err(|e| e.to_string())
        },
    }
}
