use dailygen_core::{format_total, ChartData, EntryRepository, Fuel};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph, Row, Table, Tabs},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, InputMode, Status, Tab};

const LABEL_WIDTH: u16 = 20;
const NO_DATA: &str = "No data available to display";

fn fuel_color(fuel: Fuel) -> Color {
    match fuel {
        Fuel::Diesel => Color::Yellow,
        Fuel::Gas => Color::Cyan,
        Fuel::Hfo => Color::Magenta,
    }
}

fn rounded(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

pub fn draw<R: EntryRepository>(f: &mut Frame, app: &mut App<R>) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Daily input
            Constraint::Length(3), // Tabs
            Constraint::Min(1),    // Report
            Constraint::Length(1), // Status / help
        ])
        .split(size);

    let header = Paragraph::new("DAILY GENERATION CALCULATOR")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    draw_form(f, app, main_chunks[1]);

    let titles: Vec<&str> = Tab::ALL.iter().map(|t| t.title()).collect();
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .block(rounded(" Generation Reports "))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, main_chunks[2]);

    match app.tab {
        Tab::Table => draw_table(f, app, main_chunks[3]),
        Tab::Chart => draw_chart(f, app, main_chunks[3]),
        Tab::Summary => draw_summary(f, app, main_chunks[3]),
    }

    draw_footer(f, app, main_chunks[4]);
}

fn draw_form<R: EntryRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;
    let lines: Vec<Line> = Fuel::ALL
        .iter()
        .zip(app.fields.iter())
        .map(|(fuel, value)| {
            let focused = editing && *fuel == app.focused_fuel();
            let value_style = if focused {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}", format!("{}:", fuel.label()), width = LABEL_WIDTH as usize),
                    Style::default().fg(Color::Blue),
                ),
                Span::styled(value.as_str(), value_style),
            ])
        })
        .collect();

    let form = Paragraph::new(lines).block(rounded(" Daily Input "));
    f.render_widget(form, area);

    if editing {
        let value = &app.fields[app.focused];
        let before: String = value.chars().take(app.cursor_position).collect();
        let x = area.x + 1 + LABEL_WIDTH + before.width() as u16;
        let y = area.y + 1 + app.focused as u16;
        f.set_cursor_position(Position::new(x, y));
    }
}

fn draw_table<R: EntryRepository>(f: &mut Frame, app: &mut App<R>, area: Rect) {
    if app.views.entries.is_empty() {
        draw_message(f, area, NO_DATA);
        return;
    }

    let rows: Vec<Row> = app
        .views
        .entries
        .iter()
        .map(|entry| {
            Row::new(vec![
                Span::styled(entry.date.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(entry.diesel.clone()),
                Span::raw(entry.gas.clone()),
                Span::raw(entry.hfo.clone()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Length(18),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new(vec!["Date", Fuel::Diesel.label(), Fuel::Gas.label(), Fuel::Hfo.label()])
            .style(Style::default().fg(Color::Yellow)),
    )
    .block(rounded(" Data Table "))
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn draw_chart<R: EntryRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    match &app.views.chart {
        Ok(Some(chart)) => render_chart(f, chart, area),
        Ok(None) => draw_message(f, area, NO_DATA),
        Err(e) => draw_error(f, area, e),
    }
}

fn render_chart(f: &mut Frame, chart: &ChartData, area: Rect) {
    let datasets: Vec<Dataset> = chart
        .series
        .iter()
        .map(|series| {
            Dataset::default()
                .name(series.fuel.label())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(fuel_color(series.fuel)))
                .data(&series.points)
        })
        .collect();

    let y_max = if chart.max_value > 0.0 { chart.max_value * 1.1 } else { 1.0 };
    let x_axis = Axis::default()
        .title("Date")
        .style(Style::default().fg(Color::Gray))
        .bounds(chart.x_bounds())
        .labels(vec![
            chart.first_date.format("%Y-%m-%d").to_string(),
            chart.last_date.format("%Y-%m-%d").to_string(),
        ]);
    let y_axis = Axis::default()
        .title("Generation")
        .style(Style::default().fg(Color::Gray))
        .bounds([0.0, y_max])
        .labels(vec![
            "0".to_string(),
            format!("{:.0}", y_max / 2.0),
            format!("{:.0}", y_max),
        ]);

    let widget = Chart::new(datasets)
        .block(rounded(" Daily Generation Report "))
        .x_axis(x_axis)
        .y_axis(y_axis);
    f.render_widget(widget, area);
}

fn draw_summary<R: EntryRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let totals = match &app.views.totals {
        Ok(Some(totals)) => totals,
        Ok(None) => return draw_message(f, area, NO_DATA),
        Err(e) => return draw_error(f, area, e),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "Summary Statistics",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for fuel in Fuel::ALL {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<28}", format!("Total {}:", fuel.label())),
                Style::default().fg(fuel_color(fuel)),
            ),
            Span::raw(format_total(totals.get(fuel))),
        ]));
    }

    f.render_widget(Paragraph::new(lines).block(rounded(" Summary ")), area);
}

fn draw_message(f: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(rounded(""));
    f.render_widget(paragraph, area);
}

fn draw_error(f: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(format!("Error: {}", message))
        .style(Style::default().fg(Color::Red))
        .block(rounded(""));
    f.render_widget(paragraph, area);
}

fn draw_footer<R: EntryRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let line = match app.input_mode {
        InputMode::Exporting | InputMode::Importing => {
            let prompt = if app.input_mode == InputMode::Exporting {
                "Export to: "
            } else {
                "Import from: "
            };
            let before: String = app.path_input.chars().take(app.cursor_position).collect();
            f.set_cursor_position(Position::new(
                area.x + prompt.width() as u16 + before.width() as u16,
                area.y,
            ));
            Line::from(vec![
                Span::styled(prompt, Style::default().fg(Color::Blue)),
                Span::raw(app.path_input.as_str()),
            ])
        }
        InputMode::Editing => match &app.status {
            Some(Status::Error(msg)) => Line::from(Span::styled(msg.as_str(), Style::default().fg(Color::Red))),
            _ => Line::from(Span::styled(
                "Enter: Add Entry | Tab: Next field | Esc: Done",
                Style::default().fg(Color::DarkGray),
            )),
        },
        InputMode::Normal => match &app.status {
            Some(Status::Info(msg)) => Line::from(Span::styled(msg.as_str(), Style::default().fg(Color::Green))),
            Some(Status::Error(msg)) => Line::from(Span::styled(msg.as_str(), Style::default().fg(Color::Red))),
            None => Line::from(Span::styled(
                "a: Add | c: Clear | 1-3: Tabs | j/k: Scroll | e: Export | i: Import | q: Quit",
                Style::default().fg(Color::DarkGray),
            )),
        },
    };
    f.render_widget(Paragraph::new(line), area);
}
