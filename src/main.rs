use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Row, Table, TableState};

use gwd_terminal::load::{self, DatasetPaths};
use gwd_terminal::records::{Column, column_label};
use gwd_terminal::sort::SortDirection;
use gwd_terminal::state::{AppState, SeasonChoice, Tab};

struct App {
    state: AppState,
    paths: DatasetPaths,
    should_quit: bool,
}

impl App {
    fn new(paths: DatasetPaths) -> Self {
        Self {
            state: AppState::new(),
            paths,
            should_quit: false,
        }
    }

    fn load_data(&mut self) {
        match load::load_or_init(&self.paths) {
            Ok(data) => self.state.set_data(data),
            Err(err) => self.state.push_log(format!("[ERROR] load failed: {err:#}")),
        }
    }

    fn reload_data(&mut self) {
        load::invalidate();
        self.state.push_log("[INFO] Reloading datasets");
        self.load_data();
    }

    fn on_key(&mut self, key: KeyEvent) {
        if self.state.picker_open {
            self.on_picker_key(key);
            return;
        }
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('v') | KeyCode::Char('V') => self.state.cycle_season_choice(),
            KeyCode::Tab => self.state.cycle_tab(),
            KeyCode::Char('s') => self.state.cycle_sort_column(),
            KeyCode::Char('o') => self.state.toggle_sort_direction(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.state.adjust_min_attempts(1),
            KeyCode::Char('-') | KeyCode::Char('_') => self.state.adjust_min_attempts(-1),
            KeyCode::PageUp => self.state.adjust_min_attempts(5),
            KeyCode::PageDown => self.state.adjust_min_attempts(-5),
            KeyCode::Char('p') => self.state.toggle_picker(),
            KeyCode::Char('c') => self.state.clear_selected_players(),
            KeyCode::Char('r') => self.reload_data(),
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(),
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            KeyCode::Esc => self.state.help_overlay = false,
            _ => {}
        }
    }

    fn on_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.state.toggle_picker(),
            KeyCode::Down => self.state.picker_select_next(),
            KeyCode::Up => self.state.picker_select_prev(),
            KeyCode::Char(' ') => self.state.toggle_selected_player(),
            KeyCode::Backspace => self.state.picker_pop_search(),
            KeyCode::Delete => self.state.clear_selected_players(),
            KeyCode::Char(c) => self.state.picker_push_search(c),
            _ => {}
        }
    }
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let mut app = App::new(DatasetPaths::from_env());
    app.load_data();
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(&app.state))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(1)])
        .split(chunks[1]);

    render_filters(frame, app, body[0]);
    render_table(frame, app, body[1]);
    render_footer(frame, app, chunks[2]);

    if app.state.picker_open {
        render_picker(frame, app);
    }
    if app.state.help_overlay {
        render_help(frame);
    }
}

fn header_text(state: &AppState) -> String {
    let view = match (state.season_choice, state.tab) {
        (SeasonChoice::RegularOnly, _) => "Regular Season".to_string(),
        (SeasonChoice::PlayoffsOnly, _) => "Playoffs".to_string(),
        (SeasonChoice::Both, tab) => format!(
            "Both / {}",
            match tab {
                Tab::Combined => "Combined",
                Tab::Regular => "Regular Season",
                Tab::Playoffs => "Playoffs",
            }
        ),
    };
    format!("NFL Quarterback Game Winning Drives (1999-2025)  |  View: {view}")
}

fn render_filters(frame: &mut Frame, app: &App, area: Rect) {
    let state = &app.state;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        "Filters",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(format!(
        "Season [v]: {}",
        match state.season_choice {
            SeasonChoice::Both => "Both",
            SeasonChoice::RegularOnly => "Regular Season Only",
            SeasonChoice::PlayoffsOnly => "Playoffs Only",
        }
    )));
    lines.push(Line::from(format!(
        "Min attempts [+/-]: {} (max {})",
        state.min_attempts,
        state.max_attempts()
    )));

    if state.selected_players.is_empty() {
        lines.push(Line::from("Players [p]: all quarterbacks"));
    } else {
        let mut names: Vec<&String> = state.selected_players.iter().collect();
        names.sort();
        lines.push(Line::from(format!("Players [p]: {} selected", names.len())));
        for name in names.iter().take(8) {
            lines.push(Line::from(format!("  {name}")));
        }
        if names.len() > 8 {
            lines.push(Line::from(format!("  ... and {} more", names.len() - 8)));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Sort",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(format!(
        "Column [s]: {}",
        column_label(state.current_sort_column())
    )));
    lines.push(Line::from(format!(
        "Order [o]: {}",
        match state.sort_direction {
            SortDirection::Ascending => "Ascending",
            SortDirection::Descending => "Descending",
        }
    )));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Log",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    let log_budget = area.height.saturating_sub(lines.len() as u16 + 2) as usize;
    for msg in state.logs.iter().rev().take(log_budget) {
        lines.push(Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let panel = Paragraph::new(lines).block(Block::default().borders(Borders::RIGHT));
    frame.render_widget(panel, area);
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let state = &app.state;
    let rows = state.visible_rows();

    if rows.is_empty() {
        let info = Paragraph::new("No data to display with current filters.")
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(info, area);
        return;
    }

    let columns = state.active_columns();
    let header = Row::new(
        columns
            .iter()
            .map(|c| column_label(*c).to_string())
            .collect::<Vec<_>>(),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let table_rows: Vec<Row> = rows
        .iter()
        .map(|row| Row::new(columns.iter().map(|c| row.cell(*c)).collect::<Vec<_>>()))
        .collect();

    let widths: Vec<Constraint> = columns
        .iter()
        .map(|c| {
            let label_width = column_label(*c).len() as u16 + 1;
            // Quarterback names can outgrow the column label.
            match c {
                Column::Quarterback => Constraint::Length(label_width.max(18)),
                _ => Constraint::Length(label_width),
            }
        })
        .collect();

    let table = Table::new(table_rows, widths)
        .header(header)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .block(Block::default().borders(Borders::NONE));

    let mut table_state = TableState::default();
    table_state.select(Some(state.selected.min(rows.len() - 1)));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let count = app.state.visible_rows().len();
    let status = if count == 0 {
        "Showing 0 rows".to_string()
    } else {
        format!("Showing {count} rows")
    };
    let footer = Paragraph::new(format!(
        "{status}  |  q quit  v season  Tab tab  s sort  o order  +/- min attempts  p players  r reload  ? help"
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}

fn render_picker(frame: &mut Frame, app: &App) {
    let state = &app.state;
    let area = centered_rect(40, 70, frame.size());
    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(format!("Search: {}_", state.picker_search)));
    lines.push(Line::from(
        "space toggle  del clear  enter/esc close".to_string(),
    ));
    lines.push(Line::from(""));

    let visible = area.height.saturating_sub(5) as usize;
    let players = state.picker_players();
    let start = state.picker_selected.saturating_sub(visible.saturating_sub(1));
    for (idx, name) in players.iter().enumerate().skip(start).take(visible) {
        let marker = if state.selected_players.contains(*name) {
            "[x]"
        } else {
            "[ ]"
        };
        let style = if idx == state.picker_selected {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(format!("{marker} {name}"), style)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Player Filter (empty selection = all)");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_help(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.size());
    frame.render_widget(Clear, area);

    let text = vec![
        Line::from("A Game-Winning Drive (GWD) attempt is an offensive drive in the"),
        Line::from("final 3 minutes of the 4th quarter with the offense trailing by"),
        Line::from("one score or fewer (8 points). It is successful if the offense"),
        Line::from("scores to tie or take the lead on that drive."),
        Line::from(""),
        Line::from("q        quit"),
        Line::from("v        cycle season type (Both / Regular Only / Playoffs Only)"),
        Line::from("Tab      cycle tab in Both view (Combined / Regular / Playoffs)"),
        Line::from("s        cycle sort column"),
        Line::from("o        toggle sort order"),
        Line::from("+ / -    raise / lower minimum GWD attempts"),
        Line::from("p        open the player filter"),
        Line::from("c        clear the player selection"),
        Line::from("r        invalidate the cache and reload the CSVs"),
        Line::from("j / k    move the table cursor"),
        Line::from("?        toggle this overlay"),
    ];

    let block = Block::default().borders(Borders::ALL).title("Help");
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
