use std::io;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use talleres_terminal::aggregate;
use talleres_terminal::format::{self, FormattedResult};
use talleres_terminal::history::{self, MatchRecord};
use talleres_terminal::state::{AppState, Screen, screen_label};
use talleres_terminal::team_colors;

struct App {
    state: AppState,
    should_quit: bool,
}

impl App {
    fn new(records: &[MatchRecord]) -> Self {
        let mut state = AppState::new(records);
        state.push_log(format!("[INFO] Loaded {} matches", state.records.len()));
        Self {
            state,
            should_quit: false,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if self.state.search_active {
            match key.code {
                KeyCode::Enter => {
                    self.state.confirm_selection();
                    self.state.search_active = false;
                }
                KeyCode::Esc => {
                    self.state.clear_search();
                    self.state.search_active = false;
                }
                KeyCode::Backspace => self.state.pop_search_char(),
                KeyCode::Down => self.state.select_next(),
                KeyCode::Up => self.state.select_prev(),
                KeyCode::Char(ch) => self.state.push_search_char(ch),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('1') => self.state.screen = Screen::Opponents,
            KeyCode::Char('2') => self.state.screen = Screen::Tournament,
            KeyCode::Tab => self.state.toggle_screen(),
            KeyCode::Char('/') => {
                if self.state.screen == Screen::Opponents {
                    self.state.search_active = true;
                }
            }
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(),
            KeyCode::Enter => self.state.confirm_selection(),
            KeyCode::Esc => self.state.clear_selection(),
            KeyCode::Char('[') => self.state.scroll_summary_up(),
            KeyCode::Char(']') => self.state.scroll_summary_down(),
            KeyCode::PageUp => self.state.scroll_detail_up(),
            KeyCode::PageDown => self.state.scroll_detail_down(),
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    // Fatal load errors must surface before the terminal enters raw mode;
    // nothing is rendered when the source or a required column is missing.
    let path = history::history_path();
    let records = history::load_once(&path)
        .with_context(|| format!("loading match history from {}", path.display()))?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let mut app = App::new(records);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
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
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.size());

    let header =
        Paragraph::new(header_text(&app.state)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match app.state.screen {
        Screen::Opponents => render_opponents(frame, chunks[1], &app.state),
        Screen::Tournament => render_tournament(frame, chunks[1], &app.state),
    }

    let footer =
        Paragraph::new(footer_text(&app.state)).block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[2]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    let title = format!(
        "TALLERES HISTORY | {} | {} matches",
        screen_label(state.screen),
        state.records.len()
    );
    let line1 = format!("  ,-.  {title}");
    let line2 = " (CAT)".to_string();
    let line3 = "  `-'".to_string();
    format!("{line1}\n{line2}\n{line3}")
}

fn footer_text(state: &AppState) -> String {
    let legend = match state.screen {
        Screen::Opponents => {
            if state.search_active {
                "Type to search | ↑/↓ Move | Enter Select | Esc Close search".to_string()
            } else {
                "1/2 Views | / Search | j/k/↑/↓ Move | Enter Select | [ ] Table | PgUp/PgDn Detail | Esc Clear | ? Help | q Quit".to_string()
            }
        }
        Screen::Tournament => {
            "1/2 Views | j/k/↑/↓ Move | Enter Select | Esc Clear | ? Help | q Quit".to_string()
        }
    };
    let status = state.last_log().unwrap_or("").to_string();
    format!("{legend}\n{status}")
}

fn render_opponents(frame: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(52), Constraint::Percentage(48)])
        .split(area);

    render_summary_table(frame, columns[0], state);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(9),
            Constraint::Min(1),
        ])
        .split(columns[1]);

    render_search_box(frame, right[0], state);
    render_opponent_selector(frame, right[1], state);
    render_opponent_detail(frame, right[2], state);
}

fn summary_columns() -> [Constraint; 6] {
    [
        Constraint::Min(22),
        Constraint::Length(5),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(5),
    ]
}

fn render_summary_table(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title("Head-to-head")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 2 {
        return;
    }

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let widths = summary_columns();
    let header_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(widths)
        .split(sections[0]);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    for (i, label) in ["CLUB", "GP", "W", "D", "L", "BAL"].iter().enumerate() {
        frame.render_widget(Paragraph::new(*label).style(bold), header_cols[i]);
    }

    let list_area = sections[1];
    let visible = list_area.height as usize;
    let total = state.summaries.len();
    let start = state.summary_scroll.min(total.saturating_sub(visible));
    let end = (start + visible).min(total);

    for (i, row) in state.summaries[start..end].iter().enumerate() {
        let row_area = Rect {
            x: list_area.x,
            y: list_area.y + i as u16,
            width: list_area.width,
            height: 1,
        };
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(widths)
            .split(row_area);

        frame.render_widget(
            Paragraph::new(badge_line(&row.opponent)),
            cols[0],
        );
        let value = Style::default().add_modifier(Modifier::BOLD);
        frame.render_widget(
            Paragraph::new(row.played.to_string()).style(value),
            cols[1],
        );
        frame.render_widget(
            Paragraph::new(row.wins.to_string()).style(value.fg(format::WIN_COLOR)),
            cols[2],
        );
        frame.render_widget(
            Paragraph::new(row.draws.to_string()).style(value.fg(format::DRAW_COLOR)),
            cols[3],
        );
        frame.render_widget(
            Paragraph::new(row.losses.to_string()).style(value.fg(format::LOSS_COLOR)),
            cols[4],
        );
        frame.render_widget(
            Paragraph::new(row.balance().to_string())
                .style(value.fg(format::sign_color(row.balance()))),
            cols[5],
        );
    }
}

fn render_search_box(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = if state.search_active {
        "Search (typing)"
    } else {
        "Search (/)"
    };
    let text = if state.search_active {
        format!("{}_", state.opponent_search)
    } else {
        state.opponent_search.clone()
    };
    let box_style = if state.search_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let search = Paragraph::new(text)
        .block(Block::default().title(title).borders(Borders::ALL))
        .style(box_style);
    frame.render_widget(search, area);
}

fn render_opponent_selector(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().title("Opponents").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let names = state.filtered_opponents();
    if names.is_empty() {
        let empty =
            Paragraph::new("No opponent matches the search").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let visible = inner.height as usize;
    let (start, end) = visible_range(state.opponent_cursor, names.len(), visible);
    for (i, idx) in (start..end).enumerate() {
        let row_area = Rect {
            x: inner.x,
            y: inner.y + i as u16,
            width: inner.width,
            height: 1,
        };
        let selected = idx == state.opponent_cursor;
        let prefix = if selected { "> " } else { "  " };
        let style = if selected {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default()
        };
        frame.render_widget(
            Paragraph::new(format!("{prefix}{}", names[idx])).style(style),
            row_area,
        );
    }
}

fn render_opponent_detail(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().title("Breakdown").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let Some(opponent) = state.selected_opponent() else {
        let hint = Paragraph::new("Select an opponent from the list to see the full breakdown.")
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true });
        frame.render_widget(hint, inner);
        return;
    };

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::styled(format!("Breakdown vs {opponent}"), bold));
    lines.push(Line::raw(""));

    lines.push(Line::styled("By venue", bold));
    for venue in aggregate::venue_breakdown(&state.records, opponent) {
        lines.push(Line::raw(format::venue_sentence(&venue)));
    }
    lines.push(Line::raw(""));

    lines.push(Line::styled("By category", bold));
    for category in aggregate::category_breakdown(&state.records, opponent) {
        lines.push(Line::raw(format::category_sentence(&category, opponent)));
    }
    lines.push(Line::raw(""));

    lines.push(Line::styled("Matches", bold));
    for record in aggregate::matches_against(&state.records, opponent) {
        lines.push(match_line(record, 26));
    }

    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((state.detail_scroll, 0));
    frame.render_widget(detail, inner);
}

fn render_tournament(frame: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(30)])
        .split(area);

    render_tournament_selector(frame, columns[0], state);
    render_campaign(frame, columns[1], state);
}

fn render_tournament_selector(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().title("Tournaments").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    if state.tournaments.is_empty() {
        let empty =
            Paragraph::new("No tournaments in the history").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let visible = inner.height as usize;
    let (start, end) = visible_range(state.tournament_cursor, state.tournaments.len(), visible);
    for (i, idx) in (start..end).enumerate() {
        let row_area = Rect {
            x: inner.x,
            y: inner.y + i as u16,
            width: inner.width,
            height: 1,
        };
        let selected = idx == state.tournament_cursor;
        let prefix = if selected { "> " } else { "  " };
        let style = if selected {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default()
        };
        frame.render_widget(
            Paragraph::new(format!("{prefix}{}", state.tournaments[idx])).style(style),
            row_area,
        );
    }
}

fn campaign_columns() -> [Constraint; 4] {
    [
        Constraint::Length(20),
        Constraint::Min(24),
        Constraint::Length(10),
        Constraint::Min(16),
    ]
}

fn render_campaign(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = match state.selected_tournament() {
        Some(name) => format!("Campaign: {name}"),
        None => "Campaign".to_string(),
    };
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 2 {
        return;
    }

    let Some(tournament) = state.selected_tournament() else {
        let hint = Paragraph::new("Select a tournament to see its campaign.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, inner);
        return;
    };

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let widths = campaign_columns();
    let header_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(widths)
        .split(sections[0]);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    for (i, label) in ["Stage", "Opponent", "Venue", "Result"].iter().enumerate() {
        frame.render_widget(Paragraph::new(*label).style(bold), header_cols[i]);
    }

    let rows = aggregate::matches_in_tournament(&state.records, tournament);
    let list_area = sections[1];
    for (i, record) in rows.iter().take(list_area.height as usize).enumerate() {
        let row_area = Rect {
            x: list_area.x,
            y: list_area.y + i as u16,
            width: list_area.width,
            height: 1,
        };
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(widths)
            .split(row_area);

        frame.render_widget(Paragraph::new(record.round_or_stage.as_str()), cols[0]);
        frame.render_widget(Paragraph::new(badge_line(&record.opponent)), cols[1]);
        frame.render_widget(Paragraph::new(record.venue_label.as_str()), cols[2]);
        frame.render_widget(Paragraph::new(result_line(record)), cols[3]);
    }
}

/// Two-color kit dot next to the team name.
fn badge_line(name: &str) -> Line<'_> {
    let (primary, secondary) = team_colors::badge_colors(name);
    Line::from(vec![
        Span::styled("◉", Style::default().fg(primary)),
        Span::styled("◉ ", Style::default().fg(secondary)),
        Span::raw(name),
    ])
}

fn result_line(record: &MatchRecord) -> Line<'static> {
    let FormattedResult {
        score,
        color,
        penalties,
    } = format::format_result(record);
    let mut spans = vec![Span::styled(
        score,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if let Some(note) = penalties {
        // Secondary annotation, kept apart from the score itself.
        spans.push(Span::styled(
            format!(" ({note})"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn match_line(record: &MatchRecord, tournament_width: usize) -> Line<'static> {
    let mut spans = vec![Span::raw(format!(
        "{:<width$} {:<8} ",
        record.tournament,
        record.venue_label,
        width = tournament_width,
    ))];
    spans.extend(result_line(record).spans);
    Line::from(spans)
}

fn visible_range(selected: usize, total: usize, visible: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    if total <= visible {
        return (0, total);
    }

    let mut start = selected.saturating_sub(visible / 2);
    if start + visible > total {
        start = total - visible;
    }
    (start, start + visible)
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Talleres History - Help",
        "",
        "Global:",
        "  1            Opponent history",
        "  2            Tournament campaign",
        "  Tab          Switch view",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Opponent history:",
        "  /            Search opponents",
        "  j/k or ↑/↓   Move selector",
        "  Enter        Select opponent",
        "  [ ]          Scroll summary table",
        "  PgUp/PgDn    Scroll breakdown",
        "  Esc          Clear selection",
        "",
        "Tournament campaign:",
        "  j/k or ↑/↓   Move selector",
        "  Enter        Select tournament",
        "  Esc          Clear selection",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
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

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
