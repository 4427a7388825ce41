use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant, SystemTime};

use chrono::{DateTime, Local};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use talentvision_terminal::catalog;
use talentvision_terminal::provider::spawn_scout_provider;
use talentvision_terminal::report_view::{ChipKind, PlayerCard, ReportView, build_report_view};
use talentvision_terminal::scouting_fetch::api_base_from_env;
use talentvision_terminal::state::{
    AppState, Delta, FormFocus, ProviderCommand, apply_delta,
};

const STAT_COLUMNS: usize = 3;
const STAT_CELL_WIDTH: usize = 30;

struct App {
    state: AppState,
    should_quit: bool,
    cmd_tx: Option<mpsc::Sender<ProviderCommand>>,
}

impl App {
    fn new(cmd_tx: Option<mpsc::Sender<ProviderCommand>>) -> Self {
        Self {
            state: AppState::new(),
            should_quit: false,
            cmd_tx,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if self.state.help_overlay {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.state.help_overlay = false;
            }
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.state.focus_next(),
            KeyCode::BackTab => self.state.focus_prev(),
            KeyCode::Char('j') | KeyCode::Down => self.state.cursor_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.cursor_prev(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(cmd) = self.state.activate() {
                    self.dispatch(cmd);
                }
            }
            KeyCode::Char('g') => {
                if let Some(cmd) = self.state.begin_submit() {
                    self.dispatch(cmd);
                }
            }
            KeyCode::Backspace | KeyCode::Delete => self.state.clear_focused(),
            KeyCode::PageDown => self.state.scroll_report_down(),
            KeyCode::PageUp => self.state.scroll_report_up(),
            KeyCode::Char('?') => self.state.help_overlay = true,
            _ => {}
        }
    }

    fn dispatch(&mut self, cmd: ProviderCommand) {
        let ProviderCommand::Analyze { seq, .. } = &cmd;
        let seq = *seq;
        let sent = self
            .cmd_tx
            .as_ref()
            .map(|tx| tx.send(cmd).is_ok())
            .unwrap_or(false);
        if !sent {
            apply_delta(
                &mut self.state,
                Delta::AnalysisFailed {
                    seq,
                    detail: "analysis provider unavailable".to_string(),
                },
            );
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

    let (tx, rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    spawn_scout_provider(tx, cmd_rx, api_base_from_env());

    let mut app = App::new(Some(cmd_tx));
    let res = run_app(&mut terminal, &mut app, rx);

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

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<Delta>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        while let Ok(delta) = rx.try_recv() {
            apply_delta(&mut app.state, delta);
        }

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
            Constraint::Length(5),
            Constraint::Length(2),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(&app.state))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(34), Constraint::Percentage(66)])
        .split(chunks[1]);
    render_form(frame, body[0], &app.state);
    render_report(frame, body[1], &app.state);

    let console = Paragraph::new(console_text(&app.state))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, chunks[2]);

    let footer = Paragraph::new(footer_text(&app.state))
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[3]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    let status = if state.is_loading() {
        "ANALYZING"
    } else if state.error_message().is_some() {
        "ERROR"
    } else if state.report.is_some() {
        "REPORT READY"
    } else {
        "IDLE"
    };
    let line1 = format!("  TalentVision | {status}");
    let line2 = "  Advanced analytics for player performance evaluation".to_string();
    format!("{line1}\n{line2}")
}

fn footer_text(state: &AppState) -> String {
    match state.focus {
        FormFocus::Attributes => {
            "Tab Next | j/k Move | Space Toggle | g Generate | PgUp/PgDn Report | ? Help | q Quit"
                .to_string()
        }
        FormFocus::Submit => {
            "Tab Next | Enter Generate | PgUp/PgDn Report | ? Help | q Quit".to_string()
        }
        _ => "Tab Next | j/k Move | Enter Choose | Bksp Clear | g Generate | ? Help | q Quit"
            .to_string(),
    }
}

fn render_form(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title("Player Selection Criteria")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let (lines, focus_line) = form_lines(state);
    let visible = inner.height as usize;
    let scroll = (focus_line + 2).saturating_sub(visible);
    let form = Paragraph::new(lines).scroll((scroll as u16, 0));
    frame.render_widget(form, inner);
}

// Returns the form lines plus the index of the line that must stay visible.
fn form_lines(state: &AppState) -> (Vec<Line<'static>>, usize) {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut focus_line = 0usize;

    push_choice_section(
        &mut lines,
        &mut focus_line,
        state,
        FormFocus::Role,
        "Player Role",
        "Select a role",
        &catalog::role_names().collect::<Vec<_>>(),
        state.selection.role.as_deref(),
        state.role_cursor,
    );

    if state.selection.role.is_some() {
        let focused = state.focus == FormFocus::Attributes;
        lines.push(section_header("Select Attributes", focused));
        if focused {
            focus_line = lines.len() + state.attribute_cursor;
        }
        for (idx, attr) in state.attribute_options().iter().enumerate() {
            let checked = state.selection.is_attribute_selected(attr);
            let at_cursor = focused && idx == state.attribute_cursor;
            let mark = if checked { "[x]" } else { "[ ]" };
            let mut style = if checked {
                Style::default().fg(Color::Blue)
            } else {
                Style::default()
            };
            if at_cursor {
                style = style.bg(Color::DarkGray);
            }
            let prefix = if at_cursor { "> " } else { "  " };
            lines.push(Line::from(Span::styled(
                format!("{prefix}{mark} {attr}"),
                style,
            )));
        }
        lines.push(Line::default());
    }

    push_choice_section(
        &mut lines,
        &mut focus_line,
        state,
        FormFocus::League,
        "League",
        "Select a league",
        &catalog::league_names().collect::<Vec<_>>(),
        state.selection.league.as_deref(),
        state.league_cursor,
    );

    if state.selection.league.is_some() {
        push_choice_section(
            &mut lines,
            &mut focus_line,
            state,
            FormFocus::Team,
            "Team",
            "Select a team",
            state.team_options(),
            state.selection.team.as_deref(),
            state.team_cursor,
        );
    }

    let submit_focused = state.focus == FormFocus::Submit;
    if submit_focused {
        focus_line = lines.len();
    }
    let (label, style) = if state.is_loading() {
        (
            "[ Analyzing... ]",
            Style::default().fg(Color::DarkGray),
        )
    } else if submit_focused {
        (
            "[ Generate Scouting Report ]",
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            "[ Generate Scouting Report ]",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )
    };
    lines.push(Line::from(Span::styled(label, style)));

    if let Some(msg) = state.error_message() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            msg.to_string(),
            Style::default().fg(Color::Red),
        )));
        if submit_focused {
            focus_line = lines.len() - 1;
        }
    }

    (lines, focus_line)
}

#[allow(clippy::too_many_arguments)]
fn push_choice_section(
    lines: &mut Vec<Line<'static>>,
    focus_line: &mut usize,
    state: &AppState,
    field: FormFocus,
    title: &str,
    placeholder: &str,
    options: &[&str],
    selected: Option<&str>,
    cursor: usize,
) {
    let focused = state.focus == field;
    lines.push(section_header(title, focused));

    if focused {
        *focus_line = lines.len() + cursor;
        for (idx, option) in options.iter().enumerate() {
            let chosen = selected == Some(*option);
            let at_cursor = idx == cursor;
            let prefix = if at_cursor { "> " } else { "  " };
            let mark = if chosen { "(•)" } else { "( )" };
            let style = if at_cursor {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(
                format!("{prefix}{mark} {option}"),
                style,
            )));
        }
    } else {
        match selected {
            Some(value) => lines.push(Line::from(format!("  {value}"))),
            None => lines.push(Line::from(Span::styled(
                format!("  {placeholder}"),
                Style::default().fg(Color::DarkGray),
            ))),
        }
    }
    lines.push(Line::default());
}

fn section_header(title: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    Line::from(Span::styled(title.to_string(), style))
}

fn render_report(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = match state.report_fetched_at {
        Some(at) => format!("Scouting Report | received {}", format_received_at(at)),
        None => "Scouting Report".to_string(),
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    let view = build_report_view(&state.report_criteria, state.report.as_ref());
    let paragraph = match view {
        ReportView::Empty { title, prompt } => {
            let lines = vec![
                Line::default(),
                Line::default(),
                Line::from(Span::styled(
                    title,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(prompt, Style::default().fg(Color::DarkGray))),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
        }
        ReportView::Report {
            criteria,
            roster,
            players,
        } => {
            let mut lines: Vec<Line<'static>> = Vec::new();
            lines.push(bold_line("Selected Criteria:"));
            let chips = criteria
                .into_iter()
                .flat_map(|chip| {
                    [
                        Span::styled(format!("[{}]", chip.label), chip_style(chip.kind)),
                        Span::raw(" "),
                    ]
                })
                .collect::<Vec<_>>();
            lines.push(Line::from(chips));
            lines.push(Line::default());

            lines.push(bold_line("Team Players:"));
            if roster.is_empty() {
                lines.push(Line::from(Span::styled(
                    "-",
                    Style::default().fg(Color::DarkGray),
                )));
            } else {
                lines.push(Line::from(Span::styled(
                    roster.join(" · "),
                    Style::default().fg(Color::LightBlue),
                )));
            }
            lines.push(Line::default());

            lines.push(bold_line("Similar Players Analysis"));
            for (idx, card) in players.iter().enumerate() {
                lines.extend(player_card_lines(idx, card));
            }

            let scroll = state.report_scroll.min(lines.len() as u16);
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((scroll, 0))
        }
    };
    frame.render_widget(paragraph.block(block), area);
}

fn player_card_lines(idx: usize, card: &PlayerCard) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("{}. {}", idx + 1, card.name),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("   {}", card.subtitle),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("   {}", card.distance),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    for row in card.stats.chunks(STAT_COLUMNS) {
        let mut spans = vec![Span::raw("   ")];
        for cell in row {
            let name = format!("{}: ", cell.name);
            let pad = STAT_CELL_WIDTH.saturating_sub(name.chars().count() + cell.value.chars().count());
            spans.push(Span::styled(name, Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(
                cell.value.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" ".repeat(pad.max(1))));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn chip_style(kind: ChipKind) -> Style {
    let color = match kind {
        ChipKind::Position => Color::Blue,
        ChipKind::League => Color::Green,
        ChipKind::Team => Color::Magenta,
        ChipKind::Attribute => Color::Yellow,
    };
    Style::default().fg(color)
}

fn bold_line(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn format_received_at(at: SystemTime) -> String {
    let local: DateTime<Local> = at.into();
    local.format("%H:%M:%S").to_string()
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No alerts yet".to_string();
    }
    let start = state.logs.len().saturating_sub(3);
    state
        .logs
        .iter()
        .skip(start)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "TalentVision - Help",
        "",
        "Form:",
        "  Tab / Shift-Tab   Next / previous field",
        "  j/k or ↑/↓        Move in list",
        "  Enter / Space     Choose role, league, team; toggle attribute",
        "  Backspace         Clear focused field",
        "  g                 Generate scouting report",
        "",
        "Report:",
        "  PgUp / PgDn       Scroll",
        "",
        "  ?                 Toggle help",
        "  q / Esc           Quit",
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
