use crate::config::Config;
use crate::tui::theme::Theme;
use crate::tui::widgets::TextInput;
use crate::tutor::{History, HistoryEntry, PatternAssistant, SubmitOutcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_TICK: Duration = Duration::from_millis(100);
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// What the status area currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Busy { frame: usize },
    Warning(String),
    Error(String),
    Generated(HistoryEntry),
}

/// Requests the event loop has to act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Generate,
    Quit,
}

/// Everything the screen shows apart from history
pub struct AppState {
    pub input: TextInput,
    pub status: Status,
    pub history_open: bool,
    pub result_scroll: u16,
    pub provider_label: String,
    pub input_height: u16,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            input: TextInput::new(),
            status: Status::Idle,
            history_open: false,
            result_scroll: 0,
            provider_label: config.llm.provider_label().to_string(),
            input_height: config.ui.input_height.clamp(1, 20),
        }
    }

    /// Apply a key press; returns a command when the loop has work to do
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return Some(Command::Quit),
            KeyCode::Char('c') if ctrl => return Some(Command::Quit),
            KeyCode::Char('g') if ctrl => return Some(Command::Generate),
            KeyCode::F(5) => return Some(Command::Generate),
            KeyCode::F(2) => self.history_open = !self.history_open,
            KeyCode::Char('l') if ctrl => self.input.clear(),
            KeyCode::PageUp => self.result_scroll = self.result_scroll.saturating_sub(5),
            KeyCode::PageDown => self.result_scroll = self.result_scroll.saturating_add(5),
            KeyCode::Enter => self.input.insert_newline(),
            KeyCode::Backspace => self.input.delete_char(),
            KeyCode::Delete => self.input.delete_forward(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Char(c) if !ctrl => self.input.insert_char(c),
            _ => {}
        }
        None
    }

    pub fn start_busy(&mut self) {
        self.status = Status::Busy { frame: 0 };
    }

    pub fn tick_spinner(&mut self) {
        if let Status::Busy { frame } = &mut self.status {
            *frame = (*frame + 1) % SPINNER_FRAMES.len();
        }
    }

    pub fn apply_outcome(&mut self, outcome: SubmitOutcome) {
        self.result_scroll = 0;
        self.status = match outcome {
            SubmitOutcome::Warning(message) => Status::Warning(message),
            SubmitOutcome::Generated(entry) => Status::Generated(entry),
            SubmitOutcome::Failed(message) => Status::Error(message),
        };
    }
}

/// Run the interactive session until the user quits
pub async fn run_app(config: &Config, assistant: &mut PatternAssistant) -> Result<()> {
    let theme = Theme::from_name(&config.ui.theme);
    let mut state = AppState::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app_loop(&mut terminal, &mut state, assistant, &theme).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    assistant: &mut PatternAssistant,
    theme: &Theme,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw_app(f, state, assistant.history(), theme))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match state.handle_key(key) {
            Some(Command::Quit) => return Ok(()),
            Some(Command::Generate) => generate(terminal, state, assistant, theme).await?,
            None => {}
        }
    }
}

/// Submit the current input, animating the spinner until the reply lands
async fn generate<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    assistant: &mut PatternAssistant,
    theme: &Theme,
) -> Result<()> {
    let description = state.input.value().to_string();

    if let Err(e) = PatternAssistant::validate(&description) {
        state.apply_outcome(SubmitOutcome::Warning(e.to_string()));
        return Ok(());
    }

    state.start_busy();
    let result = {
        let fut = assistant.generate(&description);
        tokio::pin!(fut);
        let mut tick = tokio::time::interval(SPINNER_TICK);

        loop {
            terminal.draw(|f| draw_app(f, state, assistant.history(), theme))?;
            tokio::select! {
                r = &mut fut => break r,
                _ = tick.tick() => state.tick_spinner(),
            }
        }
    };

    let outcome = assistant.complete(&description, result);
    state.apply_outcome(outcome);
    Ok(())
}

pub fn draw_app(f: &mut Frame, state: &AppState, history: &History, theme: &Theme) {
    let history_height = if history.is_empty() {
        Constraint::Length(0)
    } else if state.history_open {
        Constraint::Percentage(40)
    } else {
        Constraint::Length(1)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),                        // Header
            Constraint::Length(state.input_height + 2),   // Description input
            Constraint::Length(1),                        // Generate button
            Constraint::Min(4),                           // Status / result
            history_height,                               // Past patterns
            Constraint::Length(1),                        // Help
        ])
        .split(f.area());

    let header = Paragraph::new(vec![
        Line::from(Span::styled("🔍 Regex Generator & Explainer", theme.title)),
        Line::from(Span::styled(
            "Describe the pattern and get a regex with explanation",
            theme.caption,
        )),
    ])
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, chunks[0]);

    draw_input(f, state, theme, chunks[1]);

    let button = Paragraph::new(Line::from(vec![
        Span::styled(" Generate Regex ", theme.button),
        Span::styled("  (Ctrl+G / F5)", theme.help),
    ]));
    f.render_widget(button, chunks[2]);

    let status = Paragraph::new(status_lines(&state.status, &state.provider_label, theme))
        .wrap(Wrap { trim: false })
        .scroll((state.result_scroll, 0));
    f.render_widget(status, chunks[3]);

    if !history.is_empty() {
        draw_history(f, state.history_open, history, theme, chunks[4]);
    }

    let help_text = if matches!(state.status, Status::Busy { .. }) {
        "Waiting for the model..."
    } else {
        "Ctrl+G/F5: generate | F2: past patterns | PgUp/PgDn: scroll | Ctrl+L: clear | Esc: quit"
    };
    f.render_widget(Paragraph::new(help_text).style(theme.help), chunks[5]);
}

fn draw_input(f: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let visible = area.height.saturating_sub(2).max(1) as usize;
    let (lines, (row, col)) = state.input.wrapped(inner_width);
    let scroll = row.saturating_sub(visible - 1);

    let text: Vec<Line> = lines.into_iter().map(Line::from).collect();
    let input = Paragraph::new(text)
        .style(theme.normal)
        .scroll((scroll as u16, 0))
        .block(
            Block::default()
                .title("📝 Describe the pattern you want to match")
                .borders(Borders::ALL),
        );
    f.render_widget(input, area);

    if !matches!(state.status, Status::Busy { .. }) {
        let x = area.x + 1 + col as u16;
        let y = area.y + 1 + (row - scroll) as u16;
        if x < area.right().saturating_sub(1) && y < area.bottom().saturating_sub(1) {
            f.set_cursor_position((x, y));
        }
    }
}

fn draw_history(f: &mut Frame, open: bool, history: &History, theme: &Theme, area: Rect) {
    if !open {
        let collapsed = Paragraph::new(Line::from(vec![
            Span::styled("▶ View Past Patterns", theme.heading),
            Span::styled("  (F2)", theme.help),
        ]));
        f.render_widget(collapsed, area);
        return;
    }

    let panel = Paragraph::new(history_lines(history, theme))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title("▼ View Past Patterns")
                .borders(Borders::ALL),
        );
    f.render_widget(panel, area);
}

/// Lines for a literal code block, one per line of `code`
fn code_lines<'a>(code: &'a str, theme: &Theme) -> Vec<Line<'a>> {
    code.split('\n')
        .map(|line| Line::from(Span::styled(format!("  {}", line), theme.code)))
        .collect()
}

fn text_lines(text: &str) -> Vec<Line<'_>> {
    text.split('\n').map(Line::raw).collect()
}

pub fn status_lines<'a>(status: &'a Status, provider_label: &str, theme: &Theme) -> Vec<Line<'a>> {
    match status {
        Status::Idle => Vec::new(),
        Status::Busy { frame } => vec![Line::from(Span::styled(
            format!(
                "{} Thinking with {}...",
                SPINNER_FRAMES[*frame % SPINNER_FRAMES.len()],
                provider_label
            ),
            theme.spinner,
        ))],
        Status::Warning(message) => vec![Line::from(Span::styled(
            format!("⚠ {}", message),
            theme.warning,
        ))],
        Status::Error(message) => message
            .split('\n')
            .map(|line| Line::from(Span::styled(line, theme.error)))
            .collect(),
        Status::Generated(entry) => {
            let mut lines = vec![Line::from(Span::styled("Generated Regex", theme.heading))];
            lines.extend(code_lines(&entry.regex, theme));
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled("Explanation", theme.heading)));
            lines.extend(text_lines(&entry.explanation));
            lines
        }
    }
}

/// The expanded history panel body: recent entries, newest first
pub fn history_lines<'a>(history: &'a History, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    for (seq, entry) in history.recent() {
        if seq > 1 {
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(vec![
            Span::styled(format!("{}. ", seq), theme.heading),
            Span::styled(entry.description.as_str(), theme.description),
        ]));
        lines.extend(code_lines(&entry.regex, theme));
        lines.extend(text_lines(&entry.explanation));
    }
    lines
}
