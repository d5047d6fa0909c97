//! Contact form TUI - actor-based EmailJS client
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - form state machine processing events
//! - Network Layer (Tokio) - async delivery to EmailJS

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use contactform::constants::{
    FORM_SUBTITLE, FORM_TITLE, LOG_FILE_NAME, SUBMIT_LABEL, SUBMIT_LABEL_BUSY,
};
use contactform::messages::ui_events::key_to_ui_event;
use contactform::messages::{Focus, InputMode, NetworkCommand, NetworkResponse, RenderState, UiEvent};
use contactform::ui::{
    centered_rect, cursor_column, field_border_style, render_field, status_color, submit_style,
    wrapped_cursor,
};
use contactform::{AppActor, EmailJsClient, EmailJsConfig, Field, NetworkActor};

/// Width of the form card in columns
const CARD_WIDTH: u16 = 64;

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Log to file; the terminal belongs to the UI
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE_NAME);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("contactform=info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    // Resolve configuration before touching the terminal so errors print normally
    let config = EmailJsConfig::load().context("loading EmailJS configuration")?;
    tracing::info!(?config, "Configuration loaded");
    let sender = Arc::new(EmailJsClient::new(config));

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(sender, net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        terminal.draw(|f| draw_ui(f, &current_state))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.focus,
                    current_state.input_mode,
                    current_state.show_help,
                ) {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Card
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let card = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(CARD_WIDTH.min(outer[0].width)),
            Constraint::Min(0),
        ])
        .split(outer[0])[1];

    draw_card(f, state, card);
    draw_status_bar(f, state, outer[1]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_card(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Full name
            Constraint::Length(1), //   error
            Constraint::Length(3), // Email
            Constraint::Length(1), //   error
            Constraint::Length(6), // Message
            Constraint::Length(1), //   error
            Constraint::Length(3), // Submit
            Constraint::Length(3), // Banner
            Constraint::Min(0),
        ])
        .split(area);

    draw_header(f, chunks[0]);
    draw_field(f, state, Field::FullName, chunks[1], chunks[2]);
    draw_field(f, state, Field::Email, chunks[3], chunks[4]);
    draw_field(f, state, Field::Message, chunks[5], chunks[6]);
    draw_submit(f, state, chunks[7]);
    draw_banner(f, state, chunks[8]);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(FORM_TITLE, Style::default().fg(Color::White).bold())),
        Line::from(Span::styled(FORM_SUBTITLE, Style::default().fg(Color::Gray))),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_field(f: &mut Frame, state: &RenderState, field: Field, area: Rect, error_area: Rect) {
    let is_focused = state.focus == Focus::from(field);
    let is_editing = is_focused && state.input_mode == InputMode::Editing;
    let error = state.errors.get(field);
    let content = state.payload.get(field);

    let border_style = field_border_style(is_focused, is_editing, error.is_some());
    let placeholder = if is_editing { "" } else { field.placeholder() };

    let inner_width = area.width.saturating_sub(2).max(1);
    let inner_height = area.height.saturating_sub(2).max(1);

    // Message wraps and scrolls vertically; single-line fields scroll sideways
    let (row, col, scroll) = if field.is_multiline() {
        let (row, col) = wrapped_cursor(content, state.cursor_position, inner_width);
        let v = if is_editing { row.saturating_sub(inner_height - 1) } else { 0 };
        (row, col, (v, 0))
    } else {
        let col = cursor_column(content, state.cursor_position);
        let h = if is_editing { col.saturating_sub(inner_width - 1) } else { 0 };
        (0, col, (0, h))
    };

    let wrap_width = field.is_multiline().then_some(inner_width);
    let input = render_field(content, field.label(), placeholder, border_style, wrap_width)
        .scroll(scroll);
    f.render_widget(input, area);

    if let Some(err) = error {
        let msg = Paragraph::new(Span::styled(
            format!(" {}", err.message()),
            Style::default().fg(Color::Red),
        ));
        f.render_widget(msg, error_area);
    }

    if is_editing {
        let max_x = area.x + area.width.saturating_sub(2);
        let max_y = area.y + area.height.saturating_sub(2);
        let cursor_x = (area.x + 1 + col - scroll.1).min(max_x);
        let cursor_y = (area.y + 1 + row - scroll.0).min(max_y);
        f.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

fn draw_submit(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.focus == Focus::Submit;
    let label = if state.is_submitting { SUBMIT_LABEL_BUSY } else { SUBMIT_LABEL };
    let style = submit_style(is_focused, state.is_submitting);

    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().padding(Padding::vertical(1)));
    f.render_widget(button, area);
}

fn draw_banner(f: &mut Frame, state: &RenderState, area: Rect) {
    let Some(message) = state.status.message() else {
        return;
    };
    let color = status_color(state.status);

    let time_text = state
        .status_changed_at
        .map(|t| format!(" {} ", t.format("%H:%M:%S")))
        .unwrap_or_default();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title_bottom(Line::from(time_text).right_aligned());

    let banner = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).bold())
        .block(block);
    f.render_widget(banner, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.is_submitting {
        String::from(" Sending... ")
    } else if state.input_mode == InputMode::Editing {
        String::from(" ESC:stop editing | arrows:move | Tab:next field | Ctrl+S:send ")
    } else {
        let last = state
            .last_send_ms
            .map(|ms| format!(" | last send {}ms", ms))
            .unwrap_or_default();
        format!(" Tab:field | e:edit | s:send | ?:help | q:quit{} ", last)
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 CONTACT FORM - Keyboard Shortcuts

 NAVIGATION
   Tab / Shift+Tab    Next / previous field
   ↑ / ↓              Next / previous field

 EDITING
   e / Enter          Edit focused field
   Esc                Stop editing
   Enter              New line (message) / stop editing
   Ctrl+S             Send while editing

 SENDING
   s                  Send message
   Enter              Send (on the button)

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}
