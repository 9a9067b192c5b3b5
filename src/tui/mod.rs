//! Interactive terminal demo of the split keyboard.
//!
//! Draws the two panels at the terminal edges and maps mouse
//! press/drag/release onto the engine's touch phases, so the gesture
//! machine and layer transitions can be exercised without a touch
//! display. Committed output accumulates in a text buffer between the
//! panels.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::config::KeyboardConfig;
use crate::models::PanelSide;
use crate::services::{OutputEvent, SplitKeyboard, TouchEvent, TouchPhase};

/// Pixels represented by one terminal cell horizontally.
///
/// The engine lays keys out in pixels with fixed margin/padding
/// constants; scaling cells up keeps those constants meaningful at
/// terminal resolution.
const CELL_PX_X: f32 = 12.0;

/// Pixels represented by one terminal cell vertically.
const CELL_PX_Y: f32 = 24.0;

/// Demo application state.
pub struct AppState {
    /// The keyboard engine under demonstration
    pub engine: SplitKeyboard,
    /// Persisted settings, applied to panel sizing
    pub config: KeyboardConfig,
    /// Text accumulated from committed output events
    pub text: String,
    /// Set when the user asks to quit
    pub should_quit: bool,
    panel_areas: Option<[Rect; 2]>,
    active_panel: Option<PanelSide>,
}

impl AppState {
    /// Creates demo state around an engine and settings.
    #[must_use]
    pub fn new(engine: SplitKeyboard, config: KeyboardConfig) -> Self {
        Self {
            engine,
            config,
            text: String::new(),
            should_quit: false,
            panel_areas: None,
            active_panel: None,
        }
    }

    fn apply_output(&mut self, output: Option<OutputEvent>) {
        match output {
            Some(OutputEvent::CommitText(committed)) => self.text.push_str(&committed),
            Some(OutputEvent::DeleteBackward) => {
                self.text.pop();
            }
            Some(OutputEvent::SendEnter) => self.text.push('\n'),
            None => {}
        }
    }
}

/// Initialize terminal for the demo.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state.
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop.
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => handle_key_event(state, key),
                Event::Mouse(mouse) => handle_mouse_event(state, mouse),
                Event::Resize(..) => {
                    // Panel areas are recomputed on the next draw
                    state.panel_areas = None;
                }
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key_event(state: &mut AppState, key: KeyEvent) {
    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        state.should_quit = true;
    }
}

fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) {
    let phase = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => TouchPhase::Down,
        MouseEventKind::Drag(MouseButton::Left) => TouchPhase::Move,
        MouseEventKind::Up(MouseButton::Left) => TouchPhase::Up,
        _ => return,
    };

    let side = match phase {
        // A gesture starts on the panel under the cursor
        TouchPhase::Down => match panel_at(state, mouse.column, mouse.row) {
            Some(side) => {
                state.active_panel = Some(side);
                side
            }
            None => return,
        },
        // Later phases follow the panel that owns the gesture, even when
        // the cursor has left its area (the engine resolves the miss)
        TouchPhase::Move | TouchPhase::Up => match state.active_panel {
            Some(side) => side,
            None => return,
        },
    };

    let Some(areas) = state.panel_areas else {
        return;
    };
    let area = areas[usize::from(side == PanelSide::Right)];
    let x = (f32::from(mouse.column) - f32::from(area.x) + 0.5) * CELL_PX_X;
    let y = (f32::from(mouse.row) - f32::from(area.y) + 0.5) * CELL_PX_Y;

    let response = state.engine.handle_touch(side, TouchEvent::new(phase, x, y));
    state.apply_output(response.output);

    if phase == TouchPhase::Up {
        state.active_panel = None;
    }
}

fn panel_at(state: &AppState, column: u16, row: u16) -> Option<PanelSide> {
    let areas = state.panel_areas?;
    if contains_cell(areas[0], column, row) {
        Some(PanelSide::Left)
    } else if contains_cell(areas[1], column, row) {
        Some(PanelSide::Right)
    } else {
        None
    }
}

fn contains_cell(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height
}

/// Render the UI from current state.
fn render(f: &mut Frame, state: &mut AppState) {
    let size = f.area();
    if size.height < 4 || size.width < 20 {
        return;
    }

    let title_height = 1;
    let help_height = 1;
    let body = Rect::new(
        size.x,
        size.y + title_height,
        size.width,
        size.height - title_height - help_height,
    );

    let panel_width = ((f32::from(size.width)
        * (state.config.clamped_width_percent() / 100.0))
        .round() as u16)
        .max(8)
        .min(size.width / 3);

    let left_area = Rect::new(body.x, body.y, panel_width, body.height);
    let right_area = Rect::new(
        body.x + body.width - panel_width,
        body.y,
        panel_width,
        body.height,
    );

    // Resize the engine when the panel areas change
    if state.panel_areas != Some([left_area, right_area]) {
        state.panel_areas = Some([left_area, right_area]);
        for (side, area) in PanelSide::ALL.into_iter().zip([left_area, right_area]) {
            state.engine.resize_panel(
                side,
                f32::from(area.width) * CELL_PX_X,
                f32::from(area.height) * CELL_PX_Y,
            );
        }
    }

    render_title(f, Rect::new(size.x, size.y, size.width, title_height), state);

    for (side, area) in PanelSide::ALL.into_iter().zip([left_area, right_area]) {
        render_panel(f, area, state, side);
    }

    let text_area = Rect::new(
        body.x + panel_width + 1,
        body.y,
        body.width.saturating_sub(2 * panel_width + 2),
        body.height,
    );
    render_text_buffer(f, text_area, state);

    let help = Paragraph::new(" mouse: press/drag/release keys · q or Esc: quit")
        .style(Style::default().add_modifier(Modifier::DIM));
    f.render_widget(
        help,
        Rect::new(
            size.x,
            size.y + size.height - help_height,
            size.width,
            help_height,
        ),
    );
}

fn render_title(f: &mut Frame, area: Rect, state: &AppState) {
    let shift = if state.engine.is_shifted() { " ⇧" } else { "" };
    let title = format!(
        " {} — layer: {}{}",
        crate::constants::APP_NAME,
        state.engine.current_layer_name(),
        shift
    );
    f.render_widget(
        Paragraph::new(title).style(Style::default().add_modifier(Modifier::BOLD)),
        area,
    );
}

fn render_panel(f: &mut Frame, area: Rect, state: &AppState, side: PanelSide) {
    let pressed_label = state
        .engine
        .pressed_key(side)
        .map(|kb| kb.key.label.clone());

    for kb in state.engine.panel_bounds(side) {
        let cell_x = area.x + (kb.rect.x / CELL_PX_X).round() as u16;
        let cell_y = area.y + (kb.rect.y / CELL_PX_Y).round() as u16;
        let cell_w = ((kb.rect.width / CELL_PX_X).round() as u16).max(3);
        let cell_h = ((kb.rect.height / CELL_PX_Y).round() as u16).max(1);

        let key_area = Rect::new(cell_x, cell_y, cell_w, cell_h)
            .intersection(area);
        if key_area.width == 0 || key_area.height == 0 {
            continue;
        }

        let style = if pressed_label.as_deref() == Some(kb.key.label.as_str()) {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };

        let block = if key_area.height >= 3 {
            Block::default().borders(Borders::ALL)
        } else {
            Block::default()
        };
        let key = Paragraph::new(Line::from(kb.key.label.clone()).centered())
            .block(block)
            .style(style);
        f.render_widget(key, key_area);
    }
}

fn render_text_buffer(f: &mut Frame, area: Rect, state: &AppState) {
    if area.width == 0 {
        return;
    }
    let buffer = Paragraph::new(state.text.as_str())
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" output "));
    f.render_widget(buffer, area);
}

/// Runs the demo around a complete session: reset on entry, final state
/// handed back for persistence on exit.
pub fn run_demo(config: KeyboardConfig) -> Result<KeyboardConfig> {
    let mut engine = SplitKeyboard::with_builtin_layers();
    engine.switch_to_layer(&config.current_layer);
    engine.begin_session();

    let mut state = AppState::new(engine, config);

    let mut terminal = setup_terminal()?;
    let run_result = run_tui(&mut state, &mut terminal);
    let restore_result = restore_terminal(terminal);
    run_result?;
    restore_result?;

    let final_state = state.engine.end_session();
    let mut config = state.config;
    config.current_layer.clone_from(&final_state.current_layer);
    Ok(config)
}
