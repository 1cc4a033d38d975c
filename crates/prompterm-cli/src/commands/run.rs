use std::io::{self, Stdout};
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::info;

use prompterm_core::{AppConfig, Script};
use prompterm_tui::{
    app::{App, Mode, TRANSPORT_ROWS},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event, Action},
    keymap::Keymap,
    widgets::{HelpWidget, PrompterWidget, TransportWidget},
};

pub fn run(config: Arc<AppConfig>, script: Script) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Prompterm")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config.clone(), script);

    // Create event handler with animation FPS support
    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);

    // Track if we need high frame rate for smooth scrolling
    // This is checked at the END of each iteration to determine NEXT iteration's poll rate
    let mut needs_fast_update = false;

    // Main loop
    loop {
        // Re-measure layout, publish content height, run one playback tick
        let size = terminal.size()?;
        app.prepare_frame(size.width, size.height);

        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            // Main layout: prompter + transport bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(TRANSPORT_ROWS)])
                .split(area);

            PrompterWidget::render(frame, main_layout[0], &app);
            TransportWidget::render(frame, main_layout[1], &app);

            if app.mode == Mode::Help {
                HelpWidget::render(frame, &app);
            }
        })?;

        // Handle events (use faster poll rate while scrolling)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app, &keymap);
                    handle_action(&mut app, action);
                }
                AppEvent::Mouse(mouse) => {
                    if let Some(delta) = handle_mouse_event(mouse, config.ui.wheel_step_rows) {
                        app.scroll_by(delta);
                    }
                }
                AppEvent::Resize(_, _) => {
                    // Next prepare_frame re-measures at the new size
                }
                AppEvent::Tick => {}
            }
        }

        // An editor session needs the terminal to itself
        if app.pending_edit {
            app.pending_edit = false;
            edit_script(&mut app, &mut terminal)?;
        }

        // Update fast update flag for next iteration
        needs_fast_update =
            app.session.engine().playing() || app.session.input().pending() != 0.0;

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn handle_action(app: &mut App, action: Action) {
    // Clear pending key on any action except the 'g' prefix itself
    if action != Action::PendingG {
        app.clear_pending_key();
    }

    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::TogglePlay => app.toggle_play(),
        Action::ScrollDown => app.scroll_by(1.0),
        Action::ScrollUp => app.scroll_by(-1.0),
        Action::PageDown => {
            let rows = app.half_page_rows();
            app.scroll_by(rows);
        }
        Action::PageUp => {
            let rows = app.half_page_rows();
            app.scroll_by(-rows);
        }
        Action::JumpToTop => app.seek(0.0),
        Action::JumpToBottom => app.seek(1.0),
        Action::PendingG => {
            app.pending_key = Some('g');
        }
        Action::Seek(progress) => app.seek(progress),
        Action::SpeedUp => app.adjust_speed(1.0),
        Action::SpeedDown => app.adjust_speed(-1.0),
        Action::FontSizeUp => app.adjust_font_size(1.0),
        Action::FontSizeDown => app.adjust_font_size(-1.0),
        Action::Edit => {
            app.pending_edit = true;
        }
        Action::Reload => app.reload_script(),
        Action::Help => {
            app.mode = Mode::Help;
        }
        Action::ExitMode => {
            app.mode = Mode::Normal;
        }
        Action::None => {}
    }
}

/// Suspend the TUI, open the script in $EDITOR, then reload it.
///
/// The frame scheduler is stopped across the editor session so the blocked
/// loop does not surface as one giant frame delta on resume.
fn edit_script(app: &mut App, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    let Some(path) = app.script.source().map(|p| p.to_path_buf()) else {
        app.set_status("No script file to edit (running the built-in sample)");
        return Ok(());
    };

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    info!(%editor, path = %path.display(), "opening external editor");

    app.editing = true;
    app.session.scheduler_mut().stop();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;

    let status = std::process::Command::new(&editor).arg(&path).status();

    enable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        EnterAlternateScreen,
        EnableMouseCapture
    )?;
    terminal.clear()?;

    app.session.scheduler_mut().start();
    app.editing = false;

    match status {
        Ok(exit) if exit.success() => app.reload_script(),
        Ok(exit) => app.set_status(format!("Editor exited with {}", exit)),
        Err(e) => app.set_status(format!("Failed to launch {}: {}", editor, e)),
    }

    Ok(())
}
