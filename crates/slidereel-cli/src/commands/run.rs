use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{info, warn};

use slidereel_core::{AppConfig, AutoAdvance, Trigger};
use slidereel_tui::{
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    ui, App, Theme,
};

type Backend = CrosstermBackend<io::Stdout>;

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    // Auto-advance timer feeds ticks into the main loop
    let (trigger_tx, mut trigger_rx) = mpsc::unbounded_channel::<Trigger>();
    let interval = config.slider.slider_interval();
    let (autoplay, timer) = AutoAdvance::new(interval, trigger_tx).spawn();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Slidereel"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.clone(), Theme::default());
    if interval.is_some() {
        app.set_autoplay(autoplay.clone());
    }

    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);

    info!("Starting carousel with {} slides", config.slides.len());
    let result = main_loop(&mut terminal, &mut app, &event_handler, &mut trigger_rx);

    autoplay.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = timer.await {
        warn!("Auto-advance task failed: {}", e);
    }

    result
}

fn main_loop(
    terminal: &mut Terminal<Backend>,
    app: &mut App,
    event_handler: &EventHandler,
    trigger_rx: &mut mpsc::UnboundedReceiver<Trigger>,
) -> Result<()> {
    // Checked at the end of each iteration to pick the next poll timeout
    let mut needs_fast_update = false;

    loop {
        while let Ok(trigger) = trigger_rx.try_recv() {
            app.handle_trigger(trigger);
        }

        // Join finished transitions before drawing so the strip never
        // flashes back to its old rest layout
        app.update();

        terminal.draw(|frame| ui::draw(frame, app))?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app.keymap);
                    app.handle_action(action);
                }
                AppEvent::Mouse(mouse) => {
                    let action =
                        handle_mouse_event(mouse, &app.areas, app.carousel.item_count());
                    app.handle_action(action);
                }
                // The next draw re-measures the mask
                AppEvent::Resize(_, _) => {}
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
