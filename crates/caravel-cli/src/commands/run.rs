use std::io;
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
    layout::{Constraint, Direction as LayoutDirection, Layout},
    Terminal,
};

use caravel_core::{AppConfig, Direction};
use caravel_tui::{
    app::{App, Card},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event, Action},
    theme::Theme,
    widgets::{IndicatorsWidget, PopupWidget, StatusBarWidget, TrackWidget},
};

pub fn run(config: Arc<AppConfig>, card_count: usize) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Caravel")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state with the current terminal width as the viewport
    let size = terminal.size()?;
    let mut app = App::new(
        sample_cards(card_count),
        size.width,
        config.clone(),
        Theme::default(),
    );

    let event_handler = EventHandler::new(config.ui.tick_rate_ms);

    // Main loop
    loop {
        terminal.draw(|frame| {
            let size = frame.area();

            let mut constraints = vec![Constraint::Min(1)];
            if app.config.ui.show_indicators {
                constraints.push(Constraint::Length(1));
            }
            if app.config.ui.show_status_bar {
                constraints.push(Constraint::Length(1));
            }

            let chunks = Layout::default()
                .direction(LayoutDirection::Vertical)
                .constraints(constraints)
                .split(size);

            TrackWidget::render(frame, chunks[0], &app);

            let mut next = 1;
            if app.config.ui.show_indicators {
                IndicatorsWidget::render(frame, chunks[next], &app);
                // Remember where the dots were drawn so clicks can find them
                app.indicator_area = Some(chunks[next]);
                next += 1;
            } else {
                app.indicator_area = None;
            }
            if app.config.ui.show_status_bar {
                StatusBarWidget::render(frame, chunks[next], &app);
            }

            if app.show_help {
                PopupWidget::render_help(frame, &app.theme);
            }
        })?;

        // Handle events
        if let Some(event) = event_handler.next()? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app);
                    handle_action(&mut app, action);
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse);
                    handle_action(&mut app, action);
                }
                AppEvent::Resize(width, _) => {
                    app.on_resize(width);
                }
                AppEvent::Tick => {}
            }
        }

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
    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::Previous => app.advance(Direction::Backward),
        Action::Next => app.advance(Direction::Forward),
        Action::JumpToFirst => app.jump_to(0),
        Action::JumpToLast => app.jump_to(app.carousel.max_index() as isize),
        Action::JumpToDot(dot) => app.jump_to(dot as isize),
        Action::DragStart(column, row) => app.begin_drag(column, row),
        Action::DragEnd(column, row) => app.end_drag(column, row),
        Action::ToggleHelp => app.show_help = !app.show_help,
        Action::None => {}
    }
}

/// Demo cards for the track, cycled when more are requested than exist
fn sample_cards(count: usize) -> Vec<Card> {
    const REVIEWS: [(&str, u8, &str); 7] = [
        (
            "Mina P.",
            5,
            "Switched my whole family's plan here. The staff walked us through every option without any pressure to upsell.",
        ),
        (
            "Jae K.",
            4,
            "Quick trade-in and a fair price for my old phone. Waited a bit at lunch hour.",
        ),
        (
            "Sofia R.",
            5,
            "Screen replacement done in under an hour while I had coffee next door.",
        ),
        (
            "Daniel O.",
            4,
            "Good selection of accessories. The case I wanted was out of stock but they ordered it in for me within two days.",
        ),
        (
            "Hana L.",
            5,
            "They set up my parents' new phones and moved every photo over. Patient and kind.",
        ),
        (
            "Marco T.",
            3,
            "Solid service, though parking nearby is tricky on weekends.",
        ),
        (
            "Iris W.",
            5,
            "Best network advice I've gotten. Saved money by dropping a plan I didn't need.",
        ),
    ];

    (0..count)
        .map(|i| {
            let (author, rating, body) = REVIEWS[i % REVIEWS.len()];
            Card {
                author: author.to_string(),
                rating,
                body: body.to_string(),
            }
        })
        .collect()
}
