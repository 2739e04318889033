//! Heatlens - a terminal-based analytics viewer with a heat overlay.

mod app;
mod chart;
mod data;
mod error;
mod heat;
mod ui;

use anyhow::Result;
use app::App;
use chart::SeriesSlot;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "heatlens")]
#[command(about = "A terminal-based analytics viewer with a scroll-position heat overlay", long_about = None)]
#[command(version)]
struct Args {
    /// Number of samples in the synthetic engagement profile
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    samples: u32,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Heatlens");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let mut app = App::new(args.samples as usize);
    let res = run_app(&mut terminal, &mut app);

    // Teardown before the surface's host goes away; no paint may land
    // on a restored terminal.
    app.teardown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Heatlens exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // The first frame with a measurable content region is the
        // content-ready signal; the controller absorbs repeats.
        app.notify_content_ready();

        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Resize(_, _) => {
                    app.handle_resize();
                }
                Event::Key(key) => match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                    // Heat overlay
                    (KeyModifiers::NONE, KeyCode::Char('h')) => {
                        app.toggle_heat();
                    }
                    (KeyModifiers::NONE, KeyCode::Char('+'))
                    | (KeyModifiers::NONE, KeyCode::Char('=')) => {
                        app.opacity_up();
                    }
                    (KeyModifiers::NONE, KeyCode::Char('-'))
                    | (KeyModifiers::NONE, KeyCode::Char('_')) => {
                        app.opacity_down();
                    }

                    // Chart
                    (KeyModifiers::NONE, KeyCode::Tab) => {
                        app.cycle_dataset();
                    }
                    (KeyModifiers::NONE, KeyCode::Char('1')) => {
                        app.cycle_series_color(SeriesSlot::PvPress);
                    }
                    (KeyModifiers::NONE, KeyCode::Char('2')) => {
                        app.cycle_series_color(SeriesSlot::UuPress);
                    }
                    (KeyModifiers::NONE, KeyCode::Char('3')) => {
                        app.cycle_series_color(SeriesSlot::PvStory);
                    }
                    (KeyModifiers::NONE, KeyCode::Char('4')) => {
                        app.cycle_series_color(SeriesSlot::UuStory);
                    }

                    // Clipboard
                    (KeyModifiers::NONE, KeyCode::Char('c')) => {
                        app.copy_color_set();
                    }

                    // Theme
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                        app.cycle_theme();
                    }

                    _ => {}
                },
                _ => {}
            }
        }
    }
}
