use anyhow::Result;
use cd_calculator::{
    app::{App, Effect},
    config::{load_settings_with_fallback, Settings},
    input::handle_key,
    logging::init_logging,
    terminal,
    ui::ui,
};
use crossterm::event::{self, Event};
use log::info;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

fn main() -> Result<()> {
    let settings = load_settings_with_fallback()?;
    init_logging(&settings)?;
    info!("starting {}", settings.title);

    let guard = terminal::enter()?;
    let res = Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(anyhow::Error::from)
        .and_then(|mut terminal| run_app(&mut terminal, App::default(), &settings));
    drop(guard);

    if let Err(err) = res {
        println!("{:?}", err)
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App, settings: &Settings) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, &app, settings))?;

        if let Event::Key(key) = event::read()? {
            let Some(event) = handle_key(&mut app, key) else {
                continue;
            };
            if let Some(Effect::Shutdown) = app.dispatch(event) {
                info!("shutting down");
                return Ok(());
            }
        }
    }
}
