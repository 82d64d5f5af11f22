mod tui;
mod ui;

use std::fs::File;
use std::time::Duration;

use color_eyre::eyre::{eyre, Result, WrapErr};
use crossterm::event::{self, Event};
use ecolearn::app::App;
use ecolearn::config::Config;

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::from_env().map_err(|err| eyre!("{err:#}"))?;
    init_logging(&config)?;
    let mut app = App::new(&config).map_err(|err| eyre!("{err:#}"))?;

    let mut terminal = tui::init()?;

    let res = run_app(&mut terminal, &mut app);

    tui::restore()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

fn init_logging(config: &Config) -> Result<()> {
    let file = File::create(&config.log_file)
        .wrap_err_with(|| format!("cannot open log file {}", config.log_file.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run_app(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    while !app.exit {
        terminal.draw(|frame| ui::render(app, frame))?;

        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key_event(key);
            }
        }

        app.tick();
    }
    Ok(())
}
