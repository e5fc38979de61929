mod animation;
mod app;
mod clock;
mod config;
mod data;
mod gesture;
mod icons;
mod input;
mod logging;
mod state;
mod theme;
mod timers;
mod views;

fn main() -> iced::Result {
    let path = config::config_file_path();
    let (config, load_error) = match config::load(&path) {
        Ok(config) => (config, None),
        Err(e) => (config::Config::default(), Some(e)),
    };

    logging::init(config.debug);
    if let Some(e) = load_error {
        tracing::warn!(error = %e, "falling back to default config");
    } else {
        tracing::debug!(path = %path.display(), "config loaded");
    }

    app::run(config)
}
