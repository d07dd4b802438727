mod app;
mod error;
mod input;
mod model;
mod store;
mod ui;

use std::io;
use std::panic;

use crossterm::terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::App;

fn main() {
    // Diagnostics go to stderr behind RUST_LOG so they never mix with the
    // interactive prompts on stdout. Quiet by default.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskman=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Panic hook: drop raw mode before the default hook prints, so a panic
    // inside input reading does not leave the shell in raw mode.
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = terminal::disable_raw_mode();
        original_hook(info);
    }));

    println!("Welcome to Simple Task Manager!");

    let mut app = App::new();
    app.run();
}
