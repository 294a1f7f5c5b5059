use std::time::Instant;

use anyhow::Context;
use painel_core::canvas::Canvas;
use painel_rpg::{AccountBook, RpgConfig, RpgGame, UserStore};
use painel_terminal::TerminalBackend;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "painel_rpg=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        tracing::error!(error = ?e, "Character creator exited with an error");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = RpgConfig::from_env().context("invalid configuration")?;
    tracing::info!(users_file = %config.users_file.display(), "Starting character creator");

    let accounts = AccountBook::open(UserStore::new(&config.users_file));
    let mut game = RpgGame::new(accounts, config.window);

    // Restored on drop, so an error below still leaves a usable terminal.
    let mut backend = TerminalBackend::enter(config.window).context("failed to enter terminal")?;
    let budget = config.frame_budget();
    let mut canvas = Canvas::new();
    let mut last = Instant::now();

    let result = loop {
        let events = match backend.poll_events(budget) {
            Ok(events) => events,
            Err(e) => break Err(e).context("failed to read terminal input"),
        };
        if !game.handle_events(&events) {
            break Ok(());
        }

        let now = Instant::now();
        game.update(now.duration_since(last).as_secs_f32());
        last = now;

        canvas.clear(painel_core::theme::Theme::DARK.background);
        game.draw(&mut canvas);
        if let Err(e) = backend.present(&canvas) {
            break Err(e).context("failed to draw frame");
        }
    };

    game.shutdown();
    backend.restore().context("failed to restore terminal")?;
    tracing::info!("Character creator closed");
    result
}
