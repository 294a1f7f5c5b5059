use std::time::{Duration, Instant};

use anyhow::Context;
use painel_core::canvas::Canvas;
use painel_core::theme::Theme;
use painel_social::{SocialApp, SocialConfig};
use painel_terminal::TerminalBackend;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const FRAME_BUDGET: Duration = Duration::from_millis(16);

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "painel_social=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = ?e, "Social panel exited with an error");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = SocialConfig::from_env().context("invalid configuration")?;
    tracing::info!(
        database = %config.database_url,
        pdf_dir = %config.pdf_dir.display(),
        "Starting social panel"
    );

    let pool = painel_db::bootstrap(&config.database_url)
        .await
        .context("failed to open database")?;
    let mut app = SocialApp::new(pool.clone(), config.pdf_dir.clone(), config.window);

    let mut backend = TerminalBackend::enter(config.window).context("failed to enter terminal")?;
    let mut canvas = Canvas::new();
    let mut last = Instant::now();

    let result = loop {
        let events = match backend.poll_events(FRAME_BUDGET) {
            Ok(events) => events,
            Err(e) => break Err(e).context("failed to read terminal input"),
        };
        if !app.handle_events(&events).await {
            break Ok(());
        }

        let now = Instant::now();
        app.update(now.duration_since(last).as_secs_f32());
        last = now;

        canvas.clear(Theme::LIGHT.background);
        app.draw(&mut canvas);
        if let Err(e) = backend.present(&canvas) {
            break Err(e).context("failed to draw frame");
        }
    };

    backend.restore().context("failed to restore terminal")?;
    pool.close().await;
    tracing::info!("Social panel closed");
    result
}
