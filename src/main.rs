use reviewer_assigner::{config::Config, State};
use std::process::ExitCode;
use tokio::net::TcpListener;
use tracing::{error, level_filters::LevelFilter};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_line_number(true).with_filter(env_filter))
        .init();

    reviewer_assigner::panic::set_hook();

    if let Err(err) = run().await {
        error!("{err:#}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;

    let listener = TcpListener::bind(config.listen_addr).await?;
    let state = State::new(&config).await?;

    reviewer_assigner::run(listener, state).await
}
