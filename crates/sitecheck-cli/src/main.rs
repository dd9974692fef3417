use anyhow::Result;
use sitecheck_term::application::{cli, logging, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let config = match cli::parse().await? {
        Some(config) => config,
        None => return Ok(()),
    };

    // Logs go to a file so the terminal stays clean. Held until exit so the
    // background writer flushes.
    let _log_guard = logging::init(&config)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting sitecheck");

    std::panic::set_hook(Box::new(|panic_info| {
        ui::destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let result = ui::start(config).await;
    if let Err(err) = &result {
        tracing::error!(error = ?err, "sitecheck exited with an error");
    }

    return result;
}
