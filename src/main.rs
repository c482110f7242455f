use crate::config::Config;
use crate::responses::error_to_response;
use crate::router::{handle, page_context};
use crate::state::AppState;
use anyhow::{Context, Result};
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod domain;
mod errors;
mod forms;
mod request;
mod responses;
mod router;
mod state;
mod templates;
mod theme;

#[cfg(test)]
mod tests;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,contact365=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    let addr = config.addr;
    let workers = config.workers;
    let state = AppState::build(config)?;

    tracing::info!(%addr, workers, "starting server at http://{addr}");

    Server::bind(&addr)
        .max_workers(workers)
        .serve(move |req, _info| {
            let ctx = page_context(&req);
            match handle(req, &state) {
                Ok(resp) => resp,
                Err(err) => error_to_response(err, &ctx),
            }
        })
        .context("server ended with error")?;

    tracing::info!("server shut down cleanly");
    Ok(())
}
