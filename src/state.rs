// state.rs
use crate::config::Config;
use crate::domain::catalog::Catalog;
use crate::forms::{DependentOptions, FormSessions, SubmitDelays};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

/// Everything the router needs, shared by all worker threads.
pub struct AppState {
    pub config: Config,
    pub catalog: Catalog,
    pub forms: FormSessions,
}

impl AppState {
    pub fn build(config: Config) -> Result<Self> {
        let catalog = Catalog::embedded().context("failed to load embedded catalog")?;
        let deps = DependentOptions::standard().context("dependent options table is incomplete")?;

        info!(
            listings = catalog.listings().len(),
            posts = catalog.posts().len(),
            "catalog loaded"
        );

        let forms = FormSessions::new(
            Arc::new(deps),
            SubmitDelays {
                processing: config.submit_delay,
                reset: config.reset_delay,
            },
            config.form_ttl,
        );

        Ok(Self {
            config,
            catalog,
            forms,
        })
    }
}
