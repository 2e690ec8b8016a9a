//! Concurrent fan-out to the active connectors.
//!
//! Every enabled connector gets its own task, and all tasks are spawned
//! before any is awaited. Results are joined back into the position of
//! the connector in the active pool, so the output order never depends on
//! which connector finishes first. A failing or panicking connector only
//! ever affects its own slot.

use crate::ports::connector::Connector;
use crate::ports::progress::ProgressNotifier;
use nexus_domain::{ConnectorOutcome, Prompt, RequestContext};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Defects in the dispatch machinery itself (never a connector failure)
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("connector task was cancelled: {0}")]
    Cancelled(String),
}

/// Runs the active connectors concurrently and collects positional outcomes
#[derive(Debug, Clone, Default)]
pub struct Dispatcher;

impl Dispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Query `connectors` concurrently.
    ///
    /// The returned outcomes have exactly one entry per connector, in the
    /// order given. Disabled connectors get a not-configured slot without
    /// being called.
    pub async fn dispatch(
        &self,
        connectors: &[Arc<dyn Connector>],
        prompt: &Prompt,
        context: Option<&RequestContext>,
        progress: &dyn ProgressNotifier,
    ) -> Result<Vec<ConnectorOutcome>, DispatchError> {
        info!("Dispatching to {} connectors", connectors.len());
        progress.on_dispatch_start(connectors.len());

        let mut slots: Vec<Option<ConnectorOutcome>> = vec![None; connectors.len()];
        let mut join_set = JoinSet::new();

        let prompt = Arc::new(prompt.clone());
        let context = Arc::new(context.cloned());

        for (index, connector) in connectors.iter().enumerate() {
            if !connector.is_enabled() {
                debug!("Connector {} is not configured, skipping call", connector.id());
                slots[index] = Some(ConnectorOutcome::not_configured(
                    connector.id(),
                    connector.display_name(),
                ));
                progress.on_connector_complete(connector.id(), false);
                continue;
            }

            let connector = Arc::clone(connector);
            let prompt = Arc::clone(&prompt);
            let context = Arc::clone(&context);

            join_set.spawn(async move {
                debug!("Querying connector {}", connector.id());
                let result = connector.query(&prompt, (*context).as_ref()).await;
                (index, result)
            });
        }

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, result)) => {
                    let connector = &connectors[index];
                    let outcome = match result {
                        Ok(content) => {
                            debug!("Connector {} responded", connector.id());
                            ConnectorOutcome::success(
                                connector.id(),
                                connector.display_name(),
                                content,
                            )
                        }
                        Err(e) => {
                            warn!("Connector {} failed: {}", connector.id(), e);
                            ConnectorOutcome::failure(
                                connector.id(),
                                connector.display_name(),
                                e.to_string(),
                            )
                        }
                    };
                    progress.on_connector_complete(connector.id(), outcome.is_success());
                    slots[index] = Some(outcome);
                }
                Err(e) if e.is_panic() => {
                    // The slot is unknown here; it is filled after the join.
                    warn!("Connector task panicked: {}", e);
                }
                Err(e) => return Err(DispatchError::Cancelled(e.to_string())),
            }
        }

        let outcomes = slots
            .into_iter()
            .zip(connectors)
            .map(|(slot, connector)| {
                slot.unwrap_or_else(|| {
                    progress.on_connector_complete(connector.id(), false);
                    ConnectorOutcome::failure(
                        connector.id(),
                        connector.display_name(),
                        "connector task panicked",
                    )
                })
            })
            .collect();

        progress.on_dispatch_complete();

        Ok(outcomes)
    }
}
