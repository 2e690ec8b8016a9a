//! Fake connectors shared by the use case tests

use crate::ports::connector::{Connector, ConnectorError};
use crate::use_cases::registry::ConnectorRegistry;
use async_trait::async_trait;
use nexus_domain::{Prompt, RequestContext};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Debug, Clone)]
pub(crate) enum Behavior {
    Reply(String),
    Fail(ConnectorError),
    Panic,
}

pub(crate) struct FakeConnector {
    id: String,
    enabled: bool,
    behavior: Behavior,
    delay: Duration,
    calls: AtomicUsize,
}

impl FakeConnector {
    pub(crate) fn enabled(id: &str) -> Self {
        Self {
            id: id.to_string(),
            enabled: true,
            behavior: Behavior::Reply(format!("{} says hello", id)),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn disabled(id: &str) -> Self {
        Self {
            enabled: false,
            ..Self::enabled(id)
        }
    }

    pub(crate) fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Connector for FakeConnector {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.id
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn call(
        &self,
        _prompt: &Prompt,
        _context: Option<&RequestContext>,
    ) -> Result<String, ConnectorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.behavior {
            Behavior::Reply(text) => Ok(text.clone()),
            Behavior::Fail(e) => Err(e.clone()),
            Behavior::Panic => panic!("connector {} blew up", self.id),
        }
    }
}

pub(crate) fn arc(connector: FakeConnector) -> Arc<dyn Connector> {
    Arc::new(connector)
}

/// Registry with `core` and `extended` built from (id, enabled) pairs
pub(crate) fn registry(core: &[(&str, bool)], extended: &[(&str, bool)]) -> ConnectorRegistry {
    let build = |pool: &[(&str, bool)]| -> Vec<Arc<dyn Connector>> {
        pool.iter()
            .map(|(id, on)| {
                if *on {
                    arc(FakeConnector::enabled(id))
                } else {
                    arc(FakeConnector::disabled(id))
                }
            })
            .collect()
    };
    ConnectorRegistry::new(build(core), build(extended))
}

pub(crate) fn prompt(text: &str) -> Prompt {
    Prompt::try_new(text).unwrap()
}
