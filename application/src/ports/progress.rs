//! Progress notification port
//!
//! Defines the interface for reporting progress while connectors are
//! being consulted.

/// Callback for progress updates during a dispatch
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, web UI, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called once the active connectors are known, before any call starts
    fn on_dispatch_start(&self, total_connectors: usize);

    /// Called when a connector finishes, in completion order
    fn on_connector_complete(&self, connector: &str, success: bool);

    /// Called after every connector has finished
    fn on_dispatch_complete(&self);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_dispatch_start(&self, _total_connectors: usize) {}
    fn on_connector_complete(&self, _connector: &str, _success: bool) {}
    fn on_dispatch_complete(&self) {}
}
