//! Progress reporting while connectors are consulted

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use nexus_application::ProgressNotifier;
use std::sync::Mutex;

/// Reports dispatch progress with a progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_dispatch_start(&self, total_connectors: usize) {
        let pb = ProgressBar::new(total_connectors as u64);
        pb.set_style(Self::style());
        pb.set_prefix("Consulting connectors");
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_connector_complete(&self, connector: &str, success: bool) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            let status = if success {
                format!("{} {}", "v".green(), connector)
            } else {
                format!("{} {}", "x".red(), connector)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_dispatch_complete(&self) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_with_message(format!("{}", "done".green()));
        }
    }
}

/// Line-based progress on stderr, for when stderr is not a terminal
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_dispatch_start(&self, total_connectors: usize) {
        eprintln!(
            "{} {} ({} connectors)",
            "->".cyan(),
            "Consulting connectors".bold(),
            total_connectors
        );
    }

    fn on_connector_complete(&self, connector: &str, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), connector);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), connector);
        }
    }

    fn on_dispatch_complete(&self) {
        eprintln!();
    }
}
