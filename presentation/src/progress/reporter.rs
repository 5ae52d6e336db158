//! Progress reporting for reply dispatch

use autoreply_application::DispatchNotifier;
use autoreply_domain::MessageId;
use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Reports dispatch progress with spinners and a batch bar
pub struct ProgressReporter {
    multi: MultiProgress,
    spinners: Mutex<HashMap<MessageId, ProgressBar>>,
    batch_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            spinners: Mutex::new(HashMap::new()),
            batch_bar: Mutex::new(None),
        }
    }

    fn batch_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchNotifier for ProgressReporter {
    fn on_batch_start(&self, total: usize) {
        let pb = self.multi.add(ProgressBar::new(total as u64));
        pb.set_style(Self::batch_style());
        pb.set_prefix("Replying");
        pb.set_message("Starting...");

        *self.batch_bar.lock().unwrap_or_else(PoisonError::into_inner) = Some(pb);
    }

    fn on_dispatch_start(&self, id: MessageId, customer: &str) {
        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(Self::spinner_style());
        pb.set_prefix(id.to_string());
        pb.set_message(format!("Generating reply for {}...", customer));
        pb.enable_steady_tick(Duration::from_millis(100));

        self.spinners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, pb);
    }

    fn on_dispatch_complete(&self, id: MessageId, success: bool) {
        let status = if success {
            format!("{} {}", "v".green(), id)
        } else {
            format!("{} {}", "x".red(), id)
        };

        if let Some(pb) = self
            .spinners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
        {
            pb.finish_and_clear();
        }

        match self
            .batch_bar
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            Some(pb) => {
                pb.set_message(status);
                pb.inc(1);
            }
            None => {
                let _ = self.multi.println(status);
            }
        }
    }

    fn on_batch_complete(&self, succeeded: usize, failed: usize) {
        if let Some(pb) = self
            .batch_bar
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            let summary = if failed == 0 {
                format!("{} replied", succeeded).green().to_string()
            } else {
                format!("{} replied, {} failed", succeeded, failed)
                    .yellow()
                    .to_string()
            };
            pb.finish_with_message(summary);
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl DispatchNotifier for SimpleProgress {
    fn on_batch_start(&self, total: usize) {
        println!("{} {} ({} pending)", "->".cyan(), "Replying".bold(), total);
    }

    fn on_dispatch_start(&self, id: MessageId, customer: &str) {
        println!("  {} {} {}", "..".dimmed(), id, customer);
    }

    fn on_dispatch_complete(&self, id: MessageId, success: bool) {
        if success {
            println!("  {} {}", "v".green(), id);
        } else {
            println!("  {} {} (failed)", "x".red(), id);
        }
    }

    fn on_batch_complete(&self, _succeeded: usize, _failed: usize) {
        println!();
    }
}
