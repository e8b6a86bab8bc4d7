//! Terminal progress display for multi-style layout runs

use std::sync::LazyLock;
use std::time::Duration;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;

/// Progress bars for a batch of layout jobs
///
/// Small batches get one bar per job; larger ones add an overall bar and
/// show only the most recent jobs individually.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    job_bars: Vec<ProgressBar>,
    // (label, finished steps, total steps) per job
    job_states: Vec<(String, usize, usize)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static JOB_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>14} [{bar:30.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Layouts: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create an empty display
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            job_bars: Vec::new(),
            job_states: Vec::new(),
        }
    }

    /// Create bars for `job_count` jobs
    pub fn initialize(&mut self, job_count: usize) {
        if job_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(job_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..job_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(JOB_STYLE.clone());
            self.job_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Show a job as started with `steps` units of work
    pub fn start_job(&mut self, index: usize, label: &str, steps: usize) {
        if index >= self.job_states.len() {
            self.job_states.resize(index + 1, (String::new(), 0, 0));
        }
        if let Some(state) = self.job_states.get_mut(index) {
            *state = (label.to_string(), 0, steps);
        }
        self.update_bars();
    }

    /// Mark one more unit of a job's work as done
    pub fn advance(&mut self, index: usize) {
        if let Some(state) = self.job_states.get_mut(index) {
            state.1 = (state.1 + 1).min(state.2);
        }
        self.update_bars();
    }

    /// Mark a job as finished
    pub fn complete_job(&mut self, index: usize, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(state) = self.job_states.get_mut(index) {
            state.0 = format!("✓ {} ({}ms)", state.0, elapsed.as_millis());
            state.1 = state.2;
        }
        self.update_bars();
    }

    /// Remove every bar from the terminal
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All layouts computed");
        }
        let _ = self.multi_progress.clear();
    }

    // Shows the most recent jobs in the individual bars
    fn update_bars(&self) {
        let active: Vec<&(String, usize, usize)> = self
            .job_states
            .iter()
            .filter(|(label, _, _)| !label.is_empty())
            .collect();
        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar, (label, done, total)) in self.job_bars.iter().zip(visible) {
            bar.set_length(*total as u64);
            bar.set_position(*done as u64);
            bar.set_message(format!("{done}/{total}"));
            bar.set_prefix(label.clone());
        }
        for bar in self.job_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
