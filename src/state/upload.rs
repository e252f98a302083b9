//! Upload panel state machine.
//!
//! ```text
//! Idle -> FileSelected -> Uploading -> Done
//!                                   \-> Failed
//! ```
//!
//! Any phase returns to `Idle` through `reset`. Each upload attempt gets a
//! new run number; timer callbacks carry the run they were started for and
//! are ignored once the panel has moved on.
//!
//! TRADE-OFFS
//! ==========
//! A rejected upload resets itself after a delay, while a transport failure
//! stays on screen until the user resets. Both exits are kept distinct.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::net::types::UploadResponse;
use crate::util::progress::SimulatedProgress;

/// Status line shown while the request is in flight.
pub const UPLOADING_TEXT: &str = "Uploading and analyzing your document...";

/// Alert shown when the form is submitted with no file chosen.
pub const NO_FILE_SELECTED: &str = "Please select a file first.";

/// Fields shown in the result panel after a successful upload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadResult {
    pub title: String,
    pub genre: String,
    pub summary: String,
}

/// Why an upload ended without a result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadFailure {
    /// The server answered with `success: false`.
    Rejected(String),
    /// The request or response body failed in transit.
    Transport(String),
}

impl UploadFailure {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Rejected(error) => format!("Error: {error}"),
            Self::Transport(error) => format!("Upload failed: {error}"),
        }
    }

    /// Whether the panel returns to `Idle` on its own after this failure.
    #[must_use]
    pub fn auto_resets(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UploadPhase {
    #[default]
    Idle,
    FileSelected,
    Uploading,
    Done(UploadResult),
    Failed(UploadFailure),
}

/// Upload panel state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadState {
    pub phase: UploadPhase,
    pub file_name: String,
    pub title: String,
    pub progress: SimulatedProgress,
    /// A file is being dragged over the drop area.
    pub drag_over: bool,
    run: u64,
}

impl UploadState {
    /// A file was picked or dropped. Ignored while an upload is in flight.
    pub fn select_file(&mut self, file_name: &str) {
        if self.phase == UploadPhase::Uploading {
            return;
        }
        self.phase = UploadPhase::FileSelected;
        self.file_name = file_name.to_owned();
        self.title = default_title(file_name);
        self.drag_over = false;
    }

    /// Start uploading the selected file.
    ///
    /// Returns the new run number and the title to send (`untitled` when the
    /// field is blank), or `None` when no file is selected.
    pub fn begin_upload(&mut self, progress: SimulatedProgress, untitled: &str) -> Option<(u64, String)> {
        if self.phase != UploadPhase::FileSelected {
            return None;
        }
        self.run += 1;
        self.phase = UploadPhase::Uploading;
        self.progress = progress;
        let title = self.title.trim();
        let title = if title.is_empty() { untitled.to_owned() } else { title.to_owned() };
        Some((self.run, title))
    }

    /// Advance the simulated progress for `run`. Returns whether to keep ticking.
    pub fn tick(&mut self, run: u64) -> bool {
        if run != self.run || self.phase != UploadPhase::Uploading {
            return false;
        }
        self.progress.tick()
    }

    /// Apply the server's answer for `run`. Stale answers are dropped.
    pub fn apply_response(&mut self, run: u64, response: UploadResponse) {
        if run != self.run || self.phase != UploadPhase::Uploading {
            return;
        }
        self.progress.finish();
        self.phase = if response.success {
            UploadPhase::Done(UploadResult {
                title: response.title.unwrap_or_default(),
                genre: response.genre.unwrap_or_default(),
                summary: response.summary.unwrap_or_default(),
            })
        } else {
            UploadPhase::Failed(UploadFailure::Rejected(
                response.error.unwrap_or_else(|| "unknown error".to_owned()),
            ))
        };
    }

    /// Record a transport failure for `run`. The progress bar stops where it is.
    pub fn fail_transport(&mut self, run: u64, message: &str) {
        if run != self.run || self.phase != UploadPhase::Uploading {
            return;
        }
        self.phase = UploadPhase::Failed(UploadFailure::Transport(message.to_owned()));
    }

    /// Delay-triggered reset after a rejection. Only applies if `run` is still
    /// showing an auto-resetting failure.
    pub fn auto_reset(&mut self, run: u64) {
        let resets = matches!(&self.phase, UploadPhase::Failed(failure) if failure.auto_resets());
        if run == self.run && resets {
            self.reset();
        }
    }

    /// Back to `Idle`: clear file, title, progress. Shared by reset and cancel.
    pub fn reset(&mut self) {
        let run = self.run + 1;
        *self = Self { run, ..Self::default() };
    }

    #[must_use]
    pub fn shows_drop_area(&self) -> bool {
        self.phase == UploadPhase::Idle
    }

    #[must_use]
    pub fn shows_form(&self) -> bool {
        self.phase == UploadPhase::FileSelected
    }

    #[must_use]
    pub fn shows_progress(&self) -> bool {
        matches!(self.phase, UploadPhase::Uploading | UploadPhase::Failed(_))
    }

    #[must_use]
    pub fn result(&self) -> Option<&UploadResult> {
        match &self.phase {
            UploadPhase::Done(result) => Some(result),
            _ => None,
        }
    }

    /// Text under the progress bar.
    #[must_use]
    pub fn status_text(&self) -> String {
        match &self.phase {
            UploadPhase::Failed(failure) => failure.message(),
            UploadPhase::Uploading => UPLOADING_TEXT.to_owned(),
            _ => String::new(),
        }
    }
}

/// Title suggested for a file: its name with the last extension removed.
#[must_use]
pub fn default_title(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(dot) if dot + 1 < file_name.len() && !file_name[dot + 1..].contains('/') => file_name[..dot].to_owned(),
        _ => file_name.to_owned(),
    }
}
