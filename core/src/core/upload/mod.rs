//! Simulated upload: a tick-driven progress task that yields a movie record
//! on completion.
//!
//! The task never schedules anything itself. A driver ticks it every
//! [`TICK_INTERVAL`] with a uniformly distributed increment in
//! `[0, MAX_TICK_INCREMENT]`; tests inject fixed increments and run the task
//! deterministically. Unlike the uncancellable interval it models, the task
//! exposes an explicit cancel hook so a torn-down view does not leak a
//! running timer.

use crate::core::session;
use crate::error::UploadError;
use crate::types::{MovieId, MovieRecord, Session};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Wall-clock interval between progress ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// Upper bound of the per-tick progress increment.
pub const MAX_TICK_INCREMENT: f64 = 10.0;

const BYTES_PER_GB: f64 = (1024u64 * 1024 * 1024) as f64;

/// Typed fields of the admin upload form. Front-ends parse the raw text
/// inputs before submitting.
#[derive(Debug, Clone)]
pub struct UploadForm {
    pub title: String,
    pub year: i32,
    pub rating: f64,
    pub poster: String,
}

/// The file chosen in the form. Only its size matters; nothing is read.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Progress after the tick, in `[0, 100)`.
    InProgress(f64),
    Complete,
    Cancelled,
}

/// An upload in flight.
#[derive(Debug)]
pub struct UploadTask {
    form: UploadForm,
    file: SelectedFile,
    progress: f64,
    cancelled: bool,
}

impl UploadTask {
    /// Authorizes and starts an upload.
    ///
    /// Fails with `NotAuthorized` when the caller is signed out or not the
    /// administrator, and with `NoFileSelected` when no file was chosen.
    /// Failures change no state.
    pub fn begin(
        session: Option<&Session>,
        form: UploadForm,
        file: Option<SelectedFile>,
    ) -> Result<Self, UploadError> {
        if !session.is_some_and(session::is_administrator) {
            return Err(UploadError::NotAuthorized);
        }
        let file = file.ok_or(UploadError::NoFileSelected)?;

        Ok(Self {
            form,
            file,
            progress: 0.0,
            cancelled: false,
        })
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 100.0
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Stops the task. Subsequent ticks report `Cancelled` and no record is
    /// produced.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Advances progress by `increment`, clamping at 100.
    pub fn tick(&mut self, increment: f64) -> TickOutcome {
        if self.cancelled {
            return TickOutcome::Cancelled;
        }
        if self.is_complete() {
            return TickOutcome::Complete;
        }

        self.progress = (self.progress + increment.max(0.0)).min(100.0);

        if self.is_complete() {
            TickOutcome::Complete
        } else {
            TickOutcome::InProgress(self.progress)
        }
    }

    /// Builds the finished record: fresh id, file size formatted in GB,
    /// placeholder playback URL, `created_at` = now. Only meaningful after
    /// `tick` reported `Complete`.
    pub fn into_record(self, now: DateTime<Utc>) -> MovieRecord {
        debug_assert!(self.is_complete());

        MovieRecord {
            id: MovieId::generate(),
            title: self.form.title,
            year: self.form.year,
            rating: self.form.rating,
            poster: self.form.poster,
            url: "#".to_string(),
            file_size: Some(format_file_size(self.file.bytes)),
            created_at: now,
        }
    }
}

/// Formats a byte count as gigabytes with two decimal places.
pub fn format_file_size(bytes: u64) -> String {
    format!("{:.2} GB", bytes as f64 / BYTES_PER_GB)
}
