//! `RecordingObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use cc_core::Tick;
use cc_sim::{SimObserver, TickRecord};

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams every tick record to an [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct RecordingObserver<W: OutputWriter> {
    writer:       W,
    rows_written: u64,
    last_error:   Option<OutputError>,
}

impl<W: OutputWriter> RecordingObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows_written: 0, last_error: None }
    }

    /// Tick rows successfully handed to the writer.
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to append the exit log after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for RecordingObserver<W> {
    fn on_tick_end(&mut self, record: &TickRecord) {
        // Stop writing after the first failure; the error is already stored.
        if self.last_error.is_some() {
            return;
        }
        let result = self.writer.write_tick(record);
        if result.is_ok() {
            self.rows_written += 1;
        }
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
