//! `cc-output` — CSV output for the call-center queue simulator.
//!
//! | File                   | Written by                         | One row per                  |
//! |------------------------|------------------------------------|------------------------------|
//! | `tick_records.csv`     | [`RecordingObserver`] during a run | simulated tick               |
//! | `completed.csv`        | [`write_run`] after a run          | customer that left the queue |
//! | `cycles.csv`           | [`write_run`] after a run          | regeneration cycle           |
//! | `results_<kind>.csv`   | [`write_sweep_results`]            | staffing level in a sweep    |
//!
//! # Usage
//!
//! ```rust,ignore
//! use cc_output::{CsvWriter, RecordingObserver, write_run};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = RecordingObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! let mut writer = obs.into_writer();
//! write_run(&mut writer, &sim.into_output(), &cycles)?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use self::csv::{CsvWriter, write_sweep_results};
pub use error::{OutputError, OutputResult};
pub use observer::RecordingObserver;
pub use row::{CustomerRow, CycleRow, SweepRow};
pub use writer::{OutputWriter, write_run};
