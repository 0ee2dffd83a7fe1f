//! The `OutputWriter` trait and the post-run export helper.

use cc_regen::Cycle;
use cc_sim::{SimOutput, TickRecord};

use crate::{CustomerRow, CycleRow, OutputResult};

/// Sink for one run's output.
///
/// Errors surface per call; [`RecordingObserver`][crate::RecordingObserver]
/// stores them because observer hooks cannot return one.
pub trait OutputWriter {
    /// Write one tick record.
    fn write_tick(&mut self, record: &TickRecord) -> OutputResult<()>;

    /// Write a batch of finalized customers.
    fn write_customers(&mut self, rows: &[CustomerRow]) -> OutputResult<()>;

    /// Write a batch of regeneration cycles.
    fn write_cycles(&mut self, rows: &[CycleRow]) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Safe to call more than once; rows written after a `finish` are
    /// flushed by the next one.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write the exit log and the cycle partition of a finished run, then
/// flush.  Tick records are not written here (stream them with a
/// `RecordingObserver`).
pub fn write_run<W: OutputWriter>(
    writer: &mut W,
    output: &SimOutput,
    cycles: &[Cycle],
) -> OutputResult<()> {
    let customers: Vec<CustomerRow> =
        output.completed.iter().filter_map(CustomerRow::from_customer).collect();
    writer.write_customers(&customers)?;

    let cycles: Vec<CycleRow> = cycles.iter().map(CycleRow::from).collect();
    writer.write_cycles(&cycles)?;

    writer.finish()
}
