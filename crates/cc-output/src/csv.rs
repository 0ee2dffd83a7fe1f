//! CSV output backend.
//!
//! [`CsvWriter`] creates three files in the configured output directory:
//! - `tick_records.csv`
//! - `completed.csv`
//! - `cycles.csv`
//!
//! Sweep results go to `results_<kind>.csv` via [`write_sweep_results`].

use std::fs::File;
use std::path::{Path, PathBuf};

use cc_core::PatienceKind;
use cc_regen::Estimate;
use cc_sim::TickRecord;
use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CustomerRow, CycleRow, OutputResult, SweepRow};

/// Writes one run's output to three CSV files.
pub struct CsvWriter {
    ticks:     Writer<File>,
    customers: Writer<File>,
    cycles:    Writer<File>,
}

impl CsvWriter {
    /// Create the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut ticks = Writer::from_path(dir.join("tick_records.csv"))?;
        ticks.write_record([
            "tick",
            "arrivals",
            "queue_len",
            "available_agents",
            "busy_agents",
            "completions",
            "total_wait",
            "abandonments",
        ])?;

        let mut customers = Writer::from_path(dir.join("completed.csv"))?;
        customers.write_record(["customer_id", "arrival_tick", "exit_tick", "wait", "abandoned"])?;

        let mut cycles = Writer::from_path(dir.join("cycles.csv"))?;
        cycles.write_record([
            "cycle",
            "start_tick",
            "ticks",
            "arrivals",
            "total_wait",
            "completions",
            "abandonments",
        ])?;

        Ok(Self { ticks, customers, cycles })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick(&mut self, r: &TickRecord) -> OutputResult<()> {
        self.ticks.write_record(&[
            r.tick.0.to_string(),
            r.arrivals.to_string(),
            r.queue_len.to_string(),
            r.available_agents.to_string(),
            r.busy_agents.to_string(),
            r.completions.to_string(),
            r.total_wait.to_string(),
            r.abandonments.to_string(),
        ])?;
        Ok(())
    }

    fn write_customers(&mut self, rows: &[CustomerRow]) -> OutputResult<()> {
        for row in rows {
            self.customers.write_record(&[
                row.customer_id.to_string(),
                row.arrival_tick.to_string(),
                row.exit_tick.to_string(),
                row.wait.to_string(),
                (row.abandoned as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_cycles(&mut self, rows: &[CycleRow]) -> OutputResult<()> {
        for row in rows {
            self.cycles.write_record(&[
                row.cycle.to_string(),
                row.start_tick.to_string(),
                row.ticks.to_string(),
                row.arrivals.to_string(),
                row.total_wait.to_string(),
                row.completions.to_string(),
                row.abandonments.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.ticks.flush()?;
        self.customers.flush()?;
        self.cycles.flush()?;
        Ok(())
    }
}

const SWEEP_HEADER: [&str; 10] = [
    "agents",
    "prob_abandon",
    "prob_abandon_ci_low",
    "prob_abandon_ci_high",
    "avg_wait",
    "avg_wait_ci_low",
    "avg_wait_ci_high",
    "cycles",
    "full_run_prob_abandon",
    "full_run_avg_wait",
];

/// Write one sweep's rows to `dir/results_<kind>.csv` and return the path.
///
/// Missing estimates are written as empty fields.
pub fn write_sweep_results(
    dir:  &Path,
    kind: PatienceKind,
    rows: &[SweepRow],
) -> OutputResult<PathBuf> {
    let path = dir.join(format!("results_{kind}.csv"));
    let mut w = Writer::from_path(&path)?;
    w.write_record(SWEEP_HEADER)?;

    for row in rows {
        let [pa, pa_lo, pa_hi] = estimate_fields(row.prob_abandon);
        let [aw, aw_lo, aw_hi] = estimate_fields(row.avg_wait);
        w.write_record(&[
            row.agents.to_string(),
            pa,
            pa_lo,
            pa_hi,
            aw,
            aw_lo,
            aw_hi,
            row.cycles.to_string(),
            opt_field(row.full_run_prob_abandon),
            opt_field(row.full_run_avg_wait),
        ])?;
    }
    w.flush()?;
    Ok(path)
}

fn estimate_fields(est: Option<Estimate>) -> [String; 3] {
    match est {
        Some(e) => [e.point.to_string(), e.ci_low.to_string(), e.ci_high.to_string()],
        None => Default::default(),
    }
}

fn opt_field(v: Option<f64>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}
