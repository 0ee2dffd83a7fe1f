//! staffing — how many agents does the call center need?
//!
//! Sweeps the staffing range for both patience models, writes
//! `results_uniform.csv` and `results_hyperexponential.csv`, then re-runs the
//! recommended level of each model and exports its full timeline
//! (`tick_records.csv`, `completed.csv`, `cycles.csv`) for inspection.
//!
//! ```text
//! staffing [CONFIG.json] [OUTPUT_DIR]
//! ```
//!
//! `CONFIG.json` is a serialized `SweepConfig`; missing fields take their
//! defaults (one simulated day per level, 60..70 agents).  Set `RUST_LOG` to
//! control log verbosity (default `info`).

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cc_core::{PatienceKind, SimRng};
use cc_output::{CsvWriter, OutputWriter, RecordingObserver, write_run};
use cc_regen::partition_cycles;
use cc_sim::SimBuilder;
use cc_sweep::{SweepConfig, SweepRow, recommend_staffing, sweep_to_csv};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_OUTPUT_DIR: &str = "output/staffing";
/// Service target: at most this fraction of callers hang up.
const TARGET_ABANDON:     f64  = 0.05;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => load_config(Path::new(&path))?,
        None => SweepConfig::default(),
    };
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_owned()));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    println!("=== staffing — call-center queue sweep ===");
    println!(
        "Agents: {}..{}  |  Ticks per run: {}  |  Seed: {}  |  Confidence: {}",
        config.min_agents, config.max_agents, config.base.total_ticks, config.base.seed, config.confidence
    );
    println!();

    for kind in PatienceKind::ALL {
        let t0 = Instant::now();
        let (rows, path) = sweep_to_csv(&config, kind, &out_dir)?;
        println!("[{kind}] sweep complete in {:.3} s → {}", t0.elapsed().as_secs_f64(), path.display());
        print_table(&rows, config.confidence);

        match recommend_staffing(&rows, TARGET_ABANDON) {
            Some(agents) => {
                println!("[{kind}] smallest staffing with P(abandon) ≤ {TARGET_ABANDON}: {agents} agents");
                export_timeline(&config, kind, agents, &out_dir.join(kind.as_str()))?;
            }
            None => warn!(%kind, max_abandon = TARGET_ABANDON, "no staffing level in range meets the target"),
        }
        println!();
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<SweepConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: SweepConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    info!(path = %path.display(), "loaded sweep config");
    Ok(config)
}

/// Re-run one staffing level exactly as the sweep did, streaming its tick
/// records and writing its exit log and cycles into `dir`.
fn export_timeline(config: &SweepConfig, kind: PatienceKind, agents: usize, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;

    let mut sim_config = config.sim_config(agents);
    sim_config.patience = kind.default_dist();
    let mut sim = SimBuilder::new(sim_config)
        .rng(SimRng::derived(config.base.seed, agents as u64))
        .build()?;

    let mut obs = RecordingObserver::new(CsvWriter::new(dir)?);
    sim.run(&mut obs)?;
    let rows_written = obs.rows_written();
    let mut writer = recorded_writer(obs)?;

    let output = sim.into_output();
    let (cycles, count) = partition_cycles(&output.records, config.regeneration);
    write_run(&mut writer, &output, &cycles)?;

    println!(
        "[{kind}] timeline for {agents} agents: {rows_written} ticks, {} customers, {count} cycles → {}",
        output.completed.len(),
        dir.display()
    );
    Ok(())
}

/// Hand back the observer's writer, or the first tick-row write error so a
/// truncated `tick_records.csv` is never passed off as complete.
fn recorded_writer<W: OutputWriter>(mut obs: RecordingObserver<W>) -> Result<W> {
    if let Some(e) = obs.take_error() {
        return Err(e).context("writing tick records");
    }
    Ok(obs.into_writer())
}

/// Column label for an interval at `confidence`, e.g. `95% CI`.
fn ci_label(confidence: f64) -> String {
    let pct = format!("{:.2}", confidence * 100.0);
    let pct = pct.trim_end_matches('0').trim_end_matches('.');
    format!("{pct}% CI")
}

fn print_table(rows: &[SweepRow], confidence: f64) {
    let ci = ci_label(confidence);
    println!(
        "{:<7} {:>10} {:>23} {:>10} {:>23} {:>8} {:>10} {:>10}",
        "Agents", "P(aband)", ci, "Avg wait", ci, "Cycles", "Full P", "Full wait"
    );
    println!("{}", "-".repeat(108));
    for row in rows {
        let (pa, pa_ci) = fmt_estimate(row.prob_abandon);
        let (aw, aw_ci) = fmt_estimate(row.avg_wait);
        println!(
            "{:<7} {:>10} {:>23} {:>10} {:>23} {:>8} {:>10} {:>10}",
            row.agents,
            pa,
            pa_ci,
            aw,
            aw_ci,
            row.cycles,
            fmt_opt(row.full_run_prob_abandon),
            fmt_opt(row.full_run_avg_wait),
        );
    }
}

fn fmt_estimate(est: Option<cc_regen::Estimate>) -> (String, String) {
    match est {
        Some(e) => (format!("{:.4}", e.point), format!("({:.4}, {:.4})", e.ci_low, e.ci_high)),
        None => ("-".into(), "-".into()),
    }
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map(|x| format!("{x:.4}")).unwrap_or_else(|| "-".into())
}
