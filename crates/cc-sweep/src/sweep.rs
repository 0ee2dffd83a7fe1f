//! Running the sweep.

use std::path::{Path, PathBuf};

use cc_core::{PatienceKind, SimRng};
use cc_regen::{Cycle, CycleField, Estimate, RegenError, estimate_with_confidence, partition_cycles};
use cc_sim::{NoopObserver, SimBuilder};
use tracing::{debug, info};

use crate::{SweepConfig, SweepError, SweepResult, SweepRow};

/// Simulate and analyse every staffing level in `config`.
///
/// Rows come back in ascending agent order whether or not the `parallel`
/// feature is enabled.  The first failing level aborts the sweep.
pub fn run_sweep(config: &SweepConfig) -> SweepResult<Vec<SweepRow>> {
    config.validate()?;
    info!(
        min_agents = config.min_agents,
        max_agents = config.max_agents,
        ticks = config.base.total_ticks,
        seed = config.base.seed,
        "starting staffing sweep"
    );

    let levels: Vec<usize> = (config.min_agents..config.max_agents).collect();

    #[cfg(not(feature = "parallel"))]
    {
        levels.iter().map(|&agents| run_point(config, agents)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        levels.par_iter().map(|&agents| run_point(config, agents)).collect()
    }
}

/// Simulate one staffing level and estimate its steady-state measures.
///
/// The run's root stream is derived from the base seed and `agents`, so a
/// level gives the same row whether run alone or inside a sweep.
pub fn run_point(config: &SweepConfig, agents: usize) -> SweepResult<SweepRow> {
    let sim_err = |source| SweepError::Sim { agents, source };

    let mut sim = SimBuilder::new(config.sim_config(agents))
        .rng(SimRng::derived(config.base.seed, agents as u64))
        .build()
        .map_err(sim_err)?;
    sim.run(&mut NoopObserver).map_err(sim_err)?;
    let output = sim.into_output();

    let (cycles, count) = partition_cycles(&output.records, config.regeneration);
    let prob_abandon =
        estimate_or_none(&cycles, CycleField::Abandonments, config.confidence, agents)?;
    let avg_wait = estimate_or_none(&cycles, CycleField::TotalWait, config.confidence, agents)?;

    let row = SweepRow {
        agents,
        prob_abandon,
        avg_wait,
        cycles: count,
        full_run_prob_abandon: output.full_run_abandon_rate(),
        full_run_avg_wait: output.full_run_mean_wait(),
    };
    info!(
        agents,
        cycles = count,
        prob_abandon = row.prob_abandon.map(|e| e.point),
        avg_wait = row.avg_wait.map(|e| e.point),
        "staffing level done"
    );
    Ok(row)
}

/// Per-completion estimate of `reward`, or `None` when the run regenerated
/// too rarely to support one.
fn estimate_or_none(
    cycles:     &[Cycle],
    reward:     CycleField,
    confidence: f64,
    agents:     usize,
) -> SweepResult<Option<Estimate>> {
    match estimate_with_confidence(cycles, reward, CycleField::Completions, confidence) {
        Ok(est) => Ok(Some(est)),
        Err(e @ (RegenError::InsufficientCycles { .. } | RegenError::ZeroCycleLength { .. })) => {
            debug!(agents, %reward, error = %e, "no estimate");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Smallest agent count whose estimated probability of abandonment is at
/// most `max_abandon`.  Levels without an estimate are skipped.
pub fn recommend_staffing(rows: &[SweepRow], max_abandon: f64) -> Option<usize> {
    rows.iter()
        .filter(|row| row.prob_abandon.is_some_and(|e| e.point <= max_abandon))
        .map(|row| row.agents)
        .min()
}

/// Sweep with the default patience distribution of `kind` and write the rows
/// to `out_dir/results_<kind>.csv`.
pub fn sweep_to_csv(
    config:  &SweepConfig,
    kind:    PatienceKind,
    out_dir: &Path,
) -> SweepResult<(Vec<SweepRow>, PathBuf)> {
    let mut config = config.clone();
    config.base.patience = kind.default_dist();

    let rows = run_sweep(&config)?;
    let path = cc_output::write_sweep_results(out_dir, kind, &rows)?;
    info!(path = %path.display(), rows = rows.len(), "wrote sweep results");
    Ok((rows, path))
}
