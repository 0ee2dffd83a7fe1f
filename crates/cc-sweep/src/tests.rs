//! Unit tests for cc-sweep.

use cc_core::{InterarrivalDist, ServiceDist, SimConfig};
use cc_regen::RegenerationState;

use crate::{SweepConfig, SweepError, SweepRow, recommend_staffing, run_point, run_sweep};

/// Two erlangs of offered load: light enough for 3+ agents to empty the
/// system regularly.
fn light_config(min_agents: usize, max_agents: usize) -> SweepConfig {
    SweepConfig {
        base: SimConfig {
            total_ticks: 50_000,
            arrival:     InterarrivalDist::Exponential { rate: 0.1 },
            service:     ServiceDist::Exponential { mean: 20.0 },
            ..SimConfig::default()
        },
        min_agents,
        max_agents,
        regeneration: RegenerationState::Empty,
        ..SweepConfig::default()
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn default_matches_reference_sweep() {
        let c = SweepConfig::default();
        assert_eq!((c.min_agents, c.max_agents), (60, 70));
        assert_eq!(c.len(), 10);
        assert_eq!(c.confidence, 0.95);
        assert_eq!(c.regeneration, RegenerationState::Saturated);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn empty_range_rejected() {
        let c = SweepConfig { min_agents: 5, max_agents: 5, ..SweepConfig::default() };
        assert!(c.is_empty());
        assert!(matches!(c.validate(), Err(SweepError::Config(_))));
        assert!(matches!(run_sweep(&c), Err(SweepError::Config(_))));
    }

    #[test]
    fn confidence_outside_unit_interval_rejected() {
        for confidence in [0.0, 1.0, 1.5, f64::from_bits(1.0f64.to_bits() - 1)] {
            let c = SweepConfig { confidence, ..SweepConfig::default() };
            assert!(matches!(c.validate(), Err(SweepError::Config(_))));
        }
    }

    #[test]
    fn invalid_base_config_rejected() {
        let mut c = SweepConfig::default();
        c.base.total_ticks = 0;
        assert!(matches!(c.validate(), Err(SweepError::Core(_))));
    }

    #[test]
    fn sim_config_overrides_capacity_only() {
        let c = light_config(1, 4);
        let sim = c.sim_config(3);
        assert_eq!(sim.agent_capacity, 3);
        assert_eq!(sim.total_ticks, c.base.total_ticks);
        assert_eq!(sim.arrival, c.base.arrival);
    }
}

#[cfg(test)]
mod sweep_tests {
    use super::*;

    #[test]
    fn rows_in_ascending_agent_order() {
        let rows = run_sweep(&light_config(2, 6)).unwrap();
        let agents: Vec<usize> = rows.iter().map(|r| r.agents).collect();
        assert_eq!(agents, [2, 3, 4, 5]);
    }

    #[test]
    fn sweep_is_deterministic_and_matches_single_points() {
        let config = light_config(3, 5);
        let a = run_sweep(&config).unwrap();
        let b = run_sweep(&config).unwrap();
        assert_eq!(a, b);
        assert_eq!(run_point(&config, 4).unwrap(), a[1]);
    }

    #[test]
    fn adequate_staffing_yields_estimates() {
        let rows = run_sweep(&light_config(3, 6)).unwrap();
        for row in &rows {
            let pa = row.prob_abandon.expect("light load regenerates often");
            let aw = row.avg_wait.expect("light load regenerates often");
            assert!(row.cycles > 100, "{} agents: {} cycles", row.agents, row.cycles);
            assert!((0.0..=1.0).contains(&pa.point));
            assert!(aw.point >= 0.0);
            assert!(pa.ci_low <= pa.point && pa.point <= pa.ci_high);
            assert_eq!(pa.cycles_used, row.cycles - 2);
        }
        let wait_3 = rows[0].avg_wait.unwrap().point;
        let wait_5 = rows[2].avg_wait.unwrap().point;
        assert!(wait_3 > wait_5, "{wait_3} <= {wait_5}");
    }

    #[test]
    fn never_regenerating_level_has_no_estimate() {
        // With no agents the queue never drains after the first arrival.
        let config = SweepConfig {
            base: SimConfig { total_ticks: 5_000, ..SimConfig::default() },
            min_agents: 0,
            max_agents: 1,
            regeneration: RegenerationState::Empty,
            ..SweepConfig::default()
        };
        let rows = run_sweep(&config).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].prob_abandon.is_none());
        assert!(rows[0].avg_wait.is_none());
        assert_eq!(rows[0].full_run_prob_abandon, Some(1.0));
    }

    #[test]
    fn default_load_yields_estimates_for_both_patience_kinds() {
        use cc_core::PatienceKind;

        // 60 erlangs offered to 60 agents: the idle state never recurs, the
        // saturated boundary does.
        for kind in PatienceKind::ALL {
            let mut config = SweepConfig::default();
            config.base.patience = kind.default_dist();
            let row = run_point(&config, 60).unwrap();

            assert!(row.cycles > 100, "{kind}: {} cycles", row.cycles);
            let pa = row.prob_abandon.expect("saturated boundary recurs at full load");
            assert!(row.avg_wait.is_some());
            let full = row.full_run_prob_abandon.unwrap();
            assert!((pa.point - full).abs() < 0.02, "{kind}: {} vs {full}", pa.point);
            assert!(pa.half_width > 0.0);
        }
    }

    #[test]
    fn idle_state_never_recurs_at_default_load() {
        let config = SweepConfig {
            base: SimConfig { total_ticks: 20_000, ..SimConfig::default() },
            regeneration: RegenerationState::Empty,
            ..SweepConfig::default()
        };
        let row = run_point(&config, 60).unwrap();
        assert!(row.prob_abandon.is_none());
    }

    #[test]
    fn writes_results_file_per_patience_kind() {
        use cc_core::PatienceKind;

        let dir = tempfile::tempdir().unwrap();
        let config = SweepConfig {
            base: SimConfig { total_ticks: 5_000, ..light_config(3, 5).base },
            ..light_config(3, 5)
        };
        for kind in PatienceKind::ALL {
            let (rows, path) = crate::sweep_to_csv(&config, kind, dir.path()).unwrap();
            assert_eq!(rows.len(), 2);
            assert_eq!(path, dir.path().join(format!("results_{}.csv", kind.as_str())));
            let mut rdr = csv::Reader::from_path(&path).unwrap();
            assert_eq!(rdr.records().count(), 2);
        }
    }
}

#[cfg(test)]
mod recommend_tests {
    use cc_regen::Estimate;

    use super::*;

    fn row(agents: usize, abandon: Option<f64>) -> SweepRow {
        SweepRow {
            agents,
            prob_abandon: abandon.map(|p| Estimate {
                point:       p,
                ci_low:      p,
                ci_high:     p,
                half_width:  0.0,
                cycles_used: 10,
            }),
            avg_wait: None,
            cycles: 12,
            full_run_prob_abandon: abandon,
            full_run_avg_wait: None,
        }
    }

    #[test]
    fn smallest_level_meeting_target() {
        let rows = [row(60, Some(0.12)), row(61, Some(0.06)), row(62, Some(0.04)), row(63, Some(0.02))];
        assert_eq!(recommend_staffing(&rows, 0.05), Some(62));
        assert_eq!(recommend_staffing(&rows, 0.06), Some(61));
        assert_eq!(recommend_staffing(&rows, 0.5), Some(60));
    }

    #[test]
    fn levels_without_estimate_skipped() {
        let rows = [row(60, None), row(61, Some(0.01))];
        assert_eq!(recommend_staffing(&rows, 0.05), Some(61));
    }

    #[test]
    fn unreachable_target_gives_none() {
        let rows = [row(60, Some(0.3)), row(61, Some(0.2))];
        assert_eq!(recommend_staffing(&rows, 0.05), None);
        assert_eq!(recommend_staffing(&[], 0.05), None);
    }
}
