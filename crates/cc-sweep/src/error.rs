use cc_core::CcError;
use cc_output::OutputError;
use cc_regen::RegenError;
use cc_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SweepError {
    #[error("invalid sweep configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CcError),

    #[error("simulation with {agents} agents failed: {source}")]
    Sim {
        agents: usize,
        #[source]
        source: SimError,
    },

    #[error(transparent)]
    Regen(#[from] RegenError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

pub type SweepResult<T> = Result<T, SweepError>;
