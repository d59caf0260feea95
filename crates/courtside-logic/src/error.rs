//! Error types. The engines themselves never fail; only table loading and
//! negotiation status misuse surface errors.

use thiserror::Error;

use crate::negotiation::CandidateStatus;

/// Errors raised while loading or validating reference tables.
#[derive(Debug, Error)]
pub enum TablesError {
    #[error("reference tables are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("salary for {name} is negative ({salary})")]
    NegativeSalary { name: String, salary: f64 },
    #[error("archetype weights for {school} sum to {total:.3}, above 1.0")]
    WeightsOverflow { school: String, total: f64 },
    #[error("titan rate for {school} is outside [0, 1]: {rate}")]
    TitanRateOutOfRange { school: String, rate: f64 },
    #[error("NIL cap for conference {conference} must be positive, got {cap}")]
    NonPositiveCap { conference: String, cap: f64 },
}

/// Errors raised by the negotiation status machine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NegotiationError {
    #[error("candidate {player_id} is already {status:?}")]
    AlreadyFinalized {
        player_id: u32,
        status: CandidateStatus,
    },
}
