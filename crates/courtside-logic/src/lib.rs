//! Pure economy logic for Courtside.
//!
//! This crate contains the money side of a collegiate basketball program:
//! alumni wealth, booster budgets, athlete NIL prices, retention talks and the
//! professional cap sheet. Functions take plain data and return results. There
//! is no database, clock, or global generator; randomness and reference data
//! are passed in.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`alumni`] | Graduate generation, professions, wealth score and archetype derivation |
//! | [`collective`] | Booster NIL collective tiers and weekly accrual |
//! | [`error`] | Reference-table and negotiation errors |
//! | [`negotiation`] | Retention candidates, offer evaluation, terminal status machine |
//! | [`nil_budget`] | Program NIL budget: alumni wealth, tradition, soft caps |
//! | [`nil_value`] | Per-athlete NIL valuation |
//! | [`pro_market`] | Free-agent market value and team cap state |
//! | [`random`] | Injected random source and draw helpers |
//! | [`registry`] | Alumni registry fold, influence vector, equity pools, dilemmas |
//! | [`roster`] | Players, sponsors, and the team snapshot |
//! | [`tables`] | Static reference data loaded from JSON |
//! | [`wealth`] | Yearly alumni wealth appreciation |

pub mod alumni;
pub mod collective;
pub mod error;
pub mod negotiation;
pub mod nil_budget;
pub mod nil_value;
pub mod pro_market;
pub mod random;
pub mod registry;
pub mod roster;
pub mod tables;
pub mod wealth;

pub use error::{NegotiationError, TablesError};
pub use random::{RandomSource, SeededRandom};
