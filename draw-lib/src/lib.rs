//! Deterministic core of a publicly verifiable prize draw.
//!
//! A beacon value is folded into a [`Seed`], which drives a [`Mulberry32`]
//! stream. The stream feeds a weighted sampler without replacement, run once
//! per prize tier over a single shrinking pool. Same population (in the same
//! order), same tiers and same beacon always give the same winners.

mod error;
mod sampler;

pub mod engine;
pub mod model;
pub mod seed;
pub mod stream;

pub use engine::{draw, run, DrawOutcome, TierSummary, Winner};
pub use error::Error;
pub use model::{
    reference_tiers, DrawResult, Participant, ParticipantId, Payout, Population, PrizeTier,
    Tickets,
};
pub use seed::Seed;
pub use stream::{Mulberry32, UniformStream};
