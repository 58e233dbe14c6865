use crate::model::{DrawResult, Participant, ParticipantId, Payout, Population, PrizeTier, Tickets};
use crate::sampler;
use crate::stream::{Mulberry32, UniformStream};
use crate::{Error, Seed};
use std::cmp::Reverse;
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Winner {
    pub id: ParticipantId,
    pub tickets: Tickets,
    pub tier: String,
    pub payout: Payout,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TierSummary {
    pub name: String,
    pub configured: usize,
    pub awarded: usize,
    pub total_paid: Payout,
}

impl TierSummary {
    pub fn shortfall(&self) -> usize {
        self.configured - self.awarded
    }
}

/// Winners of every tier, in the order they were drawn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawOutcome {
    winners: Vec<Winner>,
    tiers: Vec<TierSummary>,
}

impl DrawOutcome {
    pub fn winners(&self) -> &[Winner] {
        &self.winners
    }

    pub fn tiers(&self) -> &[TierSummary] {
        &self.tiers
    }

    pub fn winner(&self, id: &str) -> Option<&Winner> {
        self.winners.iter().find(|w| w.id == id)
    }

    /// Identifier to (tier, payout) for every winner.
    pub fn winnings(&self) -> HashMap<&str, (&str, Payout)> {
        self.winners
            .iter()
            .map(|w| (w.id.as_str(), (w.tier.as_str(), w.payout)))
            .collect()
    }

    pub fn total_paid(&self) -> Payout {
        self.tiers.iter().map(|t| t.total_paid).sum()
    }

    /// One result per member of `population`: winners first by descending
    /// amount, then by descending tickets. Remaining ties keep load order.
    pub fn results(&self, population: &Population) -> Vec<DrawResult> {
        let winnings = self.winnings();
        let mut results = population
            .participants()
            .iter()
            .map(|p| match winnings.get(p.id.as_str()) {
                Some((tier, payout)) => DrawResult {
                    id: p.id.clone(),
                    tickets: p.tickets,
                    tier: Some((*tier).to_owned()),
                    amount: *payout,
                },
                None => DrawResult {
                    id: p.id.clone(),
                    tickets: p.tickets,
                    tier: None,
                    amount: Payout::ZERO,
                },
            })
            .collect::<Vec<_>>();
        results.sort_by_key(|r| (!r.is_winner(), Reverse(r.amount), Reverse(r.tickets)));
        results
    }
}

/// Draws every tier in order from a single shrinking pool. Winners of a tier
/// are out of the pool before the next tier starts.
pub fn run<S>(population: &Population, tiers: &[PrizeTier], stream: &mut S) -> DrawOutcome
where
    S: UniformStream + ?Sized,
{
    let mut pool = population.eligible();
    tracing::info!(
        participants = population.len(),
        eligible = pool.len(),
        tickets = population.total_tickets(),
        "starting draw"
    );

    let mut outcome = DrawOutcome::default();
    for tier in tiers {
        let drawn = sampler::draw(&mut pool, tier.winners, stream);
        let summary = TierSummary {
            name: tier.name.clone(),
            configured: tier.winners,
            awarded: drawn.len(),
            total_paid: tier.payout * Payout::from(drawn.len()),
        };

        if summary.shortfall() > 0 {
            tracing::warn!(
                tier = %tier.name,
                configured = summary.configured,
                awarded = summary.awarded,
                "not enough eligible participants left to fill tier"
            );
        } else {
            tracing::info!(tier = %tier.name, awarded = summary.awarded, "tier drawn");
        }

        outcome.winners.extend(drawn.into_iter().map(|Participant { id, tickets }| {
            tracing::debug!(tier = %tier.name, %id, tickets, "winner");
            Winner {
                id,
                tickets,
                tier: tier.name.clone(),
                payout: tier.payout,
            }
        }));
        outcome.tiers.push(summary);
    }
    outcome
}

/// Full draw from a beacon value. Fails before touching the population if the
/// beacon cannot seed the stream.
pub fn draw(beacon: &str, population: &Population, tiers: &[PrizeTier]) -> Result<DrawOutcome, Error> {
    let seed = Seed::from_beacon(beacon)?;
    tracing::info!(%seed, "seed derived from beacon");
    let mut stream = Mulberry32::new(seed);
    Ok(run(population, tiers, &mut stream))
}
