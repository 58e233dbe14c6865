use crate::Error;
use rust_decimal::{prelude::ToPrimitive, Decimal};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub type ParticipantId = String;
pub type Tickets = u64;
pub type Payout = Decimal;

/// Spend needed for a single ticket.
pub const SPEND_PER_TICKET: u64 = 100;

/// Totals above this can no longer be scaled exactly by a value in [0, 1).
pub const MAX_TOTAL_TICKETS: Tickets = 1 << 53;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Participant {
    pub id: ParticipantId,
    pub tickets: Tickets,
}

impl Participant {
    pub fn new(id: impl Into<ParticipantId>, tickets: Tickets) -> Self {
        Self {
            id: id.into(),
            tickets,
        }
    }

    /// One ticket for every full `SPEND_PER_TICKET` spent.
    pub fn from_spend(id: impl Into<ParticipantId>, spend: Decimal) -> Result<Self, Error> {
        let id = id.into();
        if spend.is_sign_negative() && !spend.is_zero() {
            return Err(Error::NegativeSpend { id, spend });
        }
        match (spend / Decimal::from(SPEND_PER_TICKET)).floor().to_u64() {
            Some(tickets) => Ok(Self::new(id, tickets)),
            None => Err(Error::SpendOutOfRange { id, spend }),
        }
    }

    pub fn is_eligible(&self) -> bool {
        self.tickets > 0
    }
}

/// Participants in load order. The order takes part in the draw and is never
/// changed after construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Population(Vec<Participant>);

impl Population {
    pub fn new(participants: Vec<Participant>) -> Result<Self, Error> {
        let mut seen = HashSet::with_capacity(participants.len());
        for p in &participants {
            if !seen.insert(p.id.as_str()) {
                return Err(Error::DuplicateParticipant(p.id.clone()));
            }
        }

        participants
            .iter()
            .try_fold(0u64, |acc, p| acc.checked_add(p.tickets))
            .filter(|total| *total <= MAX_TOTAL_TICKETS)
            .ok_or(Error::TicketOverflow {
                max: MAX_TOTAL_TICKETS,
            })?;

        Ok(Self(participants))
    }

    pub fn participants(&self) -> &[Participant] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total_tickets(&self) -> Tickets {
        self.0.iter().map(|p| p.tickets).sum()
    }

    /// Members with at least one ticket, load order preserved.
    pub fn eligible(&self) -> Vec<Participant> {
        self.0.iter().filter(|p| p.is_eligible()).cloned().collect()
    }
}

impl TryFrom<Vec<Participant>> for Population {
    type Error = Error;

    fn try_from(participants: Vec<Participant>) -> Result<Self, Self::Error> {
        Self::new(participants)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PrizeTier {
    pub name: String,
    pub winners: usize,
    pub payout: Payout,
}

impl PrizeTier {
    pub fn new(name: impl Into<String>, winners: usize, payout: Payout) -> Result<Self, Error> {
        let tier = Self {
            name: name.into(),
            winners,
            payout,
        };
        tier.validate()?;
        Ok(tier)
    }

    pub fn validate(&self) -> Result<(), Error> {
        let invalid = |reason| {
            Err(Error::InvalidTier {
                name: self.name.clone(),
                reason,
            })
        };
        if self.name.trim().is_empty() {
            return invalid("name must not be empty");
        }
        if self.winners == 0 {
            return invalid("winner count must be positive");
        }
        if self.payout.is_sign_negative() && !self.payout.is_zero() {
            return invalid("payout must not be negative");
        }
        Ok(())
    }
}

/// Grand, major and minor prizes as used for the official draw.
pub fn reference_tiers() -> Vec<PrizeTier> {
    vec![
        PrizeTier {
            name: "Grand Prize".to_owned(),
            winners: 5,
            payout: dec!(2500),
        },
        PrizeTier {
            name: "Major Prize".to_owned(),
            winners: 20,
            payout: dec!(1125),
        },
        PrizeTier {
            name: "Minor Prize".to_owned(),
            winners: 50,
            payout: dec!(300),
        },
    ]
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DrawResult {
    pub id: ParticipantId,
    pub tickets: Tickets,
    pub tier: Option<String>,
    pub amount: Payout,
}

impl DrawResult {
    pub fn is_winner(&self) -> bool {
        self.tier.is_some()
    }
}

#[cfg(any(test, feature = "proptest"))]
pub mod arbitrary {
    use super::*;
    use proptest::prelude::*;

    /// Populations with unique identifiers and a fair share of zero weights.
    pub fn population(max_len: usize, max_tickets: Tickets) -> impl Strategy<Value = Population> {
        proptest::collection::vec(
            prop_oneof![1 => Just(0 as Tickets), 4 => 1..=max_tickets],
            0..=max_len,
        )
        .prop_map(|weights| {
            Population(
                weights
                    .into_iter()
                    .enumerate()
                    .map(|(i, tickets)| Participant::new(format!("participant-{}", i), tickets))
                    .collect(),
            )
        })
    }

    pub fn tiers(max_tiers: usize, max_winners: usize) -> impl Strategy<Value = Vec<PrizeTier>> {
        proptest::collection::vec((1..=max_winners, 0u64..10_000), 1..=max_tiers).prop_map(
            |tiers| {
                tiers
                    .into_iter()
                    .enumerate()
                    .map(|(i, (winners, payout))| PrizeTier {
                        name: format!("tier-{}", i),
                        winners,
                        payout: Decimal::from(payout),
                    })
                    .collect()
            },
        )
    }
}
