use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("beacon value is missing or blank")]
    MissingBeacon,
    #[error("participant `{id}` has a negative spend of {spend}")]
    NegativeSpend { id: String, spend: Decimal },
    #[error("participant `{id}` spend of {spend} buys more tickets than can be counted")]
    SpendOutOfRange { id: String, spend: Decimal },
    #[error("participant `{0}` appears more than once in the population")]
    DuplicateParticipant(String),
    #[error("total tickets overflowed the exactly representable range (max {max})")]
    TicketOverflow { max: u64 },
    #[error("invalid prize tier `{name}`: {reason}")]
    InvalidTier { name: String, reason: &'static str },
}
