use draw_lib::{reference_tiers, PrizeTier};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Tier(#[from] draw_lib::Error),

    #[error("tier configuration is empty")]
    NoTiers,
}

/// Tiers from a json list, or the reference tiers when no file is given.
/// Order in the file is the draw order.
pub fn load_tiers(path: Option<&Path>) -> Result<Vec<PrizeTier>, Error> {
    let tiers = match path {
        Some(path) => parse_tiers(&std::fs::read_to_string(path)?)?,
        None => reference_tiers(),
    };
    for tier in &tiers {
        tracing::debug!(tier = %tier.name, winners = tier.winners, payout = %tier.payout, "prize tier");
    }
    Ok(tiers)
}

pub fn parse_tiers(json: &str) -> Result<Vec<PrizeTier>, Error> {
    let tiers: Vec<PrizeTier> = serde_json::from_str(json)?;
    if tiers.is_empty() {
        return Err(Error::NoTiers);
    }
    for tier in &tiers {
        tier.validate()?;
    }
    Ok(tiers)
}
