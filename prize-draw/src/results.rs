use crate::utils::csv::dump_data_to_csv;
use draw_lib::{DrawResult, Payout, Tickets};
use serde::Serialize;
use std::path::Path;

/// One output row. Non-winners have an empty tier and a zero amount.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ResultRecord {
    pub identifier: String,
    pub tickets: Tickets,
    pub tier: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Payout,
}

impl From<DrawResult> for ResultRecord {
    fn from(result: DrawResult) -> Self {
        Self {
            identifier: result.id,
            tickets: result.tickets,
            tier: result.tier.unwrap_or_default(),
            amount: result.amount,
        }
    }
}

/// Writes results in the order given, which is expected to already follow
/// the draw output ordering.
pub fn write_results(results: Vec<DrawResult>, path: &Path) -> Result<(), csv::Error> {
    let records = results
        .into_iter()
        .map(ResultRecord::from)
        .collect::<Vec<_>>();
    dump_data_to_csv(&records, path)?;
    tracing::info!(path = %path.display(), rows = records.len(), "results written");
    Ok(())
}
