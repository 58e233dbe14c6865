use crate::utils::csv::load_data_from_csv;
use draw_lib::{Participant, Population};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Population(#[from] draw_lib::Error),
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SpendRow {
    #[serde(alias = "Identifier", alias = "id")]
    pub identifier: String,
    #[serde(alias = "Spend", with = "rust_decimal::serde::str")]
    pub spend: Decimal,
}

/// Participants in row order, one ticket per full 100 spent.
pub fn population_from_rows(rows: Vec<SpendRow>) -> Result<Population, Error> {
    let participants = rows
        .into_iter()
        .map(|SpendRow { identifier, spend }| Participant::from_spend(identifier, spend))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Population::try_from(participants)?)
}

pub fn load_population(path: &Path) -> Result<Population, Error> {
    let rows = load_data_from_csv::<SpendRow, b','>(path)?;
    let population = population_from_rows(rows)?;
    tracing::info!(
        path = %path.display(),
        participants = population.len(),
        tickets = population.total_tickets(),
        "population loaded"
    );
    Ok(population)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    fn csv_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_in_file_order() {
        let file = csv_file("identifier,spend\nzoe,250.50\nadam,99.99\nmia,10000\n");
        let population = load_population(file.path()).unwrap();
        assert_eq!(
            population.participants(),
            &[
                Participant::new("zoe", 2),
                Participant::new("adam", 0),
                Participant::new("mia", 100),
            ]
        );
    }

    #[test]
    fn accepts_capitalised_headers() {
        let file = csv_file("Identifier,Spend\nzoe, 300\n");
        let population = load_population(file.path()).unwrap();
        assert_eq!(population.participants(), &[Participant::new("zoe", 3)]);
    }

    #[test]
    fn negative_spend_is_rejected() {
        let rows = vec![SpendRow {
            identifier: "zoe".into(),
            spend: dec!(-100),
        }];
        assert!(matches!(
            population_from_rows(rows),
            Err(Error::Population(draw_lib::Error::NegativeSpend { id, .. })) if id == "zoe"
        ));
    }

    #[test]
    fn huge_spend_is_out_of_range_not_negative() {
        let file = csv_file("identifier,spend\nwhale,79228162514264337593543950335\n");
        assert!(matches!(
            load_population(file.path()),
            Err(Error::Population(draw_lib::Error::SpendOutOfRange { id, .. })) if id == "whale"
        ));
    }

    #[test]
    fn duplicate_identifiers_are_rejected() {
        let file = csv_file("identifier,spend\nzoe,100\nzoe,200\n");
        assert!(matches!(
            load_population(file.path()),
            Err(Error::Population(draw_lib::Error::DuplicateParticipant(id))) if id == "zoe"
        ));
    }

    #[test]
    fn malformed_spend_is_a_csv_error() {
        let file = csv_file("identifier,spend\nzoe,lots\n");
        assert!(matches!(load_population(file.path()), Err(Error::Csv(_))));
    }
}
