use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;

pub fn load_data_from_csv<T: DeserializeOwned, const DELIMITER: u8>(
    file_path: &Path,
) -> Result<Vec<T>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .delimiter(DELIMITER)
        .from_path(file_path)?;
    // rows come back in file order, which the draw relies on
    reader.deserialize().collect()
}

pub fn dump_data_to_csv<T: Serialize>(data: &[T], file_path: &Path) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(file_path)?;
    for entry in data {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    Ok(())
}
