//! JSON settings files

use crate::errors::UtilError;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Deserialize a JSON settings file into `T`
pub fn read_json_file<T, P>(path: P) -> Result<T, UtilError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    let value = serde_json::from_reader(BufReader::new(file))?;
    Ok(value)
}
