//! CSV input for flights and crews.
//!
//! Rows are deserialized into raw records and converted into validated domain
//! types; the first bad row aborts the whole load.

use crate::crew::{Crew, CrewRecord};
use crate::error::{LoadError, RecordError};
use crate::flight::{Flight, FlightRecord};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Arc;

pub fn load_flights(path: &Path) -> Result<Vec<Flight>, LoadError> {
    read_flights(open(path)?, path)
}

pub fn load_crew(path: &Path) -> Result<Vec<Crew>, LoadError> {
    read_crew(open(path)?, path)
}

/// `path` is only used to label errors.
pub fn read_flights<R: io::Read>(reader: R, path: &Path) -> Result<Vec<Flight>, LoadError> {
    read_records::<_, FlightRecord, Flight>(reader, path, |f: &Flight| f.id().clone())
}

pub fn read_crew<R: io::Read>(reader: R, path: &Path) -> Result<Vec<Crew>, LoadError> {
    read_records::<_, CrewRecord, Crew>(reader, path, |c: &Crew| c.id().clone())
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|e| LoadError::Csv {
        path: path.to_path_buf(),
        source: csv::Error::from(e),
    })
}

fn read_records<R, Rec, T>(reader: R, path: &Path, key: fn(&T) -> Arc<str>) -> Result<Vec<T>, LoadError>
where
    R: io::Read,
    Rec: DeserializeOwned,
    T: TryFrom<Rec, Error = RecordError>,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut seen = HashSet::new();
    let mut items = Vec::new();

    for (i, row) in reader.deserialize::<Rec>().enumerate() {
        let row_no = i + 1;
        let record = row.map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let item = T::try_from(record).map_err(|source| LoadError::Record {
            path: path.to_path_buf(),
            row: row_no,
            source,
        })?;
        let id = key(&item);
        if !seen.insert(id.clone()) {
            return Err(LoadError::DuplicateId {
                path: path.to_path_buf(),
                row: row_no,
                id: id.to_string(),
            });
        }
        items.push(item);
    }

    Ok(items)
}
