// Rust guideline compliant 2026-10-19

//! Candidate snapshot files.
//!
//! A snapshot is a JSONL file with one `ServiceEntity` per line, as handed
//! over by the data source. The engine only ever reads it as a whole.

use crate::{Result, ServiceEntity};
use std::path::Path;

/// Loads every entity from a JSONL snapshot.
///
/// A missing file yields an empty list. Malformed lines are skipped with a
/// warning so one bad record does not blank a whole category.
///
/// # Arguments
///
/// * `path` - Path to the snapshot file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - An entity fails validation
pub fn load_entities(path: &Path) -> Result<Vec<ServiceEntity>> {
    use std::fs::File;
    use std::io::{BufRead, BufReader};

    if !path.exists() {
        return Ok(Vec::new());
    }

    let reader = BufReader::new(File::open(path)?);
    let mut entities = Vec::new();
    let mut skipped = 0usize;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<ServiceEntity>(&line) {
            Ok(entity) => {
                entity.validate()?;
                entities.push(entity);
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    line = line_no + 1,
                    error = %e,
                    "skipping malformed entity"
                );
                skipped += 1;
            }
        }
    }

    tracing::debug!(
        path = %path.display(),
        loaded = entities.len(),
        skipped,
        "snapshot loaded"
    );
    Ok(entities)
}

/// Writes entities to a JSONL snapshot atomically.
///
/// # Errors
///
/// Returns an error if:
/// - Any entity fails validation
/// - The file cannot be written or renamed into place
pub fn save_entities(path: &Path, entities: &[ServiceEntity]) -> Result<()> {
    use std::fs::File;
    use std::io::Write;

    for entity in entities {
        entity.validate()?;
    }

    let temp_path = path.with_extension("jsonl.tmp");
    {
        let mut file = File::create(&temp_path)?;
        for entity in entities {
            let json = serde_json::to_string(entity)?;
            file.write_all(json.as_bytes())?;
            file.write_all(b"\n")?;
        }
        file.sync_all()?;
    }

    std::fs::rename(&temp_path, path)?;
    Ok(())
}
