//! Dump command implementation.

use std::path::{Path, PathBuf};

use anyhow::Result;
use offgen::{
    ProcessTarget, SnapshotFile, TypeDatabase, TypeProvider, format_type_dump, save_type_dump,
};

use super::required;

/// Write the type listing of a snapshot to a file or stdout
pub fn run(
    snapshot: Option<PathBuf>,
    process_name: &str,
    root_marker: &str,
    output: Option<&Path>,
    filter: Option<&str>,
) -> Result<()> {
    let snapshot = required(snapshot, "type snapshot", "--snapshot")?;

    let types = SnapshotFile::new(snapshot).produce(root_marker, &ProcessTarget::new(process_name))?;
    let types = match filter {
        Some(filter) => types
            .into_iter()
            .filter(|ty| ty.full_name.contains(filter))
            .collect(),
        None => types,
    };
    let db = TypeDatabase::new(types);

    if let Some(output_path) = output {
        save_type_dump(output_path, &db)?;
        eprintln!("Dumped {} types to: {}", db.len(), output_path.display());
    } else {
        print!("{}", format_type_dump(&db));
    }

    Ok(())
}
