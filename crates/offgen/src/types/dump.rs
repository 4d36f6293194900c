use std::fs;
use std::path::Path;

use tracing::info;

use super::TypeDatabase;
use crate::error::Result;

/// Render every type in the database as an indented listing.
///
/// ```text
/// [Class] EFT.Player : IPlayer
///     [5B0] _profile : EFT.Profile
///     [static] Instance : EFT.Player
/// ```
pub fn format_type_dump(db: &TypeDatabase) -> String {
    let mut out = String::new();

    for ty in db.all() {
        out.push_str(&format!("[{}] {}", ty.kind, ty.full_name));
        if !ty.interfaces.is_empty() {
            out.push_str(&format!(" : {}", ty.interfaces.join(", ")));
        }
        out.push('\n');

        for field in &ty.fields {
            let offset = if field.is_static {
                "static".to_string()
            } else {
                format!("{:X}", field.offset)
            };
            out.push_str(&format!(
                "    [{}] {} : {}\n",
                offset, field.name, field.field_type
            ));
        }
    }

    out
}

pub fn save_type_dump<P: AsRef<Path>>(path: P, db: &TypeDatabase) -> Result<()> {
    fs::write(&path, format_type_dump(db))?;
    info!(
        "Dumped {} types to {}",
        db.len(),
        path.as_ref().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClassKind, FieldRecord, TypeRecord};

    #[test]
    fn test_format_type_dump() {
        let db = TypeDatabase::new(vec![
            TypeRecord::new("EFT", "Player", ClassKind::Class)
                .with_interface("IPlayer")
                .with_field(FieldRecord::new("_profile", "EFT.Profile", 0x5B0))
                .with_field(FieldRecord::new("Instance", "EFT.Player", 0).into_static()),
            TypeRecord::new("EFT", "IPlayer", ClassKind::Interface),
        ]);

        let dump = format_type_dump(&db);
        assert_eq!(
            dump,
            "[Interface] EFT.IPlayer\n\
             [Class] EFT.Player : IPlayer\n    \
             [5B0] _profile : EFT.Profile\n    \
             [static] Instance : EFT.Player\n"
        );
    }
}
