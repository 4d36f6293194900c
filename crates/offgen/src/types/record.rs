use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    Display,
)]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Struct,
    Enum,
    #[serde(other)]
    Other,
}

/// A single field of a reflected type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub name: String,
    /// Full name of the declared field type
    pub field_type: String,
    /// Byte offset within the owning type
    pub offset: u64,
    #[serde(default)]
    pub is_static: bool,
}

impl FieldRecord {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>, offset: u64) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            offset,
            is_static: false,
        }
    }

    pub fn into_static(mut self) -> Self {
        self.is_static = true;
        self
    }
}

/// A reflected type as reported by the inspector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRecord {
    pub full_name: String,
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub kind: ClassKind,
    #[serde(default)]
    pub fields: Vec<FieldRecord>,
    /// Simple names of implemented interfaces
    #[serde(default)]
    pub interfaces: Vec<String>,
}

impl TypeRecord {
    /// Create a record, deriving the full name from namespace and name.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>, kind: ClassKind) -> Self {
        let namespace = namespace.into();
        let name = name.into();
        let full_name = if namespace.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", namespace, name)
        };

        Self {
            full_name,
            name,
            namespace,
            kind,
            fields: Vec::new(),
            interfaces: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: FieldRecord) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_interface(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    pub fn implements(&self, interface: &str) -> bool {
        self.interfaces.iter().any(|i| i == interface)
    }

    /// An interface with no fields only describes a contract; its offsets
    /// live on an implementing class.
    pub fn is_stateless_interface(&self) -> bool {
        self.kind == ClassKind::Interface && self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_from_namespace() {
        let ty = TypeRecord::new("EFT", "Player", ClassKind::Class);
        assert_eq!(ty.full_name, "EFT.Player");

        let global = TypeRecord::new("", "GClass1234", ClassKind::Class);
        assert_eq!(global.full_name, "GClass1234");
    }

    #[test]
    fn test_unknown_kind_deserializes_as_other() {
        let json = r#"{"full_name":"A.B","name":"B","kind":"Delegate"}"#;
        let ty: TypeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(ty.kind, ClassKind::Other);
        assert!(ty.fields.is_empty());
    }

    #[test]
    fn test_stateless_interface() {
        let iface = TypeRecord::new("EFT", "IHealthController", ClassKind::Interface);
        assert!(iface.is_stateless_interface());

        let with_field = iface
            .clone()
            .with_field(FieldRecord::new("x", "System.Int32", 0x10));
        assert!(!with_field.is_stateless_interface());
    }
}
