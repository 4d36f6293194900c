use serde::Deserialize;

use super::FieldSelector;
use crate::types::FieldRecord;

/// A requested field offset within a namespace
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OffsetDefinition {
    /// Name emitted in the generated header
    pub name: String,
    /// Exact full name of the declared field type
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,
    /// Exact field name
    #[serde(default, rename = "field")]
    pub field_name: Option<String>,
    /// Match fields whose type name carries the anonymous-type prefix
    #[serde(default)]
    pub unknown_type: bool,
    /// Match fields whose name carries the anonymous-field prefix
    #[serde(default)]
    pub unknown_field_name: bool,
    #[serde(default)]
    pub select: FieldSelector,
}

impl OffsetDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn field(mut self, field_name: impl Into<String>) -> Self {
        self.field_name = Some(field_name.into());
        self
    }

    pub fn of_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn unknown_type(mut self) -> Self {
        self.unknown_type = true;
        self
    }

    pub fn unknown_field_name(mut self) -> Self {
        self.unknown_field_name = true;
        self
    }

    pub fn select(mut self, selector: FieldSelector) -> Self {
        self.select = selector;
        self
    }

    pub fn select_with<F>(self, f: F) -> Self
    where
        F: for<'a> Fn(&[&'a FieldRecord]) -> Option<&'a FieldRecord> + Send + Sync + 'static,
    {
        self.select(FieldSelector::custom(f))
    }
}

/// A namespace of the generated header, bound to one reflected type
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamespaceDefinition {
    /// Dump name: emitted as the scope name and used by chain references
    pub name: String,
    /// Exact namespace of the reflected type
    #[serde(default, rename = "namespace")]
    pub namespace_name: Option<String>,
    /// Exact simple name of the reflected type
    #[serde(default, rename = "class")]
    pub class_name: Option<String>,
    /// `Namespace::Field` whose declared type is this namespace's type
    #[serde(default)]
    pub previous_found_field: Option<String>,
    #[serde(default)]
    pub offsets: Vec<OffsetDefinition>,
    #[serde(default)]
    pub namespaces: Vec<NamespaceDefinition>,
}

impl NamespaceDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn in_namespace(mut self, namespace_name: impl Into<String>) -> Self {
        self.namespace_name = Some(namespace_name.into());
        self
    }

    pub fn class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn from_field(mut self, reference: impl Into<String>) -> Self {
        self.previous_found_field = Some(reference.into());
        self
    }

    pub fn offset(mut self, offset: OffsetDefinition) -> Self {
        self.offsets.push(offset);
        self
    }

    pub fn child(mut self, namespace: NamespaceDefinition) -> Self {
        self.namespaces.push(namespace);
        self
    }

    /// Parsed previous-found-field reference, if present and well formed
    pub fn chain_reference(&self) -> Option<(&str, &str)> {
        self.previous_found_field
            .as_deref()
            .and_then(parse_chain_reference)
    }
}

/// Split `Namespace::Field` at the last separator.
///
/// Both halves must be non-empty.
pub fn parse_chain_reference(reference: &str) -> Option<(&str, &str)> {
    let (namespace, field) = reference.rsplit_once("::")?;
    if namespace.is_empty() || field.is_empty() {
        return None;
    }
    Some((namespace, field))
}
