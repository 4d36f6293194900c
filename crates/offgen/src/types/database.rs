use std::collections::HashMap;

use tracing::debug;

use super::{ClassKind, TypeRecord};

/// Immutable, deterministically ordered snapshot of reflected types.
///
/// Records are stable-sorted by full name on construction. Records sharing a
/// full name keep the relative order the provider reported them in. All
/// lookups that return "the first" record refer to this order.
#[derive(Debug, Clone, Default)]
pub struct TypeDatabase {
    types: Vec<TypeRecord>,
    by_full_name: HashMap<String, usize>,
}

impl TypeDatabase {
    pub fn new(mut types: Vec<TypeRecord>) -> Self {
        types.sort_by(|a, b| a.full_name.cmp(&b.full_name));

        let mut by_full_name = HashMap::with_capacity(types.len());
        for (index, ty) in types.iter().enumerate() {
            by_full_name.entry(ty.full_name.clone()).or_insert(index);
        }

        debug!(
            "Built type database: {} types, {} unique names",
            types.len(),
            by_full_name.len()
        );

        Self {
            types,
            by_full_name,
        }
    }

    /// All types, sorted by full name
    pub fn all(&self) -> &[TypeRecord] {
        &self.types
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn by_full_name(&self, full_name: &str) -> Option<&TypeRecord> {
        self.by_full_name
            .get(full_name)
            .map(|&index| &self.types[index])
    }

    pub fn classes(&self) -> impl Iterator<Item = &TypeRecord> {
        self.types.iter().filter(|t| t.kind == ClassKind::Class)
    }

    /// First class implementing the interface with the given simple name
    pub fn first_implementor(&self, interface: &str) -> Option<&TypeRecord> {
        self.classes().find(|t| t.implements(interface))
    }
}

impl From<Vec<TypeRecord>> for TypeDatabase {
    fn from(types: Vec<TypeRecord>) -> Self {
        Self::new(types)
    }
}
