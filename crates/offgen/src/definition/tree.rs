use std::collections::{HashMap, HashSet};
use std::collections::hash_map::Entry;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::{MatchMarkers, NamespaceDefinition, OffsetDefinition};
use crate::error::{Error, Result};

/// Pre-order position of a namespace in its tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamespaceId(pub usize);

/// An offset, addressed by its namespace and list position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OffsetId {
    pub namespace: NamespaceId,
    pub index: usize,
}

/// Where a namespace sits among its siblings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub depth: usize,
    pub is_last: bool,
}

/// Callbacks for [`DefinitionTree::walk`]
pub trait TreeVisitor<'a> {
    fn enter(&mut self, id: NamespaceId, namespace: &'a NamespaceDefinition, position: Position);

    fn leave(&mut self, _id: NamespaceId, _namespace: &'a NamespaceDefinition, _position: Position) {
    }
}

/// A namespace together with its traversal metadata
#[derive(Debug, Clone, Copy)]
pub struct FlatNamespace<'a> {
    pub id: NamespaceId,
    pub definition: &'a NamespaceDefinition,
    pub depth: usize,
}

impl<'a> FlatNamespace<'a> {
    pub fn offsets(self) -> impl Iterator<Item = (OffsetId, &'a OffsetDefinition)> {
        let namespace = self.id;
        self.definition
            .offsets
            .iter()
            .enumerate()
            .map(move |(index, offset)| (OffsetId { namespace, index }, offset))
    }
}

struct Flattener<'a> {
    out: Vec<FlatNamespace<'a>>,
}

impl<'a> TreeVisitor<'a> for Flattener<'a> {
    fn enter(&mut self, id: NamespaceId, definition: &'a NamespaceDefinition, position: Position) {
        self.out.push(FlatNamespace {
            id,
            definition,
            depth: position.depth,
        });
    }
}

/// The complete, immutable schema
#[derive(Debug, Clone, Default)]
pub struct DefinitionTree {
    roots: Vec<NamespaceDefinition>,
}

impl DefinitionTree {
    pub fn new(roots: Vec<NamespaceDefinition>) -> Self {
        Self { roots }
    }

    /// Load root namespaces from a JSON definitions file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let roots: Vec<NamespaceDefinition> = serde_json::from_str(&content)?;
        debug!(
            "Loaded {} root namespaces from {}",
            roots.len(),
            path.as_ref().display()
        );
        Ok(Self::new(roots))
    }

    pub fn roots(&self) -> &[NamespaceDefinition] {
        &self.roots
    }

    /// Visit every namespace in pre-order.
    ///
    /// `enter` is called before a namespace's children, `leave` after them.
    /// Ids are handed out in `enter` order.
    pub fn walk<'a, V: TreeVisitor<'a>>(&'a self, visitor: &mut V) {
        let mut next_id = 0;
        walk_level(&self.roots, 0, &mut next_id, visitor);
    }

    /// All namespaces in traversal order; `flatten()[i].id == NamespaceId(i)`
    pub fn flatten(&self) -> Vec<FlatNamespace<'_>> {
        let mut flattener = Flattener { out: Vec::new() };
        self.walk(&mut flattener);
        flattener.out
    }

    /// Dump name to the first namespace carrying it
    pub fn name_index(&self) -> HashMap<&str, NamespaceId> {
        let mut index = HashMap::new();
        for flat in self.flatten() {
            match index.entry(flat.definition.name.as_str()) {
                Entry::Vacant(slot) => {
                    slot.insert(flat.id);
                }
                Entry::Occupied(_) => {
                    warn!(
                        "Duplicate namespace name '{}'; chain references resolve to the first one",
                        flat.definition.name
                    );
                }
            }
        }
        index
    }

    pub fn namespace_count(&self) -> usize {
        self.flatten().len()
    }

    pub fn offset_count(&self) -> usize {
        self.flatten()
            .iter()
            .map(|flat| flat.definition.offsets.len())
            .sum()
    }

    /// Reject malformed schemas.
    ///
    /// Empty names, unparseable chain references and duplicate offset names
    /// are fatal. Redundant or conflicting constraints only warn: a chain
    /// reference overrides namespace/class filters, and an unknown flag
    /// overrides the explicit value on the same dimension.
    pub fn validate(&self, markers: &MatchMarkers) -> Result<()> {
        let mut problems = Vec::new();

        for flat in self.flatten() {
            let ns = flat.definition;

            if ns.name.is_empty() {
                problems.push(format!("namespace #{} has an empty name", flat.id.0));
            }

            if let Some(reference) = &ns.previous_found_field {
                if ns.chain_reference().is_none() {
                    problems.push(format!(
                        "{}: previous found field '{}' is not of the form Namespace::Field",
                        ns.name, reference
                    ));
                }
                if ns.namespace_name.is_some() || ns.class_name.is_some() {
                    warn!(
                        "{}: namespace/class filters are ignored, the type comes from {}",
                        ns.name, reference
                    );
                }
            }

            let mut seen = HashSet::new();
            for offset in &ns.offsets {
                let qualified = format!("{}::{}", ns.name, offset.name);

                if offset.name.is_empty() {
                    problems.push(format!("{}: offset with an empty name", ns.name));
                } else if !seen.insert(offset.name.as_str()) {
                    problems.push(format!("{}: duplicate offset name", qualified));
                }

                if let Some(type_name) = &offset.type_name {
                    if offset.unknown_type {
                        warn!("{}: unknown_type is set, type '{}' is ignored", qualified, type_name);
                    } else if markers.is_anonymous_type(type_name) {
                        warn!(
                            "{}: type '{}' is anonymous and can only match through unknown_type",
                            qualified, type_name
                        );
                    }
                }

                if let Some(field_name) = &offset.field_name {
                    if offset.unknown_field_name {
                        warn!(
                            "{}: unknown_field_name is set, field '{}' is ignored",
                            qualified, field_name
                        );
                    } else if markers.is_anonymous_field(field_name) {
                        warn!(
                            "{}: field '{}' is anonymous and can only match through unknown_field_name",
                            qualified, field_name
                        );
                    }
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidDefinition(problems.join("; ")))
        }
    }
}

fn walk_level<'a, V: TreeVisitor<'a>>(
    level: &'a [NamespaceDefinition],
    depth: usize,
    next_id: &mut usize,
    visitor: &mut V,
) {
    let last = level.len().saturating_sub(1);
    for (i, namespace) in level.iter().enumerate() {
        let id = NamespaceId(*next_id);
        *next_id += 1;

        let position = Position {
            depth,
            is_last: i == last,
        };
        visitor.enter(id, namespace, position);
        walk_level(&namespace.namespaces, depth + 1, next_id, visitor);
        visitor.leave(id, namespace, position);
    }
}
