use tracing::warn;

use crate::definition::{DefinitionTree, NamespaceId, OffsetId};
use crate::error::ResolveError;
use crate::types::{FieldRecord, TypeRecord};

/// Lifecycle of a single schema node: `Unresolved -> Resolved | Failed`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NodeState<T> {
    #[default]
    Unresolved,
    Resolved(T),
    Failed(ResolveError),
}

impl<T> NodeState<T> {
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::Unresolved)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn resolved(&self) -> Option<&T> {
        match self {
            Self::Resolved(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ResolveError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Move out of `Unresolved`. Settled states are terminal.
    fn settle(&mut self, outcome: Result<T, ResolveError>) -> bool {
        if !self.is_unresolved() {
            return false;
        }
        *self = match outcome {
            Ok(value) => Self::Resolved(value),
            Err(err) => Self::Failed(err),
        };
        true
    }
}

/// Resolution counts for one pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionSummary {
    pub namespaces_resolved: usize,
    pub namespaces_failed: usize,
    pub offsets_resolved: usize,
    pub offsets_failed: usize,
    pub offsets_unresolved: usize,
}

impl ResolutionSummary {
    pub fn offsets_total(&self) -> usize {
        self.offsets_resolved + self.offsets_failed + self.offsets_unresolved
    }

    pub fn is_complete(&self) -> bool {
        self.offsets_failed == 0 && self.offsets_unresolved == 0 && self.namespaces_failed == 0
    }
}

/// Results of a resolution pass, keyed by node id.
///
/// Borrows matched records from the `TypeDatabase` the pass ran against.
#[derive(Debug, Clone, Default)]
pub struct Resolution<'db> {
    namespaces: Vec<NodeState<&'db TypeRecord>>,
    offsets: Vec<Vec<NodeState<&'db FieldRecord>>>,
}

impl<'db> Resolution<'db> {
    /// All nodes of `tree`, unresolved
    pub fn for_tree(tree: &DefinitionTree) -> Self {
        let flat = tree.flatten();
        Self {
            namespaces: vec![NodeState::Unresolved; flat.len()],
            offsets: flat
                .iter()
                .map(|f| vec![NodeState::Unresolved; f.definition.offsets.len()])
                .collect(),
        }
    }

    pub fn namespace(&self, id: NamespaceId) -> &NodeState<&'db TypeRecord> {
        self.namespaces.get(id.0).unwrap_or(&NodeState::Unresolved)
    }

    pub fn offset(&self, id: OffsetId) -> &NodeState<&'db FieldRecord> {
        self.offsets
            .get(id.namespace.0)
            .and_then(|offsets| offsets.get(id.index))
            .unwrap_or(&NodeState::Unresolved)
    }

    pub fn resolved_type(&self, id: NamespaceId) -> Option<&'db TypeRecord> {
        self.namespace(id).resolved().copied()
    }

    pub fn resolved_field(&self, id: OffsetId) -> Option<&'db FieldRecord> {
        self.offset(id).resolved().copied()
    }

    pub(crate) fn settle_namespace(
        &mut self,
        id: NamespaceId,
        outcome: Result<&'db TypeRecord, ResolveError>,
    ) {
        match self.namespaces.get_mut(id.0) {
            Some(state) => {
                if !state.settle(outcome) {
                    warn!("Namespace #{} already settled; keeping first result", id.0);
                }
            }
            None => warn!("Namespace #{} is not part of this resolution", id.0),
        }
    }

    pub(crate) fn settle_offset(
        &mut self,
        id: OffsetId,
        outcome: Result<&'db FieldRecord, ResolveError>,
    ) {
        match self
            .offsets
            .get_mut(id.namespace.0)
            .and_then(|offsets| offsets.get_mut(id.index))
        {
            Some(state) => {
                if !state.settle(outcome) {
                    warn!(
                        "Offset #{}.{} already settled; keeping first result",
                        id.namespace.0, id.index
                    );
                }
            }
            None => warn!(
                "Offset #{}.{} is not part of this resolution",
                id.namespace.0, id.index
            ),
        }
    }

    /// Every recorded failure, namespaces first, then offsets in tree order
    pub fn failures(&self) -> impl Iterator<Item = &ResolveError> {
        self.namespaces
            .iter()
            .filter_map(NodeState::error)
            .chain(self.offsets.iter().flatten().filter_map(NodeState::error))
    }

    pub fn summary(&self) -> ResolutionSummary {
        let mut summary = ResolutionSummary::default();

        for state in &self.namespaces {
            match state {
                NodeState::Resolved(_) => summary.namespaces_resolved += 1,
                NodeState::Failed(_) => summary.namespaces_failed += 1,
                NodeState::Unresolved => {}
            }
        }

        for state in self.offsets.iter().flatten() {
            match state {
                NodeState::Resolved(_) => summary.offsets_resolved += 1,
                NodeState::Failed(_) => summary.offsets_failed += 1,
                NodeState::Unresolved => summary.offsets_unresolved += 1,
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{NamespaceDefinition, OffsetDefinition};
    use crate::types::ClassKind;

    fn tree() -> DefinitionTree {
        DefinitionTree::new(vec![
            NamespaceDefinition::new("A")
                .offset(OffsetDefinition::new("Foo"))
                .offset(OffsetDefinition::new("Bar")),
        ])
    }

    #[test]
    fn test_for_tree_starts_unresolved() {
        let resolution = Resolution::for_tree(&tree());
        assert!(resolution.namespace(NamespaceId(0)).is_unresolved());
        let summary = resolution.summary();
        assert_eq!(summary.offsets_unresolved, 2);
        assert_eq!(summary.offsets_total(), 2);
        assert!(!summary.is_complete());
    }

    #[test]
    fn test_settled_state_is_never_overwritten() {
        let first = TypeRecord::new("EFT", "Player", ClassKind::Class);
        let second = TypeRecord::new("EFT", "Profile", ClassKind::Class);

        let mut resolution = Resolution::for_tree(&tree());
        resolution.settle_namespace(NamespaceId(0), Ok(&first));
        resolution.settle_namespace(NamespaceId(0), Ok(&second));
        resolution.settle_namespace(
            NamespaceId(0),
            Err(ResolveError::TypeNotFound {
                namespace: "A".to_string(),
                reason: "late".to_string(),
            }),
        );

        assert_eq!(resolution.resolved_type(NamespaceId(0)), Some(&first));
    }

    #[test]
    fn test_failed_offset_stays_failed() {
        let field = FieldRecord::new("_foo", "System.Int32", 0x10);
        let id = OffsetId {
            namespace: NamespaceId(0),
            index: 0,
        };

        let mut resolution = Resolution::for_tree(&tree());
        resolution.settle_offset(
            id,
            Err(ResolveError::FieldNotFound {
                namespace: "A".to_string(),
                offset: "Foo".to_string(),
                reason: "none".to_string(),
            }),
        );
        resolution.settle_offset(id, Ok(&field));

        assert!(resolution.offset(id).is_failed());
        assert!(resolution.resolved_field(id).is_none());
    }

    #[test]
    fn test_failures_in_tree_order() {
        let mut resolution = Resolution::for_tree(&tree());
        let namespace_err = ResolveError::TypeNotFound {
            namespace: "A".to_string(),
            reason: "none".to_string(),
        };
        let offset_err = ResolveError::TypeUnavailable {
            namespace: "A".to_string(),
            offset: "Bar".to_string(),
        };
        resolution.settle_namespace(NamespaceId(0), Err(namespace_err.clone()));
        resolution.settle_offset(
            OffsetId {
                namespace: NamespaceId(0),
                index: 1,
            },
            Err(offset_err.clone()),
        );

        let failures: Vec<_> = resolution.failures().cloned().collect();
        assert_eq!(failures, vec![namespace_err, offset_err]);
    }

    #[test]
    fn test_unknown_ids_read_as_unresolved() {
        let resolution = Resolution::for_tree(&tree());
        assert!(resolution.namespace(NamespaceId(9)).is_unresolved());
        assert!(
            resolution
                .offset(OffsetId {
                    namespace: NamespaceId(0),
                    index: 5
                })
                .is_unresolved()
        );
    }
}
