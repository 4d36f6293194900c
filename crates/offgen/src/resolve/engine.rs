use std::collections::HashMap;

use tracing::{debug, error, info};

use super::Resolution;
use crate::definition::{
    DefinitionTree, FlatNamespace, MatchMarkers, NamespaceDefinition, NamespaceId,
    OffsetDefinition, parse_chain_reference,
};
use crate::error::ResolveError;
use crate::types::{FieldRecord, TypeDatabase, TypeRecord};

/// Resolves a definition tree against a type database
pub struct Resolver<'a> {
    db: &'a TypeDatabase,
    tree: &'a DefinitionTree,
    markers: &'a MatchMarkers,
    flat: Vec<FlatNamespace<'a>>,
    index: HashMap<&'a str, NamespaceId>,
}

impl<'a> Resolver<'a> {
    pub fn new(db: &'a TypeDatabase, tree: &'a DefinitionTree, markers: &'a MatchMarkers) -> Self {
        Self {
            db,
            tree,
            markers,
            flat: tree.flatten(),
            index: tree.name_index(),
        }
    }

    /// Resolve every namespace and offset in pre-order.
    ///
    /// Each node ends up `Resolved` or `Failed`.
    pub fn run(&self) -> Resolution<'a> {
        let mut resolution = Resolution::for_tree(self.tree);

        for &flat in &self.flat {
            let ns = flat.definition;

            match self.resolve_type(ns, &resolution) {
                Ok(ty) => {
                    debug!("{} -> {}", ns.name, ty.full_name);
                    resolution.settle_namespace(flat.id, Ok(ty));

                    for (id, offset) in flat.offsets() {
                        let outcome = self.resolve_field(ns, ty, offset);
                        match &outcome {
                            Ok(field) => {
                                info!("{}::{} = 0x{:X};", ns.name, offset.name, field.offset)
                            }
                            Err(err) => error!("{}", err),
                        }
                        resolution.settle_offset(id, outcome);
                    }
                }
                Err(err) => {
                    error!("{}", err);
                    resolution.settle_namespace(flat.id, Err(err));

                    for (id, offset) in flat.offsets() {
                        resolution.settle_offset(
                            id,
                            Err(ResolveError::TypeUnavailable {
                                namespace: ns.name.clone(),
                                offset: offset.name.clone(),
                            }),
                        );
                    }
                }
            }
        }

        let summary = resolution.summary();
        info!(
            "Resolved {}/{} offsets ({} namespaces failed)",
            summary.offsets_resolved,
            summary.offsets_total(),
            summary.namespaces_failed
        );

        resolution
    }

    /// Find the reflected type a namespace is bound to
    pub fn resolve_type(
        &self,
        ns: &NamespaceDefinition,
        resolution: &Resolution<'a>,
    ) -> Result<&'a TypeRecord, ResolveError> {
        if let Some(reference) = &ns.previous_found_field {
            return self.resolve_via_previous_field(ns, reference, resolution);
        }

        self.db
            .classes()
            .filter(|ty| {
                ns.namespace_name
                    .as_deref()
                    .is_none_or(|namespace| ty.namespace == namespace)
            })
            .find(|ty| {
                ns.class_name
                    .as_deref()
                    .is_none_or(|class| ty.name == class)
            })
            .ok_or_else(|| ResolveError::TypeNotFound {
                namespace: ns.name.clone(),
                reason: format!(
                    "no class matches namespace={} class={}",
                    ns.namespace_name.as_deref().unwrap_or("*"),
                    ns.class_name.as_deref().unwrap_or("*")
                ),
            })
    }

    /// Use the declared type of an already resolved field
    fn resolve_via_previous_field(
        &self,
        ns: &NamespaceDefinition,
        reference: &str,
        resolution: &Resolution<'a>,
    ) -> Result<&'a TypeRecord, ResolveError> {
        info!(
            "Finding type for {} from a previous found field {}",
            ns.name, reference
        );

        let unresolved = |reason: String| ResolveError::ChainTargetUnresolved {
            namespace: ns.name.clone(),
            reference: reference.to_string(),
            reason,
        };

        let (namespace_ref, field_ref) = parse_chain_reference(reference)
            .ok_or_else(|| unresolved("expected Namespace::Field".to_string()))?;

        let &target_id = self
            .index
            .get(namespace_ref)
            .ok_or_else(|| unresolved(format!("no namespace named '{}'", namespace_ref)))?;

        let target = self
            .flat
            .get(target_id.0)
            .ok_or_else(|| unresolved(format!("no namespace named '{}'", namespace_ref)))?;

        let (offset_id, _) = target
            .offsets()
            .find(|(_, offset)| offset.name == field_ref)
            .ok_or_else(|| {
                unresolved(format!("'{}' has no offset '{}'", namespace_ref, field_ref))
            })?;

        let field = resolution.resolved_field(offset_id).ok_or_else(|| {
            unresolved(format!(
                "{}::{} has not been resolved",
                namespace_ref, field_ref
            ))
        })?;

        let declared = self
            .db
            .by_full_name(&field.field_type)
            .ok_or_else(|| ResolveError::TypeNotFound {
                namespace: ns.name.clone(),
                reason: format!("declared type '{}' is not in the database", field.field_type),
            })?;

        if declared.is_stateless_interface() {
            debug!(
                "{} is an interface without fields, looking for an implementor",
                declared.full_name
            );
            return self
                .db
                .first_implementor(&declared.name)
                .ok_or_else(|| ResolveError::TypeNotFound {
                    namespace: ns.name.clone(),
                    reason: format!("no class implements interface '{}'", declared.name),
                });
        }

        Ok(declared)
    }

    /// Pick the field an offset definition refers to
    pub fn resolve_field(
        &self,
        ns: &NamespaceDefinition,
        ty: &'a TypeRecord,
        offset: &OffsetDefinition,
    ) -> Result<&'a FieldRecord, ResolveError> {
        let candidates: Vec<&'a FieldRecord> = ty
            .fields
            .iter()
            .filter(|field| self.matches_type(offset, field))
            .filter(|field| self.matches_name(offset, field))
            .collect();

        let not_found = |reason: String| ResolveError::FieldNotFound {
            namespace: ns.name.clone(),
            offset: offset.name.clone(),
            reason,
        };

        if candidates.is_empty() {
            return Err(not_found(format!(
                "no field of {} passes the filters",
                ty.full_name
            )));
        }

        offset.select.select(&candidates).ok_or_else(|| {
            not_found(format!(
                "selector {:?} rejected {} candidates",
                offset.select,
                candidates.len()
            ))
        })
    }

    fn matches_type(&self, offset: &OffsetDefinition, field: &FieldRecord) -> bool {
        if offset.unknown_type {
            self.markers.is_anonymous_type(&field.field_type)
        } else if let Some(type_name) = &offset.type_name {
            field.field_type == *type_name && !self.markers.is_anonymous_type(&field.field_type)
        } else {
            true
        }
    }

    fn matches_name(&self, offset: &OffsetDefinition, field: &FieldRecord) -> bool {
        if offset.unknown_field_name {
            self.markers.is_anonymous_field(&field.name)
        } else if let Some(field_name) = &offset.field_name {
            field.name == *field_name && !self.markers.is_anonymous_field(&field.name)
        } else {
            true
        }
    }
}

/// Convenience wrapper: build a resolver and run it
pub fn resolve<'a>(
    db: &'a TypeDatabase,
    tree: &'a DefinitionTree,
    markers: &'a MatchMarkers,
) -> Resolution<'a> {
    Resolver::new(db, tree, markers).run()
}
