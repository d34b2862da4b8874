//! Binding declarations to schema nodes.
//!
//! Binding locates a declaration's node, checks its kind, checks the
//! requirement ledger for extensions, checks that every structurally
//! referenced type exists, and then fixes the node on the declaration. It
//! runs once per declaration; the bound node never changes afterwards.

use std::sync::Arc;

use skein_foundation::{Error, NodeKind, Result};
use skein_sdl::{SchemaDocument, TypeNode, is_builtin_scalar};
use tracing::debug;

use crate::config::BindConfig;
use crate::declaration::{BoundNode, Declaration, NodeSource};
use crate::dependencies::dependencies;

/// The documents a declaration may resolve names against.
struct Sources<'a> {
    document: &'a SchemaDocument,
    fragment: Option<&'a SchemaDocument>,
}

impl<'a> Sources<'a> {
    /// Finds the declaration's own node, fragment first.
    fn locate(&self, name: &str) -> Option<(&'a TypeNode, NodeSource)> {
        self.fragment
            .and_then(|fragment| fragment.find(name))
            .map(|node| (node, NodeSource::Fragment))
            .or_else(|| {
                self.document
                    .find(name)
                    .map(|node| (node, NodeSource::Document))
            })
    }

    /// Returns the kind of a name's original definition, if any source defines it.
    fn definition_kind(&self, name: &str) -> Option<NodeKind> {
        if is_builtin_scalar(name) {
            return Some(NodeKind::ScalarDefinition);
        }
        self.fragment
            .and_then(|fragment| fragment.definition_of(name))
            .or_else(|| self.document.definition_of(name))
            .map(TypeNode::kind)
    }
}

impl Declaration {
    /// Binds this declaration with the default configuration.
    ///
    /// # Errors
    /// See [`Declaration::bind_with`].
    pub fn bind(&self, document: &SchemaDocument) -> Result<&BoundNode> {
        self.bind_with(document, &BindConfig::default())
    }

    /// Binds this declaration to its node.
    ///
    /// The node is looked up in the inline fragment first, then in the
    /// shared document. Within one source a definition is preferred over
    /// extensions of the same name.
    ///
    /// # Errors
    /// - `AlreadyBound` if the declaration was bound before
    /// - `ParseError` if the inline fragment is not valid SDL
    /// - `MissingDefinition` if no source has a node with the name
    /// - `WrongNodeKind` if the node's kind does not fit the category
    /// - `MissingRequirement` / `WrongRequirementKind` if an extension's
    ///   base type is missing from, or mis-kinded in, the ledger
    /// - `UndeclaredDependency` if a referenced type is defined nowhere
    pub fn bind_with(&self, document: &SchemaDocument, config: &BindConfig) -> Result<&BoundNode> {
        if self.is_bound() {
            return Err(Error::already_bound(&self.name));
        }

        let fragment = self
            .fragment
            .as_deref()
            .map(SchemaDocument::parse)
            .transpose()?
            .map(Arc::new);
        let sources = Sources {
            document,
            fragment: fragment.as_deref(),
        };

        let (node, source) = sources
            .locate(&self.name)
            .ok_or_else(|| Error::missing_definition(&self.name, &self.name))?;

        if !self.category.accepts(node.kind()) {
            return Err(Error::wrong_node_kind(
                &self.name,
                self.category.definition_kind(),
                node.kind(),
            ));
        }

        if node.is_extension() {
            self.check_extension_base(node)?;
        }
        self.check_dependencies(node, &sources, config)?;
        if config.strict_member_kinds {
            check_member_kinds(node, &sources)?;
        }

        let bound = BoundNode {
            node: node.clone(),
            source,
            fragment: fragment.clone(),
        };
        self.bound
            .set(bound)
            .map_err(|_| Error::already_bound(&self.name))?;

        debug!(
            declaration = %self.name,
            kind = %node.kind(),
            source = ?source,
            "declaration bound"
        );
        self.bound
            .get()
            .ok_or_else(|| Error::internal(format!("'{}' lost its bound node", self.name)))
    }

    /// An extension must list its own base type with the base definition kind.
    fn check_extension_base(&self, node: &TypeNode) -> Result<()> {
        let expected = node.kind().base();
        match self.requirements.get(node.name()) {
            None => Err(Error::missing_requirement(&self.name, node.name())),
            Some(found) if found != expected => Err(Error::wrong_requirement_kind(
                &self.name,
                node.name(),
                expected,
                found,
            )),
            Some(_) => Ok(()),
        }
    }

    fn check_dependencies(
        &self,
        node: &TypeNode,
        sources: &Sources<'_>,
        config: &BindConfig,
    ) -> Result<()> {
        let strict = config.strict_requirements && node.is_extension();

        for dependency in dependencies(node) {
            let Some(actual) = sources.definition_kind(&dependency) else {
                return Err(Error::undeclared_dependency(&self.name, dependency));
            };

            match self.requirements.get(&dependency) {
                None if strict => {
                    return Err(Error::missing_requirement(&self.name, dependency));
                }
                None => {
                    debug!(
                        declaration = %self.name,
                        dependency = %dependency,
                        "dependency not listed in requirements"
                    );
                }
                Some(listed) if listed != actual => {
                    if strict {
                        return Err(Error::wrong_requirement_kind(
                            &self.name,
                            dependency,
                            actual,
                            listed,
                        ));
                    }
                    debug!(
                        declaration = %self.name,
                        dependency = %dependency,
                        listed = %listed,
                        actual = %actual,
                        "requirement kind differs from definition"
                    );
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

/// Union members must be objects; implemented interfaces must be interfaces.
fn check_member_kinds(node: &TypeNode, sources: &Sources<'_>) -> Result<()> {
    let checks = node
        .members()
        .map(|m| (m, NodeKind::ObjectDefinition))
        .chain(
            node.interfaces()
                .map(|i| (i, NodeKind::InterfaceDefinition)),
        );

    for (name, expected) in checks {
        if let Some(found) = sources.definition_kind(name) {
            if found != expected {
                return Err(Error::wrong_node_kind(name, expected, found));
            }
        }
    }
    Ok(())
}
