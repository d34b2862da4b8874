//! The declaration authoring surface.

use std::sync::OnceLock;

use skein_foundation::{Error, NodeKind, Result, Value};
use skein_schema::{FieldResolver, LiteralParser, ResolveInfo, ScalarFn, TypeResolver};
use skein_sdl::{ConstValue, SchemaDocument};

use super::types::{Behavior, Category};
use super::Declaration;
use crate::config::BindConfig;
use crate::requirements::Requirements;

/// Builds a [`Declaration`].
///
/// Behavior methods that do not fit the category are recorded and reported
/// when the declaration is built, so a chain never panics halfway.
///
/// ```ignore
/// let search = DeclarationBuilder::union("SearchResult")
///     .resolve_type(|value| Ok(if value.get("title").is_some() { "Book" } else { "Author" }.into()))
///     .declare(&document)?;
/// ```
#[derive(Debug)]
pub struct DeclarationBuilder {
    name: String,
    category: Category,
    fragment: Option<String>,
    requirements: Requirements,
    behavior: Behavior,
    problem: Option<Error>,
}

impl DeclarationBuilder {
    /// Starts a declaration of the given category.
    #[must_use]
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
            fragment: None,
            requirements: Requirements::new(),
            behavior: Behavior::empty(category),
            problem: None,
        }
    }

    /// Starts an object declaration.
    #[must_use]
    pub fn object(name: impl Into<String>) -> Self {
        Self::new(name, Category::Object)
    }

    /// Starts an interface declaration.
    #[must_use]
    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, Category::Interface)
    }

    /// Starts a union declaration.
    #[must_use]
    pub fn union(name: impl Into<String>) -> Self {
        Self::new(name, Category::Union)
    }

    /// Starts an enum declaration.
    #[must_use]
    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::new(name, Category::Enum)
    }

    /// Starts a scalar declaration.
    #[must_use]
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::new(name, Category::Scalar)
    }

    /// Overrides the type name to bind to.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets an inline SDL fragment to look the type up in first.
    #[must_use]
    pub fn fragment(mut self, sdl: impl Into<String>) -> Self {
        self.fragment = Some(sdl.into());
        self
    }

    /// Adds one requirement ledger entry.
    #[must_use]
    pub fn requires(mut self, name: impl Into<String>, kind: NodeKind) -> Self {
        self.requirements.insert(name, kind);
        self
    }

    /// Adds a requirement on another, already bound declaration.
    #[must_use]
    pub fn requires_declaration(mut self, other: &Declaration) -> Self {
        match self.requirements.clone().require_declaration(other) {
            Ok(requirements) => self.requirements = requirements,
            Err(err) => self.record(err),
        }
        self
    }

    /// Replaces the whole requirement ledger.
    #[must_use]
    pub fn requirements(mut self, requirements: Requirements) -> Self {
        self.requirements = requirements;
        self
    }

    /// Sets the resolver for one field of an object or interface.
    #[must_use]
    pub fn field<F>(self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&ResolveInfo<'_>) -> Result<Value> + Send + Sync + 'static,
    {
        self.field_resolver(name, FieldResolver::new(f))
    }

    /// Sets a shared resolver for one field of an object or interface.
    #[must_use]
    pub fn field_resolver(mut self, name: impl Into<String>, resolver: FieldResolver) -> Self {
        let name = name.into();
        match &mut self.behavior {
            Behavior::Object(b) => {
                b.fields.insert(name, resolver);
            }
            Behavior::Interface(b) => {
                b.fields.insert(name, resolver);
            }
            _ => self.mismatch("field resolvers"),
        }
        self
    }

    /// Sets the discriminator of a union or interface.
    #[must_use]
    pub fn resolve_type<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> Result<String> + Send + Sync + 'static,
    {
        let resolver = TypeResolver::new(f);
        match &mut self.behavior {
            Behavior::Union(b) => b.resolve_type = Some(resolver),
            Behavior::Interface(b) => b.resolve_type = Some(resolver),
            _ => self.mismatch("a type discriminator"),
        }
        self
    }

    /// Maps an enum value name to a runtime value.
    #[must_use]
    pub fn value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        if let Behavior::Enum(b) = &mut self.behavior {
            b.values.insert(name.into(), value.into());
        } else {
            self.mismatch("enum values");
        }
        self
    }

    /// Sets a scalar's serialize function.
    #[must_use]
    pub fn serialize<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    {
        if let Behavior::Scalar(b) = &mut self.behavior {
            b.serialize = Some(ScalarFn::new(f));
        } else {
            self.mismatch("a serialize function");
        }
        self
    }

    /// Sets a scalar's parse-value function.
    #[must_use]
    pub fn parse_value<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    {
        if let Behavior::Scalar(b) = &mut self.behavior {
            b.parse_value = Some(ScalarFn::new(f));
        } else {
            self.mismatch("a parse-value function");
        }
        self
    }

    /// Sets a scalar's parse-literal function.
    #[must_use]
    pub fn parse_literal<F>(mut self, f: F) -> Self
    where
        F: Fn(&ConstValue) -> Result<Value> + Send + Sync + 'static,
    {
        if let Behavior::Scalar(b) = &mut self.behavior {
            b.parse_literal = Some(LiteralParser::new(f));
        } else {
            self.mismatch("a parse-literal function");
        }
        self
    }

    /// Builds the declaration without binding it.
    ///
    /// This is the deferred-binding path: the result is unbound, and
    /// [`make_executable_schema`](crate::make_executable_schema) binds it
    /// against the document it assembles. Call [`Declaration::bind`] to
    /// bind it yourself, or use [`declare`](Self::declare) to build and
    /// bind in one step. An unbound declaration cannot be attached or
    /// required by another declaration.
    ///
    /// # Errors
    /// Returns the first problem recorded while building, such as behavior
    /// that does not fit the category.
    pub fn build(self) -> Result<Declaration> {
        if let Some(problem) = self.problem {
            return Err(problem);
        }
        if self.name.is_empty() {
            return Err(Error::invalid_declaration(
                self.category.to_string(),
                "declaration name is empty",
            ));
        }
        Ok(Declaration {
            name: self.name,
            category: self.category,
            fragment: self.fragment,
            requirements: self.requirements,
            behavior: self.behavior,
            bound: OnceLock::new(),
        })
    }

    /// Builds the declaration and binds it with the default configuration.
    ///
    /// # Errors
    /// Returns any build error or any binding error.
    pub fn declare(self, document: &SchemaDocument) -> Result<Declaration> {
        self.declare_with(document, &BindConfig::default())
    }

    /// Builds the declaration and binds it with the given configuration.
    ///
    /// # Errors
    /// Returns any build error or any binding error.
    pub fn declare_with(
        self,
        document: &SchemaDocument,
        config: &BindConfig,
    ) -> Result<Declaration> {
        let declaration = self.build()?;
        declaration.bind_with(document, config)?;
        Ok(declaration)
    }

    fn mismatch(&mut self, what: &str) {
        let err = Error::invalid_declaration(
            self.name.clone(),
            format!("{what} cannot be attached to a {} declaration", self.category),
        );
        self.record(err);
    }

    fn record(&mut self, err: Error) {
        if self.problem.is_none() {
            self.problem = Some(err);
        }
    }
}
