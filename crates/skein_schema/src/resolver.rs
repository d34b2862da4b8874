//! Executable behavior stored in the schema registry.
//!
//! Each callback wraps an `Arc<dyn Fn + Send + Sync>` so one author-supplied
//! function can be attached to several schemas. Two callbacks compare equal
//! only when they share the same allocation.

use std::fmt;
use std::sync::Arc;

use skein_foundation::{PMap, Result, Value};
use skein_sdl::ConstValue;

/// Context available to field resolvers.
#[derive(Clone, Copy, Debug)]
pub struct ResolveInfo<'a> {
    /// Name of the type that owns the field.
    pub type_name: &'a str,
    /// Name of the field being resolved.
    pub field_name: &'a str,
    /// The parent value the field is read from.
    pub parent: &'a Value,
    /// Field arguments.
    pub args: &'a PMap<Arc<str>, Value>,
}

impl ResolveInfo<'_> {
    /// Returns an argument by name.
    #[must_use]
    pub fn arg(&self, name: &str) -> Option<&Value> {
        self.args.get(name)
    }
}

type FieldFn = dyn Fn(&ResolveInfo<'_>) -> Result<Value> + Send + Sync;
type DiscriminatorFn = dyn Fn(&Value) -> Result<String> + Send + Sync;
type ValueFn = dyn Fn(&Value) -> Result<Value> + Send + Sync;
type LiteralFn = dyn Fn(&ConstValue) -> Result<Value> + Send + Sync;

/// Resolves one field of an object or interface.
#[derive(Clone)]
pub struct FieldResolver(Arc<FieldFn>);

impl FieldResolver {
    /// Wraps a resolver function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&ResolveInfo<'_>) -> Result<Value> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invokes the resolver.
    ///
    /// # Errors
    /// Returns whatever error the wrapped function returns.
    pub fn call(&self, info: &ResolveInfo<'_>) -> Result<Value> {
        (self.0)(info)
    }

    /// Returns true if both resolvers wrap the same function.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for FieldResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldResolver({:p})", Arc::as_ptr(&self.0).cast::<()>())
    }
}

/// Maps a runtime value of a union or interface to its concrete object type name.
#[derive(Clone)]
pub struct TypeResolver(Arc<DiscriminatorFn>);

impl TypeResolver {
    /// Wraps a discriminator function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<String> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invokes the discriminator.
    ///
    /// # Errors
    /// Returns whatever error the wrapped function returns.
    pub fn call(&self, value: &Value) -> Result<String> {
        (self.0)(value)
    }

    /// Returns true if both discriminators wrap the same function.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for TypeResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeResolver({:p})", Arc::as_ptr(&self.0).cast::<()>())
    }
}

/// Converts a runtime value, used for scalar serialize and parse-value.
#[derive(Clone)]
pub struct ScalarFn(Arc<ValueFn>);

impl ScalarFn {
    /// Wraps a conversion function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invokes the conversion.
    ///
    /// # Errors
    /// Returns whatever error the wrapped function returns.
    pub fn call(&self, value: &Value) -> Result<Value> {
        (self.0)(value)
    }

    /// Returns true if both functions wrap the same closure.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ScalarFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScalarFn({:p})", Arc::as_ptr(&self.0).cast::<()>())
    }
}

/// Parses a literal written in schema or query text into a runtime value.
#[derive(Clone)]
pub struct LiteralParser(Arc<LiteralFn>);

impl LiteralParser {
    /// Wraps a literal parser.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&ConstValue) -> Result<Value> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invokes the parser.
    ///
    /// # Errors
    /// Returns whatever error the wrapped function returns.
    pub fn call(&self, literal: &ConstValue) -> Result<Value> {
        (self.0)(literal)
    }

    /// Returns true if both parsers wrap the same closure.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for LiteralParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LiteralParser({:p})", Arc::as_ptr(&self.0).cast::<()>())
    }
}
