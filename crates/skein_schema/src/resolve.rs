//! Invoking attached behavior.
//!
//! These helpers call what declarations attached to a [`Schema`]: field
//! resolvers, discriminators, scalar functions and enum mappings. They do
//! not walk a query document.

use std::sync::Arc;

use skein_foundation::{Error, ErrorKind, PMap, Result, Value};
use skein_sdl::{ConstValue, to_value};
use tracing::trace;

use crate::resolver::ResolveInfo;
use crate::schema::{Schema, SchemaType};

impl Schema {
    /// Resolves one field of an object or interface against a parent value.
    ///
    /// # Errors
    /// - `UnknownType` if the type does not exist
    /// - `UnknownField` if the type has no such field
    /// - `MissingResolver` if nothing was attached or defaulted
    /// - whatever the resolver itself returns
    pub fn resolve_field(
        &self,
        type_name: &str,
        field_name: &str,
        parent: &Value,
        args: &PMap<Arc<str>, Value>,
    ) -> Result<Value> {
        let ty = self
            .get_type(type_name)
            .ok_or_else(|| Error::unknown_type(type_name))?;
        let field = ty.field(field_name).ok_or_else(|| {
            Error::new(ErrorKind::UnknownField {
                type_name: type_name.to_string(),
                field: field_name.to_string(),
            })
        })?;
        let resolver = field.resolver.as_ref().ok_or_else(|| {
            Error::new(ErrorKind::MissingResolver {
                type_name: type_name.to_string(),
                field: field_name.to_string(),
            })
        })?;

        trace!(type_name, field_name, "resolving field");
        resolver.call(&ResolveInfo {
            type_name,
            field_name,
            parent,
            args,
        })
    }

    /// Determines the concrete object type of a union or interface value.
    ///
    /// The discriminator's answer must be one of the abstract type's
    /// possible types.
    ///
    /// # Errors
    /// - `UnknownType` if the type does not exist
    /// - `Execution` if the type is not abstract, has no discriminator, or
    ///   the discriminator names a type that is not a possible type
    pub fn resolve_abstract_type(&self, abstract_name: &str, value: &Value) -> Result<String> {
        let ty = self
            .get_type(abstract_name)
            .ok_or_else(|| Error::unknown_type(abstract_name))?;
        if !ty.is_abstract() {
            return Err(Error::execution(format!(
                "'{abstract_name}' is not a union or interface"
            )));
        }
        let resolver = ty.resolve_type().ok_or_else(|| {
            Error::execution(format!("'{abstract_name}' has no type discriminator"))
        })?;

        let concrete = resolver.call(value)?;
        if !self.possible_types(abstract_name).contains(&concrete.as_str()) {
            return Err(Error::execution(format!(
                "discriminator for '{abstract_name}' returned '{concrete}', which is not a possible type"
            )));
        }
        Ok(concrete)
    }

    /// Converts a runtime value into its output form for a leaf type.
    ///
    /// Scalars use their serialize function (identity when none is set).
    /// Enums map a runtime value back to the name of the value it belongs to.
    ///
    /// # Errors
    /// - `UnknownType` if the type does not exist
    /// - `Execution` if the type is not a leaf or the value cannot be represented
    pub fn serialize(&self, type_name: &str, value: &Value) -> Result<Value> {
        match self.get_type(type_name) {
            Some(SchemaType::Scalar(scalar)) => match &scalar.serialize {
                Some(serialize) => serialize.call(value),
                None => Ok(value.clone()),
            },
            Some(SchemaType::Enum(enumeration)) => enumeration
                .values
                .iter()
                .find(|v| &v.value == value)
                .map(|v| Value::enumeration(v.name.as_str()))
                .ok_or_else(|| {
                    Error::execution(format!("enum '{type_name}' cannot represent value {value}"))
                }),
            Some(_) => Err(Error::execution(format!("'{type_name}' is not a leaf type"))),
            None => Err(Error::unknown_type(type_name)),
        }
    }

    /// Converts an input value into its runtime form for a leaf type.
    ///
    /// Scalars use their parse-value function (identity when none is set).
    /// Enums accept a value name and return the runtime value mapped to it.
    ///
    /// # Errors
    /// - `UnknownType` if the type does not exist
    /// - `UnknownEnumValue` if an enum has no value with the given name
    /// - `Execution` if the type is not a leaf or the value is rejected
    pub fn parse_value(&self, type_name: &str, value: &Value) -> Result<Value> {
        match self.get_type(type_name) {
            Some(SchemaType::Scalar(scalar)) => match &scalar.parse_value {
                Some(parse) => parse.call(value),
                None => Ok(value.clone()),
            },
            Some(SchemaType::Enum(enumeration)) => {
                let name = value.as_enum().or_else(|| value.as_str()).unwrap_or("");
                enumeration
                    .value(name)
                    .map(|v| v.value.clone())
                    .ok_or_else(|| {
                        Error::new(ErrorKind::UnknownEnumValue {
                            type_name: type_name.to_string(),
                            value: value.to_string(),
                        })
                    })
            }
            Some(_) => Err(Error::execution(format!("'{type_name}' is not a leaf type"))),
            None => Err(Error::unknown_type(type_name)),
        }
    }

    /// Converts a literal into its runtime form for a scalar type.
    ///
    /// Falls back to parse-value on the literal's plain value when no
    /// literal parser is set.
    ///
    /// # Errors
    /// - `UnknownType` if the type does not exist
    /// - `Execution` if the type is not a scalar or the literal is rejected
    pub fn parse_literal(&self, type_name: &str, literal: &ConstValue) -> Result<Value> {
        match self.get_type(type_name) {
            Some(SchemaType::Scalar(scalar)) => match &scalar.parse_literal {
                Some(parse) => parse.call(literal),
                None => self.parse_value(type_name, &to_value(literal)),
            },
            Some(_) => Err(Error::execution(format!("'{type_name}' is not a scalar"))),
            None => Err(Error::unknown_type(type_name)),
        }
    }
}
