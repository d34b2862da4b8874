//! Attaching declaration behavior to a live schema.

use skein_foundation::{Error, ErrorKind, Result};
use skein_schema::{Schema, SchemaType};
use tracing::debug;

use crate::declaration::{Behavior, Declaration};

impl Declaration {
    /// Copies this declaration's behavior onto the matching schema type.
    ///
    /// Every name the behavior mentions is checked before anything is
    /// written, so a failed attach leaves the schema untouched. Attaching
    /// the same declaration twice yields the same schema.
    ///
    /// # Errors
    /// - `Internal` if the declaration is not bound
    /// - `UnknownSchemaType` if the schema has no type with the name
    /// - `WrongNodeKind` if the schema type is of another category
    /// - `UnknownField` / `UnknownEnumValue` if the behavior names a field
    ///   or enum value the schema type lacks
    pub fn attach(&self, schema: &mut Schema) -> Result<()> {
        if !self.is_bound() {
            return Err(Error::internal(format!(
                "{} {} must be bound before it is attached",
                self.category, self.name
            )));
        }

        let entry = schema
            .get_type_mut(&self.name)
            .ok_or_else(|| Error::unknown_schema_type(&self.name))?;
        let expected = self.category.definition_kind();
        if entry.kind() != expected {
            return Err(Error::wrong_node_kind(&self.name, expected, entry.kind()));
        }

        self.validate(entry)?;
        let written = self.write(entry);

        debug!(
            declaration = %self.name,
            category = %self.category,
            written,
            "declaration attached"
        );
        Ok(())
    }

    fn validate(&self, entry: &SchemaType) -> Result<()> {
        if let Some(fields) = self.behavior.field_resolvers() {
            if let Some(field) = fields.keys().find(|f| entry.field(f).is_none()) {
                return Err(Error::new(ErrorKind::UnknownField {
                    type_name: self.name.clone(),
                    field: field.clone(),
                }));
            }
        }

        if let (Behavior::Enum(behavior), SchemaType::Enum(target)) = (&self.behavior, entry) {
            if let Some(value) = behavior.values.keys().find(|v| target.value(v).is_none()) {
                return Err(Error::new(ErrorKind::UnknownEnumValue {
                    type_name: self.name.clone(),
                    value: value.clone(),
                }));
            }
        }
        Ok(())
    }

    /// Writes validated behavior, returning how many slots were set.
    fn write(&self, entry: &mut SchemaType) -> usize {
        let mut written = 0;

        if let Some(fields) = self.behavior.field_resolvers() {
            for (name, resolver) in fields {
                if let Some(field) = entry.field_mut(name) {
                    field.resolver = Some(resolver.clone());
                    written += 1;
                }
            }
        }

        match (&self.behavior, entry) {
            (Behavior::Union(b), SchemaType::Union(target)) => {
                if let Some(resolver) = &b.resolve_type {
                    target.resolve_type = Some(resolver.clone());
                    written += 1;
                }
            }
            (Behavior::Interface(b), SchemaType::Interface(target)) => {
                if let Some(resolver) = &b.resolve_type {
                    target.resolve_type = Some(resolver.clone());
                    written += 1;
                }
            }
            (Behavior::Enum(b), SchemaType::Enum(target)) => {
                for (name, value) in &b.values {
                    if let Some(slot) = target.value_mut(name) {
                        slot.value = value.clone();
                        written += 1;
                    }
                }
            }
            (Behavior::Scalar(b), SchemaType::Scalar(target)) => {
                if let Some(f) = &b.serialize {
                    target.serialize = Some(f.clone());
                    written += 1;
                }
                if let Some(f) = &b.parse_value {
                    target.parse_value = Some(f.clone());
                    written += 1;
                }
                if let Some(f) = &b.parse_literal {
                    target.parse_literal = Some(f.clone());
                    written += 1;
                }
            }
            _ => {}
        }
        written
    }
}
