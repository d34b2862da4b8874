//! Default resolver population.
//!
//! Runs after every declaration has been attached. Any object or interface
//! field still lacking a resolver gets one that reads the same-named key
//! from its parent value.

use skein_foundation::Value;
use tracing::{debug, trace};

use crate::resolver::FieldResolver;
use crate::schema::Schema;

/// Returns a resolver that reads `field_name` from an object parent.
///
/// Yields `Null` when the parent is not an object or lacks the key.
#[must_use]
pub fn default_field_resolver(field_name: &str) -> FieldResolver {
    let key = field_name.to_string();
    FieldResolver::new(move |info| Ok(info.parent.get(&key).cloned().unwrap_or(Value::Null)))
}

/// Sets a default resolver on every output field that has none.
///
/// Existing resolvers are never overwritten. Returns the number of fields
/// that received a default.
pub fn set_default_resolvers(schema: &mut Schema) -> usize {
    let mut populated = 0;
    for ty in schema.types_mut() {
        let type_name = ty.name().to_string();
        for field in ty.fields_mut() {
            if field.resolver.is_none() {
                trace!(type_name = %type_name, field = %field.name, "default resolver set");
                field.resolver = Some(default_field_resolver(&field.name));
                populated += 1;
            }
        }
    }
    debug!(populated, "default resolvers populated");
    populated
}
