//! Schema literals as runtime values.

use std::sync::Arc;

use async_graphql_value::ConstValue;
use skein_foundation::{PMap, Value};

/// Converts a literal written in schema text into a runtime [`Value`].
///
/// Integral numbers become `Int`, other numbers `Float`. Binary literals
/// become a list of byte values.
#[must_use]
pub fn to_value(literal: &ConstValue) -> Value {
    match literal {
        ConstValue::Null => Value::Null,
        ConstValue::Boolean(b) => Value::Boolean(*b),
        ConstValue::Number(n) => match n.as_i64() {
            Some(int) => Value::Int(int),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        ConstValue::String(s) => Value::from(s.as_str()),
        ConstValue::Enum(name) => Value::enumeration(name.as_str()),
        ConstValue::Binary(bytes) => {
            Value::List(bytes.iter().map(|b| Value::Int(i64::from(*b))).collect())
        }
        ConstValue::List(items) => Value::List(items.iter().map(to_value).collect()),
        ConstValue::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(k, v)| (Arc::<str>::from(k.as_str()), to_value(v)))
                .collect::<PMap<_, _>>(),
        ),
    }
}
