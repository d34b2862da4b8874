//! Standard coercion for the built-in scalars.

use skein_foundation::{Error, Result, Value};

use crate::resolver::ScalarFn;

/// Returns the coercion function for a built-in scalar name.
///
/// Custom scalars have no built-in coercion and get `None`.
#[must_use]
pub fn coercion(name: &str) -> Option<ScalarFn> {
    let f: fn(&Value) -> Result<Value> = match name {
        "Int" => coerce_int,
        "Float" => coerce_float,
        "String" => coerce_string,
        "Boolean" => coerce_boolean,
        "ID" => coerce_id,
        _ => return None,
    };
    Some(ScalarFn::new(f))
}

fn mismatch(scalar: &str, value: &Value) -> Error {
    Error::execution(format!(
        "{scalar} cannot represent {} value {value}",
        value.type_name()
    ))
}

fn coerce_int(value: &Value) -> Result<Value> {
    match value {
        Value::Int(n) if i32::try_from(*n).is_ok() => Ok(value.clone()),
        Value::Int(_) => Err(Error::execution(format!(
            "Int cannot represent non 32-bit signed integer value {value}"
        ))),
        #[allow(clippy::cast_possible_truncation)]
        Value::Float(f) if f.fract() == 0.0 && f.abs() <= f64::from(i32::MAX) => {
            Ok(Value::Int(*f as i64))
        }
        Value::Boolean(b) => Ok(Value::Int(i64::from(*b))),
        _ => Err(mismatch("Int", value)),
    }
}

fn coerce_float(value: &Value) -> Result<Value> {
    match value {
        Value::Float(f) if f.is_finite() => Ok(value.clone()),
        #[allow(clippy::cast_precision_loss)]
        Value::Int(n) => Ok(Value::Float(*n as f64)),
        Value::Boolean(b) => Ok(Value::Float(if *b { 1.0 } else { 0.0 })),
        _ => Err(mismatch("Float", value)),
    }
}

fn coerce_string(value: &Value) -> Result<Value> {
    match value {
        Value::String(_) => Ok(value.clone()),
        Value::Int(_) | Value::Float(_) | Value::Boolean(_) => {
            Ok(Value::from(value.to_string()))
        }
        _ => Err(mismatch("String", value)),
    }
}

fn coerce_boolean(value: &Value) -> Result<Value> {
    match value {
        Value::Boolean(_) => Ok(value.clone()),
        Value::Int(n) => Ok(Value::Boolean(*n != 0)),
        _ => Err(mismatch("Boolean", value)),
    }
}

fn coerce_id(value: &Value) -> Result<Value> {
    match value {
        Value::String(_) => Ok(value.clone()),
        Value::Int(n) => Ok(Value::from(n.to_string())),
        _ => Err(mismatch("ID", value)),
    }
}
