// crates/domain/src/presence.rs
use serde_json::Value;

/// Whether a property value counts as set.
///
/// Hosts leave unused metadata as `""`, `0` or `null` rather than removing it,
/// so those fall through to the next candidate just like an absent property.
#[must_use]
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(_) => true,
    }
}
