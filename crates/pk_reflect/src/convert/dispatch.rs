use crate::convert::builtin::convert_scalar;
use crate::convert::{ConversionError, is_absent};
use crate::info::{TypeInfo, TypeKind};
use crate::type_traits::{TypeTraitEnumerated, TypeTraitFromId};
use crate::value::{ObjectValue, Value};

/// Converts `raw` to `target` with no registered converter in play.
///
/// `convert_element` converts sequence elements, so they still go
/// through the caller's registry.
pub(crate) fn convert_unregistered(
    target: &'static TypeInfo,
    raw: Value,
    convert_element: &dyn Fn(&'static TypeInfo, Value) -> Result<Value, ConversionError>,
) -> Result<Value, ConversionError> {
    if let Some(data) = target.get_trait::<TypeTraitFromId>() {
        return convert_identity(data, target, raw);
    }
    if let Some(data) = target.get_trait::<TypeTraitEnumerated>() {
        return convert_enumerated(data, target, raw);
    }
    match target.kind() {
        TypeKind::Scalar(kind) => convert_scalar(kind, target, raw),
        TypeKind::Sequence { element } => convert_sequence(element, raw, convert_element),
        TypeKind::Host | TypeKind::Enumerated | TypeKind::Abstract => Ok(raw),
    }
}

fn is_instance(raw: &Value, target: &'static TypeInfo) -> bool {
    raw.as_object()
        .is_some_and(|object| object.type_info().is_assignable_to(target))
}

fn convert_identity(
    data: &TypeTraitFromId,
    target: &'static TypeInfo,
    raw: Value,
) -> Result<Value, ConversionError> {
    if is_absent(&raw) {
        return Ok(Value::Null);
    }
    if is_instance(&raw, target) {
        return Ok(raw);
    }

    let id = match &raw {
        Value::String(text) => {
            text.trim()
                .parse::<i64>()
                .map_err(|_| ConversionError::NotInstantiable {
                    value: text.clone(),
                    target: target.name(),
                })?
        }
        other => other.as_i64().ok_or_else(|| ConversionError::Incompatible {
            found: other.type_name(),
            target: target.name(),
        })?,
    };

    log::trace!("instantiating `{}` from id {id}", target.name());
    Ok(Value::Object(ObjectValue::from_boxed(data.from_id(id))))
}

fn convert_enumerated(
    data: &TypeTraitEnumerated,
    target: &'static TypeInfo,
    raw: Value,
) -> Result<Value, ConversionError> {
    if is_absent(&raw) {
        return Ok(Value::Null);
    }
    if is_instance(&raw, target) {
        return Ok(raw);
    }

    let found = match &raw {
        Value::String(text) => data.lookup(text.trim()),
        other => other.as_i64().and_then(|id| data.by_numeric_id(id)),
    };

    found
        .map(|constant| Value::Object(ObjectValue::from_boxed(constant)))
        .ok_or_else(|| ConversionError::UnknownConstant {
            key: raw.to_string(),
            target: target.name(),
        })
}

fn convert_sequence(
    element: &'static TypeInfo,
    raw: Value,
    convert_element: &dyn Fn(&'static TypeInfo, Value) -> Result<Value, ConversionError>,
) -> Result<Value, ConversionError> {
    if is_absent(&raw) {
        return Ok(Value::Null);
    }
    let items = match raw {
        Value::List(items) => items,
        single => vec![single],
    };
    items
        .into_iter()
        .map(|item| convert_element(element, item))
        .collect::<Result<Vec<_>, _>>()
        .map(Value::List)
}
