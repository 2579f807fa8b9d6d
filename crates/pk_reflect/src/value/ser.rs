use chrono::SecondsFormat;
use serde::{Serialize, Serializer};

use crate::value::Value;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::Char(v) => serializer.serialize_char(*v),
            Self::I8(v) => serializer.serialize_i8(*v),
            Self::I16(v) => serializer.serialize_i16(*v),
            Self::I32(v) => serializer.serialize_i32(*v),
            Self::I64(v) => serializer.serialize_i64(*v),
            Self::U8(v) => serializer.serialize_u8(*v),
            Self::U16(v) => serializer.serialize_u16(*v),
            Self::U32(v) => serializer.serialize_u32(*v),
            Self::U64(v) => serializer.serialize_u64(*v),
            Self::F32(v) => serializer.serialize_f32(*v),
            Self::F64(v) => serializer.serialize_f64(*v),
            Self::String(v) => serializer.serialize_str(v),
            Self::DateTime(v) => {
                serializer.serialize_str(&v.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Self::Date(v) => serializer.collect_str(v),
            Self::Url(v) => serializer.serialize_str(v.as_str()),
            Self::Path(v) => serializer.collect_str(&v.display()),
            Self::List(items) => serializer.collect_seq(items),
            // Objects have no structural serialization; their debug text is used.
            Self::Object(object) => serializer.collect_str(object),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::value::Value;

    #[test]
    fn serializes_to_json() {
        let value = Value::List(vec![
            Value::Null,
            Value::Bool(true),
            Value::I32(-4),
            Value::from("text"),
            Value::Path(PathBuf::from("/tmp/a")),
        ]);

        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"[null,true,-4,"text","/tmp/a"]"#);
    }
}
