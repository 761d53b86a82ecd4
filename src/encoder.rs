//! Encoding of a single data element as a DICOM JSON Model attribute object,
//! `{"vr": ..., "Value": [...]}`.
use crate::converter::DicomJsonConverter;
use crate::decimal_string::repair;
use crate::error::DicomJsonError;
use crate::tag_classifier::tag_to_hex;
use crate::vr_class::VrClass;
use dicom::core::header::Header;
use dicom::core::value::{ConvertValueError, Value as DicomValue};
use dicom::core::{DataDictionary, DataElement, PrimitiveValue, Tag, VR};
use dicom::object::InMemDicomObject;
use serde_json::{Map, Number, Value};

/// Encode a data element. The `"Value"` field is only present if the element has values.
pub fn encode_element<D: DataDictionary>(
    converter: &DicomJsonConverter<D>,
    elem: &DataElement<InMemDicomObject>,
) -> Result<Value, DicomJsonError> {
    let mut attribute = Map::new();
    attribute.insert("vr".to_string(), Value::from(elem.vr().to_string()));
    if let Some(values) = encode_values(converter, elem)? {
        attribute.insert("Value".to_string(), Value::Array(values));
    }
    Ok(Value::Object(attribute))
}

fn encode_values<D: DataDictionary>(
    converter: &DicomJsonConverter<D>,
    elem: &DataElement<InMemDicomObject>,
) -> Result<Option<Vec<Value>>, DicomJsonError> {
    if elem.value().multiplicity() == 0 {
        return Ok(None);
    }
    let class = VrClass::from(elem.vr());
    match (class, elem.value()) {
        (VrClass::Binary, _) | (_, DicomValue::PixelSequence(_)) => Ok(None),
        (_, DicomValue::Sequence(seq)) => seq
            .items()
            .iter()
            .map(|item| converter.to_json_value(item))
            .collect::<Result<_, _>>()
            .map(Some),
        (VrClass::Sequence, DicomValue::Primitive(_)) => Ok(None),
        (_, DicomValue::Primitive(value)) => {
            encode_primitive(class, elem.tag(), elem.vr(), value).map(Some)
        }
    }
}

fn encode_primitive(
    class: VrClass,
    tag: Tag,
    vr: VR,
    value: &PrimitiveValue,
) -> Result<Vec<Value>, DicomJsonError> {
    let invalid = |source: ConvertValueError| DicomJsonError::InvalidValue { tag, vr, source };
    let values = match class {
        VrClass::PersonName => value
            .to_multi_str()
            .iter()
            .map(|name| person_name(name))
            .collect(),
        VrClass::Float32 => value
            .to_multi_float32()
            .map_err(invalid)?
            .into_iter()
            .map(float32)
            .collect(),
        VrClass::Float64 => value
            .to_multi_float64()
            .map_err(invalid)
            .map(numbers)?,
        VrClass::Int32 if vr == VR::IS => integer_strings(value).map_err(invalid)?,
        VrClass::Int32 => numbers(value.to_multi_int::<i32>().map_err(invalid)?),
        VrClass::Int16 => numbers(value.to_multi_int::<i16>().map_err(invalid)?),
        VrClass::Int64 => numbers(value.to_multi_int::<i64>().map_err(invalid)?),
        VrClass::UInt32 => numbers(value.to_multi_int::<u32>().map_err(invalid)?),
        VrClass::UInt16 => numbers(value.to_multi_int::<u16>().map_err(invalid)?),
        VrClass::UInt64 => numbers(value.to_multi_int::<u64>().map_err(invalid)?),
        VrClass::DecimalString => value
            .to_multi_str()
            .iter()
            .map(|s| decimal(s))
            .collect::<Result<_, _>>()?,
        VrClass::AttributeTag => attribute_tags(value),
        VrClass::Text => value.to_multi_str().iter().map(|s| text(s)).collect(),
        VrClass::Sequence | VrClass::Binary => Vec::new(),
    };
    Ok(values)
}

fn numbers<T>(values: Vec<T>) -> Vec<Value>
where
    Value: From<T>,
{
    values.into_iter().map(Value::from).collect()
}

/// An empty IS component is written as `null`.
fn integer_strings(value: &PrimitiveValue) -> Result<Vec<Value>, ConvertValueError> {
    match value {
        PrimitiveValue::Str(_) | PrimitiveValue::Strs(_) => value
            .to_multi_str()
            .iter()
            .map(|s| match unpad(s).trim() {
                "" => Ok(Value::Null),
                s => PrimitiveValue::from(s).to_int::<i32>().map(Value::from),
            })
            .collect(),
        _ => value.to_multi_int::<i32>().map(numbers),
    }
}

/// Single precision values are written with their shortest representation,
/// not as the nearest `f64`.
fn float32(f: f32) -> Value {
    f.to_string()
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Write a DS value as the narrowest JSON number which represents it:
/// unsigned integer, then signed integer, then floating point.
fn decimal(raw: &str) -> Result<Value, DicomJsonError> {
    let Some(fixed) = repair(raw)? else {
        return Ok(Value::Null);
    };
    if let Ok(n) = fixed.parse::<u64>() {
        return Ok(Value::from(n));
    }
    if let Ok(n) = fixed.parse::<i64>() {
        return Ok(Value::from(n));
    }
    fixed
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| DicomJsonError::Format {
            value: raw.to_string(),
        })
}

/// Only the alphabetic component group of a person name is written.
fn person_name(name: &str) -> Value {
    let alphabetic = unpad(name).split('=').next().unwrap_or("");
    if alphabetic.is_empty() {
        Value::Null
    } else {
        let mut pn = Map::new();
        pn.insert("Alphabetic".to_string(), Value::from(alphabetic));
        Value::Object(pn)
    }
}

fn attribute_tags(value: &PrimitiveValue) -> Vec<Value> {
    match value {
        PrimitiveValue::Tags(tags) => tags.iter().map(|t| Value::from(tag_to_hex(*t))).collect(),
        PrimitiveValue::U32(combined) => combined
            .iter()
            .map(|t| Value::from(format!("{t:08X}")))
            .collect(),
        other => other.to_multi_str().iter().map(|s| text(s)).collect(),
    }
}

fn text(s: &str) -> Value {
    let s = unpad(s);
    if s.is_empty() {
        Value::Null
    } else {
        Value::from(s)
    }
}

/// Remove trailing space and NUL padding.
fn unpad(s: &str) -> &str {
    s.trim_end_matches([' ', '\0'])
}
