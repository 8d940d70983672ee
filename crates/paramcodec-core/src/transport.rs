//! The transport wire codec.
//!
//! The on-the-wire form is `base64(JSON array of {"type", "value"})`, in the
//! exact order parameters were added. Tuple payloads nest the same format
//! recursively; `bytes32` payloads are `base64(JSON byte array)`, a
//! two-layer encoding inherited from the wire format, not raw base64 of the
//! bytes. Encoded output must be byte-identical across implementations, so
//! JSON is always the compact `serde_json::to_string` form.

use crate::error::ParamError;
use crate::types::TypeTag;
use crate::value::{Parameter, ParameterList, ParameterValue};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Maximum tuple nesting depth accepted when parsing a transport string.
/// Bounds stack usage against malformed or adversarial input.
pub const MAX_TUPLE_DEPTH: usize = 32;

/// A single descriptor as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireDescriptor {
    #[serde(rename = "type")]
    pub tag: String,
    pub value: Vec<String>,
}

/// Serialize a parameter list to its transport string.
///
/// Pure and deterministic: calling it repeatedly on the same list yields
/// identical output.
pub fn encode_parameters(list: &ParameterList) -> String {
    let descriptors: Vec<WireDescriptor> = list.iter().map(to_wire).collect();
    // WireDescriptor is plain strings and vectors; serialization cannot fail.
    let json = serde_json::to_string(&descriptors)
        .expect("wire descriptor array always serializes");
    STANDARD.encode(json)
}

/// Parse a transport string back into a parameter list.
///
/// All-or-nothing: any malformed descriptor fails the whole parse.
pub fn parse_transport(transport: &str) -> Result<ParameterList, ParamError> {
    parse_at_depth(transport, 0)
}

/// Encode a 32-byte value into its two-layer wire payload.
pub fn encode_bytes32(bytes: &[u8]) -> Result<String, ParamError> {
    if bytes.len() != 32 {
        return Err(ParamError::Bytes32Length { got: bytes.len() });
    }
    let json = serde_json::to_string(bytes)?;
    Ok(STANDARD.encode(json))
}

/// Decode a two-layer `bytes32` wire payload back into the 32-byte buffer.
pub fn decode_bytes32(payload: &str) -> Result<[u8; 32], ParamError> {
    let json = decode_base64_utf8(payload)?;
    let bytes: Vec<u8> =
        serde_json::from_str(&json).map_err(|e| ParamError::MalformedTransport {
            reason: format!("bytes32 payload is not a JSON byte array: {e}"),
        })?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| ParamError::Bytes32Length { got: len })
}

fn to_wire(param: &Parameter) -> WireDescriptor {
    let value = match &param.value {
        ParameterValue::Scalar(s) => vec![s.clone()],
        ParameterValue::List(items) => items.clone(),
        ParameterValue::Tuple(nested) => vec![encode_parameters(nested)],
        ParameterValue::TupleList(lists) => lists.iter().map(encode_parameters).collect(),
    };
    WireDescriptor {
        tag: param.tag.as_tag().to_string(),
        value,
    }
}

fn parse_at_depth(transport: &str, depth: usize) -> Result<ParameterList, ParamError> {
    if depth > MAX_TUPLE_DEPTH {
        return Err(ParamError::TupleDepthExceeded {
            depth,
            max: MAX_TUPLE_DEPTH,
        });
    }

    let json = decode_base64_utf8(transport)?;
    let descriptors: Vec<WireDescriptor> =
        serde_json::from_str(&json).map_err(|e| ParamError::MalformedTransport {
            reason: format!("invalid descriptor JSON: {e}"),
        })?;

    let mut list = ParameterList::new();
    for desc in descriptors {
        list.push(from_wire(desc, depth)?);
    }
    Ok(list)
}

fn from_wire(desc: WireDescriptor, depth: usize) -> Result<Parameter, ParamError> {
    let tag: TypeTag = desc.tag.parse()?;
    let value = match tag {
        TypeTag::Tuple => {
            let payload = single_value(tag, desc.value)?;
            ParameterValue::Tuple(Box::new(parse_at_depth(&payload, depth + 1)?))
        }
        TypeTag::TupleArray => {
            let lists = desc
                .value
                .iter()
                .map(|payload| parse_at_depth(payload, depth + 1))
                .collect::<Result<Vec<_>, _>>()?;
            ParameterValue::TupleList(lists)
        }
        TypeTag::Bytes32 => {
            let payload = single_value(tag, desc.value)?;
            // Construction-time invariant, re-checked defensively on parse.
            decode_bytes32(&payload)?;
            ParameterValue::Scalar(payload)
        }
        t if t.is_array() => ParameterValue::List(desc.value),
        _ => ParameterValue::Scalar(single_value(tag, desc.value)?),
    };
    Ok(Parameter { tag, value })
}

fn single_value(tag: TypeTag, mut value: Vec<String>) -> Result<String, ParamError> {
    if value.len() != 1 {
        return Err(ParamError::MalformedTransport {
            reason: format!(
                "'{tag}' descriptor expects exactly one value element, got {}",
                value.len()
            ),
        });
    }
    Ok(value.remove(0))
}

fn decode_base64_utf8(payload: &str) -> Result<String, ParamError> {
    let raw = STANDARD
        .decode(payload)
        .map_err(|e| ParamError::MalformedTransport {
            reason: format!("invalid base64: {e}"),
        })?;
    String::from_utf8(raw).map_err(|e| ParamError::MalformedTransport {
        reason: format!("payload is not UTF-8: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(tag: TypeTag, v: &str) -> Parameter {
        Parameter {
            tag,
            value: ParameterValue::Scalar(v.into()),
        }
    }

    #[test]
    fn encode_parse_roundtrip() {
        let mut inner = ParameterList::new();
        inner.push(scalar(TypeTag::Uint64, "7"));

        let mut list = ParameterList::new();
        list.push(scalar(TypeTag::String, "hello"));
        list.push(Parameter {
            tag: TypeTag::Uint64Array,
            value: ParameterValue::List(vec!["1".into(), "2".into()]),
        });
        list.push(Parameter {
            tag: TypeTag::Tuple,
            value: ParameterValue::Tuple(Box::new(inner.clone())),
        });
        list.push(Parameter {
            tag: TypeTag::TupleArray,
            value: ParameterValue::TupleList(vec![inner.clone(), inner]),
        });

        let transport = encode_parameters(&list);
        let parsed = parse_transport(&transport).unwrap();
        assert_eq!(parsed, list);
    }

    #[test]
    fn encode_is_deterministic() {
        let mut list = ParameterList::new();
        list.push(scalar(TypeTag::Uint8, "123"));
        assert_eq!(encode_parameters(&list), encode_parameters(&list));
    }

    #[test]
    fn bytes32_two_layer_encoding() {
        let bytes: Vec<u8> = (0u8..32).collect();
        let payload = encode_bytes32(&bytes).unwrap();

        // Inner layer is the JSON numeric array, base64-encoded as text.
        let json = decode_base64_utf8(&payload).unwrap();
        assert!(json.starts_with("[0,1,2,"));

        let back = decode_bytes32(&payload).unwrap();
        assert_eq!(back.to_vec(), bytes);
    }

    #[test]
    fn bytes32_wrong_length_rejected() {
        let err = encode_bytes32(&[0u8, 1, 2]).unwrap_err();
        assert!(err.to_string().contains("Bytes32 must be 32 bytes long"));
    }

    #[test]
    fn invalid_base64_is_malformed() {
        let err = parse_transport("not valid base64!!!").unwrap_err();
        assert!(matches!(err, ParamError::MalformedTransport { .. }));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let payload = STANDARD.encode("this is not json");
        let err = parse_transport(&payload).unwrap_err();
        assert!(matches!(err, ParamError::MalformedTransport { .. }));
    }

    #[test]
    fn scalar_descriptor_requires_single_element() {
        let json = r#"[{"type":"uint64","value":["1","2"]}]"#;
        let payload = STANDARD.encode(json);
        let err = parse_transport(&payload).unwrap_err();
        assert!(matches!(err, ParamError::MalformedTransport { .. }));
    }

    #[test]
    fn unknown_tag_fails_parse() {
        let json = r#"[{"type":"GaryDu","value":["x"]}]"#;
        let payload = STANDARD.encode(json);
        let err = parse_transport(&payload).unwrap_err();
        assert!(err.to_string().contains("Type \"GaryDu\" not implemented"));
    }

    #[test]
    fn nesting_depth_is_bounded() {
        let mut inner = ParameterList::new();
        inner.push(scalar(TypeTag::String, "x"));
        let mut transport = encode_parameters(&inner);

        for _ in 0..(MAX_TUPLE_DEPTH + 2) {
            let json = format!(r#"[{{"type":"tuple","value":[{}]}}]"#,
                serde_json::to_string(&transport).unwrap());
            transport = STANDARD.encode(json);
        }

        let err = parse_transport(&transport).unwrap_err();
        assert!(matches!(err, ParamError::TupleDepthExceeded { .. }));
    }
}
