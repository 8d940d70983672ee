//! Resolves a parameter list into the flat `(types, values)` pair an
//! ABI-encoding layer needs.
//!
//! Accepts either a transport string or a builder directly; both roads
//! produce identical output. Decoding is all-or-nothing: one bad
//! descriptor fails the whole call.

use crate::normalizer::AddressNormalizer;
use paramcodec_core::{
    transport, AddressDerivation, ParamError, Parameter, ParameterBuilder, ParameterList,
    ParameterValue, TypeTag, MAX_TUPLE_DEPTH,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// A positional argument value, ready for the ABI encoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum CallValue {
    /// Scalar argument (addresses, integers, strings) as text.
    Scalar(String),
    /// Array argument, one element per entry.
    Array(Vec<String>),
    /// Fixed 32-byte argument.
    Bytes(Vec<u8>),
    /// Composite argument: the nested values as one positional value.
    Tuple(Vec<CallValue>),
    /// Array of composites, all structurally identical.
    TupleArray(Vec<Vec<CallValue>>),
}

impl fmt::Display for CallValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallValue::Scalar(s) => write!(f, "{s}"),
            CallValue::Array(items) => write!(f, "[{}]", items.join(", ")),
            CallValue::Bytes(b) => write!(f, "0x{}", hex::encode(b)),
            CallValue::Tuple(vals) => {
                let parts: Vec<_> = vals.iter().map(|v| v.to_string()).collect();
                write!(f, "({})", parts.join(", "))
            }
            CallValue::TupleArray(tuples) => {
                let parts: Vec<_> = tuples
                    .iter()
                    .map(|vals| {
                        let inner: Vec<_> = vals.iter().map(|v| v.to_string()).collect();
                        format!("({})", inner.join(", "))
                    })
                    .collect();
                write!(f, "[{}]", parts.join(", "))
            }
        }
    }
}

/// Output of a parameter decode: ABI type-signature fragments and the
/// parallel positional values, both in call order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedParameters {
    pub types: Vec<String>,
    pub values: Vec<CallValue>,
}

/// Decodes transport strings (or builders) into [`DecodedParameters`].
pub struct ParameterDecoder {
    derivation: Arc<dyn AddressDerivation>,
}

impl ParameterDecoder {
    pub fn new(derivation: Arc<dyn AddressDerivation>) -> Self {
        Self { derivation }
    }

    /// Decode a transport string.
    pub fn decode_str(&self, transport_str: &str) -> Result<DecodedParameters, ParamError> {
        let list = transport::parse_transport(transport_str)?;
        self.decode(&list)
    }

    /// Decode a builder directly, without the string hop. Yields the same
    /// `(types, values)` as `decode_str(&builder.encode())`.
    pub fn decode_builder(&self, builder: &ParameterBuilder) -> Result<DecodedParameters, ParamError> {
        self.decode(builder.params())
    }

    /// Decode an in-memory parameter list.
    pub fn decode(&self, list: &ParameterList) -> Result<DecodedParameters, ParamError> {
        trace!(parameters = list.len(), "decoding call parameters");
        self.decode_at_depth(list, 0)
    }

    fn decode_at_depth(
        &self,
        list: &ParameterList,
        depth: usize,
    ) -> Result<DecodedParameters, ParamError> {
        if depth > MAX_TUPLE_DEPTH {
            return Err(ParamError::TupleDepthExceeded {
                depth,
                max: MAX_TUPLE_DEPTH,
            });
        }

        let normalizer = AddressNormalizer::new(self.derivation.as_ref());
        let mut types = Vec::with_capacity(list.len());
        let mut values = Vec::with_capacity(list.len());

        for param in list {
            let (ty, value) = self.decode_parameter(param, &normalizer, depth)?;
            types.push(ty);
            values.push(value);
        }

        Ok(DecodedParameters { types, values })
    }

    fn decode_parameter(
        &self,
        param: &Parameter,
        normalizer: &AddressNormalizer<'_>,
        depth: usize,
    ) -> Result<(String, CallValue), ParamError> {
        let value = match (param.tag, &param.value) {
            (TypeTag::Address, ParameterValue::Scalar(raw)) => {
                CallValue::Scalar(normalizer.normalize(raw)?)
            }
            (TypeTag::AddressArray, ParameterValue::List(raws)) => {
                let normalized = raws
                    .iter()
                    .map(|raw| normalizer.normalize(raw))
                    .collect::<Result<Vec<_>, _>>()?;
                CallValue::Array(normalized)
            }
            (TypeTag::Bytes32, ParameterValue::Scalar(payload)) => {
                let bytes = transport::decode_bytes32(payload)?;
                CallValue::Bytes(bytes.to_vec())
            }
            (
                TypeTag::Uint8 | TypeTag::Int64 | TypeTag::Uint64 | TypeTag::Uint256
                | TypeTag::String,
                ParameterValue::Scalar(s),
            ) => CallValue::Scalar(s.clone()),
            (
                TypeTag::Uint64Array | TypeTag::Uint256Array | TypeTag::StringArray,
                ParameterValue::List(items),
            ) => CallValue::Array(items.clone()),
            (TypeTag::Tuple, ParameterValue::Tuple(nested)) => {
                let decoded = self.decode_at_depth(nested, depth + 1)?;
                let fragment = format!("({})", decoded.types.join(","));
                return Ok((fragment, CallValue::Tuple(decoded.values)));
            }
            (TypeTag::TupleArray, ParameterValue::TupleList(lists)) => {
                return self.decode_tuple_array(lists, depth);
            }
            (tag, value) => {
                return Err(ParamError::MalformedTransport {
                    reason: format!("'{tag}' descriptor carries a mismatched payload: {value:?}"),
                })
            }
        };
        Ok((param.tag.as_tag().to_string(), value))
    }

    /// Every element of a tuple array must resolve to the same ordered
    /// type list as the first one decoded.
    fn decode_tuple_array(
        &self,
        lists: &[ParameterList],
        depth: usize,
    ) -> Result<(String, CallValue), ParamError> {
        let mut expected_types: Option<Vec<String>> = None;
        let mut tuples = Vec::with_capacity(lists.len());

        for list in lists {
            let decoded = self.decode_at_depth(list, depth + 1)?;
            match &expected_types {
                None => expected_types = Some(decoded.types),
                Some(expected) if *expected != decoded.types => {
                    return Err(ParamError::TupleShapeMismatch {
                        expected: expected.join(","),
                        got: decoded.types.join(","),
                    });
                }
                Some(_) => {}
            }
            tuples.push(decoded.values);
        }

        let inner = expected_types.unwrap_or_default().join(",");
        Ok((format!("({inner})[]"), CallValue::TupleArray(tuples)))
    }
}
