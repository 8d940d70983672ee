//! Contract call result decoding.
//!
//! The execution layer hands back an opaque accessor over the call's raw
//! return data plus the list of return types the caller expects; this
//! module validates the requested types, reads each value positionally,
//! and hands back stringified `{type, value}` pairs.

use alloy_primitives::{I256, U256};
use paramcodec_core::ParamError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// A return type the result decoder knows how to read.
///
/// Integer widths run from 8 to 256 bits in 8-bit steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnType {
    Uint(u16),
    Int(u16),
    Bool,
    String,
    Address,
    Bytes32,
}

impl ReturnType {
    /// Every supported return type name, in listing order.
    pub fn supported_names() -> Vec<String> {
        let mut names = Vec::with_capacity(68);
        for bits in (8..=256).step_by(8) {
            names.push(format!("uint{bits}"));
        }
        for bits in (8..=256).step_by(8) {
            names.push(format!("int{bits}"));
        }
        names.extend(["bool", "string", "address", "bytes32"].map(String::from));
        names
    }

    fn unsupported(requested: &str) -> ParamError {
        ParamError::UnsupportedReturnType {
            requested: requested.to_string(),
            available: Self::supported_names().join(", "),
        }
    }
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnType::Uint(bits) => write!(f, "uint{bits}"),
            ReturnType::Int(bits) => write!(f, "int{bits}"),
            ReturnType::Bool => write!(f, "bool"),
            ReturnType::String => write!(f, "string"),
            ReturnType::Address => write!(f, "address"),
            ReturnType::Bytes32 => write!(f, "bytes32"),
        }
    }
}

impl FromStr for ReturnType {
    type Err = ParamError;

    /// Case-insensitive parse; anything outside the supported set fails
    /// with an error listing every valid name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "bool" => return Ok(ReturnType::Bool),
            "string" => return Ok(ReturnType::String),
            "address" => return Ok(ReturnType::Address),
            "bytes32" => return Ok(ReturnType::Bytes32),
            _ => {}
        }

        let (signed, width) = if let Some(w) = lower.strip_prefix("uint") {
            (false, w)
        } else if let Some(w) = lower.strip_prefix("int") {
            (true, w)
        } else {
            return Err(Self::unsupported(s));
        };

        let bits: u16 = width.parse().map_err(|_| Self::unsupported(s))?;
        if bits == 0 || bits > 256 || bits % 8 != 0 {
            return Err(Self::unsupported(s));
        }
        Ok(if signed {
            ReturnType::Int(bits)
        } else {
            ReturnType::Uint(bits)
        })
    }
}

/// Typed getters over a contract call's raw return data.
///
/// Getters are positional: `index` is the value's position in the return
/// list, not a byte offset.
pub trait ResultAccessor {
    fn uint(&self, index: usize, bits: u16) -> U256;
    fn int(&self, index: usize, bits: u16) -> I256;
    fn bool_at(&self, index: usize) -> bool;
    fn string_at(&self, index: usize) -> String;
    fn address_at(&self, index: usize) -> String;
    fn bytes32_at(&self, index: usize) -> [u8; 32];
    fn gas_used(&self) -> u64;
}

/// One decoded return value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedValue {
    #[serde(rename = "type")]
    pub ty: String,
    pub value: String,
}

/// All decoded return values plus the call's gas-used figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedResult {
    pub values: Vec<TypedValue>,
    pub gas_used: u64,
}

/// Decode a call result: validate every requested type name up front, then
/// read the accessor's getter at each position and stringify. `bytes32`
/// values come back hex-encoded with a `0x` prefix. No getter runs if any
/// requested name fails to parse.
pub fn decode_result(
    accessor: &dyn ResultAccessor,
    requested: &[&str],
) -> Result<DecodedResult, ParamError> {
    trace!(count = requested.len(), "decoding contract call result");

    let types = requested
        .iter()
        .map(|name| name.parse::<ReturnType>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut values = Vec::with_capacity(types.len());
    for (index, ty) in types.into_iter().enumerate() {
        let value = match ty {
            ReturnType::Uint(bits) => accessor.uint(index, bits).to_string(),
            ReturnType::Int(bits) => accessor.int(index, bits).to_string(),
            ReturnType::Bool => accessor.bool_at(index).to_string(),
            ReturnType::String => accessor.string_at(index),
            ReturnType::Address => accessor.address_at(index),
            ReturnType::Bytes32 => format!("0x{}", hex::encode(accessor.bytes32_at(index))),
        };
        values.push(TypedValue {
            ty: ty.to_string(),
            value,
        });
    }

    Ok(DecodedResult {
        values,
        gas_used: accessor.gas_used(),
    })
}

/// A word-indexed accessor over raw ABI return bytes.
///
/// Value `i` occupies the 32-byte word at offset `i * 32`; dynamic strings
/// are reached through the usual offset + length indirection. Reads past
/// the end of the data yield zeroed words rather than panicking.
#[derive(Debug, Clone)]
pub struct RawFunctionResult {
    data: Vec<u8>,
    gas_used: u64,
}

impl RawFunctionResult {
    pub fn new(data: Vec<u8>, gas_used: u64) -> Self {
        Self { data, gas_used }
    }

    fn word(&self, index: usize) -> [u8; 32] {
        let mut out = [0u8; 32];
        let start = index * 32;
        if let Some(slice) = self.data.get(start..start + 32) {
            out.copy_from_slice(slice);
        }
        out
    }
}

impl ResultAccessor for RawFunctionResult {
    fn uint(&self, index: usize, _bits: u16) -> U256 {
        U256::from_be_bytes(self.word(index))
    }

    fn int(&self, index: usize, _bits: u16) -> I256 {
        I256::from_raw(U256::from_be_bytes(self.word(index)))
    }

    fn bool_at(&self, index: usize) -> bool {
        self.word(index).iter().any(|b| *b != 0)
    }

    fn string_at(&self, index: usize) -> String {
        let offset = U256::from_be_bytes(self.word(index));
        let Ok(offset) = usize::try_from(offset) else {
            return String::new();
        };
        // The offset and length come straight off the wire; checked math
        // keeps a hostile value from overflowing the range bounds.
        let Some(len_end) = offset.checked_add(32) else {
            return String::new();
        };
        let Some(len_word) = self.data.get(offset..len_end) else {
            return String::new();
        };
        let mut len_buf = [0u8; 32];
        len_buf.copy_from_slice(len_word);
        let Ok(len) = usize::try_from(U256::from_be_bytes(len_buf)) else {
            return String::new();
        };
        let Some(text_end) = len_end.checked_add(len) else {
            return String::new();
        };
        match self.data.get(len_end..text_end) {
            Some(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            None => String::new(),
        }
    }

    fn address_at(&self, index: usize) -> String {
        let word = self.word(index);
        format!("0x{}", hex::encode(&word[12..]))
    }

    fn bytes32_at(&self, index: usize) -> [u8; 32] {
        self.word(index)
    }

    fn gas_used(&self) -> u64 {
        self.gas_used
    }
}
