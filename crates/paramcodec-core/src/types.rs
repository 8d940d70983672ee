//! The closed registry of supported parameter types.
//!
//! Both the encode side (builder) and the decode side (parameter decoder)
//! consume this one enum, so the two can never fall out of sync: adding a
//! type is a compile-time-checked change in one place.

use crate::error::ParamError;
use std::fmt;
use std::str::FromStr;

/// Wire tag of a call parameter.
/// The string forms below are the exact tags used in transport descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Address,
    AddressArray,
    Bytes32,
    Uint8,
    Int64,
    Uint64,
    Uint64Array,
    Uint256,
    Uint256Array,
    Tuple,
    TupleArray,
    String,
    StringArray,
}

impl TypeTag {
    /// The exact tag written into a wire descriptor.
    pub const fn as_tag(&self) -> &'static str {
        match self {
            TypeTag::Address => "address",
            TypeTag::AddressArray => "address[]",
            TypeTag::Bytes32 => "bytes32",
            TypeTag::Uint8 => "uint8",
            TypeTag::Int64 => "int64",
            TypeTag::Uint64 => "uint64",
            TypeTag::Uint64Array => "uint64[]",
            TypeTag::Uint256 => "uint256",
            TypeTag::Uint256Array => "uint256[]",
            TypeTag::Tuple => "tuple",
            TypeTag::TupleArray => "tuple[]",
            TypeTag::String => "string",
            TypeTag::StringArray => "string[]",
        }
    }

    /// True for tags whose descriptor carries one value element per array entry.
    pub const fn is_array(&self) -> bool {
        matches!(
            self,
            TypeTag::AddressArray
                | TypeTag::Uint64Array
                | TypeTag::Uint256Array
                | TypeTag::StringArray
                | TypeTag::TupleArray
        )
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for TypeTag {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "address" => Ok(TypeTag::Address),
            "address[]" => Ok(TypeTag::AddressArray),
            "bytes32" => Ok(TypeTag::Bytes32),
            "uint8" => Ok(TypeTag::Uint8),
            "int64" => Ok(TypeTag::Int64),
            "uint64" => Ok(TypeTag::Uint64),
            "uint64[]" => Ok(TypeTag::Uint64Array),
            "uint256" => Ok(TypeTag::Uint256),
            "uint256[]" => Ok(TypeTag::Uint256Array),
            "tuple" => Ok(TypeTag::Tuple),
            "tuple[]" => Ok(TypeTag::TupleArray),
            "string" => Ok(TypeTag::String),
            "string[]" => Ok(TypeTag::StringArray),
            other => Err(ParamError::UnimplementedType {
                tag: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_display_roundtrip() {
        for tag in [
            TypeTag::Address,
            TypeTag::AddressArray,
            TypeTag::Bytes32,
            TypeTag::Uint8,
            TypeTag::Int64,
            TypeTag::Uint64,
            TypeTag::Uint64Array,
            TypeTag::Uint256,
            TypeTag::Uint256Array,
            TypeTag::Tuple,
            TypeTag::TupleArray,
            TypeTag::String,
            TypeTag::StringArray,
        ] {
            let parsed: TypeTag = tag.as_tag().parse().unwrap();
            assert_eq!(parsed, tag);
        }
    }

    #[test]
    fn unknown_tag_is_rejected_by_name() {
        let err = "GaryDu".parse::<TypeTag>().unwrap_err();
        assert!(err.to_string().contains("Type \"GaryDu\" not implemented"));
    }

    #[test]
    fn array_tags() {
        assert!(TypeTag::AddressArray.is_array());
        assert!(TypeTag::TupleArray.is_array());
        assert!(!TypeTag::Address.is_array());
        assert!(!TypeTag::Tuple.is_array());
    }
}
