//! Fluent builder for contract call parameters.
//!
//! Each `add_*` call appends exactly one descriptor; the builder is then
//! serialized once with [`ParameterBuilder::encode`] and shipped across the
//! process boundary. Addresses are stored raw; chain-native ids are only
//! normalized on the decode side. Numeric values are stored as decimal
//! strings with no range validation; the ABI-encoding layer owns that.

use crate::error::ParamError;
use crate::transport;
use crate::types::TypeTag;
use crate::value::{Parameter, ParameterList, ParameterValue};
use alloy_primitives::U256;

/// Accumulates an ordered list of typed call parameters.
///
/// Builders are independent: any number can be constructed and encoded
/// concurrently without coordination.
#[derive(Debug, Clone, Default)]
pub struct ParameterBuilder {
    list: ParameterList,
}

impl ParameterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an address, either a chain-native account id or an
    /// already-derived hex address. Stored unmodified.
    pub fn add_address(self, address: impl Into<String>) -> Self {
        self.push_scalar(TypeTag::Address, address.into())
    }

    pub fn add_address_array<I, S>(self, addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_list(
            TypeTag::AddressArray,
            addresses.into_iter().map(Into::into).collect(),
        )
    }

    /// Append a fixed 32-byte value.
    ///
    /// # Errors
    /// Returns [`ParamError::Bytes32Length`] unless `bytes` is exactly
    /// 32 bytes.
    pub fn add_bytes32(self, bytes: &[u8]) -> Result<Self, ParamError> {
        let payload = transport::encode_bytes32(bytes)?;
        Ok(self.push_scalar(TypeTag::Bytes32, payload))
    }

    pub fn add_uint8(self, value: u8) -> Self {
        self.push_scalar(TypeTag::Uint8, value.to_string())
    }

    pub fn add_int64(self, value: i64) -> Self {
        self.push_scalar(TypeTag::Int64, value.to_string())
    }

    pub fn add_uint64(self, value: u64) -> Self {
        self.push_scalar(TypeTag::Uint64, value.to_string())
    }

    pub fn add_uint64_array(self, values: &[u64]) -> Self {
        self.push_list(
            TypeTag::Uint64Array,
            values.iter().map(u64::to_string).collect(),
        )
    }

    pub fn add_uint256(self, value: U256) -> Self {
        self.push_scalar(TypeTag::Uint256, value.to_string())
    }

    pub fn add_uint256_array(self, values: &[U256]) -> Self {
        self.push_list(
            TypeTag::Uint256Array,
            values.iter().map(U256::to_string).collect(),
        )
    }

    pub fn add_string(self, value: impl Into<String>) -> Self {
        self.push_scalar(TypeTag::String, value.into())
    }

    pub fn add_string_array<I, S>(self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_list(
            TypeTag::StringArray,
            values.into_iter().map(Into::into).collect(),
        )
    }

    /// Append a nested parameter group. The nested builder is consumed,
    /// so the appended descriptor can no longer be mutated.
    pub fn add_tuple(mut self, nested: ParameterBuilder) -> Self {
        self.list.push(Parameter {
            tag: TypeTag::Tuple,
            value: ParameterValue::Tuple(Box::new(nested.list)),
        });
        self
    }

    /// Append an array of nested parameter groups. Structural consistency
    /// across elements is checked at decode time, not here.
    pub fn add_tuple_array(mut self, nested: Vec<ParameterBuilder>) -> Self {
        self.list.push(Parameter {
            tag: TypeTag::TupleArray,
            value: ParameterValue::TupleList(nested.into_iter().map(|b| b.list).collect()),
        });
        self
    }

    /// Serialize to the transport string: `base64(JSON descriptor array)`.
    /// Pure and idempotent.
    pub fn encode(&self) -> String {
        transport::encode_parameters(&self.list)
    }

    /// The accumulated parameters, for decoding a builder directly without
    /// the string hop.
    pub fn params(&self) -> &ParameterList {
        &self.list
    }

    fn push_scalar(mut self, tag: TypeTag, value: String) -> Self {
        self.list.push(Parameter {
            tag,
            value: ParameterValue::Scalar(value),
        });
        self
    }

    fn push_list(mut self, tag: TypeTag, values: Vec<String>) -> Self {
        self.list.push(Parameter {
            tag,
            value: ParameterValue::List(values),
        });
        self
    }
}
