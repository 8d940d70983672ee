//! # paramcodec-abi
//!
//! The decode side of ParamCodec: resolves transport strings (or builders)
//! into the flat `(types, values)` pair handed to an ABI-encoding layer,
//! and decodes contract call results back into typed values.
//!
//! ## Implementation notes
//! - Address normalization goes through the `AddressDerivation` seam from
//!   `paramcodec-core`; pick a chain crate (e.g. `paramcodec-hedera`) for
//!   the concrete derivation.
//! - Decoding is synchronous, pure, and all-or-nothing.

pub mod decoder;
pub mod normalizer;
pub mod result;

pub use decoder::{CallValue, DecodedParameters, ParameterDecoder};
pub use normalizer::{AddressNormalizer, HEX_ADDRESS_MIN_LEN};
pub use result::{
    decode_result, DecodedResult, RawFunctionResult, ResultAccessor, ReturnType, TypedValue,
};
