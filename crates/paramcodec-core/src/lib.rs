//! # paramcodec-core
//!
//! The type registry, parameter model, fluent builder, and transport wire
//! codec shared by all ParamCodec crates. The decode side (flattening to
//! `(types, values)` and contract result decoding) lives in
//! `paramcodec-abi`; chain-specific address derivation lives in crates like
//! `paramcodec-hedera`.

pub mod builder;
pub mod derive;
pub mod error;
pub mod transport;
pub mod types;
pub mod value;

pub use builder::ParameterBuilder;
pub use derive::AddressDerivation;
pub use error::ParamError;
pub use transport::{encode_parameters, parse_transport, MAX_TUPLE_DEPTH};
pub use types::TypeTag;
pub use value::{Parameter, ParameterList, ParameterValue};
