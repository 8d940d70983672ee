//! The chain-native address derivation seam.
//!
//! Deriving a 20-byte hex address from a chain-native account identifier is
//! a per-chain capability this codec depends on but does not implement.
//! Chain crates (e.g. `paramcodec-hedera`) provide the implementations.

use crate::error::ParamError;

/// Deterministically derives a canonical `0x`-prefixed 20-byte hex address
/// from a chain-native account identifier.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so a decoder can be shared across
/// threads without additional locking.
pub trait AddressDerivation: Send + Sync {
    fn derive(&self, native_id: &str) -> Result<String, ParamError>;
}
