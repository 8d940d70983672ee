//! # paramcodec-hedera
//!
//! Hedera implementation of the `AddressDerivation` seam: parses
//! `shard.realm.num` account identifiers and derives their long-zero
//! solidity address deterministically, with no network I/O.

pub mod account;

pub use account::AccountId;

use paramcodec_core::{AddressDerivation, ParamError};

/// Derives long-zero solidity addresses from Hedera account ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct HederaDerivation;

impl AddressDerivation for HederaDerivation {
    fn derive(&self, native_id: &str) -> Result<String, ParamError> {
        let account: AccountId = native_id.parse()?;
        Ok(account.to_solidity_address())
    }
}
