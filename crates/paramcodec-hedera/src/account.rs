//! Hedera account identifiers and their solidity-address form.

use paramcodec_core::ParamError;
use std::fmt;
use std::str::FromStr;

/// A Hedera `shard.realm.num` account identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId {
    pub shard: u32,
    pub realm: u64,
    pub num: u64,
}

impl AccountId {
    pub const fn new(shard: u32, realm: u64, num: u64) -> Self {
        Self { shard, realm, num }
    }

    /// The long-zero solidity address: 4-byte shard, 8-byte realm and
    /// 8-byte num, big-endian, `0x`-prefixed lowercase hex.
    pub fn to_solidity_address(&self) -> String {
        format!("0x{:08x}{:016x}{:016x}", self.shard, self.realm, self.num)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
    }
}

impl FromStr for AccountId {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ParamError::InvalidAccountId {
            id: s.to_string(),
            reason: reason.to_string(),
        };

        // A trailing "-abcde" checksum is tolerated and ignored; the
        // numeric triplet alone identifies the account.
        let body = s.split('-').next().unwrap_or(s);

        let mut parts = body.split('.');
        let (shard, realm, num) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(shard), Some(realm), Some(num), None) => (shard, realm, num),
            _ => return Err(invalid("expected 'shard.realm.num'")),
        };

        Ok(Self {
            shard: shard.parse().map_err(|_| invalid("shard is not a number"))?,
            realm: realm.parse().map_err(|_| invalid("realm is not a number"))?,
            num: num.parse().map_err(|_| invalid("num is not a number"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let id: AccountId = "0.0.12345".parse().unwrap();
        assert_eq!(id, AccountId::new(0, 0, 12345));
        assert_eq!(id.to_string(), "0.0.12345");
    }

    #[test]
    fn checksum_suffix_is_ignored() {
        let id: AccountId = "0.0.123-vfmkw".parse().unwrap();
        assert_eq!(id, AccountId::new(0, 0, 123));
    }

    #[test]
    fn solidity_address_is_long_zero_form() {
        let id = AccountId::new(0, 0, 123);
        assert_eq!(
            id.to_solidity_address(),
            "0x000000000000000000000000000000000000007b"
        );

        let id = AccountId::new(1, 2, 3);
        assert_eq!(
            id.to_solidity_address(),
            "0x0000000100000000000000020000000000000003"
        );
    }

    #[test]
    fn malformed_ids_are_rejected() {
        for bad in ["", "0.0", "0.0.0.0", "a.b.c", "0.0.x"] {
            let err = bad.parse::<AccountId>().unwrap_err();
            assert!(matches!(err, ParamError::InvalidAccountId { .. }), "{bad}");
        }
    }
}
