use serde::{Deserialize, Serialize};

use crate::types::{Address, Balance, Timestamp};

// ── SpentOutput ───────────────────────────────────────────────────────────────

/// Anything a transaction consumes that names an owning address.
///
/// The transaction validator resolves its inputs to its own output type and
/// hands them to the lock predicate through this trait; only the owner is read.
pub trait SpentOutput {
    fn owner(&self) -> &Address;
}

impl SpentOutput for Address {
    fn owner(&self) -> &Address {
        self
    }
}

impl<T: SpentOutput + ?Sized> SpentOutput for &T {
    fn owner(&self) -> &Address {
        (**self).owner()
    }
}

// ── UxOut ─────────────────────────────────────────────────────────────────────

/// Block-level metadata of an unspent output.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UxHead {
    /// Timestamp of the block that created the output.
    pub time: Timestamp,
    /// Sequence number of the block that created the output.
    pub block_seq: u64,
}

/// The spendable content of an unspent output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UxBody {
    /// Hex hash of the transaction that created the output.
    pub src_transaction: String,
    pub address: Address,
    pub coins: Balance,
    pub hours: u64,
}

/// An unspent output as resolved by the transaction validator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UxOut {
    #[serde(default)]
    pub head: UxHead,
    pub body: UxBody,
}

impl UxOut {
    /// Convenience constructor for an output with empty metadata.
    pub fn owned_by(address: impl Into<Address>, coins: Balance) -> Self {
        Self {
            head: UxHead::default(),
            body: UxBody {
                src_transaction: String::new(),
                address: address.into(),
                coins,
                hours: 0,
            },
        }
    }
}

impl SpentOutput for UxOut {
    fn owner(&self) -> &Address {
        &self.body.address
    }
}
