use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AllotError {
    // ── Distribution configuration (fatal at startup) ────────────────────────
    #[error(
        "max coin supply {supply} is not evenly divisible by the distribution address count {addresses}"
    )]
    SupplyNotDivisible { supply: u64, addresses: u64 },

    #[error("distribution address set is empty")]
    EmptyDistribution,

    #[error("initial unlocked count {unlocked} exceeds distribution address count {total}")]
    UnlockedExceedsTotal { unlocked: u64, total: u64 },

    #[error("duplicate distribution address: {0}")]
    DuplicateAddress(String),

    // ── Spend gating ─────────────────────────────────────────────────────────
    #[error("transaction spends an output owned by locked distribution address {address}")]
    LockedOutputSpent { address: String },

    // ── Address decoding ─────────────────────────────────────────────────────
    #[error("invalid base58 address encoding: {0}")]
    InvalidBase58(String),

    #[error("invalid address length: expected {expected} bytes, got {got}")]
    InvalidAddressLength { expected: usize, got: usize },

    #[error("address checksum mismatch")]
    AddressChecksumMismatch,
}
