/// ─── Allot Coin Units ───────────────────────────────────────────────────────
///
/// Balances in the distribution schedule are whole coins. The ledger itself
/// tracks droplets, the smallest indivisible unit.

/// 1 coin expressed in droplets.
pub const DROPLETS_PER_COIN: u64 = 1_000_000;

/// Length of a decoded address: 20-byte key, 1 version byte, 4-byte checksum.
pub const ADDRESS_BYTES: usize = 25;

/// Length of the key hash inside a decoded address.
pub const ADDRESS_KEY_BYTES: usize = 20;

/// Length of the trailing address checksum.
pub const ADDRESS_CHECKSUM_BYTES: usize = 4;

/// Convert whole coins to droplets. Returns `None` on overflow.
pub const fn coins_to_droplets(coins: u64) -> Option<u64> {
    coins.checked_mul(DROPLETS_PER_COIN)
}
