//! Mainnet distribution constants.
//!
//! 100,000,000 coins split evenly across 100 genesis addresses. The first 25
//! are spendable; the remaining 75 stay locked until the unlock rule is
//! switched on by a release.

use allot_core::types::Balance;

/// Maximum coin supply. Every coin exists at genesis.
pub const MAX_COIN_SUPPLY: Balance = 100_000_000;

/// Number of distribution addresses.
pub const DISTRIBUTION_ADDRESSES_TOTAL: u64 = 100;

/// Initial balance of each distribution address (1,000,000 coins).
pub const DISTRIBUTION_ADDRESS_INITIAL_BALANCE: Balance =
    MAX_COIN_SUPPLY / DISTRIBUTION_ADDRESSES_TOTAL;

/// Number of distribution addresses spendable from genesis.
pub const INITIAL_UNLOCKED_COUNT: u64 = 25;

/// Addresses to unlock per `UNLOCK_TIME_INTERVAL` once the initial set is
/// distributed. Not consumed yet.
pub const UNLOCK_ADDRESS_RATE: u64 = 5;

/// Unlock interval in seconds (one year). Not consumed yet.
pub const UNLOCK_TIME_INTERVAL: u64 = 60 * 60 * 24 * 365;

const _: () = assert!(
    MAX_COIN_SUPPLY % DISTRIBUTION_ADDRESSES_TOTAL == 0,
    "MAX_COIN_SUPPLY must be evenly divisible by DISTRIBUTION_ADDRESSES_TOTAL"
);

const _: () = assert!(
    INITIAL_UNLOCKED_COUNT <= DISTRIBUTION_ADDRESSES_TOTAL,
    "INITIAL_UNLOCKED_COUNT must not exceed DISTRIBUTION_ADDRESSES_TOTAL"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_balance_is_exact_share() {
        assert_eq!(DISTRIBUTION_ADDRESS_INITIAL_BALANCE, 1_000_000);
        assert_eq!(
            DISTRIBUTION_ADDRESS_INITIAL_BALANCE * DISTRIBUTION_ADDRESSES_TOTAL,
            MAX_COIN_SUPPLY
        );
    }

    #[test]
    fn unlock_interval_is_one_year() {
        assert_eq!(UNLOCK_TIME_INTERVAL, 31_536_000);
    }
}
