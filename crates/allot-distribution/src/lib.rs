//! allot-distribution
//!
//! The genesis coin distribution: a fixed, ordered set of addresses each
//! funded with an equal share of the maximum supply. The first
//! `initial_unlocked_count` addresses are spendable; the rest are locked, and
//! any transaction consuming an output they own is invalid.
//!
//! Unlocking is manual. `UnlockSchedule` carries the intended rate and
//! interval, but a release has to raise the unlocked count for anything to
//! change.
//!
//! The free functions below serve the built-in mainnet distribution.
//! Other deployments build a [`DistributionRegistry`] from their own
//! [`DistributionParams`].

pub mod addresses;
pub mod constants;
pub mod lock;
pub mod params;
pub mod registry;

pub use constants::*;
pub use params::{DistributionParams, Network, UnlockSchedule};
pub use registry::{DistributionRegistry, GenesisAllocation, LockStatus};

use allot_core::output::SpentOutput;
use allot_core::types::Address;

/// All mainnet distribution addresses, in canonical order.
pub fn distribution_addresses() -> Vec<Address> {
    DistributionRegistry::mainnet().all_addresses()
}

/// Mainnet distribution addresses whose outputs are spendable.
pub fn unlocked_distribution_addresses() -> Vec<Address> {
    DistributionRegistry::mainnet().unlocked_addresses()
}

/// Mainnet distribution addresses whose outputs are not spendable.
pub fn locked_distribution_addresses() -> Vec<Address> {
    DistributionRegistry::mainnet().locked_addresses()
}

/// Returns true if the transaction spends an output owned by a locked
/// mainnet distribution address.
pub fn transaction_is_locked<I>(spent: I) -> bool
where
    I: IntoIterator,
    I::Item: SpentOutput,
{
    DistributionRegistry::mainnet().is_locked(spent)
}
