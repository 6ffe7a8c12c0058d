use std::collections::HashSet;

use allot_core::error::AllotError;
use allot_core::types::{Address, Balance};
use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::info;

use crate::params::{DistributionParams, Network, UnlockSchedule};

static MAINNET: Lazy<DistributionRegistry> = Lazy::new(|| {
    DistributionRegistry::for_network(Network::Mainnet)
        .unwrap_or_else(|e| panic!("built-in mainnet distribution is inconsistent: {e}"))
});

/// Whether a distribution address's funds are spendable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LockStatus {
    Unlocked,
    Locked,
}

/// One genesis allocation: a distribution address and its share of supply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenesisAllocation {
    /// Zero-based position in the canonical order.
    pub index: usize,
    pub address: Address,
    pub coins: Balance,
    pub status: LockStatus,
}

/// Validated, immutable view of a deployment's distribution addresses.
///
/// The address list never changes after construction, so the membership
/// sets are built once here and shared by every query. All accessors hand
/// out fresh copies; callers cannot reach the canonical list.
#[derive(Debug)]
pub struct DistributionRegistry {
    params: DistributionParams,
    unlocked_len: usize,
    pub(crate) unlocked: HashSet<Address>,
    pub(crate) locked: HashSet<Address>,
}

impl DistributionRegistry {
    /// Validate `params` and build the registry.
    pub fn new(params: DistributionParams) -> Result<Self, AllotError> {
        params.validate()?;

        // validate() bounds this by addresses.len()
        let unlocked_len = params.initial_unlocked_count as usize;
        let (unlocked, locked) = params.addresses.split_at(unlocked_len);
        let unlocked: HashSet<Address> = unlocked.iter().cloned().collect();
        let locked: HashSet<Address> = locked.iter().cloned().collect();

        info!(
            network = %params.network,
            total = params.total(),
            unlocked = unlocked.len(),
            locked = locked.len(),
            initial_balance = params.initial_balance(),
            "distribution registry initialised"
        );

        Ok(Self {
            params,
            unlocked_len,
            unlocked,
            locked,
        })
    }

    pub fn for_network(network: Network) -> Result<Self, AllotError> {
        Self::new(network.params())
    }

    /// The process-wide mainnet registry, built on first use.
    pub fn mainnet() -> &'static Self {
        &MAINNET
    }

    pub fn params(&self) -> &DistributionParams {
        &self.params
    }

    pub fn network(&self) -> &str {
        &self.params.network
    }

    pub fn max_coin_supply(&self) -> Balance {
        self.params.max_coin_supply
    }

    /// Number of distribution addresses.
    pub fn total(&self) -> u64 {
        self.params.total()
    }

    pub fn initial_unlocked_count(&self) -> u64 {
        self.params.initial_unlocked_count
    }

    /// Per-address genesis balance. Exact: `initial_balance() * total() == max_coin_supply()`.
    pub fn initial_balance(&self) -> Balance {
        self.params.initial_balance()
    }

    pub fn unlock_schedule(&self) -> UnlockSchedule {
        self.params.unlock_schedule
    }

    /// All distribution addresses in canonical order.
    pub fn all_addresses(&self) -> Vec<Address> {
        self.params.addresses.clone()
    }

    /// The unlocked prefix, in canonical order.
    pub fn unlocked_addresses(&self) -> Vec<Address> {
        self.params.addresses[..self.unlocked_len].to_vec()
    }

    /// The locked suffix, in canonical order.
    pub fn locked_addresses(&self) -> Vec<Address> {
        self.params.addresses[self.unlocked_len..].to_vec()
    }

    /// Lock status of `addr`, or `None` if it is not a distribution address.
    pub fn classify(&self, addr: &Address) -> Option<LockStatus> {
        if self.locked.contains(addr) {
            Some(LockStatus::Locked)
        } else if self.unlocked.contains(addr) {
            Some(LockStatus::Unlocked)
        } else {
            None
        }
    }

    pub fn is_distribution_address(&self, addr: &Address) -> bool {
        self.classify(addr).is_some()
    }

    /// The genesis allocation table, one row per address in canonical order.
    pub fn genesis_allocations(&self) -> Vec<GenesisAllocation> {
        let coins = self.initial_balance();
        self.params
            .addresses
            .iter()
            .enumerate()
            .map(|(index, address)| GenesisAllocation {
                index,
                address: address.clone(),
                coins,
                status: if index < self.unlocked_len {
                    LockStatus::Unlocked
                } else {
                    LockStatus::Locked
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        DISTRIBUTION_ADDRESSES_TOTAL, DISTRIBUTION_ADDRESS_INITIAL_BALANCE,
        INITIAL_UNLOCKED_COUNT, MAX_COIN_SUPPLY,
    };

    fn mainnet() -> &'static DistributionRegistry {
        DistributionRegistry::mainnet()
    }

    #[test]
    fn all_addresses_is_full_canonical_list() {
        let all = mainnet().all_addresses();
        assert_eq!(all.len() as u64, DISTRIBUTION_ADDRESSES_TOTAL);
        assert_eq!(all[0].as_str(), "2Er4U9oGkXHjiDG7Qy7GzqEue1pFwCDVF29");
        assert_eq!(all[99].as_str(), "2cWR6UcfFNkktbDbpWVQY1csnmyS7cBQ7Ln");
        assert_eq!(all, mainnet().all_addresses(), "order must be stable");
    }

    #[test]
    fn returned_lists_are_copies() {
        let mut all = mainnet().all_addresses();
        all.clear();
        let mut locked = mainnet().locked_addresses();
        locked[0] = Address::from("tampered");
        let mut unlocked = mainnet().unlocked_addresses();
        unlocked.reverse();

        assert_eq!(mainnet().all_addresses().len(), 100);
        assert_ne!(mainnet().locked_addresses()[0].as_str(), "tampered");
        assert_eq!(
            mainnet().unlocked_addresses()[0].as_str(),
            "2Er4U9oGkXHjiDG7Qy7GzqEue1pFwCDVF29"
        );
    }

    #[test]
    fn unlocked_is_prefix() {
        let all = mainnet().all_addresses();
        let unlocked = mainnet().unlocked_addresses();
        assert_eq!(unlocked.len() as u64, INITIAL_UNLOCKED_COUNT);
        assert_eq!(unlocked[..], all[..25]);
        assert_eq!(unlocked[24].as_str(), "26jfxnyj4tSFRLosciuxWHp4qxyQFWZ1jm6");
    }

    #[test]
    fn locked_is_suffix() {
        let all = mainnet().all_addresses();
        let locked = mainnet().locked_addresses();
        assert_eq!(
            locked.len() as u64,
            DISTRIBUTION_ADDRESSES_TOTAL - INITIAL_UNLOCKED_COUNT
        );
        assert_eq!(locked[..], all[25..]);
        assert_eq!(locked[0].as_str(), "EaoFR1yFVgDxxQQTPyHMutu1D87FotcMqX");
    }

    #[test]
    fn partition_is_exact() {
        let mut joined = mainnet().unlocked_addresses();
        joined.extend(mainnet().locked_addresses());
        assert_eq!(joined, mainnet().all_addresses());

        let unlocked: HashSet<_> = mainnet().unlocked_addresses().into_iter().collect();
        assert!(mainnet()
            .locked_addresses()
            .iter()
            .all(|a| !unlocked.contains(a)));
    }

    #[test]
    fn balances_sum_to_supply() {
        let r = mainnet();
        assert_eq!(r.initial_balance(), DISTRIBUTION_ADDRESS_INITIAL_BALANCE);
        assert_eq!(r.initial_balance() * r.total(), MAX_COIN_SUPPLY);

        let total: Balance = r.genesis_allocations().iter().map(|a| a.coins).sum();
        assert_eq!(total, r.max_coin_supply());
    }

    #[test]
    fn allocations_follow_partition() {
        let allocations = mainnet().genesis_allocations();
        assert_eq!(allocations.len(), 100);
        for (i, a) in allocations.iter().enumerate() {
            assert_eq!(a.index, i);
            let expected = if i < 25 {
                LockStatus::Unlocked
            } else {
                LockStatus::Locked
            };
            assert_eq!(a.status, expected, "allocation {i}");
            assert_eq!(mainnet().classify(&a.address), Some(expected));
        }
    }

    #[test]
    fn classify_unknown_address() {
        let outsider = Address::from("xwrUM5i3swHaSQn3N5fDE436oK2HmXvxCR");
        assert_eq!(mainnet().classify(&outsider), None);
        assert!(!mainnet().is_distribution_address(&outsider));
        assert_eq!(mainnet().classify(&Address::from("")), None);
    }

    #[test]
    fn fixture_is_single_unlocked_address() {
        let r = DistributionRegistry::for_network(Network::Fixture).unwrap();
        assert_eq!(r.total(), 1);
        assert_eq!(r.initial_balance(), MAX_COIN_SUPPLY);
        assert_eq!(r.unlocked_addresses(), r.all_addresses());
        assert!(r.locked_addresses().is_empty());
    }

    #[test]
    fn new_refuses_invalid_params() {
        let mut params = Network::Mainnet.params();
        params.max_coin_supply += 1;
        let err = DistributionRegistry::new(params).unwrap_err();
        assert!(matches!(err, AllotError::SupplyNotDivisible { .. }));
        assert!(err.to_string().contains("not evenly divisible"));
    }
}
