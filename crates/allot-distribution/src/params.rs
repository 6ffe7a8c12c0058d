use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use allot_core::error::AllotError;
use allot_core::types::{Address, Balance};

use crate::addresses::{FIXTURE_ADDRESS, MAINNET_ADDRESSES};
use crate::constants::{
    INITIAL_UNLOCKED_COUNT, MAX_COIN_SUPPLY, UNLOCK_ADDRESS_RATE, UNLOCK_TIME_INTERVAL,
};

// ── Network ──────────────────────────────────────────────────────────────────

/// Built-in deployments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Network {
    /// The canonical 100-address distribution.
    Mainnet,
    /// A single unlocked address, for tests and local chains.
    Fixture,
}

impl Network {
    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Fixture => "fixture",
        }
    }

    /// Distribution parameters for this network.
    pub fn params(&self) -> DistributionParams {
        match self {
            Network::Mainnet => DistributionParams {
                network: self.name().to_string(),
                max_coin_supply: MAX_COIN_SUPPLY,
                addresses: MAINNET_ADDRESSES.iter().copied().map(Address::from).collect(),
                initial_unlocked_count: INITIAL_UNLOCKED_COUNT,
                unlock_schedule: UnlockSchedule::default(),
            },
            Network::Fixture => DistributionParams {
                network: self.name().to_string(),
                max_coin_supply: MAX_COIN_SUPPLY,
                addresses: vec![Address::from(FIXTURE_ADDRESS)],
                initial_unlocked_count: 1,
                unlock_schedule: UnlockSchedule::default(),
            },
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "fixture" => Ok(Network::Fixture),
            other => Err(format!("unknown network '{other}' (expected mainnet or fixture)")),
        }
    }
}

// ── UnlockSchedule ───────────────────────────────────────────────────────────

/// Parameters for gradually unlocking the locked suffix.
///
/// Nothing reads these at runtime. Addresses move from locked to unlocked
/// only when `initial_unlocked_count` is raised in a release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnlockSchedule {
    /// Addresses unlocked per interval.
    pub address_rate: u64,
    /// Interval length in seconds.
    pub interval_secs: u64,
}

impl Default for UnlockSchedule {
    fn default() -> Self {
        Self {
            address_rate: UNLOCK_ADDRESS_RATE,
            interval_secs: UNLOCK_TIME_INTERVAL,
        }
    }
}

// ── DistributionParams ───────────────────────────────────────────────────────

/// Everything that defines a deployment's genesis distribution.
///
/// Only the networks compiled into the program produce these, through
/// [`Network::params`]. There is no runtime loading path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistributionParams {
    /// Human-readable deployment name, used in logs only.
    pub network: String,
    /// Total supply, all of it allocated at genesis.
    pub max_coin_supply: Balance,
    /// Ordered distribution addresses. The order defines the partition.
    pub addresses: Vec<Address>,
    /// Length of the unlocked prefix.
    pub initial_unlocked_count: u64,
    pub unlock_schedule: UnlockSchedule,
}

impl DistributionParams {
    pub fn total(&self) -> u64 {
        self.addresses.len() as u64
    }

    /// Per-address share of the supply. Exact once [`validate`](Self::validate) passes.
    pub fn initial_balance(&self) -> Balance {
        match self.total() {
            0 => 0,
            n => self.max_coin_supply / n,
        }
    }

    /// Check the invariants a registry relies on.
    ///
    /// Any failure here is a misconfiguration and must stop startup.
    pub fn validate(&self) -> Result<(), AllotError> {
        let total = self.total();
        if total == 0 {
            return Err(AllotError::EmptyDistribution);
        }

        if self.max_coin_supply % total != 0 {
            return Err(AllotError::SupplyNotDivisible {
                supply: self.max_coin_supply,
                addresses: total,
            });
        }

        if self.initial_unlocked_count > total {
            return Err(AllotError::UnlockedExceedsTotal {
                unlocked: self.initial_unlocked_count,
                total,
            });
        }

        let mut seen = HashSet::with_capacity(self.addresses.len());
        for addr in &self.addresses {
            if !seen.insert(addr) {
                return Err(AllotError::DuplicateAddress(addr.to_string()));
            }
        }

        Ok(())
    }
}
