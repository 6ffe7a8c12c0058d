//! Spend gating for locked distribution addresses.
//!
//! A transaction is invalid if any output it consumes is owned by a locked
//! distribution address. Owners that are malformed, empty, or outside the
//! distribution set never match.

use allot_core::error::AllotError;
use allot_core::output::SpentOutput;
use allot_core::types::Address;
use tracing::warn;

use crate::registry::DistributionRegistry;

impl DistributionRegistry {
    /// Returns true if any of `spent` is owned by a locked address.
    pub fn is_locked<I>(&self, spent: I) -> bool
    where
        I: IntoIterator,
        I::Item: SpentOutput,
    {
        self.first_locked(spent).is_some()
    }

    /// The locked owner of the first offending output, if any.
    pub fn first_locked<I>(&self, spent: I) -> Option<&Address>
    where
        I: IntoIterator,
        I::Item: SpentOutput,
    {
        spent
            .into_iter()
            .find_map(|output| self.locked.get(output.owner()))
    }

    /// Gate a transaction's resolved inputs.
    pub fn check_spend<I>(&self, spent: I) -> Result<(), AllotError>
    where
        I: IntoIterator,
        I::Item: SpentOutput,
    {
        match self.first_locked(spent) {
            None => Ok(()),
            Some(address) => {
                warn!(
                    network = %self.network(),
                    address = %address,
                    "rejecting spend of locked distribution output"
                );
                Err(AllotError::LockedOutputSpent {
                    address: address.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Network;
    use allot_core::output::UxOut;
    use rand::seq::SliceRandom;
    use rand::thread_rng;

    fn mainnet() -> &'static DistributionRegistry {
        DistributionRegistry::mainnet()
    }

    fn outputs(addrs: &[Address]) -> Vec<UxOut> {
        addrs
            .iter()
            .map(|a| UxOut::owned_by(a.clone(), 1_000_000))
            .collect()
    }

    #[test]
    fn empty_spend_is_not_locked() {
        assert!(!mainnet().is_locked(Vec::<UxOut>::new()));
        assert!(mainnet().check_spend(std::iter::empty::<Address>()).is_ok());
    }

    #[test]
    fn unlocked_only_is_not_locked() {
        let spent = outputs(&mainnet().unlocked_addresses());
        assert!(!mainnet().is_locked(&spent));
        assert_eq!(mainnet().first_locked(&spent), None);
    }

    #[test]
    fn every_locked_address_is_caught() {
        for addr in mainnet().locked_addresses() {
            let spent = outputs(&[addr.clone()]);
            assert!(mainnet().is_locked(&spent), "{addr} should be locked");
        }
    }

    #[test]
    fn one_locked_among_others_is_locked() {
        let locked = mainnet().locked_addresses()[40].clone();
        let mut spent = outputs(&mainnet().unlocked_addresses()[..3]);
        spent.push(UxOut::owned_by("not-a-distribution-address", 5));
        spent.push(UxOut::owned_by(locked.clone(), 1));
        spent.push(UxOut::owned_by("", 0));

        assert!(mainnet().is_locked(&spent));
        assert_eq!(mainnet().first_locked(&spent), Some(&locked));
        assert_eq!(
            mainnet().check_spend(&spent),
            Err(AllotError::LockedOutputSpent {
                address: locked.to_string()
            })
        );
    }

    #[test]
    fn outsiders_and_malformed_owners_are_not_locked() {
        let spent = vec![
            Address::from(""),
            Address::from("0OIl"),
            Address::from("xwrUM5i3swHaSQn3N5fDE436oK2HmXvxCR"),
        ];
        assert!(!mainnet().is_locked(&spent));
    }

    #[test]
    fn order_and_duplicates_do_not_matter() {
        let mut rng = thread_rng();
        let locked = mainnet().locked_addresses()[0].clone();

        let mut with_locked = mainnet().unlocked_addresses();
        with_locked.push(locked.clone());
        with_locked.push(locked);
        let mut without_locked = mainnet().unlocked_addresses();
        without_locked.extend(mainnet().unlocked_addresses());

        for _ in 0..32 {
            with_locked.shuffle(&mut rng);
            without_locked.shuffle(&mut rng);
            assert!(mainnet().is_locked(&with_locked));
            assert!(!mainnet().is_locked(&without_locked));
        }
    }

    #[test]
    fn stops_at_first_locked_output() {
        let locked = mainnet().locked_addresses();
        let mut visited = 0;
        let spent = locked.iter().inspect(|_| visited += 1);
        assert!(mainnet().is_locked(spent));
        assert_eq!(visited, 1);
    }

    #[test]
    fn fixture_never_locks() {
        let r = DistributionRegistry::for_network(Network::Fixture).unwrap();
        assert!(!r.is_locked(&r.all_addresses()));
    }
}
