//! Affinities and the energy economy.
//!
//! Each drawn card feeds one unit of its affinity into the drawer's
//! pool; costs drain the pool again. `Neutral` is the wildcard: it never
//! accumulates energy of its own, and a neutral cost may be paid from
//! any mix of the other pools.

use serde::{Deserialize, Serialize};

/// A resource type. `Neutral` is the wildcard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Affinity {
    Nature,
    Fire,
    Water,
    Earth,
    Energy,
    Dark,
    Light,
    Neutral,
}

impl Affinity {
    /// All affinities in declaration order. The order matters: wildcard
    /// payment ties break toward earlier entries.
    pub const ALL: [Affinity; 8] = [
        Affinity::Nature,
        Affinity::Fire,
        Affinity::Water,
        Affinity::Earth,
        Affinity::Energy,
        Affinity::Dark,
        Affinity::Light,
        Affinity::Neutral,
    ];

    /// Stable index into [`Affinity::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Affinity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Affinity::Nature => "Nature",
            Affinity::Fire => "Fire",
            Affinity::Water => "Water",
            Affinity::Earth => "Earth",
            Affinity::Energy => "Energy",
            Affinity::Dark => "Dark",
            Affinity::Light => "Light",
            Affinity::Neutral => "Neutral",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for Affinity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Nature" => Ok(Affinity::Nature),
            "Fire" => Ok(Affinity::Fire),
            "Water" => Ok(Affinity::Water),
            "Earth" => Ok(Affinity::Earth),
            "Energy" => Ok(Affinity::Energy),
            "Dark" => Ok(Affinity::Dark),
            "Light" => Ok(Affinity::Light),
            "Neutral" => Ok(Affinity::Neutral),
            other => Err(format!("unknown affinity `{other}`")),
        }
    }
}

/// Per-player typed energy. Values never go negative; the pool only
/// shrinks through [`EnergyPool::pay`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyPool {
    units: [u32; Affinity::ALL.len()],
}

impl EnergyPool {
    /// An empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Units held for one affinity.
    #[must_use]
    pub fn get(&self, affinity: Affinity) -> u32 {
        self.units[affinity.index()]
    }

    /// Add units to one affinity pool.
    pub fn add(&mut self, affinity: Affinity, amount: u32) {
        self.units[affinity.index()] += amount;
    }

    /// Sum of all non-wildcard pools.
    #[must_use]
    pub fn total(&self) -> u32 {
        Affinity::ALL
            .iter()
            .filter(|a| **a != Affinity::Neutral)
            .map(|a| self.get(*a))
            .sum()
    }

    /// Try to pay `cost` in the given affinity.
    ///
    /// A zero cost always succeeds without touching the pool. A typed
    /// cost drains only its own pool. A `Neutral` cost drains the
    /// largest pools first (stable on ties, so earlier affinities in
    /// declaration order go first) until covered.
    ///
    /// Returns `false` and leaves the pool untouched when the cost
    /// cannot be met.
    #[must_use]
    pub fn pay(&mut self, affinity: Affinity, cost: u32) -> bool {
        if cost == 0 {
            return true;
        }
        if affinity != Affinity::Neutral {
            if self.get(affinity) < cost {
                return false;
            }
            self.units[affinity.index()] -= cost;
            return true;
        }

        if self.total() < cost {
            return false;
        }
        let mut order: Vec<Affinity> = Affinity::ALL
            .iter()
            .copied()
            .filter(|a| *a != Affinity::Neutral)
            .collect();
        order.sort_by(|a, b| self.get(*b).cmp(&self.get(*a)));
        let mut remaining = cost;
        for affinity in order {
            if remaining == 0 {
                break;
            }
            let paid = remaining.min(self.get(affinity));
            self.units[affinity.index()] -= paid;
            remaining -= paid;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_cost_always_succeeds() {
        let mut pool = EnergyPool::new();
        assert!(pool.pay(Affinity::Fire, 0));
        assert!(pool.pay(Affinity::Neutral, 0));
        assert_eq!(pool.total(), 0);
    }

    #[test]
    fn test_typed_cost() {
        let mut pool = EnergyPool::new();
        pool.add(Affinity::Fire, 3);

        assert!(!pool.pay(Affinity::Fire, 4));
        assert_eq!(pool.get(Affinity::Fire), 3);

        assert!(pool.pay(Affinity::Fire, 2));
        assert_eq!(pool.get(Affinity::Fire), 1);
    }

    #[test]
    fn test_typed_cost_ignores_other_pools() {
        let mut pool = EnergyPool::new();
        pool.add(Affinity::Water, 5);
        assert!(!pool.pay(Affinity::Fire, 1));
        assert_eq!(pool.get(Affinity::Water), 5);
    }

    #[test]
    fn test_wildcard_drains_largest_first() {
        let mut pool = EnergyPool::new();
        pool.add(Affinity::Nature, 1);
        pool.add(Affinity::Water, 4);
        pool.add(Affinity::Dark, 2);

        assert!(pool.pay(Affinity::Neutral, 5));
        // Water (4) first, then Dark (2) covers the remainder.
        assert_eq!(pool.get(Affinity::Water), 0);
        assert_eq!(pool.get(Affinity::Dark), 1);
        assert_eq!(pool.get(Affinity::Nature), 1);
    }

    #[test]
    fn test_wildcard_tie_breaks_by_declaration_order() {
        let mut pool = EnergyPool::new();
        pool.add(Affinity::Fire, 2);
        pool.add(Affinity::Light, 2);

        assert!(pool.pay(Affinity::Neutral, 2));
        assert_eq!(pool.get(Affinity::Fire), 0);
        assert_eq!(pool.get(Affinity::Light), 2);
    }

    #[test]
    fn test_wildcard_insufficient_leaves_pool_untouched() {
        let mut pool = EnergyPool::new();
        pool.add(Affinity::Earth, 1);
        pool.add(Affinity::Dark, 1);

        assert!(!pool.pay(Affinity::Neutral, 3));
        assert_eq!(pool.get(Affinity::Earth), 1);
        assert_eq!(pool.get(Affinity::Dark), 1);
    }

    #[test]
    fn test_affinity_round_trip() {
        for affinity in Affinity::ALL {
            let parsed: Affinity = affinity.to_string().parse().unwrap();
            assert_eq!(parsed, affinity);
        }
        assert!("Chaos".parse::<Affinity>().is_err());
    }

    proptest! {
        #[test]
        fn prop_wildcard_never_fails_when_sum_sufficient(
            units in proptest::collection::vec(0u32..20, 7),
            cost in 0u32..60,
        ) {
            let mut pool = EnergyPool::new();
            for (affinity, amount) in Affinity::ALL
                .iter()
                .filter(|a| **a != Affinity::Neutral)
                .zip(units.iter())
            {
                pool.add(*affinity, *amount);
            }
            let total = pool.total();
            let paid = pool.pay(Affinity::Neutral, cost);
            prop_assert_eq!(paid, total >= cost);
            if paid {
                prop_assert_eq!(pool.total(), total - cost);
            } else {
                prop_assert_eq!(pool.total(), total);
            }
        }
    }
}
