//! Exact solution of the two-dimensional 0/1 knapsack problem.
//!
//! Items are considered in their given order. The search is a depth-first
//! walk of the include/exclude tree, always trying "include" first, and it
//! prunes any subtree whose optimistic bound cannot beat the incumbent. The
//! bound for the subtree rooted at item `i` is the payout accumulated so far
//! plus the sum of payouts of every item from `i` onward, i.e. the payout
//! obtained if capacity did not matter. This never under-estimates, so the
//! search is exact.
//!
//! A subset whose summed payout, weight or volume would overflow `u64` is
//! treated as infeasible, so every reported total is exact.
//!
//! The worst case is exponential in the number of items. Callers are expected
//! to keep instances small (tens of items); nothing here enforces a limit.

use smartload_core::models::{Order, Truck};
use tracing::{Level, event};

/// Anything that can be packed: it has a value and occupies two kinds of space.
pub trait Item {
    /// The value gained by packing the item
    fn payout(&self) -> u64;
    /// The weight the item occupies
    fn weight(&self) -> u64;
    /// The volume the item occupies
    fn volume(&self) -> u64;
}

impl Item for Order {
    fn payout(&self) -> u64 {
        self.payout_cents
    }

    fn weight(&self) -> u64 {
        self.weight_lbs
    }

    fn volume(&self) -> u64 {
        self.volume_cuft
    }
}

impl<T: Item + ?Sized> Item for &T {
    fn payout(&self) -> u64 {
        (**self).payout()
    }

    fn weight(&self) -> u64 {
        (**self).weight()
    }

    fn volume(&self) -> u64 {
        (**self).volume()
    }
}

/// The two simultaneous limits a selection must respect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capacity {
    /// Maximum summed weight
    pub weight: u64,
    /// Maximum summed volume
    pub volume: u64,
}

impl From<&Truck> for Capacity {
    fn from(truck: &Truck) -> Self {
        Self {
            weight: truck.max_weight_lbs,
            volume: truck.max_volume_cuft,
        }
    }
}

/// A subset of the items, by position, together with its totals.
///
/// The default value is the empty selection, which is always feasible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Positions of the chosen items, ascending
    pub indices: Vec<usize>,
    /// Summed payout of the chosen items
    pub payout: u64,
    /// Summed weight of the chosen items
    pub weight: u64,
    /// Summed volume of the chosen items
    pub volume: u64,
}

impl Selection {
    /// Resolve the selected positions against the items they were chosen from.
    pub fn pick<'a, T>(&self, items: &'a [T]) -> Vec<&'a T> {
        self.indices.iter().filter_map(|&i| items.get(i)).collect()
    }
}

/// Find the payout-maximal subset of `items` within `capacity`.
///
/// Of several subsets reaching the maximum payout, the first one the search
/// meets is returned. If no item can be packed profitably the result is the
/// empty selection.
pub fn solve<T: Item>(items: &[T], capacity: Capacity) -> Selection {
    // bound[i] is the payout of items[i..] with capacity ignored
    let mut bound = vec![0u64; items.len() + 1];
    for (i, item) in items.iter().enumerate().rev() {
        bound[i] = bound[i + 1].saturating_add(item.payout());
    }

    let mut search = Search {
        items,
        bound: &bound,
        capacity,
        path: Vec::with_capacity(items.len()),
        best: Selection::default(),
        explored: 0,
    };
    search.descend(0, Load::default());

    event!(
        Level::TRACE,
        items = items.len(),
        explored = search.explored,
        payout = search.best.payout,
        "searched partition"
    );
    search.best
}

/// Running totals along the current path of the search.
#[derive(Clone, Copy, Default)]
struct Load {
    payout: u64,
    weight: u64,
    volume: u64,
}

/// The state of one search. The current path is an explicit stack of included
/// positions; it is only copied when it becomes the new incumbent.
struct Search<'a, T> {
    items: &'a [T],
    bound: &'a [u64],
    capacity: Capacity,
    path: Vec<usize>,
    best: Selection,
    explored: u64,
}

impl<T: Item> Search<'_, T> {
    fn descend(&mut self, index: usize, load: Load) {
        self.explored += 1;

        // Strict improvement only: the first subset to reach a payout keeps it
        if load.payout > self.best.payout {
            self.best = Selection {
                indices: self.path.clone(),
                payout: load.payout,
                weight: load.weight,
                volume: load.volume,
            };
        }

        let (Some(item), Some(&remaining)) = (self.items.get(index), self.bound.get(index)) else {
            return;
        };

        if load.payout.saturating_add(remaining) <= self.best.payout {
            return;
        }

        if let Some(next) = self.include(load, item) {
            self.path.push(index);
            self.descend(index + 1, next);
            self.path.pop();
        }

        self.descend(index + 1, load);
    }

    /// The load with `item` added, if it still fits and its totals are
    /// representable.
    fn include(&self, load: Load, item: &T) -> Option<Load> {
        let payout = load.payout.checked_add(item.payout())?;
        let weight = load
            .weight
            .checked_add(item.weight())
            .filter(|&weight| weight <= self.capacity.weight)?;
        let volume = load
            .volume
            .checked_add(item.volume())
            .filter(|&volume| volume <= self.capacity.volume)?;
        Some(Load {
            payout,
            weight,
            volume,
        })
    }
}
