// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Represents a ladder of price levels for one side of an order book.

use std::{cmp::Ordering, collections::BTreeMap, fmt::Display};

use ahash::AHashMap;
use slab::Slab;

use crate::{
    enums::OrderSide,
    orderbook::{
        level::BookLevel,
        order::{BookOrder, OrderHandle, OrderId, OrderNode},
    },
    types::{Price, Quantity},
};

/// Represents a price level key with a specified side in an order book ladder.
///
/// # Comparison semantics
///
/// `BookPrice` instances are only meaningfully compared within the same side
/// (i.e., within a single `BookLadder`), as bid and ask ladders maintain
/// separate `BTreeMap<BookPrice, BookLevel>` collections.
///
/// - Equality requires both `value` and `side` to match.
/// - Ordering is side-dependent: the buy side sorts descending, the sell side
///   ascending, so the first map entry is always the best level.
#[derive(Clone, Copy, Debug, Eq)]
pub(crate) struct BookPrice {
    pub value: Price,
    pub side: OrderSide,
}

impl BookPrice {
    /// Creates a new [`BookPrice`] instance.
    #[must_use]
    pub fn new(value: Price, side: OrderSide) -> Self {
        Self { value, side }
    }

    /// Returns true if an incoming order on the opposite side, limited to
    /// `limit`, crosses this resting price.
    ///
    /// A resting ask is crossed by a buy limited at or above it; a resting
    /// bid is crossed by a sell limited at or below it.
    #[must_use]
    pub fn crosses(&self, limit: Price) -> bool {
        match self.side {
            OrderSide::Sell => self.value <= limit,
            OrderSide::Buy => self.value >= limit,
        }
    }
}

impl PartialOrd for BookPrice {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for BookPrice {
    fn eq(&self, other: &Self) -> bool {
        self.side == other.side && self.value == other.value
    }
}

impl Ord for BookPrice {
    fn cmp(&self, other: &Self) -> Ordering {
        debug_assert_eq!(
            self.side, other.side,
            "BookPrice compared across sides: {:?} vs {:?}",
            self.side, other.side
        );

        match self.side {
            OrderSide::Buy => other.value.cmp(&self.value),
            OrderSide::Sell => self.value.cmp(&other.value),
        }
    }
}

impl Display for BookPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a ladder of price levels for one side of an order book.
///
/// The ladder owns the arena holding its side's resting orders, the
/// `BTreeMap` keying price levels best-first, and the ID cache mapping order
/// IDs to arena handles. Side-wide volume and count totals are maintained
/// incrementally on every mutation, so the aggregate queries are O(1).
#[derive(Clone, Debug)]
pub(crate) struct BookLadder {
    pub side: OrderSide,
    pub levels: BTreeMap<BookPrice, BookLevel>,
    pub cache: AHashMap<OrderId, OrderHandle>,
    arena: Slab<OrderNode>,
    volume: Quantity,
    count: u32,
}

impl BookLadder {
    /// Creates a new [`BookLadder`] instance.
    #[must_use]
    pub fn new(side: OrderSide) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
            cache: AHashMap::new(),
            arena: Slab::new(),
            volume: Quantity::zero(),
            count: 0,
        }
    }

    /// Returns the number of price levels in the ladder.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Returns true if the ladder has no price levels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Returns the sum of remaining quantities resting on this side.
    #[must_use]
    pub fn total_volume(&self) -> Quantity {
        self.volume
    }

    /// Returns the number of orders resting on this side.
    #[must_use]
    pub fn total_count(&self) -> u32 {
        self.count
    }

    /// Returns true if an order with the given ID rests in the ladder.
    #[must_use]
    pub fn contains(&self, order_id: OrderId) -> bool {
        self.cache.contains_key(&order_id)
    }

    /// Returns a snapshot of the resting order with the given ID, if any.
    #[must_use]
    pub fn get(&self, order_id: OrderId) -> Option<BookOrder> {
        let handle = self.cache.get(&order_id)?;
        Some(self.arena[*handle].snapshot())
    }

    /// Removes all orders and price levels from the ladder.
    pub fn clear(&mut self) {
        self.levels.clear();
        self.cache.clear();
        self.arena.clear();
        self.volume = Quantity::zero();
        self.count = 0;
    }

    /// Adds an order to the ladder at its price level, creating the level if
    /// absent.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the order's side does not match the ladder,
    /// its quantity is zero, or its ID is already resting here.
    pub fn insert(&mut self, order: BookOrder) {
        debug_assert_eq!(order.side, self.side, "Order side should match the ladder side");
        debug_assert!(
            order.quantity.is_positive(),
            "Resting order should have positive quantity"
        );
        debug_assert!(
            !self.cache.contains_key(&order.order_id),
            "Order ID {} already resting in ladder",
            order.order_id
        );

        let book_price = BookPrice::new(order.price, order.side);
        let handle = self.arena.insert(OrderNode::new(order));
        self.cache.insert(order.order_id, handle);

        match self.levels.get_mut(&book_price) {
            Some(level) => level.append(handle, &mut self.arena),
            None => {
                let mut level = BookLevel::new(book_price);
                level.append(handle, &mut self.arena);
                self.levels.insert(book_price, level);
            }
        }

        self.volume += order.quantity;
        self.count += 1;

        self.debug_check_consistency();
    }

    /// Removes an order by its ID from the ladder, erasing its price level
    /// if that leaves the level empty. Returns a snapshot of the removed
    /// order, or `None` if the ID is not resting here.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if a cached order has no containing level.
    pub fn remove(&mut self, order_id: OrderId) -> Option<BookOrder> {
        let handle = *self.cache.get(&order_id)?;
        let book_price = BookPrice::new(self.arena[handle].price, self.side);

        let Some(level) = self.levels.get_mut(&book_price) else {
            debug_assert!(false, "Resting order {order_id} has no containing level");
            return None;
        };

        let node = level.remove(handle, &mut self.arena);
        if level.is_empty() {
            self.levels.remove(&book_price);
        }

        self.cache.remove(&order_id);
        self.volume -= node.quantity;
        self.count -= 1;

        self.debug_check_consistency();

        Some(node.snapshot())
    }

    /// Fills up to `quantity` against the ladder, walking levels best-first
    /// and orders FIFO within each level.
    ///
    /// With a `limit`, filling stops at the first level the limit does not
    /// cross; without one the walk is unconditional (market order). Emptied
    /// levels are erased. Returns the quantity actually filled, at most
    /// `quantity`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if consuming from a non-empty crossable level
    /// fills nothing.
    pub fn fill(&mut self, quantity: Quantity, limit: Option<Price>) -> Quantity {
        let mut filled = Quantity::zero();
        let mut remaining = quantity;

        while remaining.is_positive() {
            let Some(mut entry) = self.levels.first_entry() else {
                break;
            };
            if let Some(limit) = limit
                && !entry.key().crosses(limit)
            {
                break;
            }

            let level = entry.get_mut();
            let count_before = level.count();
            let consumed = level.consume(remaining, &mut self.arena, &mut self.cache);
            let retired = count_before - level.count();

            self.volume -= consumed;
            self.count -= retired;
            filled += consumed;
            remaining -= consumed;

            debug_assert!(
                consumed.is_positive(),
                "Consuming from a non-empty level should fill something"
            );

            if level.is_empty() {
                entry.remove();
            }
        }

        self.debug_check_consistency();

        filled
    }

    /// Returns the best price level in the ladder.
    #[must_use]
    pub fn top(&self) -> Option<&BookLevel> {
        self.levels.values().next()
    }

    /// Returns the best price in the ladder, if any level exists.
    #[must_use]
    pub fn best_price(&self) -> Option<Price> {
        self.top().map(|level| level.price.value)
    }

    /// Returns the volume resting at the given price, or zero if no level
    /// exists there.
    #[must_use]
    pub fn volume_at(&self, price: Price) -> Quantity {
        self.levels
            .get(&BookPrice::new(price, self.side))
            .map_or(Quantity::zero(), BookLevel::volume)
    }

    /// Returns the number of orders resting at the given price, or zero if
    /// no level exists there.
    #[must_use]
    pub fn count_at(&self, price: Price) -> u32 {
        self.levels
            .get(&BookPrice::new(price, self.side))
            .map_or(0, BookLevel::count)
    }

    fn debug_check_consistency(&self) {
        debug_assert_eq!(
            self.cache.len(),
            self.levels.values().map(BookLevel::len).sum::<usize>(),
            "Cache size should equal total orders across all levels"
        );
        debug_assert_eq!(
            self.count as usize,
            self.cache.len(),
            "Cached count should equal the number of indexed orders"
        );
        debug_assert_eq!(
            self.volume,
            self.levels
                .values()
                .fold(Quantity::zero(), |acc, level| acc + level.volume()),
            "Cached volume should equal the sum over levels"
        );
    }
}

impl Display for BookLadder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}(side={})", stringify!(BookLadder), self.side)?;
        for (price, level) in &self.levels {
            writeln!(f, "  {} -> {} orders", price, level.len())?;
        }
        Ok(())
    }
}

#[cfg(test)]
impl BookLadder {
    /// Adds multiple orders to the ladder.
    pub fn insert_bulk(&mut self, orders: &[BookOrder]) {
        for order in orders {
            self.insert(*order);
        }
    }
}
