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

//! Represents a discrete price level in an order book.

use ahash::AHashMap;
use slab::Slab;

use crate::{
    orderbook::{
        ladder::BookPrice,
        order::{BookOrder, OrderHandle, OrderId, OrderNode},
    },
    types::Quantity,
};

/// Represents the FIFO queue of all orders resting at one price on one side.
///
/// The level does not own its orders: they live in the arena of the ladder
/// containing the level, threaded into a doubly linked list through their
/// `prev`/`next` handles. The level carries the list's head and tail plus
/// cached aggregates, so order count and volume queries never walk the queue.
///
/// An empty level is never observable through the book: the ladder removes a
/// level together with the departure of its last order.
#[derive(Clone, Debug)]
pub(crate) struct BookLevel {
    pub price: BookPrice,
    head: Option<OrderHandle>,
    tail: Option<OrderHandle>,
    count: u32,
    volume: Quantity,
}

impl BookLevel {
    /// Creates a new empty [`BookLevel`] instance.
    #[must_use]
    pub fn new(price: BookPrice) -> Self {
        Self {
            price,
            head: None,
            tail: None,
            count: 0,
            volume: Quantity::zero(),
        }
    }

    /// Returns the number of orders resting at the level.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Returns the sum of remaining quantities resting at the level.
    #[must_use]
    pub fn volume(&self) -> Quantity {
        self.volume
    }

    /// Returns the number of orders resting at the level as a `usize`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count as usize
    }

    /// Returns true if no orders rest at the level.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Appends the order behind `handle` to the FIFO tail.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the order's price does not match the level
    /// price.
    pub fn append(&mut self, handle: OrderHandle, arena: &mut Slab<OrderNode>) {
        debug_assert_eq!(
            arena[handle].price, self.price.value,
            "Order price should match the level price"
        );

        let quantity = arena[handle].quantity;
        {
            let node = &mut arena[handle];
            node.prev = self.tail;
            node.next = None;
        }
        match self.tail {
            Some(tail) => arena[tail].next = Some(handle),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);
        self.count += 1;
        self.volume += quantity;
    }

    /// Unlinks the order behind `handle` and releases its arena slot.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the cached count and the FIFO contents
    /// diverge after the removal.
    pub fn remove(&mut self, handle: OrderHandle, arena: &mut Slab<OrderNode>) -> OrderNode {
        let node = arena.remove(handle);
        match node.prev {
            Some(prev) => arena[prev].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => arena[next].prev = node.prev,
            None => self.tail = node.prev,
        }
        self.count -= 1;
        self.volume -= node.quantity;

        debug_assert!(
            (self.count == 0) == self.head.is_none(),
            "Level count and FIFO emptiness diverged"
        );

        node
    }

    /// Fills up to `requested` quantity from the front of the FIFO.
    ///
    /// Head orders are fully filled and retired while `requested` covers
    /// their remaining quantity; a final head covering more than the
    /// remainder is partially filled in place. Retired orders leave both the
    /// arena and the ID `index`. Returns the quantity actually filled, at
    /// most `requested`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the filled quantity exceeds `requested`.
    pub fn consume(
        &mut self,
        requested: Quantity,
        arena: &mut Slab<OrderNode>,
        index: &mut AHashMap<OrderId, OrderHandle>,
    ) -> Quantity {
        let mut filled = Quantity::zero();
        let mut remaining = requested;

        while remaining.is_positive() {
            let Some(handle) = self.head else { break };
            let head_quantity = arena[handle].quantity;

            if remaining >= head_quantity {
                let node = self.remove(handle, arena);
                index.remove(&node.order_id);
                filled += head_quantity;
                remaining -= head_quantity;
            } else {
                arena[handle].fill(remaining);
                self.volume -= remaining;
                filled += remaining;
                remaining = Quantity::zero();
            }
        }

        debug_assert!(
            filled <= requested,
            "Filled {filled} exceeds requested {requested}"
        );

        filled
    }

    /// Returns the order at the front of the FIFO, if any.
    #[must_use]
    pub fn first<'a>(&self, arena: &'a Slab<OrderNode>) -> Option<&'a OrderNode> {
        self.head.map(|handle| &arena[handle])
    }

    /// Returns an iterator over the level's orders in FIFO order.
    pub fn iter<'a>(&self, arena: &'a Slab<OrderNode>) -> LevelOrders<'a> {
        LevelOrders {
            arena,
            cursor: self.head,
        }
    }

    /// Returns snapshots of the level's orders in FIFO order.
    #[must_use]
    pub fn get_orders(&self, arena: &Slab<OrderNode>) -> Vec<BookOrder> {
        self.iter(arena).map(OrderNode::snapshot).collect()
    }
}

/// An iterator over the orders of one level, front to back.
pub(crate) struct LevelOrders<'a> {
    arena: &'a Slab<OrderNode>,
    cursor: Option<OrderHandle>,
}

impl<'a> Iterator for LevelOrders<'a> {
    type Item = &'a OrderNode;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.cursor?;
        let node = &self.arena[handle];
        self.cursor = node.next;
        Some(node)
    }
}
