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

//! An order in the book, as both a value-typed snapshot and its arena record.

use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};

use crate::{
    enums::OrderSide,
    types::{Price, Quantity},
};

/// The caller-supplied unique identifier of an order.
pub type OrderId = u64;

/// The arena slot key of a resting order.
///
/// Handles are internal to the ladder owning the arena; they never cross the
/// public API, which deals exclusively in [`OrderId`] values.
pub(crate) type OrderHandle = usize;

/// Represents an order in a book.
///
/// This is a plain value: it is the shape a submission takes before matching,
/// and the snapshot returned by per-order lookup. The `quantity` of a
/// snapshot is the remaining quantity at observation time.
#[repr(C)]
#[derive(Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookOrder {
    /// The order side.
    pub side: OrderSide,
    /// The order price.
    pub price: Price,
    /// The remaining order quantity.
    pub quantity: Quantity,
    /// The order ID.
    pub order_id: OrderId,
}

impl BookOrder {
    /// Creates a new [`BookOrder`] instance.
    #[must_use]
    pub fn new(side: OrderSide, price: Price, quantity: Quantity, order_id: OrderId) -> Self {
        Self {
            side,
            price,
            quantity,
            order_id,
        }
    }
}

impl Debug for BookOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(side={}, price={}, quantity={}, order_id={})",
            stringify!(BookOrder),
            self.side,
            self.price,
            self.quantity,
            self.order_id,
        )
    }
}

impl Display for BookOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.side, self.price, self.quantity, self.order_id,
        )
    }
}

/// A resting order inside a ladder's arena.
///
/// Identity fields (`order_id`, `side`, `price`) are immutable after
/// creation; only the remaining `quantity` decreases while the order rests.
/// The `prev`/`next` links thread the order into its price level's FIFO.
#[derive(Clone, Debug)]
pub(crate) struct OrderNode {
    pub order_id: OrderId,
    pub side: OrderSide,
    pub price: Price,
    pub quantity: Quantity,
    pub prev: Option<OrderHandle>,
    pub next: Option<OrderHandle>,
}

impl OrderNode {
    /// Creates a new unlinked [`OrderNode`] from a submission value.
    #[must_use]
    pub fn new(order: BookOrder) -> Self {
        Self {
            order_id: order.order_id,
            side: order.side,
            price: order.price,
            quantity: order.quantity,
            prev: None,
            next: None,
        }
    }

    /// Decrements the remaining quantity by a partial fill.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `amount` exceeds the remaining quantity.
    pub fn fill(&mut self, amount: Quantity) {
        debug_assert!(
            amount <= self.quantity,
            "Fill amount {amount} exceeds remaining quantity {}",
            self.quantity
        );
        self.quantity -= amount;
    }

    /// Returns the order as a value-typed snapshot.
    #[must_use]
    pub fn snapshot(&self) -> BookOrder {
        BookOrder::new(self.side, self.price, self.quantity, self.order_id)
    }
}
