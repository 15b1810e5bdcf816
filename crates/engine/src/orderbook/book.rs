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

//! A single-instrument order book with price-time priority matching.

use std::fmt::Display;

use crate::{
    enums::OrderSide,
    orderbook::{
        error::BookError,
        ladder::BookLadder,
        order::{BookOrder, OrderId},
    },
    types::{Price, Quantity},
};

/// Provides a single-instrument limit order book matching engine.
///
/// Maintains buy (bid) and sell (ask) orders in price-time priority: better
/// prices fill first, and within one price level earlier arrivals fill first,
/// strictly FIFO with no pro-rata allocation.
///
/// The book owns all resting state. Callers hold only order IDs, never
/// references into book memory. A failed submission leaves the book
/// unchanged; queries are total functions and read absent state as zero. The
/// book performs no internal locking: operations on one instance must not
/// overlap in time, with any cross-thread discipline imposed by the embedder.
#[derive(Clone, Debug)]
pub struct OrderBook {
    pub(crate) bids: BookLadder,
    pub(crate) asks: BookLadder,
}

impl OrderBook {
    /// Creates a new [`OrderBook`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bids: BookLadder::new(OrderSide::Buy),
            asks: BookLadder::new(OrderSide::Sell),
        }
    }

    /// Drops all resting orders, returning the book to the empty state.
    pub fn clear(&mut self) {
        self.bids.clear();
        self.asks.clear();
    }

    /// Submits a limit order.
    ///
    /// The order first matches against the opposite side while its price
    /// crosses the resting liquidity; any unfilled remainder rests at
    /// `price` on `side` under `order_id`. A fully filled submission leaves
    /// no footprint and its ID does not rest.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `quantity` is zero.
    /// - `price` is zero (reserved as the no-liquidity sentinel).
    /// - `order_id` is already resting in the book.
    pub fn limit(
        &mut self,
        side: OrderSide,
        order_id: OrderId,
        quantity: Quantity,
        price: Price,
    ) -> Result<(), BookError> {
        if quantity.is_zero() {
            return Err(BookError::InvalidQuantity);
        }
        if price.is_zero() {
            return Err(BookError::InvalidPrice);
        }
        if self.has(order_id) {
            return Err(BookError::DuplicateOrder(order_id));
        }

        let filled = match side {
            OrderSide::Buy => self.asks.fill(quantity, Some(price)),
            OrderSide::Sell => self.bids.fill(quantity, Some(price)),
        };

        let remaining = quantity - filled;
        if remaining.is_positive() {
            let order = BookOrder::new(side, price, remaining, order_id);
            match side {
                OrderSide::Buy => self.bids.insert(order),
                OrderSide::Sell => self.asks.insert(order),
            }
        }

        Ok(())
    }

    /// Submits a buy limit order.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Self::limit`].
    pub fn limit_buy(
        &mut self,
        order_id: OrderId,
        quantity: Quantity,
        price: Price,
    ) -> Result<(), BookError> {
        self.limit(OrderSide::Buy, order_id, quantity, price)
    }

    /// Submits a sell limit order.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Self::limit`].
    pub fn limit_sell(
        &mut self,
        order_id: OrderId,
        quantity: Quantity,
        price: Price,
    ) -> Result<(), BookError> {
        self.limit(OrderSide::Sell, order_id, quantity, price)
    }

    /// Submits a market order.
    ///
    /// The order matches unconditionally against the opposite side until it
    /// is exhausted or that side is empty. Any unfilled residual is
    /// discarded: market orders never rest and `order_id` never enters the
    /// ID index.
    ///
    /// # Errors
    ///
    /// Returns an error if `quantity` is zero.
    pub fn market(
        &mut self,
        side: OrderSide,
        order_id: OrderId,
        quantity: Quantity,
    ) -> Result<(), BookError> {
        if quantity.is_zero() {
            return Err(BookError::InvalidQuantity);
        }

        let filled = match side {
            OrderSide::Buy => self.asks.fill(quantity, None),
            OrderSide::Sell => self.bids.fill(quantity, None),
        };

        let residual = quantity - filled;
        if residual.is_positive() {
            log::debug!("Market {side} order {order_id} discarded residual quantity {residual}");
        }

        Ok(())
    }

    /// Submits a buy market order.
    ///
    /// # Errors
    ///
    /// Returns an error if `quantity` is zero.
    pub fn market_buy(&mut self, order_id: OrderId, quantity: Quantity) -> Result<(), BookError> {
        self.market(OrderSide::Buy, order_id, quantity)
    }

    /// Submits a sell market order.
    ///
    /// # Errors
    ///
    /// Returns an error if `quantity` is zero.
    pub fn market_sell(&mut self, order_id: OrderId, quantity: Quantity) -> Result<(), BookError> {
        self.market(OrderSide::Sell, order_id, quantity)
    }

    /// Cancels the resting order with the given ID, erasing its price level
    /// if that leaves the level empty.
    ///
    /// # Errors
    ///
    /// Returns an error if no order with `order_id` is resting.
    pub fn cancel(&mut self, order_id: OrderId) -> Result<(), BookError> {
        if self.bids.remove(order_id).is_some() || self.asks.remove(order_id).is_some() {
            Ok(())
        } else {
            Err(BookError::UnknownOrder(order_id))
        }
    }

    /// Returns true if an order with the given ID is resting in the book.
    #[must_use]
    pub fn has(&self, order_id: OrderId) -> bool {
        self.bids.contains(order_id) || self.asks.contains(order_id)
    }

    /// Returns a snapshot of the resting order with the given ID, if any.
    ///
    /// The snapshot carries the remaining quantity at observation time; it
    /// is a plain value and never a reference into book memory.
    #[must_use]
    pub fn order(&self, order_id: OrderId) -> Option<BookOrder> {
        self.bids.get(order_id).or_else(|| self.asks.get(order_id))
    }

    /// Returns true if the book has any bid orders.
    #[must_use]
    pub fn has_bid(&self) -> bool {
        !self.bids.is_empty()
    }

    /// Returns true if the book has any ask orders.
    #[must_use]
    pub fn has_ask(&self) -> bool {
        !self.asks.is_empty()
    }

    /// Returns the best price on the given side, if any order rests there.
    #[must_use]
    pub fn best(&self, side: OrderSide) -> Option<Price> {
        match side {
            OrderSide::Buy => self.best_bid_price(),
            OrderSide::Sell => self.best_ask_price(),
        }
    }

    /// Returns the best (highest) bid price if available.
    #[must_use]
    pub fn best_bid_price(&self) -> Option<Price> {
        self.bids.best_price()
    }

    /// Returns the best (lowest) ask price if available.
    #[must_use]
    pub fn best_ask_price(&self) -> Option<Price> {
        self.asks.best_price()
    }

    /// Returns the total volume resting on the bid side.
    #[must_use]
    pub fn bid_volume(&self) -> Quantity {
        self.bids.total_volume()
    }

    /// Returns the total volume resting on the ask side.
    #[must_use]
    pub fn ask_volume(&self) -> Quantity {
        self.asks.total_volume()
    }

    /// Returns the total volume resting in the book.
    #[must_use]
    pub fn volume(&self) -> Quantity {
        self.bid_volume() + self.ask_volume()
    }

    /// Returns the bid volume resting at the given price.
    #[must_use]
    pub fn bid_volume_at(&self, price: Price) -> Quantity {
        self.bids.volume_at(price)
    }

    /// Returns the ask volume resting at the given price.
    #[must_use]
    pub fn ask_volume_at(&self, price: Price) -> Quantity {
        self.asks.volume_at(price)
    }

    /// Returns the volume resting at the given price across both sides.
    #[must_use]
    pub fn volume_at(&self, price: Price) -> Quantity {
        self.bid_volume_at(price) + self.ask_volume_at(price)
    }

    /// Returns the number of orders resting on the bid side.
    #[must_use]
    pub fn bid_count(&self) -> u32 {
        self.bids.total_count()
    }

    /// Returns the number of orders resting on the ask side.
    #[must_use]
    pub fn ask_count(&self) -> u32 {
        self.asks.total_count()
    }

    /// Returns the number of orders resting in the book.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.bid_count() + self.ask_count()
    }

    /// Returns the number of orders resting at the given price across both
    /// sides.
    #[must_use]
    pub fn count_at(&self, price: Price) -> u32 {
        self.bids.count_at(price) + self.asks.count_at(price)
    }
}

impl Default for OrderBook {
    /// Creates a new default [`OrderBook`] instance.
    fn default() -> Self {
        Self::new()
    }
}

impl Display for OrderBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(bid_levels={}, ask_levels={}, orders={})",
            stringify!(OrderBook),
            self.bids.len(),
            self.asks.len(),
            self.count(),
        )
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::orderbook::stubs::{empty_book, two_sided_book};

    fn assert_empty_state(book: &OrderBook) {
        assert_eq!(book.best_ask_price(), None);
        assert_eq!(book.best_bid_price(), None);
        assert!(!book.has_ask());
        assert!(!book.has_bid());
        assert_eq!(book.volume(), Quantity::zero());
        assert_eq!(book.ask_volume(), Quantity::zero());
        assert_eq!(book.bid_volume(), Quantity::zero());
        assert_eq!(book.volume_at(Price::new(100)), Quantity::zero());
        assert_eq!(book.count(), 0);
        assert_eq!(book.ask_count(), 0);
        assert_eq!(book.bid_count(), 0);
        assert_eq!(book.count_at(Price::new(100)), 0);
    }

    fn assert_aggregate_identities(book: &OrderBook, prices: &[u64]) {
        assert_eq!(book.count(), book.ask_count() + book.bid_count());
        assert_eq!(book.volume(), book.ask_volume() + book.bid_volume());
        for &price in prices {
            let price = Price::new(price);
            assert_eq!(
                book.volume_at(price),
                book.ask_volume_at(price) + book.bid_volume_at(price)
            );
        }
        assert_eq!(book.best_ask_price().is_none(), book.ask_count() == 0);
        assert_eq!(book.best_bid_price().is_none(), book.bid_count() == 0);
        if let (Some(ask), Some(bid)) = (book.best_ask_price(), book.best_bid_price()) {
            assert!(ask > bid, "Book should never be crossed: ask={ask} bid={bid}");
        }
    }

    #[rstest]
    fn test_fresh_book_is_empty(empty_book: OrderBook) {
        assert_empty_state(&empty_book);
    }

    #[rstest]
    fn test_rest_sell_limit(mut empty_book: OrderBook) {
        empty_book
            .limit_sell(1, Quantity::new(100), Price::new(50))
            .unwrap();
        let book = &empty_book;

        assert_eq!(book.best_ask_price(), Some(Price::new(50)));
        assert_eq!(book.best_bid_price(), None);
        assert_eq!(book.ask_volume(), Quantity::new(100));
        assert_eq!(book.ask_volume_at(Price::new(50)), Quantity::new(100));
        assert_eq!(book.volume(), Quantity::new(100));
        assert_eq!(book.count_at(Price::new(50)), 1);
        assert_eq!(book.ask_count(), 1);
        assert_eq!(book.bid_count(), 0);
        assert_eq!(book.count(), 1);
        assert!(book.has(1));
        assert_aggregate_identities(book, &[50]);
    }

    #[rstest]
    fn test_cancel_returns_book_to_prior_state(mut empty_book: OrderBook) {
        empty_book
            .limit_sell(1, Quantity::new(100), Price::new(50))
            .unwrap();
        empty_book.cancel(1).unwrap();

        assert!(!empty_book.has(1));
        assert_empty_state(&empty_book);
    }

    #[rstest]
    #[case(OrderSide::Sell)]
    #[case(OrderSide::Buy)]
    fn test_market_against_empty_book_is_noop(mut empty_book: OrderBook, #[case] side: OrderSide) {
        empty_book.market(side, 1, Quantity::new(100)).unwrap();

        assert!(!empty_book.has(1), "Market orders never rest");
        assert_empty_state(&empty_book);
    }

    #[rstest]
    #[case(OrderSide::Buy)]
    #[case(OrderSide::Sell)]
    fn test_market_partial_fill_against_single_limit(
        mut empty_book: OrderBook,
        #[case] resting_side: OrderSide,
    ) {
        empty_book
            .limit(resting_side, 1, Quantity::new(100), Price::new(50))
            .unwrap();
        empty_book
            .market(resting_side.opposite(), 2, Quantity::new(10))
            .unwrap();
        let book = &empty_book;

        assert_eq!(book.best(resting_side), Some(Price::new(50)));
        assert_eq!(book.volume(), Quantity::new(90));
        assert_eq!(book.volume_at(Price::new(50)), Quantity::new(90));
        assert_eq!(book.count_at(Price::new(50)), 1);
        assert_eq!(book.count(), 1);
        assert_eq!(book.order(1).unwrap().quantity, Quantity::new(90));
        assert!(!book.has(2));
        assert_aggregate_identities(book, &[50]);
    }

    #[rstest]
    fn test_clear_removes_all_resting_state(mut empty_book: OrderBook) {
        for order_id in [1, 2, 3] {
            empty_book
                .limit_sell(order_id, Quantity::new(100), Price::new(50))
                .unwrap();
        }
        assert!(empty_book.has(1) && empty_book.has(2) && empty_book.has(3));

        empty_book.clear();

        assert!(!empty_book.has(1));
        assert!(!empty_book.has(2));
        assert!(!empty_book.has(3));
        assert_empty_state(&empty_book);
    }

    #[rstest]
    fn test_clear_is_idempotent(mut two_sided_book: OrderBook) {
        two_sided_book.clear();
        two_sided_book.clear();
        assert_empty_state(&two_sided_book);
    }

    #[rstest]
    fn test_price_priority_across_levels(mut empty_book: OrderBook) {
        empty_book
            .limit_sell(1, Quantity::new(10), Price::new(50))
            .unwrap();
        empty_book
            .limit_sell(2, Quantity::new(10), Price::new(60))
            .unwrap();
        empty_book
            .limit_buy(3, Quantity::new(15), Price::new(60))
            .unwrap();
        let book = &empty_book;

        assert!(!book.has(1), "The better-priced sell should fill first");
        assert!(book.has(2));
        assert!(!book.has(3), "The buy should fill completely and not rest");
        assert_eq!(book.best_ask_price(), Some(Price::new(60)));
        assert_eq!(book.ask_volume(), Quantity::new(5));
        assert_eq!(book.ask_count(), 1);
        assert_eq!(book.bid_count(), 0);
        assert_eq!(book.order(2).unwrap().quantity, Quantity::new(5));
        assert_aggregate_identities(book, &[50, 60]);
    }

    #[rstest]
    fn test_time_priority_within_level(mut empty_book: OrderBook) {
        empty_book
            .limit_sell(1, Quantity::new(10), Price::new(50))
            .unwrap();
        empty_book
            .limit_sell(2, Quantity::new(10), Price::new(50))
            .unwrap();
        empty_book.market_buy(3, Quantity::new(10)).unwrap();
        let book = &empty_book;

        assert!(!book.has(1), "FIFO: the earlier arrival fills first");
        assert!(book.has(2));
        assert_eq!(book.ask_volume_at(Price::new(50)), Quantity::new(10));
        assert_eq!(book.count_at(Price::new(50)), 1);
    }

    #[rstest]
    fn test_limit_crosses_then_rests_remainder(mut empty_book: OrderBook) {
        empty_book
            .limit_sell(1, Quantity::new(10), Price::new(50))
            .unwrap();
        empty_book
            .limit_buy(2, Quantity::new(25), Price::new(55))
            .unwrap();
        let book = &empty_book;

        assert!(!book.has(1));
        assert!(book.has(2));
        assert_eq!(book.best_bid_price(), Some(Price::new(55)));
        assert_eq!(book.bid_volume(), Quantity::new(15));
        assert_eq!(book.order(2).unwrap().quantity, Quantity::new(15));
        assert_eq!(book.ask_count(), 0);
        assert_aggregate_identities(book, &[50, 55]);
    }

    #[rstest]
    fn test_equal_prices_cross(mut empty_book: OrderBook) {
        empty_book
            .limit_sell(1, Quantity::new(10), Price::new(50))
            .unwrap();
        empty_book
            .limit_buy(2, Quantity::new(10), Price::new(50))
            .unwrap();

        assert!(!empty_book.has(1));
        assert!(!empty_book.has(2));
        assert_empty_state(&empty_book);
    }

    #[rstest]
    fn test_non_crossing_limits_rest_on_both_sides(mut empty_book: OrderBook) {
        empty_book
            .limit_buy(1, Quantity::new(10), Price::new(49))
            .unwrap();
        empty_book
            .limit_sell(2, Quantity::new(10), Price::new(51))
            .unwrap();
        let book = &empty_book;

        assert!(book.has(1));
        assert!(book.has(2));
        assert_eq!(book.best_bid_price(), Some(Price::new(49)));
        assert_eq!(book.best_ask_price(), Some(Price::new(51)));
        assert_aggregate_identities(book, &[49, 51]);
    }

    #[rstest]
    fn test_market_sweeps_multiple_levels_and_discards_residual(mut empty_book: OrderBook) {
        empty_book
            .limit_buy(1, Quantity::new(10), Price::new(50))
            .unwrap();
        empty_book
            .limit_buy(2, Quantity::new(10), Price::new(49))
            .unwrap();
        empty_book.market_sell(3, Quantity::new(100)).unwrap();

        assert!(!empty_book.has(1));
        assert!(!empty_book.has(2));
        assert!(!empty_book.has(3), "The residual should be discarded, not rest");
        assert_empty_state(&empty_book);
    }

    #[rstest]
    fn test_zero_quantity_limit_rejected(mut two_sided_book: OrderBook) {
        let before = two_sided_book.to_string();
        let result = two_sided_book.limit_buy(99, Quantity::zero(), Price::new(100));
        assert_eq!(result, Err(BookError::InvalidQuantity));
        assert_eq!(two_sided_book.to_string(), before);
        assert!(!two_sided_book.has(99));
    }

    #[rstest]
    fn test_zero_price_limit_rejected(mut two_sided_book: OrderBook) {
        let result = two_sided_book.limit_sell(99, Quantity::new(10), Price::zero());
        assert_eq!(result, Err(BookError::InvalidPrice));
        assert!(!two_sided_book.has(99));
    }

    #[rstest]
    fn test_zero_quantity_market_rejected(mut two_sided_book: OrderBook) {
        let volume_before = two_sided_book.volume();
        let result = two_sided_book.market_buy(99, Quantity::zero());
        assert_eq!(result, Err(BookError::InvalidQuantity));
        assert_eq!(two_sided_book.volume(), volume_before);
    }

    #[rstest]
    fn test_duplicate_order_id_rejected(mut empty_book: OrderBook) {
        empty_book
            .limit_sell(1, Quantity::new(10), Price::new(50))
            .unwrap();
        let result = empty_book.limit_sell(1, Quantity::new(20), Price::new(55));

        assert_eq!(result, Err(BookError::DuplicateOrder(1)));
        assert_eq!(empty_book.ask_volume(), Quantity::new(10));
        assert_eq!(empty_book.ask_count(), 1);
        assert_eq!(empty_book.order(1).unwrap().price, Price::new(50));
    }

    #[rstest]
    fn test_duplicate_check_spans_both_sides(mut empty_book: OrderBook) {
        empty_book
            .limit_buy(1, Quantity::new(10), Price::new(50))
            .unwrap();
        let result = empty_book.limit_sell(1, Quantity::new(10), Price::new(60));
        assert_eq!(result, Err(BookError::DuplicateOrder(1)));
    }

    #[rstest]
    fn test_cancel_unknown_order_rejected(mut empty_book: OrderBook) {
        assert_eq!(empty_book.cancel(42), Err(BookError::UnknownOrder(42)));
    }

    #[rstest]
    fn test_id_reuse_after_retirement(mut empty_book: OrderBook) {
        empty_book
            .limit_sell(1, Quantity::new(10), Price::new(50))
            .unwrap();
        empty_book.cancel(1).unwrap();
        empty_book
            .limit_buy(1, Quantity::new(5), Price::new(45))
            .unwrap();

        assert!(empty_book.has(1));
        assert_eq!(empty_book.order(1).unwrap().side, OrderSide::Buy);
    }

    #[rstest]
    fn test_fully_filled_submission_leaves_no_footprint(mut empty_book: OrderBook) {
        empty_book
            .limit_sell(1, Quantity::new(10), Price::new(50))
            .unwrap();
        empty_book
            .limit_buy(2, Quantity::new(10), Price::new(50))
            .unwrap();

        // ID 2 never rested, so it is immediately reusable
        empty_book
            .limit_buy(2, Quantity::new(5), Price::new(45))
            .unwrap();
        assert!(empty_book.has(2));
    }

    #[rstest]
    fn test_matching_conservation(mut empty_book: OrderBook) {
        // Submissions: 100 + 30 resting buys, then a 50 sell limit that
        // crosses, then a 200 market sell that sweeps and discards
        empty_book
            .limit_buy(1, Quantity::new(100), Price::new(50))
            .unwrap();
        empty_book
            .limit_buy(2, Quantity::new(30), Price::new(49))
            .unwrap();
        empty_book
            .limit_sell(3, Quantity::new(50), Price::new(50))
            .unwrap();

        // 50 traded against order 1, leaving 50 + 30 resting
        assert_eq!(empty_book.volume(), Quantity::new(80));
        assert_eq!(empty_book.order(1).unwrap().quantity, Quantity::new(50));

        empty_book.market_sell(4, Quantity::new(200)).unwrap();

        // 80 traded, 120 discarded, nothing rests
        assert_empty_state(&empty_book);
    }

    #[rstest]
    fn test_two_sided_book_aggregates(two_sided_book: OrderBook) {
        let book = &two_sided_book;
        assert_eq!(book.best_bid_price(), Some(Price::new(99)));
        assert_eq!(book.best_ask_price(), Some(Price::new(101)));
        assert_eq!(book.bid_volume(), Quantity::new(150));
        assert_eq!(book.ask_volume(), Quantity::new(150));
        assert_eq!(book.count(), 4);
        assert_aggregate_identities(book, &[98, 99, 101, 102]);
    }

    #[rstest]
    fn test_aggregate_identities_through_mixed_operations(mut two_sided_book: OrderBook) {
        let prices = [97, 98, 99, 100, 101, 102, 103];

        two_sided_book
            .limit_buy(10, Quantity::new(25), Price::new(100))
            .unwrap();
        assert_aggregate_identities(&two_sided_book, &prices);

        two_sided_book
            .limit_sell(11, Quantity::new(40), Price::new(100))
            .unwrap();
        assert_aggregate_identities(&two_sided_book, &prices);

        two_sided_book.market_buy(12, Quantity::new(60)).unwrap();
        assert_aggregate_identities(&two_sided_book, &prices);

        two_sided_book.cancel(2).unwrap();
        assert_aggregate_identities(&two_sided_book, &prices);
    }

    #[rstest]
    fn test_order_snapshot_lookup(two_sided_book: OrderBook) {
        let snapshot = two_sided_book.order(3).unwrap();
        assert_eq!(snapshot.side, OrderSide::Sell);
        assert_eq!(snapshot.price, Price::new(101));
        assert_eq!(snapshot.quantity, Quantity::new(100));
        assert_eq!(two_sided_book.order(42), None);
    }

    #[rstest]
    fn test_display(mut empty_book: OrderBook) {
        empty_book
            .limit_sell(1, Quantity::new(10), Price::new(50))
            .unwrap();
        assert_eq!(
            empty_book.to_string(),
            "OrderBook(bid_levels=0, ask_levels=1, orders=1)"
        );
    }
}
