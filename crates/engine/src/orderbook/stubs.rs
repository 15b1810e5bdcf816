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

//! Type stubs to facilitate testing.

#![allow(clippy::missing_panics_doc)]

use rstest::fixture;

use crate::{
    orderbook::book::OrderBook,
    types::{Price, Quantity},
};

/// Returns an empty book.
#[fixture]
pub fn empty_book() -> OrderBook {
    OrderBook::new()
}

/// Returns a book with two resting levels per side around a mid of 100:
/// bids of 100 at 99 and 50 at 98 (IDs 1, 2), asks of 100 at 101 and 50 at
/// 102 (IDs 3, 4).
#[fixture]
pub fn two_sided_book() -> OrderBook {
    let mut book = OrderBook::new();
    book.limit_buy(1, Quantity::new(100), Price::new(99)).unwrap();
    book.limit_buy(2, Quantity::new(50), Price::new(98)).unwrap();
    book.limit_sell(3, Quantity::new(100), Price::new(101)).unwrap();
    book.limit_sell(4, Quantity::new(50), Price::new(102)).unwrap();
    book
}
