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

use std::ops::{Deref, DerefMut};

use crate::{
    enums::OrderSide,
    orderbook::{BookError, OrderBook},
    types::{Price, Quantity},
};

/// C compatible Foreign Function Interface (FFI) for an underlying
/// [`OrderBook`].
///
/// This struct wraps `OrderBook` in a way that makes it compatible with C
/// function calls, enabling interaction with `OrderBook` in a C environment.
///
/// It implements the `Deref` trait, allowing instances of `OrderBook_API` to
/// be dereferenced to `OrderBook`, providing access to `OrderBook`'s methods
/// without having to manually access the underlying instance.
#[repr(C)]
#[derive(Debug)]
#[allow(non_camel_case_types)]
pub struct OrderBook_API(Box<OrderBook>);

impl Deref for OrderBook_API {
    type Target = OrderBook;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for OrderBook_API {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Status code returned by the mutating operations of the procedural
/// surface.
///
/// The legacy surface returned `void` from these operations; the status
/// return travels in a register, so a caller declaring the legacy prototypes
/// remains ABI compatible while a checking caller observes failures.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookErrorCode {
    /// The operation completed.
    Ok = 0,
    /// The submission carried a zero quantity or the reserved zero price.
    InvalidArgument = 1,
    /// The submitted order ID is already resting in the book.
    DuplicateOrder = 2,
    /// No order with the given ID is resting in the book.
    UnknownOrder = 3,
}

impl From<Result<(), BookError>> for BookErrorCode {
    fn from(result: Result<(), BookError>) -> Self {
        match result {
            Ok(()) => Self::Ok,
            Err(BookError::InvalidQuantity | BookError::InvalidPrice) => Self::InvalidArgument,
            Err(BookError::DuplicateOrder(_)) => Self::DuplicateOrder,
            Err(BookError::UnknownOrder(_)) => Self::UnknownOrder,
        }
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn new_() -> OrderBook_API {
    OrderBook_API(Box::new(OrderBook::new()))
}

#[unsafe(no_mangle)]
pub extern "C" fn delete_(book: OrderBook_API) {
    drop(book); // Memory freed here
}

#[unsafe(no_mangle)]
pub extern "C" fn clear(book: &mut OrderBook_API) {
    book.clear();
}

#[unsafe(no_mangle)]
pub extern "C" fn limit(
    book: &mut OrderBook_API,
    side: u8,
    order_id: u64,
    quantity: u32,
    price: u64,
) -> BookErrorCode {
    book.limit(
        OrderSide::from(side != 0),
        order_id,
        Quantity::new(quantity),
        Price::new(price),
    )
    .into()
}

#[unsafe(no_mangle)]
pub extern "C" fn limit_sell(
    book: &mut OrderBook_API,
    order_id: u64,
    quantity: u32,
    price: u64,
) -> BookErrorCode {
    book.limit_sell(order_id, Quantity::new(quantity), Price::new(price))
        .into()
}

#[unsafe(no_mangle)]
pub extern "C" fn limit_buy(
    book: &mut OrderBook_API,
    order_id: u64,
    quantity: u32,
    price: u64,
) -> BookErrorCode {
    book.limit_buy(order_id, Quantity::new(quantity), Price::new(price))
        .into()
}

#[unsafe(no_mangle)]
pub extern "C" fn market(
    book: &mut OrderBook_API,
    side: u8,
    order_id: u64,
    quantity: u32,
) -> BookErrorCode {
    book.market(OrderSide::from(side != 0), order_id, Quantity::new(quantity))
        .into()
}

#[unsafe(no_mangle)]
pub extern "C" fn market_sell(
    book: &mut OrderBook_API,
    order_id: u64,
    quantity: u32,
) -> BookErrorCode {
    book.market_sell(order_id, Quantity::new(quantity)).into()
}

#[unsafe(no_mangle)]
pub extern "C" fn market_buy(
    book: &mut OrderBook_API,
    order_id: u64,
    quantity: u32,
) -> BookErrorCode {
    book.market_buy(order_id, Quantity::new(quantity)).into()
}

#[unsafe(no_mangle)]
pub extern "C" fn has(book: &OrderBook_API, order_id: u64) -> u8 {
    u8::from(book.has(order_id))
}

#[unsafe(no_mangle)]
pub extern "C" fn cancel(book: &mut OrderBook_API, order_id: u64) -> BookErrorCode {
    book.cancel(order_id).into()
}

#[unsafe(no_mangle)]
pub extern "C" fn best(book: &OrderBook_API, side: u8) -> u64 {
    book.best(OrderSide::from(side != 0))
        .map_or(0, |price| price.raw)
}

#[unsafe(no_mangle)]
pub extern "C" fn best_sell(book: &OrderBook_API) -> u64 {
    book.best_ask_price().map_or(0, |price| price.raw)
}

#[unsafe(no_mangle)]
pub extern "C" fn best_buy(book: &OrderBook_API) -> u64 {
    book.best_bid_price().map_or(0, |price| price.raw)
}

#[unsafe(no_mangle)]
pub extern "C" fn volume_sell_price(book: &OrderBook_API, price: u64) -> u32 {
    book.ask_volume_at(Price::new(price)).raw
}

#[unsafe(no_mangle)]
pub extern "C" fn volume_buy_price(book: &OrderBook_API, price: u64) -> u32 {
    book.bid_volume_at(Price::new(price)).raw
}

#[unsafe(no_mangle)]
pub extern "C" fn volume_price(book: &OrderBook_API, price: u64) -> u32 {
    book.volume_at(Price::new(price)).raw
}

#[unsafe(no_mangle)]
pub extern "C" fn volume_sell(book: &OrderBook_API) -> u32 {
    book.ask_volume().raw
}

#[unsafe(no_mangle)]
pub extern "C" fn volume_buy(book: &OrderBook_API) -> u32 {
    book.bid_volume().raw
}

#[unsafe(no_mangle)]
pub extern "C" fn volume(book: &OrderBook_API) -> u32 {
    book.volume().raw
}

#[unsafe(no_mangle)]
pub extern "C" fn count_at(book: &OrderBook_API, price: u64) -> u32 {
    book.count_at(Price::new(price))
}

#[unsafe(no_mangle)]
pub extern "C" fn count_sell(book: &OrderBook_API) -> u32 {
    book.ask_count()
}

#[unsafe(no_mangle)]
pub extern "C" fn count_buy(book: &OrderBook_API) -> u32 {
    book.bid_count()
}

#[unsafe(no_mangle)]
pub extern "C" fn count(book: &OrderBook_API) -> u32 {
    book.count()
}
