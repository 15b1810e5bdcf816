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

//! A price-time priority limit order book and matching engine.
//!
//! The book is composed of four parts, leaves first:
//!
//! - [`order`]: the resting order record, stored in a per-side arena with
//!   intrusive FIFO links.
//! - `level`: the FIFO queue of all orders resting at one price on one
//!   side, with cached order count and volume.
//! - `ladder`: one side of the book, an ordered map from price to level
//!   with the best level first, a per-side order ID index, and cached side
//!   totals.
//! - [`book`]: the [`OrderBook`] facade owning both ladders, implementing
//!   limit and market submission, cancellation, and the aggregate queries.

pub mod book;
pub mod error;
pub mod order;

pub(crate) mod ladder;
pub(crate) mod level;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

// Re-exports
pub use book::OrderBook;
pub use error::BookError;
pub use order::{BookOrder, OrderId};
