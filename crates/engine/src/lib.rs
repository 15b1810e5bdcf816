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

//! A single-instrument limit order book matching engine with price-time priority.
//!
//! The engine accepts limit and market orders, matches them against resting
//! liquidity, and answers aggregate queries (best prices, volumes, order
//! counts) and per-order lookup and cancellation in amortized sub-microsecond
//! time. Prices are integer ticks; quantities, volumes, and counts are 32-bit.
//!
//! The top-level type is [`orderbook::OrderBook`], which owns one
//! side tree per book side and a per-side order ID index. All state lives
//! inside the book instance: the engine holds no global state, installs no
//! logger, and provides no internal locking. A book must be driven by a
//! single writer; embedders requiring shared access impose their own
//! serialization around it.
//!
//! # Feature flags
//!
//! This crate provides feature flags to control source code inclusion:
//!
//! - `ffi`: Enables the C foreign function interface (FFI) over an opaque
//!   book handle (enabled by default).
//! - `stubs`: Enables type stubs for use in testing scenarios.

#![warn(rustc::all)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod enums;
pub mod orderbook;
pub mod types;

#[cfg(feature = "ffi")]
pub mod ffi;
