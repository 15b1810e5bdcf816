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

//! Value types for the order book domain.
//!
//! This module provides the immutable value types the engine operates on:
//! [`Price`] and [`Quantity`]. Both are thin integer newtypes: prices are
//! 64-bit tick counts (tickification happens upstream of the engine), and
//! quantities are 32-bit, matching the volume and count accumulators of the
//! book.
//!
//! # Constraints
//!
//! - [`Price`]: `0` is reserved as the "no liquidity" sentinel returned by
//!   best-price queries on an empty side, and is therefore rejected as a
//!   resting price at submission.
//! - [`Quantity`]: subtraction panics on underflow when overflow checks are
//!   enabled; the engine only ever subtracts a fill from a remaining
//!   quantity at least as large.

pub mod price;
pub mod quantity;

// Re-exports
pub use price::Price;
pub use quantity::Quantity;
