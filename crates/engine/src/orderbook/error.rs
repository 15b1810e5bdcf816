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

//! Error types for order book operations.

use thiserror::Error;

use crate::orderbook::order::OrderId;

/// Represents errors raised by order book submissions and cancellations.
///
/// A failed operation leaves the book unchanged. Queries are total functions
/// and never produce these errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BookError {
    /// A limit or market submission carried a zero quantity.
    #[error("invalid quantity: must be positive")]
    InvalidQuantity,
    /// A limit submission carried price zero, which is reserved as the
    /// no-liquidity sentinel of best-price queries.
    #[error("invalid price: zero is reserved as the no-liquidity sentinel")]
    InvalidPrice,
    /// A limit submission reused the ID of an order still resting.
    #[error("order {0} already resting in book")]
    DuplicateOrder(OrderId),
    /// A cancel referenced an ID with no resting order.
    #[error("order {0} not found in book")]
    UnknownOrder(OrderId),
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_display() {
        assert_eq!(
            BookError::InvalidQuantity.to_string(),
            "invalid quantity: must be positive"
        );
        assert_eq!(
            BookError::DuplicateOrder(42).to_string(),
            "order 42 already resting in book"
        );
        assert_eq!(
            BookError::UnknownOrder(7).to_string(),
            "order 7 not found in book"
        );
    }
}
