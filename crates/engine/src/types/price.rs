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

//! Represents a price in the book as a count of integer ticks.

use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};

/// Represents a price in the book as a count of integer ticks.
///
/// The raw value `0` is the "no liquidity" sentinel: it is what best-price
/// queries return for an empty side, and it is never a valid resting price.
#[repr(C)]
#[derive(Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price {
    /// The raw tick count.
    pub raw: u64,
}

impl Price {
    /// Creates a new [`Price`] instance.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self { raw }
    }

    /// Creates a new [`Price`] with the zero "no liquidity" sentinel value.
    #[must_use]
    pub const fn zero() -> Self {
        Self { raw: 0 }
    }

    /// Returns true if the price is the zero sentinel.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.raw == 0
    }
}

impl From<u64> for Price {
    fn from(raw: u64) -> Self {
        Self::new(raw)
    }
}

impl From<Price> for u64 {
    fn from(price: Price) -> Self {
        price.raw
    }
}

impl Debug for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", stringify!(Price), self.raw)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}
