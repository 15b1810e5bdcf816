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

//! Represents an order quantity, and the volume accumulators derived from it.

use std::{
    fmt::{Debug, Display},
    ops::{Add, AddAssign, Sub, SubAssign},
};

use serde::{Deserialize, Serialize};

/// Represents a quantity of an instrument in the book.
///
/// A resting order always has a positive quantity; the remaining quantity is
/// monotonically non-increasing while the order rests. Per-level and per-side
/// volume aggregates share this type.
#[repr(C)]
#[derive(Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Quantity {
    /// The raw quantity value.
    pub raw: u32,
}

impl Quantity {
    /// Creates a new [`Quantity`] instance.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self { raw }
    }

    /// Creates a new [`Quantity`] with a zero value.
    #[must_use]
    pub const fn zero() -> Self {
        Self { raw: 0 }
    }

    /// Returns true if the quantity is greater than zero.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.raw > 0
    }

    /// Returns true if the quantity is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.raw == 0
    }
}

impl From<u32> for Quantity {
    fn from(raw: u32) -> Self {
        Self::new(raw)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.raw
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            raw: self.raw + rhs.raw,
        }
    }
}

impl Sub for Quantity {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        debug_assert!(
            self.raw >= rhs.raw,
            "Quantity subtraction underflow: {} - {}",
            self.raw,
            rhs.raw
        );
        Self {
            raw: self.raw - rhs.raw,
        }
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Quantity {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Debug for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", stringify!(Quantity), self.raw)
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}
