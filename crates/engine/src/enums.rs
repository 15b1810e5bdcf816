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

//! Enumerations for the order book domain.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, FromRepr};

/// The side of an order or price level in the book.
///
/// Sell orders rest on the ask side, buy orders on the bid side. The
/// discriminants match the boolean side tag of the procedural interface
/// (0 = sell, 1 = buy).
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    FromRepr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    /// The order is a SELL (resting on the ask side).
    Sell = 0,
    /// The order is a BUY (resting on the bid side).
    Buy = 1,
}

impl OrderSide {
    /// Returns the opposite order side.
    #[must_use]
    pub fn opposite(&self) -> Self {
        match self {
            Self::Sell => Self::Buy,
            Self::Buy => Self::Sell,
        }
    }
}

impl From<bool> for OrderSide {
    /// Converts the boolean side tag of the procedural interface
    /// (`false` = sell, `true` = buy).
    fn from(value: bool) -> Self {
        if value { Self::Buy } else { Self::Sell }
    }
}
