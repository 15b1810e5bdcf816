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

//! C foreign function interface (FFI) bindings over an opaque book handle.
//!
//! Host bindings load these symbols from the compiled static or shared
//! library and declare their own prototypes; every operation takes the book
//! handle as its first argument. Prices cross the boundary as raw `u64`
//! ticks, quantities, volumes and counts as `u32`, and the side tag as a
//! `u8` boolean (0 = sell, 1 = buy).

pub mod book;
