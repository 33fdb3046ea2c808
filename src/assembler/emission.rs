/*
Copyright 2025 Connor Nolan

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

//! The deferred-label sum type (spec.md §9 design note: "a proper sum type
//! to avoid string sniffing in the resolution pass").

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmissionSlot {
    Byte(u8),
    /// A signed 8-bit PC-relative offset to the named label.
    Relative(String),
    /// High byte of the named label's absolute address.
    AbsHigh(String),
    /// Low byte of the named label's absolute address.
    AbsLow(String),
}
