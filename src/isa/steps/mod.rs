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

//! Step generators, one module per instruction family (mirrors the grouping
//! in spec.md §4.1: moves/memory, register ALU, immediate/unary ALU,
//! control flow, stack).

mod alu_imm;
mod alu_reg;
mod control_flow;
mod move_memory;
mod stack;

pub(super) use alu_imm::*;
pub(super) use alu_reg::*;
pub(super) use control_flow::*;
pub(super) use move_memory::*;
pub(super) use stack::*;
