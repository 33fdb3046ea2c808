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

//! Immediate and unary ALU ops: `ADDI`, `INC`, `DEC`, `NEG`.
//!
//! All four read their destination register's own index straight out of
//! the opcode's low bits — there is no separately tracked "to" variable to
//! get stale (see spec.md §9, Open Question 1).

use crate::control::{ControlWord, Flags, masked, register_in, register_out};

pub(crate) fn addi_step0(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::MO | ControlWord::A2I
}
pub(crate) fn addi_step1(opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::IPA | ControlWord::A1I | register_out(masked(0b11, opcode))
}
pub(crate) fn addi_step2(opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::AO | register_in(masked(0b11, opcode))
}

pub(crate) fn inc_step0(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::ONEO | ControlWord::A2I
}
pub(crate) fn inc_step1(opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::A1I | register_out(masked(0b11, opcode))
}
pub(crate) fn inc_step2(opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::AO | register_in(masked(0b11, opcode))
}

pub(crate) fn dec_step0(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::ONEO | ControlWord::A2I
}
pub(crate) fn dec_step1(opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::A1I | register_out(masked(0b11, opcode))
}
pub(crate) fn dec_step2(opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::AO | ControlWord::AOPL | register_in(masked(0b11, opcode))
}

pub(crate) fn neg_step0(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::A1I
}
pub(crate) fn neg_step1(opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::A2I | register_out(masked(0b11, opcode))
}
pub(crate) fn neg_step2(opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::AO | ControlWord::CI | ControlWord::AOPL | register_in(masked(0b11, opcode))
}
