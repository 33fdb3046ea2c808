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

//! Register-to-register ALU ops: `ADD`, `SUB`, `NAND`, `XOR`. All four
//! share the same two-operand-load shape and differ only in the ALU
//! opcode lines asserted on the output step.

use crate::control::{ControlWord, Flags, masked, register_in, register_out};

fn load_operands(opcode: u8, step: u8) -> ControlWord {
    match step {
        0 => ControlWord::A1I | register_out(masked(0b1100, opcode)),
        1 => ControlWord::A2I | register_out(masked(0b0011, opcode)),
        _ => unreachable!(),
    }
}

pub(crate) fn add_step0(opcode: u8, _flags: Flags) -> ControlWord {
    load_operands(opcode, 0)
}
pub(crate) fn add_step1(opcode: u8, _flags: Flags) -> ControlWord {
    load_operands(opcode, 1)
}
pub(crate) fn add_step2(opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::AO | register_in(masked(0b1100, opcode))
}

pub(crate) fn sub_step0(opcode: u8, _flags: Flags) -> ControlWord {
    load_operands(opcode, 0)
}
pub(crate) fn sub_step1(opcode: u8, _flags: Flags) -> ControlWord {
    load_operands(opcode, 1)
}
pub(crate) fn sub_step2(opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::AO | ControlWord::AOPL | register_in(masked(0b1100, opcode))
}

pub(crate) fn nand_step0(opcode: u8, _flags: Flags) -> ControlWord {
    load_operands(opcode, 0)
}
pub(crate) fn nand_step1(opcode: u8, _flags: Flags) -> ControlWord {
    load_operands(opcode, 1)
}
pub(crate) fn nand_step2(opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::AO | ControlWord::AOPH | register_in(masked(0b1100, opcode))
}

pub(crate) fn xor_step0(opcode: u8, _flags: Flags) -> ControlWord {
    load_operands(opcode, 0)
}
pub(crate) fn xor_step1(opcode: u8, _flags: Flags) -> ControlWord {
    load_operands(opcode, 1)
}
pub(crate) fn xor_step2(opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::AO | ControlWord::AOPL | ControlWord::AOPH | register_in(masked(0b1100, opcode))
}
