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

//! `MV`, `MEMR`/`MEMW`/`MSRL`/`MSRH`, `LI`, `ZERO`, and the `RTWL`/`RTWH`/
//! `RTRL`/`RTRH` return-address/memreg transfer steps.

use crate::control::{ControlWord, Flags, masked, register_in, register_out};

pub(crate) fn mv(opcode: u8, _flags: Flags) -> ControlWord {
    register_out(masked(0b0011, opcode)) | register_in(masked(0b1100, opcode))
}

pub(crate) fn memr(opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::MIS | ControlWord::MO | register_in(masked(0b11, opcode))
}

pub(crate) fn memw(opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::MIS | ControlWord::MI | register_out(masked(0b11, opcode))
}

pub(crate) fn msrl(opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::WME | register_out(masked(0b11, opcode))
}

pub(crate) fn msrh(opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::WME | ControlWord::WMS | register_out(masked(0b11, opcode))
}

pub(crate) fn li_step0(opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::MO | register_in(masked(0b11, opcode))
}

pub(crate) fn li_step1(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::IPA
}

/// `ZERO` drives the zero source (`ZO`) directly into the destination
/// register; this is the table's only consumer of `ZO`.
pub(crate) fn zero(opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::ZO | register_in(masked(0b11, opcode))
}

pub(crate) fn rtwl(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::MIS | ControlWord::MI | ControlWord::RETE
}

pub(crate) fn rtwh(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::MIS | ControlWord::MI | ControlWord::RETE | ControlWord::RETS
}

pub(crate) fn rtrl(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::MIS | ControlWord::MO | ControlWord::RETE | ControlWord::RETI
}

pub(crate) fn rtrh(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::MIS | ControlWord::MO | ControlWord::RETE | ControlWord::RETI | ControlWord::RETS
}

pub(crate) fn hlt(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::HLT
}
