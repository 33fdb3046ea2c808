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

//! `SPSL`/`SPSH`, `PUSH`/`PULL`/`PEEK`, and `SPOF`.

use crate::control::{ControlWord, Flags, masked, register_out};

pub(crate) fn spsl(opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::SPE | ControlWord::SPI | register_out(masked(0b11, opcode))
}

pub(crate) fn spsh(opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::SPE | ControlWord::SPI | ControlWord::SPS | register_out(masked(0b11, opcode))
}

pub(crate) fn push_step0(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::SPE | ControlWord::A1I | ControlWord::WME
}
pub(crate) fn push_step1(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::ONEO | ControlWord::A2I
}
pub(crate) fn push_step2(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::AO | ControlWord::AOPL | ControlWord::SPE | ControlWord::SPI
}
pub(crate) fn push_step3(_opcode: u8, flags: Flags) -> ControlWord {
    if flags.contains(Flags::A2G1) {
        ControlWord::empty()
    } else {
        ControlWord::A2I
    }
}
pub(crate) fn push_step4(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::SPE | ControlWord::SPS | ControlWord::A1I | ControlWord::WME | ControlWord::WMS
}
pub(crate) fn push_step5(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::AO | ControlWord::AOPL | ControlWord::SPE | ControlWord::SPI | ControlWord::SPS
}

pub(crate) fn pull_step0(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::SPE | ControlWord::A1I
}
pub(crate) fn pull_step1(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::ONEO | ControlWord::A2I
}
pub(crate) fn pull_step2(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::AO | ControlWord::SPE | ControlWord::SPI | ControlWord::WME
}
pub(crate) fn pull_step3(_opcode: u8, flags: Flags) -> ControlWord {
    if flags.contains(Flags::CO) {
        ControlWord::empty()
    } else {
        ControlWord::A2I
    }
}
pub(crate) fn pull_step4(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::SPE | ControlWord::SPS | ControlWord::A1I
}
pub(crate) fn pull_step5(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::AO | ControlWord::SPE | ControlWord::SPI | ControlWord::SPS | ControlWord::WME | ControlWord::WMS
}

pub(crate) fn peek_step0(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::SPE | ControlWord::WME
}
pub(crate) fn peek_step1(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::SPE | ControlWord::SPS | ControlWord::WME | ControlWord::WMS
}

pub(crate) fn spof_step0(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::MO | ControlWord::A1I
}
pub(crate) fn spof_step1(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::IPA | ControlWord::SPE | ControlWord::A2I
}
pub(crate) fn spof_step2(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::AO | ControlWord::WME
}
pub(crate) fn spof_step3(_opcode: u8, flags: Flags) -> ControlWord {
    if flags.contains(Flags::CO) {
        ControlWord::ONEO | ControlWord::A2I
    } else {
        ControlWord::A2I
    }
}
pub(crate) fn spof_step4(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::SPE | ControlWord::SPS | ControlWord::A1I
}
pub(crate) fn spof_step5(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::AO | ControlWord::WME | ControlWord::WMS
}
