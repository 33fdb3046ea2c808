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

//! `PJMP`/`JMP`/`JAL`/`RET` and the four relative conditional branches
//! `JCR`/`JZR`/`JNR`/`JLTR`.

use crate::control::{ControlWord, Flags};

pub(crate) fn pjmp_step0(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::MO | ControlWord::JMPE | ControlWord::JMPI | ControlWord::JMPS
}
pub(crate) fn pjmp_step1(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::IPA
}
pub(crate) fn pjmp_step2(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::MO | ControlWord::JMPE | ControlWord::JMPI
}
pub(crate) fn pjmp_step3(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::IPA
}

pub(crate) fn jmp_step0(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::JMPE | ControlWord::IPE
}
pub(crate) fn jmp_step1(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::JMPE | ControlWord::JMPS | ControlWord::IPE | ControlWord::IPS
}

pub(crate) fn jal_step0(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::IPE | ControlWord::IPO | ControlWord::RETE | ControlWord::RETI
}
pub(crate) fn jal_step1(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::IPE
        | ControlWord::IPO
        | ControlWord::IPS
        | ControlWord::RETE
        | ControlWord::RETI
        | ControlWord::RETS
}
pub(crate) fn jal_step2(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::JMPE | ControlWord::IPE
}
pub(crate) fn jal_step3(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::JMPE | ControlWord::JMPS | ControlWord::IPE | ControlWord::IPS
}

pub(crate) fn ret_step0(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::RETE | ControlWord::IPE
}
pub(crate) fn ret_step1(_opcode: u8, _flags: Flags) -> ControlWord {
    ControlWord::RETE | ControlWord::RETS | ControlWord::IPE | ControlWord::IPS
}

/// Builds the 6 step generators shared by all four relative conditional
/// branches, parameterised only by which flag bit selects the branch.
///
/// Step 0 (overall step 2) tests `take_flag`: if set, it starts loading
/// the signed offset and entering the fixup sequence; if clear, it skips
/// the immediate byte with `IPA` and resets.
///
/// Step 3 (overall step 5) re-tests the *same* `take_flag` — not `CO`
/// unconditionally — before deciding whether to sign-extend with `FFO`
/// or `ONEO`. Reusing `CO` here for `JZR`/`JNR`/`JLTR` was a bug in one
/// historic variant of the source (spec.md §9, Open Question 3): it
/// would rescind a branch that had already been committed to at step 0
/// whenever `CO` happened not to be set, even though the branch's own
/// condition (`FZ`/`NEG`/`A2G1`) was satisfied.
pub(crate) fn conditional_branch_table(take_flag: Flags) -> &'static [crate::isa::StepFn] {
    // Each conditional branch gets its own hand-written set of four free
    // functions rather than a single generic closure factory, since a
    // `Flags` value can't be closed over by a plain `fn` pointer.
    if take_flag == Flags::CO {
        &JCR_STEPS
    } else if take_flag == Flags::FZ {
        &JZR_STEPS
    } else if take_flag == Flags::NEG {
        &JNR_STEPS
    } else {
        &JLTR_STEPS
    }
}

fn branch_step0(flags: Flags, take_flag: Flags) -> ControlWord {
    if flags.contains(take_flag) {
        ControlWord::A1I | ControlWord::IPE | ControlWord::IPO
    } else {
        ControlWord::IPA | ControlWord::MRST
    }
}

fn branch_step1(_flags: Flags) -> ControlWord {
    ControlWord::MO | ControlWord::A2I
}

fn branch_step2(_flags: Flags) -> ControlWord {
    ControlWord::AO | ControlWord::CI | ControlWord::IPE
}

fn branch_step3(flags: Flags, take_flag: Flags) -> ControlWord {
    if !flags.contains(take_flag) {
        ControlWord::MRST
    } else if flags.contains(Flags::A2G1) {
        ControlWord::FFO | ControlWord::A2I
    } else {
        ControlWord::ONEO | ControlWord::A2I
    }
}

fn branch_step4(_flags: Flags) -> ControlWord {
    ControlWord::IPE | ControlWord::IPO | ControlWord::IPS | ControlWord::A1I
}

fn branch_step5(_flags: Flags) -> ControlWord {
    ControlWord::AO | ControlWord::IPE | ControlWord::IPS
}

fn jcr_step0(_o: u8, f: Flags) -> ControlWord {
    branch_step0(f, Flags::CO)
}
fn jcr_step1(_o: u8, f: Flags) -> ControlWord {
    branch_step1(f)
}
fn jcr_step2(_o: u8, f: Flags) -> ControlWord {
    branch_step2(f)
}
fn jcr_step3(_o: u8, f: Flags) -> ControlWord {
    branch_step3(f, Flags::CO)
}
fn jcr_step4(_o: u8, f: Flags) -> ControlWord {
    branch_step4(f)
}
fn jcr_step5(_o: u8, f: Flags) -> ControlWord {
    branch_step5(f)
}
const JCR_STEPS: [crate::isa::StepFn; 6] = [
    jcr_step0, jcr_step1, jcr_step2, jcr_step3, jcr_step4, jcr_step5,
];

fn jzr_step0(_o: u8, f: Flags) -> ControlWord {
    branch_step0(f, Flags::FZ)
}
fn jzr_step1(_o: u8, f: Flags) -> ControlWord {
    branch_step1(f)
}
fn jzr_step2(_o: u8, f: Flags) -> ControlWord {
    branch_step2(f)
}
fn jzr_step3(_o: u8, f: Flags) -> ControlWord {
    branch_step3(f, Flags::FZ)
}
fn jzr_step4(_o: u8, f: Flags) -> ControlWord {
    branch_step4(f)
}
fn jzr_step5(_o: u8, f: Flags) -> ControlWord {
    branch_step5(f)
}
const JZR_STEPS: [crate::isa::StepFn; 6] = [
    jzr_step0, jzr_step1, jzr_step2, jzr_step3, jzr_step4, jzr_step5,
];

fn jnr_step0(_o: u8, f: Flags) -> ControlWord {
    branch_step0(f, Flags::NEG)
}
fn jnr_step1(_o: u8, f: Flags) -> ControlWord {
    branch_step1(f)
}
fn jnr_step2(_o: u8, f: Flags) -> ControlWord {
    branch_step2(f)
}
fn jnr_step3(_o: u8, f: Flags) -> ControlWord {
    branch_step3(f, Flags::NEG)
}
fn jnr_step4(_o: u8, f: Flags) -> ControlWord {
    branch_step4(f)
}
fn jnr_step5(_o: u8, f: Flags) -> ControlWord {
    branch_step5(f)
}
const JNR_STEPS: [crate::isa::StepFn; 6] = [
    jnr_step0, jnr_step1, jnr_step2, jnr_step3, jnr_step4, jnr_step5,
];

fn jltr_step0(_o: u8, f: Flags) -> ControlWord {
    branch_step0(f, Flags::A2G1)
}
fn jltr_step1(_o: u8, f: Flags) -> ControlWord {
    branch_step1(f)
}
fn jltr_step2(_o: u8, f: Flags) -> ControlWord {
    branch_step2(f)
}
fn jltr_step3(_o: u8, f: Flags) -> ControlWord {
    branch_step3(f, Flags::A2G1)
}
fn jltr_step4(_o: u8, f: Flags) -> ControlWord {
    branch_step4(f)
}
fn jltr_step5(_o: u8, f: Flags) -> ControlWord {
    branch_step5(f)
}
const JLTR_STEPS: [crate::isa::StepFn; 6] = [
    jltr_step0, jltr_step1, jltr_step2, jltr_step3, jltr_step4, jltr_step5,
];
