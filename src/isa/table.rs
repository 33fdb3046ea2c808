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

use super::steps::*;
use super::IsaEntry;
use crate::control::Flags;

/// Builds the ISA table in the declaration order from spec.md §4.1: moves
/// and memory access, register-to-register ALU ops, immediate/unary ALU
/// ops, control flow, stack instructions, then `HLT`.
///
/// Grounded on `examples/original_source/src/assembler/instructions.py`.
pub(super) fn build() -> Vec<IsaEntry> {
    vec![
        IsaEntry {
            mnemonic: "MV",
            arity: 2,
            target: 0b00_00_00_00,
            mask: 0b11_11_00_00,
            steps: &[mv],
        },
        IsaEntry {
            mnemonic: "MEMR",
            arity: 1,
            target: 0b00_01_00_00,
            mask: 0b11_11_11_00,
            steps: &[memr],
        },
        IsaEntry {
            mnemonic: "MEMW",
            arity: 1,
            target: 0b00_01_01_00,
            mask: 0b11_11_11_00,
            steps: &[memw],
        },
        IsaEntry {
            mnemonic: "MSRL",
            arity: 1,
            target: 0b00_01_10_00,
            mask: 0b11_11_11_00,
            steps: &[msrl],
        },
        IsaEntry {
            mnemonic: "MSRH",
            arity: 1,
            target: 0b00_01_11_00,
            mask: 0b11_11_11_00,
            steps: &[msrh],
        },
        IsaEntry {
            mnemonic: "LI",
            arity: 2,
            target: 0b00_10_00_00,
            mask: 0b11_11_11_00,
            steps: &[li_step0, li_step1],
        },
        IsaEntry {
            mnemonic: "ZERO",
            arity: 1,
            target: 0b00_10_01_00,
            mask: 0b11_11_11_00,
            steps: &[zero],
        },
        IsaEntry {
            mnemonic: "RTWL",
            arity: 0,
            target: 0b00_10_11_00,
            mask: 0b11_11_11_11,
            steps: &[rtwl],
        },
        IsaEntry {
            mnemonic: "RTWH",
            arity: 0,
            target: 0b00_10_11_01,
            mask: 0b11_11_11_11,
            steps: &[rtwh],
        },
        IsaEntry {
            mnemonic: "RTRL",
            arity: 0,
            target: 0b00_10_11_10,
            mask: 0b11_11_11_11,
            steps: &[rtrl],
        },
        IsaEntry {
            mnemonic: "RTRH",
            arity: 0,
            target: 0b00_10_11_11,
            mask: 0b11_11_11_11,
            steps: &[rtrh],
        },
        IsaEntry {
            mnemonic: "ADD",
            arity: 2,
            target: 0b01_00_00_00,
            mask: 0b11_11_00_00,
            steps: &[add_step0, add_step1, add_step2],
        },
        IsaEntry {
            mnemonic: "SUB",
            arity: 2,
            target: 0b01_01_00_00,
            mask: 0b11_11_00_00,
            steps: &[sub_step0, sub_step1, sub_step2],
        },
        IsaEntry {
            mnemonic: "NAND",
            arity: 2,
            target: 0b01_10_00_00,
            mask: 0b11_11_00_00,
            steps: &[nand_step0, nand_step1, nand_step2],
        },
        IsaEntry {
            mnemonic: "XOR",
            arity: 2,
            target: 0b01_11_00_00,
            mask: 0b11_11_00_00,
            steps: &[xor_step0, xor_step1, xor_step2],
        },
        IsaEntry {
            mnemonic: "ADDI",
            arity: 2,
            target: 0b10_00_00_00,
            mask: 0b11_11_11_00,
            steps: &[addi_step0, addi_step1, addi_step2],
        },
        IsaEntry {
            mnemonic: "INC",
            arity: 1,
            target: 0b10_00_01_00,
            mask: 0b11_11_11_00,
            steps: &[inc_step0, inc_step1, inc_step2],
        },
        IsaEntry {
            mnemonic: "DEC",
            arity: 1,
            target: 0b10_00_10_00,
            mask: 0b11_11_11_00,
            steps: &[dec_step0, dec_step1, dec_step2],
        },
        IsaEntry {
            mnemonic: "NEG",
            arity: 1,
            target: 0b10_00_11_00,
            mask: 0b11_11_11_00,
            steps: &[neg_step0, neg_step1, neg_step2],
        },
        IsaEntry {
            mnemonic: "PJMP",
            arity: 2,
            target: 0b11_00_00_00,
            mask: 0b11_11_11_11,
            steps: &[pjmp_step0, pjmp_step1, pjmp_step2, pjmp_step3],
        },
        IsaEntry {
            mnemonic: "JMP",
            arity: 0,
            target: 0b11_00_00_01,
            mask: 0b11_11_11_11,
            steps: &[jmp_step0, jmp_step1],
        },
        IsaEntry {
            mnemonic: "JAL",
            arity: 0,
            target: 0b11_00_00_10,
            mask: 0b11_11_11_11,
            steps: &[jal_step0, jal_step1, jal_step2, jal_step3],
        },
        IsaEntry {
            mnemonic: "RET",
            arity: 0,
            target: 0b11_00_00_11,
            mask: 0b11_11_11_11,
            steps: &[ret_step0, ret_step1],
        },
        IsaEntry {
            mnemonic: "JCR",
            arity: 1,
            target: 0b11_00_01_00,
            mask: 0b11_11_11_11,
            steps: conditional_branch_table(Flags::CO),
        },
        IsaEntry {
            mnemonic: "JZR",
            arity: 1,
            target: 0b11_00_01_01,
            mask: 0b11_11_11_11,
            steps: conditional_branch_table(Flags::FZ),
        },
        IsaEntry {
            mnemonic: "JNR",
            arity: 1,
            target: 0b11_00_01_10,
            mask: 0b11_11_11_11,
            steps: conditional_branch_table(Flags::NEG),
        },
        IsaEntry {
            mnemonic: "JLTR",
            arity: 1,
            target: 0b11_00_01_11,
            mask: 0b11_11_11_11,
            steps: conditional_branch_table(Flags::A2G1),
        },
        IsaEntry {
            mnemonic: "SPSL",
            arity: 1,
            target: 0b11_11_00_00,
            mask: 0b11_11_11_00,
            steps: &[spsl],
        },
        IsaEntry {
            mnemonic: "SPSH",
            arity: 1,
            target: 0b11_11_01_00,
            mask: 0b11_11_11_00,
            steps: &[spsh],
        },
        IsaEntry {
            mnemonic: "PUSH",
            arity: 0,
            target: 0b11_11_10_00,
            mask: 0b11_11_11_11,
            steps: &[
                push_step0,
                push_step1,
                push_step2,
                push_step3,
                push_step4,
                push_step5,
            ],
        },
        IsaEntry {
            mnemonic: "PULL",
            arity: 0,
            target: 0b11_11_10_01,
            mask: 0b11_11_11_11,
            steps: &[
                pull_step0,
                pull_step1,
                pull_step2,
                pull_step3,
                pull_step4,
                pull_step5,
            ],
        },
        IsaEntry {
            mnemonic: "PEEK",
            arity: 0,
            target: 0b11_11_10_10,
            mask: 0b11_11_11_11,
            steps: &[peek_step0, peek_step1],
        },
        IsaEntry {
            mnemonic: "SPOF",
            arity: 1,
            target: 0b11_11_10_11,
            mask: 0b11_11_11_11,
            steps: &[
                spof_step0,
                spof_step1,
                spof_step2,
                spof_step3,
                spof_step4,
                spof_step5,
            ],
        },
        IsaEntry {
            mnemonic: "HLT",
            arity: 0,
            target: 0b11_11_11_11,
            mask: 0b11_11_11_11,
            steps: &[hlt],
        },
    ]
}
