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

//! The microcode ROM generator.
//!
//! For every `(opcode, flags, step)` triple this computes the 40-bit
//! control word and splits it into the two 32-bit ROM halves consumed by
//! the physical hardware. It is a pure function of the ISA table: each
//! address is computed independently, with no state carried between them
//! (spec.md §5), which is also what makes the loop below embarrassingly
//! parallel if that's ever worth doing.

use crate::control::{ControlWord, Flags};
use crate::errors::BurnerError;
use crate::isa::{self, IsaEntry};

/// Total number of `(opcode, flags, step)` address triples.
pub const ROM_SIZE: usize = 256 * 16 * 16;

/// The two ROM images, indexed by `(flags << 12) | (step << 8) | opcode`.
pub struct RomImages {
    pub rom1: Vec<u32>,
    pub rom2: Vec<u32>,
}

/// Burns the full microcode ROM from the ISA table.
pub fn burn() -> Result<RomImages, BurnerError> {
    let table = isa::isa_table();
    isa::validate_isa_table(&table)?;

    let mut rom1 = vec![0u32; ROM_SIZE];
    let mut rom2 = vec![0u32; ROM_SIZE];

    for opcode in 0u16..=255 {
        let opcode = opcode as u8;
        let entry = isa::find_instruction(&table, opcode);
        for flags_bits in 0u8..16 {
            let flags = Flags::from_bits_truncate(flags_bits);
            for step in 0u8..16 {
                let addr = address(flags_bits, step, opcode);
                let cw = control_word_for(entry, opcode, flags, step);
                rom1[addr] = cw.low();
                rom2[addr] = cw.high();
            }
        }
    }

    Ok(RomImages { rom1, rom2 })
}

fn address(flags_bits: u8, step: u8, opcode: u8) -> usize {
    ((flags_bits as usize) << 12) | ((step as usize) << 8) | opcode as usize
}

/// Steps 0 and 1 are the implicit fetch/decode prologue prepended to every
/// instruction; from step 2 onward the matching ISA entry's own step list
/// is consulted, with unmatched opcodes or out-of-range steps resetting
/// the sequencer via `MRST`.
fn control_word_for(entry: Option<&IsaEntry>, opcode: u8, flags: Flags, step: u8) -> ControlWord {
    match step {
        0 => ControlWord::MO | ControlWord::IRE,
        1 => ControlWord::IPA,
        _ => {
            let k = (step - 2) as usize;
            match entry.and_then(|entry| entry.steps.get(k)) {
                Some(generator) => generator(opcode, flags),
                None => ControlWord::MRST,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rom_has_exactly_65536_entries() {
        let rom = burn().unwrap();
        assert_eq!(rom.rom1.len(), ROM_SIZE);
        assert_eq!(rom.rom2.len(), ROM_SIZE);
    }

    #[test]
    fn fetch_prologue_holds_for_every_opcode_and_flags() {
        let table = isa::isa_table();
        for opcode in 0u16..=255 {
            let opcode = opcode as u8;
            let entry = isa::find_instruction(&table, opcode);
            for flags_bits in 0u8..16 {
                let flags = Flags::from_bits_truncate(flags_bits);
                let step0 = control_word_for(entry, opcode, flags, 0);
                assert_eq!(step0, ControlWord::MO | ControlWord::IRE);
                let step1 = control_word_for(entry, opcode, flags, 1);
                assert_eq!(step1, ControlWord::IPA);
            }
        }
    }

    #[test]
    fn halt_then_reset() {
        let table = isa::isa_table();
        let entry = isa::find_instruction(&table, 0xFF);
        for flags_bits in 0u8..16 {
            let flags = Flags::from_bits_truncate(flags_bits);
            let step2 = control_word_for(entry, 0xFF, flags, 2);
            assert_eq!(step2, ControlWord::HLT);
            for step in 3u8..16 {
                assert_eq!(control_word_for(entry, 0xFF, flags, step), ControlWord::MRST);
            }
        }
    }

    #[test]
    fn unmatched_opcode_is_always_mrst_past_the_prologue() {
        // every opcode in this table matches some entry, so this checks an
        // out-of-range step on a short instruction instead.
        let table = isa::isa_table();
        let entry = isa::find_instruction(&table, 0x00); // MV, 1 step
        for step in 3u8..16 {
            assert_eq!(
                control_word_for(entry, 0x00, Flags::empty(), step),
                ControlWord::MRST
            );
        }
    }

    #[test]
    fn conditional_branch_rereads_its_own_condition_at_step5() {
        // JZR (opcode 0xC5) is taken on FZ, not CO. Step 5 (k=3) must not
        // rescind the branch just because CO happens to be clear.
        let table = isa::isa_table();
        let entry = isa::find_instruction(&table, 0xC5).unwrap();
        assert_eq!(entry.mnemonic, "JZR");
        let flags = Flags::FZ; // taken, CO clear
        let step5 = control_word_for(Some(entry), 0xC5, flags, 5);
        assert_ne!(step5, ControlWord::MRST, "branch was taken but step 5 reset the sequencer");
    }
}
