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

//! The two-pass assembler: pass one builds the label table and emission
//! list, pass two resolves every deferred label reference into a concrete
//! byte (spec.md §4.3).

pub mod ast;
pub mod emission;
pub mod parser;
pub mod symbol_table;

use ast::{LineAst, OperandAst};
use emission::EmissionSlot;
use symbol_table::SymbolTable;

use crate::errors::AssemblerError;
use crate::file_reader::FileReader;
use crate::isa::{self, IsaEntry, Register};
use anyhow::{Context, Result};
use std::path::Path;

/// Assembles already-read source text into a flat byte image.
pub fn assemble_source(source: &str) -> Result<Vec<u8>, AssemblerError> {
    let table = isa::isa_table();
    isa::validate_isa_table(&table)?;

    let lines = parser::parse_source(source)?;
    let (emissions, labels) = build_emission_list(&table, &lines)?;
    resolve_emissions(&emissions, &labels)
}

/// Reads `path` via `reader` and assembles it, for use by the CLI.
pub fn assemble_file(reader: &dyn FileReader, path: &Path) -> Result<Vec<u8>> {
    let source = reader
        .read_to_string(path)
        .with_context(|| format!("reading assembly source {}", path.display()))?;
    assemble_source(&source).context("assembling source")
}

/// Pass one: walks the parsed lines, recording label definitions and
/// encoding each instruction into opcode/operand emission slots.
fn build_emission_list(
    table: &[IsaEntry],
    lines: &[LineAst],
) -> Result<(Vec<EmissionSlot>, SymbolTable), AssemblerError> {
    let mut emissions = Vec::new();
    let mut labels = SymbolTable::new();

    for line_ast in lines {
        match line_ast {
            LineAst::RelativeLabel { name, line } => {
                symbol_table::define_symbol(
                    &mut labels,
                    format!(".{name}"),
                    emissions.len() as u16,
                    *line,
                )?;
            }
            LineAst::AbsoluteLabel { name, line } => {
                symbol_table::define_symbol(
                    &mut labels,
                    format!(":{name}"),
                    emissions.len() as u16,
                    *line,
                )?;
            }
            LineAst::Instruction {
                mnemonic,
                operands,
                line,
            } => {
                encode_instruction(table, mnemonic, operands, *line, &mut emissions)?;
            }
        }
    }

    Ok((emissions, labels))
}

/// Encodes one instruction line, appending its opcode byte and any operand
/// bytes/label slots onto `emissions` (spec.md §4.3, pass one).
fn encode_instruction(
    table: &[IsaEntry],
    mnemonic: &str,
    operands: &[OperandAst],
    line: usize,
    emissions: &mut Vec<EmissionSlot>,
) -> Result<(), AssemblerError> {
    let entry = isa::find_by_mnemonic(table, mnemonic).ok_or_else(|| AssemblerError::UnknownMnemonic {
        line,
        mnemonic: mnemonic.to_string(),
    })?;

    let found: usize = operands.iter().map(OperandAst::slot_count).sum();
    if found != entry.arity {
        return Err(AssemblerError::ArityMismatch {
            line,
            mnemonic: mnemonic.to_string(),
            expected: entry.arity,
            found,
        });
    }

    let register_count = entry.register_operand_count();
    let mut registers = Vec::with_capacity(register_count);
    for operand in &operands[..register_count] {
        registers.push(operand_to_register(operand, line)?);
    }

    let opcode = match registers.as_slice() {
        [] => entry.target,
        [single] => entry.target | single.index(),
        [high, low] => entry.target | (high.index() << 2) | low.index(),
        _ => unreachable!("no ISA entry packs more than two register operands"),
    };
    emissions.push(EmissionSlot::Byte(opcode));

    for operand in &operands[register_count..] {
        match operand {
            OperandAst::Number(value) => {
                emissions.push(EmissionSlot::Byte(encode_immediate(*value, line)?));
            }
            OperandAst::RelLabel(name) => {
                emissions.push(EmissionSlot::Relative(format!(".{name}")));
            }
            OperandAst::AbsLabel(name) => {
                let label = format!(":{name}");
                emissions.push(EmissionSlot::AbsHigh(label.clone()));
                emissions.push(EmissionSlot::AbsLow(label));
            }
            OperandAst::Word(word) => {
                return Err(AssemblerError::BadOperand {
                    line,
                    operand: word.clone(),
                    reason: "unexpected register operand past this instruction's register count"
                        .to_string(),
                });
            }
        }
    }

    Ok(())
}

fn operand_to_register(operand: &OperandAst, line: usize) -> Result<Register, AssemblerError> {
    match operand {
        OperandAst::Word(word) => Register::from_name(word).ok_or_else(|| AssemblerError::UnknownRegister {
            line,
            register: word.clone(),
        }),
        other => Err(AssemblerError::BadOperand {
            line,
            operand: format!("{other:?}"),
            reason: "expected a register operand".to_string(),
        }),
    }
}

fn encode_immediate(value: i64, line: usize) -> Result<u8, AssemblerError> {
    if !(-128..=255).contains(&value) {
        return Err(AssemblerError::ImmediateOutOfRange { line, value });
    }
    Ok((value as i16) as u8)
}

/// Pass two: walks the emission list, turning every deferred label
/// reference into a concrete byte (spec.md §4.3).
fn resolve_emissions(
    emissions: &[EmissionSlot],
    labels: &SymbolTable,
) -> Result<Vec<u8>, AssemblerError> {
    let mut output = Vec::with_capacity(emissions.len());

    for (index, slot) in emissions.iter().enumerate() {
        let byte = match slot {
            EmissionSlot::Byte(b) => *b,
            EmissionSlot::Relative(label) => {
                let target = *symbol_table::get_symbol(labels, label)?;
                let distance = target as i64 - index as i64;
                if !(-128..128).contains(&distance) {
                    return Err(AssemblerError::RelativeOutOfRange {
                        label: label.clone(),
                        distance,
                    });
                }
                (distance - 1).rem_euclid(256) as u8
            }
            EmissionSlot::AbsHigh(label) => {
                let target = *symbol_table::get_symbol(labels, label)?;
                (target >> 8) as u8
            }
            EmissionSlot::AbsLow(label) => {
                let target = *symbol_table::get_symbol(labels, label)?;
                (target & 0xFF) as u8
            }
        };
        output.push(byte);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_halt() {
        assert_eq!(assemble_source("HLT\n").unwrap(), vec![0xFF]);
    }

    #[test]
    fn zero_a() {
        assert_eq!(assemble_source("ZERO A\n").unwrap(), vec![0x24]);
    }

    #[test]
    fn li_a_immediate() {
        assert_eq!(assemble_source("LI A, 0x10\n").unwrap(), vec![0x20, 0x10]);
    }

    #[test]
    fn mv_b_a() {
        assert_eq!(assemble_source("MV B, A\n").unwrap(), vec![0x04]);
    }

    #[test]
    fn add_a_b() {
        assert_eq!(assemble_source("ADD A, B\n").unwrap(), vec![0x41]);
    }

    #[test]
    fn absolute_jump_round_trip() {
        let bytes = assemble_source("PJMP :target\nJMP\n:target\nHLT\n").unwrap();
        assert_eq!(bytes, vec![0xc0, 0x00, 0x04, 0xc1, 0xff]);
    }

    #[test]
    fn counted_loop_resolves_relative_label() {
        let source = "  LI A, 0\n:loop\n  INC A\n  LI B, 0x10\n  SUB A, B\n  JCR .done\n  LI A, 0\n.done\n  HLT\n";
        let bytes = assemble_source(source).unwrap();
        assert_eq!(bytes.last(), Some(&0xFF));
        assert!(!bytes.is_empty());
    }

    #[test]
    fn unknown_mnemonic_is_an_error() {
        match assemble_source("NOPE\n") {
            Err(AssemblerError::UnknownMnemonic { line, mnemonic }) => {
                assert_eq!(line, 1);
                assert_eq!(mnemonic, "NOPE");
            }
            other => panic!("expected UnknownMnemonic, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_label_is_an_error() {
        let source = ".x\nHLT\n.x\nHLT\n";
        assert!(matches!(
            assemble_source(source),
            Err(AssemblerError::DuplicateLabel { .. })
        ));
    }

    #[test]
    fn undefined_label_is_an_error() {
        assert!(matches!(
            assemble_source("JCR .nowhere\n"),
            Err(AssemblerError::UndefinedLabel { .. })
        ));
    }

    #[test]
    fn out_of_range_immediate_is_an_error() {
        assert!(matches!(
            assemble_source("LI A, 300\n"),
            Err(AssemblerError::ImmediateOutOfRange { .. })
        ));
    }

    #[test]
    fn arity_mismatch_is_an_error() {
        assert!(matches!(
            assemble_source("MV A\n"),
            Err(AssemblerError::ArityMismatch { .. })
        ));
    }

    #[test]
    fn unknown_register_is_an_error() {
        assert!(matches!(
            assemble_source("MV Q, A\n"),
            Err(AssemblerError::UnknownRegister { .. })
        ));
    }
}
