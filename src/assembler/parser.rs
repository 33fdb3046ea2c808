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

//! Tokenises a full assembly source file with a `pest` grammar, following
//! the teacher's `CicadaParser`/`Rule::program` shape.

use super::ast::{LineAst, OperandAst};
use crate::errors::AssemblerError;
use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "grammar.pest"]
pub struct AsmParser;

pub fn parse_source(source: &str) -> Result<Vec<LineAst>, AssemblerError> {
    let mut pairs = AsmParser::parse(Rule::program, source)
        .map_err(|e| AssemblerError::Syntax(Box::new(e)))?;
    let program = pairs.next().expect("program is the grammar's top rule");

    let mut lines = Vec::new();
    for line_pair in program.into_inner() {
        match line_pair.as_rule() {
            Rule::line => {
                let line_number = line_pair.as_span().start_pos().line_col().0;
                if let Some(inner) = line_pair.into_inner().next() {
                    lines.push(build_line(inner, line_number)?);
                }
            }
            Rule::EOI => {}
            _ => {}
        }
    }
    Ok(lines)
}

fn build_line(pair: Pair<Rule>, line: usize) -> Result<LineAst, AssemblerError> {
    match pair.as_rule() {
        Rule::label => {
            let sigil_pair = pair.into_inner().next().expect("label has one inner rule");
            match sigil_pair.as_rule() {
                Rule::relative_label => Ok(LineAst::RelativeLabel {
                    name: sigil_pair.into_inner().next().unwrap().as_str().to_string(),
                    line,
                }),
                Rule::absolute_label => Ok(LineAst::AbsoluteLabel {
                    name: sigil_pair.into_inner().next().unwrap().as_str().to_string(),
                    line,
                }),
                _ => unreachable!("label only contains relative_label or absolute_label"),
            }
        }
        Rule::instruction => {
            let mut inner = pair.into_inner();
            let mnemonic = inner.next().expect("instruction has a mnemonic").as_str().to_string();
            let operands = inner.map(build_operand).collect::<Result<Vec<_>, _>>()?;
            Ok(LineAst::Instruction {
                mnemonic,
                operands,
                line,
            })
        }
        _ => unreachable!("line only contains label or instruction"),
    }
}

fn build_operand(pair: Pair<Rule>) -> Result<OperandAst, AssemblerError> {
    debug_assert_eq!(pair.as_rule(), Rule::operand);
    let inner = pair.into_inner().next().expect("operand has one inner rule");
    match inner.as_rule() {
        Rule::operand_rel_label => Ok(OperandAst::RelLabel(
            inner.into_inner().next().unwrap().as_str().to_string(),
        )),
        Rule::operand_abs_label => Ok(OperandAst::AbsLabel(
            inner.into_inner().next().unwrap().as_str().to_string(),
        )),
        Rule::number => Ok(OperandAst::Number(parse_number(inner.as_str()))),
        Rule::word => Ok(OperandAst::Word(inner.as_str().to_string())),
        _ => unreachable!("operand only contains the four alternatives above"),
    }
}

fn parse_number(text: &str) -> i64 {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let value = if let Some(hex) = digits.strip_prefix("0x") {
        i64::from_str_radix(hex, 16)
    } else if let Some(oct) = digits.strip_prefix("0o") {
        i64::from_str_radix(oct, 8)
    } else if let Some(bin) = digits.strip_prefix("0b") {
        i64::from_str_radix(bin, 2)
    } else {
        digits.parse::<i64>()
    }
    .expect("grammar guarantees a well-formed numeral");
    if negative { -value } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_relative_label_and_instruction() {
        let lines = parse_source(".loop\n  INC A\n").unwrap();
        assert_eq!(
            lines[0],
            LineAst::RelativeLabel {
                name: "loop".to_string(),
                line: 1
            }
        );
        assert_eq!(
            lines[1],
            LineAst::Instruction {
                mnemonic: "INC".to_string(),
                operands: vec![OperandAst::Word("A".to_string())],
                line: 2
            }
        );
    }

    #[test]
    fn strips_comments_and_blank_lines() {
        let lines = parse_source("# full line comment\n\nHLT  # trailing\n").unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0],
            LineAst::Instruction {
                mnemonic: "HLT".to_string(),
                operands: vec![],
                line: 3
            }
        );
    }

    #[test]
    fn parses_hex_immediate_and_absolute_label_operand() {
        let lines = parse_source("LI A, 0x10\nPJMP :target\n").unwrap();
        assert_eq!(
            lines[0],
            LineAst::Instruction {
                mnemonic: "LI".to_string(),
                operands: vec![OperandAst::Word("A".to_string()), OperandAst::Number(0x10)],
                line: 1
            }
        );
        assert_eq!(
            lines[1],
            LineAst::Instruction {
                mnemonic: "PJMP".to_string(),
                operands: vec![OperandAst::AbsLabel("target".to_string())],
                line: 2
            }
        );
    }

    #[test]
    fn rejects_malformed_syntax() {
        assert!(parse_source("MV A,\n").is_err());
    }
}
