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

//! The assembler's line-level AST, produced by `parser::parse_source` and
//! consumed by the two-pass emitter.

/// One parsed operand, still untyped with respect to the ISA entry it will
/// eventually be checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperandAst {
    /// A bare word: either a register name (`A`/`B`/`C`/`D`) or, if it is
    /// none of those, an unknown-register error at lowering time.
    Word(String),
    Number(i64),
    RelLabel(String),
    AbsLabel(String),
}

impl OperandAst {
    /// Number of assembly-level operand slots this operand fills (spec.md
    /// §3: an absolute label counts as two, since it expands to two bytes).
    pub fn slot_count(&self) -> usize {
        match self {
            OperandAst::AbsLabel(_) => 2,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAst {
    RelativeLabel { name: String, line: usize },
    AbsoluteLabel { name: String, line: usize },
    Instruction {
        mnemonic: String,
        operands: Vec<OperandAst>,
        line: usize,
    },
}
