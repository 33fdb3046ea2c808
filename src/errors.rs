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

use thiserror::Error;

/// Errors raised while constructing or validating the ISA table itself.
///
/// These are authoring errors: they must surface before any opcode, flag
/// or step is processed (spec kind 2 in the error taxonomy).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IsaError {
    #[error("ISA entries \"{a}\" and \"{b}\" have overlapping opcode masks")]
    OverlappingMasks { a: &'static str, b: &'static str },

    #[error("ISA entry \"{mnemonic}\" declares {steps} steps, exceeding the 14 step budget")]
    TooManySteps { mnemonic: &'static str, steps: usize },
}

/// Errors raised while burning the microcode ROM images.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BurnerError {
    #[error("ISA table is invalid: {0}")]
    Isa(#[from] IsaError),
}

/// Errors raised by the two-pass assembler.
#[derive(Error, Debug)]
pub enum AssemblerError {
    #[error("ISA table is invalid: {0}")]
    Isa(#[from] IsaError),

    #[error("Syntax error: {0}")]
    Syntax(#[from] Box<pest::error::Error<crate::assembler::parser::Rule>>),

    #[error("line {line}: unknown mnemonic \"{mnemonic}\"")]
    UnknownMnemonic { line: usize, mnemonic: String },

    #[error("line {line}: unknown register \"{register}\"")]
    UnknownRegister { line: usize, register: String },

    #[error("line {line}: \"{mnemonic}\" expects {expected} operand(s), found {found}")]
    ArityMismatch {
        line: usize,
        mnemonic: String,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: immediate {value} is out of range [-128, 255]")]
    ImmediateOutOfRange { line: usize, value: i64 },

    #[error("line {line}: label \"{label}\" is already defined")]
    DuplicateLabel { line: usize, label: String },

    #[error("label \"{label}\" is never defined")]
    UndefinedLabel { label: String },

    #[error(
        "relative branch to \"{label}\" is out of range ({distance} bytes, must fit in [-128, 127])"
    )]
    RelativeOutOfRange { label: String, distance: i64 },

    #[error("line {line}: could not parse operand \"{operand}\": {reason}")]
    BadOperand {
        line: usize,
        operand: String,
        reason: String,
    },
}

/// Errors raised while lexing, parsing or lowering compiler source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompilerError {
    #[error("line {line}: unexpected character '{ch}'")]
    UnexpectedChar { line: usize, ch: char },

    #[error("line {line}: expected {expected}, found {found}")]
    UnexpectedToken {
        line: usize,
        expected: String,
        found: String,
    },

    #[error("line {line}: unexpected end of input, expected {expected}")]
    UnexpectedEof { line: usize, expected: String },

    #[error("function \"{name}\" uses undeclared identifier \"{identifier}\"")]
    UndeclaredIdentifier { name: String, identifier: String },

    #[error(
        "function \"{name}\" needs {needed} live registers at once, only 4 ({{A,B,C,D}}) are available"
    )]
    RegisterExhaustion { name: String, needed: usize },

    #[error("register handler for function \"{name}\" was not clear at {point}")]
    DirtyRegisters { name: String, point: String },
}

/// Errors raised while reading or writing a "v2.0 raw" ROM/RAM image.
#[derive(Error, Debug)]
pub enum RawImageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing \"v2.0 raw\" header")]
    MissingHeader,

    #[error("line {line}: could not parse hex value \"{value}\"")]
    BadHexValue { line: usize, value: String },
}
