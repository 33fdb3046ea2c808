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

//! The C-subset compiler: lexer → parser → code generator, producing
//! assembly text that `crate::assembler` can in turn assemble (spec.md
//! §4.4).

pub mod ast;
pub mod codegen;
pub mod labels;
pub mod lexer;
pub mod parser;
pub mod registers;

use crate::errors::CompilerError;
use crate::file_reader::FileReader;
use anyhow::{Context, Result};
use std::path::Path;

/// Compiles already-read source text into assembly text.
pub fn compile_source(source: &str) -> Result<String, CompilerError> {
    let tokens = lexer::tokenize(source)?;
    let program = parser::parse(&tokens)?;
    codegen::generate_program(&program)
}

/// Reads `path` via `reader` and compiles it, for use by the CLI.
pub fn compile_file(reader: &dyn FileReader, path: &Path) -> Result<String> {
    let source = reader
        .read_to_string(path)
        .with_context(|| format!("reading compiler source {}", path.display()))?;
    compile_source(&source).context("compiling source")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_a_function_call_to_assembleable_text() {
        let source = "function int add(int x, int y) { return x + y; } \
                      function int main() { return add(2, 3); }";
        let asm = compile_source(source).unwrap();
        let bytes = crate::assembler::assemble_source(&asm);
        assert!(bytes.is_ok(), "generated assembly failed to assemble: {bytes:?}");
    }

    #[test]
    fn syntax_error_surfaces_as_a_compiler_error() {
        assert!(compile_source("function int main() { return 1 }").is_err());
    }
}
