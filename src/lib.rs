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

pub mod assembler;
pub mod burner;
pub mod compiler;
pub mod control;
pub mod errors;
pub mod file_reader;
pub mod isa;
pub mod raw_image;

use std::path::Path;

use anyhow::{Context, Result};
use file_reader::FileReader;

extern crate pest;
extern crate pest_derive;

/// Assembles already-read source text into a flat byte image (spec.md §4.3).
pub fn assemble(source: &str) -> Result<Vec<u8>> {
    assembler::assemble_source(source).context("Failed during assembly")
}

/// Reads `path` via `reader` and assembles it.
pub fn assemble_file(reader: &dyn FileReader, path: &Path) -> Result<Vec<u8>> {
    assembler::assemble_file(reader, path)
}

/// Burns the two microcode ROM images from the ISA table (spec.md §4.2).
pub fn burn() -> Result<burner::RomImages> {
    burner::burn().context("Failed during microcode burn")
}

/// Compiles already-read C-subset source text into assembly text (spec.md §4.4).
pub fn compile(source: &str) -> Result<String> {
    compiler::compile_source(source).context("Failed during compilation")
}

/// Reads `path` via `reader` and compiles it.
pub fn compile_file(reader: &dyn FileReader, path: &Path) -> Result<String> {
    compiler::compile_file(reader, path)
}
