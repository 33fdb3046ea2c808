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

//! Abstracts reading the single input file the assembler or compiler is
//! pointed at, so tests never have to touch the real filesystem.
//!
//! Grounded on the teacher's `file_reader.rs`; trimmed to the single
//! `read_to_string` operation this toolchain needs (no includes, no
//! binary assets, so `read_binary` has no remaining use here).

use anyhow::{Context, Result, anyhow};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub trait FileReader {
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

/// Production file reader, backed by `std::fs`.
pub struct AsmFileReader;

impl FileReader for AsmFileReader {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))
    }
}

/// In-memory file reader for tests.
#[derive(Default)]
pub struct MockFileReader {
    files: HashMap<PathBuf, String>,
}

impl MockFileReader {
    pub fn add_file(&mut self, path: &str, content: &str) {
        self.files.insert(PathBuf::from(path), content.to_string());
    }
}

impl FileReader for MockFileReader {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow!("Mock file not found: {}", path.display()))
    }
}
