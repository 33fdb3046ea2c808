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

use crate::errors::AssemblerError;
use std::collections::HashMap;

/// Maps a label's name, sigil included (`.loop`, `:target`), to the byte
/// offset it was defined at (spec.md §3).
pub type SymbolTable = HashMap<String, u16>;

/// Records a label definition, rejecting a second definition of the same
/// name (spec.md §3: "each label is defined at most once").
pub fn define_symbol(
    table: &mut SymbolTable,
    label: String,
    offset: u16,
    line: usize,
) -> Result<(), AssemblerError> {
    if table.contains_key(&label) {
        return Err(AssemblerError::DuplicateLabel { line, label });
    }
    table.insert(label, offset);
    Ok(())
}

pub fn get_symbol<'a>(table: &'a SymbolTable, label: &str) -> Result<&'a u16, AssemblerError> {
    table.get(label).ok_or_else(|| AssemblerError::UndefinedLabel {
        label: label.to_string(),
    })
}
