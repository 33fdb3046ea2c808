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

//! Generates relative/absolute labels, disambiguating repeated hints by
//! suffixing `__n` (spec.md §4.4, grounded on the original `LabelHandler`).

use std::collections::HashMap;

#[derive(Default)]
pub struct LabelHandler {
    seen: HashMap<String, u32>,
}

impl LabelHandler {
    pub fn new() -> Self {
        LabelHandler::default()
    }

    fn add(&mut self, label: String) -> String {
        match self.seen.get_mut(&label) {
            None => {
                self.seen.insert(label.clone(), 0);
                label
            }
            Some(count) => {
                *count += 1;
                format!("{label}__{count}")
            }
        }
    }

    pub fn add_relative_label(&mut self, hint: &str) -> String {
        self.add(format!(".{hint}"))
    }

    pub fn add_absolute_label(&mut self, hint: &str) -> String {
        self.add(format!(":{hint}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_use_of_a_hint_is_unsuffixed() {
        let mut handler = LabelHandler::new();
        assert_eq!(handler.add_absolute_label("function_main"), ":function_main");
    }

    #[test]
    fn repeated_hints_get_a_numeric_suffix() {
        let mut handler = LabelHandler::new();
        assert_eq!(handler.add_relative_label("done"), ".done");
        assert_eq!(handler.add_relative_label("done"), ".done__1");
        assert_eq!(handler.add_relative_label("done"), ".done__2");
    }
}
