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

//! A bump allocator over the four architectural registers (spec.md §4.4,
//! §9 design note): no spilling, expressions that need a fifth live value
//! are rejected outright.

use crate::errors::CompilerError;
use crate::isa::Register;

pub struct RegisterHandler {
    available: [bool; 4],
}

impl RegisterHandler {
    pub fn new() -> Self {
        RegisterHandler { available: [false; 4] }
    }

    /// Claims the lowest-indexed free register.
    pub fn request(&mut self, function_name: &str) -> Result<Register, CompilerError> {
        for (index, taken) in self.available.iter_mut().enumerate() {
            if !*taken {
                *taken = true;
                return Ok(Register::from_index(index as u8));
            }
        }
        Err(CompilerError::RegisterExhaustion {
            name: function_name.to_string(),
            needed: 5,
        })
    }

    pub fn free(&mut self, register: Register) {
        self.available[register.index() as usize] = false;
    }

    /// Every statement boundary and function exit must find all registers
    /// free (spec.md §3 invariants).
    pub fn assert_clear(&self, function_name: &str, point: &str) -> Result<(), CompilerError> {
        if self.available.iter().any(|taken| *taken) {
            return Err(CompilerError::DirtyRegisters {
                name: function_name.to_string(),
                point: point.to_string(),
            });
        }
        Ok(())
    }

    /// Registers currently live, in index order — used when a call site
    /// must save/restore them around a nested call.
    pub fn active(&self) -> Vec<Register> {
        (0u8..4)
            .filter(|&index| self.available[index as usize])
            .map(Register::from_index)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_registers_in_order() {
        let mut handler = RegisterHandler::new();
        assert_eq!(handler.request("f").unwrap(), Register::A);
        assert_eq!(handler.request("f").unwrap(), Register::B);
    }

    #[test]
    fn exhaustion_is_an_error_past_four() {
        let mut handler = RegisterHandler::new();
        for _ in 0..4 {
            handler.request("f").unwrap();
        }
        assert!(matches!(
            handler.request("f"),
            Err(CompilerError::RegisterExhaustion { .. })
        ));
    }

    #[test]
    fn assert_clear_fails_while_a_register_is_live() {
        let mut handler = RegisterHandler::new();
        let r = handler.request("f").unwrap();
        assert!(handler.assert_clear("f", "test").is_err());
        handler.free(r);
        assert!(handler.assert_clear("f", "test").is_ok());
    }
}
