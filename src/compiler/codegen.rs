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

//! Lowers the AST to assembly text using the stack-based calling
//! convention in spec.md §4.4. Grounded literally on
//! `original_source/src/compiler/nodes.py`'s `generate_code` methods: the
//! same instruction sequences, reproduced with Rust string-building
//! instead of Python f-strings.

use super::ast::{Expression, Function, Program, Statement};
use super::labels::LabelHandler;
use super::registers::RegisterHandler;
use crate::errors::CompilerError;
use crate::isa::Register;
use std::fmt::Write as _;

pub fn generate_program(program: &Program) -> Result<String, CompilerError> {
    let mut labels = LabelHandler::new();
    let mut out = String::new();
    out.push_str("LI A, 0xff\nSPSL A\nSPSH A\nZERO A\nPJMP :function_main\nJAL\nHLT\n");

    for function in &program.functions {
        out.push_str(&generate_function(function, &mut labels)?);
    }
    Ok(out)
}

/// Per-function lowering state: the live-register bump allocator, the
/// declared locals (in declaration order, for offset lookup), the
/// argument list, and this function's epilogue label.
struct FunctionContext {
    name: String,
    registers: RegisterHandler,
    variables: Vec<String>,
    arguments: Vec<String>,
    ret_label: String,
}

impl FunctionContext {
    /// Argument N sits at `7 + locals + N` from the current SP; local N
    /// sits at `1 + N`, both counted from the most-recently-declared
    /// variable/argument backward (spec.md §4.4).
    fn get_offset(&self, name: &str) -> Result<u16, CompilerError> {
        for (index, var) in self.variables.iter().rev().enumerate() {
            if var == name {
                return Ok(index as u16 + 1);
            }
        }
        for (index, arg) in self.arguments.iter().rev().enumerate() {
            if arg == name {
                return Ok(index as u16 + 7 + self.variables.len() as u16);
            }
        }
        Err(CompilerError::UndeclaredIdentifier {
            name: self.name.clone(),
            identifier: name.to_string(),
        })
    }
}

fn generate_function(function: &Function, labels: &mut LabelHandler) -> Result<String, CompilerError> {
    let function_label = labels.add_absolute_label(&format!("function_{}", function.name));
    let ret_label = labels.add_absolute_label(&format!("function_ret_{}", function.name));

    let mut ctx = FunctionContext {
        name: function.name.clone(),
        registers: RegisterHandler::new(),
        variables: Vec::new(),
        arguments: function.arguments.iter().map(|a| a.name.clone()).collect(),
        ret_label: ret_label.clone(),
    };

    let mut statements_code = String::new();
    for statement in &function.body {
        statements_code.push_str(&generate_statement(statement, &mut ctx)?);
    }
    ctx.registers.assert_clear(&ctx.name, "function exit")?;

    let pull_slide = "PULL\n".repeat(ctx.variables.len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "\n# {} {:?} -> int\n{function_label}",
        function.name, function.arguments
    );
    out.push_str("# saving ip\nPUSH\nRTWL\nPUSH\nRTWH\n");
    out.push_str(&statements_code);
    out.push_str("HLT\n"); // unreachable unless a statement forgot to return
    out.push_str(&ret_label);
    out.push('\n');
    out.push_str(&pull_slide);
    out.push_str("# restoring ip\nPULL\nRTRH\nPULL\nRTRL\n");
    out.push_str("RET\n");
    Ok(out)
}

fn generate_statement(statement: &Statement, ctx: &mut FunctionContext) -> Result<String, CompilerError> {
    match statement {
        Statement::Declaration { name } => {
            ctx.variables.push(name.clone());
            Ok(format!("PUSH # for var {name}\n"))
        }
        Statement::Assignment { name, expr } => {
            let (register, mut code) = generate_expression(expr, ctx)?;
            ctx.registers.free(register);
            let offset = ctx.get_offset(name)?;
            let _ = writeln!(code, "SPOF {offset:#x} # var: {name}\nMEMW {}", register.name());
            Ok(code)
        }
        Statement::Return { expr } => {
            let (register, mut code) = generate_expression(expr, ctx)?;
            ctx.registers.free(register);
            ctx.registers.assert_clear(&ctx.name, "return")?;
            let _ = writeln!(code, "MV A, {}\nPJMP {}\nJMP", register.name(), ctx.ret_label);
            Ok(code)
        }
    }
}

fn generate_expression(expr: &Expression, ctx: &mut FunctionContext) -> Result<(Register, String), CompilerError> {
    match expr {
        Expression::NumberLiteral(value) => {
            let register = ctx.registers.request(&ctx.name)?;
            Ok((register, format!("LI {}, {:#x}\n", register.name(), value & 0xFF)))
        }
        Expression::Identifier(name) => {
            let offset = ctx.get_offset(name)?;
            let register = ctx.registers.request(&ctx.name)?;
            Ok((
                register,
                format!("SPOF {offset:#x} # var {name}\nMEMR {}\n", register.name()),
            ))
        }
        Expression::Plus(lhs, rhs) => {
            let (lhs_register, lhs_code) = generate_expression(lhs, ctx)?;
            let (rhs_register, rhs_code) = generate_expression(rhs, ctx)?;
            ctx.registers.free(rhs_register);
            Ok((
                lhs_register,
                format!(
                    "{lhs_code}{rhs_code}ADD {}, {}\n",
                    lhs_register.name(),
                    rhs_register.name()
                ),
            ))
        }
        Expression::Call { callee, args } => generate_call(callee, args, ctx),
    }
}

/// Stack layout at the moment of `JAL` below is, from the new stack top
/// down: the (padded-to-4) saved live registers, then the arguments, with
/// the return address captured by `JAL` into the hardware latch rather
/// than pushed onto the stack (spec.md §4.4).
fn generate_call(callee: &str, args: &[Expression], ctx: &mut FunctionContext) -> Result<(Register, String), CompilerError> {
    let mut arguments_code = String::new();
    for (index, arg) in args.iter().enumerate() {
        let (register, code) = generate_expression(arg, ctx)?;
        ctx.registers.free(register);
        let _ = write!(arguments_code, "{code}PUSH # arg #{index}\nMEMW {}\n", register.name());
    }
    let pop_arguments_code = "PULL\n".repeat(args.len());

    let active = ctx.registers.active();
    let mut save_registers_code = String::new();
    for register in &active {
        let _ = write!(save_registers_code, "PUSH\nMEMW {}\n", register.name());
    }
    save_registers_code.push_str(&"PUSH\n".repeat(4 - active.len()));

    let mut restore_registers_code = String::new();
    restore_registers_code.push_str(&"PULL\n".repeat(4 - active.len()));
    for register in active.iter().rev() {
        let _ = write!(restore_registers_code, "PULL\nMEMR {}\n", register.name());
    }

    let result_register = ctx.registers.request(&ctx.name)?;
    let mut out = String::new();
    let _ = write!(out, "\n# calling {callee}\n{arguments_code}# saving registers\n{save_registers_code}");
    let _ = write!(
        out,
        "\nPJMP :function_{callee}\nJAL\n\n# moving return type to correct register\nMV {}, A\n\n# restoring registers\n",
        result_register.name()
    );
    out.push_str(&restore_registers_code);
    out.push_str("# popping arguments\n");
    out.push_str(&pop_arguments_code);
    Ok((result_register, out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::{lexer::tokenize, parser::parse};

    fn compile(source: &str) -> String {
        let program = parse(&tokenize(source).unwrap()).unwrap();
        generate_program(&program).unwrap()
    }

    #[test]
    fn program_prologue_sets_sp_and_calls_main() {
        let asm = compile("function int main() { return 1 + 2; }");
        assert!(asm.starts_with("LI A, 0xff\nSPSL A\nSPSH A\nZERO A\nPJMP :function_main\nJAL\nHLT\n"));
        assert!(asm.contains(":function_main"));
        assert!(asm.contains("ADD A, B"));
        assert!(asm.contains("RET"));
    }

    #[test]
    fn call_site_saves_and_restores_live_registers() {
        let asm = compile(
            "function int add(int x, int y) { return x + y; } \
             function int main() { return add(2, 3); }",
        );
        assert!(asm.contains("PJMP :function_add"));
        assert!(asm.contains("# saving registers"));
        assert!(asm.contains("# restoring registers"));
    }

    #[test]
    fn assigning_to_undeclared_identifier_is_an_error() {
        use crate::compiler::ast::{Expression, Function, Program, Statement};
        let program = Program {
            functions: vec![Function {
                name: "main".to_string(),
                arguments: vec![],
                return_type: "int".to_string(),
                body: vec![Statement::Assignment {
                    name: "ghost".to_string(),
                    expr: Expression::NumberLiteral(1),
                }],
            }],
        };
        assert!(matches!(
            generate_program(&program),
            Err(CompilerError::UndeclaredIdentifier { .. })
        ));
    }
}
