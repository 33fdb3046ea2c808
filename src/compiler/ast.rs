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

//! The compiler's AST (spec.md §3): a `Program` of `Function`s, each with
//! arguments, a return type tag, and a body of `Statement`s.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    pub type_tag: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub arguments: Vec<Argument>,
    pub return_type: String,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub functions: Vec<Function>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Declaration { name: String },
    Assignment { name: String, expr: Expression },
    Return { expr: Expression },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    NumberLiteral(i64),
    Identifier(String),
    Plus(Box<Expression>, Box<Expression>),
    Call { callee: String, args: Vec<Expression> },
}
