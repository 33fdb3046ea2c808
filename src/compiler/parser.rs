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

//! Recursive-descent parser over the grammar in spec.md §4.4:
//!
//! ```text
//! program    ::= function+
//! function   ::= 'function' 'int' IDENT '(' args? ')' '{' stmt* '}'
//! args       ::= 'int' IDENT (',' 'int' IDENT)*
//! stmt       ::= ( 'int' IDENT
//!                 | IDENT '=' expr
//!                 | 'return' expr ) ';'
//! expr       ::= primary ('+' primary)*
//! primary    ::= NUMBER | IDENT | IDENT '(' exprs? ')' | '{' expr '}'
//! ```
//!
//! The `'{' expr '}'` alternative in `primary` is the source's quirk,
//! preserved verbatim (spec.md §4.4): grouping in expressions uses braces,
//! not parentheses.

use super::ast::{Argument, Expression, Function, Program, Statement};
use super::lexer::{Token, TokenKind};
use crate::errors::CompilerError;

pub fn parse(tokens: &[Token]) -> Result<Program, CompilerError> {
    let mut parser = Parser { tokens, pos: 0 };
    let mut functions = Vec::new();
    while !parser.at_eof() {
        functions.push(parser.parse_function()?);
    }
    Ok(Program { functions })
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn at_eof(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn expect_kind(&mut self, expected: &str, matches: impl Fn(&TokenKind) -> bool) -> Result<Token, CompilerError> {
        if self.peek().kind == TokenKind::Eof {
            return Err(CompilerError::UnexpectedEof {
                line: self.peek().line,
                expected: expected.to_string(),
            });
        }
        if matches(&self.peek().kind) {
            Ok(self.advance())
        } else {
            Err(CompilerError::UnexpectedToken {
                line: self.peek().line,
                expected: expected.to_string(),
                found: format!("{:?}", self.peek().kind),
            })
        }
    }

    fn expect_ident(&mut self) -> Result<String, CompilerError> {
        let token = self.expect_kind("identifier", |k| matches!(k, TokenKind::Ident(_)))?;
        match token.kind {
            TokenKind::Ident(name) => Ok(name),
            _ => unreachable!(),
        }
    }

    fn parse_function(&mut self) -> Result<Function, CompilerError> {
        self.expect_kind("'function'", |k| *k == TokenKind::Function)?;
        self.expect_kind("'int'", |k| *k == TokenKind::Type)?;
        let name = self.expect_ident()?;

        self.expect_kind("'('", |k| *k == TokenKind::LParen)?;
        let mut arguments = Vec::new();
        if self.peek().kind != TokenKind::RParen {
            loop {
                self.expect_kind("'int'", |k| *k == TokenKind::Type)?;
                let arg_name = self.expect_ident()?;
                arguments.push(Argument {
                    name: arg_name,
                    type_tag: "int".to_string(),
                });
                if self.peek().kind == TokenKind::Comma {
                    self.advance();
                } else {
                    break;
                }
            }
        }
        self.expect_kind("')'", |k| *k == TokenKind::RParen)?;

        self.expect_kind("'{'", |k| *k == TokenKind::LBrace)?;
        let mut body = Vec::new();
        while self.peek().kind != TokenKind::RBrace {
            body.push(self.parse_statement()?);
        }
        self.expect_kind("'}'", |k| *k == TokenKind::RBrace)?;

        Ok(Function {
            name,
            arguments,
            return_type: "int".to_string(),
            body,
        })
    }

    fn parse_statement(&mut self) -> Result<Statement, CompilerError> {
        let statement = match &self.peek().kind {
            TokenKind::Type => {
                self.advance();
                let name = self.expect_ident()?;
                Statement::Declaration { name }
            }
            TokenKind::Return => {
                self.advance();
                let expr = self.parse_expr()?;
                Statement::Return { expr }
            }
            TokenKind::Ident(_) => {
                let name = self.expect_ident()?;
                self.expect_kind("'='", |k| *k == TokenKind::Equals)?;
                let expr = self.parse_expr()?;
                Statement::Assignment { name, expr }
            }
            _ => {
                return Err(CompilerError::UnexpectedToken {
                    line: self.peek().line,
                    expected: "a declaration, assignment, or return statement".to_string(),
                    found: format!("{:?}", self.peek().kind),
                });
            }
        };
        self.expect_kind("';'", |k| *k == TokenKind::Semicolon)?;
        Ok(statement)
    }

    fn parse_expr(&mut self) -> Result<Expression, CompilerError> {
        let mut lhs = self.parse_primary()?;
        while self.peek().kind == TokenKind::Plus {
            self.advance();
            let rhs = self.parse_primary()?;
            lhs = Expression::Plus(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_primary(&mut self) -> Result<Expression, CompilerError> {
        match &self.peek().kind {
            TokenKind::Number(value) => {
                let value = *value;
                self.advance();
                Ok(Expression::NumberLiteral(value))
            }
            TokenKind::LBrace => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect_kind("'}'", |k| *k == TokenKind::RBrace)?;
                Ok(inner)
            }
            TokenKind::Ident(_) => {
                let name = self.expect_ident()?;
                if self.peek().kind == TokenKind::LParen {
                    self.advance();
                    let mut args = Vec::new();
                    if self.peek().kind != TokenKind::RParen {
                        loop {
                            args.push(self.parse_expr()?);
                            if self.peek().kind == TokenKind::Comma {
                                self.advance();
                            } else {
                                break;
                            }
                        }
                    }
                    self.expect_kind("')'", |k| *k == TokenKind::RParen)?;
                    Ok(Expression::Call { callee: name, args })
                } else {
                    Ok(Expression::Identifier(name))
                }
            }
            _ => Err(CompilerError::UnexpectedToken {
                line: self.peek().line,
                expected: "a number, identifier, call, or '{'-grouped expression".to_string(),
                found: format!("{:?}", self.peek().kind),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::lexer::tokenize;

    fn parse_source(source: &str) -> Program {
        parse(&tokenize(source).unwrap()).unwrap()
    }

    #[test]
    fn parses_minimal_function() {
        let program = parse_source("function int main() { return 1 + 2; }");
        assert_eq!(program.functions.len(), 1);
        let main = &program.functions[0];
        assert_eq!(main.name, "main");
        assert!(main.arguments.is_empty());
        assert_eq!(
            main.body,
            vec![Statement::Return {
                expr: Expression::Plus(
                    Box::new(Expression::NumberLiteral(1)),
                    Box::new(Expression::NumberLiteral(2))
                )
            }]
        );
    }

    #[test]
    fn parses_arguments_declarations_assignments_and_calls() {
        let program = parse_source(
            "function int add(int x, int y) { return x + y; } \
             function int main() { int z; z = add(2, 3); return z; }",
        );
        let add = &program.functions[0];
        assert_eq!(
            add.arguments,
            vec![
                Argument { name: "x".to_string(), type_tag: "int".to_string() },
                Argument { name: "y".to_string(), type_tag: "int".to_string() },
            ]
        );

        let main = &program.functions[1];
        assert_eq!(main.body[0], Statement::Declaration { name: "z".to_string() });
        assert_eq!(
            main.body[1],
            Statement::Assignment {
                name: "z".to_string(),
                expr: Expression::Call {
                    callee: "add".to_string(),
                    args: vec![Expression::NumberLiteral(2), Expression::NumberLiteral(3)],
                },
            }
        );
    }

    #[test]
    fn brace_grouping_quirk_is_accepted() {
        let program = parse_source("function int main() { return {1 + 2} + 3; }");
        assert_eq!(
            program.functions[0].body[0],
            Statement::Return {
                expr: Expression::Plus(
                    Box::new(Expression::Plus(
                        Box::new(Expression::NumberLiteral(1)),
                        Box::new(Expression::NumberLiteral(2))
                    )),
                    Box::new(Expression::NumberLiteral(3))
                )
            }
        );
    }

    #[test]
    fn rejects_missing_semicolon() {
        assert!(parse(&tokenize("function int main() { return 1 }").unwrap()).is_err());
    }
}
