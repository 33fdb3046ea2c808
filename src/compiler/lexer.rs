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

//! Hand-written scanner for the C-subset (spec.md §4.4). Produces a flat
//! token stream; `#` line comments are discarded here rather than passed
//! through to the parser.

use crate::errors::CompilerError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Function,
    Return,
    Type,
    Ident(String),
    Number(i64),
    LParen,
    RParen,
    LBrace,
    RBrace,
    Semicolon,
    Comma,
    Equals,
    Plus,
    Eof,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, CompilerError> {
    let chars: Vec<char> = source.chars().collect();
    let mut pos = 0;
    let mut line = 1;
    let mut tokens = Vec::new();

    while pos < chars.len() {
        let ch = chars[pos];
        match ch {
            '\n' => {
                line += 1;
                pos += 1;
            }
            c if c.is_whitespace() => pos += 1,
            '#' => {
                while pos < chars.len() && chars[pos] != '\n' {
                    pos += 1;
                }
            }
            '(' => push(&mut tokens, &mut pos, line, TokenKind::LParen),
            ')' => push(&mut tokens, &mut pos, line, TokenKind::RParen),
            '{' => push(&mut tokens, &mut pos, line, TokenKind::LBrace),
            '}' => push(&mut tokens, &mut pos, line, TokenKind::RBrace),
            ';' => push(&mut tokens, &mut pos, line, TokenKind::Semicolon),
            ',' => push(&mut tokens, &mut pos, line, TokenKind::Comma),
            '=' => push(&mut tokens, &mut pos, line, TokenKind::Equals),
            '+' => push(&mut tokens, &mut pos, line, TokenKind::Plus),
            c if c.is_ascii_digit() => {
                let start = pos;
                while pos < chars.len() && chars[pos].is_ascii_digit() {
                    pos += 1;
                }
                let text: String = chars[start..pos].iter().collect();
                let value = text.parse::<i64>().expect("digit run is a valid integer");
                tokens.push(Token {
                    kind: TokenKind::Number(value),
                    line,
                });
            }
            c if c.is_ascii_alphabetic() => {
                let start = pos;
                while pos < chars.len() && chars[pos].is_ascii_alphanumeric() {
                    pos += 1;
                }
                let word: String = chars[start..pos].iter().collect();
                let kind = match word.as_str() {
                    "function" => TokenKind::Function,
                    "return" => TokenKind::Return,
                    "int" => TokenKind::Type,
                    _ => TokenKind::Ident(word),
                };
                tokens.push(Token { kind, line });
            }
            other => return Err(CompilerError::UnexpectedChar { line, ch: other }),
        }
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        line,
    });
    Ok(tokens)
}

fn push(tokens: &mut Vec<Token>, pos: &mut usize, line: usize, kind: TokenKind) {
    tokens.push(Token { kind, line });
    *pos += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_a_minimal_function() {
        let tokens = tokenize("function int main() { return 1 + 2; }").unwrap();
        let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Function,
                TokenKind::Type,
                TokenKind::Ident("main".to_string()),
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::Return,
                TokenKind::Number(1),
                TokenKind::Plus,
                TokenKind::Number(2),
                TokenKind::Semicolon,
                TokenKind::RBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn discards_comments() {
        let tokens = tokenize("# comment\nint x;").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Type);
        assert_eq!(tokens[0].line, 2);
    }

    #[test]
    fn rejects_unexpected_characters() {
        assert!(matches!(
            tokenize("int x $;"),
            Err(CompilerError::UnexpectedChar { ch: '$', .. })
        ));
    }
}
