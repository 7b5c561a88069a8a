// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query tokenizer.
//!
//! Splits a raw query into lexemes: terms, field names, presence markers,
//! boosts and edit distances. Separators are whitespace and `-` (except a
//! leading `-`, which is the prohibited marker). `\` escapes the next char so
//! `a\:b` is the single term `a:b`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lexeme {
    /// `name:` - the `:` is consumed.
    Field(String),
    Term(String),
    /// `+` or `-` at the start of a clause.
    Presence(char),
    /// Text after `^`, not yet validated.
    Boost(String),
    /// Text after `~`, not yet validated.
    EditDistance(String),
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-'
}

/// Characters that end a term without being part of it.
fn is_special(c: char) -> bool {
    matches!(c, ':' | '^' | '~')
}

pub fn lex(input: &str) -> Vec<Lexeme> {
    let mut lexemes = Vec::new();
    let mut chars = input.chars().peekable();
    let mut clause_start = true;

    while let Some(&c) = chars.peek() {
        if clause_start && (c == '+' || c == '-') {
            chars.next();
            lexemes.push(Lexeme::Presence(c));
            clause_start = false;
            continue;
        }
        if is_separator(c) {
            chars.next();
            clause_start = true;
            continue;
        }
        clause_start = false;

        match c {
            '^' | '~' => {
                chars.next();
                let mut value = String::new();
                while let Some(&next) = chars.peek() {
                    if is_separator(next) || is_special(next) {
                        break;
                    }
                    value.push(next);
                    chars.next();
                }
                lexemes.push(if c == '^' {
                    Lexeme::Boost(value)
                } else {
                    Lexeme::EditDistance(value)
                });
            }
            ':' => {
                // A field marker with no name in front of it
                chars.next();
                lexemes.push(Lexeme::Field(String::new()));
            }
            _ => {
                let mut text = String::new();
                let mut is_field = false;
                while let Some(&next) = chars.peek() {
                    if next == '\\' {
                        chars.next();
                        if let Some(escaped) = chars.next() {
                            text.push(escaped);
                        }
                        continue;
                    }
                    if is_separator(next) || next == '^' || next == '~' {
                        break;
                    }
                    if next == ':' {
                        chars.next();
                        is_field = true;
                        break;
                    }
                    text.push(next);
                    chars.next();
                }
                lexemes.push(if is_field {
                    Lexeme::Field(text)
                } else {
                    Lexeme::Term(text)
                });
            }
        }
    }

    lexemes
}
