//! Very small hand-written tokenizer for play source.
//!
//! At this stage we *only* break the raw text into tokens. No words
//! are recognised yet – "Romeo", "act", "toad" all come out as plain
//! strings. The symbolizer interprets them later.
//
//  Lexical items:
//
//      Word        ::= maximal run of letters, digits and '-'
//      Punctuation ::= any other single non-whitespace character
//      Whitespace is discarded.

use std::iter::Peekable;
use std::str::Chars;

#[derive(Clone)]
pub struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            chars: src.chars().peekable(),
        }
    }

    fn consume_while<F: Fn(char) -> bool>(&mut self, pred: F, buf: &mut String) {
        while let Some(&c) = self.chars.peek() {
            if pred(c) {
                buf.push(c);
                self.chars.next();
            } else {
                break;
            }
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-'
}

impl Iterator for Tokenizer<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        // skip whitespace between tokens
        while let Some(&c) = self.chars.peek() {
            if c.is_whitespace() {
                self.chars.next();
            } else {
                break;
            }
        }

        let first = self.chars.next()?;
        if is_word_char(first) {
            let mut word = String::new();
            word.push(first);
            self.consume_while(is_word_char, &mut word);
            Some(word)
        } else {
            Some(first.to_string())
        }
    }
}

/// Split play source into tokens. Cannot fail; empty input yields an
/// empty list.
pub fn tokenize(src: &str) -> Vec<String> {
    Tokenizer::new(src).collect()
}
