//! Loads the word list JSON and compiles it into lookup tables.
//!
//! The on-disk format is one JSON document with one array per
//! category (see `wordlists.json`). Everything here runs once at
//! startup; the resulting `Classification` is read-only afterwards.

use anyhow::{Context, Result};
use std::collections::HashMap;

use crate::model::{Classification, Symbol, Wordlists};

/// Parse the word list JSON string and compile the lookup tables.
pub fn load(json: &str) -> Result<Classification> {
    let lists: Wordlists = serde_json::from_str(json).context("malformed word list JSON")?;
    Ok(build(&lists))
}

/// Compile raw word lists into the symbolizer's tables.
///
/// Single words are registered in a fixed priority order; the first
/// registration of a word wins. Punctuation and keywords come first so
/// no word list can shadow them, character names come last.
pub fn build(lists: &Wordlists) -> Classification {
    let mut words = HashMap::new();

    register(&mut words, ".", Symbol::EndPunctuation);
    register(&mut words, "!", Symbol::EndPunctuation);
    register(&mut words, ",", Symbol::Comma);
    register(&mut words, "?", Symbol::QuestionMark);
    register(&mut words, ":", Symbol::Colon);
    register(&mut words, "[", Symbol::OpenStageDirection);
    register(&mut words, "]", Symbol::CloseStageDirection);
    register(&mut words, "enter", Symbol::Enter);
    register(&mut words, "exit", Symbol::Exit);
    register(&mut words, "exeunt", Symbol::Exeunt);
    register(&mut words, "and", Symbol::And);
    register(&mut words, "act", Symbol::Act);
    register(&mut words, "scene", Symbol::Scene);
    register_all(&mut words, &lists.assignments, Symbol::Assignment);
    register(&mut words, "as", Symbol::As);
    register(&mut words, "sum", Symbol::Sum);
    register(&mut words, "difference", Symbol::Difference);
    register(&mut words, "product", Symbol::Product);
    register(&mut words, "quotient", Symbol::Quotient);
    register(&mut words, "remainder", Symbol::Remainder);
    register(&mut words, "twice", Symbol::Twice);
    register(&mut words, "thrice", Symbol::Thrice);
    register(&mut words, "half", Symbol::Half);
    register(&mut words, "square", Symbol::Square);
    register(&mut words, "cube", Symbol::Cube);
    register_all(&mut words, &lists.zero, Symbol::Zero);
    for noun in expand_nouns(&lists.positive_nouns) {
        register(&mut words, &noun, Symbol::PositiveNoun);
    }
    for noun in expand_nouns(&lists.negative_nouns) {
        register(&mut words, &noun, Symbol::NegativeNoun);
    }
    register_all(&mut words, &lists.adjectives, Symbol::Adjective);
    register_all(&mut words, &lists.greater, Symbol::GreaterThan);
    register_all(&mut words, &lists.lesser, Symbol::LessThan);
    register(&mut words, "remember", Symbol::PushToStack);
    register(&mut words, "recall", Symbol::PopFromStack);
    register_all(&mut words, &lists.first_person_pronouns, Symbol::FirstPersonPronoun);
    register_all(&mut words, &lists.second_person_pronouns, Symbol::SecondPersonPronoun);

    let mut phrases = builtin_phrases();

    // Characters go in either table depending on whether they have
    // spaces. Multi-word names keep their casing in the payload but
    // lose the whitespace ("Lady Macbeth" -> "LadyMacbeth").
    for character in &lists.characters {
        if character.contains(char::is_whitespace) {
            let canonical: String = character.split_whitespace().collect();
            let pattern: Vec<String> = character
                .to_lowercase()
                .split_whitespace()
                .map(str::to_owned)
                .collect();
            phrases.push((pattern, Symbol::Character(canonical)));
        } else {
            register(&mut words, character, Symbol::Character(character.clone()));
        }
    }

    Classification { words, phrases }
}

fn register(words: &mut HashMap<String, Symbol>, word: &str, symbol: Symbol) {
    words.entry(word.to_lowercase()).or_insert(symbol);
}

fn register_all(words: &mut HashMap<String, Symbol>, list: &[String], symbol: Symbol) {
    for word in list {
        register(words, word, symbol.clone());
    }
}

/// Nouns match in singular and plural form; a '*' prefix marks the
/// ones that don't take an 's'.
fn expand_nouns(nouns: &[String]) -> Vec<String> {
    let mut expanded = Vec::with_capacity(nouns.len() * 2);
    for noun in nouns {
        match noun.strip_prefix('*') {
            Some(bare) => expanded.push(bare.to_string()),
            None => {
                expanded.push(noun.clone());
                expanded.push(format!("{noun}s"));
            }
        }
    }
    expanded
}

fn phrase(pattern: &str, symbol: Symbol) -> (Vec<String>, Symbol) {
    (
        pattern.split_whitespace().map(str::to_owned).collect(),
        symbol,
    )
}

fn builtin_phrases() -> Vec<(Vec<String>, Symbol)> {
    vec![
        phrase("if so", Symbol::IfSo),
        phrase("if not", Symbol::IfNot),
        phrase("listen to your heart", Symbol::InputNumber),
        phrase("listen to thy heart", Symbol::InputNumber),
        phrase("open your mind", Symbol::InputCharacter),
        phrase("open thy mind", Symbol::InputCharacter),
        phrase("open your heart", Symbol::OutputNumber),
        phrase("open thy heart", Symbol::OutputNumber),
        phrase("speak your mind", Symbol::OutputCharacter),
        phrase("speak thy mind", Symbol::OutputCharacter),
        phrase("let us return", Symbol::Jump),
        phrase("let us proceed", Symbol::Jump),
        phrase("we must return", Symbol::Jump),
        phrase("we must proceed", Symbol::Jump),
        phrase("we shall return", Symbol::Jump),
        phrase("we shall proceed", Symbol::Jump),
        phrase("square root", Symbol::SquareRoot),
        phrase("cube root", Symbol::CubeRoot),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lists() -> Wordlists {
        Wordlists {
            characters: vec!["Romeo".into(), "Lady Macbeth".into()],
            adjectives: vec!["good".into(), "act".into()],
            first_person_pronouns: vec!["i".into(), "me".into()],
            second_person_pronouns: vec!["thou".into()],
            assignments: vec!["is".into(), "art".into()],
            greater: vec!["better".into()],
            lesser: vec!["worse".into()],
            zero: vec!["nothing".into()],
            positive_nouns: vec!["rose".into(), "*happiness".into()],
            negative_nouns: vec!["toad".into()],
        }
    }

    #[test]
    fn test_noun_plural_expansion() {
        let tables = build(&lists());
        assert_eq!(tables.words.get("rose"), Some(&Symbol::PositiveNoun));
        assert_eq!(tables.words.get("roses"), Some(&Symbol::PositiveNoun));
        assert_eq!(tables.words.get("happiness"), Some(&Symbol::PositiveNoun));
        assert_eq!(tables.words.get("happinesss"), None);
        assert_eq!(tables.words.get("toads"), Some(&Symbol::NegativeNoun));
    }

    #[test]
    fn test_keywords_win_over_word_lists() {
        // "act" also appears in the adjective list above; the keyword
        // registration comes first and must win.
        let tables = build(&lists());
        assert_eq!(tables.words.get("act"), Some(&Symbol::Act));
        assert_eq!(tables.words.get("good"), Some(&Symbol::Adjective));
    }

    #[test]
    fn test_characters_split_by_word_count() {
        let tables = build(&lists());
        assert_eq!(
            tables.words.get("romeo"),
            Some(&Symbol::Character("Romeo".into()))
        );
        let lady = tables
            .phrases
            .iter()
            .find(|(pattern, _)| pattern == &vec!["lady".to_string(), "macbeth".to_string()])
            .expect("multi-word name registered as a phrase");
        assert_eq!(lady.1, Symbol::Character("LadyMacbeth".into()));
        // built-in phrases keep priority over character names
        assert_eq!(tables.phrases[0].1, Symbol::IfSo);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        assert!(load("{\"characters\": 7}").is_err());
    }
}
