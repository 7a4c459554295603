//! Classifies tokens into symbols using the compiled word tables.
//!
//! Symbolization is total: a token that means nothing becomes
//! `Ignore`, which the parser filters out. That's what lets plays
//! carry arbitrary prose between the words that matter.

use crate::model::{Classification, Symbol};
use crate::translator::numerals::parse_numeral;

/// Transform a token list into a symbol list.
///
/// Phrases are matched first: when the window of tokens ending at the
/// current one equals a pattern, the symbols already emitted for the
/// window's earlier tokens are replaced by the single phrase symbol.
/// Then single-word lookup, then the Roman numeral fallback.
pub fn symbolize(tokens: &[String], tables: &Classification) -> Vec<Symbol> {
    let mut symbols: Vec<Symbol> = Vec::with_capacity(tokens.len());

    'tokens: for (i, token) in tokens.iter().enumerate() {
        let lowercase = token.to_lowercase();

        for (pattern, symbol) in &tables.phrases {
            let len = pattern.len();
            if i + 1 < len {
                // not enough preceding tokens to possibly match
                continue;
            }
            let window = &tokens[i + 1 - len..=i];
            if window
                .iter()
                .zip(pattern)
                .all(|(t, p)| t.to_lowercase() == *p)
            {
                symbols.truncate(symbols.len().saturating_sub(len - 1));
                symbols.push(symbol.clone());
                continue 'tokens;
            }
        }

        if let Some(symbol) = tables.words.get(&lowercase) {
            if lowercase == "i" {
                // "I" is ambiguous: a numeral after an act or scene
                // keyword, the pronoun anywhere else in the play, and
                // meaningless before anything else has been said
                match symbols.iter().rev().find(|s| **s != Symbol::Ignore) {
                    Some(Symbol::Act) | Some(Symbol::Scene) => symbols.push(Symbol::Numeral(1)),
                    Some(_) => symbols.push(Symbol::FirstPersonPronoun),
                    None => symbols.push(Symbol::Ignore),
                }
            } else {
                symbols.push(symbol.clone());
            }
            continue;
        }

        if let Ok(value) = parse_numeral(token) {
            symbols.push(Symbol::Numeral(value));
            continue;
        }

        // comment-like prose
        symbols.push(Symbol::Ignore);
    }

    symbols
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Wordlists;
    use crate::translator::tokenizer::tokenize;
    use crate::wordlists;

    fn tables() -> Classification {
        wordlists::build(&Wordlists {
            characters: vec!["Romeo".into(), "Juliet".into(), "Lady Macbeth".into()],
            adjectives: vec!["young".into(), "good".into()],
            first_person_pronouns: vec!["i".into(), "me".into(), "myself".into()],
            second_person_pronouns: vec!["thou".into(), "you".into(), "thyself".into()],
            assignments: vec!["am".into(), "art".into(), "is".into(), "are".into()],
            greater: vec!["better".into(), "more".into()],
            lesser: vec!["worse".into()],
            zero: vec!["nothing".into()],
            positive_nouns: vec!["rose".into(), "flower".into()],
            negative_nouns: vec!["toad".into()],
        })
    }

    fn symbols_for(src: &str) -> Vec<Symbol> {
        symbolize(&tokenize(src), &tables())
    }

    #[test]
    fn test_single_word_classification() {
        assert_eq!(
            symbols_for("Romeo, thou art a rose!"),
            vec![
                Symbol::Character("Romeo".into()),
                Symbol::Comma,
                Symbol::SecondPersonPronoun,
                Symbol::Assignment,
                Symbol::Ignore, // "a"
                Symbol::PositiveNoun,
                Symbol::EndPunctuation,
            ]
        );
    }

    #[test]
    fn test_phrase_collapse_rewrites_previous_symbols() {
        // "speak" alone is prose and "thy" is a pronoun; reaching
        // "mind" collapses all three into one symbol
        assert_eq!(
            symbols_for("Speak thy mind."),
            vec![Symbol::OutputCharacter, Symbol::EndPunctuation]
        );
        assert_eq!(
            symbols_for("We shall proceed to act II."),
            vec![
                Symbol::Jump,
                Symbol::Ignore, // "to"
                Symbol::Act,
                Symbol::Numeral(2),
                Symbol::EndPunctuation,
            ]
        );
    }

    #[test]
    fn test_multi_word_character_name() {
        assert_eq!(
            symbols_for("Enter Lady Macbeth"),
            vec![Symbol::Enter, Symbol::Character("LadyMacbeth".into())]
        );
    }

    #[test]
    fn test_square_root_wins_over_square() {
        assert_eq!(
            symbols_for("the square root of Juliet"),
            vec![
                Symbol::Ignore,
                Symbol::SquareRoot,
                Symbol::Ignore,
                Symbol::Character("Juliet".into()),
            ]
        );
    }

    #[test]
    fn test_ambiguous_i() {
        // after an act keyword: the numeral 1
        assert_eq!(
            symbols_for("Act I"),
            vec![Symbol::Act, Symbol::Numeral(1)]
        );
        // mid-line: the pronoun
        assert_eq!(
            symbols_for("Romeo: I"),
            vec![
                Symbol::Character("Romeo".into()),
                Symbol::Colon,
                Symbol::FirstPersonPronoun,
            ]
        );
        // with nothing but prose before it: ignored
        assert_eq!(
            symbols_for("so I say"),
            vec![Symbol::Ignore, Symbol::Ignore, Symbol::Ignore]
        );
    }

    #[test]
    fn test_numeral_fallback_and_prose() {
        assert_eq!(symbols_for("XIV"), vec![Symbol::Numeral(14)]);
        // an ill-formed numeral is just prose, never an error
        assert_eq!(symbols_for("VX"), vec![Symbol::Ignore]);
        assert_eq!(symbols_for("perchance"), vec![Symbol::Ignore]);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            symbols_for("ROMEO exit"),
            vec![Symbol::Character("Romeo".into()), Symbol::Exit]
        );
    }
}
