//! Shared data model for the translation pipeline.
//!
//! We keep the word lists in very "raw" form (`Wordlists`, 1-to-1 with
//! the JSON file) so the table compiler can decide how to index them.

use serde::Deserialize;
use std::collections::HashMap;

/// One classified token. The symbolizer turns every token into exactly
/// one of these; everything the parser does afterwards is a match on
/// this enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    /// Prose with no program meaning; filtered out before parsing.
    Ignore,
    /// A character from the registry, by canonical (whitespace-free) name.
    Character(String),
    /// '.' or '!'
    EndPunctuation,
    Comma,
    QuestionMark,
    Colon,
    /// '['
    OpenStageDirection,
    /// ']'
    CloseStageDirection,
    Enter,
    Exit,
    Exeunt,
    And,
    Act,
    Scene,
    Numeral(u32),
    /// am, are, art, be, is
    Assignment,
    As,
    Sum,
    Difference,
    Product,
    Quotient,
    Remainder,
    Twice,
    Thrice,
    Square,
    Cube,
    Half,
    SquareRoot,
    CubeRoot,
    IfSo,
    IfNot,
    /// "let us return", "we shall proceed", etc.
    Jump,
    Zero,
    /// A noun with a value of 1.
    PositiveNoun,
    /// A noun with a value of -1.
    NegativeNoun,
    Adjective,
    /// "better", "more", etc.
    GreaterThan,
    /// "worse", "less", etc.
    LessThan,
    /// "remember"
    PushToStack,
    /// "recall"
    PopFromStack,
    /// "listen to your/thy heart"
    InputNumber,
    /// "open your/thy mind"
    InputCharacter,
    /// "open your/thy heart"
    OutputNumber,
    /// "speak your/thy mind"
    OutputCharacter,
    FirstPersonPronoun,
    SecondPersonPronoun,
}

/// The word list file exactly as it comes out of the JSON loader.
///
/// Noun entries prefixed with '*' don't get an automatic 's' plural;
/// every other noun is registered both bare and pluralized.
#[derive(Debug, Clone, Deserialize)]
pub struct Wordlists {
    pub characters: Vec<String>,
    pub adjectives: Vec<String>,
    pub first_person_pronouns: Vec<String>,
    pub second_person_pronouns: Vec<String>,
    pub assignments: Vec<String>,
    pub greater: Vec<String>,
    pub lesser: Vec<String>,
    pub zero: Vec<String>,
    pub positive_nouns: Vec<String>,
    pub negative_nouns: Vec<String>,
}

/// Compiled lookup tables handed to the symbolizer. Built once at
/// startup and shared read-only by every translation call.
#[derive(Debug, Clone)]
pub struct Classification {
    /// Lowercased single word -> symbol. The first registration of a
    /// word wins, so the build order in `wordlists.rs` is load-bearing.
    pub words: HashMap<String, Symbol>,
    /// Priority-ordered multi-word patterns (lowercased). Built-in
    /// phrases come before multi-word character names; the first match
    /// at a given position wins.
    pub phrases: Vec<(Vec<String>, Symbol)>,
}
