//! The translation pipeline: tokenize, symbolize, generate.
//!
//! Each stage fully consumes its input before the next begins. All
//! per-play state lives inside one `translate` call; the only thing
//! shared between calls is the read-only `Classification`.

pub mod generator;
pub mod numerals;
pub mod symbolizer;
pub mod tokenizer;

use crate::error::CompilationError;
use crate::model::Classification;

/// Translate a play into Java source for a class named `class_name`.
///
/// This is the one entry point front ends should call. The class name
/// is used verbatim; validating it as a Java identifier is the
/// caller's job.
pub fn translate(
    spl: &str,
    class_name: &str,
    tables: &Classification,
) -> Result<String, CompilationError> {
    let tokens = tokenizer::tokenize(spl);
    let symbols = symbolizer::symbolize(&tokens, tables);
    generator::Generator::new(symbols, class_name).translate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Wordlists;
    use crate::wordlists;

    fn tables() -> Classification {
        wordlists::build(&Wordlists {
            characters: vec!["Romeo".into(), "Juliet".into()],
            adjectives: vec!["good".into()],
            first_person_pronouns: vec!["i".into(), "me".into()],
            second_person_pronouns: vec!["thou".into(), "thyself".into()],
            assignments: vec!["am".into(), "art".into(), "is".into()],
            greater: vec!["better".into()],
            lesser: vec!["worse".into()],
            zero: vec!["nothing".into()],
            positive_nouns: vec!["rose".into()],
            negative_nouns: vec!["toad".into()],
        })
    }

    #[test]
    fn test_pipeline_end_to_end() {
        let play = "\
            The Tragedy of Nothing.\n\n\
            Romeo, a man.\n\
            Juliet, a woman.\n\n\
            Act I: the one act.\n\n\
            Scene I: the one scene.\n\n\
            [Enter Romeo and Juliet]\n\n\
            Juliet: Thou art the sum of a rose and a toad. Open thy heart!\n\n\
            [Exeunt]\n";

        let java = translate(play, "Nothing", &tables()).expect("play translates");
        assert!(java.contains("public class Nothing {"));
        assert!(java.contains("Romeo = (1 + -1);"));
        assert!(java.contains("System.out.print(Romeo);"));
    }

    #[test]
    fn test_class_name_is_used_verbatim() {
        let play = "A play.\nRomeo, a man.\nAct I: x.\nScene I: y.\n";
        let java = translate(play, "MyPlay", &tables()).expect("play translates");
        assert!(java.contains("public class MyPlay {"));
    }

    #[test]
    fn test_error_surfaces_from_generator() {
        let e = translate("A play.\nRomeo, a man.\n", "Play", &tables())
            .expect_err("no acts should fail");
        assert_eq!(e.message(), "You can't just have a play with no acts.");
    }
}
