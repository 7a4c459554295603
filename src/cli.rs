use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Input play file
    pub input: PathBuf,
    /// Name of the generated Java class; the output file is {name}.java
    pub class_name: String,
    /// Word list tables (JSON)
    #[arg(long, default_value = "wordlists.json")]
    pub wordlists: PathBuf,
    /// Output directory
    #[arg(long, default_value = ".")]
    pub output: PathBuf,
}

/// The core uses the class name verbatim, so the front end has to make
/// sure it's a valid Java identifier.
pub fn is_valid_class_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::is_valid_class_name;

    #[test]
    fn test_class_name_validation() {
        let test_cases = vec![
            ("Hello", true),
            ("_private", true),
            ("Act1Scene2", true),
            ("", false),
            ("2cool", false),
            ("has space", false),
            ("kebab-case", false),
        ];

        for (name, expected) in test_cases {
            assert_eq!(is_valid_class_name(name), expected, "checking {name:?}");
        }
    }
}
