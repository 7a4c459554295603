//! Parser and code generator: walks the symbol stream, enforces the
//! play's rules and builds the Java output as it goes.
//!
//! The grammar is simple enough that parsing and emission are one
//! pass; there is no intermediate AST. Each act and scene becomes a
//! private static method, each character an int slot plus a stack.

use std::collections::HashSet;

use crate::error::CompilationError;
use crate::model::Symbol;

/// Which level a header or jump destination refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Level {
    Act,
    Scene,
}

pub struct Generator<'a> {
    symbols: Vec<Symbol>,
    idx: usize,
    class_name: &'a str,
    /// Declared characters, in preamble order.
    characters: Vec<String>,
    /// Who is currently present; never more than two.
    stage: HashSet<String>,
    act: u32,
    scene: u32,
    speaker: Option<String>,
    spoken_to: Option<String>,
    /// Every jump destination seen, checked after the full pass.
    jumped_to: HashSet<(Level, u32)>,
    /// The previous statement was a question, so a jump right after it
    /// is conditional.
    last_was_question: bool,
    /// The current method ended in an unconditional return; anything
    /// but another jump, stray punctuation or a new header is
    /// unreachable.
    ended_in_jump: bool,
    java: String,
}

impl<'a> Generator<'a> {
    pub fn new(symbols: Vec<Symbol>, class_name: &'a str) -> Self {
        let symbols = symbols
            .into_iter()
            .filter(|s| *s != Symbol::Ignore)
            .collect();
        Self {
            symbols,
            idx: 0,
            class_name,
            characters: Vec::new(),
            stage: HashSet::new(),
            act: 0,
            scene: 0,
            speaker: None,
            spoken_to: None,
            jumped_to: HashSet::new(),
            last_was_question: false,
            ended_in_jump: false,
            java: String::new(),
        }
    }

    /// Run the whole pass and return the generated Java source.
    pub fn translate(mut self) -> Result<String, CompilationError> {
        if self.symbols.is_empty() {
            return Err(CompilationError::new("SPL input was empty or nonsensical."));
        }

        // the title is everything up to the first end punctuation
        self.idx = self
            .symbols
            .iter()
            .position(|s| *s == Symbol::EndPunctuation)
            .ok_or_else(|| CompilationError::new("Expected end punctuation to end the title."))?
            + 1;

        self.read_characters()?;
        self.emit_prelude();

        while self.idx < self.symbols.len() {
            let symbol = self.symbols[self.idx].clone();
            match &symbol {
                Symbol::Act => self.start_method(Level::Act)?,
                Symbol::Scene => self.start_method(Level::Scene)?,

                Symbol::OpenStageDirection => {
                    self.parse_stage_direction()?;
                    // a line cannot span a stage direction
                    self.speaker = None;
                    self.spoken_to = None;
                }

                Symbol::Character(_)
                    if matches!(self.symbols.get(self.idx + 1), Some(Symbol::Colon)) =>
                {
                    if self.act == 0 || self.scene == 0 {
                        return Err(CompilationError::new(
                            "A character cannot speak outside of an act and scene.",
                        ));
                    }
                    self.parse_line_start()?;
                }

                Symbol::SecondPersonPronoun => {
                    let (speaker, spoken_to) = self.active_line()?;
                    self.parse_assignment(&speaker, &spoken_to)?;
                }

                Symbol::Assignment => self.parse_question()?,

                Symbol::Jump => {
                    self.active_line()?;
                    self.parse_jump()?;
                }

                Symbol::PushToStack => {
                    let (_, spoken_to) = self.active_line()?;
                    self.skip_till_end_punct()?;
                    self.java
                        .push_str(&format!("{spoken_to}_stk.push({spoken_to});\n\t\t"));
                }

                Symbol::PopFromStack => {
                    let (_, spoken_to) = self.active_line()?;
                    self.skip_till_end_punct()?;
                    self.java
                        .push_str(&format!("{spoken_to} = {spoken_to}_stk.pop();\n\t\t"));
                }

                Symbol::InputNumber => {
                    let (_, spoken_to) = self.active_line()?;
                    self.expect_end_after("listen to your/thy heart")?;
                    self.java
                        .push_str(&format!("{spoken_to} = scanner.nextInt();\n\t\t"));
                }

                Symbol::InputCharacter => {
                    // one character, -1 on end of input
                    let (_, spoken_to) = self.active_line()?;
                    self.expect_end_after("open your/thy mind")?;
                    self.java.push_str(&format!(
                        "try {{\n\t\t\t{spoken_to} = scanner.findInLine(\".\").charAt(0);\n\t\t}} catch (NullPointerException e) {{\n\t\t\t{spoken_to} = -1;\n\t\t}}\n\t\t"
                    ));
                }

                Symbol::OutputNumber => {
                    let (_, spoken_to) = self.active_line()?;
                    self.expect_end_after("open your/thy heart")?;
                    self.java
                        .push_str(&format!("System.out.print({spoken_to});\n\t\t"));
                }

                Symbol::OutputCharacter => {
                    let (_, spoken_to) = self.active_line()?;
                    self.expect_end_after("speak your/thy mind")?;
                    self.java
                        .push_str(&format!("System.out.print((char) {spoken_to});\n\t\t"));
                }

                // tolerate doubled terminal punctuation like "!!"
                Symbol::EndPunctuation => self.idx += 1,

                other => {
                    return Err(CompilationError::new(format!(
                        "Bad symbol at start of line: {other:?}"
                    )));
                }
            }

            self.last_was_question = symbol == Symbol::Assignment;
            if self.ended_in_jump && !matches!(symbol, Symbol::Jump | Symbol::EndPunctuation) {
                return Err(CompilationError::new(
                    "A jump unguarded by a question must be the last statement in its act or scene.",
                ));
            }
        }

        self.check_jump_targets()?;

        self.java.pop();
        self.java.push_str("}\n}\n");
        Ok(self.java)
    }

    /* ------------------------------------------------------------------ */
    /*  Preamble and headers                                              */
    /* ------------------------------------------------------------------ */

    fn read_characters(&mut self) -> Result<(), CompilationError> {
        loop {
            let symbol = match self.symbols.get(self.idx) {
                Some(s) => s,
                None => {
                    return Err(CompilationError::new(
                        "You can't just have a play with no acts.",
                    ));
                }
            };
            if *symbol == Symbol::Act {
                return Ok(());
            }

            let name = match symbol {
                Symbol::Character(name) => name.clone(),
                _ => return Err(CompilationError::new("Character expected in preamble.")),
            };
            if self.characters.contains(&name) {
                return Err(CompilationError::new(
                    "Duplicate characters are not allowed.",
                ));
            }
            self.characters.push(name);
            self.idx += 1;

            // a comma, then free-text description up to end punctuation
            match self.symbols.get(self.idx) {
                Some(Symbol::Comma) => {}
                Some(_) => {
                    return Err(CompilationError::new(
                        "Comma expected after character in preamble.",
                    ));
                }
                None => {
                    return Err(CompilationError::new(
                        "You can't just have a play with no acts.",
                    ));
                }
            }
            self.skip_till_end_punct()?;
        }
    }

    /// Parse an act/scene header and open its method, closing the
    /// previous one with a fall-through call unless it already
    /// returned.
    fn start_method(&mut self, level: Level) -> Result<(), CompilationError> {
        let method = self.parse_header(level)?;
        if self.ended_in_jump {
            self.java.pop();
        } else {
            self.java.push_str(&format!("{method}();\n\t"));
        }
        self.java.push_str("}\n\t");
        self.java
            .push_str(&format!("private static void {method}() {{\n\t\t"));
        self.ended_in_jump = false;
        Ok(())
    }

    fn parse_header(&mut self, level: Level) -> Result<String, CompilationError> {
        self.idx += 1; // past the act/scene keyword

        let number = match self.symbols.get(self.idx) {
            Some(Symbol::Numeral(n)) => *n,
            _ => {
                return Err(CompilationError::new(
                    "Expected Roman numeral after act or scene keyword.",
                ));
            }
        };
        let counter = match level {
            Level::Act => self.act,
            Level::Scene => self.scene,
        };
        if number != counter + 1 {
            return Err(CompilationError::new("Act or scene out of order."));
        }
        self.idx += 1;

        if !matches!(self.symbols.get(self.idx), Some(Symbol::Colon)) {
            return Err(CompilationError::new(
                "Expected colon after act or scene declaration.",
            ));
        }

        // the rest of the header is free-text description
        loop {
            self.idx += 1;
            match self.symbols.get(self.idx) {
                Some(Symbol::EndPunctuation) => break,
                Some(_) => {}
                None => {
                    return Err(CompilationError::new(
                        "Expected end punctuation after act or scene declaration.",
                    ));
                }
            }
        }
        self.idx += 1;

        Ok(match level {
            Level::Act => {
                self.act = number;
                self.scene = 0;
                format!("act{number}")
            }
            Level::Scene => {
                self.scene = number;
                format!("act{}scene{}", self.act, number)
            }
        })
    }

    /* ------------------------------------------------------------------ */
    /*  Stage directions                                                  */
    /* ------------------------------------------------------------------ */

    fn parse_stage_direction(&mut self) -> Result<(), CompilationError> {
        self.idx += 1; // past '['
        match self.symbols.get(self.idx) {
            Some(Symbol::Enter) => {
                self.idx += 1;
                self.parse_enter()
            }
            Some(Symbol::Exit) => {
                self.idx += 1;
                self.parse_exit()
            }
            Some(Symbol::Exeunt) => {
                self.idx += 1;
                self.parse_exeunt()
            }
            _ => Err(CompilationError::new(
                "Expected \"Enter\", \"Exit\", or \"Exeunt\" in stage direction.",
            )),
        }
    }

    fn parse_enter(&mut self) -> Result<(), CompilationError> {
        let first = self.direction_character()?;

        let second = if matches!(self.symbols.get(self.idx), Some(Symbol::And)) {
            self.idx += 1;
            let name = match self.symbols.get(self.idx) {
                Some(Symbol::Character(name)) => name.clone(),
                _ => {
                    return Err(CompilationError::new(
                        "Expected second character after \"and\" in stage direction.",
                    ));
                }
            };
            if !self.characters.contains(&name) {
                return Err(CompilationError::new(format!(
                    "Unknown character in stage direction: {name}"
                )));
            }
            if name == first {
                return Err(CompilationError::new(
                    "You can't enter the same character twice in the same stage direction.",
                ));
            }
            self.idx += 1;
            Some(name)
        } else {
            None
        };

        self.close_direction()?;

        if self.stage.len() == 2 || (second.is_some() && !self.stage.is_empty()) {
            return Err(CompilationError::new("Too many characters on stage."));
        }
        if self.stage.contains(&first) {
            return Err(CompilationError::new(format!(
                "{first} is already on stage."
            )));
        }
        self.stage.insert(first);
        if let Some(second) = second {
            self.stage.insert(second);
        }
        Ok(())
    }

    fn parse_exit(&mut self) -> Result<(), CompilationError> {
        let name = self.direction_character()?;
        self.close_direction()?;
        if !self.stage.remove(&name) {
            return Err(CompilationError::new(format!(
                "{name} is not on stage and cannot exit."
            )));
        }
        Ok(())
    }

    fn parse_exeunt(&mut self) -> Result<(), CompilationError> {
        self.close_direction()?;
        if self.stage.is_empty() {
            return Err(CompilationError::new("Stage is empty, cannot exeunt."));
        }
        self.stage.clear();
        Ok(())
    }

    fn direction_character(&mut self) -> Result<String, CompilationError> {
        let name = match self.symbols.get(self.idx) {
            Some(Symbol::Character(name)) => name.clone(),
            _ => {
                return Err(CompilationError::new(
                    "Expected character after \"Enter\" or \"Exit\".",
                ));
            }
        };
        if !self.characters.contains(&name) {
            return Err(CompilationError::new(format!(
                "Unknown character in stage direction: {name}"
            )));
        }
        self.idx += 1;
        Ok(name)
    }

    fn close_direction(&mut self) -> Result<(), CompilationError> {
        match self.symbols.get(self.idx) {
            Some(Symbol::CloseStageDirection) => {
                self.idx += 1;
                Ok(())
            }
            _ => Err(CompilationError::new(
                "Expected \"]\" to close a stage direction",
            )),
        }
    }

    /* ------------------------------------------------------------------ */
    /*  Lines and statements                                              */
    /* ------------------------------------------------------------------ */

    /// Parse "Name:" and establish the speaker and, implicitly, the
    /// one other character on stage as the addressee.
    fn parse_line_start(&mut self) -> Result<(), CompilationError> {
        let speaker = match self.symbols.get(self.idx) {
            Some(Symbol::Character(name)) => name.clone(),
            _ => {
                return Err(CompilationError::new(
                    "Expected character to start their line.",
                ));
            }
        };
        if !self.characters.contains(&speaker) {
            return Err(CompilationError::new(format!("Unknown character {speaker}")));
        }
        if !self.stage.contains(&speaker) {
            return Err(CompilationError::new(format!(
                "Character {speaker} trying to speak while not on stage."
            )));
        }
        if self.stage.len() != 2 {
            return Err(CompilationError::new(format!(
                "Character {speaker} trying to speak to themselves (or more than 1 person)."
            )));
        }
        self.idx += 1;

        if !matches!(self.symbols.get(self.idx), Some(Symbol::Colon)) {
            return Err(CompilationError::new(
                "Colon expected after character to open their line.",
            ));
        }
        self.idx += 1;

        self.spoken_to = self.stage.iter().find(|name| **name != speaker).cloned();
        self.speaker = Some(speaker);
        Ok(())
    }

    /// A line is only valid with both a speaker and someone spoken to.
    fn active_line(&self) -> Result<(String, String), CompilationError> {
        match (&self.speaker, &self.spoken_to) {
            (Some(speaker), Some(spoken_to)) => Ok((speaker.clone(), spoken_to.clone())),
            _ => Err(CompilationError::new(
                "A line cannot be spoken because no character is speaking it.",
            )),
        }
    }

    /// "Thou art [as ... as] <expression>." assigns to the addressee.
    fn parse_assignment(
        &mut self,
        speaker: &str,
        spoken_to: &str,
    ) -> Result<(), CompilationError> {
        self.idx += 1; // past the pronoun

        if matches!(self.symbols.get(self.idx), Some(Symbol::Assignment)) {
            self.idx += 1;
        }
        if matches!(self.symbols.get(self.idx), Some(Symbol::As)) {
            self.skip_as()?;
        }

        let expr = self.parse_expression(speaker, spoken_to)?;

        if !matches!(self.symbols.get(self.idx), Some(Symbol::EndPunctuation)) {
            return Err(CompilationError::new(
                "End punctuation expected after assignment.",
            ));
        }
        self.idx += 1;

        self.java.push_str(&format!("{spoken_to} = {expr};\n\t\t"));
        Ok(())
    }

    /// "Is X better than Y?" plus "If so,"/"If not," becomes an if
    /// statement guarding whatever is emitted next. The answer may
    /// open on a different character's line.
    fn parse_question(&mut self) -> Result<(), CompilationError> {
        let (speaker, spoken_to) = self.active_line()?;
        self.idx += 1; // past is/are/art

        let first = self.parse_expression(&speaker, &spoken_to)?;

        let op = match self.symbols.get(self.idx) {
            Some(Symbol::As) => {
                self.skip_as()?;
                "=="
            }
            Some(Symbol::GreaterThan) => {
                if matches!(self.symbols.get(self.idx + 1), Some(Symbol::Adjective)) {
                    self.idx += 1; // skip the adjective in "more X than"
                }
                self.idx += 1;
                ">"
            }
            Some(Symbol::LessThan) => {
                if matches!(self.symbols.get(self.idx + 1), Some(Symbol::Adjective)) {
                    self.idx += 1;
                }
                self.idx += 1;
                "<"
            }
            _ => {
                return Err(CompilationError::new(
                    "Expression in question must be followed by greater than/less than symbol or as ... as.",
                ));
            }
        };

        let second = self.parse_expression(&speaker, &spoken_to)?;

        if !matches!(self.symbols.get(self.idx), Some(Symbol::QuestionMark)) {
            return Err(CompilationError::new(
                "Question must end with question mark.",
            ));
        }
        self.idx += 1;

        if matches!(self.symbols.get(self.idx), Some(Symbol::Character(_))) {
            self.parse_line_start()?;
        }

        let guard = match self.symbols.get(self.idx) {
            Some(Symbol::IfSo) => format!("if ({first} {op} {second})"),
            Some(Symbol::IfNot) => format!("if (!({first} {op} {second}))"),
            _ => {
                return Err(CompilationError::new(
                    "Question must be followed by \"if so\" or \"if not\".",
                ));
            }
        };
        self.idx += 1;

        if !matches!(self.symbols.get(self.idx), Some(Symbol::Comma)) {
            return Err(CompilationError::new(
                "\"If so\" or \"if not\" must be followed by a comma.",
            ));
        }
        self.idx += 1;

        self.java.push_str(&guard);
        self.java.push(' ');
        Ok(())
    }

    /// "Let us return to act/scene N." becomes a call-and-return block
    /// so it composes with a preceding question.
    fn parse_jump(&mut self) -> Result<(), CompilationError> {
        self.idx += 1; // past the jump phrase

        let level = match self.symbols.get(self.idx) {
            Some(Symbol::Act) => Level::Act,
            Some(Symbol::Scene) => Level::Scene,
            _ => {
                return Err(CompilationError::new(
                    "Jump (\"let us return\" or similar) must be followed with \"act\" or \"scene\".",
                ));
            }
        };
        self.idx += 1;

        let number = match self.symbols.get(self.idx) {
            Some(Symbol::Numeral(n)) => *n,
            _ => {
                return Err(CompilationError::new(
                    "Act or scene keyword in jump (\"let us return\", etc.) must be followed by Roman numeral.",
                ));
            }
        };
        self.idx += 1;

        if !matches!(self.symbols.get(self.idx), Some(Symbol::EndPunctuation)) {
            return Err(CompilationError::new(
                "Expected end punctuation (\".\" or \"!\") to end jump (\"let us return\", etc.).",
            ));
        }
        self.idx += 1;

        self.jumped_to.insert((level, number));

        let target = match level {
            Level::Act => format!("act{number}"),
            // scene jumps resolve within the act being parsed
            Level::Scene => format!("act{}scene{}", self.act, number),
        };
        self.java
            .push_str(&format!("{{ {target}(); return; }}\n\t\t"));

        if !self.last_was_question {
            self.ended_in_jump = true; // a definite return
        }
        Ok(())
    }

    /* ------------------------------------------------------------------ */
    /*  Expressions                                                       */
    /* ------------------------------------------------------------------ */

    /// Recursively parse an expression into Java, e.g. "the sum of a
    /// rose and twice thyself" -> "(1 + (2*Romeo))".
    fn parse_expression(
        &mut self,
        speaker: &str,
        spoken_to: &str,
    ) -> Result<String, CompilationError> {
        let symbol = match self.symbols.get(self.idx) {
            Some(s) => s.clone(),
            None => {
                return Err(CompilationError::new(
                    "Expression exceeded length of program.",
                ));
            }
        };

        match symbol {
            // adjectives double, just like "twice"
            Symbol::Twice | Symbol::Adjective => self.unary("(2*", ")", speaker, spoken_to),
            Symbol::Thrice => self.unary("(3*", ")", speaker, spoken_to),
            Symbol::Square => self.unary("((int) Math.pow(", ", 2))", speaker, spoken_to),
            Symbol::Cube => self.unary("((int) Math.pow(", ", 3))", speaker, spoken_to),
            Symbol::SquareRoot => self.unary("((int) Math.sqrt(", "))", speaker, spoken_to),
            Symbol::CubeRoot => self.unary("((int) Math.cbrt(", "))", speaker, spoken_to),
            Symbol::Half => self.unary("(", "/2)", speaker, spoken_to),

            Symbol::FirstPersonPronoun => {
                self.idx += 1;
                Ok(speaker.to_string())
            }
            Symbol::SecondPersonPronoun => {
                self.idx += 1;
                Ok(spoken_to.to_string())
            }
            Symbol::Character(name) => {
                if !self.characters.contains(&name) {
                    return Err(CompilationError::new(format!(
                        "{name} is not in this program!"
                    )));
                }
                self.idx += 1;
                Ok(name)
            }

            Symbol::PositiveNoun => {
                self.idx += 1;
                Ok("1".to_string())
            }
            Symbol::NegativeNoun => {
                self.idx += 1;
                Ok("-1".to_string())
            }
            Symbol::Zero => {
                self.idx += 1;
                Ok("0".to_string())
            }

            Symbol::Sum => self.binary("+", speaker, spoken_to),
            Symbol::Difference => self.binary("-", speaker, spoken_to),
            Symbol::Product => self.binary("*", speaker, spoken_to),
            Symbol::Quotient => self.binary("/", speaker, spoken_to),
            Symbol::Remainder => {
                self.idx += 1;
                if !matches!(self.symbols.get(self.idx), Some(Symbol::Quotient)) {
                    return Err(CompilationError::new(
                        "\"Quotient\" must appear after \"remainder\".",
                    ));
                }
                self.binary("%", speaker, spoken_to)
            }

            Symbol::EndPunctuation => Err(CompilationError::new(
                "Expression ended too soon: did you use an unknown noun/adjective/etc?",
            )),
            other => Err(CompilationError::new(format!(
                "Unknown symbol in expression: {other:?}"
            ))),
        }
    }

    fn unary(
        &mut self,
        before: &str,
        after: &str,
        speaker: &str,
        spoken_to: &str,
    ) -> Result<String, CompilationError> {
        self.idx += 1;
        let expr = self.parse_expression(speaker, spoken_to)?;
        Ok(format!("{before}{expr}{after}"))
    }

    fn binary(
        &mut self,
        op: &str,
        speaker: &str,
        spoken_to: &str,
    ) -> Result<String, CompilationError> {
        self.idx += 1;
        let lhs = self.parse_expression(speaker, spoken_to)?;
        if !matches!(self.symbols.get(self.idx), Some(Symbol::And)) {
            return Err(CompilationError::new(
                "Expected \"and\" separating two addends of sum.",
            ));
        }
        self.idx += 1;
        let rhs = self.parse_expression(speaker, spoken_to)?;
        Ok(format!("({lhs} {op} {rhs})"))
    }

    /* ------------------------------------------------------------------ */
    /*  Cursor helpers, validation, emission                              */
    /* ------------------------------------------------------------------ */

    /// Advance one past the next end punctuation.
    fn skip_till_end_punct(&mut self) -> Result<(), CompilationError> {
        loop {
            self.idx += 1;
            match self.symbols.get(self.idx) {
                Some(Symbol::EndPunctuation) => {
                    self.idx += 1;
                    return Ok(());
                }
                Some(_) => {}
                None => {
                    return Err(CompilationError::new(
                        "End punctuation expected, but none found till end of program.",
                    ));
                }
            }
        }
    }

    /// Advance one past the next "as".
    fn skip_as(&mut self) -> Result<(), CompilationError> {
        loop {
            self.idx += 1;
            match self.symbols.get(self.idx) {
                Some(Symbol::As) => {
                    self.idx += 1;
                    return Ok(());
                }
                Some(_) => {}
                None => return Err(CompilationError::new("No matching \"as\".")),
            }
        }
    }

    /// The next symbol must be end punctuation.
    fn expect_end_after(&mut self, what: &str) -> Result<(), CompilationError> {
        self.idx += 1;
        match self.symbols.get(self.idx) {
            Some(Symbol::EndPunctuation) => {
                self.idx += 1;
                Ok(())
            }
            _ => Err(CompilationError::new(format!(
                "Expected end punctuation after \"{what}\"."
            ))),
        }
    }

    fn check_jump_targets(&self) -> Result<(), CompilationError> {
        for (level, number) in &self.jumped_to {
            match level {
                Level::Act if *number > self.act => {
                    return Err(CompilationError::new(format!(
                        "Jump to nonexistent act {number}"
                    )));
                }
                // scene destinations are checked against the scene
                // counter left by the last act parsed
                Level::Scene if *number > self.scene => {
                    return Err(CompilationError::new(format!(
                        "Jump to nonexistent scene {number}"
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn emit_prelude(&mut self) {
        self.java.push_str("// Auto-generated – DO NOT EDIT\n");
        self.java.push_str("import java.util.ArrayDeque;\n");
        self.java.push_str("import java.util.Deque;\n");
        self.java.push_str("import java.util.Scanner;\n\n");
        self.java
            .push_str(&format!("public class {} {{\n", self.class_name));
        self.java
            .push_str("\tprivate static Scanner scanner = new Scanner(System.in);\n");

        // a number and a stack for each character
        for character in &self.characters {
            self.java
                .push_str(&format!("\tprivate static int {character};\n"));
            self.java.push_str(&format!(
                "\tprivate static Deque<Integer> {character}_stk = new ArrayDeque<Integer>();\n"
            ));
        }

        self.java
            .push_str("\tpublic static void main(String[] args) {\n\t\t");
    }
}
