//! Parsing of formulas from the text a user types.
//!
//! The accepted syntax is that of the belief statements the system was built around, not a general logic syntax:
//! single-character alphabetic atoms, `~` for negation, `&` and `|` for conjunction and disjunction, `>>` for implication, and parentheses.
//! Binding strength is the usual `~`, `&`, `|`, `>>` from tightest to loosest, with implication right-associative.
//!
//! Parsing sits at the boundary of the core: a string which fails to parse is reported as an error with a character position, and nothing reaches the belief base.
//!
//! ```rust
//! # use agm_belief::parse;
//! let formula = parse::formula("~A & (B | C)").unwrap();
//! assert_eq!(formula.to_string(), "~A & (B | C)");
//!
//! assert!(parse::formula("A &").is_err());
//! ```

use crate::{
    misc::log::targets,
    structures::{atom, formula::Formula},
    types::err::ParseError,
};

/// Parses `text` as a formula.
pub fn formula(text: &str) -> Result<Formula, ParseError> {
    let mut parser = Parser::new(text);

    parser.skip_whitespace();
    if parser.peek().is_none() {
        return Err(ParseError::Empty);
    }

    let formula = parser.implication()?;

    parser.skip_whitespace();
    if parser.peek().is_some() {
        return Err(ParseError::TrailingInput(parser.position));
    }

    log::trace!(target: targets::PARSE, "parsed: {formula}");
    Ok(formula)
}

/// A recursive-descent parser over the characters of a statement.
struct Parser {
    characters: Vec<char>,
    position: usize,
}

impl Parser {
    fn new(text: &str) -> Self {
        Parser {
            characters: text.chars().collect(),
            position: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.characters.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|character| character.is_whitespace()) {
            self.advance();
        }
    }

    /// `implication := disjunction ('>>' implication)?`
    fn implication(&mut self) -> Result<Formula, ParseError> {
        let antecedent = self.disjunction()?;

        self.skip_whitespace();
        if self.peek() == Some('>') {
            self.advance();
            match self.peek() {
                Some('>') => self.advance(),
                Some(character) => {
                    return Err(ParseError::UnexpectedCharacter(self.position, character))
                }
                None => return Err(ParseError::UnexpectedEnd),
            }

            let consequent = self.implication()?;
            return Ok(Formula::implies(antecedent, consequent));
        }

        Ok(antecedent)
    }

    /// `disjunction := conjunction ('|' conjunction)*`
    fn disjunction(&mut self) -> Result<Formula, ParseError> {
        let mut formula = self.conjunction()?;

        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('|') => {
                    self.advance();
                    formula = Formula::or(formula, self.conjunction()?);
                }
                _ => return Ok(formula),
            }
        }
    }

    /// `conjunction := negation ('&' negation)*`
    fn conjunction(&mut self) -> Result<Formula, ParseError> {
        let mut formula = self.negation()?;

        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('&') => {
                    self.advance();
                    formula = Formula::and(formula, self.negation()?);
                }
                _ => return Ok(formula),
            }
        }
    }

    /// `negation := '~' negation | primary`
    fn negation(&mut self) -> Result<Formula, ParseError> {
        self.skip_whitespace();
        match self.peek() {
            Some('~') => {
                self.advance();
                Ok(Formula::not(self.negation()?))
            }
            _ => self.primary(),
        }
    }

    /// `primary := atom | '(' implication ')'`
    fn primary(&mut self) -> Result<Formula, ParseError> {
        self.skip_whitespace();
        match self.peek() {
            Some('(') => {
                self.advance();
                let formula = self.implication()?;

                self.skip_whitespace();
                match self.peek() {
                    Some(')') => {
                        self.advance();
                        Ok(formula)
                    }
                    Some(character) => {
                        Err(ParseError::UnexpectedCharacter(self.position, character))
                    }
                    None => Err(ParseError::UnexpectedEnd),
                }
            }

            Some(character) if atom::is_atom_symbol(character) => {
                self.advance();
                Ok(Formula::Atom(character))
            }

            Some(character) => Err(ParseError::UnexpectedCharacter(self.position, character)),

            None => Err(ParseError::UnexpectedEnd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conjunction_binds_tighter_than_disjunction() {
        let parsed = formula("A & B | C").unwrap();
        assert_eq!(
            parsed,
            Formula::or(
                Formula::and(Formula::Atom('A'), Formula::Atom('B')),
                Formula::Atom('C'),
            )
        );
    }

    #[test]
    fn implication_is_right_associative() {
        let parsed = formula("A >> B >> C").unwrap();
        assert_eq!(
            parsed,
            Formula::implies(
                Formula::Atom('A'),
                Formula::implies(Formula::Atom('B'), Formula::Atom('C')),
            )
        );
    }

    #[test]
    fn parentheses_override_binding() {
        let parsed = formula("(A | B) & C").unwrap();
        assert_eq!(
            parsed,
            Formula::and(
                Formula::or(Formula::Atom('A'), Formula::Atom('B')),
                Formula::Atom('C'),
            )
        );
    }

    #[test]
    fn negation_markers_stack() {
        let parsed = formula("~~A").unwrap();
        assert_eq!(parsed, Formula::not(Formula::not(Formula::Atom('A'))));
    }

    #[test]
    fn errors_note_positions() {
        assert_eq!(formula(""), Err(ParseError::Empty));
        assert_eq!(formula("   "), Err(ParseError::Empty));
        assert_eq!(formula("A &"), Err(ParseError::UnexpectedEnd));
        assert_eq!(formula("A >"), Err(ParseError::UnexpectedEnd));
        assert_eq!(formula("A > B"), Err(ParseError::UnexpectedCharacter(3, ' ')));
        assert_eq!(formula("A B"), Err(ParseError::TrailingInput(2)));
        assert_eq!(formula("(A"), Err(ParseError::UnexpectedEnd));
        assert_eq!(formula("&"), Err(ParseError::UnexpectedCharacter(0, '&')));
    }
}
