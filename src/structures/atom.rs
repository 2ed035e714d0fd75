//! Atoms, the indivisible propositional symbols of a formula.
//!
//! Atoms are single alphabetic characters.
//! This keeps the surface syntax of a belief a short string, and allows the rendering of a belief to be scanned for atoms character by character (see [crate::graph]).

/// An atom, aka. a propositional variable.
pub type Atom = char;

/// Whether a character read from the rendering of a formula is an atom symbol.
pub fn is_atom_symbol(character: char) -> bool {
    character.is_alphabetic()
}
