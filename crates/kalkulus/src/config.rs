//! Parser configuration types.

/// Characters admitted in literal names.
///
/// The delimiters `!`, `,` and `;` are never part of a name, whatever the
/// alphabet says.
#[derive(Debug, Clone, Copy, Default)]
pub enum Alphabet {
    /// ASCII letters, digits and underscore (the reference dialect)
    #[default]
    Identifier,
    /// ASCII letters only
    Letters,
    /// Any character accepted by the predicate
    Custom(fn(char) -> bool),
}

impl Alphabet {
    /// Check whether `c` may appear in a literal name
    pub fn admits(&self, c: char) -> bool {
        if matches!(c, '!' | ',' | ';') {
            return false;
        }
        match self {
            Alphabet::Identifier => c.is_ascii_alphanumeric() || c == '_',
            Alphabet::Letters => c.is_ascii_alphabetic(),
            Alphabet::Custom(admits) => admits(c),
        }
    }
}

/// Configuration for the clause set parser
#[derive(Debug, Clone, Copy, Default)]
pub struct ParserConfig {
    pub alphabet: Alphabet,
}

impl ParserConfig {
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        ParserConfig { alphabet }
    }
}
