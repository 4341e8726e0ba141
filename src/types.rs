//! Shared types used across the crate: the positional `Field` a token maps
//! to, and the conversion `Verb` of a printf-style template.

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Field {
    Start,
    Step,
    End,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Field::Start => "start",
            Field::Step => "step",
            Field::End => "end",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Verb {
    /// Shortest round-trip decimal (`%v`)
    Generic,
    Fixed,
    Exponent { upper: bool },
    General { upper: bool },
}

impl Verb {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'v' => Some(Verb::Generic),
            'f' | 'F' => Some(Verb::Fixed),
            'e' => Some(Verb::Exponent { upper: false }),
            'E' => Some(Verb::Exponent { upper: true }),
            'g' => Some(Verb::General { upper: false }),
            'G' => Some(Verb::General { upper: true }),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Verb::Generic => 'v',
            Verb::Fixed => 'f',
            Verb::Exponent { upper: false } => 'e',
            Verb::Exponent { upper: true } => 'E',
            Verb::General { upper: false } => 'g',
            Verb::General { upper: true } => 'G',
        }
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
