//! Heuristic gender inference from a member's name
//!
//! The directory has no gender column. This guesses from honorifics and
//! common given names, so the result is an approximation and many names
//! land in `Unknown`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl Gender {
    pub const ORDER: [Gender; 3] = [Self::Male, Self::Female, Self::Unknown];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Tokens are matched against the lowercased name padded with a space on
// each side, so a leading space anchors a token to the start of a word.
// Female tokens are checked first.
const FEMALE_TOKENS: &[&str] = &[
    " hj.", " hj ", " dra.", " ny.", " ibu ", " siti ", " sri ", " dewi ", " nur ", " nurul ",
    " ratu ", " putri ", " rahmawati", " wati ",
];

const MALE_TOKENS: &[&str] = &[
    " h.", " drs.", " bapak ", " muhammad", " mohammad", " mohamad", " moh.", " m. ", " ahmad",
    " achmad", " abdul", " andi ", " teuku ", " haji ",
];

/// Guess a gender category from a name
pub fn infer_gender(name: &str) -> Gender {
    let padded = format!(" {} ", name.to_lowercase());

    if FEMALE_TOKENS.iter().any(|t| padded.contains(t)) {
        Gender::Female
    } else if MALE_TOKENS.iter().any(|t| padded.contains(t)) {
        Gender::Male
    } else {
        Gender::Unknown
    }
}
