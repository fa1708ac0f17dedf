use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Adjective,
    SoundsLike,
    WordsAfter,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 3] = [
        ServiceKind::Adjective,
        ServiceKind::SoundsLike,
        ServiceKind::WordsAfter,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ServiceKind::Adjective => "adjective",
            ServiceKind::SoundsLike => "sounds_like",
            ServiceKind::WordsAfter => "words_after",
        }
    }
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ServiceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "adjective" | "adjectives" => Ok(ServiceKind::Adjective),
            "sounds" | "sounds_like" | "soundslike" => Ok(ServiceKind::SoundsLike),
            "wordsafter" | "words_after" => Ok(ServiceKind::WordsAfter),
            other => Err(format!(
                "Unknown service '{}', expected one of: adjective, sounds, wordsafter",
                other
            )),
        }
    }
}
