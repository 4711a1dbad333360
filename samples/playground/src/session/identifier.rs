use std::fmt;

use uuid::Uuid;

/// Random identifier of one visitor's session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a cookie value; anything that is not a UUID is rejected.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value.trim()).ok().map(Self)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn generated_ids_are_unique() {
        assert_ne!(SessionId::generate(), SessionId::generate());
    }

    #[rstest]
    fn display_round_trips_through_parse() {
        let id = SessionId::generate();

        assert_eq!(SessionId::parse(&id.to_string()), Some(id));
    }

    #[rstest]
    #[case("")]
    #[case("not-a-uuid")]
    #[case("12345")]
    fn parse_rejects_garbage(#[case] value: &str) {
        assert_eq!(SessionId::parse(value), None);
    }
}
