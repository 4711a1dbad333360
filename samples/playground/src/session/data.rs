use std::fmt;

/// The two structures a session keeps state for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Structure {
    Queue,
    Deque,
}

impl Structure {
    /// Route path of the structure's page.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Queue => "/queue",
            Self::Deque => "/deque",
        }
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Queue => formatter.write_str("queue"),
            Self::Deque => formatter.write_str("deque"),
        }
    }
}

/// Everything stored for one session.
///
/// Item sequences are kept front to rear. Notices are flash messages: they
/// are set by a mutation and taken by the next page view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionData {
    pub queue_data: Vec<String>,
    pub deque_data: Vec<String>,
    pub queue_message: Option<String>,
    pub deque_message: Option<String>,
}

impl SessionData {
    #[must_use]
    pub fn items(&self, structure: Structure) -> &[String] {
        match structure {
            Structure::Queue => &self.queue_data,
            Structure::Deque => &self.deque_data,
        }
    }

    pub fn replace_items(&mut self, structure: Structure, items: Vec<String>) {
        match structure {
            Structure::Queue => self.queue_data = items,
            Structure::Deque => self.deque_data = items,
        }
    }

    /// Moves the stored items out, leaving an empty sequence behind.
    pub fn take_items(&mut self, structure: Structure) -> Vec<String> {
        match structure {
            Structure::Queue => std::mem::take(&mut self.queue_data),
            Structure::Deque => std::mem::take(&mut self.deque_data),
        }
    }

    #[must_use]
    pub const fn message(&self, structure: Structure) -> Option<&String> {
        match structure {
            Structure::Queue => self.queue_message.as_ref(),
            Structure::Deque => self.deque_message.as_ref(),
        }
    }

    /// Overwrites the notice; `None` clears any notice left unread.
    pub fn set_message(&mut self, structure: Structure, message: Option<String>) {
        match structure {
            Structure::Queue => self.queue_message = message,
            Structure::Deque => self.deque_message = message,
        }
    }

    pub fn take_message(&mut self, structure: Structure) -> Option<String> {
        match structure {
            Structure::Queue => self.queue_message.take(),
            Structure::Deque => self.deque_message.take(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Structure::Queue)]
    #[case(Structure::Deque)]
    fn structures_do_not_share_items(#[case] structure: Structure) {
        let mut data = SessionData::default();
        data.replace_items(structure, vec!["a".to_string()]);

        let other = match structure {
            Structure::Queue => Structure::Deque,
            Structure::Deque => Structure::Queue,
        };
        assert_eq!(data.items(structure), ["a".to_string()]);
        assert!(data.items(other).is_empty());
    }

    #[rstest]
    fn take_items_leaves_empty_sequence() {
        let mut data = SessionData {
            deque_data: vec!["x".to_string(), "y".to_string()],
            ..SessionData::default()
        };

        assert_eq!(data.take_items(Structure::Deque), vec!["x", "y"]);
        assert!(data.deque_data.is_empty());
    }

    #[rstest]
    fn message_is_taken_once() {
        let mut data = SessionData::default();
        data.set_message(Structure::Queue, Some("hello".to_string()));

        assert_eq!(data.message(Structure::Queue).map(String::as_str), Some("hello"));
        assert_eq!(data.take_message(Structure::Queue).as_deref(), Some("hello"));
        assert_eq!(data.take_message(Structure::Queue), None);
        assert_eq!(data.message(Structure::Deque), None);
    }

    #[rstest]
    fn structure_paths_and_names() {
        assert_eq!(Structure::Queue.path(), "/queue");
        assert_eq!(Structure::Deque.path(), "/deque");
        assert_eq!(Structure::Deque.to_string(), "deque");
    }
}
