//! Mapping of submitted form actions onto container operations.
//!
//! Each request performs at most one operation: the stored sequence is
//! hydrated into a container, the parsed action is applied, and the
//! container is read back out for storage together with a notice for the user.

mod deque;
mod queue;

use linkline::linked::Rehydrate;
use serde::Deserialize;

pub use deque::DequeAction;
pub use queue::QueueAction;

/// Fields posted by the operation forms.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OperationForm {
    pub action: Option<String>,
    pub item: Option<String>,
}

impl OperationForm {
    /// The submitted item, if it is present and non-empty.
    #[must_use]
    pub fn item(&self) -> Option<&str> {
        self.item.as_deref().filter(|item| !item.is_empty())
    }
}

/// An operation a page form can request on its container.
pub trait Action: Sized {
    type Container: Rehydrate<Item = String>;

    /// Parses the submitted form. Unknown actions, and inserts without an item, yield `None`.
    fn parse(form: &OperationForm) -> Option<Self>;

    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Performs the operation and returns the notice shown to the user.
    fn apply(self, container: &mut Self::Container) -> String;
}

/// Result of one request against a stored sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub items: Vec<String>,
    pub message: Option<String>,
}

/// Hydrates `stored`, applies `action` if there is one, and snapshots the result.
///
/// Without an action the stored sequence comes back unchanged and there is no notice.
pub fn perform<A: Action>(stored: Vec<String>, action: Option<A>) -> Outcome {
    let Some(action) = action else {
        return Outcome {
            items: stored,
            message: None,
        };
    };

    let mut container = <A::Container as Rehydrate>::hydrate(stored);
    let message = action.apply(&mut container);
    Outcome {
        items: container.snapshot(),
        message: Some(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| (*item).to_string()).collect()
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("apple"), Some("apple"))]
    #[case(Some(" "), Some(" "))]
    fn form_item_requires_content(#[case] item: Option<&str>, #[case] expected: Option<&str>) {
        let form = OperationForm {
            action: Some("enqueue".to_string()),
            item: item.map(str::to_string),
        };

        assert_eq!(form.item(), expected);
    }

    #[rstest]
    fn perform_without_action_keeps_sequence() {
        let outcome = perform::<QueueAction>(strings(&["a", "b"]), None);

        assert_eq!(outcome.items, strings(&["a", "b"]));
        assert_eq!(outcome.message, None);
    }

    #[rstest]
    fn perform_queue_round_trip() {
        let outcome = perform(strings(&["a", "b"]), Some(QueueAction::Dequeue));

        assert_eq!(outcome.items, strings(&["b"]));
        assert!(outcome.message.unwrap().contains("'a'"));
    }

    #[rstest]
    fn perform_deque_replays_at_rear() {
        let outcome = perform(
            strings(&["a", "b"]),
            Some(DequeAction::InsertFront("z".to_string())),
        );

        assert_eq!(outcome.items, strings(&["z", "a", "b"]));
    }
}
