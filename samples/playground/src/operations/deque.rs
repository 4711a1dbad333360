use linkline::linked::LinkedDeque;

use super::{Action, OperationForm};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DequeAction {
    InsertFront(String),
    InsertRear(String),
    DeleteFront,
    DeleteRear,
}

const EMPTY_NOTICE: &str = "🛑 Deque is empty!";

impl Action for DequeAction {
    type Container = LinkedDeque<String>;

    fn parse(form: &OperationForm) -> Option<Self> {
        match form.action.as_deref()? {
            "insert_front" => form.item().map(|item| Self::InsertFront(item.to_string())),
            "insert_rear" => form.item().map(|item| Self::InsertRear(item.to_string())),
            "delete_front" => Some(Self::DeleteFront),
            "delete_rear" => Some(Self::DeleteRear),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::InsertFront(_) => "insert_front",
            Self::InsertRear(_) => "insert_rear",
            Self::DeleteFront => "delete_front",
            Self::DeleteRear => "delete_rear",
        }
    }

    fn apply(self, deque: &mut LinkedDeque<String>) -> String {
        match self {
            Self::InsertFront(item) => {
                let message = format!("✅ INSERTED: '{item}' to the front.");
                deque.insert_front(item);
                message
            }
            Self::InsertRear(item) => {
                let message = format!("✅ INSERTED: '{item}' to the rear.");
                deque.insert_rear(item);
                message
            }
            Self::DeleteFront => deque.delete_front().map_or_else(
                || EMPTY_NOTICE.to_string(),
                |item| format!("❌ DELETED: '{item}' from the front."),
            ),
            Self::DeleteRear => deque.delete_rear().map_or_else(
                || EMPTY_NOTICE.to_string(),
                |item| format!("❌ DELETED: '{item}' from the rear."),
            ),
        }
    }
}
