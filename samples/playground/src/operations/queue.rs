use linkline::linked::LinkedQueue;

use super::{Action, OperationForm};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueAction {
    Enqueue(String),
    Dequeue,
}

impl Action for QueueAction {
    type Container = LinkedQueue<String>;

    fn parse(form: &OperationForm) -> Option<Self> {
        match form.action.as_deref()? {
            "enqueue" => form.item().map(|item| Self::Enqueue(item.to_string())),
            "dequeue" => Some(Self::Dequeue),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Enqueue(_) => "enqueue",
            Self::Dequeue => "dequeue",
        }
    }

    fn apply(self, queue: &mut LinkedQueue<String>) -> String {
        match self {
            Self::Enqueue(item) => {
                let message = format!("✅ ENQUEUED: '{item}' to the rear (tail).");
                queue.enqueue(item);
                message
            }
            Self::Dequeue => match queue.dequeue() {
                Some(item) => format!("❌ DEQUEUED: '{item}' from the front (head)."),
                None => "🛑 The Queue is empty! Cannot dequeue.".to_string(),
            },
        }
    }
}
