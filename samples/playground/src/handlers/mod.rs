pub mod health;
pub mod pages;
pub mod structures;
mod visitor;

pub use health::health_check;
pub use pages::{index, profiles};
pub use structures::{deque_page, deque_submit, queue_page, queue_submit};
