mod event;
mod handler;
mod worker;

pub use event::{AppEvent, EventHandler};
pub use handler::handle_key;
pub use worker::Worker;
