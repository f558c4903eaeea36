mod action;
mod display;
mod input;
mod message;
mod state;

pub use action::Action;
pub use display::{Display, DisplayLine, Tone};
pub use message::{Effect, Msg};
pub use state::{AppState, Phase, Selection};
