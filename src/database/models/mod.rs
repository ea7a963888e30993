pub mod chat;
pub mod raffle;
pub mod tracked_message;

pub use chat::*;
pub use raffle::*;
pub use tracked_message::*;
