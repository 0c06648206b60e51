pub mod health;
pub mod message;

pub use health::*;
pub use message::*;
