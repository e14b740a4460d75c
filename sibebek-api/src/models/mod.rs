mod channel;
mod connection;
mod reading;

pub use channel::*;
pub use connection::*;
pub use reading::*;
