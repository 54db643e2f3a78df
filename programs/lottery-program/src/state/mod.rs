pub use config::*;
pub use lottery::*;
pub use ticket::*;
pub use treasury::*;

pub mod config;
pub mod lottery;
pub mod ticket;
pub mod treasury;
