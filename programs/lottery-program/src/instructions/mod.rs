pub mod buy_ticket;
pub mod cancel_withdrawal;
pub mod create_lottery;
pub mod execute_withdrawal;
pub mod init_config;
pub mod request_randomness;
pub mod request_withdrawal;
pub mod schedule_draw;
pub mod settle;
pub mod submit_vrf;
pub mod update_fee;

pub use buy_ticket::*;
pub use cancel_withdrawal::*;
pub use create_lottery::*;
pub use execute_withdrawal::*;
pub use init_config::*;
pub use request_randomness::*;
pub use request_withdrawal::*;
pub use schedule_draw::*;
pub use settle::*;
pub use submit_vrf::*;
pub use update_fee::*;
