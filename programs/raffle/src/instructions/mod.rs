pub mod check_upkeep;
pub mod close_round;
pub mod enter;
pub mod initialize;
pub mod recover_round;
pub mod settle;

pub use check_upkeep::*;
pub use close_round::*;
pub use enter::*;
pub use initialize::*;
pub use recover_round::*;
pub use settle::*;
