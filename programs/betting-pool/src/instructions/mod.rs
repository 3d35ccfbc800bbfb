pub mod cancel;
pub mod claim;
pub mod initialize;
pub mod lock;
pub mod open;
pub mod place_bet;
pub mod settle;

pub use cancel::*;
pub use claim::*;
pub use initialize::*;
pub use lock::*;
pub use open::*;
pub use place_bet::*;
pub use settle::*;
