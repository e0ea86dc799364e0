mod term_string;
mod unit;

pub use term_string::{PoolString, PoolWString, TermString};
#[cfg(feature = "std")]
pub use term_string::{GlobalString, GlobalWString};
pub use unit::Unit;
