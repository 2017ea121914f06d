mod character_card;
mod counter;

pub use character_card::*;
pub use counter::*;
