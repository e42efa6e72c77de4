pub mod body;
pub mod form;
pub mod holes_card;
pub mod layouts_card;
pub mod stats_card;
pub mod utils;

pub use body::*;
pub use form::*;
pub use holes_card::*;
pub use layouts_card::*;
pub use stats_card::*;
pub use utils::*;
