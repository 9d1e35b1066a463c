pub mod markup;
pub mod utils;

pub use markup::{attribute, reformat_markup};
pub use utils::truncate;
