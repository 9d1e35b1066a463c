pub mod builder;

pub use builder::{JqlFilter, year_windows};
