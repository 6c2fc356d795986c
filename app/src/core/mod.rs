mod catalog;
mod dtos;
mod results;
mod rules;

pub use catalog::*;
pub use dtos::*;
pub use results::*;
pub use rules::*;
