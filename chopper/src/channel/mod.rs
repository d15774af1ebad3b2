// Metrea LLC Intellectual Property
// Originally developed by Raw Socket Labs LLC

mod cycle;
mod frequency;
mod parse;

pub use cycle::*;
pub use frequency::*;
pub use parse::*;
