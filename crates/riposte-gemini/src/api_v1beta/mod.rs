mod common;
mod generate_content;
mod schema;

pub use common::*;
pub use generate_content::*;
