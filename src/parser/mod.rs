pub mod directory;
pub mod parser;
pub mod types;

pub use directory::*;
pub use parser::*;
pub use types::*;
