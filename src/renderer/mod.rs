pub mod components;
pub mod ordinal;
pub mod renderer;
pub mod renders;
pub mod traits;

pub use components::*;
pub use ordinal::*;
pub use renderer::*;
pub use traits::*;
