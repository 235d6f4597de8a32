mod engine;
mod renderer;
mod syntaxes;
mod themes;

pub use engine::*;
pub use renderer::*;
pub use syntaxes::*;
pub use themes::*;
