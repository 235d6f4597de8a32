mod codec;
mod compression;
mod diff_markers;
mod location;
pub mod schema;

pub use codec::*;
pub use compression::*;
pub use diff_markers::*;
pub use location::*;
