mod header;
mod status;

pub use header::*;
pub use status::*;
