mod prompt;
mod reply;

pub use prompt::*;
pub use reply::*;
