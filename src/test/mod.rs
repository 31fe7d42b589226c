
pub use nets::*;
