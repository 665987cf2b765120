pub mod context;
pub mod entry;
pub mod prompts;
pub mod sweep;

pub use entry::{Args, run};
