//! CLI command handlers. Each command is in its own file.

mod completions;
mod exercises;
mod files;
mod logout;
mod submit;

pub use completions::run_completions;
pub use exercises::run_exercises;
pub use files::run_files;
pub use logout::run_logout;
pub use submit::run_submit;
