pub mod output;
pub mod progress;

pub use output::{OutputFormatter, OutputMode};
pub use progress::{finish_progress_with_summary, ProgressManager};
