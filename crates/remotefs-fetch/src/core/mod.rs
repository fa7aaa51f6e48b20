//! Pure decisions over a download session.
//!
//! Nothing here performs network or disk I/O. The IO collaborator is only asked
//! whether it is interactive and handed progress lines.

mod classify;
mod notify;
mod progress;

pub use classify::classify_failure;
pub use notify::handle_notification;
pub use progress::{PROGRESS_STEP, percent, progress_line, should_report};
