use crate::core::{classify_failure, percent, progress_line, should_report};
use crate::data::{DownloadSession, Notification};
use crate::error::Result;
use crate::io::Io;

/// Apply one transport notification to `session`.
///
/// Size and progress events update the counters and, when progress is
/// enabled, may send one line to `io`. A failure event always yields `Err`.
pub fn handle_notification<I: Io + ?Sized>(
    session: &mut DownloadSession,
    notification: Notification,
    io: &I,
) -> Result<()> {
    match notification {
        Notification::FileSize(size) => {
            if size > session.bytes_max {
                session.bytes_max = size;
            }
            Ok(())
        }
        Notification::Progress { transferred, max } => {
            if max > session.bytes_max {
                session.bytes_max = max;
            }
            session.bytes_transferred = transferred;

            if let Some(pct) = percent(transferred, session.bytes_max) {
                session.last_progress = session.last_progress.max(pct);
                if session.progress_enabled && should_report(session.last_reported, session.last_progress) {
                    session.last_reported = Some(session.last_progress);
                    io.overwrite(&progress_line(session.last_progress));
                }
            }
            Ok(())
        }
        Notification::Failure { code, message } => {
            let err = classify_failure(session, code, &message, io);
            tracing::debug!(url = %session.file_url, code, "{err}");
            Err(err)
        }
    }
}
