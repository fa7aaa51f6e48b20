/// Minimum advance, in percentage points, between two progress lines.
pub const PROGRESS_STEP: u8 = 5;

/// Whole percentage of `max` covered by `transferred`, rounded down.
///
/// `None` while the total size is unknown. Transports that over-report are
/// clamped to 100.
///
/// # Examples
///
/// ```
/// use remotefs_fetch::core::percent;
///
/// assert_eq!(percent(10, 20), Some(50));
/// assert_eq!(percent(1, 3), Some(33));
/// assert_eq!(percent(10, 0), None);
/// ```
pub fn percent(transferred: u64, max: u64) -> Option<u8> {
    if max == 0 {
        return None;
    }
    let pct = (u128::from(transferred) * 100 / u128::from(max)).min(100);
    Some(pct as u8)
}

/// Whether `progress` is worth a new line given what was last shown.
pub fn should_report(last_reported: Option<u8>, progress: u8) -> bool {
    match last_reported {
        None => true,
        Some(last) => {
            progress >= last.saturating_add(PROGRESS_STEP) || (progress == 100 && last < 100)
        }
    }
}

pub fn progress_line(progress: u8) -> String { format!("    Downloading: {progress}%") }
