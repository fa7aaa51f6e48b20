/// State of one in-flight download.
///
/// A session is created per `get_contents`/`copy` call and dropped when the
/// call returns. It is owned by that call alone, so parallel downloads never
/// share counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadSession {
    pub(crate) origin_url:        String,
    pub(crate) file_url:          String,
    pub(crate) bytes_max:         u64,
    pub(crate) bytes_transferred: u64,
    pub(crate) last_progress:     u8,
    pub(crate) last_reported:     Option<u8>,
    pub(crate) first_call:        bool,
    pub(crate) progress_enabled:  bool,
    pub(crate) credentials_sent:  bool,
}

impl DownloadSession {
    pub fn new(origin_url: impl Into<String>, file_url: impl Into<String>) -> Self {
        Self {
            origin_url:        origin_url.into(),
            file_url:          file_url.into(),
            bytes_max:         0,
            bytes_transferred: 0,
            last_progress:     0,
            last_reported:     None,
            first_call:        true,
            progress_enabled:  false,
            credentials_sent:  false,
        }
    }

    #[must_use]
    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.progress_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_bytes_max(mut self, bytes_max: u64) -> Self {
        self.bytes_max = bytes_max;
        self
    }

    #[must_use]
    pub fn with_first_call(mut self, first_call: bool) -> Self {
        self.first_call = first_call;
        self
    }

    /// Authority credentials are looked up under.
    pub fn origin_url(&self) -> &str { &self.origin_url }

    pub fn file_url(&self) -> &str { &self.file_url }

    /// Expected total size; 0 while unknown.
    pub fn bytes_max(&self) -> u64 { self.bytes_max }

    pub fn bytes_transferred(&self) -> u64 { self.bytes_transferred }

    pub fn last_progress(&self) -> u8 { self.last_progress }

    pub fn last_reported(&self) -> Option<u8> { self.last_reported }

    pub fn first_call(&self) -> bool { self.first_call }

    pub fn progress_enabled(&self) -> bool { self.progress_enabled }

    pub fn credentials_sent(&self) -> bool { self.credentials_sent }

    /// Reset the byte counter before a request is (re)issued.
    pub(crate) fn begin_attempt(&mut self, credentials_sent: bool) {
        self.bytes_transferred = 0;
        self.credentials_sent = credentials_sent;
    }
}
