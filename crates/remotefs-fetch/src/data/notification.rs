/// Events a transport reports while a request is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Total size announced by the server, e.g. through `Content-Length`.
    FileSize(u64),

    /// Bytes received so far, with the size known at that point (0 if unknown).
    Progress { transferred: u64, max: u64 },

    /// The request failed with a status or transport code.
    Failure { code: u16, message: String },
}
