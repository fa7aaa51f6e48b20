use std::path::{Path, PathBuf};

use bytes::{Bytes, BytesMut};
use tempfile::TempPath;
use tokio::io::{AsyncSeekExt, AsyncWriteExt};

use crate::error::{Error, Result};

/// Where the body of a download goes.
pub(crate) enum Sink {
    Memory(BytesMut),
    /// A temporary file next to `destination`, removed again unless committed.
    File {
        file:        tokio::fs::File,
        staging:     TempPath,
        destination: PathBuf,
    },
}

impl Sink {
    pub(crate) fn memory() -> Self { Sink::Memory(BytesMut::new()) }

    /// Stage a file in the destination's directory so the final rename stays
    /// on one filesystem.
    pub(crate) fn staged_file(destination: &Path) -> Result<Self> {
        let dir = match destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let staged = tempfile::Builder::new()
            .prefix(".remotefs-")
            .suffix(".part")
            .tempfile_in(dir)
            .map_err(|e| Error::write(dir, e))?;
        let (file, staging) = staged.into_parts();

        Ok(Sink::File {
            file: tokio::fs::File::from_std(file),
            staging,
            destination: destination.to_path_buf(),
        })
    }

    pub(crate) async fn write(&mut self, chunk: &[u8]) -> Result<()> {
        match self {
            Sink::Memory(buf) => {
                buf.extend_from_slice(chunk);
                Ok(())
            }
            Sink::File { file, staging, .. } => file
                .write_all(chunk)
                .await
                .map_err(|e| Error::write(staging.to_path_buf(), e)),
        }
    }

    /// Drop anything written by an abandoned attempt.
    pub(crate) async fn reset(&mut self) -> Result<()> {
        match self {
            Sink::Memory(buf) => {
                buf.clear();
                Ok(())
            }
            Sink::File { file, staging, .. } => {
                file.set_len(0)
                    .await
                    .map_err(|e| Error::write(staging.to_path_buf(), e))?;
                file.rewind()
                    .await
                    .map_err(|e| Error::write(staging.to_path_buf(), e))?;
                Ok(())
            }
        }
    }

    pub(crate) fn into_bytes(self) -> Bytes {
        match self {
            Sink::Memory(buf) => buf.freeze(),
            Sink::File { .. } => Bytes::new(),
        }
    }

    /// Flush the staged file and move it onto the destination.
    pub(crate) async fn commit(self) -> Result<()> {
        match self {
            Sink::Memory(_) => Ok(()),
            Sink::File {
                mut file,
                staging,
                destination,
            } => {
                file.flush()
                    .await
                    .map_err(|e| Error::write(staging.to_path_buf(), e))?;
                file.sync_all()
                    .await
                    .map_err(|e| Error::write(staging.to_path_buf(), e))?;
                drop(file);

                staging
                    .persist(&destination)
                    .map_err(|e| Error::write(destination.clone(), e.error))
            }
        }
    }
}
