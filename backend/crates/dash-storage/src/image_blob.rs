use tokio::fs::File;
use tokio_util::io::ReaderStream;

/// An opened image, ready to be streamed.
///
/// Owns the file handle: dropping the blob, or the stream made from it,
/// closes the file.
#[derive(Debug)]
pub struct ImageBlob {
    file: File,
    len: u64,
}

impl ImageBlob {
    pub fn new(file: File, len: u64) -> Self {
        Self { file, len }
    }

    /// Size in bytes at the time the file was opened
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn into_stream(self) -> ReaderStream<File> {
        ReaderStream::new(self.file)
    }
}
