use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    /// Downloading the attachment from Discord's CDN failed.
    #[error("Failed to download attachment from {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The object store rejected the upload.
    #[error("Failed to upload object {key}: {reason}")]
    Upload { key: String, reason: String },

    /// The object store rejected the deletion.
    #[error("Failed to delete object {key}: {reason}")]
    Delete { key: String, reason: String },
}
