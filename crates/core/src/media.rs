use std::path::{Path, PathBuf};

use crate::error::SubmissionError;

const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Extension to media type table. Only the `video/` entries are accepted for
/// submission; the rest exist so rejections can name what was picked.
const MEDIA_TYPES: &[(&str, &str)] = &[
    ("mp4", "video/mp4"),
    ("m4v", "video/x-m4v"),
    ("webm", "video/webm"),
    ("mkv", "video/x-matroska"),
    ("mov", "video/quicktime"),
    ("avi", "video/x-msvideo"),
    ("wmv", "video/x-ms-wmv"),
    ("flv", "video/x-flv"),
    ("mpg", "video/mpeg"),
    ("mpeg", "video/mpeg"),
    ("ogv", "video/ogg"),
    ("3gp", "video/3gpp"),
    ("ts", "video/mp2t"),
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("ogg", "audio/ogg"),
    ("m4a", "audio/mp4"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("pdf", "application/pdf"),
    ("txt", "text/plain"),
];

/// Media type guessed from the file extension (case-insensitive).
pub fn media_type_for(path: &Path) -> &'static str {
    let Some(ext) = path.extension() else {
        return FALLBACK_MEDIA_TYPE;
    };
    let ext = ext.to_string_lossy().to_lowercase();

    MEDIA_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, media_type)| *media_type)
        .unwrap_or(FALLBACK_MEDIA_TYPE)
}

pub fn is_video_media_type(media_type: &str) -> bool {
    media_type.starts_with("video")
}

/// Extensions to offer in the native file chooser filter.
pub fn video_extensions() -> Vec<&'static str> {
    MEDIA_TYPES
        .iter()
        .filter(|(_, media_type)| is_video_media_type(media_type))
        .map(|(ext, _)| *ext)
        .collect()
}

/// A local file accepted for submission. Contents are never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFile {
    path: PathBuf,
    media_type: String,
    size_bytes: u64,
}

impl VideoFile {
    /// Checks media type and size limit for a file whose size is already known.
    pub fn inspect(
        path: impl Into<PathBuf>,
        size_bytes: u64,
        limit_bytes: u64,
    ) -> Result<Self, SubmissionError> {
        let path = path.into();
        let media_type = media_type_for(&path);

        if !is_video_media_type(media_type) {
            return Err(SubmissionError::UnsupportedMediaType {
                path,
                media_type: media_type.to_string(),
            });
        }

        if size_bytes > limit_bytes {
            return Err(SubmissionError::UploadTooLarge {
                path,
                size_bytes,
                limit_bytes,
            });
        }

        Ok(Self {
            path,
            media_type: media_type.to_string(),
            size_bytes,
        })
    }

    /// Reads the file size from disk, then applies [`VideoFile::inspect`].
    pub async fn open(path: impl Into<PathBuf>, limit_bytes: u64) -> Result<Self, SubmissionError> {
        let path = path.into();
        let metadata =
            tokio::fs::metadata(&path)
                .await
                .map_err(|e| SubmissionError::FileUnreadable {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;

        Self::inspect(path, metadata.len(), limit_bytes)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
