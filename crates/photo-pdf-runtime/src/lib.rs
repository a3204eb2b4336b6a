use std::path::PathBuf;

mod handlers;
mod status;
mod worker;

pub use status::{LogEntry, SessionLog};
pub use worker::worker_task;

// Re-export types from the library crate
pub use photo_pdf::{DocumentOptions, GeneratedDocument, ImageRecord, PhotoId};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum PhotoCommand {
    /// Add image files; non-image files are skipped
    AddFiles {
        paths: Vec<PathBuf>,
    },
    AddBytes {
        name: String,
        data: Vec<u8>,
    },
    Remove {
        id: PhotoId,
    },
    Clear,
    SetOptions {
        options: DocumentOptions,
    },
    Generate,
    Save {
        document: GeneratedDocument,
        target: PathBuf,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum PhotoUpdate {
    Progress {
        operation: String,
        current: usize,
        total: usize,
    },
    /// The collection changed; carries the full current list in page order
    PhotosChanged {
        photos: Vec<PhotoSummary>,
    },
    OptionsChanged {
        options: DocumentOptions,
    },
    Generated {
        document: GeneratedDocument,
    },
    Saved {
        path: PathBuf,
    },
    Error {
        message: String,
    },
}

/// What a front end needs to show one photo in its grid
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoSummary {
    pub id: PhotoId,
    pub name: String,
    /// Human-readable size, e.g. "1.5 MB"
    pub size: String,
    pub dimensions: Option<(u32, u32)>,
}

impl From<&ImageRecord> for PhotoSummary {
    fn from(record: &ImageRecord) -> Self {
        Self {
            id: record.id(),
            name: record.name().to_string(),
            size: photo_pdf::format_file_size(record.size_bytes()),
            dimensions: record.dimensions(),
        }
    }
}
