//! Conversion session
//!
//! A [`Session`] owns the photo collection and the current document options.
//! Front ends keep one session and pass it by reference to their event
//! handlers.

use crate::collection::{
    ImageRecord, PhotoCollection, PhotoId, is_image_media_type, media_type_for_path,
};
use crate::compose::{GeneratedDocument, compose_with_progress};
use crate::options::DocumentOptions;
use crate::types::*;
use std::path::Path;

#[derive(Debug, Default)]
pub struct Session {
    photos: PhotoCollection,
    options: DocumentOptions,
}

impl Session {
    pub fn new(options: DocumentOptions) -> Self {
        Self {
            photos: PhotoCollection::new(),
            options,
        }
    }

    pub fn photos(&self) -> &PhotoCollection {
        &self.photos
    }

    pub fn options(&self) -> &DocumentOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: DocumentOptions) -> Result<()> {
        options.validate()?;
        self.options = options;
        Ok(())
    }

    /// Add an in-memory image payload
    pub fn add_bytes(&mut self, name: impl Into<String>, data: Vec<u8>) -> PhotoId {
        let record = ImageRecord::new(name, data);
        let id = record.id();
        self.photos.append(record);
        id
    }

    /// Add an image file. Files that are not images are skipped (`Ok(None)`).
    pub async fn add_file(&mut self, path: impl AsRef<Path>) -> Result<Option<PhotoId>> {
        let path = path.as_ref();
        match media_type_for_path(path) {
            Some(media_type) if is_image_media_type(media_type) => {}
            _ => {
                log::debug!("Skipping non-image file {}", path.display());
                return Ok(None);
            }
        }

        let data = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Some(self.add_bytes(name, data)))
    }

    /// Add several files in order, returning the ids of the accepted ones
    pub async fn add_files(&mut self, paths: &[impl AsRef<Path>]) -> Result<Vec<PhotoId>> {
        let mut ids = Vec::new();
        for path in paths {
            if let Some(id) = self.add_file(path).await? {
                ids.push(id);
            }
        }
        Ok(ids)
    }

    pub fn remove(&mut self, id: PhotoId) {
        self.photos.remove(id);
    }

    pub fn clear(&mut self) {
        self.photos.clear();
    }

    /// Generate a document from the current photos and options
    pub async fn generate(&self) -> Result<GeneratedDocument> {
        self.generate_with_progress(|_, _| {}).await
    }

    pub async fn generate_with_progress(
        &self,
        progress: impl FnMut(usize, usize),
    ) -> Result<GeneratedDocument> {
        let photos = self.photos.snapshot();
        compose_with_progress(&photos, &self.options, progress).await
    }
}
