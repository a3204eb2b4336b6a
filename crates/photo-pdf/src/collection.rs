//! In-memory photo collection
//!
//! The collection is an ordered list of image records keyed by id. Insertion
//! order is the page order of the generated document.

use image::{ImageFormat, ImageReader};
use std::fmt;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_PHOTO_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identifier of a photo, unique within the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhotoId(u64);

impl PhotoId {
    fn next() -> Self {
        Self(NEXT_PHOTO_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A user-supplied image. Immutable once created.
#[derive(Debug, Clone)]
pub struct ImageRecord {
    id: PhotoId,
    name: String,
    size_bytes: u64,
    data: Arc<[u8]>,
    dimensions: Option<(u32, u32)>,
}

impl ImageRecord {
    /// Create a record from a raw payload.
    ///
    /// Pixel dimensions are read from the image header only. A payload whose
    /// header cannot be read is still accepted; it fails later when the
    /// document is generated.
    pub fn new(name: impl Into<String>, data: impl Into<Arc<[u8]>>) -> Self {
        let data = data.into();
        let dimensions = probe_dimensions(&data);
        Self {
            id: PhotoId::next(),
            name: name.into(),
            size_bytes: data.len() as u64,
            data,
            dimensions,
        }
    }

    pub fn id(&self) -> PhotoId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn shared_data(&self) -> Arc<[u8]> {
        Arc::clone(&self.data)
    }

    pub fn width(&self) -> Option<u32> {
        self.dimensions.map(|(w, _)| w)
    }

    pub fn height(&self) -> Option<u32> {
        self.dimensions.map(|(_, h)| h)
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.dimensions
    }
}

fn probe_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}

/// Ordered set of image records
#[derive(Debug, Clone, Default)]
pub struct PhotoCollection {
    records: Vec<ImageRecord>,
}

impl PhotoCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record at the end. Records whose id is already present are ignored.
    pub fn append(&mut self, record: ImageRecord) {
        if self.get(record.id()).is_some() {
            log::warn!("Photo {} is already in the collection", record.id());
            return;
        }
        self.records.push(record);
    }

    /// Remove the record with `id`. Absent ids are a no-op.
    pub fn remove(&mut self, id: PhotoId) -> Option<ImageRecord> {
        let index = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(index))
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Copy of the current sequence. Later mutations are not reflected.
    pub fn snapshot(&self) -> Vec<ImageRecord> {
        self.records.clone()
    }

    pub fn get(&self, id: PhotoId) -> Option<&ImageRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_size_bytes(&self) -> u64 {
        self.records.iter().map(ImageRecord::size_bytes).sum()
    }
}

/// True for declared media types of raster images (`image/*`)
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

/// Guess the media type of a file from its extension
pub fn media_type_for_path(path: impl AsRef<Path>) -> Option<&'static str> {
    ImageFormat::from_path(path)
        .ok()
        .map(|format| format.to_mime_type())
}

/// Human-readable file size, e.g. `1536` -> `"1.5 KB"`
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut exponent = 0;
    while exponent < UNITS.len() - 1 && bytes >= 1024u64.pow(exponent as u32 + 1) {
        exponent += 1;
    }
    let value = bytes as f64 / 1024u64.pow(exponent as u32) as f64;
    // Half-way cases round up (1.125 -> 1.13), which `{:.2}` alone does not do
    let rounded = (value * 100.0).round() / 100.0;

    let formatted = format!("{rounded:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> ImageRecord {
        ImageRecord::new(name, vec![0u8; 4])
    }

    #[test]
    fn test_append_preserves_order() {
        let mut photos = PhotoCollection::new();
        photos.append(record("a.jpg"));
        photos.append(record("b.jpg"));
        photos.append(record("c.jpg"));

        let names: Vec<_> = photos.iter().map(|r| r.name().to_string()).collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = record("a.jpg");
        let b = record("a.jpg");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_append_duplicate_id_ignored() {
        let mut photos = PhotoCollection::new();
        let a = record("a.jpg");
        photos.append(a.clone());
        photos.append(a);
        assert_eq!(photos.len(), 1);
    }

    #[test]
    fn test_remove_by_id() {
        let mut photos = PhotoCollection::new();
        let a = record("a.jpg");
        let b = record("b.jpg");
        let b_id = b.id();
        photos.append(a);
        photos.append(b);

        let removed = photos.remove(b_id);
        assert_eq!(removed.map(|r| r.id()), Some(b_id));
        assert_eq!(photos.len(), 1);
        assert!(photos.get(b_id).is_none());
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut photos = PhotoCollection::new();
        photos.append(record("a.jpg"));
        let stranger = record("other.jpg");

        assert!(photos.remove(stranger.id()).is_none());
        assert_eq!(photos.len(), 1);
        assert_eq!(photos.iter().next().map(|r| r.name()), Some("a.jpg"));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut photos = PhotoCollection::new();
        photos.append(record("a.jpg"));
        let snapshot = photos.snapshot();

        photos.clear();
        assert!(photos.is_empty());
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_unreadable_header_has_no_dimensions() {
        let r = record("broken.jpg");
        assert_eq!(r.dimensions(), None);
        assert_eq!(r.size_bytes(), 4);
    }

    #[test]
    fn test_total_size() {
        let mut photos = PhotoCollection::new();
        photos.append(ImageRecord::new("a", vec![0u8; 10]));
        photos.append(ImageRecord::new("b", vec![0u8; 32]));
        assert_eq!(photos.total_size_bytes(), 42);
    }

    #[test]
    fn test_media_type_filter() {
        assert!(is_image_media_type("image/jpeg"));
        assert!(is_image_media_type("image/png"));
        assert!(!is_image_media_type("application/pdf"));
        assert!(!is_image_media_type("text/plain"));
    }

    #[test]
    fn test_media_type_for_path() {
        assert_eq!(media_type_for_path("holiday.JPG"), Some("image/jpeg"));
        assert_eq!(media_type_for_path("scan.png"), Some("image/png"));
        assert_eq!(media_type_for_path("notes.txt"), None);
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1152), "1.13 KB");
        assert_eq!(format_file_size(1664), "1.63 KB");
        assert_eq!(format_file_size(1_048_576), "1 MB");
        assert_eq!(format_file_size(2_621_440), "2.5 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024 * 1024), "5120 GB");
    }
}
