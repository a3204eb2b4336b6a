use crate::{PhotoSummary, PhotoUpdate, SessionLog};
use photo_pdf::{DocumentOptions, GeneratedDocument, PhotoId, PhotoPdfError, Session, save_document};
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Where a handler reports to: the front end's update channel and status log
pub struct Reporter<'a> {
    pub update_tx: &'a mpsc::UnboundedSender<PhotoUpdate>,
    pub status: &'a SessionLog,
}

impl Reporter<'_> {
    fn send(&self, update: PhotoUpdate) {
        let _ = self.update_tx.send(update);
    }

    fn error(&self, message: String) {
        self.status.error(message.clone());
        self.send(PhotoUpdate::Error { message });
    }

    fn photos_changed(&self, session: &Session) {
        let photos = session.photos().iter().map(PhotoSummary::from).collect();
        self.send(PhotoUpdate::PhotosChanged { photos });
    }
}

pub async fn handle_add_files(paths: Vec<PathBuf>, session: &mut Session, reporter: &Reporter<'_>) {
    let mut added = 0;
    for path in &paths {
        match session.add_file(path).await {
            Ok(Some(_)) => added += 1,
            Ok(None) => {}
            Err(e) => reporter.error(format!("Failed to read {}: {e}", path.display())),
        }
    }

    log::debug!("Added {} of {} file(s)", added, paths.len());
    reporter
        .status
        .info(format!("Added {} of {} file(s)", added, paths.len()));
    reporter.photos_changed(session);
}

pub fn handle_add_bytes(name: String, data: Vec<u8>, session: &mut Session, reporter: &Reporter<'_>) {
    reporter.status.info(format!("Added {name}"));
    session.add_bytes(name, data);
    reporter.photos_changed(session);
}

pub fn handle_remove(id: PhotoId, session: &mut Session, reporter: &Reporter<'_>) {
    if let Some(name) = session.photos().get(id).map(|r| r.name().to_string()) {
        session.remove(id);
        reporter.status.info(format!("Removed {name}"));
    }
    reporter.photos_changed(session);
}

pub fn handle_clear(session: &mut Session, reporter: &Reporter<'_>) {
    session.clear();
    reporter.status.info("Cleared all photos");
    reporter.photos_changed(session);
}

pub fn handle_set_options(options: DocumentOptions, session: &mut Session, reporter: &Reporter<'_>) {
    match session.set_options(options) {
        Ok(()) => {
            reporter.status.info(format!(
                "{} {:?}, {:?} fit, {:?} quality",
                options.paper_size.name(),
                options.orientation,
                options.fit,
                options.quality
            ));
            reporter.send(PhotoUpdate::OptionsChanged { options });
        }
        Err(e) => reporter.error(format!("Invalid options: {e}")),
    }
}

pub async fn handle_generate(session: &Session, reporter: &Reporter<'_>) {
    let result = session
        .generate_with_progress(|current, total| {
            reporter.send(PhotoUpdate::Progress {
                operation: "Generating PDF".to_string(),
                current,
                total,
            });
        })
        .await;

    match result {
        Ok(document) => {
            reporter.status.info(format!(
                "Generated {} ({} pages)",
                document.file_name, document.page_count
            ));
            reporter.send(PhotoUpdate::Generated { document });
        }
        Err(PhotoPdfError::EmptyInput) => {
            reporter.error("Please add at least one photo to generate a PDF.".to_string());
        }
        Err(e) => {
            log::error!("PDF generation failed: {e}");
            reporter.error(format!("Failed to generate PDF: {e}"));
        }
    }
}

pub async fn handle_save(document: GeneratedDocument, target: PathBuf, reporter: &Reporter<'_>) {
    match save_document(&document, &target).await {
        Ok(path) => {
            reporter.status.info(format!("Saved {}", path.display()));
            reporter.send(PhotoUpdate::Saved { path });
        }
        Err(e) => reporter.error(format!("Failed to save PDF: {e}")),
    }
}
