use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use lopdf::Document;
use photo_pdf::*;
use std::io::Cursor;
use std::sync::{Arc, Mutex};

fn encode(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([200, 80, 20])));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), format).unwrap();
    bytes
}

fn photo(name: &str, width: u32, height: u32) -> ImageRecord {
    ImageRecord::new(name, encode(width, height, ImageFormat::Png))
}

#[derive(Debug, Clone, PartialEq)]
enum Call {
    AddPage,
    Paint {
        dimensions: (u32, u32),
        placement: Rect,
        quality: f32,
    },
    Finish,
}

/// Sink that records every call and produces no real output
#[derive(Clone, Default)]
struct RecordingSink {
    calls: Arc<Mutex<Vec<Call>>>,
    pages: usize,
    fail_paint: bool,
}

impl RecordingSink {
    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl DocumentSink for RecordingSink {
    fn add_page(&mut self) -> Result<()> {
        self.pages += 1;
        self.calls.lock().unwrap().push(Call::AddPage);
        Ok(())
    }

    fn paint_image(&mut self, image: &DecodedImage, placement: &Rect, quality: f32) -> Result<()> {
        if self.fail_paint {
            return Err(PhotoPdfError::Render("unsupported image".to_string()));
        }
        self.calls.lock().unwrap().push(Call::Paint {
            dimensions: image.dimensions(),
            placement: *placement,
            quality,
        });
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.pages + 1
    }

    fn finish(self) -> Result<Vec<u8>> {
        self.calls.lock().unwrap().push(Call::Finish);
        Ok(b"%PDF-stub".to_vec())
    }
}

fn image_widths(doc: &Document) -> Vec<i64> {
    doc.get_pages()
        .values()
        .map(|&page_id| {
            let page = doc.get_dictionary(page_id).unwrap();
            let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
            let xobjects = resources.get(b"XObject").unwrap().as_dict().unwrap();
            assert_eq!(xobjects.len(), 1);
            let (_, reference) = xobjects.iter().next().unwrap();
            let stream = doc
                .get_object(reference.as_reference().unwrap())
                .unwrap()
                .as_stream()
                .unwrap();
            assert_eq!(
                stream.dict.get(b"Filter").unwrap().as_name().unwrap(),
                b"DCTDecode"
            );
            stream.dict.get(b"Width").unwrap().as_i64().unwrap()
        })
        .collect()
}

#[tokio::test]
async fn test_empty_input_makes_no_sink_calls() {
    let sink = RecordingSink::default();
    let result = compose_into(&[], &DocumentOptions::default(), sink.clone(), |_, _| {}).await;

    assert!(matches!(result, Err(PhotoPdfError::EmptyInput)));
    assert!(sink.calls().is_empty());
}

#[tokio::test]
async fn test_compose_empty_is_error() {
    let result = compose(&[], &DocumentOptions::default()).await;
    assert!(matches!(result, Err(PhotoPdfError::EmptyInput)));
}

#[tokio::test]
async fn test_one_page_per_photo_in_order() {
    let photos = vec![
        photo("a.png", 80, 60),
        photo("b.png", 40, 80),
        photo("c.png", 10, 10),
    ];
    let options = DocumentOptions {
        quality: QualityLevel::Medium,
        ..Default::default()
    };
    let sink = RecordingSink::default();

    let mut reported = Vec::new();
    let doc = compose_into(&photos, &options, sink.clone(), |done, total| {
        reported.push((done, total))
    })
    .await
    .unwrap();

    assert_eq!(doc.page_count, 3);
    assert_eq!(reported, vec![(1, 3), (2, 3), (3, 3)]);

    let calls = sink.calls();
    let kinds: Vec<_> = calls
        .iter()
        .map(|c| match c {
            Call::AddPage => "add",
            Call::Paint { .. } => "paint",
            Call::Finish => "finish",
        })
        .collect();
    assert_eq!(kinds, ["paint", "add", "paint", "add", "paint", "finish"]);

    let painted: Vec<_> = calls
        .iter()
        .filter_map(|c| match c {
            Call::Paint {
                dimensions,
                quality,
                ..
            } => Some((*dimensions, *quality)),
            _ => None,
        })
        .collect();
    assert_eq!(
        painted,
        vec![((80, 60), 0.8), ((40, 80), 0.8), ((10, 10), 0.8)]
    );
}

#[tokio::test]
async fn test_placement_uses_selected_strategy() {
    let photos = vec![photo("wide.png", 800, 600)];
    let options = DocumentOptions {
        fit: FitStrategy::Fill,
        ..Default::default()
    };
    let sink = RecordingSink::default();

    compose_into(&photos, &options, sink.clone(), |_, _| {})
        .await
        .unwrap();

    match &sink.calls()[0] {
        Call::Paint { placement, .. } => {
            assert_eq!(*placement, Rect::new(0.0, 0.0, 210.0, 297.0));
        }
        other => panic!("Expected paint, got {other:?}"),
    }
}

#[tokio::test]
async fn test_undecodable_photo_names_the_record() {
    let broken = ImageRecord::new("broken.jpg", b"definitely not a jpeg".to_vec());
    let broken_id = broken.id();
    let photos = vec![photo("ok.png", 20, 10), broken, photo("later.png", 5, 5)];
    let sink = RecordingSink::default();

    let result = compose_into(&photos, &DocumentOptions::default(), sink.clone(), |_, _| {}).await;

    match result {
        Err(PhotoPdfError::ImageDecode { id, name, .. }) => {
            assert_eq!(id, broken_id);
            assert_eq!(name, "broken.jpg");
        }
        other => panic!("Expected ImageDecode error, got {other:?}"),
    }

    // Nothing after the failing photo, and the document is never serialized
    let calls = sink.calls();
    assert!(!calls.contains(&Call::Finish));
    assert_eq!(
        calls
            .iter()
            .filter(|c| matches!(c, Call::Paint { .. }))
            .count(),
        1
    );
}

#[tokio::test]
async fn test_sink_failure_is_render_error() {
    let photos = vec![photo("a.png", 4, 4)];
    let sink = RecordingSink {
        fail_paint: true,
        ..Default::default()
    };

    let err = compose_into(&photos, &DocumentOptions::default(), sink, |_, _| {})
        .await
        .unwrap_err();
    assert!(err.is_render_failure());
}

#[tokio::test]
async fn test_compose_writes_real_pdf() {
    let photos = vec![
        ImageRecord::new("first.jpg", encode(64, 48, ImageFormat::Jpeg)),
        photo("second.png", 30, 90),
        photo("third.png", 12, 12),
    ];
    let options = DocumentOptions {
        paper_size: PaperSize::Letter,
        orientation: Orientation::Landscape,
        fit: FitStrategy::Actual,
        quality: QualityLevel::Low,
    };

    let generated = compose(&photos, &options).await.unwrap();
    assert_eq!(generated.page_count, 3);
    assert!(generated.file_name.starts_with("photo-to-pdf-"));
    assert!(generated.file_name.ends_with(".pdf"));

    let doc = Document::load_mem(&generated.bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 3);
    assert_eq!(image_widths(&doc), vec![64, 30, 12]);
}

#[tokio::test]
async fn test_compose_rejects_invalid_options() {
    let photos = vec![photo("a.png", 4, 4)];
    let options = DocumentOptions {
        paper_size: PaperSize::Custom {
            width_mm: 0.0,
            height_mm: 100.0,
        },
        ..Default::default()
    };

    let result = compose(&photos, &options).await;
    assert!(matches!(result, Err(PhotoPdfError::Config(_))));
}

#[tokio::test]
async fn test_empty_input_reported_before_invalid_options() {
    let options = DocumentOptions {
        paper_size: PaperSize::Custom {
            width_mm: -1.0,
            height_mm: 100.0,
        },
        ..Default::default()
    };

    let mut progress_calls = 0;
    let result = compose_with_progress(&[], &options, |_, _| progress_calls += 1).await;
    assert!(matches!(result, Err(PhotoPdfError::EmptyInput)));
    assert_eq!(progress_calls, 0);
}

#[test]
fn test_file_name_for_timestamp() {
    assert_eq!(file_name_for(1700000000123), "photo-to-pdf-1700000000123.pdf");
}

#[tokio::test]
async fn test_save_document_into_directory() {
    let dir = tempfile::tempdir().unwrap();
    let generated = GeneratedDocument {
        file_name: file_name_for(42),
        bytes: b"%PDF-1.5 test".to_vec(),
        page_count: 1,
    };

    let path = save_document(&generated, dir.path()).await.unwrap();
    assert_eq!(path, dir.path().join("photo-to-pdf-42.pdf"));
    assert_eq!(std::fs::read(&path).unwrap(), generated.bytes);
}

#[tokio::test]
async fn test_save_document_to_file_path() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("album.pdf");
    let generated = GeneratedDocument {
        file_name: file_name_for(7),
        bytes: b"%PDF-1.5 test".to_vec(),
        page_count: 1,
    };

    let path = save_document(&generated, &target).await.unwrap();
    assert_eq!(path, target);
    assert!(target.exists());
}
