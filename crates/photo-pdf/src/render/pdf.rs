//! lopdf-backed document sink
//!
//! Builds one page per painted image. Each image becomes an /Image XObject
//! with /DCTDecode, drawn by a `cm`/`Do` pair in the page content stream.

use super::DocumentSink;
use super::encode::encode_jpeg;
use crate::compose::DecodedImage;
use crate::constants::*;
use crate::layout::Rect;
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Content and resources of the page currently being painted
struct PageBuilder {
    content: String,
    xobjects: Dictionary,
}

impl PageBuilder {
    fn new() -> Self {
        Self {
            content: String::new(),
            xobjects: Dictionary::new(),
        }
    }
}

pub struct PdfSink {
    doc: Document,
    pages_id: ObjectId,
    geometry: PageGeometry,
    finished_pages: Vec<ObjectId>,
    current: PageBuilder,
    image_count: usize,
}

impl PdfSink {
    /// Create a document whose pages all have `geometry`, with one initial page.
    pub fn new(geometry: PageGeometry) -> Self {
        let mut doc = Document::with_version(PDF_VERSION);
        let pages_id = doc.new_object_id();

        Self {
            doc,
            pages_id,
            geometry,
            finished_pages: Vec::new(),
            current: PageBuilder::new(),
            image_count: 0,
        }
    }

    /// Write the current page into the document
    fn flush_page(&mut self) {
        let page = std::mem::replace(&mut self.current, PageBuilder::new());

        let content_id = self
            .doc
            .add_object(Stream::new(Dictionary::new(), page.content.into_bytes()));

        let mut resources = Dictionary::new();
        if !page.xobjects.is_empty() {
            resources.set("XObject", Object::Dictionary(page.xobjects));
        }

        let page_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(self.pages_id)),
            ("MediaBox", Object::Array(self.media_box())),
            ("Resources", Object::Dictionary(resources)),
            ("Contents", Object::Reference(content_id)),
        ]);

        let page_id = self.doc.add_object(page_dict);
        self.finished_pages.push(page_id);
    }

    fn media_box(&self) -> Vec<Object> {
        vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(self.geometry.width_pt()),
            Object::Real(self.geometry.height_pt()),
        ]
    }
}

impl DocumentSink for PdfSink {
    fn add_page(&mut self) -> Result<()> {
        self.flush_page();
        Ok(())
    }

    fn paint_image(&mut self, image: &DecodedImage, placement: &Rect, quality: f32) -> Result<()> {
        let jpeg = encode_jpeg(image.image(), quality)?;

        let image_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"XObject".to_vec())),
            ("Subtype", Object::Name(b"Image".to_vec())),
            ("Width", Object::Integer(jpeg.width as i64)),
            ("Height", Object::Integer(jpeg.height as i64)),
            (
                "ColorSpace",
                Object::Name(jpeg.color_space.as_bytes().to_vec()),
            ),
            ("BitsPerComponent", Object::Integer(8)),
            ("Filter", Object::Name(b"DCTDecode".to_vec())),
        ]);
        let image_id = self
            .doc
            .add_object(Stream::new(image_dict, jpeg.data).with_compression(false));

        let name = format!("{}{}", IMAGE_RESOURCE_PREFIX, self.image_count);
        self.image_count += 1;
        self.current
            .xobjects
            .set(name.as_bytes().to_vec(), Object::Reference(image_id));

        // PDF user space has its origin at the bottom-left, in points
        let rect = placement
            .scaled(POINTS_PER_MM)
            .flipped(self.geometry.height_pt());
        self.current.content.push_str(&generate_image_command(&name, &rect));

        Ok(())
    }

    fn page_count(&self) -> usize {
        self.finished_pages.len() + 1
    }

    fn finish(mut self) -> Result<Vec<u8>> {
        self.flush_page();

        let count = self.finished_pages.len() as i64;
        let kids = self
            .finished_pages
            .iter()
            .map(|&id| Object::Reference(id))
            .collect();
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(kids)),
            ("Count", Object::Integer(count)),
        ]);
        self.doc
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self.doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_id)),
        ]));
        self.doc.trailer.set("Root", catalog_id);

        let creation_date = chrono::Local::now().format("D:%Y%m%d%H%M%S").to_string();
        let info_id = self.doc.add_object(Dictionary::from_iter(vec![
            ("Title", Object::string_literal(DOCUMENT_TITLE)),
            ("Producer", Object::string_literal(PRODUCER)),
            ("CreationDate", Object::string_literal(creation_date)),
        ]));
        self.doc.trailer.set("Info", info_id);

        let mut writer = Vec::new();
        self.doc
            .save_to(&mut writer)
            .map_err(|e| PhotoPdfError::Render(format!("Failed to serialize PDF: {e}")))?;
        Ok(writer)
    }
}

/// Content stream command that draws an image XObject into `rect` (points).
fn generate_image_command(xobject_name: &str, rect: &Rect) -> String {
    format!(
        "q {:.4} 0 0 {:.4} {:.4} {:.4} cm /{} Do Q\n",
        rect.width, rect.height, rect.x, rect.y, xobject_name
    )
}
