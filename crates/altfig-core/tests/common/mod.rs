//! Builders for small tagged PDFs used by the integration tests.

#![allow(dead_code)]

use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};

/// A tagged PDF under construction.
pub struct TaggedPdf {
    pub doc: Document,
    pub pages: Vec<ObjectId>,
    struct_root: ObjectId,
    elements: Vec<ObjectId>,
}

impl TaggedPdf {
    /// A document with `page_count` US-letter pages and an empty structure tree.
    pub fn new(page_count: usize) -> Self {
        Self::with_page_size(page_count, 612, 792)
    }

    pub fn with_page_size(page_count: usize, width: i64, height: i64) -> Self {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let mut pages = Vec::new();
        for i in 0..page_count {
            let content = format!("BT /F1 12 Tf 72 720 Td (Page {}) Tj ET", i + 1);
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
            pages.push(doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            }));
        }

        let kids: Vec<Object> = pages.iter().map(|id| Object::Reference(*id)).collect();
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count as i64,
                "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
            }),
        );

        let struct_root = doc.new_object_id();
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
            "StructTreeRoot" => struct_root,
            "MarkInfo" => dictionary! { "Marked" => true },
        });
        doc.trailer.set("Root", catalog_id);

        Self {
            doc,
            pages,
            struct_root,
            elements: Vec::new(),
        }
    }

    /// Add a `/Figure` element on `page` with a `[left, bottom, right, top]` box.
    pub fn figure(&mut self, page: usize, bbox: [f64; 4]) -> ObjectId {
        let bbox: Vec<Object> = bbox.iter().map(|v| number(*v)).collect();
        let pg = self.pages[page];
        self.element(dictionary! {
            "Type" => "StructElem",
            "S" => "Figure",
            "Pg" => pg,
            "A" => dictionary! { "O" => "Layout", "BBox" => bbox },
        })
    }

    /// Add an arbitrary structure element dictionary.
    pub fn element(&mut self, mut dict: Dictionary) -> ObjectId {
        dict.set("P", self.struct_root);
        let id = self.doc.add_object(dict);
        self.elements.push(id);
        id
    }

    pub fn to_bytes(mut self) -> Vec<u8> {
        let kids: Vec<Object> = self.elements.iter().map(|id| Object::Reference(*id)).collect();
        self.doc.objects.insert(
            self.struct_root,
            Object::Dictionary(dictionary! {
                "Type" => "StructTreeRoot",
                "K" => kids,
            }),
        );
        let mut buf = Vec::new();
        self.doc.save_to(&mut buf).unwrap();
        buf
    }
}

fn number(v: f64) -> Object {
    if v.fract() == 0.0 {
        Object::Integer(v as i64)
    } else {
        Object::Real(v as _)
    }
}

/// Decoded text value of a string entry on an object's dictionary.
pub fn text_entry(doc: &Document, id: ObjectId, key: &[u8]) -> Option<String> {
    let dict = doc.get_object(id).ok()?.as_dict().ok()?;
    match dict.get(key).ok()? {
        Object::String(bytes, _) => Some(altfig_core::alt_text::decode_text_string(bytes)),
        _ => None,
    }
}
