//! Owned object graph of a parsed PDF.
//!
//! Wraps a [`lopdf::Document`], which does the actual parsing and
//! serialization. Read-only passes borrow the graph immutably; the alt-text
//! injector is the only stage that takes `&mut ObjectGraph`, so two passes
//! can never write to the same graph at once.

use std::collections::HashMap;
use std::path::Path;

use lopdf::{Document, Object, ObjectId};

use crate::error::AltFigError;
use crate::geometry::PdfRect;

/// A fully materialized PDF object graph.
pub struct ObjectGraph {
    inner: Document,
}

impl ObjectGraph {
    /// Parse PDF bytes into an object graph.
    pub fn load(bytes: &[u8]) -> Result<Self, AltFigError> {
        let inner = Document::load_mem(bytes).map_err(|e| AltFigError::Load(e.to_string()))?;
        tracing::debug!(objects = inner.objects.len(), "loaded object graph");
        Ok(Self { inner })
    }

    /// Read and parse a PDF file.
    pub fn open(path: &Path) -> Result<Self, AltFigError> {
        let bytes = std::fs::read(path)?;
        Self::load(&bytes)
    }

    /// Wrap an already-built document.
    pub fn from_document(inner: Document) -> Self {
        Self { inner }
    }

    /// Access the underlying lopdf document.
    pub fn inner(&self) -> &Document {
        &self.inner
    }

    /// Enumerate every indirect object exactly once.
    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &Object)> {
        self.inner.objects.iter().map(|(id, obj)| (*id, obj))
    }

    pub fn get(&self, id: ObjectId) -> Option<&Object> {
        self.inner.get_object(id).ok()
    }

    pub(crate) fn get_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.inner.get_object_mut(id).ok()
    }

    /// Resolve a potentially indirect object reference.
    ///
    /// Dangling references resolve to themselves.
    pub fn resolve<'a>(&'a self, obj: &'a Object) -> &'a Object {
        match obj {
            Object::Reference(id) => self.inner.get_object(*id).unwrap_or(obj),
            _ => obj,
        }
    }

    /// Build the page-reference → ordinal map in document order.
    pub fn page_index(&self) -> PageIndex {
        // get_pages is keyed by 1-based page number, so values come out in order
        PageIndex::new(self.inner.get_pages().into_values().collect())
    }

    /// Height of the first page's MediaBox, following `/Parent` inheritance.
    pub fn first_page_height(&self) -> Option<f64> {
        let (_, &page_id) = self.inner.get_pages().iter().next()?;
        let media_box = self.resolve_inherited(page_id, b"MediaBox")?;
        let array = self.resolve(media_box).as_array().ok()?;
        PdfRect::from_array(array).map(|rect| rect.height())
    }

    /// Look up a key in the page dictionary, walking up the page tree
    /// (via /Parent) if the key is not found on the page itself.
    fn resolve_inherited(&self, page_id: ObjectId, key: &[u8]) -> Option<&Object> {
        let mut current_id = page_id;
        // Bounded walk in case of a /Parent cycle
        for _ in 0..64 {
            let dict = self.inner.get_object(current_id).ok()?.as_dict().ok()?;
            if let Ok(value) = dict.get(key) {
                return Some(value);
            }
            current_id = dict.get(b"Parent").ok()?.as_reference().ok()?;
        }
        None
    }

    /// Serialize the graph back to PDF bytes.
    pub fn to_bytes(&mut self) -> Result<Vec<u8>, AltFigError> {
        let mut buf = Vec::new();
        self.inner
            .save_to(&mut buf)
            .map_err(|e| AltFigError::Write(e.to_string()))?;
        Ok(buf)
    }

    /// Serialize the graph and write it to `path`.
    pub fn save(&mut self, path: &Path) -> Result<(), AltFigError> {
        let bytes = self.to_bytes()?;
        write_pdf(path, &bytes)
    }
}

/// Persist already-serialized PDF bytes.
pub fn write_pdf(path: &Path, bytes: &[u8]) -> Result<(), AltFigError> {
    std::fs::write(path, bytes).map_err(|e| AltFigError::Write(format!("{}: {e}", path.display())))
}

impl std::fmt::Debug for ObjectGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectGraph")
            .field("objects", &self.inner.objects.len())
            .finish_non_exhaustive()
    }
}

/// Page object ids in document order, with reverse lookup to the 0-based ordinal.
#[derive(Debug, Clone, Default)]
pub struct PageIndex {
    pages: Vec<ObjectId>,
    ordinals: HashMap<ObjectId, usize>,
}

impl PageIndex {
    pub fn new(pages: Vec<ObjectId>) -> Self {
        let ordinals = pages
            .iter()
            .enumerate()
            .map(|(ordinal, id)| (*id, ordinal))
            .collect();
        Self { pages, ordinals }
    }

    /// The 0-based position of a page, if `id` is one of the document's pages.
    pub fn ordinal(&self, id: ObjectId) -> Option<usize> {
        self.ordinals.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// `(page id, ordinal)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, usize)> + '_ {
        self.pages.iter().enumerate().map(|(i, id)| (*id, i))
    }
}
