//! Fixture PDFs and helpers shared by the CLI integration tests.

#![allow(dead_code)]

use std::io::Write;

use assert_cmd::Command;
use lopdf::{Document, Object, ObjectId, dictionary};

pub fn cmd() -> Command {
    Command::cargo_bin("altfig").unwrap()
}

/// A figure to place in a fixture: page index and `[left, bottom, right, top]`.
pub struct FigureSpec {
    pub page: usize,
    pub bbox: [i64; 4],
}

/// A tagged PDF with `page_count` pages of the given height and one
/// `/Figure` per entry of `figures`. Returns the bytes plus the page and figure ids.
pub fn tagged_pdf(
    page_count: usize,
    height: i64,
    figures: &[FigureSpec],
) -> (Vec<u8>, Vec<ObjectId>, Vec<ObjectId>) {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let page_ids: Vec<ObjectId> = (0..page_count)
        .map(|_| {
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
            })
        })
        .collect();
    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count as i64,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), height.into()],
        }),
    );

    let struct_root = doc.new_object_id();
    let figure_ids: Vec<ObjectId> = figures
        .iter()
        .map(|f| {
            let bbox: Vec<Object> = f.bbox.iter().map(|v| Object::Integer(*v)).collect();
            doc.add_object(dictionary! {
                "Type" => "StructElem",
                "S" => "Figure",
                "P" => struct_root,
                "Pg" => page_ids[f.page],
                "A" => dictionary! { "O" => "Layout", "BBox" => bbox },
            })
        })
        .collect();
    let elements: Vec<Object> = figure_ids.iter().map(|id| Object::Reference(*id)).collect();
    doc.objects.insert(
        struct_root,
        Object::Dictionary(dictionary! {
            "Type" => "StructTreeRoot",
            "K" => elements,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
        "StructTreeRoot" => struct_root,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    (buf, page_ids, figure_ids)
}

/// Write bytes into `dir/name` and return the path.
pub fn write_file(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(bytes).unwrap();
    f.flush().unwrap();
    path
}

/// Decoded text value of a string entry on an object's dictionary.
pub fn text_entry(doc: &Document, id: ObjectId, key: &[u8]) -> Option<String> {
    let dict = doc.get_object(id).ok()?.as_dict().ok()?;
    match dict.get(key).ok()? {
        Object::String(bytes, _) => Some(altfig_core::alt_text::decode_text_string(bytes)),
        _ => None,
    }
}
