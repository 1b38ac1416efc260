//! Alt-text injection into figure structure elements.
//!
//! The alt text arrives as a JSON side channel keyed by object number:
//!
//! ```json
//! { "12": { "alt": "A cat sitting on a windowsill" } }
//! ```
//!
//! Each matching figure gets the same string in both `/Alt` and `/Contents`.

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use lopdf::{Object, ObjectId, StringFormat};
use serde::Deserialize;

use crate::error::AltFigError;
use crate::graph::ObjectGraph;
use crate::matcher;

/// File name the captioning step writes its output to.
pub const ALT_TEXT_FILE_NAME: &str = "output-alt-text.json";

/// Suffix appended to the input stem for the injected copy.
pub const OUTPUT_SUFFIX: &str = "_alt_text_added.pdf";

#[derive(Debug, Deserialize)]
struct AltTextEntry {
    alt: String,
}

/// Alt text keyed by figure object number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AltTextMap {
    entries: HashMap<u32, String>,
    invalid_keys: Vec<String>,
}

impl AltTextMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the JSON side channel.
    ///
    /// Keys that are not object numbers are kept in [`invalid_keys`](Self::invalid_keys)
    /// rather than failing the whole map. An entry without a string `alt`
    /// field is an error.
    pub fn from_json(json: &str) -> Result<Self, AltFigError> {
        let raw: HashMap<String, AltTextEntry> = serde_json::from_str(json)?;
        let mut map = Self::new();
        for (key, entry) in raw {
            match key.trim().parse::<u32>() {
                Ok(number) => map.insert(number, entry.alt),
                Err(_) => map.invalid_keys.push(key),
            }
        }
        map.invalid_keys.sort();
        Ok(map)
    }

    /// Read and parse a side-channel file.
    pub fn from_path(path: &Path) -> Result<Self, AltFigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn insert(&mut self, object_number: u32, alt: impl Into<String>) {
        self.entries.insert(object_number, alt.into());
    }

    pub fn get(&self, object_number: u32) -> Option<&str> {
        self.entries.get(&object_number).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys from the side channel that could not be read as object numbers.
    pub fn invalid_keys(&self) -> &[String] {
        &self.invalid_keys
    }

    fn object_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.keys().copied()
    }
}

/// An alt-text key that matched no figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedKey {
    pub key: String,
}

/// Result of an injection pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InjectionReport {
    /// Figures whose `/Alt` and `/Contents` were written.
    pub updated: Vec<ObjectId>,
    /// Keys that named no figure, sorted.
    pub unresolved: Vec<UnresolvedKey>,
}

impl InjectionReport {
    /// `true` when no figure was touched.
    pub fn is_unchanged(&self) -> bool {
        self.updated.is_empty()
    }
}

/// Write alt text from `map` into every figure whose object number it names.
///
/// Every generation of a matching object number is written. Keys that match
/// no figure are reported and otherwise ignored.
pub fn inject_alt_text(graph: &mut ObjectGraph, map: &AltTextMap) -> InjectionReport {
    let mut report = InjectionReport::default();
    let mut matched = BTreeSet::new();

    for id in matcher::figure_ids(graph) {
        let Some(alt) = map.get(id.0) else {
            continue;
        };
        let Some(dict) = graph.get_mut(id).and_then(|obj| obj.as_dict_mut().ok()) else {
            continue;
        };
        dict.set("Alt", encode_text_string(alt));
        dict.set("Contents", encode_text_string(alt));
        tracing::debug!(object = id.0, generation = id.1, "alt text written");
        matched.insert(id.0);
        report.updated.push(id);
    }

    let mut unresolved: Vec<u32> = map
        .object_numbers()
        .filter(|number| !matched.contains(number))
        .collect();
    unresolved.sort_unstable();
    report.unresolved = unresolved
        .into_iter()
        .map(|number| UnresolvedKey {
            key: number.to_string(),
        })
        .chain(map.invalid_keys().iter().map(|key| UnresolvedKey { key: key.clone() }))
        .collect();

    for key in &report.unresolved {
        tracing::debug!(key = %key.key, "alt-text key matched no figure");
    }
    tracing::info!(
        updated = report.updated.len(),
        unresolved = report.unresolved.len(),
        "alt-text injection finished"
    );
    report
}

/// Encode text as a PDF text string.
///
/// ASCII goes out as a literal string; anything else as UTF-16BE with a
/// byte order mark.
pub fn encode_text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::string_literal(text);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

/// Decode a PDF string, handling UTF-16 BE BOM and Latin-1.
///
/// Bytes without a BOM are read as Latin-1, which agrees with
/// PDFDocEncoding for ASCII and for 0xA1..=0xFF.
pub fn decode_text_string(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        bytes.iter().map(|&b| char::from(b)).collect()
    }
}

/// Sibling path for the injected copy: `dir/name.pdf` → `dir/name_alt_text_added.pdf`.
pub fn alt_text_output_path(input: &Path) -> PathBuf {
    let has_pdf_extension = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    let stem = if has_pdf_extension {
        input.file_stem()
    } else {
        input.file_name()
    }
    .map(|s| s.to_string_lossy().into_owned())
    .unwrap_or_default();
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}"))
}

/// Where the side channel is expected by default: next to the input PDF.
pub fn default_alt_text_path(input: &Path) -> PathBuf {
    input.with_file_name(ALT_TEXT_FILE_NAME)
}
