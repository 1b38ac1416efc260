//! altfig-core: figure bounding boxes and alt text for tagged PDFs.
//!
//! Two independent passes run over the same [`ObjectGraph`]:
//!
//! - [`extract_figure_boxes`] finds every `/Figure` structure element and
//!   reports its `/BBox` in top-down page coordinates, keyed by object number.
//! - [`inject_alt_text`] writes externally supplied alt text into the
//!   `/Alt` and `/Contents` entries of the figures an [`AltTextMap`] names.
//!
//! Parsing and serialization are delegated to [lopdf](https://crates.io/crates/lopdf).

pub mod alt_text;
pub mod bbox;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod matcher;

pub use alt_text::{
    AltTextMap, InjectionReport, UnresolvedKey, alt_text_output_path, default_alt_text_path,
    inject_alt_text,
};
pub use bbox::{BBoxReport, FigureBox, extract_figure_boxes};
pub use error::{AltFigError, SkipReason, Skipped};
pub use geometry::{BBox, PdfRect};
pub use graph::{ObjectGraph, PageIndex, write_pdf};
pub use lopdf;
