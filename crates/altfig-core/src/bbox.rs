//! Figure bounding-box extraction.
//!
//! For every figure structure element, reads the `/BBox` from its attribute
//! object(s) and the page it sits on from `/Pg`, then flips the box into
//! top-down page coordinates. This pass never mutates the graph.

use lopdf::{Dictionary, Object, ObjectId};
use serde_json::{Value, json};

use crate::error::{AltFigError, SkipReason, Skipped};
use crate::geometry::{BBox, PdfRect};
use crate::graph::{ObjectGraph, PageIndex};
use crate::matcher;

/// One figure's location in top-down page coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureBox {
    /// The figure structure element.
    pub figure: ObjectId,
    /// The page object named by `/Pg`.
    pub page: ObjectId,
    /// 0-based position of that page in document order.
    pub page_index: usize,
    /// Bounding box with the vertical axis flipped.
    pub bbox: BBox,
}

/// Result of a bbox-extraction pass.
#[derive(Debug, Clone, Default)]
pub struct BBoxReport {
    /// The document's pages with their ordinals.
    pub pages: PageIndex,
    /// Located figures, in discovery order.
    pub figures: Vec<FigureBox>,
    /// Figures that could not be located.
    pub skipped: Vec<Skipped>,
}

impl BBoxReport {
    /// `[[pageObjectNumber, pageOrdinal], ...]` in document order.
    pub fn page_listing(&self) -> Value {
        Value::Array(
            self.pages
                .iter()
                .map(|(id, ordinal)| json!([id.0, ordinal]))
                .collect(),
        )
    }

    /// `[[figureObjectNumber, [pageOrdinal, x0, top, x1, bottom]], ...]`.
    pub fn figure_listing(&self) -> Value {
        Value::Array(
            self.figures
                .iter()
                .map(|f| {
                    json!([
                        f.figure.0,
                        [
                            f.page_index,
                            json_number(f.bbox.x0),
                            json_number(f.bbox.top),
                            json_number(f.bbox.x1),
                            json_number(f.bbox.bottom),
                        ]
                    ])
                })
                .collect(),
        )
    }

    /// Both listings as compact JSON separated by `|`, on one line.
    pub fn to_pipe_line(&self) -> String {
        format!("{}|{}", self.page_listing(), self.figure_listing())
    }
}

/// Write integral floats as JSON integers, so `92.0` comes out as `92`.
fn json_number(value: f64) -> Value {
    // i64 covers every coordinate a real page can have
    if value.fract() == 0.0 && value.abs() < 9.0e15 {
        json!(value as i64)
    } else {
        json!(value)
    }
}

/// Locate every figure in the graph for a page of height `page_height`.
///
/// Figures with missing or malformed geometry, or without a resolvable page,
/// are recorded in [`BBoxReport::skipped`] and otherwise ignored.
pub fn extract_figure_boxes(
    graph: &ObjectGraph,
    page_height: f64,
) -> Result<BBoxReport, AltFigError> {
    if !page_height.is_finite() || page_height <= 0.0 {
        return Err(AltFigError::InvalidHeight(page_height));
    }

    let mut report = BBoxReport {
        pages: graph.page_index(),
        ..BBoxReport::default()
    };

    for (figure, dict) in matcher::figures(graph) {
        match locate_figure(graph, &report.pages, dict) {
            Ok((page, page_index, rect)) => report.figures.push(FigureBox {
                figure,
                page,
                page_index,
                bbox: rect.flip(page_height),
            }),
            Err(reason) => {
                tracing::warn!(
                    object = figure.0,
                    generation = figure.1,
                    %reason,
                    "skipping figure"
                );
                report.skipped.push(Skipped { figure, reason });
            }
        }
    }

    tracing::debug!(
        located = report.figures.len(),
        skipped = report.skipped.len(),
        "bbox extraction finished"
    );
    Ok(report)
}

fn locate_figure(
    graph: &ObjectGraph,
    pages: &PageIndex,
    dict: &Dictionary,
) -> Result<(ObjectId, usize, PdfRect), SkipReason> {
    let rect = figure_rect(graph, dict)?;
    let page = match dict.get(b"Pg") {
        Ok(Object::Reference(id)) => *id,
        _ => return Err(SkipReason::MissingPageLink),
    };
    let page_index = pages.ordinal(page).ok_or(SkipReason::UnknownPage)?;
    Ok((page, page_index, rect))
}

/// Read `/A` → `/BBox` for a structure element.
///
/// `/A` may be a single attribute dictionary or an array of them (possibly
/// indirect); the first one carrying a `/BBox` is used.
fn figure_rect(graph: &ObjectGraph, dict: &Dictionary) -> Result<PdfRect, SkipReason> {
    let attributes = dict.get(b"A").map_err(|_| SkipReason::MissingGeometry)?;
    let bbox = match graph.resolve(attributes) {
        Object::Dictionary(attrs) => attrs.get(b"BBox").ok(),
        Object::Array(items) => items.iter().find_map(|item| match graph.resolve(item) {
            Object::Dictionary(attrs) => attrs.get(b"BBox").ok(),
            _ => None,
        }),
        _ => None,
    }
    .ok_or(SkipReason::MissingGeometry)?;

    match graph.resolve(bbox) {
        Object::Array(values) => {
            let values: Vec<Object> = values.iter().map(|v| graph.resolve(v).clone()).collect();
            PdfRect::from_array(&values).ok_or(SkipReason::MalformedGeometry)
        }
        _ => Err(SkipReason::MalformedGeometry),
    }
}
