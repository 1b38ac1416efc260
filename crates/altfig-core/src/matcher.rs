//! Structure-element matching over the whole object graph.
//!
//! A figure is any indirect dictionary whose `/S` entry is the name
//! `/Figure`, stored directly or behind an indirect reference. Everything
//! else, including streams, arrays, and dictionaries without `/S`, is
//! silently not a figure.

use lopdf::{Dictionary, Object, ObjectId};

use crate::graph::ObjectGraph;

/// Structure type that marks a figure element.
pub const FIGURE: &[u8] = b"Figure";

/// The `/S` structure type of a dictionary, if present and a name.
pub fn structure_type<'a>(graph: &'a ObjectGraph, dict: &'a Dictionary) -> Option<&'a [u8]> {
    match graph.resolve(dict.get(b"S").ok()?) {
        Object::Name(name) => Some(name.as_slice()),
        _ => None,
    }
}

/// The object as a figure dictionary, or `None` when it is not one.
pub fn as_figure<'a>(graph: &'a ObjectGraph, object: &'a Object) -> Option<&'a Dictionary> {
    match object {
        Object::Dictionary(dict) if structure_type(graph, dict) == Some(FIGURE) => Some(dict),
        _ => None,
    }
}

pub fn is_figure(graph: &ObjectGraph, object: &Object) -> bool {
    as_figure(graph, object).is_some()
}

/// Every figure structure element in the graph, in graph iteration order.
pub fn figures(graph: &ObjectGraph) -> impl Iterator<Item = (ObjectId, &Dictionary)> {
    graph
        .objects()
        .filter_map(|(id, object)| as_figure(graph, object).map(|dict| (id, dict)))
}

/// Object ids of every figure, collected so the graph can be borrowed mutably afterwards.
pub fn figure_ids(graph: &ObjectGraph) -> Vec<ObjectId> {
    figures(graph).map(|(id, _)| id).collect()
}
