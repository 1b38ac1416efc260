use std::path::Path;

use altfig_core::extract_figure_boxes;

use crate::shared::{fail, load_graph, read_pdf};

pub fn run(file: &Path, height: Option<f64>) -> Result<(), i32> {
    let bytes = read_pdf(file)?;
    let graph = load_graph(&bytes)?;

    let height = match height {
        Some(h) => h,
        None => graph.first_page_height().ok_or_else(|| {
            eprintln!("Error: could not read the first page's MediaBox; pass HEIGHT explicitly");
            1
        })?,
    };

    let report = extract_figure_boxes(&graph, height).map_err(fail)?;
    println!("{}", report.to_pipe_line());
    Ok(())
}
