use std::path::Path;

use altfig_core::{
    AltTextMap, alt_text_output_path, default_alt_text_path, inject_alt_text, write_pdf,
};

use crate::shared::{fail, load_graph, read_pdf};

pub fn run(file: &Path, alt_text: Option<&Path>, output: Option<&Path>) -> Result<(), i32> {
    let bytes = read_pdf(file)?;
    let mut graph = load_graph(&bytes)?;

    let map_path = alt_text
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_alt_text_path(file));
    let map = AltTextMap::from_path(&map_path).map_err(|e| {
        eprintln!("Error: could not use alt text from {}", map_path.display());
        fail(e)
    })?;

    let report = inject_alt_text(&mut graph, &map);

    let out_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| alt_text_output_path(file));
    // Nothing matched: hand back the input untouched rather than a re-encoded copy
    let written = if report.is_unchanged() {
        write_pdf(&out_path, &bytes)
    } else {
        graph.save(&out_path)
    };
    written.map_err(fail)?;

    println!("Bytes successfully written to {}", out_path.display());
    Ok(())
}
