//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// Coverage data for a single glossary file.
pub struct GlossaryCoverage {
    /// File name as given on the command line.
    pub file: String,
    /// The glossary's `$locale` tag.
    pub locale: String,
    /// Number of source keys present in this glossary.
    pub translated: usize,
    /// Source keys missing from this glossary.
    pub missing: Vec<String>,
    /// Keys present here but absent from the source.
    pub extra: Vec<String>,
}

/// Format coverage data as an ASCII table.
pub fn format_coverage_table(source_count: usize, coverage: &[GlossaryCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["File", "Locale", "Coverage", "Missing", "Extra"]);

    for entry in coverage {
        table.add_row(vec![
            entry.file.clone(),
            entry.locale.clone(),
            format!("{}/{}", entry.translated, source_count),
            entry.missing.len().to_string(),
            entry.extra.len().to_string(),
        ]);
    }

    table
}
