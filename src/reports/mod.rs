use std::fs;
use std::path::Path;

use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use strum_macros::{Display, EnumString};
use tracing::info;

use lego::api::{ReportSet, WordCountReport, ZipfReport};
use lego::error::{LegoError, LegoResult};

/// Supported result file formats, dispatched on extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SaveFormat {
    Txt,
    Json,
}

impl SaveFormat {
    fn from_path(path: &str) -> LegoResult<Self> {
        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        ext.parse().map_err(|_| {
            LegoError::Config(format!(
                "Results may only be saved as TXT or JSON, got '{}'",
                path
            ))
        })
    }
}

fn zipf_table(reports: &[ZipfReport]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Corpus").add_attribute(Attribute::Bold),
        Cell::new("Words (N)"),
        Cell::new("Ranks"),
        Cell::new("s"),
        Cell::new("Chi2").fg(Color::Cyan),
    ]);

    for i in 1..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for report in reports {
        table.add_row(vec![
            Cell::new(&report.name).add_attribute(Attribute::Bold),
            Cell::new(report.word_length),
            Cell::new(report.ranks),
            Cell::new(report.zipf_const),
            Cell::new(format!("{:.2}", report.chi2)).fg(Color::Cyan),
        ]);
    }
    table
}

fn top_words_table(report: &WordCountReport) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Word").add_attribute(Attribute::Bold),
        Cell::new("Count"),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for entry in &report.top_words {
        table.add_row(vec![
            Cell::new(&entry.word),
            Cell::new(entry.count),
        ]);
    }
    table
}

fn legomena_table(reports: &[WordCountReport]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Corpus").add_attribute(Attribute::Bold),
        Cell::new("Hapax"),
        Cell::new("Dis"),
        Cell::new("Tris"),
        Cell::new("Tetrakis"),
        Cell::new("% Hapax").fg(Color::Cyan),
    ]);

    for i in 1..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for report in reports {
        let ratio = &report.legomena_ratio;
        table.add_row(vec![
            Cell::new(&report.name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", ratio.hapax)),
            Cell::new(format!("{:.2}", ratio.dis)),
            Cell::new(format!("{:.2}", ratio.tris)),
            Cell::new(format!("{:.2}", ratio.tetrakis)),
            Cell::new(format!("{:.2}", report.percent_hapax_legomena)).fg(Color::Cyan),
        ]);
    }
    table
}

pub fn print_zipf(reports: &[ZipfReport]) {
    println!("\n{}", zipf_table(reports));
}

pub fn print_wordcount(reports: &[WordCountReport]) {
    for report in reports {
        println!("\nTop words: {}", report.name);
        println!("{}", top_words_table(report));
    }
    println!("\n{}", legomena_table(reports));
}

fn render_wordcount(reports: &[WordCountReport]) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str(&format!("Top words: {}\n", report.name));
        out.push_str(&top_words_table(report).to_string());
        out.push('\n');
    }
    out.push_str(&legomena_table(reports).to_string());
    out.push('\n');
    out
}

/// Saves Zipf results to `path`, JSON or rendered tables by extension.
/// The full proportion sequences are carried by JSON saves only.
pub fn save_zipf(path: &str, results: &ReportSet<ZipfReport>) -> LegoResult<()> {
    let content = match SaveFormat::from_path(path)? {
        SaveFormat::Json => serde_json::to_string(results)?,
        SaveFormat::Txt => format!("{}\n", zipf_table(results.items())),
    };
    fs::write(path, content)?;
    info!("💾 saved results to {}", path);
    Ok(())
}

pub fn save_wordcount(path: &str, results: &ReportSet<WordCountReport>) -> LegoResult<()> {
    let content = match SaveFormat::from_path(path)? {
        SaveFormat::Json => serde_json::to_string(results)?,
        SaveFormat::Txt => render_wordcount(results.items()),
    };
    fs::write(path, content)?;
    info!("💾 saved results to {}", path);
    Ok(())
}
