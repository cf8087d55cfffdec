use clap::ValueEnum;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use yomi_core::conjugate::{render_html, synthesize, ConjugationTable};
use yomi_core::morph::{classify, FeatureLayout, TaggerToken, WordInfo};

/// Dictionary the `--features` string comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    Unidic,
    Ipadic,
}

impl From<Layout> for FeatureLayout {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Unidic => FeatureLayout::UniDic,
            Layout::Ipadic => FeatureLayout::Ipadic,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

#[derive(Serialize)]
struct ConjugateReport<'a> {
    word: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<&'a TaggerToken>,
    info: &'a WordInfo,
    table: &'a ConjugationTable,
}

pub fn conjugate(word: &str, features: Option<&str>, layout: Layout, format: OutputFormat) {
    let token = features.map(|f| TaggerToken::from_features(word, f, layout.into()));
    let info = classify(word, token.as_ref());
    let table = synthesize(&info);

    match format {
        OutputFormat::Json => {
            let report = ConjugateReport {
                word,
                token: token.as_ref(),
                info: &info,
                table: &table,
            };
            let json = die!(serde_json::to_string_pretty(&report), "Error: {}");
            println!("{json}");
        }
        OutputFormat::Html => println!("{}", render_html(word, &info, &table)),
        OutputFormat::Text => print!("{}", format_text(word, &info, &table)),
    }
}

const LABEL_WIDTH: usize = 30;

/// Human-readable table with labels padded to a common display width.
pub fn format_text(word: &str, info: &WordInfo, table: &ConjugationTable) -> String {
    let mut out = format!(
        "{word}  {} (base={}, stem={})\n",
        info.paradigm.japanese_label(),
        info.base_form,
        if info.stem.is_empty() { "-" } else { info.stem.as_str() },
    );
    if table.is_empty() {
        out.push_str("  (no conjugations)\n");
        return out;
    }

    for section in &table.sections {
        out.push_str(&format!("\n  [{}]\n", section.section.label()));
        for c in &section.forms {
            let label = format!("{} {}", c.form.label(), c.form.japanese_label());
            let width = UnicodeWidthStr::width(label.as_str());
            let padded = if width < LABEL_WIDTH {
                format!("{label}{}", " ".repeat(LABEL_WIDTH - width))
            } else {
                label
            };
            out.push_str(&format!("    {padded} {}\n", c.value));
        }
    }
    out
}
