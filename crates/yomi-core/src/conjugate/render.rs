use crate::morph::WordInfo;

use super::ConjugationTable;

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render `table` as a collapsible card block on a single line (card
/// fields are stored one per CSV cell). An empty table renders as "".
pub fn render_html(word: &str, info: &WordInfo, table: &ConjugationTable) -> String {
    if table.is_empty() {
        return String::new();
    }

    let mut out = String::from(r#"<details class="conjugation-section">"#);
    out.push_str(&format!(
        "<summary>Conjugations for {} ({})</summary>",
        escape_html(word),
        info.paradigm.japanese_label()
    ));
    out.push_str(r#"<table class="conjugation-table">"#);
    for section in &table.sections {
        out.push_str(&format!(
            r#"<tr><th colspan="2">{}</th></tr>"#,
            section.section.label()
        ));
        for c in &section.forms {
            out.push_str(&format!(
                "<tr><td>{} {}</td><td>{}</td></tr>",
                c.form.label(),
                c.form.japanese_label(),
                escape_html(&c.value)
            ));
        }
    }
    out.push_str("</table></details>");
    out
}
