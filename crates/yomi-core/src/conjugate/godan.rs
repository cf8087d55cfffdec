/// Substitutions for one godan row, keyed by the dictionary-form terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GodanEndingRow {
    pub terminal: char,
    pub a: char,
    pub i: char,
    pub e: char,
    pub o: char,
    /// Te-form ending with its sound change (書く → 書いて).
    pub te: &'static str,
    /// Past ending with its sound change (書く → 書いた).
    pub ta: &'static str,
}

const fn row(
    terminal: char,
    grades: [char; 4],
    te: &'static str,
    ta: &'static str,
) -> GodanEndingRow {
    GodanEndingRow {
        terminal,
        a: grades[0],
        i: grades[1],
        e: grades[2],
        o: grades[3],
        te,
        ta,
    }
}

/// Every godan row. 行く (行って) and 問う (問うて) are irregular and not
/// covered.
pub const GODAN_ENDINGS: [GodanEndingRow; 9] = [
    row('う', ['わ', 'い', 'え', 'お'], "って", "った"),
    row('く', ['か', 'き', 'け', 'こ'], "いて", "いた"),
    row('ぐ', ['が', 'ぎ', 'げ', 'ご'], "いで", "いだ"),
    row('す', ['さ', 'し', 'せ', 'そ'], "して", "した"),
    row('つ', ['た', 'ち', 'て', 'と'], "って", "った"),
    row('ぬ', ['な', 'に', 'ね', 'の'], "んで", "んだ"),
    row('ぶ', ['ば', 'び', 'べ', 'ぼ'], "んで", "んだ"),
    row('む', ['ま', 'み', 'め', 'も'], "んで", "んだ"),
    row('る', ['ら', 'り', 'れ', 'ろ'], "って", "った"),
];

pub fn lookup(terminal: char) -> Option<&'static GodanEndingRow> {
    GODAN_ENDINGS.iter().find(|r| r.terminal == terminal)
}

pub fn is_godan_terminal(c: char) -> bool {
    lookup(c).is_some()
}
