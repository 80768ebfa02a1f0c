use super::Extractor;

/// Markup characters removed from a line before it is split into tokens
pub const MARKUP: [char; 3] = ['"', '/', '>'];

/// Takes the final whitespace-delimited token of a line once markup is stripped. Relies on
/// the sense being the last thing on the line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LastToken;

impl Extractor for LastToken {
    fn token(&self, line: &str) -> Option<String> {
        // Quotes become spaces so `senseid="phone"` splits cleanly
        let cleaned: String = line
            .chars()
            .filter_map(|c| match c {
                '"' => Some(' '),
                c if MARKUP.contains(&c) => None,
                c => Some(c),
            })
            .collect();

        cleaned.split_whitespace().last().map(str::to_string)
    }
}
