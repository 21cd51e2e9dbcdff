/// Restrict text to what the PDF's built-in fonts can encode.
///
/// Typographic dashes and quotes become their ASCII forms, line breaks and
/// tabs become spaces, and anything else outside Latin-1 is dropped. Lossy.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\u{2013}' | '\u{2014}' => Some('-'),
            '\u{2018}' | '\u{2019}' => Some('\''),
            '\u{201C}' | '\u{201D}' => Some('"'),
            '\n' | '\r' | '\t' => Some(' '),
            c if u32::from(c) <= 0xFF => Some(c),
            _ => None,
        })
        .collect()
}
