use std::ops::Range;
use crate::CharacterRecord;


/// A character record matching the current query
///
/// The matched span is kept as a byte range of the name. The name itself is never altered, views
/// use [Suggestion::segments()] to style the match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub id: String,
    pub name: String,
    span: Range<usize>,
}

/// Part of a suggestion name, either matched or not
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub is_match: bool,
}

impl Suggestion {
    /// Plain text of the suggestion, without highlight
    pub fn text(&self) -> &str {
        &self.name
    }

    /// Byte range of the highlighted span in the name
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Text of the highlighted span, with case preserved from the name
    pub fn matched_text(&self) -> &str {
        &self.name[self.span.clone()]
    }

    /// Iterate on non-empty segments, in order
    pub fn segments(&self) -> impl Iterator<Item=Segment<'_>> {
        let Range { start, end } = self.span;
        [
            Segment { text: &self.name[..start], is_match: false },
            Segment { text: &self.name[start..end], is_match: true },
            Segment { text: &self.name[end..], is_match: false },
        ]
        .into_iter()
        .filter(|s| !s.text.is_empty())
    }
}


/// Lower-case a string, char per char
///
/// Return the folded string and, for each char of `s`, its offset in the folded string and in `s`.
/// Per-char conversion is used for both query and names so that offsets can be mapped back.
/// Capital sigma is the only context-dependent case: it folds to a final sigma at the end of a
/// word, like `str::to_lowercase()` does.
fn fold_with_bounds(s: &str) -> (String, Vec<(usize, usize)>) {
    let mut folded = String::with_capacity(s.len());
    let mut bounds = Vec::<(usize, usize)>::with_capacity(s.len());
    let mut prev: Option<char> = None;
    let mut chars = s.char_indices().peekable();
    while let Some((pos, c)) = chars.next() {
        bounds.push((folded.len(), pos));
        let next = chars.peek().map(|(_, c)| *c);
        if c == 'Σ' && prev.is_some_and(char::is_alphabetic) && !next.is_some_and(char::is_alphabetic) {
            folded.push('ς');
        } else {
            folded.extend(c.to_lowercase());
        }
        prev = Some(c);
    }
    (folded, bounds)
}

fn fold_case(s: &str) -> String {
    fold_with_bounds(s).0
}

/// Find `needle` (already folded) in `name`, return the span in `name`
fn locate(name: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() {
        return None;
    }

    let (folded, bounds) = fold_with_bounds(name);
    let start = folded.find(needle)?;
    let end = start + needle.len();
    // A char may fold to several chars: widen to whole chars of the original name
    let ibegin = bounds.partition_point(|(f, _)| *f <= start) - 1;
    let iend = bounds.partition_point(|(f, _)| *f < end);
    let begin = bounds[ibegin].1;
    let end = bounds.get(iend).map_or(name.len(), |b| b.1);
    Some(begin..end)
}

/// Return the span of the first case-insensitive occurrence of `query` in `name`
///
/// ```
/// # use charsearch_core::find_match;
/// assert_eq!(find_match("Morty Smith", "SMI"), Some(6..9));
/// assert_eq!(find_match("Morty Smith", "rick"), None);
/// assert_eq!(find_match("Morty Smith", ""), None);
/// ```
pub fn find_match(name: &str, query: &str) -> Option<Range<usize>> {
    locate(name, &fold_case(query))
}

/// Keep records whose name contains `query`, highlight the first occurrence
///
/// Matching is case-insensitive and input order is preserved. An empty query matches nothing.
pub fn filter_and_highlight(records: &[CharacterRecord], query: &str) -> Vec<Suggestion> {
    let needle = fold_case(query);
    if needle.is_empty() {
        return Vec::new();
    }
    records
        .iter()
        .filter_map(|record| {
            let span = locate(&record.name, &needle)?;
            Some(Suggestion {
                id: record.id.clone(),
                name: record.name.clone(),
                span,
            })
        })
        .collect()
}
