#[derive(Debug)]
enum CaseMapping {
    Empty,
    Single(char),
    Double(char, char),
    Triple(char, char, char),
}

impl CaseMapping {
    #[inline]
    fn lowercase(c: char) -> CaseMapping {
        let [x, y] = unicode_case_mapping::to_lowercase(c);
        Self::from_code_points(x, y, 0)
    }

    #[inline]
    fn titlecase(c: char) -> CaseMapping {
        let [x, y, z] = unicode_case_mapping::to_titlecase(c);
        Self::from_code_points(x, y, z)
    }

    // Zero marks the end of the mapping
    #[inline]
    fn from_code_points(x: u32, y: u32, z: u32) -> CaseMapping {
        let mut chars = [x, y, z]
            .into_iter()
            .take_while(|&c| c > 0)
            .map_while(char::from_u32);

        match (chars.next(), chars.next(), chars.next()) {
            (Some(x), Some(y), Some(z)) => CaseMapping::Triple(x, y, z),
            (Some(x), Some(y), None) => CaseMapping::Double(x, y),
            (Some(x), None, _) => CaseMapping::Single(x),
            _ => CaseMapping::Empty,
        }
    }
}

impl Iterator for CaseMapping {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        match *self {
            CaseMapping::Triple(x, y, z) => {
                *self = CaseMapping::Double(y, z);
                Some(x)
            }
            CaseMapping::Double(x, y) => {
                *self = CaseMapping::Single(y);
                Some(x)
            }
            CaseMapping::Single(x) => {
                *self = CaseMapping::Empty;
                Some(x)
            }
            CaseMapping::Empty => None,
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = match self {
            CaseMapping::Triple(_, _, _) => 3,
            CaseMapping::Double(_, _) => 2,
            CaseMapping::Single(_) => 1,
            CaseMapping::Empty => 0,
        };
        (size, Some(size))
    }
}

impl ExactSizeIterator for CaseMapping {}

#[inline]
fn push_mapped(result: &mut String, c: char, mapped: CaseMapping) {
    if matches!(mapped, CaseMapping::Empty) {
        // No mapping means the character is its own image
        result.push(c);
    } else {
        result.extend(mapped);
    }
}

/// Titlecases the first character and lowercases the rest.
///
/// Lowercasing is done a character at a time, without the contextual
/// rules of `str::to_lowercase` (so a word-final capital sigma becomes
/// `σ`, not `ς`), which keeps the result stable under repeated
/// application.
pub fn capitalize(word: &str) -> String {
    if word.is_ascii() {
        let bytes = word.as_bytes();
        let mut result = String::with_capacity(word.len());
        if let Some((first, rest)) = bytes.split_first() {
            result.push(first.to_ascii_uppercase() as char);
            result.extend(rest.iter().map(|c| c.to_ascii_lowercase() as char));
        }
        return result;
    }

    let mut result = String::with_capacity(word.len());
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        push_mapped(&mut result, first, CaseMapping::titlecase(first));
    }
    for c in chars {
        push_mapped(&mut result, c, CaseMapping::lowercase(c));
    }
    result
}

/// Lowercases every character, with the same per-character rules as
/// [`capitalize`].
pub fn lowercase(word: &str) -> String {
    if word.is_ascii() {
        return word.to_ascii_lowercase();
    }

    let mut result = String::with_capacity(word.len());
    for c in word.chars() {
        push_mapped(&mut result, c, CaseMapping::lowercase(c));
    }
    result
}

/// Capitalizes each hyphen-delimited piece of `word` on its own.
pub fn capitalize_hyphenated(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    for (i, piece) in word.split('-').enumerate() {
        if i > 0 {
            result.push('-');
        }
        result.push_str(&capitalize(piece));
    }
    result
}

/// Capitalizes the first `head_chars` characters as a unit, then the
/// remainder as a separate unit, e.g. `("o'brien", 2)` gives `O'Brien`.
pub fn capitalize_after(word: &str, head_chars: usize) -> String {
    let split = word
        .char_indices()
        .nth(head_chars)
        .map_or(word.len(), |(i, _)| i);
    let (head, tail) = word.split_at(split);

    let mut result = capitalize(head);
    result.push_str(&capitalize(tail));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalization() {
        assert_eq!("A", capitalize("a"));
        assert_eq!("Aa", capitalize("aa"));
        assert_eq!("Aa", capitalize("AA"));
        assert_eq!("Aa-bb", capitalize("AA-BB"));
        assert_eq!("", capitalize(""));
    }

    #[test]
    fn capitalization_non_ascii() {
        assert_eq!("Groß", capitalize("GROß"));
        assert_eq!("Ægir", capitalize("ÆGIR"));
        assert_eq!("Θεοδωροσ", capitalize("ΘΕΟΔΩΡΟΣ"));
        assert_eq!("Ｔａｒｏ", capitalize("Ｔａｒｏ"));
    }

    #[test]
    fn lowercasing() {
        assert_eq!("van", lowercase("VAN"));
        assert_eq!("δσ", lowercase("ΔΣ"));
    }

    #[test]
    fn hyphenated() {
        assert_eq!("Aa-Bb", capitalize_hyphenated("aa-bb"));
        assert_eq!("Aa-Bb", capitalize_hyphenated("AA-BB"));
        assert_eq!("Dermott-", capitalize_hyphenated("DERMOTT-"));
    }

    #[test]
    fn capitalized_head() {
        assert_eq!("O'Brien", capitalize_after("O'BRIEN", 2));
        assert_eq!("Dell'Aquila", capitalize_after("dell'aquila", 5));
        assert_eq!("DeVito", capitalize_after("DEVITO", 2));
        assert_eq!("De", capitalize_after("de", 2));
        assert_eq!("D", capitalize_after("d", 2));
    }
}
