//! Fixed vocabularies of honorific prefixes and name suffixes, and the
//! extraction of their entries from either end of a token list.

use tracing::trace;

static HONORIFIC_PREFIXES: phf::OrderedSet<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/honorific_prefixes.rs"));

static NAME_SUFFIXES: phf::OrderedSet<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/suffixes.rs"));

static SUFFIXES_BY_LOWERCASE: phf::Map<&'static str, &'static str> =
    include!(concat!(env!("OUT_DIR"), "/suffixes_by_lowercase.rs"));

/// An ordered list of entries, each one or more words ("Dr", "The Hon").
///
/// Entries are tried in order, and multi-word entries come first, so the
/// longest applicable entry is the one extracted.
pub struct Vocabulary {
    name: &'static str,
    entries: &'static phf::OrderedSet<&'static str>,
}

/// Honorific prefixes such as "Mr" and "The Hon".
pub static PREFIXES: Vocabulary = Vocabulary {
    name: "prefix",
    entries: &HONORIFIC_PREFIXES,
};

/// Generational, professional and legal-entity suffixes such as "Jr",
/// "PhD" and "LLC".
pub static SUFFIXES: Vocabulary = Vocabulary {
    name: "suffix",
    entries: &NAME_SUFFIXES,
};

impl Vocabulary {
    pub fn entries(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().copied()
    }

    /// Whether `word` is an entry, ignoring case and periods.
    pub fn contains(&self, word: &str) -> bool {
        self.entries().any(|entry| span_matches(entry, &[word]))
    }

    fn match_len(&self, tokens: &[&str], leading: bool) -> Option<(&'static str, usize)> {
        self.entries().find_map(|entry| {
            let len = entry.split_whitespace().count();
            if len == 0 || len > tokens.len() {
                return None;
            }
            let span = if leading {
                &tokens[..len]
            } else {
                &tokens[tokens.len() - len..]
            };
            span_matches(entry, span).then_some((entry, len))
        })
    }

    /// Splits an entry off the front of `tokens`, returning the consumed
    /// tokens joined by single spaces (as written, periods included) and
    /// the tokens that remain.
    pub fn split_leading<'t, 'a>(&self, tokens: &'t [&'a str]) -> (Option<String>, &'t [&'a str]) {
        match self.match_len(tokens, true) {
            Some((entry, len)) => {
                let (span, rest) = tokens.split_at(len);
                trace!(entry, vocabulary = self.name, "extracted leading entry");
                (Some(span.join(" ")), rest)
            }
            None => (None, tokens),
        }
    }

    /// Like [`Vocabulary::split_leading`], but from the back of `tokens`.
    pub fn split_trailing<'t, 'a>(&self, tokens: &'t [&'a str]) -> (&'t [&'a str], Option<String>) {
        match self.match_len(tokens, false) {
            Some((entry, len)) => {
                let (rest, span) = tokens.split_at(tokens.len() - len);
                trace!(entry, vocabulary = self.name, "extracted trailing entry");
                (rest, Some(span.join(" ")))
            }
            None => (tokens, None),
        }
    }
}

fn span_matches(entry: &str, span: &[&str]) -> bool {
    let candidate = span.join(" ").replace('.', "");
    candidate.eq_ignore_ascii_case(entry)
}

/// The vocabulary spelling of a suffix, ignoring case and one trailing
/// period, e.g. `"PHD"` gives `"PhD"`.
pub fn canonical_suffix(word: &str) -> Option<&'static str> {
    let word = word.strip_suffix('.').unwrap_or(word);
    SUFFIXES_BY_LOWERCASE.get(word.to_lowercase().as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_word_entries_first() {
        let entries: Vec<_> = PREFIXES.entries().collect();
        assert_eq!("The Hon", entries[0]);
        assert_eq!(&["Mr", "Mrs", "Ms", "Miss", "Rev"], &entries[1..6]);
    }

    #[test]
    fn leading_prefix() {
        let tokens = ["Dr.", "JD", "Wong"];
        let (prefix, rest) = PREFIXES.split_leading(&tokens);
        assert_eq!(Some("Dr.".to_string()), prefix);
        assert_eq!(&["JD", "Wong"], rest);
    }

    #[test]
    fn leading_multi_word_prefix() {
        let tokens = ["THE", "HON.", "Jonna", "McLaughlin"];
        let (prefix, rest) = PREFIXES.split_leading(&tokens);
        assert_eq!(Some("THE HON.".to_string()), prefix);
        assert_eq!(&["Jonna", "McLaughlin"], rest);
    }

    #[test]
    fn no_leading_prefix() {
        let tokens = ["Mister", "Wong"];
        let (prefix, rest) = PREFIXES.split_leading(&tokens);
        assert_eq!(None, prefix);
        assert_eq!(&tokens, rest);
    }

    #[test]
    fn leading_prefix_only_at_front() {
        let tokens = ["John", "Dr"];
        assert_eq!(None, PREFIXES.split_leading(&tokens).0);
    }

    #[test]
    fn trailing_suffix() {
        let tokens = ["Jonna", "McLaughlin", "Jr."];
        let (rest, suffix) = SUFFIXES.split_trailing(&tokens);
        assert_eq!(&["Jonna", "McLaughlin"], rest);
        assert_eq!(Some("Jr.".to_string()), suffix);
    }

    #[test]
    fn trailing_suffix_with_inner_periods() {
        let tokens = ["Jane", "Doe", "Ph.D."];
        let (rest, suffix) = SUFFIXES.split_trailing(&tokens);
        assert_eq!(&["Jane", "Doe"], rest);
        assert_eq!(Some("Ph.D.".to_string()), suffix);
    }

    #[test]
    fn empty_tokens() {
        let tokens: [&str; 0] = [];
        assert_eq!((None, &tokens[..]), PREFIXES.split_leading(&tokens));
        assert_eq!((&tokens[..], None), SUFFIXES.split_trailing(&tokens));
    }

    #[test]
    fn membership() {
        assert!(SUFFIXES.contains("gmbh."));
        assert!(PREFIXES.contains("DR"));
        assert!(!PREFIXES.contains("The"));
    }

    #[test]
    fn canonical_suffixes() {
        assert_eq!(Some("PhD"), canonical_suffix("PHD"));
        assert_eq!(Some("GmbH"), canonical_suffix("GMBH."));
        assert_eq!(Some("Esq"), canonical_suffix("esq."));
        assert_eq!(None, canonical_suffix("Esq.."));
        assert_eq!(None, canonical_suffix("Esquire"));
    }
}
