use super::company;
use super::vocabulary::{PREFIXES, SUFFIXES};
use super::NameRecord;
use compact_str::CompactString;
use smallvec::SmallVec;

type Tokens<'a> = SmallVec<[&'a str; 7]>;

fn join(tokens: &[&str]) -> Option<CompactString> {
    if tokens.is_empty() {
        None
    } else {
        Some(CompactString::from(tokens.join(" ")))
    }
}

pub fn parse(name: &str, last_name_only: bool) -> NameRecord {
    let name = name.trim();
    let tokens: Tokens = name.split_whitespace().collect();
    if tokens.is_empty() {
        return NameRecord::default();
    }

    if company::is_company(name) {
        return parse_company(&tokens);
    }

    let (prefix, words) = strip_prefix(&tokens);
    let (words, suffix) = strip_suffix(words);

    let (first_name, last_name) = if last_name_only {
        (None, join(words))
    } else {
        match words {
            [] => (None, None),
            [only] if prefix.is_some() => {
                // "Dr. Wong": a title with one name addresses the surname
                (None, Some(CompactString::from(*only)))
            }
            [only] => (Some(CompactString::from(*only)), None),
            [first, rest @ ..] => (Some(CompactString::from(*first)), join(rest)),
        }
    };

    NameRecord {
        prefix: prefix.map(CompactString::from),
        first_name,
        last_name,
        suffix: suffix.map(CompactString::from),
    }
}

fn parse_company(tokens: &[&str]) -> NameRecord {
    let (words, suffix) = strip_suffix(tokens);

    NameRecord {
        prefix: None,
        first_name: None,
        last_name: join(words),
        suffix: suffix.map(CompactString::from),
    }
}

// Preserve parseability: don't strip an apparent title that is the whole
// of the name (e.g. "Dr" on its own)
fn strip_prefix<'t, 'a>(tokens: &'t [&'a str]) -> (Option<String>, &'t [&'a str]) {
    match PREFIXES.split_leading(tokens) {
        (Some(_), []) => (None, tokens),
        split => split,
    }
}

// Likewise for suffixes (e.g. "Jr" or "V" on their own)
fn strip_suffix<'t, 'a>(tokens: &'t [&'a str]) -> (&'t [&'a str], Option<String>) {
    match SUFFIXES.split_trailing(tokens) {
        ([], Some(_)) => (tokens, None),
        split => split,
    }
}
