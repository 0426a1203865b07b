//! Capitalization of parsed name fields.
//!
//! Each field is split into pieces on whitespace and after hyphens, each
//! piece is capitalized on its own, and the pieces are joined back up.
//! Surname pieces go through an ordered list of rules where the first
//! applicable rule decides the result.

use super::case::{capitalize, capitalize_after, lowercase};
use super::gaelic;
use super::vocabulary::canonical_suffix;
use super::NameRecord;
use compact_str::CompactString;
use phf::phf_set;
use regex::Regex;
use smallvec::SmallVec;
use std::sync::LazyLock;
use tracing::trace;

// Lowercase before an article like "der" ("van der Beek"), otherwise
// capitalized ("Van Caelenbergh")
static ARTICLES: phf::Set<&'static str> = phf_set! {
    "van", "von", "te", "ter", "de",
};

// Lowercase unless they end the name
static PARTICLES: phf::Set<&'static str> = phf_set! {
    "der", "des", "del", "dei", "da", "di", "du", "van", "von", "vom",
    "ten", "ter", "la", "les", "y", "and", "zu", "dello", "della",
};

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid pattern '{}': {}", pattern, e))
}

static APOSTROPHE_NAME: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^[od]'[[:word:]]"));
static DELL_NAME: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^dell'[[:word:]]"));
static DU_NAME: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^dub[aeiou]"));
static DE_NAME: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^de[bfghjlmnpvw][aeioulr]"));
// Names that only look like "De" names ("Denesik", "Delia")
static DE_NAME_EXCEPTION: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^(?:sik|a)[-,]?$"));
static VON_NAME: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^vonr"));

struct Piece<'a> {
    word: &'a str,
    lower: String,
    next: Option<&'a str>,
}

type Rule = fn(&Piece) -> Option<String>;

static SURNAME_RULES: [(&str, Rule); 6] = [
    ("gaelic", gaelic_surname),
    ("article", article),
    ("particle", particle),
    ("dell'", dell_name),
    ("two-letter head", two_letter_head),
    ("von", von_name),
];

fn gaelic_surname(piece: &Piece) -> Option<String> {
    gaelic::matching_rule(piece.word)?;
    Some(gaelic::format_word(piece.word).into_owned())
}

fn article(piece: &Piece) -> Option<String> {
    if !ARTICLES.contains(piece.lower.as_str()) {
        return None;
    }
    let before_der = piece.next.is_some_and(|next| lowercase(next).contains("der"));
    Some(if before_der {
        piece.lower.clone()
    } else {
        capitalize(piece.word)
    })
}

fn particle(piece: &Piece) -> Option<String> {
    if !PARTICLES.contains(piece.lower.as_str()) {
        return None;
    }
    Some(if piece.next.is_some() {
        piece.lower.clone()
    } else {
        capitalize(piece.word)
    })
}

fn dell_name(piece: &Piece) -> Option<String> {
    DELL_NAME
        .is_match(piece.word)
        .then(|| capitalize_after(piece.word, 5))
}

fn is_de_name(word: &str) -> bool {
    DE_NAME
        .find(word)
        .is_some_and(|m| !DE_NAME_EXCEPTION.is_match(&word[m.end()..]))
}

fn two_letter_head(piece: &Piece) -> Option<String> {
    let word = piece.word;
    let applies = DU_NAME.is_match(word) || is_de_name(word) || APOSTROPHE_NAME.is_match(word);
    applies.then(|| capitalize_after(word, 2))
}

fn von_name(piece: &Piece) -> Option<String> {
    VON_NAME
        .is_match(piece.word)
        .then(|| capitalize_after(piece.word, 3))
}

fn format_surname_piece(piece: &Piece) -> String {
    for (name, rule) in SURNAME_RULES.iter() {
        if let Some(formatted) = rule(piece) {
            trace!(word = piece.word, rule = name, "capitalized surname piece");
            return formatted;
        }
    }
    capitalize(piece.word)
}

fn format_given_name_piece(word: &str) -> String {
    if APOSTROPHE_NAME.is_match(word) {
        capitalize_after(word, 2)
    } else {
        capitalize(word)
    }
}

// Splits on whitespace, and after (not before) hyphens, so each hyphen
// stays attached to the piece in front of it
fn pieces(name: &str) -> SmallVec<[&str; 4]> {
    name.split_whitespace()
        .flat_map(|word| word.split_inclusive('-'))
        .collect()
}

// Reassembles the formatted pieces of `name`: pieces of one word are
// concatenated, words are joined with single spaces
fn join_pieces<I>(name: &str, formatted: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut formatted = formatted.into_iter();
    let mut result = String::with_capacity(name.len());
    for (i, word) in name.split_whitespace().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        for piece in formatted.by_ref().take(word.split_inclusive('-').count()) {
            result.push_str(&piece);
        }
    }
    result
}

pub fn format_given_name(name: &str) -> String {
    join_pieces(name, pieces(name).iter().map(|w| format_given_name_piece(w)))
}

pub fn format_surname(name: &str) -> String {
    let pieces = pieces(name);
    let formatted = pieces.iter().enumerate().map(|(i, &word)| {
        format_surname_piece(&Piece {
            word,
            lower: lowercase(word),
            next: pieces.get(i + 1).copied(),
        })
    });
    join_pieces(name, formatted)
}

pub fn format_prefix(prefix: &str) -> String {
    prefix
        .split_whitespace()
        .map(capitalize)
        .collect::<SmallVec<[String; 2]>>()
        .join(" ")
}

/// Known suffixes take their vocabulary spelling; anything else is assumed
/// to be an acronym unless it ends with a period.
pub fn format_suffix(suffix: &str) -> String {
    let has_period = suffix.ends_with('.');
    match canonical_suffix(suffix) {
        Some(canonical) if has_period => format!("{}.", canonical),
        Some(canonical) => canonical.to_string(),
        None if has_period => capitalize(suffix),
        None => suffix.to_uppercase(),
    }
}

pub fn format_record(record: &NameRecord) -> NameRecord {
    let format_field = |field: &Option<CompactString>, format: fn(&str) -> String| {
        field.as_deref().map(|s| CompactString::from(format(s)))
    };

    NameRecord {
        prefix: format_field(&record.prefix, format_prefix),
        first_name: format_field(&record.first_name, format_given_name),
        last_name: format_field(&record.last_name, format_surname),
        suffix: format_field(&record.suffix, format_suffix),
    }
}
