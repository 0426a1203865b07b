//! Recognition and capitalization of Gaelic surnames.
//!
//! A Gaelic surname is a prefix particle (`Mac`, `Mc`, `Gill`, `Gille`)
//! followed by a stem, sometimes with a second particle nested in between
//! (`MacGilleRiabhaich`). Each rule below is a pattern anchored at the start
//! of a word whose capture groups mark the segments that get their own
//! capital letter. Rules are tried in order and the first match wins, so
//! a specific rule must come before any broader rule that would also match
//! (e.g. the three-segment `Mac`+`Gi`+`Ri` rule before `Mac`+`G`).

use super::case::capitalize_hyphenated;
use regex::{Regex, RegexBuilder, RegexSet, RegexSetBuilder};
use std::borrow::Cow;
use std::sync::LazyLock;
use tracing::trace;

/// The rule table, in priority order. Matching is case-insensitive.
pub const RULES: &[&str] = &[
    r"^(Gill)(An.*)",
    r"^(Gill)(Ea.*)",
    r"^(Gille)(Ch.*)",
    r"^(Gill[e'])([IOèÈ].*)",
    r"^(Mc)([acdefgiklmnpqrstv][aeiou lnrvw].*)",
    r"^(Mc)([DPS]h.*)",
    r"^(Mac)([Ùùfstu].*)",
    r"^(Mac)([AÀà][bimnos].*)",
    r"^(Mac)([AÀà]la.*)",
    r"^(Mac)([AÀà]d[ah].*)",
    r"^(Mac)([AÀà]r(?:a|ta).*)",
    r"^(Mac)(B(?:h|ea).*)",
    r"^(Mac)(C[aÀàehinlruòÒÙù].*)",
    r"^(Mac)(Co[dilmnsr].*)",
    r"^(Mac)(Dh.*)(Sh.*)",
    r"^(Mac)([DPH]h.*)",
    r"^(Mac)(Di.*)",
    r"^(Mac)(E[aòÒ].*)",
    r"^(Mac)((?:Gi|I)ll[e'])([EFÉéèÈ].+)",
    r"^(Mac)((?:Gi|I)ll[e']?)(A[no].+)",
    r"^(Mac)(Ill[e']?)((?:Ea|[CBDFGIÌìMNOPRSTU][haiumon]).+)",
    r"^(Mac)(Gill[e'])(O[in].+)",
    r"^(Mac)(Gi.*)(Ri.+)",
    r"^(Mac)(Gi.*)(Se.+)",
    r"^(Mac)(Gi.*)(Ios.+)",
    r"^(Mac)(Gi.*)([BCDFM]h.+)",
    r"^(Mac)(Gi.*)(Ghl.+)",
    r"^(Mac)(G[ahilou].*)",
    r"^(Mac)(Gri.*)",
    r"^(Mac)(Gy.*)",
    r"^(Mac)([IÌì][lo].*)",
    r"^(Mac)([IÌì]ai.*)",
    r"^(Mac)([L]a[bcgmot].*)",
    r"^(Mac)([L]e[òÒ].*)",
    r"^(Mac)([L][ioÙùu].*)",
    r"^(Mac)([N][aiÌìo].*)",
    r"^(Mac)(Nea.*)",
    r"^(Mac)(Neis)",
    r"^(Mac)(N[eèÈ]ill)",
    r"^(Mac)(N[eèÈ]i(?:ll|s).+)",
    r"^(Mac)(Mh.+)(Bh.+)",
    r"^(Mac)(Mh.+)(Chal.+)",
    r"^(Mac)(Mh.+)(D[òÒ].+)",
    r"^(Mac)(Mh.+)([Ìì].+)",
    r"^(Mac)([gdpms]h.*)",
    r"^(Mac)(R[iÌìou].*)",
    r"^(Mac)(R[Ààa][bgiot].*)",
];

struct RuleTable {
    // Finds every matching rule in one pass; the lowest index is the winner
    set: RegexSet,
    rules: Vec<Regex>,
}

static RULE_TABLE: LazyLock<RuleTable> = LazyLock::new(|| {
    let set = RegexSetBuilder::new(RULES)
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|e| panic!("invalid Gaelic rule table: {}", e));
    let rules = RULES
        .iter()
        .map(|pattern| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .unwrap_or_else(|e| panic!("invalid Gaelic rule '{}': {}", pattern, e))
        })
        .collect();
    RuleTable { set, rules }
});

impl RuleTable {
    fn first_match(&self, word: &str) -> Option<usize> {
        self.set.matches(word).into_iter().next()
    }

    fn reconstruct<'a>(&self, word: &'a str) -> Cow<'a, str> {
        let index = match self.first_match(word) {
            Some(index) => index,
            None => return Cow::Borrowed(word),
        };
        let captures = match self.rules[index].captures(word) {
            Some(captures) => captures,
            None => return Cow::Borrowed(word),
        };
        trace!(word, rule = RULES[index], "matched Gaelic rule");

        let mut segments: Vec<(usize, usize)> = captures
            .iter()
            .skip(1)
            .flatten()
            .map(|m| (m.start(), m.end()))
            .collect();

        // Some rules stop short of the end of the word (`Mac` + `Neis`
        // against "MacNeish"); the rest of the word belongs to the last
        // segment.
        if let Some(last) = segments.last_mut() {
            last.1 = word.len();
        }

        let mut result = String::with_capacity(word.len());
        for (start, end) in segments {
            result.push_str(&capitalize_hyphenated(&word[start..end]));
        }
        Cow::Owned(result)
    }
}

/// Whether any word of `name` is a recognized Gaelic surname.
///
/// ```
/// use name_formatter::gaelic;
///
/// assert!(gaelic::is_gaelic("MCDERMOTT"));
/// assert!(!gaelic::is_gaelic("Smith"));
/// assert!(!gaelic::is_gaelic("   "));
/// ```
pub fn is_gaelic(name: &str) -> bool {
    name.split_whitespace()
        .any(|word| RULE_TABLE.first_match(word).is_some())
}

/// The pattern of the rule that decides how `word` is capitalized, if any.
pub fn matching_rule(word: &str) -> Option<&'static str> {
    RULE_TABLE.first_match(word).map(|index| RULES[index])
}

/// Capitalizes a single word according to the first matching rule,
/// returning it unchanged if no rule matches.
pub fn format_word(word: &str) -> Cow<'_, str> {
    RULE_TABLE.reconstruct(word)
}

/// Capitalizes each whitespace-separated word of `name` with
/// [`format_word`], joining the results with single spaces.
///
/// ```
/// use name_formatter::gaelic;
///
/// assert_eq!(gaelic::format("MACGILLERIABHAICH"), "MacGilleRiabhaich");
/// assert_eq!(gaelic::format("mcclure"), "McClure");
/// assert_eq!(gaelic::format("SMITH"), "SMITH");
/// ```
pub fn format(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    for (i, word) in name.split_whitespace().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push_str(&format_word(word));
    }
    result
}
