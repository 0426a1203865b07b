//! Heuristics for telling organization names apart from personal names.
//!
//! These are structural patterns, not a guarantee. In particular a bare
//! `Word-Word` is treated as an organization so that surname-pair firms
//! ("McDermott-Stanton") are kept whole; this also catches genuine
//! double-barrelled personal surnames given without a first name.

use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// The structural pattern that marked a name as an organization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompanySignal {
    /// "Kovacek LLC", "Acme Corp."
    LegalEntitySuffix,
    /// "Steptoe & Sons"
    FamilyBusiness,
    /// "McKenzie, Gislason and Haag"
    FamilyPartnership,
    /// Two or more capitalized words, optionally followed by "LLP", "LLC",
    /// "PC" or "PLLC". Case-sensitive.
    LawFirm,
    /// "Acme Company", "Acme Co."
    CompanyAbbreviation,
    /// "Acme Group", "Acme Holdings"
    GroupHoldings,
    /// "Bank of America"
    Geographic,
    /// "Acme Trading", "Acme Enterprises"
    TradingEnterprises,
    /// "McDermott-Stanton"
    DoubleBarrelled,
}

const SIGNALS: &[(CompanySignal, &str)] = &[
    (
        CompanySignal::LegalEntitySuffix,
        r"(?i)^.+\s+(?:Inc\.?|Corp\.?|Ltd\.?|LLC|LLP|LP|Limited|Corporation|Company)$",
    ),
    (CompanySignal::FamilyBusiness, r"(?i)^.+\s+(?:and|&)\s+Sons$"),
    (
        CompanySignal::FamilyPartnership,
        r"(?i)^[[:word:]']+,\s+[[:word:]']+\s+(?:and|&)\s+[[:word:]']+$",
    ),
    (
        CompanySignal::LawFirm,
        r"^(?:[A-Z][a-z]+\s+){2,}(?:LLP|LLC|PC|PLLC)?$",
    ),
    (
        CompanySignal::CompanyAbbreviation,
        r"(?i)^.+\s+(?:Company|Co\.)$",
    ),
    (CompanySignal::GroupHoldings, r"(?i)^.+\s+(?:Group|Holdings)$"),
    (CompanySignal::Geographic, r"(?i)^.+\s+of\s+[A-Z][a-z]+$"),
    (
        CompanySignal::TradingEnterprises,
        r"(?i)^.+\s+(?:Trading|Enterprises)$",
    ),
    (
        CompanySignal::DoubleBarrelled,
        r"^[[:word:]']+-[[:word:]']+$",
    ),
];

static COMPILED_SIGNALS: LazyLock<Vec<(CompanySignal, Regex)>> = LazyLock::new(|| {
    SIGNALS
        .iter()
        .map(|&(signal, pattern)| {
            let regex = Regex::new(pattern)
                .unwrap_or_else(|e| panic!("invalid {:?} pattern '{}': {}", signal, pattern, e));
            (signal, regex)
        })
        .collect()
});

/// The first organization pattern that `name` matches, if any.
pub fn company_signal(name: &str) -> Option<CompanySignal> {
    let signal = COMPILED_SIGNALS
        .iter()
        .find(|(_, regex)| regex.is_match(name))
        .map(|&(signal, _)| signal);

    if let Some(signal) = signal {
        trace!(name, ?signal, "classified as organization");
    }
    signal
}

/// Whether `name` looks like an organization rather than a person.
pub fn is_company(name: &str) -> bool {
    company_signal(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_entity() {
        assert_eq!(Some(CompanySignal::LegalEntitySuffix), company_signal("KOVACEK LLC"));
        assert_eq!(Some(CompanySignal::LegalEntitySuffix), company_signal("Fedel Inc."));
        assert_eq!(Some(CompanySignal::LegalEntitySuffix), company_signal("Acme Limited"));
    }

    #[test]
    fn legal_entity_needs_a_name() {
        assert!(!is_company("LLC"));
        assert!(!is_company("Inc."));
    }

    #[test]
    fn family_business() {
        assert_eq!(Some(CompanySignal::FamilyBusiness), company_signal("Steptoe and Sons"));
        assert_eq!(Some(CompanySignal::FamilyBusiness), company_signal("STEPTOE & SONS"));
    }

    #[test]
    fn family_partnership() {
        assert_eq!(
            Some(CompanySignal::FamilyPartnership),
            company_signal("MCKENZIE, GISLASON AND HAAG")
        );
        assert_eq!(
            Some(CompanySignal::FamilyPartnership),
            company_signal("DeBuque, Upton & Hassel")
        );
    }

    #[test]
    fn law_firm() {
        assert_eq!(Some(CompanySignal::LawFirm), company_signal("Cooley Godward PC"));
        assert_eq!(Some(CompanySignal::LawFirm), company_signal("Baker Botts PLLC"));
    }

    #[test]
    fn law_firm_is_case_sensitive() {
        assert!(!is_company("COOLEY GODWARD PC"));
        assert!(!is_company("Kyle Welsby"));
    }

    #[test]
    fn company_abbreviation() {
        assert_eq!(Some(CompanySignal::CompanyAbbreviation), company_signal("Wonka Co."));
        assert!(!is_company("Wonka Co"));
    }

    #[test]
    fn group_and_holdings() {
        assert_eq!(Some(CompanySignal::GroupHoldings), company_signal("Virgin Group"));
        assert_eq!(Some(CompanySignal::GroupHoldings), company_signal("ALPHABET HOLDINGS"));
    }

    #[test]
    fn geographic() {
        assert_eq!(Some(CompanySignal::Geographic), company_signal("Bank of America"));
        assert_eq!(Some(CompanySignal::Geographic), company_signal("BANK OF AMERICA"));
    }

    #[test]
    fn trading() {
        assert_eq!(Some(CompanySignal::TradingEnterprises), company_signal("Wayne Enterprises"));
        assert_eq!(Some(CompanySignal::TradingEnterprises), company_signal("East India Trading"));
    }

    #[test]
    fn double_barrelled() {
        assert_eq!(Some(CompanySignal::DoubleBarrelled), company_signal("MCDERMOTT-STANTON"));
        assert_eq!(Some(CompanySignal::DoubleBarrelled), company_signal("McKenzie-D'Amore"));
        // Known false positive: a personal surname on its own
        assert!(is_company("Bowes-Lyon"));
    }

    #[test]
    fn double_barrelled_is_ascii_only() {
        assert!(!is_company("Jean-François"));
    }

    #[test]
    fn people() {
        for name in [
            "Kyle Welsby",
            "James Van Der Beek",
            "Dave Rodriguez-McDermott",
            "Karl-Theodor zu Guttenberg",
            "The Hon. Jonna McLaughlin",
            "José Ortega y Gasset",
            "ΘΕΟΔΩΡΟΣ ΚΟΛΟΚΟΤΡΩΝΗΣ",
            "Fedel GmbH.",
            "",
        ] {
            assert!(!is_company(name), "{}", name);
        }
    }
}
