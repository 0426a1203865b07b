//! A library for splitting personal and organization names into their
//! parts and restoring conventional capitalization.
//!
//! ```
//! use name_formatter::NameFormatter;
//!
//! let formatter = NameFormatter::new();
//!
//! let name = formatter.parse_formatted("JAMES VAN DER BEEK");
//! assert_eq!(Some("James"), name.first_name.as_deref());
//! assert_eq!(Some("van der Beek"), name.last_name.as_deref());
//!
//! assert_eq!("Mr. James Carter", formatter.format("MR. JAMES CARTER"));
//! assert_eq!("McKenzie, Gislason and Haag", formatter.format("MCKENZIE, GISLASON AND HAAG"));
//! assert_eq!("Kovacek LLC", formatter.format("KOVACEK LLC"));
//! ```
//!
//! All operations accept any input. Words that no rule recognizes are
//! simply capitalized, and empty input gives an empty record.

use compact_str::CompactString;
use std::fmt;

mod case;
pub mod company;
pub mod gaelic;
mod namecase;
mod parse;
pub mod vocabulary;

#[cfg(feature = "serialization")]
mod serialization;

#[cfg(feature = "ffi")]
pub mod external;

pub use company::{is_company, CompanySignal};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A name split into its parts.
///
/// Organizations have only a `last_name` (the whole name less any legal
/// suffix) and possibly a `suffix`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NameRecord {
    pub prefix: Option<CompactString>,
    pub first_name: Option<CompactString>,
    pub last_name: Option<CompactString>,
    pub suffix: Option<CompactString>,
}

impl NameRecord {
    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }

    /// The parts that are present, in display order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        [
            &self.prefix,
            &self.first_name,
            &self.last_name,
            &self.suffix,
        ]
        .into_iter()
        .filter_map(|field| field.as_deref())
    }

    /// The same record with each part capitalized.
    pub fn formatted(&self) -> NameRecord {
        namecase::format_record(self)
    }
}

impl fmt::Display for NameRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, field) in self.fields().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(field)?;
        }
        Ok(())
    }
}

/// Parses and formats names with a fixed set of options.
///
/// The formatter holds no state besides its options, so a single value
/// can be shared freely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NameFormatter {
    last_name_only: bool,
}

impl NameFormatter {
    pub const fn new() -> NameFormatter {
        NameFormatter {
            last_name_only: false,
        }
    }

    /// Treat everything between the prefix and suffix as the last name,
    /// never splitting off a first name.
    pub const fn last_name_only(self, last_name_only: bool) -> NameFormatter {
        NameFormatter { last_name_only }
    }

    /// Splits `name` into its parts, keeping the original capitalization.
    ///
    /// ```
    /// use name_formatter::NameFormatter;
    ///
    /// let name = NameFormatter::new().parse("Dr. Wong");
    /// assert_eq!(Some("Dr."), name.prefix.as_deref());
    /// assert_eq!(None, name.first_name);
    /// assert_eq!(Some("Wong"), name.last_name.as_deref());
    ///
    /// let name = NameFormatter::new().parse("Wong");
    /// assert_eq!(Some("Wong"), name.first_name.as_deref());
    /// assert_eq!(None, name.last_name);
    /// ```
    pub fn parse(&self, name: &str) -> NameRecord {
        parse::parse(name, self.last_name_only)
    }

    /// Splits `name` into its parts and capitalizes each of them.
    pub fn parse_formatted(&self, name: &str) -> NameRecord {
        self.parse(name).formatted()
    }

    /// The capitalized parts of `name`, joined with single spaces.
    pub fn format(&self, name: &str) -> String {
        self.parse_formatted(name).to_string()
    }
}
