use std::fmt;
use std::ops::BitOr;

/// Parser behaviour flags.
///
/// The bit values are the ones editor integrations already pass on the
/// command line, so they are kept numerically stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseMode(u32);

impl ParseMode {
    /// Stop after the package clause.
    pub const PACKAGE_CLAUSE_ONLY: ParseMode = ParseMode(1 << 0);
    /// Stop after the import declarations.
    pub const IMPORTS_ONLY: ParseMode = ParseMode(1 << 1);
    /// Keep comments in the tree.
    pub const PARSE_COMMENTS: ParseMode = ParseMode(1 << 2);
    /// Trace every top-level declaration to stderr.
    pub const TRACE: ParseMode = ParseMode(1 << 3);
    pub const DECLARATION_ERRORS: ParseMode = ParseMode(1 << 4);
    pub const SPURIOUS_ERRORS: ParseMode = ParseMode(1 << 5);
    pub const SKIP_OBJECT_RESOLUTION: ParseMode = ParseMode(1 << 6);
    pub const ALL_ERRORS: ParseMode = Self::SPURIOUS_ERRORS;

    const NAMES: [(ParseMode, &'static str); 7] = [
        (Self::PACKAGE_CLAUSE_ONLY, "PackageClauseOnly"),
        (Self::IMPORTS_ONLY, "ImportsOnly"),
        (Self::PARSE_COMMENTS, "ParseComments"),
        (Self::TRACE, "Trace"),
        (Self::DECLARATION_ERRORS, "DeclarationErrors"),
        (Self::SPURIOUS_ERRORS, "AllErrors"),
        (Self::SKIP_OBJECT_RESOLUTION, "SkipObjectResolution"),
    ];

    pub const fn empty() -> Self {
        ParseMode(0)
    }

    /// Unknown bits are preserved and ignored.
    pub const fn from_bits(bits: u32) -> Self {
        ParseMode(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: ParseMode) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for ParseMode {
    fn default() -> Self {
        Self::PARSE_COMMENTS
    }
}

impl BitOr for ParseMode {
    type Output = ParseMode;

    fn bitor(self, rhs: Self) -> Self::Output {
        ParseMode(self.0 | rhs.0)
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        if names.is_empty() {
            write!(f, "0")
        } else {
            write!(f, "{}", names.join("|"))
        }
    }
}
