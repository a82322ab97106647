//! Default values for the INI dialect.

/// Default comment marker.
pub const COMMENT_MARKER: char = ';';

/// Pattern a trimmed section header line must match.
///
/// Section names consist of ASCII letters and dots only; the empty name
/// (`[]`) is accepted.
pub const SECTION_PATTERN: &str = r"^\[[A-Za-z.]*\]$";

/// UTF-8 byte-order mark some editors put at the start of a file.
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Name of the implicit section that holds entries appearing before any
/// valid header.
pub const IMPLICIT_SECTION: &str = "";
