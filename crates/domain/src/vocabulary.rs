//! Closed string vocabularies shared by the destination enums.

/// A closed set of string-tagged values (clouds, products, auth types, ...).
///
/// Parsing is exact and case-sensitive: the wire tag is the only accepted
/// spelling.
pub trait ClosedSet: Copy + Sized + 'static {
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// The canonical wire tag.
    fn as_str(self) -> &'static str;

    /// Parse a wire tag; unknown input yields `None`.
    fn parse(input: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|member| member.as_str() == input)
    }

    /// The wire tags joined by `separator`, in declaration order.
    fn joined(separator: &str) -> String {
        Self::ALL
            .iter()
            .map(|member| member.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }
}
