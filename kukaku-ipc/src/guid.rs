use uuid::Uuid;

/// Renders an id the way the tiling engine expects it: uppercase, hyphenated
/// and wrapped in curly braces.
pub fn format_guid(id: &Uuid) -> String {
    format!("{{{:X}}}", id.hyphenated())
}

/// Parses a braced GUID string such as `{6F2C0B1E-...}`.
/// Hex digits may be either case; any other form is rejected.
pub fn parse_guid(s: &str) -> Option<Uuid> {
    let inner = s.strip_prefix('{')?.strip_suffix('}')?;
    if inner.len() != 36 {
        return None;
    }
    Uuid::parse_str(inner).ok()
}
