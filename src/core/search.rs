//! Literal find & replace over a whole buffer

/// Result of a replace-all pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub text: String,
    pub count: usize,
}

/// Replace every non-overlapping occurrence of `search`, scanning left to right.
///
/// The search is a plain substring match. An empty `search` replaces nothing.
pub fn replace_all(haystack: &str, search: &str, replace: &str) -> Replacement {
    if search.is_empty() {
        return Replacement {
            text: haystack.to_string(),
            count: 0,
        };
    }

    Replacement {
        text: haystack.replace(search, replace),
        count: haystack.matches(search).count(),
    }
}
