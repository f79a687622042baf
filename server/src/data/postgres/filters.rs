//! SQL filter builder for company search
//!
//! Builds a parameterized WHERE clause and ORDER BY clause from optional
//! filters. All filters combine conjunctively; absent filters impose no
//! constraint. Placeholders are numbered (`$1`, `$2`, …) so the name
//! parameter can be reused by the similarity ordering expression.

/// Name matching strategy, selected once at startup
///
/// `Similarity` requires the `pg_trgm` extension: the `%` operator filters
/// through the GIN trigram index and results are ranked by descending
/// similarity score. `Substring` is the documented fallback when the
/// extension is unavailable: case-insensitive ILIKE containment, identity
/// ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
    Similarity,
    Substring,
}

impl NameMatch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Similarity => "similarity",
            Self::Substring => "substring",
        }
    }
}

/// Optional search filters, combined with AND semantics
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    pub country: Option<String>,
    pub name: Option<String>,
    pub industry: Option<String>,
}

/// A built search query: WHERE clause, ORDER BY clause, bind parameters
///
/// Parameters bind in order as `$1..$n`; `limit`/`offset` placeholders are
/// appended by the repository after these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub where_clause: String,
    pub order_by: String,
    pub params: Vec<String>,
}

/// Build the WHERE/ORDER BY pair for a filter set
///
/// - `country`: case-insensitive exact match
/// - `industry`: case-insensitive substring match
/// - `name`: strategy-dependent (trigram similarity or ILIKE substring)
///
/// Without a name filter (or under the substring fallback) ordering is
/// `id ASC` so pagination is deterministic across calls.
pub fn build_search_query(filters: &SearchFilters, name_match: NameMatch) -> SearchQuery {
    let mut conditions: Vec<String> = Vec::new();
    let mut params: Vec<String> = Vec::new();
    let mut order_by = "id ASC".to_string();

    if let Some(country) = &filters.country {
        params.push(country.clone());
        conditions.push(format!("LOWER(country) = LOWER(${})", params.len()));
    }

    if let Some(name) = &filters.name {
        match name_match {
            NameMatch::Similarity => {
                params.push(name.clone());
                let n = params.len();
                conditions.push(format!("name % ${}", n));
                order_by = format!("similarity(name, ${}) DESC, id ASC", n);
            }
            NameMatch::Substring => {
                params.push(like_pattern(name));
                conditions.push(format!("name ILIKE ${}", params.len()));
            }
        }
    }

    if let Some(industry) = &filters.industry {
        params.push(like_pattern(industry));
        conditions.push(format!("industry ILIKE ${}", params.len()));
    }

    let where_clause = if conditions.is_empty() {
        "1=1".to_string()
    } else {
        conditions.join(" AND ")
    };

    SearchQuery {
        where_clause,
        order_by,
        params,
    }
}

/// Escape LIKE/ILIKE wildcards so user input matches literally
pub fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

/// Build a containment pattern (`%fragment%`) with wildcards escaped
pub fn like_pattern(fragment: &str) -> String {
    format!("%{}%", escape_like(fragment))
}

/// Build a left-anchored prefix pattern (`fragment%`) with wildcards escaped
pub fn prefix_pattern(fragment: &str) -> String {
    format!("{}%", escape_like(fragment))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(
        country: Option<&str>,
        name: Option<&str>,
        industry: Option<&str>,
    ) -> SearchFilters {
        SearchFilters {
            country: country.map(String::from),
            name: name.map(String::from),
            industry: industry.map(String::from),
        }
    }

    #[test]
    fn empty_filters_match_everything() {
        let q = build_search_query(&filters(None, None, None), NameMatch::Similarity);
        assert_eq!(q.where_clause, "1=1");
        assert_eq!(q.order_by, "id ASC");
        assert!(q.params.is_empty());
    }

    #[test]
    fn country_is_exact_case_insensitive() {
        let q = build_search_query(&filters(Some("Germany"), None, None), NameMatch::Substring);
        assert_eq!(q.where_clause, "LOWER(country) = LOWER($1)");
        assert_eq!(q.order_by, "id ASC");
        assert_eq!(q.params, vec!["Germany"]);
    }

    #[test]
    fn name_similarity_reuses_placeholder_for_ordering() {
        let q = build_search_query(&filters(None, Some("siemens"), None), NameMatch::Similarity);
        assert_eq!(q.where_clause, "name % $1");
        assert_eq!(q.order_by, "similarity(name, $1) DESC, id ASC");
        assert_eq!(q.params, vec!["siemens"]);
    }

    #[test]
    fn name_substring_fallback_wraps_pattern() {
        let q = build_search_query(&filters(None, Some("siemens"), None), NameMatch::Substring);
        assert_eq!(q.where_clause, "name ILIKE $1");
        assert_eq!(q.order_by, "id ASC");
        assert_eq!(q.params, vec!["%siemens%"]);
    }

    #[test]
    fn all_filters_conjoin_in_declaration_order() {
        let q = build_search_query(
            &filters(Some("france"), Some("total"), Some("energy")),
            NameMatch::Similarity,
        );
        assert_eq!(
            q.where_clause,
            "LOWER(country) = LOWER($1) AND name % $2 AND industry ILIKE $3"
        );
        assert_eq!(q.order_by, "similarity(name, $2) DESC, id ASC");
        assert_eq!(q.params, vec!["france", "total", "%energy%"]);
    }

    #[test]
    fn industry_only_keeps_identity_order() {
        let q = build_search_query(&filters(None, None, Some("software")), NameMatch::Similarity);
        assert_eq!(q.where_clause, "industry ILIKE $1");
        assert_eq!(q.order_by, "id ASC");
        assert_eq!(q.params, vec!["%software%"]);
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(prefix_pattern("example.com"), "example.com%");
    }
}
