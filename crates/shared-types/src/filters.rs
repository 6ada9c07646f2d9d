//! Filter criteria shared by every list page.
//!
//! A criteria value is only ever changed through [`apply_filters`], which
//! enforces the one rule every list obeys: changing anything other than the
//! page number sends the user back to page 1.

use serde::{Deserialize, Serialize};

/// Sort direction sent as `sortOrder`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("asc") {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }
}

/// What a patch touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchScope {
    /// Only the page number moved; the filter set is the same.
    Page,
    /// A filter, sort or page-size field changed.
    Filter,
}

/// A typed set of list filters with a documented default.
pub trait Criteria: Clone + Default + PartialEq {
    /// A single-field change requested by the UI.
    type Patch;

    fn page(&self) -> i64;

    fn set_page(&mut self, page: i64);

    /// Write the patched field into `self` and report which kind of field it was.
    fn merge(&mut self, patch: Self::Patch) -> PatchScope;

    /// Every field as a `(key, value)` pair; empty values are dropped later.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Apply `patch` to `current`, returning the new criteria.
///
/// Any patch other than a page change resets the page to 1.
pub fn apply_filters<C: Criteria>(current: &C, patch: C::Patch) -> C {
    let mut next = current.clone();
    match next.merge(patch) {
        PatchScope::Page => {
            let page = next.page().max(1);
            next.set_page(page);
        }
        PatchScope::Filter => next.set_page(1),
    }
    next
}

/// Serialize criteria to a URL query string (without the leading `?`).
///
/// Only non-empty fields are included; keys and values are percent-encoded.
pub fn to_query_string<C: Criteria>(criteria: &C) -> String {
    encode_pairs(criteria.query_pairs())
}

/// Percent-encode `(key, value)` pairs, skipping blank values.
pub fn encode_pairs(pairs: Vec<(&'static str, String)>) -> String {
    pairs
        .into_iter()
        .filter(|(_, v)| !v.trim().is_empty())
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v.trim())))
        .collect::<Vec<_>>()
        .join("&")
}

/// Append `?query` to `path` when the query is non-empty.
pub fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

/// Render an optional value as a query value (`None` becomes empty).
pub fn opt_value<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Probe {
        tag: String,
        page: i64,
    }

    impl Default for Probe {
        fn default() -> Self {
            Self {
                tag: String::new(),
                page: 1,
            }
        }
    }

    enum ProbePatch {
        Tag(String),
        Page(i64),
    }

    impl Criteria for Probe {
        type Patch = ProbePatch;

        fn page(&self) -> i64 {
            self.page
        }

        fn set_page(&mut self, page: i64) {
            self.page = page;
        }

        fn merge(&mut self, patch: ProbePatch) -> PatchScope {
            match patch {
                ProbePatch::Tag(t) => {
                    self.tag = t;
                    PatchScope::Filter
                }
                ProbePatch::Page(p) => {
                    self.page = p;
                    PatchScope::Page
                }
            }
        }

        fn query_pairs(&self) -> Vec<(&'static str, String)> {
            vec![("tag", self.tag.clone()), ("page", self.page.to_string())]
        }
    }

    #[test]
    fn filter_patch_resets_page() {
        let current = Probe {
            tag: "a".into(),
            page: 5,
        };
        let next = apply_filters(&current, ProbePatch::Tag("b".into()));
        assert_eq!(next.page, 1);
        assert_eq!(next.tag, "b");
    }

    #[test]
    fn page_patch_keeps_filters_and_clamps() {
        let current = Probe {
            tag: "a".into(),
            page: 5,
        };
        assert_eq!(apply_filters(&current, ProbePatch::Page(6)).page, 6);
        assert_eq!(apply_filters(&current, ProbePatch::Page(0)).page, 1);
        assert_eq!(apply_filters(&current, ProbePatch::Page(6)).tag, "a");
    }

    #[test]
    fn query_string_omits_empty_values_and_encodes() {
        let probe = Probe {
            tag: "blood & urine".into(),
            page: 2,
        };
        assert_eq!(to_query_string(&probe), "tag=blood%20%26%20urine&page=2");
        assert_eq!(to_query_string(&Probe::default()), "page=1");
    }

    #[test]
    fn with_query_skips_question_mark_for_empty_query() {
        assert_eq!(with_query("/reviews", ""), "/reviews");
        assert_eq!(with_query("/reviews", "page=1"), "/reviews?page=1");
    }

    #[test]
    fn sort_order_parse_defaults_to_desc() {
        assert_eq!(SortOrder::parse("ASC"), SortOrder::Asc);
        assert_eq!(SortOrder::parse("sideways"), SortOrder::Desc);
    }
}
