use serde::{Deserialize, Serialize};

/// Sort direction for a query
///
/// Parsed from the two literal values the clients send (`"asc"` / `"desc"`).
/// Anything else falls back to ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn parse(s: &str) -> SortDirection {
        match s {
            "desc" => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// The reserved category filter value meaning "no category restriction"
pub const ALL_CATEGORIES: &str = "all";

/// A query over a record collection
///
/// Holds the current search term, category filter and sort directive for one
/// of the list views (stories, poems, recent dictionary searches, feedback
/// log). A query is transient: it is rebuilt on every client interaction and
/// carries no identity of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    /// Case-insensitive substring to match against the record's free-text
    /// fields. Empty means "no text filter".
    pub search_term: String,

    /// A category drawn from the record type's fixed enumeration, or the
    /// `"all"` sentinel.
    pub category_filter: String,

    /// Name of the record field to order by. An unknown field name leaves
    /// the collection in its insertion order.
    pub sort_field: String,

    /// Ascending or descending.
    pub sort_direction: SortDirection,
}

impl Query {
    /// Build a query that keeps everything and orders nothing
    pub fn unfiltered() -> Query {
        Query {
            search_term: String::new(),
            category_filter: ALL_CATEGORIES.to_string(),
            sort_field: String::new(),
            sort_direction: SortDirection::Ascending,
        }
    }

    pub fn with_category(mut self, category: &str) -> Query {
        self.category_filter = category.to_string();
        self
    }

    pub fn with_search(mut self, term: &str) -> Query {
        self.search_term = term.to_string();
        self
    }

    pub fn sorted_by(mut self, field: &str, direction: SortDirection) -> Query {
        self.sort_field = field.to_string();
        self.sort_direction = direction;
        self
    }
}

/// One item subject to filtering and sorting
///
/// Implemented by every record kind the list views display. The trait is the
/// seam that lets a single engine serve the story list, the poem list, the
/// recent-search list and the feedback log.
pub trait Record {
    /// The record's categorical field value
    fn category(&self) -> &str;

    /// The free-text fields the search term is matched against. The set is
    /// site-specific: name+message+email for feedback rows, title+author+
    /// excerpt for stories, and so on.
    fn search_text(&self) -> Vec<&str>;

    /// The textual value of a named field, used by the sort stage. `None`
    /// for a field this record kind does not have.
    fn field(&self, name: &str) -> Option<String>;

    /// Fields whose values must be compared as numbers rather than text.
    ///
    /// Single-digit fields (the feedback rating) sort identically either
    /// way and stay textual; anything that can exceed one digit (story ids,
    /// poem like-counts) must be listed here or large values would sort
    /// before small ones.
    fn numeric_fields() -> &'static [&'static str]
    where
        Self: Sized,
    {
        &[]
    }
}

/// Apply a query to a record collection and return the ordered view
///
/// This is the core of the list query engine. It is a pure function of
/// `(records, query)`: the input is never mutated, repeated calls return
/// equal results, and there are no error paths: a query that matches
/// nothing yields an empty vector, and an unknown sort field leaves the
/// surviving records in their insertion order.
///
/// The three stages, in order:
/// 1. category: keep a record iff the filter is `"all"` or matches the
///    record's category exactly;
/// 2. text: keep a record iff any of its free-text fields contains the
///    search term case-insensitively (an empty term keeps everything);
/// 3. sort: stable sort on the textual value of the sort field, inverted
///    for descending. A missing or empty value on either side leaves the
///    pair in place.
///
/// # Examples
/// ```
/// use gundagardi::catalog::stories;
/// use gundagardi::query::{apply, Query, SortDirection};
///
/// let q = Query::unfiltered()
///     .with_category("social")
///     .sorted_by("title", SortDirection::Ascending);
/// let view = apply(&stories(), &q);
/// assert_eq!(view.len(), 2);
/// ```
pub fn apply<R: Record + Clone>(records: &[R], query: &Query) -> Vec<R> {
    let term = query.search_term.trim().to_lowercase();

    let mut view: Vec<R> = records
        .iter()
        .filter(|record| {
            if query.category_filter != ALL_CATEGORIES
                && record.category() != query.category_filter
            {
                return false;
            }

            if term.is_empty() {
                return true;
            }

            record
                .search_text()
                .iter()
                .any(|text| text.to_lowercase().contains(&term))
        })
        .cloned()
        .collect();

    let numeric = R::numeric_fields().contains(&query.sort_field.as_str());

    view.sort_by(|a, b| {
        let left = a.field(&query.sort_field);
        let right = b.field(&query.sort_field);

        let ordering = match (left, right) {
            (Some(l), Some(r)) if !l.is_empty() && !r.is_empty() => {
                if numeric {
                    match (l.parse::<i64>(), r.parse::<i64>()) {
                        (Ok(ln), Ok(rn)) => ln.cmp(&rn),
                        _ => l.cmp(&r),
                    }
                } else {
                    l.cmp(&r)
                }
            }
            // A record without the sort field never reorders the pair
            _ => std::cmp::Ordering::Equal,
        };

        match query.sort_direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    view
}
