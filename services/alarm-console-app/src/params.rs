//! Location query string <-> list parameters
//!
//! The address bar is the durable home of the current filter, sort and page
//! state. [`ListParams::from_query`] derives the parameters from it on every
//! navigation, and [`LocationQuery::with_param`] computes the next query
//! string when a control changes.

use url::form_urlencoded;

/// First page, 1-based
pub const DEFAULT_PAGE: u32 = 1;

pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Page sizes offered by the page-size selector
pub const PAGE_SIZE_OPTIONS: [u32; 5] = [10, 25, 50, 100, 200];

/// Most recent first
pub const DEFAULT_ORDERING: &str = "-started_at";

/// Ordering keys offered by the sort selector, with their labels
pub const ORDERING_OPTIONS: [(&str, &str); 6] = [
    ("-started_at", "Newest first"),
    ("started_at", "Oldest first"),
    ("severity", "Severity ascending"),
    ("-severity", "Severity descending"),
    ("site_name", "Site A-Z"),
    ("-site_name", "Site Z-A"),
];

/// Parameters of one alarm list request.
///
/// Equality and hashing are by value so a parameter set can key the query
/// cache directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ListParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub severity: Option<Vec<String>>,
    pub status: Option<Vec<String>>,
    pub q: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub ordering: Option<String>,
}

impl ListParams {
    /// Derive list parameters from the location query, applying defaults.
    ///
    /// Filter values are not checked against the known severities and
    /// statuses; the API decides what to do with unknown ones.
    pub fn from_query(query: &LocationQuery) -> Self {
        let params = Self {
            page: Some(parse_number(query, "page").unwrap_or(DEFAULT_PAGE)),
            page_size: Some(parse_number(query, "page_size").unwrap_or(DEFAULT_PAGE_SIZE)),
            severity: multi_value(query, "severity"),
            status: multi_value(query, "status"),
            q: scalar(query, "q"),
            from: scalar(query, "from"),
            to: scalar(query, "to"),
            ordering: Some(scalar(query, "ordering").unwrap_or_else(|| DEFAULT_ORDERING.to_string())),
        };
        tracing::debug!("Derived list params {:?}", params);
        params
    }

    pub fn page_or_default(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn page_size_or_default(&self) -> u32 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn ordering_or_default(&self) -> &str {
        self.ordering.as_deref().unwrap_or(DEFAULT_ORDERING)
    }
}

fn parse_number(query: &LocationQuery, key: &str) -> Option<u32> {
    query.first(key).and_then(|raw| raw.trim().parse().ok())
}

fn scalar(query: &LocationQuery, key: &str) -> Option<String> {
    query.first(key).filter(|v| !v.is_empty()).map(str::to_string)
}

fn multi_value(query: &LocationQuery, key: &str) -> Option<Vec<String>> {
    let values: Vec<String> = match query.get(key)? {
        QueryValue::One(v) => vec![v],
        QueryValue::Many(values) => values,
    };
    let values: Vec<String> = values.into_iter().filter(|v| !v.is_empty()).collect();
    (!values.is_empty()).then_some(values)
}

/// A query value as seen by the router: one string or several
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    One(String),
    Many(Vec<String>),
}

/// How a control changes a single query key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamUpdate {
    Set(String),
    SetMany(Vec<String>),
    Remove,
}

impl ParamUpdate {
    /// `Set` for a non-empty value, `Remove` otherwise (the "all" option of a select)
    pub fn from_value(value: String) -> Self {
        if value.is_empty() {
            ParamUpdate::Remove
        } else {
            ParamUpdate::Set(value)
        }
    }
}

/// A navigation's worth of query key updates, applied in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryChange(Vec<(&'static str, ParamUpdate)>);

impl QueryChange {
    /// Change a single key
    pub fn set(key: &'static str, update: ParamUpdate) -> Self {
        Self(vec![(key, update)])
    }

    pub fn page(page: u32) -> Self {
        Self::set("page", ParamUpdate::Set(page.to_string()))
    }

    /// Change the page size and go back to the first page, since the
    /// current page number may not exist at the new size
    pub fn page_size(page_size: u32) -> Self {
        Self(vec![
            ("page_size", ParamUpdate::Set(page_size.to_string())),
            ("page", ParamUpdate::Remove),
        ])
    }

    pub fn updates(&self) -> &[(&'static str, ParamUpdate)] {
        &self.0
    }
}

/// The query part of the current location, as ordered key/value pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationQuery {
    pairs: Vec<(String, String)>,
}

impl LocationQuery {
    /// Parse a location search string, with or without the leading `?`
    pub fn parse(search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        let pairs = form_urlencoded::parse(search.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// All values for `key`: `None` when absent, `One` for a single
    /// occurrence, `Many` for repeated keys
    pub fn get(&self, key: &str) -> Option<QueryValue> {
        let mut values: Vec<String> = self
            .pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect();
        match values.len() {
            0 => None,
            1 => values.pop().map(QueryValue::One),
            _ => Some(QueryValue::Many(values)),
        }
    }

    fn first(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// A copy of this query with every occurrence of `key` replaced by `update`.
    ///
    /// Empty values are dropped, so selecting an "all" option removes the key.
    pub fn with_param(&self, key: &str, update: ParamUpdate) -> Self {
        let mut pairs: Vec<(String, String)> = self
            .pairs
            .iter()
            .filter(|(k, _)| k != key)
            .cloned()
            .collect();
        match update {
            ParamUpdate::Set(value) => {
                if !value.is_empty() {
                    pairs.push((key.to_string(), value));
                }
            }
            ParamUpdate::SetMany(values) => {
                pairs.extend(
                    values
                        .into_iter()
                        .filter(|v| !v.is_empty())
                        .map(|v| (key.to_string(), v)),
                );
            }
            ParamUpdate::Remove => {}
        }
        Self { pairs }
    }

    /// A copy of this query with every update of `change` applied
    pub fn apply(&self, change: QueryChange) -> Self {
        change
            .0
            .into_iter()
            .fold(self.clone(), |query, (key, update)| query.with_param(key, update))
    }

    /// Serialize back to a search string without the leading `?`
    pub fn to_search(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// `path` with this query appended, for navigation
    pub fn href(&self, path: &str) -> String {
        let search = self.to_search();
        if search.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, search)
        }
    }
}
