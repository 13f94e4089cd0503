//! Query-string encoding for list filters.
//!
//! Each options type maps its own fields to `(name, value)` pairs; unset
//! fields are left out. Encoding goes through `url::form_urlencoded`.

use url::form_urlencoded;

/// A filter type that knows its query parameters.
pub trait QueryParams {
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Append the encoded options to `path`. Returns `path` unchanged when there
/// are no options or every field is unset.
pub fn with_query<Q: QueryParams + ?Sized>(path: &str, options: Option<&Q>) -> String {
    let pairs = match options {
        Some(options) => options.query_pairs(),
        None => return path.to_string(),
    };
    if pairs.is_empty() {
        return path.to_string();
    }
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    format!("{path}?{query}")
}

/// Collects set fields into query pairs.
#[derive(Default)]
pub(crate) struct Pairs(Vec<(&'static str, String)>);

impl Pairs {
    pub fn text(mut self, name: &'static str, value: &Option<String>) -> Self {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            self.0.push((name, value.to_string()));
        }
        self
    }

    pub fn number(mut self, name: &'static str, value: Option<u32>) -> Self {
        if let Some(value) = value {
            self.0.push((name, value.to_string()));
        }
        self
    }

    pub fn direction(mut self, name: &'static str, value: Option<Direction>) -> Self {
        if let Some(value) = value {
            self.0.push((name, value.as_str().to_string()));
        }
        self
    }

    pub fn finish(self) -> Vec<(&'static str, String)> {
        self.0
    }
}

/// Sort direction accepted by list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

impl From<Direction> for String {
    fn from(direction: Direction) -> Self {
        direction.as_str().to_string()
    }
}
