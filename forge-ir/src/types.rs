//! Core type definitions.

use std::{fmt, str::FromStr};

/// Error returned when a method or hook kind string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static [&'static str],
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown {} '{}', expected one of: {}",
            self.kind,
            self.value,
            self.expected.join(", ")
        )
    }
}

impl std::error::Error for ParseKindError {}

/// HTTP method of a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub const ALL: &'static [&'static str] = &["GET", "POST", "PUT", "DELETE", "PATCH"];

    /// Get the uppercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }

    /// Lowercase name, as used for the HTTP client method call.
    pub fn client_method(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
        }
    }

    /// Returns true if non-path variables travel as query parameters
    /// rather than as a request body.
    pub fn sends_query_params(&self) -> bool {
        matches!(self, HttpMethod::Get | HttpMethod::Delete)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            "PATCH" => Ok(HttpMethod::Patch),
            _ => Err(ParseKindError {
                kind: "HTTP method",
                value: s.to_string(),
                expected: Self::ALL,
            }),
        }
    }
}

/// Interaction kind of the generated hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    /// Plain cached query.
    Query,
    /// Paginated query that advances a page number.
    InfiniteQuery,
    /// Mutation invoked with variables at call time.
    Mutation,
    /// Generic query with explicit key/fn fields.
    Generic,
}

impl HookKind {
    pub const ALL: &'static [&'static str] = &["query", "infinite-query", "mutation", "generic"];

    pub fn as_str(&self) -> &'static str {
        match self {
            HookKind::Query => "query",
            HookKind::InfiniteQuery => "infinite-query",
            HookKind::Mutation => "mutation",
            HookKind::Generic => "generic",
        }
    }

    /// Returns true if the accessor receives a query context (cancellation, cache key).
    pub fn is_query_style(&self) -> bool {
        matches!(self, HookKind::Query | HookKind::InfiniteQuery)
    }

    /// Returns true if a cache-key factory is emitted for this kind.
    pub fn has_query_key(&self) -> bool {
        !matches!(self, HookKind::Mutation)
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookKind {
    type Err = ParseKindError;

    /// Accepts the kebab-case names as well as the react-query primitive names
    /// (`useQuery`, `useInfiniteQuery`, `useMutation`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "query" | "useQuery" => Ok(HookKind::Query),
            "infinite-query" | "useInfiniteQuery" => Ok(HookKind::InfiniteQuery),
            "mutation" | "useMutation" => Ok(HookKind::Mutation),
            "generic" => Ok(HookKind::Generic),
            _ => Err(ParseKindError {
                kind: "hook kind",
                value: s.to_string(),
                expected: Self::ALL,
            }),
        }
    }
}
