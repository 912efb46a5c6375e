//! Filter clause builder
//!
//! Turns a free-text query plus a [`SearchFilters`] set into a `WHERE`
//! fragment with `$n` placeholders and the matching ordered parameters.
//! The same clause feeds both the row fetch and the count query, so the two
//! can never disagree about which members match.

use roster_core::value_objects::{normalize_query, SearchFilters};
use sqlx::postgres::Postgres;
use sqlx::query::{QueryAs, QueryScalar};

/// Columns searched by the free-text query, in placeholder order
pub const SEARCH_COLUMNS: [&str; 6] = [
    "name",
    "faction",
    "position",
    "birthplace",
    "province",
    "address",
];

type PgArgs<'q> = <Postgres as sqlx::Database>::Arguments<'q>;

/// A bound parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    /// Text parameter (ILIKE patterns)
    Text(String),
    /// Integer parameter (age bounds)
    Int(i32),
}

/// Conjunction of conditions with positional parameters
#[derive(Debug, Clone, Default)]
pub struct FilterClause {
    conditions: Vec<String>,
    params: Vec<SqlParam>,
}

impl FilterClause {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the clause for a search request
    ///
    /// Conditions are added in a fixed order: free text, faction, province,
    /// position, minimum age, maximum age, chair flag, vice-chair flag.
    #[must_use]
    pub fn from_criteria(query: Option<&str>, filters: &SearchFilters) -> Self {
        let mut clause = Self::new();
        let filters = filters.clone().normalized();

        if let Some(text) = query.and_then(normalize_query) {
            clause.add_search_condition(&SEARCH_COLUMNS, text);
        }
        if let Some(faction) = &filters.faction {
            clause.add_contains_condition("faction", faction);
        }
        if let Some(province) = &filters.province {
            clause.add_contains_condition("province", province);
        }
        if let Some(position) = &filters.position {
            clause.add_contains_condition("position", position);
        }
        if let Some(min_age) = filters.min_age {
            clause.add_comparison("age", ">=", min_age);
        }
        if let Some(max_age) = filters.max_age {
            clause.add_comparison("age", "<=", max_age);
        }
        if filters.chair_only {
            clause.add_condition("is_chair = TRUE");
        }
        if filters.vice_chair_only {
            clause.add_condition("is_vice_chair = TRUE");
        }

        clause
    }

    /// Index of the next placeholder to be handed out
    #[must_use]
    pub fn next_index(&self) -> usize {
        self.params.len() + 1
    }

    /// Add a literal condition that takes no parameter
    pub fn add_condition(&mut self, condition: &'static str) -> &mut Self {
        self.conditions.push(condition.to_string());
        self
    }

    /// Add an OR-group matching `term` as a substring of any of `columns`
    ///
    /// The pattern is bound once per column.
    pub fn add_search_condition(&mut self, columns: &[&'static str], term: &str) -> &mut Self {
        if columns.is_empty() {
            return self;
        }

        let pattern = contains_pattern(term);
        let mut parts = Vec::with_capacity(columns.len());
        for column in columns {
            parts.push(ilike(column, self.next_index()));
            self.params.push(SqlParam::Text(pattern.clone()));
        }

        self.conditions.push(format!("({})", parts.join(" OR ")));
        self
    }

    /// Add a case-insensitive substring match on one column
    pub fn add_contains_condition(&mut self, column: &'static str, value: &str) -> &mut Self {
        let placeholder = self.next_index();
        self.conditions.push(ilike(column, placeholder));
        self.params.push(SqlParam::Text(contains_pattern(value)));
        self
    }

    /// Add an integer comparison on one column
    pub fn add_comparison(&mut self, column: &'static str, op: &'static str, value: i32) -> &mut Self {
        let placeholder = self.next_index();
        self.conditions.push(format!("{column} {op} ${placeholder}"));
        self.params.push(SqlParam::Int(value));
        self
    }

    /// Render as ` WHERE ...`, or an empty string when there are no conditions
    #[must_use]
    pub fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.conditions.join(" AND "))
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    #[must_use]
    pub fn params(&self) -> &[SqlParam] {
        &self.params
    }

    /// Apply the parameters to a `query_as` in placeholder order
    pub fn apply_bindings<'a, 'b, O>(
        &'b self,
        mut query: QueryAs<'a, Postgres, O, PgArgs<'a>>,
    ) -> QueryAs<'a, Postgres, O, PgArgs<'a>>
    where
        'b: 'a,
    {
        for param in &self.params {
            query = match param {
                SqlParam::Text(s) => query.bind(s.as_str()),
                SqlParam::Int(i) => query.bind(*i),
            };
        }
        query
    }

    /// Apply the parameters to a `query_scalar` in placeholder order
    pub fn apply_bindings_scalar<'a, 'b, O>(
        &'b self,
        mut query: QueryScalar<'a, Postgres, O, PgArgs<'a>>,
    ) -> QueryScalar<'a, Postgres, O, PgArgs<'a>>
    where
        'b: 'a,
    {
        for param in &self.params {
            query = match param {
                SqlParam::Text(s) => query.bind(s.as_str()),
                SqlParam::Int(i) => query.bind(*i),
            };
        }
        query
    }
}

/// `%term%`; `%` and `_` in `term` stay wildcards
fn contains_pattern(term: &str) -> String {
    format!("%{term}%")
}

/// `ILIKE` with no escape character, so a backslash matches itself
fn ilike(column: &str, placeholder: usize) -> String {
    format!("{column} ILIKE ${placeholder} ESCAPE ''")
}
