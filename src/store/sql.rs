//! MySQL statement composition.
//!
//! Renders a predicate list into parameterized SQL. One `render_where` call
//! feeds both the page statement and the count statement, so the two can
//! never disagree about which rows match. Every ORDER BY ends with an
//! `id ASC` tiebreak: MySQL's sort is not stable, and the explicit final
//! key gives the pushdown variant the same deterministic order the
//! in-memory stable sort produces over ascending-id candidates.
//!
//! Values are always bound, never spliced into the statement text; the only
//! interpolated fragment is the table name, which must pass a strict
//! identifier check at construction.

use chrono::NaiveDate;

use crate::query::{Predicate, SortOrder};

use super::errors::{StoreError, StoreResult};
use super::traits::{CandidateScope, StoreQuery};

/// Columns fetched for a listing row. Price is cast on the way out so the
/// driver always sees a numeric value, even if the column is decimal text.
const LISTING_COLUMNS: &str = "id, title, description, address, street_address, city, area, \
     listing_type, property_type, CAST(price AS DOUBLE) AS price, bedrooms, bathrooms, \
     CAST(area_sqft AS DOUBLE) AS area_sqft, is_featured, posted_at, available_from, \
     owner_id, created_by";

/// One bind parameter for a composed statement
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    I64(i64),
    U64(u64),
    F64(f64),
    Text(String),
    Date(NaiveDate),
}

/// A composed statement and its bind parameters, in bind order
#[derive(Debug, Clone, PartialEq)]
pub struct SqlStatement {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

/// Composes listing queries for one MySQL table
#[derive(Debug, Clone)]
pub struct SqlComposer {
    table: String,
}

impl SqlComposer {
    /// Creates a composer for the given table name.
    pub fn new(table: impl Into<String>) -> StoreResult<Self> {
        let table = table.into();
        if !is_identifier(&table) {
            return Err(StoreError::InvalidTable(table));
        }
        Ok(Self { table })
    }

    /// Composes the page statement for a store query.
    pub fn page_statement(&self, query: &StoreQuery) -> SqlStatement {
        let (where_clause, mut params) = Self::render_where(query.predicates());
        let sql = format!(
            "SELECT {} FROM {}{} ORDER BY {} LIMIT ? OFFSET ?",
            LISTING_COLUMNS,
            self.table,
            where_clause,
            Self::order_by(query.sort()),
        );
        params.push(SqlParam::U64(u64::from(query.limit())));
        params.push(SqlParam::U64(query.offset()));
        SqlStatement { sql, params }
    }

    /// Composes the count statement for the same predicates a page uses.
    pub fn count_statement(&self, predicates: &[Predicate]) -> SqlStatement {
        let (where_clause, params) = Self::render_where(predicates);
        let sql = format!("SELECT COUNT(*) FROM {}{}", self.table, where_clause);
        SqlStatement { sql, params }
    }

    /// Composes the full candidate fetch, in canonical ascending-id order.
    pub fn candidates_statement(&self, scope: &CandidateScope) -> SqlStatement {
        let mut params = Vec::new();
        let where_clause = match scope.exclude_owner {
            Some(owner_id) => {
                params.push(SqlParam::I64(owner_id));
                " WHERE owner_id <> ?"
            }
            None => "",
        };
        let sql = format!(
            "SELECT {} FROM {}{} ORDER BY id ASC",
            LISTING_COLUMNS, self.table, where_clause,
        );
        SqlStatement { sql, params }
    }

    /// Renders the WHERE clause for a predicate list.
    ///
    /// Returns an empty string for an empty list, otherwise a leading
    /// `" WHERE ..."` fragment plus its parameters in bind order.
    fn render_where(predicates: &[Predicate]) -> (String, Vec<SqlParam>) {
        let mut fragments: Vec<String> = Vec::new();
        let mut params: Vec<SqlParam> = Vec::new();

        for predicate in predicates {
            match predicate {
                Predicate::NotOwner(owner_id) => {
                    fragments.push("owner_id <> ?".into());
                    params.push(SqlParam::I64(*owner_id));
                }
                Predicate::Kind(kind) => {
                    // The catch-all never matches; render it as such rather
                    // than comparing against its wire spelling.
                    if kind.is_other() {
                        fragments.push("1 = 0".into());
                    } else {
                        fragments.push("listing_type = ?".into());
                        params.push(SqlParam::Text(kind.as_str().into()));
                    }
                }
                Predicate::Property(kind) => {
                    if kind.is_other() {
                        fragments.push("1 = 0".into());
                    } else {
                        fragments.push("property_type = ?".into());
                        params.push(SqlParam::Text(kind.as_str().into()));
                    }
                }
                Predicate::Bedrooms(count) => {
                    fragments.push("bedrooms = ?".into());
                    params.push(SqlParam::I64(i64::from(*count)));
                }
                Predicate::Bathrooms(count) => {
                    fragments.push("bathrooms = ?".into());
                    params.push(SqlParam::I64(i64::from(*count)));
                }
                Predicate::AreaAny(needles) => {
                    let alternatives = vec!["LOWER(area) LIKE ?"; needles.len()];
                    fragments.push(format!("({})", alternatives.join(" OR ")));
                    for needle in needles {
                        params.push(SqlParam::Text(like_pattern(needle)));
                    }
                }
                Predicate::Text(needle) => {
                    fragments.push("(LOWER(title) LIKE ? OR LOWER(city) LIKE ?)".into());
                    let pattern = like_pattern(needle);
                    params.push(SqlParam::Text(pattern.clone()));
                    params.push(SqlParam::Text(pattern));
                }
                Predicate::PriceMin(min) => {
                    fragments.push("CAST(price AS DOUBLE) >= ?".into());
                    params.push(SqlParam::F64(*min));
                }
                Predicate::PriceMax(max) => {
                    fragments.push("CAST(price AS DOUBLE) <= ?".into());
                    params.push(SqlParam::F64(*max));
                }
                Predicate::AvailableBy(date) => {
                    fragments.push("available_from <= ?".into());
                    params.push(SqlParam::Date(*date));
                }
            }
        }

        if fragments.is_empty() {
            (String::new(), params)
        } else {
            (format!(" WHERE {}", fragments.join(" AND ")), params)
        }
    }

    fn order_by(sort: SortOrder) -> &'static str {
        match sort {
            SortOrder::Featured => "is_featured DESC, id ASC",
            SortOrder::PriceLow => "CAST(price AS DOUBLE) ASC, id ASC",
            SortOrder::PriceHigh => "CAST(price AS DOUBLE) DESC, id ASC",
            SortOrder::Newest => "posted_at DESC, id ASC",
        }
    }
}

/// Wraps a lowercased needle in `%` wildcards, escaping the characters LIKE
/// treats specially so user input always matches literally.
fn like_pattern(needle: &str) -> String {
    let escaped = needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !name.starts_with(|c: char| c.is_ascii_digit())
}
