//! MySQL-backed listing store.
//!
//! The production store. Statements come from [`SqlComposer`]; nothing here
//! builds SQL text. Row decoding applies the same tolerance as JSON
//! decoding: enum columns outside the vocabulary decode to the catch-all,
//! nullable numerics decode to `None`. A column of an unexpected type is a
//! real store failure and propagates.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::mysql::{MySql, MySqlArguments, MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::query::Query;
use sqlx::Row;

use crate::listing::{Listing, ListingKind, PropertyKind};
use crate::query::Predicate;

use super::errors::StoreResult;
use super::sql::{SqlComposer, SqlParam, SqlStatement};
use super::traits::{CandidateScope, CandidateSource, QueryStore, StoreQuery};

/// A listing store over a MySQL connection pool
#[derive(Debug, Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
    composer: SqlComposer,
}

impl MySqlStore {
    /// Creates a store over an existing pool.
    pub fn new(pool: MySqlPool, table: impl Into<String>) -> StoreResult<Self> {
        Ok(Self {
            pool,
            composer: SqlComposer::new(table)?,
        })
    }

    /// Connects a fresh pool and creates a store over it.
    pub async fn connect(url: &str, table: &str) -> StoreResult<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await?;
        Self::new(pool, table)
    }

    async fn fetch_listings(&self, statement: &SqlStatement) -> StoreResult<Vec<Listing>> {
        let rows = bind_params(sqlx::query(&statement.sql), &statement.params)
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_listing).collect()
    }
}

#[async_trait]
impl CandidateSource for MySqlStore {
    async fn fetch_candidates(&self, scope: &CandidateScope) -> StoreResult<Vec<Listing>> {
        let statement = self.composer.candidates_statement(scope);
        self.fetch_listings(&statement).await
    }
}

#[async_trait]
impl QueryStore for MySqlStore {
    async fn fetch_page(&self, query: &StoreQuery) -> StoreResult<Vec<Listing>> {
        let statement = self.composer.page_statement(query);
        self.fetch_listings(&statement).await
    }

    async fn count(&self, predicates: &[Predicate]) -> StoreResult<u64> {
        let statement = self.composer.count_statement(predicates);
        let row = bind_params(sqlx::query(&statement.sql), &statement.params)
            .fetch_one(&self.pool)
            .await?;
        let count: i64 = row.try_get(0)?;
        Ok(count.max(0) as u64)
    }
}

fn bind_params<'q>(
    mut query: Query<'q, MySql, MySqlArguments>,
    params: &[SqlParam],
) -> Query<'q, MySql, MySqlArguments> {
    for param in params {
        query = match param {
            SqlParam::I64(v) => query.bind(*v),
            SqlParam::U64(v) => query.bind(*v),
            SqlParam::F64(v) => query.bind(*v),
            SqlParam::Text(v) => query.bind(v.clone()),
            SqlParam::Date(v) => query.bind(*v),
        };
    }
    query
}

fn row_to_listing(row: &MySqlRow) -> StoreResult<Listing> {
    let kind = row
        .try_get::<Option<String>, _>("listing_type")?
        .map(|v| ListingKind::from_wire(&v))
        .unwrap_or_default();
    let property_kind = row
        .try_get::<Option<String>, _>("property_type")?
        .map(|v| PropertyKind::from_wire(&v))
        .unwrap_or_default();

    let posted_at = row
        .try_get::<Option<NaiveDateTime>, _>("posted_at")?
        .map(|naive| naive.and_utc());
    let available_from: Option<NaiveDate> = row.try_get("available_from")?;

    let price: Option<f64> = row.try_get("price")?;
    let area_sqft: Option<f64> = row.try_get("area_sqft")?;

    Ok(Listing {
        id: row.try_get("id")?,
        title: row.try_get::<Option<String>, _>("title")?.unwrap_or_default(),
        description: row
            .try_get::<Option<String>, _>("description")?
            .unwrap_or_default(),
        address: row
            .try_get::<Option<String>, _>("address")?
            .unwrap_or_default(),
        street_address: row
            .try_get::<Option<String>, _>("street_address")?
            .unwrap_or_default(),
        city: row.try_get("city")?,
        area: row.try_get("area")?,
        kind,
        property_kind,
        price: price.filter(|p| p.is_finite()),
        bedrooms: decode_count(row, "bedrooms")?,
        bathrooms: decode_count(row, "bathrooms")?,
        area_sqft: area_sqft.filter(|a| a.is_finite()),
        is_featured: row
            .try_get::<Option<bool>, _>("is_featured")?
            .unwrap_or(false),
        posted_at,
        available_from,
        owner_id: row.try_get::<Option<i64>, _>("owner_id")?.unwrap_or(0),
        created_by: row.try_get::<Option<i64>, _>("created_by")?.unwrap_or(0),
    })
}

/// Room counts are stored signed; anything outside `u32` decodes to `None`.
fn decode_count(row: &MySqlRow, column: &str) -> StoreResult<Option<u32>> {
    let value: Option<i64> = row.try_get(column)?;
    Ok(value.and_then(|v| u32::try_from(v).ok()))
}
