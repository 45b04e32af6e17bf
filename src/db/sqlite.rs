use crate::db::models::{DbInquiry, DbSubscriber, SubscribeOutcome};
use crate::db::schema::SQLITE_INIT;
use crate::error::DeskError;
use crate::types::intake::NewInquiry;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;
use tracing::{debug, info};

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct IntakeStorage {
    pool: SqlitePool,
}

impl IntakeStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if needed) the database at `database_url` and ensure the schema exists.
    pub async fn connect(database_url: &str) -> Result<Self, DeskError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        info!(database_url = %database_url, "intake store ready");
        Ok(storage)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), DeskError> {
        // sqlx::query runs a single statement, so split the bundle
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Store a validated inquiry with a server-assigned timestamp.
    pub async fn insert_inquiry(&self, inquiry: &NewInquiry) -> Result<DbInquiry, DeskError> {
        let created_at = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO inquiries (name, email, service, message, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&inquiry.name)
        .bind(&inquiry.email)
        .bind(&inquiry.service)
        .bind(&inquiry.message)
        .bind(created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(DeskError::InquiryNotSaved)?;

        Ok(DbInquiry {
            id: result.last_insert_rowid(),
            name: inquiry.name.clone(),
            email: inquiry.email.clone(),
            service: inquiry.service.clone(),
            message: inquiry.message.clone(),
            created_at,
        })
    }

    /// Insert a newsletter address. The UNIQUE constraint on `email` turns a
    /// repeat signup into `AlreadySubscribed`; any other failure is an error.
    pub async fn insert_subscriber(&self, email: &str) -> Result<SubscribeOutcome, DeskError> {
        let inserted = sqlx::query("INSERT INTO subscribers (email, created_at) VALUES (?, ?)")
            .bind(email)
            .bind(Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await;

        match inserted {
            Ok(result) => Ok(SubscribeOutcome::Subscribed(result.last_insert_rowid())),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                debug!(email = %email, "subscriber already present");
                Ok(SubscribeOutcome::AlreadySubscribed)
            }
            Err(e) => Err(DeskError::SubscribeFailed(e)),
        }
    }

    pub async fn get_inquiry(&self, id: i64) -> Result<Option<DbInquiry>, DeskError> {
        let row = sqlx::query(
            r#"SELECT id, name, email, service, message, created_at
               FROM inquiries WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::row_to_inquiry).transpose()
    }

    pub async fn list_inquiries(&self) -> Result<Vec<DbInquiry>, DeskError> {
        let rows = sqlx::query(
            r#"SELECT id, name, email, service, message, created_at
               FROM inquiries ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_inquiry).collect()
    }

    pub async fn list_subscribers(&self) -> Result<Vec<DbSubscriber>, DeskError> {
        let rows = sqlx::query("SELECT id, email, created_at FROM subscribers ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(Self::row_to_subscriber).collect()
    }

    pub async fn count_inquiries(&self) -> Result<i64, DeskError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM inquiries")
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }

    pub async fn count_subscribers(&self) -> Result<i64, DeskError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM subscribers")
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }

    fn row_to_inquiry(row: SqliteRow) -> Result<DbInquiry, DeskError> {
        let id: i64 = row.try_get("id")?;
        let name: Option<String> = row.try_get("name")?;
        let email: Option<String> = row.try_get("email")?;
        let service: Option<String> = row.try_get("service")?;
        let message: Option<String> = row.try_get("message")?;
        let created_at: Option<String> = row.try_get("created_at")?;

        Ok(DbInquiry {
            id,
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            service: service.unwrap_or_default(),
            message,
            created_at: parse_timestamp(created_at.as_deref())?,
        })
    }

    fn row_to_subscriber(row: SqliteRow) -> Result<DbSubscriber, DeskError> {
        let id: i64 = row.try_get("id")?;
        let email: Option<String> = row.try_get("email")?;
        let created_at: Option<String> = row.try_get("created_at")?;

        Ok(DbSubscriber {
            id,
            email: email.unwrap_or_default(),
            created_at: parse_timestamp(created_at.as_deref())?,
        })
    }
}

/// Accepts RFC 3339 (what we write) and SQLite's `CURRENT_TIMESTAMP` form
/// (`YYYY-MM-DD HH:MM:SS`, UTC), which older rows carry.
fn parse_timestamp(raw: Option<&str>) -> Result<DateTime<Utc>, DeskError> {
    let Some(raw) = raw else {
        return Err(sqlx::Error::Decode("created_at is NULL".into()).into());
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| sqlx::Error::Decode(Box::new(e)).into())
}
