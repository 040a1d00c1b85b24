use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::Job;
use crate::common::SampleAppId;

/// Sample app model - one row of `sampleapp_table`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SampleApp {
    pub id: SampleAppId,
    pub name: String,
    pub job0001_flag: bool,
    pub job0002_flag: bool,
    pub job0003_flag: bool,
    pub job0004_flag: bool,
    pub job0005_flag: bool,
}

impl SampleApp {
    /// Flag value for a single job
    pub fn flag(&self, job: Job) -> bool {
        match job {
            Job::Job0001 => self.job0001_flag,
            Job::Job0002 => self.job0002_flag,
            Job::Job0003 => self.job0003_flag,
            Job::Job0004 => self.job0004_flag,
            Job::Job0005 => self.job0005_flag,
        }
    }

    pub fn set_flag(&mut self, job: Job, value: bool) {
        match job {
            Job::Job0001 => self.job0001_flag = value,
            Job::Job0002 => self.job0002_flag = value,
            Job::Job0003 => self.job0003_flag = value,
            Job::Job0004 => self.job0004_flag = value,
            Job::Job0005 => self.job0005_flag = value,
        }
    }

    /// All five flags, in job order
    pub fn flags(&self) -> [bool; 5] {
        Job::ALL.map(|job| self.flag(job))
    }

    /// Find all records in primary key order
    pub async fn find_all(pool: &PgPool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM sampleapp_table ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Find record by ID, returning None if not found
    pub async fn find_by_id(id: SampleAppId, pool: &PgPool) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM sampleapp_table WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find records whose flag for `job` equals `value`
    pub async fn find_by_flag(job: Job, value: bool, pool: &PgPool) -> sqlx::Result<Vec<Self>> {
        // Column name comes from a closed enum, never from input
        let query = format!(
            "SELECT * FROM sampleapp_table WHERE {} = $1 ORDER BY id",
            job.column()
        );

        sqlx::query_as::<_, Self>(&query)
            .bind(value)
            .fetch_all(pool)
            .await
    }

    /// Write every record in a single transaction.
    ///
    /// Fails with `RowNotFound` (and rolls back) if any record no longer exists.
    pub async fn save_all(records: &[Self], pool: &PgPool) -> sqlx::Result<()> {
        let mut tx = pool.begin().await?;

        for record in records {
            let result = sqlx::query(
                r#"
                UPDATE sampleapp_table
                SET name = $2,
                    job0001_flag = $3,
                    job0002_flag = $4,
                    job0003_flag = $5,
                    job0004_flag = $6,
                    job0005_flag = $7
                WHERE id = $1
                "#,
            )
            .bind(record.id)
            .bind(&record.name)
            .bind(record.job0001_flag)
            .bind(record.job0002_flag)
            .bind(record.job0003_flag)
            .bind(record.job0004_flag)
            .bind(record.job0005_flag)
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 0 {
                return Err(sqlx::Error::RowNotFound);
            }
        }

        tx.commit().await
    }

    /// Insert a record (seeding and test fixtures only; the HTTP surface never inserts)
    pub async fn insert(&self, pool: &PgPool) -> sqlx::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO sampleapp_table
                (id, name, job0001_flag, job0002_flag, job0003_flag, job0004_flag, job0005_flag)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(self.id)
        .bind(&self.name)
        .bind(self.job0001_flag)
        .bind(self.job0002_flag)
        .bind(self.job0003_flag)
        .bind(self.job0004_flag)
        .bind(self.job0005_flag)
        .execute(pool)
        .await?;
        Ok(())
    }
}
