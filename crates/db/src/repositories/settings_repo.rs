//! Repository for the `settings` table (single logical row, upsert).

use sqlx::PgPool;

use crate::models::settings::{Settings, SettingsInput};

/// Column list for `settings` queries.
const SETTINGS_COLUMNS: &str = "\
    id, company_name, address, warehouse_address, phone, email, about, maps, \
    created_at, updated_at";

pub struct SettingsRepo;

impl SettingsRepo {
    /// The most recently written settings row, if any.
    pub async fn latest(pool: &PgPool) -> Result<Option<Settings>, sqlx::Error> {
        let query = format!("SELECT {SETTINGS_COLUMNS} FROM settings ORDER BY id DESC LIMIT 1");
        sqlx::query_as::<_, Settings>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Update the existing row in place, or insert one if none exists yet.
    ///
    /// Concurrent writers race with last-write-wins semantics; there is no
    /// conflict detection on this row.
    pub async fn upsert(pool: &PgPool, input: &SettingsInput) -> Result<Settings, sqlx::Error> {
        let existing: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM settings ORDER BY id DESC LIMIT 1")
                .fetch_optional(pool)
                .await?;

        match existing {
            Some((id,)) => {
                let query = format!(
                    "UPDATE settings SET company_name = $1, address = $2, \
                     warehouse_address = $3, phone = $4, email = $5, about = $6, \
                     maps = $7, updated_at = now() WHERE id = $8 \
                     RETURNING {SETTINGS_COLUMNS}"
                );
                sqlx::query_as::<_, Settings>(&query)
                    .bind(input.company_name.as_deref())
                    .bind(input.address.as_deref())
                    .bind(input.warehouse_address.as_deref())
                    .bind(input.phone.as_deref())
                    .bind(input.email.as_deref())
                    .bind(input.about.as_deref())
                    .bind(input.maps.as_deref())
                    .bind(id)
                    .fetch_one(pool)
                    .await
            }
            None => {
                let query = format!(
                    "INSERT INTO settings \
                     (company_name, address, warehouse_address, phone, email, about, maps) \
                     VALUES ($1, $2, $3, $4, $5, $6, $7) \
                     RETURNING {SETTINGS_COLUMNS}"
                );
                sqlx::query_as::<_, Settings>(&query)
                    .bind(input.company_name.as_deref())
                    .bind(input.address.as_deref())
                    .bind(input.warehouse_address.as_deref())
                    .bind(input.phone.as_deref())
                    .bind(input.email.as_deref())
                    .bind(input.about.as_deref())
                    .bind(input.maps.as_deref())
                    .fetch_one(pool)
                    .await
            }
        }
    }
}
