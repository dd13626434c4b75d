/*
 * Responsibility
 * - persons / addresses テーブル向け SQLx 操作
 * - person 行と address 行は 1 トランザクションで書く
 *   (途中で失敗・中断した request は何も永続化しない)
 * - DB エラーは RepoError に変換して返す
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Person, StoredPerson};
use crate::repos::error::RepoError;
use crate::repos::person_store::PersonStore;

#[derive(Clone, Debug)]
pub struct PgPersonStore {
    db: PgPool,
}

impl PgPersonStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PersonStore for PgPersonStore {
    async fn create(&self, person: Person) -> Result<StoredPerson, RepoError> {
        let mut tx = self.db.begin().await?;

        let (person_id, created_at): (Uuid, DateTime<Utc>) = sqlx::query_as(
            r#"
            INSERT INTO persons
                ("authId", "displayName", "givenName", "familyName",
                 "email", "phone", "backupPhone", "avatarUrl")
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING "personId", "createdAt"
            "#,
        )
        .bind(&person.subject_id)
        .bind(&person.display_name)
        .bind(person.given_name.as_deref())
        .bind(person.family_name.as_deref())
        .bind(person.email.as_deref())
        .bind(person.phone.as_deref())
        .bind(person.backup_phone.as_deref())
        .bind(person.avatar_url.as_deref())
        .fetch_one(&mut *tx)
        .await?;

        // "position" preserves submission order for display.
        for (position, addr) in person.addresses.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO addresses
                    ("personId", "position", "address1", "city", "state", "zip", "label")
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(person_id)
            .bind(position as i32)
            .bind(&addr.address1)
            .bind(&addr.city)
            .bind(&addr.state)
            .bind(&addr.zip)
            .bind(&addr.label)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(StoredPerson {
            id: person_id,
            created_at,
            person,
        })
    }
}
