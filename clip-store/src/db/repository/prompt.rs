//! Prompt Repository

use crate::error::{StoreError, StoreResult};
use shared::models::{Prompt, Tag};
use sqlx::{FromRow, SqliteConnection, SqlitePool};

/// Row of the `prompt` table
#[derive(Debug, Clone, FromRow)]
pub struct PromptRow {
    pub id: String,
    pub name: String,
    pub content: String,
    pub created_at: i64,
}

impl PromptRow {
    pub fn into_prompt(self, tags: Vec<Tag>) -> Prompt {
        Prompt {
            id: self.id,
            name: self.name,
            content: self.content,
            tags,
            created_at: Some(self.created_at),
        }
    }
}

/// Row of `prompt_tag` joined with the tag name
#[derive(Debug, Clone, FromRow)]
pub struct PromptTagRow {
    pub prompt_id: String,
    pub tag_id: String,
    pub tag_name: String,
}

pub async fn find_all(pool: &SqlitePool) -> StoreResult<Vec<PromptRow>> {
    let rows = sqlx::query_as::<_, PromptRow>(
        "SELECT id, name, content, created_at FROM prompt ORDER BY created_at, id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> StoreResult<Option<PromptRow>> {
    let row = sqlx::query_as::<_, PromptRow>(
        "SELECT id, name, content, created_at FROM prompt WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// All prompt/tag associations in tag order
pub async fn find_all_tag_links(pool: &SqlitePool) -> StoreResult<Vec<PromptTagRow>> {
    let rows = sqlx::query_as::<_, PromptTagRow>(
        "SELECT pt.prompt_id, pt.tag_id, t.name AS tag_name FROM prompt_tag pt JOIN tag t ON t.id = pt.tag_id ORDER BY pt.prompt_id, pt.position",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn insert(
    conn: &mut SqliteConnection,
    prompt: &Prompt,
    created_at: i64,
) -> StoreResult<()> {
    sqlx::query("INSERT INTO prompt (id, name, content, created_at) VALUES (?, ?, ?, ?)")
        .bind(&prompt.id)
        .bind(&prompt.name)
        .bind(&prompt.content)
        .bind(created_at)
        .execute(&mut *conn)
        .await
        .map_err(|e| match StoreError::from(e) {
            StoreError::Duplicate(_) => {
                StoreError::Duplicate(format!("Prompt {} already exists", prompt.id))
            }
            other => other,
        })?;
    Ok(())
}

pub async fn link_tag(
    conn: &mut SqliteConnection,
    prompt_id: &str,
    tag_id: &str,
    position: i64,
) -> StoreResult<()> {
    sqlx::query(
        "INSERT INTO prompt_tag (prompt_id, tag_id, position) VALUES (?, ?, ?) ON CONFLICT (prompt_id, tag_id) DO NOTHING",
    )
    .bind(prompt_id)
    .bind(tag_id)
    .bind(position)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

/// Hard delete; associations go with it via `ON DELETE CASCADE`
pub async fn delete(pool: &SqlitePool, id: &str) -> StoreResult<bool> {
    let result = sqlx::query("DELETE FROM prompt WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    fn prompt(id: &str) -> Prompt {
        Prompt {
            id: id.to_string(),
            name: "Greeting".to_string(),
            content: "Hello {name}".to_string(),
            tags: vec![],
            created_at: None,
        }
    }

    #[tokio::test]
    async fn test_insert_duplicate_id() {
        let db = DbService::in_memory().await.unwrap();
        let mut conn = db.pool.acquire().await.unwrap();

        insert(&mut conn, &prompt("p1"), 1).await.unwrap();
        let err = insert(&mut conn, &prompt("p1"), 2).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(msg) if msg.contains("p1")));
    }

    #[tokio::test]
    async fn test_delete_cascades_links() {
        let db = DbService::in_memory().await.unwrap();
        let mut conn = db.pool.acquire().await.unwrap();

        insert(&mut conn, &prompt("p1"), 1).await.unwrap();
        super::super::tag::insert(&mut conn, &Tag::with_id("t1", "work"))
            .await
            .unwrap();
        link_tag(&mut conn, "p1", "t1", 0).await.unwrap();
        // linking twice is a no-op
        link_tag(&mut conn, "p1", "t1", 0).await.unwrap();
        drop(conn);

        assert_eq!(find_all_tag_links(&db.pool).await.unwrap().len(), 1);
        assert!(delete(&db.pool, "p1").await.unwrap());
        assert!(find_all_tag_links(&db.pool).await.unwrap().is_empty());
        assert!(find_by_id(&db.pool, "p1").await.unwrap().is_none());
        assert!(!delete(&db.pool, "p1").await.unwrap());
    }
}
