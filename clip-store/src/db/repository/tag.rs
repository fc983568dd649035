//! Tag Repository

use crate::error::StoreResult;
use shared::models::Tag;
use sqlx::{SqliteConnection, SqlitePool};

pub async fn find_all(pool: &SqlitePool) -> StoreResult<Vec<Tag>> {
    let tags = sqlx::query_as::<_, Tag>("SELECT id, name FROM tag ORDER BY name, id")
        .fetch_all(pool)
        .await?;
    Ok(tags)
}

pub async fn find_by_name(conn: &mut SqliteConnection, name: &str) -> StoreResult<Option<Tag>> {
    let tag = sqlx::query_as::<_, Tag>("SELECT id, name FROM tag WHERE name = ? LIMIT 1")
        .bind(name)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(tag)
}

pub async fn insert(conn: &mut SqliteConnection, tag: &Tag) -> StoreResult<()> {
    sqlx::query("INSERT INTO tag (id, name) VALUES (?, ?)")
        .bind(&tag.id)
        .bind(&tag.name)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

/// Return the stored tag with the same name, or store `tag` as a new one
///
/// New tags keep the id generated by the client.
pub async fn get_or_create(conn: &mut SqliteConnection, tag: &Tag) -> StoreResult<Tag> {
    if let Some(existing) = find_by_name(conn, &tag.name).await? {
        return Ok(existing);
    }
    insert(conn, tag).await?;
    tracing::debug!(tag_id = %tag.id, name = %tag.name, "Created tag");
    Ok(tag.clone())
}
