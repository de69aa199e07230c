use std::collections::HashMap;

use sqlx::{postgres::PgRow, FromRow, PgConnection, PgPool};
use uuid::Uuid;

use crate::entities::stack::Stack;

#[derive(Clone)]
pub struct SqlxProfileRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxAdminRepo {
    pub pool: PgPool,
}

/// Association table between an owner entity and `stacks`.
#[derive(Debug, Clone, Copy)]
pub struct StackLink {
    pub table: &'static str,
    pub owner_column: &'static str,
}

pub const WORK_EXPERIENCE_STACKS: StackLink = StackLink {
    table: "work_experience_stacks",
    owner_column: "work_experience_id",
};

pub const PROJECT_STACKS: StackLink = StackLink {
    table: "project_stacks",
    owner_column: "project_id",
};

#[derive(Debug, sqlx::FromRow)]
struct OwnedStack {
    owner_id: Uuid,
    #[sqlx(flatten)]
    stack: Stack,
}

/// Stacks attached to each of `owner_ids`, ordered by name.
pub async fn fetch_linked_stacks(
    pool: &PgPool,
    link: StackLink,
    owner_ids: &[Uuid],
) -> Result<HashMap<Uuid, Vec<Stack>>, sqlx::Error> {
    if owner_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let sql = format!(
        r#"
        SELECT l.{owner} AS owner_id,
               s.id, s.name, s.icon_url, s.category, s.proficiency, s.created_at, s.updated_at
        FROM {table} l
        JOIN stacks s ON s.id = l.stack_id
        WHERE l.{owner} = ANY($1)
        ORDER BY s.name
        "#,
        owner = link.owner_column,
        table = link.table,
    );

    let rows = sqlx::query_as::<_, OwnedStack>(&sql)
        .bind(owner_ids)
        .fetch_all(pool)
        .await?;

    Ok(group_by_owner(rows.into_iter().map(|row| (row.owner_id, row.stack))))
}

/// Translation rows of `owner_ids`. `sql` must filter on `= ANY($1)`.
pub async fn fetch_translations<T>(
    pool: &PgPool,
    sql: &str,
    owner_ids: &[Uuid],
) -> Result<Vec<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    if owner_ids.is_empty() {
        return Ok(Vec::new());
    }

    sqlx::query_as::<_, T>(sql)
        .bind(owner_ids)
        .fetch_all(pool)
        .await
}

/// Replaces the stacks attached to `owner_id`.
pub async fn replace_stacks(
    conn: &mut PgConnection,
    link: StackLink,
    owner_id: Uuid,
    stack_ids: &[Uuid],
) -> Result<(), sqlx::Error> {
    let delete = format!("DELETE FROM {} WHERE {} = $1", link.table, link.owner_column);
    sqlx::query(&delete).bind(owner_id).execute(&mut *conn).await?;

    let mut unique_ids = stack_ids.to_vec();
    unique_ids.sort();
    unique_ids.dedup();

    if unique_ids.is_empty() {
        return Ok(());
    }

    let insert = format!(
        "INSERT INTO {} ({}, stack_id) SELECT $1, UNNEST($2::uuid[])",
        link.table, link.owner_column
    );
    sqlx::query(&insert)
        .bind(owner_id)
        .bind(&unique_ids)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

/// Groups rows by owner id, keeping their relative order.
pub fn group_by_owner<T>(rows: impl IntoIterator<Item = (Uuid, T)>) -> HashMap<Uuid, Vec<T>> {
    let mut grouped: HashMap<Uuid, Vec<T>> = HashMap::new();
    for (owner_id, row) in rows {
        grouped.entry(owner_id).or_default().push(row);
    }
    grouped
}

pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(e) if e.code().as_deref() == Some("23503"))
}

pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(e) if e.code().as_deref() == Some("23505"))
}
