//! Player repository for SQLite operations

use sqlx::SqlitePool;

use crate::data::filters::{FilterSpecification, PageRequest, SqlParams, SqlValue};
use crate::data::sqlite::SqliteError;
use crate::data::types::{NewPlayer, Player};
use crate::utils::sql::fold_case;

const PLAYER_COLUMNS: &str =
    "id, name, title, race, profession, birthday, banned, experience, level, until_next_level";

type PlayerTuple = (
    i64,
    String,
    String,
    String,
    String,
    i64,
    bool,
    i64,
    i64,
    i64,
);

fn row_to_player(row: PlayerTuple) -> Result<Player, SqliteError> {
    let (id, name, title, race, profession, birthday, banned, experience, level, until_next_level) =
        row;
    Ok(Player {
        id,
        name,
        title,
        race: race.parse().map_err(SqliteError::InvalidRow)?,
        profession: profession.parse().map_err(SqliteError::InvalidRow)?,
        birthday,
        banned,
        experience,
        level,
        until_next_level,
    })
}

/// Get a player by id
pub async fn find_player(pool: &SqlitePool, id: i64) -> Result<Option<Player>, SqliteError> {
    let sql = format!("SELECT {} FROM players WHERE id = ?", PLAYER_COLUMNS);
    let row: Option<PlayerTuple> = sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?;
    row.map(row_to_player).transpose()
}

/// List players matching a specification, ordered and windowed by the page
pub async fn find_players(
    pool: &SqlitePool,
    spec: &FilterSpecification,
    page: Option<&PageRequest>,
) -> Result<Vec<Player>, SqliteError> {
    let mut params = SqlParams::default();
    let where_clause = spec.to_sql(&mut params);

    let mut sql = format!(
        "SELECT {} FROM players WHERE {}",
        PLAYER_COLUMNS, where_clause
    );
    match page {
        Some(page) => {
            sql.push_str(&format!(" ORDER BY {} LIMIT ? OFFSET ?", page.order().to_sql()));
            params.values.push(SqlValue::Integer(i64::from(page.page_size())));
            params.values.push(SqlValue::Integer(
                i64::try_from(page.offset()).unwrap_or(i64::MAX),
            ));
        }
        None => sql.push_str(" ORDER BY id ASC"),
    }

    tracing::trace!(sql = %sql, params = params.values.len(), "Listing players");

    let mut query = sqlx::query_as::<_, PlayerTuple>(&sql);
    for value in &params.values {
        query = match value {
            SqlValue::Integer(v) => query.bind(*v),
            SqlValue::Text(v) => query.bind(v.clone()),
            SqlValue::Boolean(v) => query.bind(*v),
        };
    }

    let rows = query.fetch_all(pool).await?;
    rows.into_iter().map(row_to_player).collect()
}

/// Count players matching a specification
pub async fn count_players(
    pool: &SqlitePool,
    spec: &FilterSpecification,
) -> Result<u64, SqliteError> {
    let mut params = SqlParams::default();
    let sql = format!("SELECT COUNT(*) FROM players WHERE {}", spec.to_sql(&mut params));

    let mut query = sqlx::query_scalar::<_, i64>(&sql);
    for value in &params.values {
        query = match value {
            SqlValue::Integer(v) => query.bind(*v),
            SqlValue::Text(v) => query.bind(v.clone()),
            SqlValue::Boolean(v) => query.bind(*v),
        };
    }

    let count = query.fetch_one(pool).await?;
    Ok(count.max(0) as u64)
}

/// Insert a player; the database assigns the id
pub async fn insert_player(pool: &SqlitePool, player: &NewPlayer) -> Result<Player, SqliteError> {
    let result = sqlx::query(
        r#"
        INSERT INTO players (name, title, race, profession, birthday, banned, experience, level, until_next_level,
                             name_lower, title_lower)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&player.name)
    .bind(&player.title)
    .bind(player.race.as_str())
    .bind(player.profession.as_str())
    .bind(player.birthday)
    .bind(player.banned)
    .bind(player.experience)
    .bind(player.level)
    .bind(player.until_next_level)
    .bind(fold_case(&player.name))
    .bind(fold_case(&player.title))
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    tracing::debug!(id, name = %player.name, "Player inserted");
    Ok(player.clone().into_player(id))
}

/// Replace all columns of an existing player in one statement.
/// Returns None if the player does not exist.
pub async fn save_player(pool: &SqlitePool, player: &Player) -> Result<Option<Player>, SqliteError> {
    let result = sqlx::query(
        r#"
        UPDATE players
        SET name = ?, title = ?, race = ?, profession = ?, birthday = ?,
            banned = ?, experience = ?, level = ?, until_next_level = ?,
            name_lower = ?, title_lower = ?
        WHERE id = ?
        "#,
    )
    .bind(&player.name)
    .bind(&player.title)
    .bind(player.race.as_str())
    .bind(player.profession.as_str())
    .bind(player.birthday)
    .bind(player.banned)
    .bind(player.experience)
    .bind(player.level)
    .bind(player.until_next_level)
    .bind(fold_case(&player.name))
    .bind(fold_case(&player.title))
    .bind(player.id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }
    Ok(Some(player.clone()))
}

/// Delete a player. Returns true if a row was removed.
pub async fn delete_player(pool: &SqlitePool, id: i64) -> Result<bool, SqliteError> {
    let result = sqlx::query("DELETE FROM players WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
