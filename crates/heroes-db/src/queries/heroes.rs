//! Hero CRUD operations.

use heroes_core::{Error, HeroId, Result, TeamId};
use rusqlite::Connection;

use crate::models::{Hero, NewHero};

const HERO_COLUMNS: &str = "id, name, secret_name, age, team_id";

/// Insert a hero and return the stored row, including its generated id.
pub fn create_hero(conn: &Connection, hero: &NewHero) -> Result<Hero> {
    conn.execute(
        "INSERT INTO heroes (name, secret_name, age, team_id) VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![
            hero.name,
            hero.secret_name,
            hero.age,
            hero.team_id.map(TeamId::get),
        ],
    )
    .map_err(|e| Error::database(e.to_string()))?;

    let id = HeroId::from(conn.last_insert_rowid());
    get_hero(conn, id)?
        .ok_or_else(|| Error::Internal(format!("hero {id} vanished after insert")))
}

/// Get a hero by ID.
pub fn get_hero(conn: &Connection, id: HeroId) -> Result<Option<Hero>> {
    let result = conn.query_row(
        &format!("SELECT {HERO_COLUMNS} FROM heroes WHERE id = ?1"),
        [id.get()],
        Hero::from_row,
    );
    match result {
        Ok(h) => Ok(Some(h)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// List heroes in primary-key order, sliced by offset/limit.
pub fn list_heroes(conn: &Connection, offset: i64, limit: i64) -> Result<Vec<Hero>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {HERO_COLUMNS} FROM heroes ORDER BY id LIMIT ?1 OFFSET ?2"
        ))
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([limit, offset], Hero::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// List every hero belonging to a team, in primary-key order.
pub fn list_heroes_by_team(conn: &Connection, team_id: TeamId) -> Result<Vec<Hero>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {HERO_COLUMNS} FROM heroes WHERE team_id = ?1 ORDER BY id"
        ))
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([team_id.get()], Hero::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// Write every mutable column of `hero` back to its row.
pub fn update_hero(conn: &Connection, hero: &Hero) -> Result<bool> {
    let n = conn
        .execute(
            "UPDATE heroes SET name = ?1, secret_name = ?2, age = ?3, team_id = ?4 WHERE id = ?5",
            rusqlite::params![
                hero.name,
                hero.secret_name,
                hero.age,
                hero.team_id.map(TeamId::get),
                hero.id.get(),
            ],
        )
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(n > 0)
}

/// Delete a hero.
pub fn delete_hero(conn: &Connection, id: HeroId) -> Result<bool> {
    let n = conn
        .execute("DELETE FROM heroes WHERE id = ?1", [id.get()])
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(n > 0)
}
