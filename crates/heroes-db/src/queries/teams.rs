//! Team CRUD operations.

use heroes_core::{Error, Result, TeamId};
use rusqlite::Connection;

use crate::models::{NewTeam, Team};

const TEAM_COLUMNS: &str = "id, name, headquarters";

/// Insert a team and return the stored row, including its generated id.
pub fn create_team(conn: &Connection, team: &NewTeam) -> Result<Team> {
    conn.execute(
        "INSERT INTO teams (name, headquarters) VALUES (?1, ?2)",
        rusqlite::params![team.name, team.headquarters],
    )
    .map_err(|e| Error::database(e.to_string()))?;

    let id = TeamId::from(conn.last_insert_rowid());
    get_team(conn, id)?
        .ok_or_else(|| Error::Internal(format!("team {id} vanished after insert")))
}

/// Get a team by ID.
pub fn get_team(conn: &Connection, id: TeamId) -> Result<Option<Team>> {
    let result = conn.query_row(
        &format!("SELECT {TEAM_COLUMNS} FROM teams WHERE id = ?1"),
        [id.get()],
        Team::from_row,
    );
    match result {
        Ok(t) => Ok(Some(t)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// List teams in primary-key order, sliced by offset/limit.
pub fn list_teams(conn: &Connection, offset: i64, limit: i64) -> Result<Vec<Team>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {TEAM_COLUMNS} FROM teams ORDER BY id LIMIT ?1 OFFSET ?2"
        ))
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([limit, offset], Team::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// Write every mutable column of `team` back to its row.
pub fn update_team(conn: &Connection, team: &Team) -> Result<bool> {
    let n = conn
        .execute(
            "UPDATE teams SET name = ?1, headquarters = ?2 WHERE id = ?3",
            rusqlite::params![team.name, team.headquarters, team.id.get()],
        )
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(n > 0)
}

/// Delete a team. Member heroes are detached by the foreign key.
pub fn delete_team(conn: &Connection, id: TeamId) -> Result<bool> {
    let n = conn
        .execute("DELETE FROM teams WHERE id = ?1", [id.get()])
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(n > 0)
}
