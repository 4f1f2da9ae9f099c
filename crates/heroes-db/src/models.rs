//! Rust structs mapping to database tables.
//!
//! Each model implements `from_row` for constructing itself from a
//! `rusqlite::Row`. Alongside the row models live the insert shapes
//! (`NewHero`, `NewTeam`), which carry no id, and the partial-update
//! shapes (`HeroChanges`, `TeamChanges`), which only touch the fields
//! they hold.

use heroes_core::{HeroId, TeamId};

// ---------------------------------------------------------------------------
// Team
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub headquarters: String,
}

impl Team {
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: TeamId::from(row.get::<_, i64>(0)?),
            name: row.get(1)?,
            headquarters: row.get(2)?,
        })
    }
}

/// Column values for a team insert.
#[derive(Debug, Clone)]
pub struct NewTeam {
    pub name: String,
    pub headquarters: String,
}

/// Partial team update. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default)]
pub struct TeamChanges {
    pub name: Option<String>,
    pub headquarters: Option<String>,
}

impl TeamChanges {
    /// Merge the provided fields onto `team`.
    pub fn apply(self, team: &mut Team) {
        if let Some(name) = self.name {
            team.name = name;
        }
        if let Some(headquarters) = self.headquarters {
            team.headquarters = headquarters;
        }
    }
}

// ---------------------------------------------------------------------------
// Hero
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
    pub secret_name: String,
    pub age: Option<i64>,
    pub team_id: Option<TeamId>,
}

impl Hero {
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: HeroId::from(row.get::<_, i64>(0)?),
            name: row.get(1)?,
            secret_name: row.get(2)?,
            age: row.get(3)?,
            team_id: row.get::<_, Option<i64>>(4)?.map(TeamId::from),
        })
    }
}

/// Column values for a hero insert.
#[derive(Debug, Clone)]
pub struct NewHero {
    pub name: String,
    pub secret_name: String,
    pub age: Option<i64>,
    pub team_id: Option<TeamId>,
}

/// Partial hero update.
///
/// The nullable columns use a nested option: `None` leaves the value alone,
/// `Some(None)` clears it, `Some(Some(v))` sets it.
#[derive(Debug, Clone, Default)]
pub struct HeroChanges {
    pub name: Option<String>,
    pub secret_name: Option<String>,
    pub age: Option<Option<i64>>,
    pub team_id: Option<Option<TeamId>>,
}

impl HeroChanges {
    /// Merge the provided fields onto `hero`.
    pub fn apply(self, hero: &mut Hero) {
        if let Some(name) = self.name {
            hero.name = name;
        }
        if let Some(secret_name) = self.secret_name {
            hero.secret_name = secret_name;
        }
        if let Some(age) = self.age {
            hero.age = age;
        }
        if let Some(team_id) = self.team_id {
            hero.team_id = team_id;
        }
    }
}
