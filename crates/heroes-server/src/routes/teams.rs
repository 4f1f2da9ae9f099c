//! Team CRUD route handlers.

use axum::extract::State;
use axum::Json;
use heroes_core::{Error, TeamId};
use heroes_db::models::{NewTeam, Team, TeamChanges};
use heroes_db::queries::{heroes, teams};
use serde::{Deserialize, Serialize};

use super::heroes::HeroRead;
use super::Pagination;
use crate::context::AppContext;
use crate::error::AppError;
use crate::extract::{commit, DbConn, ValidJson, ValidPath, ValidQuery};

/// Request body for creating a team.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct TeamCreate {
    pub name: String,
    pub headquarters: String,
}

impl From<TeamCreate> for NewTeam {
    fn from(req: TeamCreate) -> Self {
        Self {
            name: req.name,
            headquarters: req.headquarters,
        }
    }
}

/// Request body for a partial team update.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct TeamUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub headquarters: Option<String>,
}

impl From<TeamUpdate> for TeamChanges {
    fn from(req: TeamUpdate) -> Self {
        Self {
            name: req.name,
            headquarters: req.headquarters,
        }
    }
}

/// Team response.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct TeamRead {
    pub id: TeamId,
    pub name: String,
    pub headquarters: String,
}

impl TeamRead {
    pub(crate) fn from_model(team: Team) -> Self {
        Self {
            id: team.id,
            name: team.name,
            headquarters: team.headquarters,
        }
    }
}

/// Team response with its member heroes embedded.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct TeamReadWithHeroes {
    #[serde(flatten)]
    pub team: TeamRead,
    pub heroes: Vec<HeroRead>,
}

/// POST /teams/
#[utoipa::path(
    post,
    path = "/teams/",
    tag = "teams",
    request_body = TeamCreate,
    responses(
        (status = 200, description = "Team created", body = TeamRead),
        (status = 422, description = "Invalid team")
    )
)]
pub async fn create_team(
    State(ctx): State<AppContext>,
    ValidJson(payload): ValidJson<TeamCreate>,
) -> Result<Json<TeamRead>, AppError> {
    let mut db = DbConn::acquire(&ctx)?;
    let tx = db.begin()?;
    let team = teams::create_team(&tx, &payload.into())?;
    commit(tx)?;

    tracing::debug!(team_id = %team.id, "Created team");
    Ok(Json(TeamRead::from_model(team)))
}

/// GET /teams/
#[utoipa::path(
    get,
    path = "/teams/",
    tag = "teams",
    params(Pagination),
    responses(
        (status = 200, description = "Page of teams in id order", body = Vec<TeamRead>),
        (status = 422, description = "Invalid offset or limit")
    )
)]
pub async fn list_teams(
    State(ctx): State<AppContext>,
    ValidQuery(page): ValidQuery<Pagination>,
) -> Result<Json<Vec<TeamRead>>, AppError> {
    page.validate()?;
    let db = DbConn::acquire(&ctx)?;
    let rows = teams::list_teams(&db, page.offset, page.limit)?;
    Ok(Json(rows.into_iter().map(TeamRead::from_model).collect()))
}

/// GET /teams/{id}
#[utoipa::path(
    get,
    path = "/teams/{id}",
    tag = "teams",
    params(("id" = i64, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team with its heroes", body = TeamReadWithHeroes),
        (status = 404, description = "Team not found")
    )
)]
pub async fn get_team(
    State(ctx): State<AppContext>,
    ValidPath(id): ValidPath<TeamId>,
) -> Result<Json<TeamReadWithHeroes>, AppError> {
    let db = DbConn::acquire(&ctx)?;
    let team = teams::get_team(&db, id)?.ok_or_else(|| Error::not_found("Team not found"))?;
    let members = heroes::list_heroes_by_team(&db, id)?;

    Ok(Json(TeamReadWithHeroes {
        team: TeamRead::from_model(team),
        heroes: members.into_iter().map(HeroRead::from_model).collect(),
    }))
}

/// PATCH /teams/{id}
#[utoipa::path(
    patch,
    path = "/teams/{id}",
    tag = "teams",
    params(("id" = i64, Path, description = "Team ID")),
    request_body = TeamUpdate,
    responses(
        (status = 200, description = "Updated team", body = TeamRead),
        (status = 404, description = "Team not found")
    )
)]
pub async fn update_team(
    State(ctx): State<AppContext>,
    ValidPath(id): ValidPath<TeamId>,
    ValidJson(payload): ValidJson<TeamUpdate>,
) -> Result<Json<TeamRead>, AppError> {
    let mut db = DbConn::acquire(&ctx)?;
    let tx = db.begin()?;
    let mut team = teams::get_team(&tx, id)?.ok_or_else(|| Error::not_found("Team not found"))?;

    TeamChanges::from(payload).apply(&mut team);
    teams::update_team(&tx, &team)?;
    let team = teams::get_team(&tx, id)?.ok_or_else(|| Error::not_found("Team not found"))?;
    commit(tx)?;

    tracing::debug!(team_id = %id, "Updated team");
    Ok(Json(TeamRead::from_model(team)))
}

/// DELETE /teams/{id}
///
/// Member heroes stay, with their `team_id` cleared.
#[utoipa::path(
    delete,
    path = "/teams/{id}",
    tag = "teams",
    params(("id" = i64, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team deleted: {\"ok\": true}"),
        (status = 404, description = "Team not found")
    )
)]
pub async fn delete_team(
    State(ctx): State<AppContext>,
    ValidPath(id): ValidPath<TeamId>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut db = DbConn::acquire(&ctx)?;
    let tx = db.begin()?;
    if !teams::delete_team(&tx, id)? {
        return Err(Error::not_found("Team not found").into());
    }
    commit(tx)?;

    tracing::debug!(team_id = %id, "Deleted team");
    Ok(Json(serde_json::json!({ "ok": true })))
}
