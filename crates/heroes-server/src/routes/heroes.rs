//! Hero CRUD route handlers.

use axum::extract::State;
use axum::Json;
use heroes_core::{Error, HeroId, TeamId};
use heroes_db::models::{Hero, HeroChanges, NewHero};
use heroes_db::queries::{heroes, teams};
use serde::{Deserialize, Serialize};

use super::teams::TeamRead;
use super::{explicit_null, Pagination};
use crate::context::AppContext;
use crate::error::AppError;
use crate::extract::{commit, DbConn, ValidJson, ValidPath, ValidQuery};

/// Request body for creating a hero. Any client-supplied `id` is ignored.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct HeroCreate {
    pub name: String,
    pub secret_name: String,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub team_id: Option<TeamId>,
}

impl From<HeroCreate> for NewHero {
    fn from(req: HeroCreate) -> Self {
        Self {
            name: req.name,
            secret_name: req.secret_name,
            age: req.age,
            team_id: req.team_id,
        }
    }
}

/// Request body for a partial hero update.
///
/// Absent keys are left untouched. `age` and `team_id` may be set to `null`
/// to clear them; a `null` name or secret name counts as absent.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct HeroUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub secret_name: Option<String>,
    #[serde(default, deserialize_with = "explicit_null")]
    #[schema(value_type = Option<i64>)]
    pub age: Option<Option<i64>>,
    #[serde(default, deserialize_with = "explicit_null")]
    #[schema(value_type = Option<i64>)]
    pub team_id: Option<Option<TeamId>>,
}

impl From<HeroUpdate> for HeroChanges {
    fn from(req: HeroUpdate) -> Self {
        Self {
            name: req.name,
            secret_name: req.secret_name,
            age: req.age,
            team_id: req.team_id,
        }
    }
}

/// Hero response.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HeroRead {
    pub id: HeroId,
    pub name: String,
    pub secret_name: String,
    pub age: Option<i64>,
    pub team_id: Option<TeamId>,
}

impl HeroRead {
    pub(crate) fn from_model(hero: Hero) -> Self {
        Self {
            id: hero.id,
            name: hero.name,
            secret_name: hero.secret_name,
            age: hero.age,
            team_id: hero.team_id,
        }
    }
}

/// Hero response with its team embedded.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HeroReadWithTeam {
    #[serde(flatten)]
    pub hero: HeroRead,
    pub team: Option<TeamRead>,
}

/// POST /heroes/
#[utoipa::path(
    post,
    path = "/heroes/",
    tag = "heroes",
    request_body = HeroCreate,
    responses(
        (status = 200, description = "Hero created", body = HeroRead),
        (status = 422, description = "Invalid hero")
    )
)]
pub async fn create_hero(
    State(ctx): State<AppContext>,
    ValidJson(payload): ValidJson<HeroCreate>,
) -> Result<Json<HeroRead>, AppError> {
    let mut db = DbConn::acquire(&ctx)?;
    let tx = db.begin()?;
    let hero = heroes::create_hero(&tx, &payload.into())?;
    commit(tx)?;

    tracing::debug!(hero_id = %hero.id, "Created hero");
    Ok(Json(HeroRead::from_model(hero)))
}

/// GET /heroes/
#[utoipa::path(
    get,
    path = "/heroes/",
    tag = "heroes",
    params(Pagination),
    responses(
        (status = 200, description = "Page of heroes in id order", body = Vec<HeroRead>),
        (status = 422, description = "Invalid offset or limit")
    )
)]
pub async fn list_heroes(
    State(ctx): State<AppContext>,
    ValidQuery(page): ValidQuery<Pagination>,
) -> Result<Json<Vec<HeroRead>>, AppError> {
    page.validate()?;
    let db = DbConn::acquire(&ctx)?;
    let rows = heroes::list_heroes(&db, page.offset, page.limit)?;
    Ok(Json(rows.into_iter().map(HeroRead::from_model).collect()))
}

/// GET /heroes/{id}
#[utoipa::path(
    get,
    path = "/heroes/{id}",
    tag = "heroes",
    params(("id" = i64, Path, description = "Hero ID")),
    responses(
        (status = 200, description = "Hero with its team", body = HeroReadWithTeam),
        (status = 404, description = "Hero not found")
    )
)]
pub async fn get_hero(
    State(ctx): State<AppContext>,
    ValidPath(id): ValidPath<HeroId>,
) -> Result<Json<HeroReadWithTeam>, AppError> {
    let db = DbConn::acquire(&ctx)?;
    let hero = heroes::get_hero(&db, id)?.ok_or_else(|| Error::not_found("Not found"))?;

    let team = match hero.team_id {
        Some(team_id) => teams::get_team(&db, team_id)?.map(TeamRead::from_model),
        None => None,
    };

    Ok(Json(HeroReadWithTeam {
        hero: HeroRead::from_model(hero),
        team,
    }))
}

/// PATCH /heroes/{id}
#[utoipa::path(
    patch,
    path = "/heroes/{id}",
    tag = "heroes",
    params(("id" = i64, Path, description = "Hero ID")),
    request_body = HeroUpdate,
    responses(
        (status = 200, description = "Updated hero", body = HeroRead),
        (status = 404, description = "Hero not found")
    )
)]
pub async fn update_hero(
    State(ctx): State<AppContext>,
    ValidPath(id): ValidPath<HeroId>,
    ValidJson(payload): ValidJson<HeroUpdate>,
) -> Result<Json<HeroRead>, AppError> {
    let mut db = DbConn::acquire(&ctx)?;
    let tx = db.begin()?;
    let mut hero = heroes::get_hero(&tx, id)?.ok_or_else(|| Error::not_found("Hero not found"))?;

    HeroChanges::from(payload).apply(&mut hero);
    heroes::update_hero(&tx, &hero)?;
    let hero = heroes::get_hero(&tx, id)?.ok_or_else(|| Error::not_found("Hero not found"))?;
    commit(tx)?;

    tracing::debug!(hero_id = %id, "Updated hero");
    Ok(Json(HeroRead::from_model(hero)))
}

/// DELETE /heroes/{id}
#[utoipa::path(
    delete,
    path = "/heroes/{id}",
    tag = "heroes",
    params(("id" = i64, Path, description = "Hero ID")),
    responses(
        (status = 200, description = "Hero deleted: {\"OK\": true}"),
        (status = 404, description = "Hero not found")
    )
)]
pub async fn delete_hero(
    State(ctx): State<AppContext>,
    ValidPath(id): ValidPath<HeroId>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut db = DbConn::acquire(&ctx)?;
    let tx = db.begin()?;
    if !heroes::delete_hero(&tx, id)? {
        return Err(Error::not_found("Hero not found. No Hero deleted.").into());
    }
    commit(tx)?;

    tracing::debug!(hero_id = %id, "Deleted hero");
    Ok(Json(serde_json::json!({ "OK": true })))
}
