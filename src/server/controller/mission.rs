use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::IntoResponse,
};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        mission::MissionDashboardDto,
    },
    server::{
        error::AppError, response::ApiResponse, service::mission::MissionService,
        state::AppState,
    },
};

pub static MISSION_TAG: &str = "mission";

#[utoipa::path(
    get,
    path = "/api/missions/getAllMissionsDashboard/{email}",
    tag = MISSION_TAG,
    params(
        ("email" = String, Path, description = "Collaborator email")
    ),
    responses(
        (status = 200, description = "Successfully retrieved missions dashboard", body = SuccessDto<Vec<MissionDashboardDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_missions_dashboard(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(email) = path?;

    let missions = MissionService::new(state.missions.as_ref())
        .get_all_missions_dashboard(&email)
        .await?;

    let dto: Vec<MissionDashboardDto> = missions.into_iter().map(|m| m.into_dto()).collect();

    Ok(ApiResponse::list(dto))
}
