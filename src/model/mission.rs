use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of a collaborator's mission dashboard.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MissionDashboardDto {
    pub numero_groupe: String,
    pub nom_groupe: String,
    pub numero_client: String,
    pub nom_client: String,
    pub mission: String,
    pub avant_mission: AvantMissionDto,
    pub pendant_mission: PendantMissionDto,
    pub fin_mission: FinMissionDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvantMissionDto {
    /// Share of completed steps, 0 to 100.
    pub percentage: u8,
    pub lab: bool,
    pub conflit_check: bool,
    pub qac: bool,
    pub qam: bool,
    pub ldm: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PendantMissionDto {
    pub percentage: u8,
    pub nog: bool,
    pub checklist: bool,
    pub revision: bool,
    pub supervision: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinMissionDto {
    pub percentage: u8,
    pub nds_cr: bool,
    pub qmm: bool,
    pub plaquette: bool,
    pub restitution: bool,
}
