//! Mission dashboard domain models.
//!
//! A mission follows three phases, each a checklist of steps. The dashboard
//! reports every step flag and, per phase, the share of completed steps.

use crate::model::mission::{
    AvantMissionDto, FinMissionDto, MissionDashboardDto, PendantMissionDto,
};

/// Steps completed before the engagement starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BeforeMission {
    pub lab: bool,
    pub conflit_check: bool,
    pub qac: bool,
    pub qam: bool,
    pub ldm: bool,
}

impl BeforeMission {
    pub fn percentage(&self) -> u8 {
        percentage(&[self.lab, self.conflit_check, self.qac, self.qam, self.ldm])
    }
}

/// Steps completed while the engagement runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DuringMission {
    pub nog: bool,
    pub checklist: bool,
    pub revision: bool,
    pub supervision: bool,
}

impl DuringMission {
    pub fn percentage(&self) -> u8 {
        percentage(&[self.nog, self.checklist, self.revision, self.supervision])
    }
}

/// Steps closing the engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EndOfMission {
    pub nds_cr: bool,
    pub qmm: bool,
    pub plaquette: bool,
    pub restitution: bool,
}

impl EndOfMission {
    pub fn percentage(&self) -> u8 {
        percentage(&[self.nds_cr, self.qmm, self.plaquette, self.restitution])
    }
}

/// Share of `true` flags, rounded to the nearest whole percent.
fn percentage(steps: &[bool]) -> u8 {
    if steps.is_empty() {
        return 0;
    }
    let done = steps.iter().filter(|done| **done).count();
    ((done as f64 / steps.len() as f64) * 100.0).round() as u8
}

/// One mission of a collaborator, with its progress through every phase.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionDashboard {
    pub numero_groupe: String,
    pub nom_groupe: String,
    pub numero_client: String,
    pub nom_client: String,
    pub mission: String,
    pub before: BeforeMission,
    pub during: DuringMission,
    pub end: EndOfMission,
}

impl MissionDashboard {
    /// Converts an entity model at the repository boundary.
    pub fn from_entity(entity: entity::mission::Model) -> Self {
        Self {
            numero_groupe: entity.numero_groupe,
            nom_groupe: entity.nom_groupe,
            numero_client: entity.numero_client,
            nom_client: entity.nom_client,
            mission: entity.mission,
            before: BeforeMission {
                lab: entity.lab,
                conflit_check: entity.conflit_check,
                qac: entity.qac,
                qam: entity.qam,
                ldm: entity.ldm,
            },
            during: DuringMission {
                nog: entity.nog,
                checklist: entity.checklist,
                revision: entity.revision,
                supervision: entity.supervision,
            },
            end: EndOfMission {
                nds_cr: entity.nds_cr,
                qmm: entity.qmm,
                plaquette: entity.plaquette,
                restitution: entity.restitution,
            },
        }
    }

    /// Converts to the dashboard DTO, computing each phase percentage.
    pub fn into_dto(self) -> MissionDashboardDto {
        MissionDashboardDto {
            numero_groupe: self.numero_groupe,
            nom_groupe: self.nom_groupe,
            numero_client: self.numero_client,
            nom_client: self.nom_client,
            mission: self.mission,
            avant_mission: AvantMissionDto {
                percentage: self.before.percentage(),
                lab: self.before.lab,
                conflit_check: self.before.conflit_check,
                qac: self.before.qac,
                qam: self.before.qam,
                ldm: self.before.ldm,
            },
            pendant_mission: PendantMissionDto {
                percentage: self.during.percentage(),
                nog: self.during.nog,
                checklist: self.during.checklist,
                revision: self.during.revision,
                supervision: self.during.supervision,
            },
            fin_mission: FinMissionDto {
                percentage: self.end.percentage(),
                nds_cr: self.end.nds_cr,
                qmm: self.end.qmm,
                plaquette: self.end.plaquette,
                restitution: self.end.restitution,
            },
        }
    }
}
