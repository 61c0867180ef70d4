use crate::server::data::mission::{MissionRepository, MissionStore};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{create_mission, mission::MissionFactory},
};

mod get_by_collaborator_email;
