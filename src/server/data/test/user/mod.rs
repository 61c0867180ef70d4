use crate::server::{
    data::user::{UserRepository, UserStore},
    model::user::{CreateUserParam, UpdateUserParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod create;
mod delete;
mod email_exists;
mod get_all;
mod update;
