//! In-memory stores for service and controller tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::DbErr;

use crate::server::{
    data::{mission::MissionStore, user::UserStore},
    model::{
        mission::MissionDashboard,
        user::{CreateUserParam, UpdateUserParam, User},
    },
};

/// Message carried by the errors of a failing fake store.
pub const FAKE_DB_FAILURE: &str = "connection refused";

fn failure() -> DbErr {
    DbErr::Custom(FAKE_DB_FAILURE.to_string())
}

/// User store backed by a vector. Ids are assigned sequentially from the highest seeded id.
#[derive(Default)]
pub struct FakeUserStore {
    users: Mutex<Vec<User>>,
    failing: bool,
}

impl FakeUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with users named after their email.
    pub fn with_users(emails: &[&str]) -> Self {
        let users = emails
            .iter()
            .enumerate()
            .map(|(i, email)| User {
                id: i as i32 + 1,
                nom: email.split('@').next().unwrap_or_default().to_string(),
                email: email.to_string(),
                created_at: Utc::now(),
            })
            .collect();

        Self {
            users: Mutex::new(users),
            failing: false,
        }
    }

    /// A store whose every call fails with a database error.
    pub fn failing() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), DbErr> {
        if self.failing {
            Err(failure())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserStore for FakeUserStore {
    async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        self.check()?;
        Ok(self.snapshot())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        self.check()?;
        Ok(self.snapshot().into_iter().find(|u| u.id == id))
    }

    async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = User {
            id,
            nom: param.nom,
            email: param.email,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: i32, param: UpdateUserParam) -> Result<Option<User>, DbErr> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        Ok(users.iter_mut().find(|u| u.id == id).map(|user| {
            user.nom = param.nom;
            user.email = param.email;
            user.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<Option<User>, DbErr> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        let index = users.iter().position(|u| u.id == id);
        Ok(index.map(|i| users.remove(i)))
    }

    async fn email_exists(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        self.check()?;
        Ok(self
            .snapshot()
            .iter()
            .any(|u| u.email == email && Some(u.id) != exclude_id))
    }
}

/// Mission store backed by `(collaborator email, mission)` pairs.
#[derive(Default)]
pub struct FakeMissionStore {
    missions: Vec<(String, MissionDashboard)>,
    failing: bool,
}

impl FakeMissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mission(mut self, email: &str, mission: MissionDashboard) -> Self {
        self.missions.push((email.to_string(), mission));
        self
    }

    pub fn failing() -> Self {
        Self {
            missions: Vec::new(),
            failing: true,
        }
    }
}

#[async_trait]
impl MissionStore for FakeMissionStore {
    async fn get_by_collaborator_email(&self, email: &str) -> Result<Vec<MissionDashboard>, DbErr> {
        if self.failing {
            return Err(failure());
        }

        let mut missions: Vec<MissionDashboard> = self
            .missions
            .iter()
            .filter(|(owner, _)| owner == email)
            .map(|(_, mission)| mission.clone())
            .collect();
        missions.sort_by(|a, b| {
            (&a.numero_groupe, &a.numero_client).cmp(&(&b.numero_groupe, &b.numero_client))
        });

        Ok(missions)
    }
}
