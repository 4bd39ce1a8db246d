//! In-memory repositories and token helpers for handler tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use uuid::Uuid;

use crate::auth::{Claims, JwtKeys};
use crate::config::Config;
use crate::errors::AppError;
use crate::models::resume::{Resume, ResumeCreate};
use crate::models::user::User;
use crate::resumes::{ListScope, ResumeRepository};
use crate::state::AppState;
use crate::users::UserRepository;

pub const TEST_SECRET: &str = "test-secret-do-not-use";

pub fn issue_token(secret: &str, user_id: Uuid, ttl_secs: i64) -> String {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        exp: (now + Duration::seconds(ttl_secs)).timestamp(),
        iat: now.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

#[derive(Default)]
pub struct MemoryResumeRepository {
    rows: Mutex<BTreeMap<i64, Resume>>,
    next_id: Mutex<i64>,
}

impl MemoryResumeRepository {
    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl ResumeRepository for MemoryResumeRepository {
    async fn list(
        &self,
        scope: ListScope,
        skip: i64,
        limit: i64,
    ) -> Result<(Vec<Resume>, i64), AppError> {
        let rows = self.rows.lock().unwrap();
        let in_scope: Vec<&Resume> = rows
            .values()
            .filter(|r| match scope {
                ListScope::All => true,
                ListScope::OwnedBy(owner_id) => r.owner_id == owner_id,
            })
            .collect();
        let count = in_scope.len() as i64;
        let page = in_scope
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        Ok((page, count))
    }

    async fn get(&self, id: i64) -> Result<Option<Resume>, AppError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, input: &ResumeCreate, owner_id: Uuid) -> Result<Resume, AppError> {
        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            *next
        };
        let resume = Resume {
            id,
            title: input.title.clone(),
            description: input.description.clone(),
            owner_id,
        };
        self.rows.lock().unwrap().insert(id, resume.clone());
        Ok(resume)
    }

    async fn update(&self, resume: &Resume) -> Result<Option<Resume>, AppError> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.get_mut(&resume.id).map(|row| {
            row.title = resume.title.clone();
            row.description = resume.description.clone();
            row.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }
}

#[derive(Default)]
pub struct MemoryUserRepository {
    users: Mutex<HashMap<Uuid, User>>,
}

impl MemoryUserRepository {
    pub fn insert(&self, user: User) {
        self.users.lock().unwrap().insert(user.id, user);
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn get(&self, id: Uuid) -> Result<Option<User>, AppError> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }
}

/// An `AppState` over in-memory stores, plus handles to seed them.
pub struct TestContext {
    pub state: AppState,
    pub resumes: Arc<MemoryResumeRepository>,
    pub users: Arc<MemoryUserRepository>,
}

impl TestContext {
    pub fn new() -> Self {
        let resumes = Arc::new(MemoryResumeRepository::default());
        let users = Arc::new(MemoryUserRepository::default());
        let state = AppState {
            resumes: resumes.clone(),
            users: users.clone(),
            jwt: JwtKeys::new(TEST_SECRET),
            config: Config {
                database_url: "postgres://unused".to_string(),
                jwt_secret: TEST_SECRET.to_string(),
                api_v1_str: "/api/v1".to_string(),
                db_max_connections: 1,
                port: 0,
                rust_log: "info".to_string(),
            },
        };
        Self {
            state,
            resumes,
            users,
        }
    }

    pub fn add_user(&self, is_superuser: bool, is_active: bool) -> User {
        let id = Uuid::new_v4();
        let user = User {
            id,
            email: format!("{}@example.com", id.simple()),
            is_active,
            is_superuser,
        };
        self.users.insert(user.clone());
        user
    }

    pub fn token_for(&self, user: &User) -> String {
        issue_token(TEST_SECRET, user.id, 3600)
    }

    /// Inserts a resume owned by a freshly created normal user.
    pub async fn random_resume(&self) -> Resume {
        let owner = self.add_user(false, true);
        let input = ResumeCreate {
            title: format!("title-{}", Uuid::new_v4().simple()),
            description: format!("description-{}", Uuid::new_v4().simple()),
        };
        self.resumes.create(&input, owner.id).await.unwrap()
    }
}
