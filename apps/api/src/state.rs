use std::sync::Arc;

use crate::auth::JwtKeys;
use crate::config::Config;
use crate::resumes::ResumeRepository;
use crate::users::UserRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub resumes: Arc<dyn ResumeRepository>,
    pub users: Arc<dyn UserRepository>,
    pub jwt: JwtKeys,
    pub config: Config,
}
