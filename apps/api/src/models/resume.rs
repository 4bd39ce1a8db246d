use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A row of the `resumes` table. Also the public response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Resume {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub owner_id: Uuid,
}

/// Body of `POST /resumes`. Ownership is never taken from the client.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeCreate {
    pub title: String,
    pub description: String,
}

/// Body of `PUT /resumes/:id`. Absent or null fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResumeUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ResumeUpdate {
    /// Applies the supplied fields onto `resume` in place.
    pub fn apply_to(&self, resume: &mut Resume) {
        if let Some(title) = &self.title {
            resume.title = title.clone();
        }
        if let Some(description) = &self.description {
            resume.description = description.clone();
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResumesPublic {
    pub data: Vec<Resume>,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}
