//! Owner-or-superuser checks shared by the resume handlers.

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::models::user::User;
use crate::resumes::ListScope;

/// Superusers list everything; everyone else lists only their own rows.
pub fn list_scope(user: &User) -> ListScope {
    if user.is_superuser {
        ListScope::All
    } else {
        ListScope::OwnedBy(user.id)
    }
}

pub fn ensure_can_access(user: &User, resume: &Resume) -> Result<(), AppError> {
    if user.is_superuser || resume.owner_id == user.id {
        Ok(())
    } else {
        Err(AppError::PermissionDenied)
    }
}
