// Resume CRUD: ownership checks, persistence, HTTP handlers.
// Every operation is a permission check followed by one repository call.

pub mod access;
pub mod handlers;
pub mod repository;

pub use repository::{ListScope, PgResumeRepository, ResumeRepository};
