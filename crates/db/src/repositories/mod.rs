//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod company_repo;
pub mod daily_activity_repo;
pub mod dashboard_repo;
pub mod document_repo;
pub mod meeting_repo;
pub mod payment_application_repo;
pub mod project_member_repo;
pub mod project_repo;
pub mod user_repo;

pub use company_repo::CompanyRepo;
pub use daily_activity_repo::DailyActivityRepo;
pub use dashboard_repo::DashboardRepo;
pub use document_repo::DocumentRepo;
pub use meeting_repo::MeetingRepo;
pub use payment_application_repo::PaymentApplicationRepo;
pub use project_member_repo::ProjectMemberRepo;
pub use project_repo::ProjectRepo;
pub use user_repo::UserRepo;
