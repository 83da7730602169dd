pub mod auth;

pub mod users;

pub mod school_years;

pub mod courses;

pub mod curricula;

pub mod sections;

pub mod schedules;

pub mod enrollments;

pub mod grades;

pub mod attendance;

pub mod reports;

pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use courses::configure_course_routes;
pub use curricula::configure_curriculum_routes;
pub use enrollments::configure_enrollment_routes;
pub use grades::configure_grade_routes;
pub use reports::configure_report_routes;
pub use schedules::configure_schedule_routes;
pub use school_years::configure_school_year_routes;
pub use sections::configure_section_routes;
pub use users::configure_user_routes;
