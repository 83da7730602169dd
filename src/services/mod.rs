pub mod attendance;
pub mod auth;
pub mod courses;
pub mod curricula;
pub mod enrollments;
pub mod grades;
pub mod reports;
pub mod schedules;
pub mod school_years;
pub mod sections;
pub mod users;

pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use courses::CourseService;
pub use curricula::CurriculumService;
pub use enrollments::EnrollmentService;
pub use grades::GradeService;
pub use reports::ReportService;
pub use schedules::ScheduleService;
pub use school_years::SchoolYearService;
pub use sections::SectionService;
pub use users::UserService;
