//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod attendance;
mod courses;
mod curricula;
mod enrollments;
mod grades;
mod schedules;
mod school_years;
mod sections;
mod users;

use crate::config::AppConfig;
use crate::errors::{EnrollSysError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| EnrollSysError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| EnrollSysError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| EnrollSysError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(EnrollSysError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    PaginatedResponse,
    attendance::{AttendanceMark, AttendanceRecord, AttendanceSummary},
    courses::{Course, CourseListParams, CreateCourseRequest, UpdateCourseRequest},
    curricula::{
        AssignSubjectRequest, CreateCurriculumRequest, CreateSubjectRequest, Curriculum,
        CurriculumSubjectEntry, Subject, SubjectListParams, UpdateCurriculumRequest,
        UpdateSubjectRequest,
    },
    enrollments::{
        CreateEnrollmentRequest, Enrollment, EnrollmentDetail, EnrollmentListParams,
        EnrollmentStatus,
    },
    grades::{Grade, GradeEntry, GradeStatus, SaveGradeRequest},
    schedules::{
        ClassSchedule, ClassScheduleDetail, CreateScheduleRequest, ScheduleListParams,
        UpdateScheduleRequest,
    },
    school_years::{SchoolYear, Semester},
    sections::{CreateSectionRequest, Section, SectionListParams, UpdateSectionRequest},
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListParams},
    },
};
use crate::storage::{EnrollmentGradeRow, Storage};
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(
        &self,
        query: UserListParams,
    ) -> Result<PaginatedResponse<User>> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn update_avatar_url(&self, id: i64, avatar_url: &str) -> Result<bool> {
        self.update_avatar_url_impl(id, avatar_url).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 学年模块
    async fn create_school_year(&self, label: &str) -> Result<SchoolYear> {
        self.create_school_year_impl(label).await
    }

    async fn get_school_year_by_id(&self, id: i64) -> Result<Option<SchoolYear>> {
        self.get_school_year_by_id_impl(id).await
    }

    async fn get_school_year_by_label(&self, label: &str) -> Result<Option<SchoolYear>> {
        self.get_school_year_by_label_impl(label).await
    }

    async fn list_school_years(&self) -> Result<Vec<SchoolYear>> {
        self.list_school_years_impl().await
    }

    async fn activate_school_year(&self, id: i64) -> Result<bool> {
        self.activate_school_year_impl(id).await
    }

    async fn delete_school_year(&self, id: i64) -> Result<bool> {
        self.delete_school_year_impl(id).await
    }

    // 学位项目模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn get_course_by_code(&self, code: &str) -> Result<Option<Course>> {
        self.get_course_by_code_impl(code).await
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListParams,
    ) -> Result<PaginatedResponse<Course>> {
        self.list_courses_with_pagination_impl(query).await
    }

    async fn list_all_courses(&self) -> Result<Vec<Course>> {
        self.list_all_courses_impl().await
    }

    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>> {
        self.update_course_impl(id, update).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    // 培养方案模块
    async fn create_curriculum(&self, curriculum: CreateCurriculumRequest) -> Result<Curriculum> {
        self.create_curriculum_impl(curriculum).await
    }

    async fn get_curriculum_by_id(&self, id: i64) -> Result<Option<Curriculum>> {
        self.get_curriculum_by_id_impl(id).await
    }

    async fn list_curricula_by_course(&self, course_id: i64) -> Result<Vec<Curriculum>> {
        self.list_curricula_by_course_impl(course_id).await
    }

    async fn update_curriculum(
        &self,
        id: i64,
        update: UpdateCurriculumRequest,
    ) -> Result<Option<Curriculum>> {
        self.update_curriculum_impl(id, update).await
    }

    async fn delete_curriculum(&self, id: i64) -> Result<bool> {
        self.delete_curriculum_impl(id).await
    }

    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(subject).await
    }

    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(id).await
    }

    async fn get_subject_by_code(&self, code: &str) -> Result<Option<Subject>> {
        self.get_subject_by_code_impl(code).await
    }

    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListParams,
    ) -> Result<PaginatedResponse<Subject>> {
        self.list_subjects_with_pagination_impl(query).await
    }

    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(id, update).await
    }

    async fn delete_subject(&self, id: i64) -> Result<bool> {
        self.delete_subject_impl(id).await
    }

    async fn assign_subject(
        &self,
        curriculum_id: i64,
        req: AssignSubjectRequest,
    ) -> Result<CurriculumSubjectEntry> {
        self.assign_subject_impl(curriculum_id, req).await
    }

    async fn remove_curriculum_subject(&self, curriculum_id: i64, entry_id: i64) -> Result<bool> {
        self.remove_curriculum_subject_impl(curriculum_id, entry_id)
            .await
    }

    async fn list_curriculum_subjects(
        &self,
        curriculum_id: i64,
    ) -> Result<Vec<CurriculumSubjectEntry>> {
        self.list_curriculum_subjects_impl(curriculum_id).await
    }

    async fn get_curriculum_subject_by_id(
        &self,
        id: i64,
    ) -> Result<Option<CurriculumSubjectEntry>> {
        self.get_curriculum_subject_by_id_impl(id).await
    }

    // 班组模块
    async fn create_section(&self, section: CreateSectionRequest) -> Result<Section> {
        self.create_section_impl(section).await
    }

    async fn get_section_by_id(&self, id: i64) -> Result<Option<Section>> {
        self.get_section_by_id_impl(id).await
    }

    async fn list_sections(&self, query: SectionListParams) -> Result<Vec<Section>> {
        self.list_sections_impl(query).await
    }

    async fn update_section(
        &self,
        id: i64,
        update: UpdateSectionRequest,
    ) -> Result<Option<Section>> {
        self.update_section_impl(id, update).await
    }

    async fn delete_section(&self, id: i64) -> Result<bool> {
        self.delete_section_impl(id).await
    }

    // 课表模块
    async fn create_schedule(&self, schedule: CreateScheduleRequest) -> Result<ClassSchedule> {
        self.create_schedule_impl(schedule).await
    }

    async fn get_schedule_by_id(&self, id: i64) -> Result<Option<ClassSchedule>> {
        self.get_schedule_by_id_impl(id).await
    }

    async fn update_schedule(
        &self,
        id: i64,
        update: UpdateScheduleRequest,
    ) -> Result<Option<ClassSchedule>> {
        self.update_schedule_impl(id, update).await
    }

    async fn delete_schedule(&self, id: i64) -> Result<bool> {
        self.delete_schedule_impl(id).await
    }

    async fn list_schedules(&self, query: ScheduleListParams) -> Result<Vec<ClassScheduleDetail>> {
        self.list_schedules_impl(query).await
    }

    async fn list_conflict_candidates(
        &self,
        faculty_id: i64,
        section_id: i64,
        school_year_id: i64,
        semester: Semester,
    ) -> Result<Vec<ClassSchedule>> {
        self.list_conflict_candidates_impl(faculty_id, section_id, school_year_id, semester)
            .await
    }

    async fn list_section_term_schedules(
        &self,
        section_id: i64,
        school_year_id: i64,
        semester: Semester,
    ) -> Result<Vec<ClassSchedule>> {
        self.list_section_term_schedules_impl(section_id, school_year_id, semester)
            .await
    }

    // 注册模块
    async fn create_enrollment(&self, enrollment: CreateEnrollmentRequest) -> Result<Enrollment> {
        self.create_enrollment_impl(enrollment).await
    }

    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>> {
        self.get_enrollment_by_id_impl(id).await
    }

    async fn find_enrollment_for_term(
        &self,
        student_id: i64,
        school_year_id: i64,
        semester: Semester,
    ) -> Result<Option<Enrollment>> {
        self.find_enrollment_for_term_impl(student_id, school_year_id, semester)
            .await
    }

    async fn update_enrollment_status(
        &self,
        id: i64,
        status: EnrollmentStatus,
    ) -> Result<Option<Enrollment>> {
        self.update_enrollment_status_impl(id, status).await
    }

    async fn list_enrollments_with_pagination(
        &self,
        query: EnrollmentListParams,
    ) -> Result<PaginatedResponse<EnrollmentDetail>> {
        self.list_enrollments_with_pagination_impl(query).await
    }

    async fn list_student_enrollments(&self, student_id: i64) -> Result<Vec<EnrollmentDetail>> {
        self.list_student_enrollments_impl(student_id).await
    }

    async fn list_term_enrollment_rows(
        &self,
        school_year_id: i64,
        semester: Semester,
    ) -> Result<Vec<(i64, EnrollmentStatus)>> {
        self.list_term_enrollment_rows_impl(school_year_id, semester)
            .await
    }

    // 成绩模块
    async fn seed_draft_grades(&self, enrollment_id: i64, schedule_ids: &[i64]) -> Result<u64> {
        self.seed_draft_grades_impl(enrollment_id, schedule_ids)
            .await
    }

    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>> {
        self.get_grade_by_id_impl(id).await
    }

    async fn list_grades_for_schedule(&self, class_schedule_id: i64) -> Result<Vec<GradeEntry>> {
        self.list_grades_for_schedule_impl(class_schedule_id).await
    }

    async fn list_grades_for_enrollment(
        &self,
        enrollment_id: i64,
    ) -> Result<Vec<EnrollmentGradeRow>> {
        self.list_grades_for_enrollment_impl(enrollment_id).await
    }

    async fn save_grade(&self, id: i64, update: SaveGradeRequest) -> Result<Option<Grade>> {
        self.save_grade_impl(id, update).await
    }

    async fn transition_schedule_grades(
        &self,
        class_schedule_id: i64,
        from: GradeStatus,
        to: GradeStatus,
    ) -> Result<u64> {
        self.transition_schedule_grades_impl(class_schedule_id, from, to)
            .await
    }

    // 考勤模块
    async fn upsert_attendance(
        &self,
        class_schedule_id: i64,
        date: &str,
        marks: &[AttendanceMark],
    ) -> Result<u64> {
        self.upsert_attendance_impl(class_schedule_id, date, marks)
            .await
    }

    async fn list_attendance(
        &self,
        class_schedule_id: i64,
        date: &str,
    ) -> Result<Vec<AttendanceRecord>> {
        self.list_attendance_impl(class_schedule_id, date).await
    }

    async fn attendance_summary(&self, class_schedule_id: i64) -> Result<Vec<AttendanceSummary>> {
        self.attendance_summary_impl(class_schedule_id).await
    }
}
