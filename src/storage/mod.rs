use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

/// 注册记录成绩行（含科目展示信息）
#[derive(Debug, Clone)]
pub struct EnrollmentGradeRow {
    pub grade: Grade,
    pub subject_code: String,
    pub subject_title: String,
}

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段传入的是已哈希值）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 分页列出用户
    async fn list_users_with_pagination(
        &self,
        query: UserListParams,
    ) -> Result<PaginatedResponse<User>>;
    // 更新用户信息（password 字段传入的是已哈希值）
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 更新用户头像地址
    async fn update_avatar_url(&self, id: i64, avatar_url: &str) -> Result<bool>;
    // 统计用户数量（启动时判断是否需要种子管理员）
    async fn count_users(&self) -> Result<u64>;

    /// 学年管理方法
    async fn create_school_year(&self, label: &str) -> Result<SchoolYear>;
    async fn get_school_year_by_id(&self, id: i64) -> Result<Option<SchoolYear>>;
    async fn get_school_year_by_label(&self, label: &str) -> Result<Option<SchoolYear>>;
    async fn list_school_years(&self) -> Result<Vec<SchoolYear>>;
    // 激活指定学年并同时取消其余学年的激活状态
    async fn activate_school_year(&self, id: i64) -> Result<bool>;
    async fn delete_school_year(&self, id: i64) -> Result<bool>;

    /// 学位项目管理方法
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    async fn get_course_by_code(&self, code: &str) -> Result<Option<Course>>;
    async fn list_courses_with_pagination(
        &self,
        query: CourseListParams,
    ) -> Result<PaginatedResponse<Course>>;
    async fn list_all_courses(&self) -> Result<Vec<Course>>;
    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>>;
    async fn delete_course(&self, id: i64) -> Result<bool>;

    /// 培养方案与科目管理方法
    async fn create_curriculum(&self, curriculum: CreateCurriculumRequest) -> Result<Curriculum>;
    async fn get_curriculum_by_id(&self, id: i64) -> Result<Option<Curriculum>>;
    async fn list_curricula_by_course(&self, course_id: i64) -> Result<Vec<Curriculum>>;
    async fn update_curriculum(
        &self,
        id: i64,
        update: UpdateCurriculumRequest,
    ) -> Result<Option<Curriculum>>;
    async fn delete_curriculum(&self, id: i64) -> Result<bool>;
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>>;
    async fn get_subject_by_code(&self, code: &str) -> Result<Option<Subject>>;
    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListParams,
    ) -> Result<PaginatedResponse<Subject>>;
    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>>;
    async fn delete_subject(&self, id: i64) -> Result<bool>;
    // 向培养方案分配科目
    async fn assign_subject(
        &self,
        curriculum_id: i64,
        req: AssignSubjectRequest,
    ) -> Result<CurriculumSubjectEntry>;
    // 从培养方案移除科目条目
    async fn remove_curriculum_subject(&self, curriculum_id: i64, entry_id: i64) -> Result<bool>;
    // 列出培养方案下的全部科目条目
    async fn list_curriculum_subjects(
        &self,
        curriculum_id: i64,
    ) -> Result<Vec<CurriculumSubjectEntry>>;
    // 获取单个科目条目（排课前校验用）
    async fn get_curriculum_subject_by_id(&self, id: i64)
    -> Result<Option<CurriculumSubjectEntry>>;

    /// 班组管理方法
    async fn create_section(&self, section: CreateSectionRequest) -> Result<Section>;
    async fn get_section_by_id(&self, id: i64) -> Result<Option<Section>>;
    async fn list_sections(&self, query: SectionListParams) -> Result<Vec<Section>>;
    async fn update_section(
        &self,
        id: i64,
        update: UpdateSectionRequest,
    ) -> Result<Option<Section>>;
    async fn delete_section(&self, id: i64) -> Result<bool>;

    /// 课表管理方法
    async fn create_schedule(&self, schedule: CreateScheduleRequest) -> Result<ClassSchedule>;
    async fn get_schedule_by_id(&self, id: i64) -> Result<Option<ClassSchedule>>;
    async fn update_schedule(
        &self,
        id: i64,
        update: UpdateScheduleRequest,
    ) -> Result<Option<ClassSchedule>>;
    async fn delete_schedule(&self, id: i64) -> Result<bool>;
    // 按条件列出课表（带科目/班组/教师展示信息）
    async fn list_schedules(&self, query: ScheduleListParams) -> Result<Vec<ClassScheduleDetail>>;
    // 冲突检测候选：同教师或同班组在同学年学期的全部课表条目
    async fn list_conflict_candidates(
        &self,
        faculty_id: i64,
        section_id: i64,
        school_year_id: i64,
        semester: Semester,
    ) -> Result<Vec<ClassSchedule>>;
    // 班组在某学年学期的全部课表（注册确认时生成成绩草稿用）
    async fn list_section_term_schedules(
        &self,
        section_id: i64,
        school_year_id: i64,
        semester: Semester,
    ) -> Result<Vec<ClassSchedule>>;

    /// 注册管理方法
    async fn create_enrollment(&self, enrollment: CreateEnrollmentRequest) -> Result<Enrollment>;
    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>>;
    async fn find_enrollment_for_term(
        &self,
        student_id: i64,
        school_year_id: i64,
        semester: Semester,
    ) -> Result<Option<Enrollment>>;
    async fn update_enrollment_status(
        &self,
        id: i64,
        status: EnrollmentStatus,
    ) -> Result<Option<Enrollment>>;
    async fn list_enrollments_with_pagination(
        &self,
        query: EnrollmentListParams,
    ) -> Result<PaginatedResponse<EnrollmentDetail>>;
    async fn list_student_enrollments(&self, student_id: i64) -> Result<Vec<EnrollmentDetail>>;
    // 报表用：某学年学期的 (course_id, status) 行
    async fn list_term_enrollment_rows(
        &self,
        school_year_id: i64,
        semester: Semester,
    ) -> Result<Vec<(i64, EnrollmentStatus)>>;

    /// 成绩管理方法
    // 为注册记录补齐课表对应的成绩草稿行，返回新建行数
    async fn seed_draft_grades(&self, enrollment_id: i64, schedule_ids: &[i64]) -> Result<u64>;
    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>>;
    // 课表成绩录入页：学生信息 + 成绩行
    async fn list_grades_for_schedule(&self, class_schedule_id: i64) -> Result<Vec<GradeEntry>>;
    // 注册记录成绩单：成绩行 + 科目展示信息
    async fn list_grades_for_enrollment(
        &self,
        enrollment_id: i64,
    ) -> Result<Vec<EnrollmentGradeRow>>;
    async fn save_grade(&self, id: i64, update: SaveGradeRequest) -> Result<Option<Grade>>;
    // 批量流转课表下的成绩状态，返回受影响行数
    async fn transition_schedule_grades(
        &self,
        class_schedule_id: i64,
        from: GradeStatus,
        to: GradeStatus,
    ) -> Result<u64>;

    /// 考勤管理方法
    // 按 (课表, 学生, 日期) 逐条 upsert，返回写入行数
    async fn upsert_attendance(
        &self,
        class_schedule_id: i64,
        date: &str,
        marks: &[AttendanceMark],
    ) -> Result<u64>;
    async fn list_attendance(
        &self,
        class_schedule_id: i64,
        date: &str,
    ) -> Result<Vec<AttendanceRecord>>;
    // 课表下每个学生的分状态计数
    async fn attendance_summary(&self, class_schedule_id: i64) -> Result<Vec<AttendanceSummary>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
