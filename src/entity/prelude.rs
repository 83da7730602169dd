//! 预导入模块，方便使用

pub use super::attendance_records::{
    ActiveModel as AttendanceRecordActiveModel, Entity as AttendanceRecords,
    Model as AttendanceRecordModel,
};
pub use super::class_schedules::{
    ActiveModel as ClassScheduleActiveModel, Entity as ClassSchedules, Model as ClassScheduleModel,
};
pub use super::courses::{
    ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel,
};
pub use super::curricula::{
    ActiveModel as CurriculumActiveModel, Entity as Curricula, Model as CurriculumModel,
};
pub use super::curriculum_subjects::{
    ActiveModel as CurriculumSubjectActiveModel, Entity as CurriculumSubjects,
    Model as CurriculumSubjectModel,
};
pub use super::enrollments::{
    ActiveModel as EnrollmentActiveModel, Entity as Enrollments, Model as EnrollmentModel,
};
pub use super::grades::{ActiveModel as GradeActiveModel, Entity as Grades, Model as GradeModel};
pub use super::school_years::{
    ActiveModel as SchoolYearActiveModel, Entity as SchoolYears, Model as SchoolYearModel,
};
pub use super::sections::{
    ActiveModel as SectionActiveModel, Entity as Sections, Model as SectionModel,
};
pub use super::subjects::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
