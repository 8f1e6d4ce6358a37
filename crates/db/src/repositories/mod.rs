//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod attendance_repo;
pub mod class_repo;
pub mod faculty_repo;
pub mod mark_repo;
pub mod notice_repo;
pub mod student_repo;
pub mod subject_repo;
pub mod timetable_repo;
pub mod user_repo;

pub use attendance_repo::AttendanceRepo;
pub use class_repo::ClassRepo;
pub use faculty_repo::FacultyRepo;
pub use mark_repo::MarkRepo;
pub use notice_repo::NoticeRepo;
pub use student_repo::StudentRepo;
pub use subject_repo::SubjectRepo;
pub use timetable_repo::TimetableRepo;
pub use user_repo::UserRepo;
