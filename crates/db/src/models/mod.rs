//! Entity models and DTOs, one module per table.

pub mod attendance;
pub mod class;
pub mod faculty;
pub mod mark;
pub mod notice;
pub mod student;
pub mod subject;
pub mod timetable;
pub mod user;

pub use attendance::{AttendanceDetail, AttendanceEntry};
pub use class::{Class, CreateClass, UpdateClass};
pub use faculty::{CreateFacultyProfile, Faculty};
pub use mark::{Mark, MarkDetail, MarkEntry};
pub use notice::{CreateNotice, Notice, NoticeAudience, NoticeWithAuthor, UpdateNotice};
pub use student::{CreateStudentProfile, RosterEntry, Student};
pub use subject::{CreateSubject, Subject, SubjectDetail, UpdateSubject};
pub use timetable::{CreateTimetableEntry, TimetableEntry, TimetableSlot, UpdateTimetableEntry};
pub use user::{CreateProfile, CreateUser, CreatedUser, UpdateUser, User, UserResponse};
