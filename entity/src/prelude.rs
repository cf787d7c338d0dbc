pub use super::group::Entity as Group;
pub use super::student::Entity as Student;
