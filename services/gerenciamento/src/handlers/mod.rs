pub mod class_group;
pub mod student;
pub mod teacher;
