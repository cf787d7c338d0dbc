mod group;
mod student;
