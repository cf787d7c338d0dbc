use crate::server::{
    data::student::StudentRepository,
    model::student::{CreateStudentParam, StudentChanges},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
