use crate::{
    model::patch::Patch,
    server::{
        error::{
            group::GroupError, student::StudentError, validation::ValidationError, AppError,
        },
        model::student::{CreateStudentParam, UpdateStudentParam},
        service::{group::GroupService, student::StudentService},
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod transfer;
mod write_err;
