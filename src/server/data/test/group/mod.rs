use crate::server::{data::group::GroupRepository, model::group::CreateGroupParam};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_by_name;
mod rename;
