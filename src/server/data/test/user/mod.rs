use serde_json::json;
use test_utils::factory::user::{create_user, UserFactory};

use super::*;
use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UpdateUserParams},
};

mod delete;
mod find_by_email;
mod get_all;
