use serde_json::json;
use test_utils::fixture::credential::{EMAIL, STRONG_PASSWORD, UNKNOWN_EMAIL};

use super::*;
use crate::server::{
    data::credential::CredentialRepository,
    model::auth::{Digest, LoginParams, Password, SignUpParams},
};

mod store;
