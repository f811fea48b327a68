use serde_json::json;
use test_utils::factory::issue::IssueFactory;

use super::*;
use crate::server::service::issue::IssueService;

mod get_all;
