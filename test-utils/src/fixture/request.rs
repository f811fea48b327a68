//! JSON bodies for gateway endpoints.

use serde_json::{json, Value};

/// Body for `POST /users`.
pub fn create_user(email: &str) -> Value {
    json!({
        "name": "Ada Lovelace",
        "email": email,
        "avatarUrl": "https://example.com/ada.png"
    })
}

/// Body for `POST /projects`.
pub fn create_project() -> Value {
    json!({
        "name": "Analytical Engine",
        "url": "https://example.com/engine",
        "description": "Difference engine follow-up",
        "category": "SOFTWARE"
    })
}

/// Body for `POST /issues` using the legacy numeric priority.
pub fn create_issue(project_id: i32, user_id: i32) -> Value {
    json!({
        "title": "Carry propagation is slow",
        "type": "BUG",
        "status": "BACKLOG",
        "priority": "4",
        "listPosition": 1,
        "projectId": project_id,
        "userId": user_id
    })
}

/// Body for `POST /comments`.
pub fn create_comment(issue_id: i32, user_id: i32) -> Value {
    json!({
        "body": "Reproduced on the second prototype.",
        "issueId": issue_id,
        "userId": user_id
    })
}

/// Body for `POST /auth/signup` and `POST /auth/login`.
pub fn credentials(email: &str, pass: &str) -> Value {
    json!({ "email": email, "pass": pass })
}
