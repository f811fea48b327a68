//! Command vocabulary.
//!
//! Each backend dispatches purely on the flat command string, so the full vocabulary is a
//! closed enum here. Serde and `name()` agree on the wire spelling.

use serde::{Deserialize, Serialize};

/// Backend service a command is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Service {
    /// CRUD data service owning users, projects, issues and comments.
    Data,
    /// Authentication service owning stored credentials.
    Auth,
}

impl Service {
    pub fn name(&self) -> &'static str {
        match self {
            Service::Data => "data",
            Service::Auth => "auth",
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Every command understood by the backend services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    CreateUser,
    AllUsers,
    FindUser,
    EditUser,
    DeleteUser,

    CreateProject,
    AllProjects,
    FindProject,
    EditProject,
    DeleteProject,

    CreateIssue,
    AllIssues,
    FindIssue,
    FindProjectIssues,
    EditIssue,
    DeleteIssue,

    CreateComment,
    AllComments,
    FindComment,
    EditComment,
    DeleteComment,

    SignUp,
    LogIn,
}

impl Command {
    /// The complete vocabulary, data service first.
    pub const ALL: [Command; 23] = [
        Command::CreateUser,
        Command::AllUsers,
        Command::FindUser,
        Command::EditUser,
        Command::DeleteUser,
        Command::CreateProject,
        Command::AllProjects,
        Command::FindProject,
        Command::EditProject,
        Command::DeleteProject,
        Command::CreateIssue,
        Command::AllIssues,
        Command::FindIssue,
        Command::FindProjectIssues,
        Command::EditIssue,
        Command::DeleteIssue,
        Command::CreateComment,
        Command::AllComments,
        Command::FindComment,
        Command::EditComment,
        Command::DeleteComment,
        Command::SignUp,
        Command::LogIn,
    ];

    /// Wire name of the command, e.g. `"createUser"`.
    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateUser => "createUser",
            Command::AllUsers => "allUsers",
            Command::FindUser => "findUser",
            Command::EditUser => "editUser",
            Command::DeleteUser => "deleteUser",
            Command::CreateProject => "createProject",
            Command::AllProjects => "allProjects",
            Command::FindProject => "findProject",
            Command::EditProject => "editProject",
            Command::DeleteProject => "deleteProject",
            Command::CreateIssue => "createIssue",
            Command::AllIssues => "allIssues",
            Command::FindIssue => "findIssue",
            Command::FindProjectIssues => "findProjectIssues",
            Command::EditIssue => "editIssue",
            Command::DeleteIssue => "deleteIssue",
            Command::CreateComment => "createComment",
            Command::AllComments => "allComments",
            Command::FindComment => "findComment",
            Command::EditComment => "editComment",
            Command::DeleteComment => "deleteComment",
            Command::SignUp => "signUp",
            Command::LogIn => "logIn",
        }
    }

    /// Service that owns the command.
    pub fn service(&self) -> Service {
        match self {
            Command::SignUp | Command::LogIn => Service::Auth,
            _ => Service::Data,
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
