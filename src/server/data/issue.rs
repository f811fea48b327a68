//! Issue data repository.

use protocol::{
    record::{issue::IssueRecord, NoPayload},
    Command,
};

use crate::server::{
    model::issue::{CreateIssueParams, Issue, UpdateIssueParams},
    rpc::{RpcError, ServiceClient},
};

/// Repository providing issue operations against the data service.
pub struct IssueRepository<'a> {
    client: &'a ServiceClient,
}

impl<'a> IssueRepository<'a> {
    pub fn new(client: &'a ServiceClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, params: CreateIssueParams) -> Result<Issue, RpcError> {
        let record: IssueRecord = self
            .client
            .expect(Command::CreateIssue, &params.into_record())
            .await?;

        Ok(Issue::from_record(record))
    }

    pub async fn get_all(&self) -> Result<Vec<Issue>, RpcError> {
        let records: Vec<IssueRecord> = self
            .client
            .list(Command::AllIssues, &NoPayload {})
            .await?;

        Ok(records.into_iter().map(Issue::from_record).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Issue>, RpcError> {
        let record: Option<IssueRecord> = self.client.find(Command::FindIssue, &id).await?;

        Ok(record.map(Issue::from_record))
    }

    /// Lists the issues of one project.
    ///
    /// Unlike the other collection queries this one carries the not-found signal: the
    /// backend distinguishes a missing project from a project without issues.
    ///
    /// # Returns
    /// - `Ok(Some(Vec<Issue>))` - The project's issues, possibly none
    /// - `Ok(None)` - The project does not exist
    /// - `Err(RpcError)` - The command could not be completed
    pub async fn find_by_project(&self, project_id: i32) -> Result<Option<Vec<Issue>>, RpcError> {
        let records: Option<Vec<IssueRecord>> = self
            .client
            .find(Command::FindProjectIssues, &project_id)
            .await?;

        Ok(records.map(|records| records.into_iter().map(Issue::from_record).collect()))
    }

    pub async fn update(&self, params: UpdateIssueParams) -> Result<Option<Issue>, RpcError> {
        let record: Option<IssueRecord> = self
            .client
            .find(Command::EditIssue, &params.into_record())
            .await?;

        Ok(record.map(Issue::from_record))
    }

    pub async fn delete(&self, id: i32) -> Result<Option<Issue>, RpcError> {
        let record: Option<IssueRecord> = self.client.find(Command::DeleteIssue, &id).await?;

        Ok(record.map(Issue::from_record))
    }
}
