use protocol::{
    record::{comment::CommentRecord, NoPayload},
    Command,
};

use crate::server::{
    model::comment::{Comment, CreateCommentParams, UpdateCommentParams},
    rpc::{RpcError, ServiceClient},
};

/// Repository providing comment operations against the data service.
pub struct CommentRepository<'a> {
    client: &'a ServiceClient,
}

impl<'a> CommentRepository<'a> {
    pub fn new(client: &'a ServiceClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, RpcError> {
        let record: CommentRecord = self
            .client
            .expect(Command::CreateComment, &params.into_record())
            .await?;

        Ok(Comment::from_record(record))
    }

    pub async fn get_all(&self) -> Result<Vec<Comment>, RpcError> {
        let records: Vec<CommentRecord> = self
            .client
            .list(Command::AllComments, &NoPayload {})
            .await?;

        Ok(records.into_iter().map(Comment::from_record).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, RpcError> {
        let record: Option<CommentRecord> = self.client.find(Command::FindComment, &id).await?;

        Ok(record.map(Comment::from_record))
    }

    pub async fn update(&self, params: UpdateCommentParams) -> Result<Option<Comment>, RpcError> {
        let record: Option<CommentRecord> = self
            .client
            .find(Command::EditComment, &params.into_record())
            .await?;

        Ok(record.map(Comment::from_record))
    }

    pub async fn delete(&self, id: i32) -> Result<Option<Comment>, RpcError> {
        let record: Option<CommentRecord> = self.client.find(Command::DeleteComment, &id).await?;

        Ok(record.map(Comment::from_record))
    }
}
