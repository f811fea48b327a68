use crate::server::{
    data::comment::CommentRepository,
    error::AppError,
    model::comment::{Comment, CreateCommentParams, UpdateCommentParams},
    rpc::ServiceClient,
};

pub struct CommentService<'a> {
    client: &'a ServiceClient,
}

impl<'a> CommentService<'a> {
    pub fn new(client: &'a ServiceClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        let repo = CommentRepository::new(self.client);

        Ok(repo.create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Comment>, AppError> {
        let repo = CommentRepository::new(self.client);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Comment, AppError> {
        let repo = CommentRepository::new(self.client);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))
    }

    pub async fn update(&self, params: UpdateCommentParams) -> Result<Comment, AppError> {
        let repo = CommentRepository::new(self.client);

        repo.update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found to update".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<Comment, AppError> {
        let repo = CommentRepository::new(self.client);

        repo.delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found to delete".to_string()))
    }
}
