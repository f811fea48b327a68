use crate::server::{
    data::project::ProjectRepository,
    error::AppError,
    model::project::{CreateProjectParams, Project, UpdateProjectParams},
    rpc::ServiceClient,
};

pub struct ProjectService<'a> {
    client: &'a ServiceClient,
}

impl<'a> ProjectService<'a> {
    pub fn new(client: &'a ServiceClient) -> Self {
        Self { client }
    }

    /// Creates a new project
    pub async fn create(&self, params: CreateProjectParams) -> Result<Project, AppError> {
        let repo = ProjectRepository::new(self.client);

        Ok(repo.create(params).await?)
    }

    /// Lists every project
    pub async fn get_all(&self) -> Result<Vec<Project>, AppError> {
        let repo = ProjectRepository::new(self.client);

        Ok(repo.get_all().await?)
    }

    /// Gets a specific project by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Project, AppError> {
        let repo = ProjectRepository::new(self.client);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }

    /// Updates a project
    pub async fn update(&self, params: UpdateProjectParams) -> Result<Project, AppError> {
        let repo = ProjectRepository::new(self.client);

        repo.update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found to update".to_string()))
    }

    /// Deletes a project
    pub async fn delete(&self, id: i32) -> Result<Project, AppError> {
        let repo = ProjectRepository::new(self.client);

        repo.delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found to delete".to_string()))
    }
}
