use super::*;

/// Tests creating a project.
///
/// Expected: Ok(Project) with the backend-assigned id and category
#[tokio::test]
async fn creates_project() -> Result<(), TestError> {
    let record = ProjectFactory::new()
        .name("Engine")
        .category(ProjectCategory::Business)
        .build();
    let (test, client) =
        data_client(Script::new().on(Command::CreateProject, Step::found(&record))).await?;

    let repo = ProjectRepository::new(&client);
    let project = repo
        .create(CreateProjectParams {
            name: "Engine".to_string(),
            url: None,
            description: None,
            category: ProjectCategory::Business,
        })
        .await
        .unwrap();

    assert_eq!(project.id, record.id);
    assert_eq!(project.category, ProjectCategory::Business);

    let payload = &test.data()?.received()[0].payload;
    assert_eq!(payload["name"], "Engine");
    assert_eq!(payload["category"], "BUSINESS");

    Ok(())
}
