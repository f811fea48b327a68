use super::*;

/// Tests deleting a project.
///
/// Expected: Ok(Some(Project)) and the bare id as payload
#[tokio::test]
async fn deletes_existing_project() -> Result<(), TestError> {
    let record = ProjectFactory::new().id(3).build();
    let (test, client) =
        data_client(Script::new().on(Command::DeleteProject, Step::found(&record))).await?;

    let repo = ProjectRepository::new(&client);
    let project = repo.delete(3).await.unwrap();

    assert_eq!(project.map(|project| project.id), Some(3));
    assert_eq!(test.data()?.received()[0].payload, json!(3));

    Ok(())
}

/// Tests deleting a project that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_project() -> Result<(), TestError> {
    let (_test, client) =
        data_client(Script::new().on(Command::DeleteProject, Step::not_found())).await?;

    let repo = ProjectRepository::new(&client);

    assert!(repo.delete(404).await.unwrap().is_none());

    Ok(())
}
