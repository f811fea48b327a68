use super::*;

/// Tests listing projects when the backend has none.
///
/// Expected: Ok(empty Vec) and an empty object as payload
#[tokio::test]
async fn passes_empty_collection_through() -> Result<(), TestError> {
    let (test, client) =
        data_client(Script::new().on(Command::AllProjects, Step::found(json!([])))).await?;

    let repo = ProjectRepository::new(&client);

    assert!(repo.get_all().await.unwrap().is_empty());
    assert_eq!(test.data()?.received()[0].payload, json!({}));

    Ok(())
}
