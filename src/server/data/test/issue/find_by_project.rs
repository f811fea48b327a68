use super::*;

/// Tests listing the issues of a project.
///
/// Expected: Ok(Some) with every issue of the project
#[tokio::test]
async fn lists_project_issues() -> Result<(), TestError> {
    let records = vec![
        IssueFactory::new().project_id(3).build(),
        IssueFactory::new().project_id(3).build(),
    ];
    let (test, client) = data_client(
        Script::new().on(Command::FindProjectIssues, Step::found(&records)),
    )
    .await?;

    let repo = IssueRepository::new(&client);
    let issues = repo.find_by_project(3).await.unwrap().unwrap();

    assert_eq!(issues.len(), 2);
    assert!(issues.iter().all(|issue| issue.project_id == 3));
    assert_eq!(test.data()?.received()[0].payload, json!(3));

    Ok(())
}

/// Tests a project that exists but has no issues.
///
/// Expected: Ok(Some(empty)), distinct from a missing project
#[tokio::test]
async fn empty_project_is_not_missing() -> Result<(), TestError> {
    let (_test, client) = data_client(
        Script::new().on(Command::FindProjectIssues, Step::found(json!([]))),
    )
    .await?;

    let repo = IssueRepository::new(&client);
    let issues = repo.find_by_project(3).await.unwrap();

    assert_eq!(issues.map(|issues| issues.len()), Some(0));

    Ok(())
}

/// Tests a project the backend does not know.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_project_is_none() -> Result<(), TestError> {
    let (_test, client) = data_client(
        Script::new().on(Command::FindProjectIssues, Step::not_found()),
    )
    .await?;

    let repo = IssueRepository::new(&client);

    assert!(repo.find_by_project(404).await.unwrap().is_none());

    Ok(())
}
