use super::*;

/// Tests listing a project's issues.
///
/// Expected: 200 with the issues
#[tokio::test]
async fn lists_project_issues() -> Result<(), TestError> {
    let records = vec![
        IssueFactory::new().project_id(5).build(),
        IssueFactory::new().project_id(5).build(),
    ];
    let (test, app) = data_gateway(
        Script::new().on(Command::FindProjectIssues, Step::found(&records)),
    )
    .await?;

    let (status, body) = send(&app, Method::GET, "/issues/project/5", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(2));
    assert_eq!(test.data()?.received_commands(), vec![Command::FindProjectIssues]);

    Ok(())
}

/// Tests a project without issues.
///
/// Expected: 200 with an empty array
#[tokio::test]
async fn empty_project_passes_through() -> Result<(), TestError> {
    let (_test, app) = data_gateway(
        Script::new().on(Command::FindProjectIssues, Step::found(json!([]))),
    )
    .await?;

    let (status, body) = send(&app, Method::GET, "/issues/project/5", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    Ok(())
}

/// Tests a project the data service does not know.
///
/// Expected: 404 with "Project not found"
#[tokio::test]
async fn missing_project_is_not_found() -> Result<(), TestError> {
    let (_test, app) = data_gateway(
        Script::new().on(Command::FindProjectIssues, Step::not_found()),
    )
    .await?;

    let (status, body) = send(&app, Method::GET, "/issues/project/404", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Project not found");

    Ok(())
}
