use super::*;

/// Tests deleting an issue.
///
/// Expected: 200 with the removed issue
#[tokio::test]
async fn deletes_issue() -> Result<(), TestError> {
    let record = IssueFactory::new().id(41).build();
    let (test, app) =
        data_gateway(Script::new().on(Command::DeleteIssue, Step::found(&record))).await?;

    let (status, body) = send(&app, Method::DELETE, "/issues/41", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 41);
    assert_eq!(test.data()?.received()[0].payload, json!(41));

    Ok(())
}

/// Tests deleting an unknown issue.
///
/// Expected: 404 with "Issue not found to delete"
#[tokio::test]
async fn deleting_unknown_issue_is_not_found() -> Result<(), TestError> {
    let (_test, app) =
        data_gateway(Script::new().on(Command::DeleteIssue, Step::not_found())).await?;

    let (status, body) = send(&app, Method::DELETE, "/issues/41", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Issue not found to delete");

    Ok(())
}
