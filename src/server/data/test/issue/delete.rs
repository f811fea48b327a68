use super::*;

/// Tests deleting an issue that does not exist.
///
/// Expected: Ok(None) and the bare id as payload
#[tokio::test]
async fn returns_none_for_unknown_issue() -> Result<(), TestError> {
    let (test, client) =
        data_client(Script::new().on(Command::DeleteIssue, Step::not_found())).await?;

    let repo = IssueRepository::new(&client);

    assert!(repo.delete(404).await.unwrap().is_none());
    assert_eq!(test.data()?.received()[0].payload, json!(404));

    Ok(())
}
