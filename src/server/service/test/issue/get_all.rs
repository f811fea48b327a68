use super::*;

/// Tests listing issues when there are none.
///
/// Expected: Ok(empty), not NotFound
#[tokio::test]
async fn empty_list_is_not_absence() -> Result<(), TestError> {
    let (_test, client) =
        client_for(Service::Data, Script::new().on(Command::AllIssues, Step::found(json!([]))))
            .await?;

    let issues = IssueService::new(&client).get_all().await.unwrap();

    assert!(issues.is_empty());

    Ok(())
}
