use super::*;

/// Tests finding an issue with its reporter joined.
///
/// Expected: Ok(Some(Issue)) carrying the nested user
#[tokio::test]
async fn finds_issue_with_reporter() -> Result<(), TestError> {
    let reporter = UserFactory::new().email("ada@example.com").build();
    let record = IssueFactory::new().with_user(reporter.clone()).build();
    let (_test, client) =
        data_client(Script::new().on(Command::FindIssue, Step::found(&record))).await?;

    let repo = IssueRepository::new(&client);
    let issue = repo.find_by_id(record.id).await.unwrap().unwrap();

    assert_eq!(issue.user_id, reporter.id);
    assert_eq!(issue.user.map(|user| user.email), Some(reporter.email));

    Ok(())
}

/// Tests decoding the legacy numeric priority in a stored record.
///
/// Expected: `"4"` decodes to `High`
#[tokio::test]
async fn decodes_numeric_priority() -> Result<(), TestError> {
    let record = IssueFactory::new().build();
    let mut value = serde_json::to_value(&record).unwrap();
    value["priority"] = json!("4");
    let (_test, client) =
        data_client(Script::new().on(Command::FindIssue, Step::found(value))).await?;

    let repo = IssueRepository::new(&client);
    let issue = repo.find_by_id(record.id).await.unwrap().unwrap();

    assert_eq!(issue.priority, IssuePriority::High);

    Ok(())
}

/// Tests finding an issue that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_issue() -> Result<(), TestError> {
    let (_test, client) =
        data_client(Script::new().on(Command::FindIssue, Step::not_found())).await?;

    let repo = IssueRepository::new(&client);

    assert!(repo.find_by_id(404).await.unwrap().is_none());

    Ok(())
}
