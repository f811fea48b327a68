use super::*;

/// Tests deleting a comment that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_comment() -> Result<(), TestError> {
    let (test, client) =
        data_client(Script::new().on(Command::DeleteComment, Step::not_found())).await?;

    let repo = CommentRepository::new(&client);

    assert!(repo.delete(77).await.unwrap().is_none());
    assert_eq!(test.data()?.received()[0].payload, json!(77));

    Ok(())
}
