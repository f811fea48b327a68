use super::*;

/// Tests posting a comment.
///
/// Expected: Ok(Comment) with the author joined
#[tokio::test]
async fn creates_comment() -> Result<(), TestError> {
    let author = create_user();
    let record = CommentFactory::new()
        .issue_id(4)
        .body("Reproduced")
        .with_user(author.clone())
        .build();
    let (test, client) =
        data_client(Script::new().on(Command::CreateComment, Step::found(&record))).await?;

    let repo = CommentRepository::new(&client);
    let comment = repo
        .create(CreateCommentParams {
            body: "Reproduced".to_string(),
            issue_id: 4,
            user_id: author.id,
        })
        .await
        .unwrap();

    assert_eq!(comment.issue_id, 4);
    assert_eq!(comment.user.map(|user| user.id), Some(author.id));
    assert_eq!(
        test.data()?.received()[0].payload,
        json!({ "body": "Reproduced", "issueId": 4, "userId": author.id })
    );

    Ok(())
}
