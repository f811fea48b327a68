use super::*;

/// Tests deleting a comment.
///
/// Expected: 200 with the removed comment
#[tokio::test]
async fn deletes_comment() -> Result<(), TestError> {
    let record = CommentFactory::new().id(9).build();
    let (_test, app) =
        data_gateway(Script::new().on(Command::DeleteComment, Step::found(&record))).await?;

    let (status, body) = send(&app, Method::DELETE, "/comments/9", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 9);

    Ok(())
}

/// Tests deleting an unknown comment.
///
/// Expected: 404
#[tokio::test]
async fn unknown_comment_is_not_found() -> Result<(), TestError> {
    let (_test, app) =
        data_gateway(Script::new().on(Command::DeleteComment, Step::not_found())).await?;

    let (status, body) = send(&app, Method::DELETE, "/comments/9", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Comment not found to delete");

    Ok(())
}
