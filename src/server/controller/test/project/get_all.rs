use super::*;

/// Tests listing projects when there are none.
///
/// Expected: 200 with `[]`
#[tokio::test]
async fn empty_list_passes_through() -> Result<(), TestError> {
    let (_test, app) =
        data_gateway(Script::new().on(Command::AllProjects, Step::found(json!([])))).await?;

    let (status, body) = send(&app, Method::GET, "/projects", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    Ok(())
}

/// Tests listing projects.
///
/// Expected: 200 with every project
#[tokio::test]
async fn lists_projects() -> Result<(), TestError> {
    let records = vec![create_project(), create_project()];
    let (_test, app) =
        data_gateway(Script::new().on(Command::AllProjects, Step::found(&records))).await?;

    let (status, body) = send(&app, Method::GET, "/projects", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(2));

    Ok(())
}
