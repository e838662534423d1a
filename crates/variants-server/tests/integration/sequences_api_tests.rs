//! Sequence placeholder route tests

use rocket::http::{ContentType, Status};

use crate::test_utils::{client_for, json_body, local_context};

#[rocket::async_test]
async fn test_get_routes_return_text() {
    let client = client_for(local_context(vec![])).await;

    let all = client.get("/sequences").dispatch().await;
    assert_eq!(all.status(), Status::Ok);
    assert_eq!(all.content_type(), Some(ContentType::Plain));
    assert_eq!(all.into_string().await.as_deref(), Some("Got all sequences"));

    let one = client.get("/sequences/MN908947").dispatch().await;
    assert_eq!(
        one.into_string().await.as_deref(),
        Some("Got the sequence with the id: MN908947")
    );
}

#[rocket::async_test]
async fn test_mutating_routes_acknowledge() {
    let client = client_for(local_context(vec![])).await;

    let post = json_body(client.post("/sequences/1").dispatch().await).await;
    let put = json_body(client.put("/sequences/1").dispatch().await).await;
    let patch = json_body(client.patch("/sequences/1").dispatch().await).await;
    let delete = json_body(client.delete("/sequences/1").dispatch().await).await;

    assert_eq!(post["ok"], "OK post");
    assert_eq!(put["ok"], "OK put");
    assert_eq!(patch["ok"], "OK patch");
    assert_eq!(delete["ok"], "OK delete");
}
