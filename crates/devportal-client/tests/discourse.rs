//! Discourse client against a mock forum.

use devportal_client::{ClientError, DiscourseClient};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn topic(id: u64, category_id: u64) -> Value {
    json!({
        "id": id,
        "title": format!("Topic {id}"),
        "fancy_title": format!("Topic {id}"),
        "slug": format!("topic-{id}"),
        "highest_post_number": 3,
        "last_posted_at": "2024-05-01T10:00:00.000Z",
        "last_poster_username": "flowdev",
        "category_id": category_id,
        "views": 12
    })
}

fn topic_list(topics: Vec<Value>) -> Value {
    json!({
        "users": [{"id": 1, "username": "flowdev"}],
        "topic_list": {"can_create_topic": false, "per_page": 30, "topics": topics}
    })
}

async fn mount_category(server: &MockServer, id: u64, name: &str, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/c/{id}/show.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "category": {"id": id, "name": name, "slug": name.to_lowercase()}
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn latest_summaries_takes_five_with_category_names() {
    let server = MockServer::start().await;
    let topics = (1..=7).map(|id| topic(id, if id % 2 == 0 { 30 } else { 36 })).collect();
    Mock::given(method("GET"))
        .and(path("/latest.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(topic_list(topics)))
        .expect(1)
        .mount(&server)
        .await;
    // Five topics over two categories: each category is fetched once.
    mount_category(&server, 30, "Breaking Changes", 1).await;
    mount_category(&server, 36, "Mainnet Sporks", 1).await;

    let client = DiscourseClient::new(server.uri()).unwrap();
    let summaries = client.latest_summaries().await.unwrap();

    assert_eq!(summaries.len(), 5);
    assert_eq!(summaries[0].heading, "Topic 1");
    assert_eq!(summaries[0].subheading, "Mainnet Sporks");
    assert_eq!(summaries[1].subheading, "Breaking Changes");
    assert_eq!(summaries[0].num_comments, 2);
    assert_eq!(
        summaries[0].forum_link,
        format!("{}/t/topic-1/1/3", server.uri())
    );
    assert_eq!(
        summaries[4].last_updated_date.as_deref(),
        Some("2024-05-01T10:00:00.000Z")
    );
}

#[tokio::test]
async fn category_name_is_memoized() {
    let server = MockServer::start().await;
    mount_category(&server, 30, "Breaking Changes", 1).await;

    let client = DiscourseClient::new(server.uri()).unwrap();
    for _ in 0..3 {
        assert_eq!(client.category_name(30).await.unwrap(), "Breaking Changes");
    }
}

#[tokio::test]
async fn category_listings_use_fixed_paths() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/c/announcements/breaking-changes/30.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(topic_list(vec![topic(9, 30)])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/c/mainnet-sporks/36.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(topic_list(Vec::new())))
        .mount(&server)
        .await;

    let client = DiscourseClient::new(server.uri()).unwrap();
    let breaking = client.breaking_changes_topics().await.unwrap();
    assert_eq!(breaking.len(), 1);
    assert_eq!(breaking[0].slug, "topic-9");
    assert!(client.mainnet_spork_topics().await.unwrap().is_empty());
}

#[tokio::test]
async fn non_success_status_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest.json"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let client = DiscourseClient::new(server.uri()).unwrap();
    let err = client.latest_summaries().await.unwrap_err();
    match &err {
        ClientError::Http { status, body, .. } => {
            assert_eq!(*status, 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("expected HTTP error, got {other:?}"),
    }
    assert!(err.is_retryable());
}

#[tokio::test]
async fn failed_category_lookup_fails_the_list_and_is_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(topic_list(vec![topic(1, 99)])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/c/99/show.json"))
        .respond_with(ResponseTemplate::new(404))
        .expect(2)
        .mount(&server)
        .await;

    let client = DiscourseClient::new(server.uri()).unwrap();
    for _ in 0..2 {
        let err = client.latest_summaries().await.unwrap_err();
        assert!(matches!(err, ClientError::Http { status: 404, .. }));
    }
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let client = DiscourseClient::new(server.uri()).unwrap();
    let err = client.latest_topics().await.unwrap_err();
    assert!(matches!(err, ClientError::JsonParse(_)));
}
