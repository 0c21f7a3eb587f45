//! Discourse forum payloads and the topic summary shown in forum cells.
//!
//! Only the fields the portal reads are modelled; Discourse sends many more
//! and serde ignores them.

use serde::{Deserialize, Serialize};

/// Response of `GET /latest.json` and `GET /c/<slug>/<id>.json`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TopicsResponse {
    #[serde(default)]
    pub users: Vec<TopicsUser>,
    pub topic_list: TopicList,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TopicsUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_template: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TopicList {
    #[serde(default)]
    pub can_create_topic: bool,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

/// A single topic in a topic list.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Topic {
    pub id: u64,
    pub title: String,
    /// Title with HTML entities and emoji already rendered by Discourse.
    pub fancy_title: String,
    pub slug: String,
    pub posts_count: u32,
    pub reply_count: u32,
    pub highest_post_number: u32,
    pub image_url: Option<String>,
    pub created_at: Option<String>,
    /// `YYYY-MM-DDTHH:MM:SS.sssZ`
    pub last_posted_at: Option<String>,
    pub bumped_at: Option<String>,
    pub pinned: bool,
    pub closed: bool,
    pub archived: bool,
    pub views: u32,
    pub like_count: u32,
    pub last_poster_username: Option<String>,
    pub category_id: u64,
    pub featured_link: Option<String>,
}

/// Response of `GET /c/<id>/show.json`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CategoryResponse {
    pub category: Category,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub color: Option<String>,
    pub topic_count: u32,
    pub post_count: u32,
    pub description_text: Option<String>,
    pub topic_url: Option<String>,
}

/// A participant avatar in a forum cell.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumUser {
    pub profile_image: String,
    pub name: String,
}

/// A forum topic ready for display.
///
/// Rebuilt from scratch on every fetch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumTopicSummary {
    pub heading: String,
    /// Name of the topic's category.
    pub subheading: String,
    pub participants: Vec<ForumUser>,
    pub num_comments: u32,
    pub last_updated_date: Option<String>,
    pub forum_link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_list_ignores_unknown_fields() {
        let json = r#"{
            "users": [{"id": 1, "username": "alice", "name": null, "avatar_template": "/a/{size}.png"}],
            "primary_groups": [],
            "topic_list": {
                "can_create_topic": false,
                "per_page": 30,
                "top_tags": [],
                "topics": [{
                    "id": 42,
                    "title": "Hello",
                    "fancy_title": "Hello &amp; welcome",
                    "slug": "hello",
                    "highest_post_number": 3,
                    "image_url": null,
                    "last_posted_at": "2024-01-02T03:04:05.000Z",
                    "last_poster_username": "alice",
                    "category_id": 7,
                    "posters": [{"user_id": 1}],
                    "unseen": false
                }]
            }
        }"#;
        let response: TopicsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.users.len(), 1);
        let topic = &response.topic_list.topics[0];
        assert_eq!(topic.id, 42);
        assert_eq!(topic.highest_post_number, 3);
        assert_eq!(topic.image_url, None);
        assert_eq!(topic.category_id, 7);
    }

    #[test]
    fn summary_serializes_camel_case() {
        let summary = ForumTopicSummary {
            heading: "Hello".to_string(),
            subheading: "General".to_string(),
            participants: vec![],
            num_comments: 2,
            last_updated_date: None,
            forum_link: "https://forum.onflow.org/t/hello/42/3".to_string(),
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["numComments"], 2);
        assert_eq!(value["forumLink"], "https://forum.onflow.org/t/hello/42/3");
    }
}
