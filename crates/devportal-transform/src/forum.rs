//! Discourse topic to forum-cell adaptation.

use devportal_model::{ForumTopicSummary, ForumUser, Topic};

/// Number of topics shown in the latest-topics list.
pub const LATEST_TOPIC_LIMIT: usize = 5;

/// Avatar used when Discourse sends no image for a poster.
pub const DEFAULT_AVATAR_URL: &str =
    "https://github.githubassets.com/images/modules/logos_page/GitHub-Mark.png";

/// Link to the latest post of a topic: `<base>/t/<slug>/<id>/<post>`.
pub fn forum_link(base_url: &str, slug: &str, topic_id: u64, highest_post_number: u32) -> String {
    format!(
        "{}/t/{slug}/{topic_id}/{highest_post_number}",
        base_url.trim_end_matches('/')
    )
}

pub fn forum_user(username: &str, image_url: Option<&str>) -> ForumUser {
    ForumUser {
        profile_image: image_url.unwrap_or(DEFAULT_AVATAR_URL).to_string(),
        name: username.to_string(),
    }
}

/// Build the forum cell for `topic`, whose category name has already been
/// looked up.
pub fn topic_summary(topic: &Topic, category_name: &str, base_url: &str) -> ForumTopicSummary {
    ForumTopicSummary {
        heading: topic.fancy_title.clone(),
        subheading: category_name.to_string(),
        participants: vec![forum_user(
            topic.last_poster_username.as_deref().unwrap_or_default(),
            topic.image_url.as_deref(),
        )],
        // The opening post is not a comment.
        num_comments: topic.highest_post_number.saturating_sub(1),
        last_updated_date: topic.last_posted_at.clone(),
        forum_link: forum_link(base_url, &topic.slug, topic.id, topic.highest_post_number),
    }
}

/// The topics shown in the latest-topics list, in feed order.
pub fn latest_topics(topics: &[Topic]) -> &[Topic] {
    &topics[..topics.len().min(LATEST_TOPIC_LIMIT)]
}
