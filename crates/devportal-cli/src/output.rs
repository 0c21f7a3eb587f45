//! Table and JSON rendering for command output.

use chrono::{DateTime, Utc};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table, modifiers::UTF8_ROUND_CORNERS};
use devportal_client::NetworkConfig;
use devportal_model::{ForumTopicSummary, StatusNetwork, Topic};
use devportal_transform::NormalizedSporks;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// `May 1, 2024` for a Discourse timestamp; unparseable input is shown as
/// received.
pub fn format_forum_date(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|date| date.with_timezone(&Utc).format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

pub fn forum_summaries_table(summaries: &[ForumTopicSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Topic", "Category", "Comments", "Last post", "Link"]);
    apply_table_style(&mut table);
    for summary in summaries {
        let last_post = summary
            .last_updated_date
            .as_deref()
            .map(format_forum_date)
            .unwrap_or_default();
        table.add_row(vec![
            summary.heading.clone(),
            summary.subheading.clone(),
            summary.num_comments.to_string(),
            last_post,
            summary.forum_link.clone(),
        ]);
    }
    table
}

pub fn topics_table(topics: &[Topic], base_url: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Title", "Posted", "Link"]);
    apply_table_style(&mut table);
    for topic in topics {
        let posted = topic
            .created_at
            .as_deref()
            .map(format_forum_date)
            .unwrap_or_default();
        table.add_row(vec![
            topic.fancy_title.clone(),
            posted,
            devportal_transform::forum_link(
                base_url,
                &topic.slug,
                topic.id,
                topic.highest_post_number,
            ),
        ]);
    }
    table
}

pub fn networks_table(networks: &[StatusNetwork]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Id", "Title", "Path", "Status component"]);
    apply_table_style(&mut table);
    for network in networks {
        table.add_row(vec![
            network.id,
            network.title,
            network.url_path,
            network.component_id,
        ]);
    }
    table
}

pub fn contracts_table(config: &NetworkConfig) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Contract", "Address"]);
    apply_table_style(&mut table);
    for (name, address) in &config.contracts {
        table.add_row(vec![name.as_str(), address.as_str()]);
    }
    table
}

/// Pretty JSON for every network, or only `network` (an absent network
/// renders as `[]`).
pub fn sporks_json(sporks: &NormalizedSporks, network: Option<&str>) -> serde_json::Result<String> {
    match network {
        Some(network) => serde_json::to_string_pretty(sporks.network(network)),
        None => serde_json::to_string_pretty(sporks),
    }
}
