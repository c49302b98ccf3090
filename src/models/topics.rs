//! Ranked topic listings for a forum.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::{
    models::{safe_per_page, score_of, Votes},
    Client,
};

/// A ranked listing of topics from one forum.
///
/// The listing is a best-effort summary view: a transport failure, a
/// non-OK status, or undecodable JSON degrades to an *empty* listing with
/// an error log, it never fails the caller. Post retrieval is the exact
/// opposite, see [`Posts`].
///
/// [`Posts`]: crate::posts::Posts
#[derive(Debug, Clone)]
pub struct Topics {
    topics: Vec<TopicSummary>,
}

impl Topics {
    /// Fetches up to `limit` topics from a forum.
    ///
    /// The per-page value sent upstream is bounded to the API's accepted
    /// range, the returned listing is truncated to `limit`.
    pub async fn new(client: &Client, forum_id: u32, limit: usize) -> Self {
        let url = format!(
            "{}/api/topics?forum_id={}&per_page={}",
            client.base(),
            forum_id,
            safe_per_page(limit)
        );

        let listing: TopicListing = match client.fetch_json(&url).await {
            Ok(listing) => listing,
            Err(err) => {
                log::error!("unable to retrieve topics: {err}");
                return Self { topics: Vec::new() };
            }
        };

        let mut topics: Vec<TopicSummary> = listing
            .topics
            .into_iter()
            .map(|topic| TopicSummary {
                score: score_of(topic.votes.as_ref()),
                url: format!("{}{}", client.base(), topic.web_path),
                title: topic.title,
            })
            .collect();
        topics.truncate(limit);

        Self { topics }
    }
}

impl Deref for Topics {
    type Target = Vec<TopicSummary>;

    fn deref(&self) -> &Self::Target {
        &self.topics
    }
}

/// One row of a topic listing.
#[derive(Debug, Clone)]
pub struct TopicSummary {
    title: String,
    score: i64,
    url: String,
}

impl TopicSummary {
    /// Returns the topic title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the net vote score, 0 when the topic carries no votes.
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Returns the canonical web URL of the topic.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Wire form of the topic listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TopicListing {
    #[serde(default)]
    topics: Vec<Topic>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Topic {
    title: String,

    web_path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    votes: Option<Votes>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_decodes_with_and_without_votes() {
        let json = r#"{
            "topics": [
                {
                    "title": "Koodo targeted plan",
                    "web_path": "/koodo-targeted-2173603",
                    "votes": {"total_up": 12, "total_down": 3}
                },
                {
                    "title": "Unvoted topic",
                    "web_path": "/unvoted-topic-42",
                    "votes": null
                },
                {
                    "title": "Voteless topic",
                    "web_path": "/voteless-topic-43"
                }
            ]
        }"#;

        let listing: TopicListing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.topics.len(), 3);
        assert_eq!(score_of(listing.topics[0].votes.as_ref()), 9);
        assert_eq!(score_of(listing.topics[1].votes.as_ref()), 0);
        assert_eq!(score_of(listing.topics[2].votes.as_ref()), 0);
        assert_eq!(listing.topics[0].web_path, "/koodo-targeted-2173603");
    }

    #[test]
    fn empty_listing_decodes() {
        let listing: TopicListing = serde_json::from_str("{}").unwrap();
        assert!(listing.topics.is_empty());
    }
}
