//! Offset-addressable retrieval of a thread's posts.
//!
//! The remote API only serves posts in 1-indexed pages of at most 40
//! items, and only reveals the thread's totals inside a page response. Retrieval is therefore a single pass: normalize the
//! identifier, probe page 1 for the pagination metadata, work out the
//! minimal page range covering the requested span, fetch those pages in
//! ascending order, and trim the boundary pages down to the exact slice.

use std::{collections::HashMap, ops::Deref};

use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    ident,
    models::{safe_per_page, score_of, Votes},
    result::Result,
    sanitize::strip_html,
    Client,
};

/// Largest page size the API serves.
const PER_PAGE: usize = 40;

/// An ordered slice of a thread's posts.
///
/// Unlike the best-effort [`Topics`] listing, retrieval here is exact: the
/// requested range comes back complete and in thread order, or the call
/// fails. No partial results are ever returned.
///
/// [`Topics`]: crate::topics::Topics
#[derive(Debug, Clone)]
pub struct Posts {
    posts: Vec<Post>,
}

impl Posts {
    /// Retrieves `count` posts starting at the zero-based offset `start`.
    ///
    /// `identifier` is a numeric topic id or the thread's full forum URL.
    /// A `count` of 0 means everything from `start` to the end of the
    /// thread. A range reaching past the end is clamped, and a `start` at
    /// or past the end yields an empty slice.
    ///
    /// # Errors
    ///
    /// Fails on an unresolvable identifier (before any request is made),
    /// on the first transport or status failure (one attempt per page, no
    /// retries), and on a post whose author is missing from its own
    /// page's user list.
    pub async fn new(client: &Client, identifier: &str, start: usize, count: usize) -> Result<Self> {
        let topic_id = ident::normalize(identifier)?;
        let pager = Self::discover(client, topic_id).await?;
        Self::slice(client, topic_id, start, count, &pager).await
    }

    /// Retrieves the last `count` posts of a thread.
    ///
    /// Sugar over [`Posts::new`] with `start` derived from the thread
    /// total.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Posts::new`].
    pub async fn tail(client: &Client, identifier: &str, count: usize) -> Result<Self> {
        let topic_id = ident::normalize(identifier)?;
        let pager = Self::discover(client, topic_id).await?;
        let start = pager.total.saturating_sub(count);
        Self::slice(client, topic_id, start, count, &pager).await
    }

    /// Probes page 1 for pagination metadata.
    ///
    /// The API exposes the thread totals nowhere else, so this costs one
    /// extra round trip per retrieval.
    async fn discover(client: &Client, topic_id: u64) -> Result<Pager> {
        let url = page_url(client.base(), topic_id, safe_per_page(PER_PAGE), 1);
        let probe: PostPage = client.fetch_json(&url).await?;
        Ok(probe.pager)
    }

    async fn slice(
        client: &Client,
        topic_id: u64,
        start: usize,
        count: usize,
        pager: &Pager,
    ) -> Result<Self> {
        if start >= pager.total {
            return Ok(Self { posts: Vec::new() });
        }

        let per_page = safe_per_page(PER_PAGE);
        let count = resolve_count(start, count, pager.total);
        let (first_page, span) = page_range(start, count, per_page, pager.total_pages);

        let mut posts = Vec::with_capacity(count);
        for page_no in first_page..first_page + span {
            let url = page_url(client.base(), topic_id, per_page, page_no);
            let page: PostPage = client.fetch_json(&url).await?;
            // Only the first fetched page carries items before `start`.
            let skip = if page_no == first_page {
                start % per_page
            } else {
                0
            };
            collect_page(&mut posts, page, skip, count)?;
        }

        Ok(Self { posts })
    }
}

impl Deref for Posts {
    type Target = Vec<Post>;

    fn deref(&self) -> &Self::Target {
        &self.posts
    }
}

/// A single post, resolved and sanitized.
#[derive(Debug, Clone)]
pub struct Post {
    body: String,
    score: i64,
    user: String,
}

impl Post {
    /// Returns the post body as plain text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the net vote score, 0 when the post carries no votes.
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Returns the author's display name.
    pub fn user(&self) -> &str {
        &self.user
    }
}

/// Resolves the requested count against the thread total.
///
/// Callers guarantee `start < total`. A count of 0 means "all remaining",
/// anything past the end is clamped down rather than failed.
fn resolve_count(start: usize, count: usize, total: usize) -> usize {
    let remaining = total - start;
    if count == 0 {
        remaining
    } else {
        count.min(remaining)
    }
}

/// Computes the 1-indexed first page and page count covering
/// `[start, start + count)`.
///
/// Item offsets are zero-based, remote pages are 1-indexed. The last page
/// is bounded by the pager's `total_pages` in case the upstream metadata
/// disagrees with itself.
fn page_range(start: usize, count: usize, per_page: usize, total_pages: usize) -> (usize, usize) {
    let first = start / per_page + 1;
    let last = (start + count).div_ceil(per_page).min(total_pages);
    (first, last.saturating_sub(first - 1))
}

fn page_url(base: &str, topic_id: u64, per_page: usize, page: usize) -> String {
    format!("{base}/api/topics/{topic_id}/posts?per_page={per_page}&page={page}")
}

/// Resolves and appends one page's posts, skipping `skip` leading items
/// and stopping once `count` posts have been accumulated.
fn collect_page(posts: &mut Vec<Post>, page: PostPage, skip: usize, count: usize) -> Result<()> {
    let users = user_index(&page.users);
    for data in page.posts.into_iter().skip(skip) {
        if posts.len() == count {
            break;
        }
        // A missing author mapping is malformed upstream data, not a
        // defaultable condition like missing votes.
        let user = users
            .get(&data.author_id)
            .cloned()
            .ok_or(Error::UnknownAuthor(data.author_id))?;
        posts.push(Post {
            body: strip_html(&data.body),
            score: score_of(data.votes.as_ref()),
            user,
        });
    }
    Ok(())
}

/// Builds the author-id to username mapping for a single page.
///
/// A page's user list only covers the authors appearing on that page, so
/// the index is rebuilt per page and never merged across pages. Later
/// entries win on duplicate ids.
fn user_index(users: &[User]) -> HashMap<u64, String> {
    users
        .iter()
        .map(|user| (user.user_id, user.username.clone()))
        .collect()
}

/// Wire form of one post-page response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PostPage {
    pager: Pager,

    #[serde(default)]
    users: Vec<User>,

    #[serde(default)]
    posts: Vec<PostData>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Pager {
    total: usize,
    total_pages: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct User {
    user_id: u64,
    username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PostData {
    #[serde(default)]
    body: String,

    author_id: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    votes: Option<Votes>,
}
