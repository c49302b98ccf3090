#![deny(clippy::all, clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::must_use_candidate)]
//! # rfd
//!
//! rfd is a command-line client and wrapper library around the
//! RedFlagDeals forum's read-only JSON API.
//!
//! This library can fetch:
//! - [`Topics`] — a ranked, score-annotated topic listing for a forum
//! - [`Posts`] — an offset-addressable slice of a thread's posts
//!
//! Topic listings are a best-effort view and degrade to an empty listing
//! when the API misbehaves. Post retrieval is exact: the requested range
//! comes back complete, in thread order, with each post's score and
//! author resolved — or the call fails.
//!
//! ## Example: printing a slice of a thread.
//!
//! ```no_run
//! # type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
//! use rfd::posts::Posts;
//! use rfd::topics::Topics;
//! use rfd::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new();
//!
//!     // ten topics from the hot deals forum
//!     let topics = Topics::new(&client, 9, 10).await;
//!     for topic in topics.iter() {
//!         println!("[{}] {}", topic.score(), topic.title());
//!     }
//!
//!     // ten posts starting at the 35th post of a thread
//!     let posts = Posts::new(&client, "2173603", 35, 10).await?;
//!     for post in posts.iter() {
//!         println!("[{}] {} ({})", post.score(), post.body(), post.user());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! [`Topics`]: crate::topics::Topics
//! [`Posts`]:  crate::posts::Posts

/// Client module contains [`Client`] for requesting data.
pub mod client;

/// Contains [`Error`]s that can be thrown by the library.
///
/// [`Error`]: crate::error::Error
pub mod error;

pub(crate) mod ident;

pub(crate) mod models;

pub(crate) mod result;

pub(crate) mod sanitize;

pub use client::Client;
pub use models::*;
