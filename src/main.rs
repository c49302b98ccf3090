//! Thin CLI over the rfd library.
//!
//! Argument parsing, dispatch, colorization, and process exit live here;
//! the library only ever returns data.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use simple_logger::SimpleLogger;

use rfd::{posts::Posts, topics::Topics, Client};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BLUE: &str = "\x1b[34m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

#[derive(Parser)]
#[command(name = "rfd", version, about = "RedFlagDeals.com command line client")]
struct Cli {
    /// Prints per-request logs from the library.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Displays threads in the specified forum id. Defaults to 9.
    ///
    /// Popular forum ids:
    ///
    ///   9   hot deals
    ///   14  computer and electronics
    ///   15  offtopic
    ///   17  entertainment
    ///   18  food and drink
    ///   40  automotive
    ///   53  home and garden
    ///   67  fashion and apparel
    ///   74  shopping discussion
    ///   88  cell phones
    #[command(verbatim_doc_comment)]
    Threads {
        /// Number of topics.
        #[arg(long, default_value_t = 10)]
        limit: i64,

        /// Forum id.
        #[arg(default_value_t = 9)]
        forum_id: u32,
    },

    /// Displays posts in a specific thread.
    ///
    /// POST_ID can be a full url or post id only.
    ///
    /// Example:
    ///
    ///   url:     https://forums.redflagdeals.com/koodo-targeted-public-mobile-12-120-koodo-5gb-40-no-referrals-2173603
    ///   post_id: 2173603
    #[command(verbatim_doc_comment)]
    Posts {
        /// The post offset to start from, for incremental crawling.
        #[arg(long, default_value_t = 0)]
        start: i64,

        /// Number of posts to be crawled, 0 for all remaining.
        #[arg(long, default_value_t = 0)]
        count: i64,

        /// Topic id or full thread URL.
        post_id: String,
    },

    /// Displays the version.
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    SimpleLogger::new().with_level(level).init()?;

    let client = Client::new();

    match cli.command {
        Command::Threads { limit, forum_id } => {
            let limit = check_input(limit)?;
            let topics = Topics::new(&client, forum_id, limit).await;
            for (rank, topic) in topics.iter().enumerate() {
                println!(
                    " {}.{}{RESET} {}",
                    rank + 1,
                    score_tag(topic.score()),
                    topic.title()
                );
                println!(" {BLUE}{}{RESET}", topic.url());
                println!();
            }
        }

        Command::Posts {
            start,
            count,
            post_id,
        } => {
            let start = check_input(start)?;
            let count = check_input(count)?;
            let posts = Posts::new(&client, &post_id, start, count).await?;
            for post in posts.iter() {
                println!(
                    " -{}{RESET} {}{YELLOW} ({}){RESET}",
                    score_tag(post.score()),
                    post.body(),
                    post.user()
                );
                println!();
            }
        }

        Command::Version => println!("rfd {}", env!("CARGO_PKG_VERSION")),
    }

    Ok(())
}

/// Rejects negative offsets and counts before any network access.
fn check_input(value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| anyhow::anyhow!("Invalid input: {value}"))
}

/// Colorized score tag: green when positive, red when negative, blue at
/// zero.
fn score_tag(score: i64) -> String {
    use std::cmp::Ordering;

    match score.cmp(&0) {
        Ordering::Greater => format!("{GREEN} [+{score}]"),
        Ordering::Less => format!("{RED} [{score}]"),
        Ordering::Equal => format!("{BLUE} [{score}]"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_inputs_are_rejected() {
        assert!(check_input(-1).is_err());
        assert!(check_input(i64::MIN).is_err());
    }

    #[test]
    fn non_negative_inputs_pass() {
        assert_eq!(check_input(0).unwrap(), 0);
        assert_eq!(check_input(25).unwrap(), 25);
    }

    #[test]
    fn score_tags_carry_sign_and_color() {
        assert!(score_tag(5).contains("[+5]"));
        assert!(score_tag(5).starts_with(GREEN));
        assert!(score_tag(-3).contains("[-3]"));
        assert!(score_tag(-3).starts_with(RED));
        assert!(score_tag(0).contains("[0]"));
        assert!(score_tag(0).starts_with(BLUE));
    }
}
