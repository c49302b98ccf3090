//! Topic identifier normalization.
//!
//! Users hand the CLI either a bare numeric topic id or the thread's full
//! forum URL, whose last path segment carries the id after the final `-`:
//!
//! ```text
//! https://forums.redflagdeals.com/koodo-targeted-public-mobile-2173603
//! ```

use url::Url;

use crate::{error::Error, result::Result};

/// Resolves a user-supplied topic reference to its numeric id.
///
/// No network access happens here; a bad reference is rejected before a
/// single request is dispatched.
///
/// # Errors
///
/// Returns [`Error::InvalidIdentifier`] when the reference is neither a
/// numeric id nor an absolute URL with a numeric trailing token.
pub(crate) fn normalize(identifier: &str) -> Result<u64> {
    if let Ok(id) = identifier.parse::<u64>() {
        return Ok(id);
    }
    trailing_id(identifier).ok_or_else(|| Error::InvalidIdentifier(identifier.to_string()))
}

/// Pulls the trailing numeric token out of an absolute URL's last
/// non-empty path segment.
fn trailing_id(identifier: &str) -> Option<u64> {
    let url = Url::parse(identifier).ok()?;
    if !url.has_host() {
        return None;
    }
    let segment = url.path_segments()?.filter(|s| !s.is_empty()).next_back()?;
    segment.rsplit('-').next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_id_passes_through() {
        assert_eq!(normalize("2173603").unwrap(), 2_173_603);
    }

    #[test]
    fn url_yields_trailing_id() {
        let url = "https://forums.redflagdeals.com/koodo-targeted-public-mobile-12-120-koodo-5gb-40-no-referrals-2173603";
        assert_eq!(normalize(url).unwrap(), 2_173_603);
    }

    #[test]
    fn id_comes_from_last_path_segment() {
        assert_eq!(normalize("https://site/x/forum-y-1234567").unwrap(), 1_234_567);
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(normalize("https://site/x/forum-y-1234567/").unwrap(), 1_234_567);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            normalize("not a url or int"),
            Err(Error::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn url_without_numeric_tail_is_rejected() {
        assert!(normalize("https://site/forum-thread").is_err());
    }

    #[test]
    fn url_without_path_is_rejected() {
        assert!(normalize("https://site").is_err());
    }
}
