// rewriter.rs
use crate::error::Error;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

pub const DEFAULT_MIRROR_HOST: &str = "fxtwitter.com";

/// Twitter/X post links: bare, `www.` and `mobile.` hosts, any case.
static TWEET_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)https?://(?:(?:www\.)?(?:twitter|x)\.com|mobile\.twitter\.com)/(?P<path>[^/\s]+/status/[0-9]+(?:\?\S*)?)",
    )
    .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteResult {
    pub original_text: String,
    pub rewritten_text: String,
    pub changed: bool,
}

/// Rewrites post links onto a preview mirror host.
#[derive(Debug, Clone)]
pub struct Rewriter {
    mirror_host: String,
    replacement: String,
}

impl Rewriter {
    pub fn new(mirror_host: &str) -> Result<Self, Error> {
        let valid_chars = mirror_host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | ':'));

        // A mirror that is itself a source host would never reach a fixpoint.
        if mirror_host.is_empty()
            || !valid_chars
            || TWEET_URL.is_match(&format!("https://{}/probe/status/1", mirror_host))
        {
            return Err(Error::InvalidMirrorHost(mirror_host.to_string()));
        }

        Ok(Self {
            mirror_host: mirror_host.to_string(),
            replacement: format!("https://{}/${{path}}", mirror_host),
        })
    }

    pub fn mirror_host(&self) -> &str {
        &self.mirror_host
    }

    /// Replaces every recognized link in `text`. Query strings can carry
    /// further links, so substitution repeats until nothing matches.
    pub fn rewrite(&self, text: &str) -> RewriteResult {
        let mut rewritten = text.to_string();

        loop {
            let next = match TWEET_URL.replace_all(&rewritten, self.replacement.as_str()) {
                Cow::Borrowed(_) => None,
                Cow::Owned(next) => Some(next),
            };

            match next {
                Some(next) => rewritten = next,
                None => break,
            }
        }

        RewriteResult {
            changed: rewritten != text,
            original_text: text.to_string(),
            rewritten_text: rewritten,
        }
    }
}

impl Default for Rewriter {
    fn default() -> Self {
        Self {
            mirror_host: DEFAULT_MIRROR_HOST.to_string(),
            replacement: format!("https://{}/${{path}}", DEFAULT_MIRROR_HOST),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(text: &str) -> RewriteResult {
        Rewriter::default().rewrite(text)
    }

    #[test]
    fn rewrites_twitter_link_in_sentence() {
        let result = rewrite("check this out https://twitter.com/alice/status/12345");
        assert_eq!(
            result.rewritten_text,
            "check this out https://fxtwitter.com/alice/status/12345"
        );
        assert!(result.changed);
        assert_eq!(
            result.original_text,
            "check this out https://twitter.com/alice/status/12345"
        );
    }

    #[test]
    fn keeps_query_string() {
        let result = rewrite("https://x.com/bob/status/999?s=20");
        assert_eq!(result.rewritten_text, "https://fxtwitter.com/bob/status/999?s=20");
        assert!(result.changed);
    }

    #[test]
    fn plain_text_is_untouched() {
        let result = rewrite("hello world");
        assert_eq!(result.rewritten_text, "hello world");
        assert!(!result.changed);

        assert!(!rewrite("").changed);
    }

    #[test]
    fn rewrites_every_host_in_one_message() {
        let result = rewrite(
            "a https://www.twitter.com/one/status/1 b http://x.com/two/status/2 c https://www.x.com/three/status/3",
        );
        assert_eq!(
            result.rewritten_text,
            "a https://fxtwitter.com/one/status/1 b https://fxtwitter.com/two/status/2 c https://fxtwitter.com/three/status/3"
        );
    }

    #[test]
    fn rewrites_mobile_host() {
        let result = rewrite("https://mobile.twitter.com/carol/status/42");
        assert_eq!(result.rewritten_text, "https://fxtwitter.com/carol/status/42");
        assert!(result.changed);
    }

    #[test]
    fn host_match_ignores_case() {
        let result = rewrite("HTTPS://WWW.Twitter.COM/Dave/status/7 and Https://X.Com/eve/status/8");
        assert_eq!(
            result.rewritten_text,
            "https://fxtwitter.com/Dave/status/7 and https://fxtwitter.com/eve/status/8"
        );
    }

    #[test]
    fn near_misses_are_left_alone() {
        for text in [
            "https://twitter.com/alice",
            "https://twitter.com/alice/status/",
            "https://twitter.com/alice/status/abc",
            "https://fxtwitter.com/alice/status/1",
            "https://nottwitter.com/alice/status/1",
            "https://x.com.example.org/alice/status/1",
            "twitter.com/alice/status/1",
            "ftp://twitter.com/alice/status/1",
        ] {
            let result = rewrite(text);
            assert!(!result.changed, "{text} should not be rewritten");
            assert_eq!(result.rewritten_text, text);
        }
    }

    #[test]
    fn links_inside_query_are_rewritten_too() {
        let result = rewrite("https://x.com/a/status/1?u=https://twitter.com/b/status/2");
        assert_eq!(
            result.rewritten_text,
            "https://fxtwitter.com/a/status/1?u=https://fxtwitter.com/b/status/2"
        );
        assert!(!rewrite(&result.rewritten_text).changed);
    }

    #[test]
    fn rewriting_twice_changes_nothing() {
        for text in [
            "check this out https://twitter.com/alice/status/12345",
            "<https://mobile.twitter.com/carol/status/42>",
            "https://x.com/https://twitter.com/a/status/1",
            "hello world",
        ] {
            let once = rewrite(text);
            let twice = rewrite(&once.rewritten_text);
            assert!(!twice.changed, "{text} was not a fixpoint");
        }
    }

    #[test]
    fn changed_tracks_text_difference() {
        for text in ["", "hi", "https://x.com/a/status/1"] {
            let result = rewrite(text);
            assert_eq!(result.changed, result.rewritten_text != result.original_text);
        }
    }

    #[test]
    fn custom_mirror_host() {
        let rewriter = Rewriter::new("vxtwitter.com").unwrap();
        assert_eq!(rewriter.mirror_host(), "vxtwitter.com");
        assert_eq!(
            rewriter.rewrite("https://x.com/a/status/1").rewritten_text,
            "https://vxtwitter.com/a/status/1"
        );
    }

    #[test]
    fn rejects_unusable_mirror_hosts() {
        for host in ["", "x.com", "Twitter.com", "mobile.twitter.com", "a/b", "a b", "$1.com"] {
            assert!(
                matches!(Rewriter::new(host), Err(Error::InvalidMirrorHost(_))),
                "{host:?} should be rejected"
            );
        }
    }
}
