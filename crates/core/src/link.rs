//! YouTube link parsing.
//!
//! A link is accepted when it has the shape
//! `[http[s]://][www.]<host>/<path>` where `<host>` is one of the allow-listed
//! YouTube hosts and `<path>` is non-empty. Matching is case-sensitive.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("link is empty")]
    Empty,

    #[error("unsupported scheme `{scheme}`")]
    UnsupportedScheme { scheme: String },

    #[error("host `{host}` is not a YouTube host")]
    HostNotAllowed { host: String },

    #[error("link has no video path")]
    MissingPath,

    #[error("link contains a line break")]
    InvalidCharacter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scheme {
    Http,
    Https,
}

impl Scheme {
    fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum YoutubeHost {
    YoutubeCom,
    YoutuBe,
}

impl YoutubeHost {
    const ALLOWED: [YoutubeHost; 2] = [YoutubeHost::YoutubeCom, YoutubeHost::YoutuBe];

    fn as_str(&self) -> &'static str {
        match self {
            YoutubeHost::YoutubeCom => "youtube.com",
            YoutubeHost::YoutuBe => "youtu.be",
        }
    }

    fn from_host(host: &str) -> Option<Self> {
        Self::ALLOWED
            .into_iter()
            .find(|allowed| host == allowed.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YoutubeLink {
    scheme: Option<Scheme>,
    www: bool,
    host: YoutubeHost,
    path: String,
}

impl YoutubeLink {
    pub fn parse(input: &str) -> Result<Self, LinkError> {
        if input.is_empty() {
            return Err(LinkError::Empty);
        }
        if input.contains(['\n', '\r', '\u{2028}', '\u{2029}']) {
            return Err(LinkError::InvalidCharacter);
        }

        let (scheme, rest) = split_scheme(input)?;

        let (www, rest) = match rest.strip_prefix("www.") {
            Some(rest) => (true, rest),
            None => (false, rest),
        };

        let (host, path) = match rest.split_once('/') {
            Some((host, path)) => (host, Some(path)),
            None => (rest, None),
        };

        let host = YoutubeHost::from_host(host).ok_or_else(|| LinkError::HostNotAllowed {
            host: host.to_string(),
        })?;

        let path = match path {
            Some(path) if !path.is_empty() => path.to_string(),
            _ => return Err(LinkError::MissingPath),
        };

        Ok(Self {
            scheme,
            www,
            host,
            path,
        })
    }
}

impl fmt::Display for YoutubeLink {
    /// Canonical form: scheme defaults to https, `www.` kept as typed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scheme = self.scheme.unwrap_or(Scheme::Https);
        let www = if self.www { "www." } else { "" };
        write!(
            f,
            "{}://{}{}/{}",
            scheme.as_str(),
            www,
            self.host.as_str(),
            self.path
        )
    }
}

/// Predicate used to enable the link submit control.
pub fn is_valid_youtube_url(input: &str) -> bool {
    YoutubeLink::parse(input).is_ok()
}

fn split_scheme(input: &str) -> Result<(Option<Scheme>, &str), LinkError> {
    if let Some(rest) = input.strip_prefix("https://") {
        return Ok((Some(Scheme::Https), rest));
    }
    if let Some(rest) = input.strip_prefix("http://") {
        return Ok((Some(Scheme::Http), rest));
    }

    // Anything shaped like `scheme://` before the first slash is a foreign scheme.
    if let Some((scheme, _)) = input.split_once("://") {
        if !scheme.is_empty() && !scheme.contains('/') {
            return Err(LinkError::UnsupportedScheme {
                scheme: scheme.to_string(),
            });
        }
    }

    Ok((None, input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_youtube_links() {
        for link in [
            "https://www.youtube.com/watch?v=abc123",
            "http://youtube.com/watch?v=abc123",
            "www.youtube.com/shorts/xyz",
            "youtube.com/watch?v=abc123",
            "https://youtu.be/abc123",
            "youtu.be/abc123",
            "https://www.youtu.be/abc123",
            "youtube.com//",
        ] {
            assert!(is_valid_youtube_url(link), "{link} should be accepted");
        }
    }

    #[test]
    fn rejects_links_outside_the_allow_list() {
        for link in [
            "",
            "https://vimeo.com/12345",
            "https://youtube/watch?v=abc",
            "youtube/abc",
            "https://m.youtube.com/watch?v=abc",
            "https://www.youtube.com.evil.com/watch",
            "https://youtube.com:443/watch?v=abc",
            "ftp://youtube.com/watch?v=abc",
        ] {
            assert!(!is_valid_youtube_url(link), "{link:?} should be rejected");
        }
    }

    #[test]
    fn requires_a_non_empty_path() {
        assert_eq!(
            YoutubeLink::parse("https://www.youtube.com/"),
            Err(LinkError::MissingPath)
        );
        assert_eq!(
            YoutubeLink::parse("https://youtu.be"),
            Err(LinkError::MissingPath)
        );
    }

    #[test]
    fn rejects_line_breaks_anywhere() {
        assert_eq!(
            YoutubeLink::parse("https://youtu.be/abc\ndef"),
            Err(LinkError::InvalidCharacter)
        );
    }

    #[test]
    fn reports_foreign_scheme_and_host() {
        assert_eq!(
            YoutubeLink::parse("ftp://youtube.com/x"),
            Err(LinkError::UnsupportedScheme {
                scheme: "ftp".to_string()
            })
        );
        assert_eq!(
            YoutubeLink::parse("https://vimeo.com/1"),
            Err(LinkError::HostNotAllowed {
                host: "vimeo.com".to_string()
            })
        );
    }

    #[test]
    fn canonical_form_defaults_to_https() {
        let link = YoutubeLink::parse("www.youtube.com/watch?v=abc123").unwrap();
        assert_eq!(link.to_string(), "https://www.youtube.com/watch?v=abc123");

        let short = YoutubeLink::parse("http://youtu.be/xyz").unwrap();
        assert_eq!(short.to_string(), "http://youtu.be/xyz");
    }

    #[test]
    fn matching_is_case_sensitive() {
        for link in [
            "HTTPS://WWW.YOUTUBE.COM/watch?v=abc",
            "https://www.YouTube.com/watch?v=abc",
            "Https://youtu.be/abc",
            "WWW.youtube.com/watch?v=abc",
            "YOUTU.BE/abc",
        ] {
            assert!(!is_valid_youtube_url(link), "{link:?} should be rejected");
        }
        assert_eq!(
            YoutubeLink::parse("https://YouTube.com/watch?v=abc"),
            Err(LinkError::HostNotAllowed {
                host: "YouTube.com".to_string()
            })
        );
    }
}
