//! Best-effort URL component split.
//!
//! Click URLs in ad exports are frequently not absolute (`example.com/a`), and
//! a tracker prefix glued in front produces things like
//! `https://track.example/?u=example.com/a`. `url::Url` rejects or normalizes
//! such input, so the split here is purely lexical: it never fails and
//! [`UrlParts::join`] reproduces the input exactly.

/// Borrowed view of a URL's components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlParts<'a> {
    pub scheme: Option<&'a str>,
    pub authority: Option<&'a str>,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

impl<'a> UrlParts<'a> {
    pub fn split(url: &'a str) -> Self {
        let (rest, fragment) = match url.split_once('#') {
            Some((r, f)) => (r, Some(f)),
            None => (url, None),
        };
        let (rest, query) = match rest.split_once('?') {
            Some((r, q)) => (r, Some(q)),
            None => (rest, None),
        };

        let (scheme, rest) = match rest.find(':') {
            Some(i) if is_scheme(&rest[..i]) => (Some(&rest[..i]), &rest[i + 1..]),
            _ => (None, rest),
        };

        let (authority, path) = match rest.strip_prefix("//") {
            Some(after) => {
                let end = after.find('/').unwrap_or(after.len());
                (Some(&after[..end]), &after[end..])
            }
            None => (None, rest),
        };

        Self {
            scheme,
            authority,
            path,
            query,
            fragment,
        }
    }

    /// Host part of the authority (userinfo and port stripped).
    pub fn host(&self) -> Option<&'a str> {
        let authority = self.authority?;
        let host_port = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
        if host_port.starts_with('[') {
            return host_port.find(']').map(|end| &host_port[..=end]);
        }
        Some(host_port.split_once(':').map_or(host_port, |(h, _)| h))
    }

    /// Reassemble with `query` replacing the original query string.
    pub fn join_with_query(&self, query: Option<&str>) -> String {
        let mut out = String::new();
        if let Some(scheme) = self.scheme {
            out.push_str(scheme);
            out.push(':');
        }
        if let Some(authority) = self.authority {
            out.push_str("//");
            out.push_str(authority);
        }
        out.push_str(self.path);
        if let Some(q) = query {
            out.push('?');
            out.push_str(q);
        }
        if let Some(fragment) = self.fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }

    pub fn join(&self) -> String {
        self.join_with_query(self.query)
    }
}

/// RFC 3986 scheme: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url() {
        let p = UrlParts::split("https://user@shop.example:8443/a/b?x=1&y=2#top");
        assert_eq!(p.scheme, Some("https"));
        assert_eq!(p.authority, Some("user@shop.example:8443"));
        assert_eq!(p.host(), Some("shop.example"));
        assert_eq!(p.path, "/a/b");
        assert_eq!(p.query, Some("x=1&y=2"));
        assert_eq!(p.fragment, Some("top"));
    }

    #[test]
    fn schemeless_url_is_all_path() {
        let p = UrlParts::split("example.com/a");
        assert_eq!(p.scheme, None);
        assert_eq!(p.authority, None);
        assert_eq!(p.path, "example.com/a");
        assert_eq!(p.query, None);
    }

    #[test]
    fn empty_input() {
        let p = UrlParts::split("");
        assert_eq!(p.path, "");
        assert_eq!(p.join(), "");
        assert_eq!(p.join_with_query(Some("a=b")), "?a=b");
    }

    #[test]
    fn question_mark_inside_fragment_is_not_a_query() {
        let p = UrlParts::split("https://a.example/p#frag?x=1");
        assert_eq!(p.query, None);
        assert_eq!(p.fragment, Some("frag?x=1"));
    }

    #[test]
    fn join_reproduces_input() {
        for url in [
            "https://track.example/?u=example.com/a",
            "http://[::1]:8080/x?y#",
            "mailto:someone@example.com",
            "//cdn.example/img.gif",
            "not a url at all",
            "1http://bad-scheme.example/x",
        ] {
            assert_eq!(UrlParts::split(url).join(), url, "{url}");
        }
    }

    #[test]
    fn ipv6_host() {
        assert_eq!(UrlParts::split("http://[::1]:8080/").host(), Some("[::1]"));
    }
}
