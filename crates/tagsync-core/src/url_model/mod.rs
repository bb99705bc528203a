//! Click URL modeling.
//!
//! Splits click URLs into components, edits the query string as an ordered
//! multi-map, and applies the tracker prefix plus attribution parameters.

mod parts;
mod query;
mod rewrite;

pub use parts::UrlParts;
pub use query::QueryParams;
pub use rewrite::{rewrite, rewrite_with};

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL_KEYS: [&str; 6] = [
        "utm_source",
        "utm_medium",
        "utm_campaign",
        "tf_source",
        "tf_medium",
        "tf_campaign",
    ];

    #[test]
    fn rewrite_is_idempotent() {
        for (url, tracker) in [
            (Some("https://shop.example/p?utm_source=fb&x=1#f"), None),
            (Some("example.com/a"), Some("https://track.example/?u=")),
            (None, None),
            (Some("https://shop.example/?utm_campaign=Other&utm_campaign=Spring"), None),
        ] {
            let once = rewrite(url, tracker, "Spring");
            let twice = rewrite(Some(once.as_str()), None, "Spring");
            assert_eq!(once, twice, "{url:?} + {tracker:?}");
        }
    }

    #[test]
    fn no_query_url_gets_exactly_the_canonical_params() {
        let original = "https://shop.example/spring/landing";
        let out = rewrite(Some(original), None, "Spring");
        let before = UrlParts::split(original);
        let after = UrlParts::split(&out);
        assert_eq!(after.scheme, before.scheme);
        assert_eq!(after.host(), Some("shop.example"));
        assert_eq!(after.path, before.path);

        let params = QueryParams::parse(after.query.unwrap());
        assert_eq!(params.keys().collect::<Vec<_>>(), CANONICAL_KEYS);
        assert_eq!(params.first("utm_campaign"), Some("Spring"));
        assert_eq!(params.first("tf_campaign"), Some("Spring"));
        assert_eq!(params.first("tf_medium"), Some("paid_social"));

        let parsed = url::Url::parse(&out).unwrap();
        assert_eq!(parsed.path(), "/spring/landing");
        assert_eq!(parsed.query_pairs().count(), 6);
    }

    #[test]
    fn campaign_is_forced_to_current_record() {
        let first = rewrite(Some("https://shop.example/"), None, "Spring");
        let second = rewrite(Some(first.as_str()), None, "Summer");
        let params = QueryParams::parse(UrlParts::split(&second).query.unwrap());
        assert_eq!(params.first("utm_campaign"), Some("Summer"));
        assert_eq!(params.first("tf_campaign"), Some("Summer"));
        assert_eq!(params.get("utm_campaign").unwrap().len(), 1);
    }
}
