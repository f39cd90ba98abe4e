//! Query string extraction.

use std::collections::HashMap;

/// Parse the arguments following the first `?` of `url` into a map.
///
/// Pairs split on `&`, keys from values on the first `=`; a key without a
/// value maps to the empty string, a later duplicate key overwrites an
/// earlier one. Values are kept exactly as written, without URL decoding.
pub fn extract_query_params(url: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();

    let Some(query) = url.splitn(2, '?').nth(1) else {
        return params;
    };

    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let mut key_value = pair.splitn(2, '=');
        let key = key_value.next().unwrap_or("");
        let value = key_value.next().unwrap_or("");
        params.insert(key.to_owned(), value.to_owned());
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn h(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[rstest]
    #[case("http://foo.com", &[])]
    #[case("http://foo.com?", &[])]
    #[case("http://foo.com?page=1", &[("page", "1")])]
    #[case("http://foo.com?page=1&limit=10", &[("page", "1"), ("limit", "10")])]
    // Key without a value maps to the empty string.
    #[case("http://foo.com?flag", &[("flag", "")])]
    #[case("http://foo.com?flag&page=1", &[("flag", ""), ("page", "1")])]
    // Only the first `=` splits the pair.
    #[case("http://foo.com?eq=a=b", &[("eq", "a=b")])]
    // Later duplicate key wins.
    #[case("http://foo.com?page=1&page=2", &[("page", "2")])]
    // Empty pairs are skipped.
    #[case("http://foo.com?&page=1&", &[("page", "1")])]
    // Values are not URL-decoded.
    #[case("http://foo.com?q=a%20b", &[("q", "a%20b")])]
    // Everything past the first `?` belongs to the query.
    #[case("http://foo.com?a=1?b=2", &[("a", "1?b=2")])]
    fn test_extract_query_params(#[case] url: &str, #[case] expected: &[(&str, &str)]) {
        assert_eq!(extract_query_params(url), h(expected));
    }
}
