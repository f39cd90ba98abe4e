//! URL template matching and path parameter extraction.

use regex::Regex;
use std::collections::HashMap;

/// Suffix accepted by every compiled template: an optional trailing
/// `?key=value` so templated routes still match URLs carrying arguments.
const URL_ARGS_SUFFIX: &str = "((\\?)([^=]+)(=(.+))?)?$";

/// Replace each `{name}` placeholder with `capture`, collecting placeholder
/// names in textual order. Only `{identifier}` is special; everything else,
/// regex metacharacters included, is passed through untouched, so a
/// template containing `.` or `+` behaves as a regex.
fn expand_template(template: &str, capture: &str) -> (String, Vec<String>) {
    let chars: Vec<char> = template.chars().collect();
    let mut pattern = String::with_capacity(template.len() + 16);
    let mut names = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '{' {
            let mut j = i + 1;
            while j < chars.len() && (chars[j].is_ascii_alphanumeric() || chars[j] == '_') {
                j += 1;
            }
            if j > i + 1 && j < chars.len() && chars[j] == '}' {
                names.push(chars[i + 1..j].iter().collect());
                pattern.push_str(capture);
                i = j + 1;
                continue;
            }
        }
        pattern.push(chars[i]);
        i += 1;
    }

    (pattern, names)
}

/// Compile `template` into the matching predicate used by [`is_match`]:
/// placeholders become one-or-more-non-slash captures and the pattern
/// tolerates an optional query-string suffix.
pub fn compile_match(template: &str) -> Regex {
    let (mut pattern, _) = expand_template(template, "([^/]+)");
    pattern.push_str(URL_ARGS_SUFFIX);
    Regex::new(&pattern).expect("template compiles to a valid pattern")
}

/// True if `url` matches `template`.
pub fn is_match(template: &str, url: &str) -> bool {
    compile_match(template).is_match(url)
}

/// Capture the placeholder values of `template` out of `url`.
///
/// Placeholders capture greedily up to a `?`. Captures are zipped with the
/// placeholder names in textual left-to-right order; a duplicated name keeps
/// the later capture. A non-matching URL yields an empty map.
pub fn extract_path_params(template: &str, url: &str) -> HashMap<String, String> {
    let (pattern, names) = expand_template(template, "([^?]+)");
    let regex = Regex::new(&pattern).expect("template compiles to a valid pattern");

    let mut params = HashMap::new();
    if let Some(caps) = regex.captures(url) {
        for (i, name) in names.iter().enumerate() {
            if let Some(capture) = caps.get(i + 1) {
                params.insert(name.clone(), capture.as_str().to_owned());
            }
        }
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("http://foo.com", "http://foo.com", true)]
    #[case("http://foo.com", "http://wrong.com", false)]
    #[case("http://foo.com/{id}", "http://foo.com/1", true)]
    #[case("http://foo.com/{id}", "http://foo.com/abc-123", true)]
    #[case("/api/users/{a}/posts/{b}", "/api/users/1/posts/2", true)]
    #[case("/{id}", "/1", true)]
    // A trailing query string is tolerated without being required.
    #[case("http://foo.com/{id}", "http://foo.com/1?details=full", true)]
    #[case("http://foo.com/users", "http://foo.com/users?page=1&limit=10", true)]
    #[case("http://foo.com/users", "http://foo.com/users?flag", true)]
    // Placeholders span one segment, never across slashes.
    #[case("http://foo.com/{id}", "http://foo.com/1/extra", false)]
    fn test_is_match(#[case] template: &str, #[case] url: &str, #[case] expected: bool) {
        assert_eq!(is_match(template, url), expected);
    }

    #[rstest]
    fn test_is_match_metacharacters_behave_as_regex() {
        // The dot is a wildcard: templates are not escaped.
        assert!(is_match("http://foo.com/users.json", "http://foo.com/users.json"));
        assert!(is_match("http://foo.com/users.json", "http://foo.com/usersXjson"));
    }

    #[rstest]
    fn test_extract_path_params() {
        let params = extract_path_params("http://foo.com/post/{id}", "http://foo.com/post/3");
        assert_eq!(params.len(), 1);
        assert_eq!(params["id"], "3");
    }

    #[rstest]
    fn test_extract_path_params_multiple() {
        let params = extract_path_params("/users/{user}/posts/{post}", "/users/7/posts/42");
        assert_eq!(params["user"], "7");
        assert_eq!(params["post"], "42");
    }

    #[rstest]
    fn test_extract_path_params_stop_at_query() {
        let params = extract_path_params("http://foo.com/{id}", "http://foo.com/3?foo=bar");
        assert_eq!(params["id"], "3");
    }

    #[rstest]
    fn test_extract_path_params_no_match_is_empty() {
        let params = extract_path_params("/users/{id}", "/posts/nope/deeper");
        assert!(params.is_empty());
    }

    #[rstest]
    fn test_extract_path_params_duplicate_name_keeps_later_capture() {
        let params = extract_path_params("/{id}/{id}", "/first/second");
        assert_eq!(params.len(), 1);
        assert_eq!(params["id"], "second");
    }

    #[rstest]
    fn test_braces_without_identifier_stay_literal() {
        assert!(is_match("/odd/{a-b}", "/odd/{a-b}"));
        assert!(!is_match("/odd/{a-b}", "/odd/anything"));
    }
}
