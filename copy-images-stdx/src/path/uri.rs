use std::sync::LazyLock;

use regex::Regex;

// A scheme is a letter followed by at least one more scheme character, so
// Windows drive letters (`C:\`) never look like a URI.
static URI_SCHEME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9.+\-]+:/{0,2}").unwrap());

/// Returns `true` when `target` starts with a URI scheme such as `https://` or `data:`.
pub fn is_uri(target: &str) -> bool {
	URI_SCHEME.is_match(target)
}
