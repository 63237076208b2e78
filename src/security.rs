use subtle::ConstantTimeEq;
use uuid::Uuid;

/// Constant-time string comparison to prevent timing attacks
/// Use this for comparing session ids, CSRF tokens, and other sensitive values
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Generate an unguessable token for sessions and CSRF protection.
pub fn random_token() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

/// Return `next` only if it is a same-site relative path, else `/`.
///
/// Rejects absolute URLs and protocol-relative forms such as `//evil.com`
/// or `/\evil.com`, which browsers treat as off-site.
pub fn safe_redirect_target(next: Option<&str>) -> &str {
    match next {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.starts_with("/\\")
                && !path.chars().any(char::is_control) =>
        {
            path
        }
        _ => "/",
    }
}

/// Whether `url` is an absolute `http` or `https` link with a host part.
///
/// Admin-entered links are rendered as `href`s, so other schemes such as
/// `javascript:` or `data:` must never reach a page.
pub fn is_web_url(url: &str) -> bool {
    let url = url.trim();
    let rest = match url.get(..8).map(str::to_ascii_lowercase).as_deref() {
        Some("https://") => &url[8..],
        _ => match url.get(..7).map(str::to_ascii_lowercase).as_deref() {
            Some("http://") => &url[7..],
            _ => return false,
        },
    };
    !rest.is_empty() && !rest.starts_with('/') && !url.chars().any(char::is_control)
}
