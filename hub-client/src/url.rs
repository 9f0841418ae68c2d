//! URL construction.

use common::models::ResourceKind;
use ::url::form_urlencoded;

/// Normalizes a table or view name for use as a path segment.
///
/// Every space becomes an underscore and the result is lower-cased.
pub fn normalize_resource_name(name: &str) -> String {
    name.replace(' ', "_").to_lowercase()
}

/// Returns the path of a table (`{name}`) or view (`view/{name}`).
pub fn resource_path(kind: ResourceKind, name: &str) -> String {
    let name = normalize_resource_name(name);
    match kind {
        ResourceKind::Table => name,
        ResourceKind::View => format!("view/{name}"),
    }
}

/// Joins `path` onto `base` with exactly one slash between them.
pub fn join_path(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Appends a query string built from `params` to `base`.
///
/// Pairs with an empty value are skipped. The rest are form-urlencoded in
/// the order given. No `?` is added when nothing remains.
pub fn build_url<I, K, V>(base: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in params {
        if value.as_ref().is_empty() {
            continue;
        }
        serializer.append_pair(key.as_ref(), value.as_ref());
        any = true;
    }

    if any {
        format!("{base}?{}", serializer.finish())
    } else {
        base.to_string()
    }
}
