/// Builds a permalink to a post: `<site-url>/<team-name>/pl/<post-id>`.
///
/// A trailing `/` on `site_url` is dropped so the result never contains `//`
/// after the host.
#[must_use]
pub fn make_post_link(site_url: &str, team_name: &str, post_id: &str) -> String {
    format!(
        "{}/{}/pl/{}",
        site_url.trim_end_matches('/'),
        team_name,
        post_id
    )
}

/// Prefix placed above a shared or moved message body.
///
/// Present text becomes `"<text>\n\n"`; absence yields an empty prefix.
#[must_use]
pub fn additional_text_prefix(additional_text: Option<&str>) -> String {
    additional_text.map_or_else(String::new, |text| format!("{text}\n\n"))
}
