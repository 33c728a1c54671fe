use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MENTION_RGX: Regex = Regex::new(r"<@([^<>|\s]+)(?:\|[^<>]*)?>").unwrap();
}

/// Extract mentioned user IDs from chat markup (`<@ID>` or `<@ID|name>`).
///
/// Each ID appears once, in order of first appearance.
pub fn extract_mentions(text: &str) -> Vec<String> {
    let mut mentions: Vec<String> = Vec::new();
    for id in MENTION_RGX.captures_iter(text).map(|c| c[1].to_string()) {
        if !mentions.contains(&id) {
            mentions.push(id);
        }
    }

    mentions
}
