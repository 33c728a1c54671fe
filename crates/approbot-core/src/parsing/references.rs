use approbot_models::PullRequestHandle;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MARKUP_URL_RGX: Regex =
        Regex::new(r"<(https?://[^<>|\s]+)(?:\|[^<>]*)?>").unwrap();
    static ref BARE_URL_RGX: Regex = Regex::new(r"https?://[^\s<>|]+").unwrap();
    // .../<owner>/<repo>/pull/<number>
    static ref PULL_URL_RGX: Regex = Regex::new(
        r"^https?://[^/?#]+/(?:[^?#]*/)?([^/?#]+)/([^/?#]+)/pull/(\d+)(?:[/?#].*)?$"
    )
    .unwrap();
    // .../pr/<owner>/<repo>/<number>
    static ref PR_URL_RGX: Regex = Regex::new(
        r"^https?://[^/?#]+/(?:[^?#]*/)?pr/([^/?#]+)/([^/?#]+)/(\d+)(?:[/?#].*)?$"
    )
    .unwrap();
}

const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '\'', '"'];

/// Extract pull request references from chat text.
///
/// URLs are collected from chat markup (`<url>` or `<url|text>`) first, then
/// from bare text. Each URL is matched against the `/<owner>/<repo>/pull/<n>`
/// form, then the `/pr/<owner>/<repo>/<n>` form. Results are unique and keep
/// their first-seen order.
pub fn extract_pull_request_references(text: &str) -> Vec<PullRequestHandle> {
    let markup = MARKUP_URL_RGX
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str());
    let bare = BARE_URL_RGX
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches(TRAILING_PUNCTUATION));

    let mut handles: Vec<PullRequestHandle> = Vec::new();
    for handle in markup.chain(bare).filter_map(parse_pull_request_url) {
        if !handles.contains(&handle) {
            handles.push(handle);
        }
    }

    handles
}

fn parse_pull_request_url(url: &str) -> Option<PullRequestHandle> {
    [&*PULL_URL_RGX, &*PR_URL_RGX].into_iter().find_map(|rgx| {
        let captures = rgx.captures(url)?;
        let number = captures[3].parse::<u64>().ok()?;
        Some((&captures[1], &captures[2], number).into())
    })
}
