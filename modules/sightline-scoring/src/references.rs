use sightline_common::RefDifficulty;
use url::Url;

/// Domains a small site will not outrank: encyclopedias, big commerce,
/// high-authority publications.
const HARD_DOMAINS: &[&str] = &[
    "wikipedia.org",
    "britannica.com",
    "amazon.com",
    "walmart.com",
    "target.com",
    "homedepot.com",
    "youtube.com",
    "webmd.com",
    "healthline.com",
    "nytimes.com",
    "forbes.com",
];

/// UGC platforms where any well-written page can compete.
const EASY_DOMAINS: &[&str] = &[
    "reddit.com",
    "quora.com",
    "medium.com",
    "substack.com",
    "blogspot.com",
    "wordpress.com",
    "tumblr.com",
];

/// Display host for a link, lowercased with any leading `www.` stripped.
pub fn display_host(link: &str) -> Option<String> {
    let url = Url::parse(link).ok()?;
    let host = url.host_str()?;
    Some(host.strip_prefix("www.").unwrap_or(host).to_lowercase())
}

fn matches_domain(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

/// Tag how hard a cited source is to displace, judged from its host alone.
/// Links that fail to parse tag Moderate.
pub fn reference_difficulty(link: &str) -> RefDifficulty {
    let Some(host) = display_host(link) else {
        return RefDifficulty::Moderate;
    };

    if host.ends_with(".gov")
        || host.ends_with(".edu")
        || HARD_DOMAINS.iter().any(|d| matches_domain(&host, d))
    {
        return RefDifficulty::Hard;
    }
    if host.contains("forum") || EASY_DOMAINS.iter().any(|d| matches_domain(&host, d)) {
        return RefDifficulty::Easy;
    }
    RefDifficulty::Moderate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encyclopedias_are_hard() {
        assert_eq!(
            reference_difficulty("https://en.wikipedia.org/wiki/Monstera"),
            RefDifficulty::Hard
        );
    }

    #[test]
    fn gov_and_edu_are_hard() {
        assert_eq!(
            reference_difficulty("https://extension.umn.edu/houseplants"),
            RefDifficulty::Hard
        );
        assert_eq!(
            reference_difficulty("https://www.usda.gov/topics/plants"),
            RefDifficulty::Hard
        );
    }

    #[test]
    fn ugc_platforms_are_easy() {
        assert_eq!(
            reference_difficulty("https://www.reddit.com/r/houseplants/comments/abc"),
            RefDifficulty::Easy
        );
        assert_eq!(
            reference_difficulty("https://someone.medium.com/plant-care"),
            RefDifficulty::Easy
        );
    }

    #[test]
    fn forum_hosts_are_easy() {
        assert_eq!(
            reference_difficulty("https://houseplantforum.net/threads/42"),
            RefDifficulty::Easy
        );
    }

    #[test]
    fn everything_else_is_moderate() {
        assert_eq!(
            reference_difficulty("https://www.thespruce.com/monstera-care"),
            RefDifficulty::Moderate
        );
    }

    #[test]
    fn unparseable_links_are_moderate() {
        assert_eq!(reference_difficulty("not a url"), RefDifficulty::Moderate);
    }

    #[test]
    fn display_host_strips_www() {
        assert_eq!(
            display_host("https://www.thespruce.com/monstera-care"),
            Some("thespruce.com".to_string())
        );
        assert_eq!(display_host("not a url"), None);
    }
}
