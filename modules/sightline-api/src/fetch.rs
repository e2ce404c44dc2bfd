//! Direct page fetching for when no reader vendor is configured.
//!
//! Plain HTTP GET with a short timeout, Readability markdown transform,
//! and OG/meta scraping out of the document head for the page metadata.

use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use regex::Regex;
use sightline_common::ReadablePage;
use spider_transformations::transformation::content::{
    transform_content_input, ReturnFormat, TransformConfig, TransformInput,
};

use crate::providers::PageReader;

const FETCH_TIMEOUT: Duration = Duration::from_secs(5);
const MAX_BODY_BYTES: usize = 2_000_000;
const HEAD_LIMIT: usize = 50_000;
const USER_AGENT: &str = "SightlineBot/1.0 (content reader)";

/// Fetches pages with a plain reqwest client and extracts content locally.
pub struct DirectReader {
    client: reqwest::Client,
}

impl DirectReader {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }
}

impl Default for DirectReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageReader for DirectReader {
    async fn read(&self, url: &str) -> Result<ReadablePage> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Upstream returned {status}"));
        }

        let body = response.bytes().await?;
        let body = if body.len() > MAX_BODY_BYTES {
            &body[..MAX_BODY_BYTES]
        } else {
            &body[..]
        };

        let html = String::from_utf8_lossy(body);
        let meta = extract_page_meta(&html);
        let content = html_to_markdown(html.as_bytes(), Some(url));

        Ok(ReadablePage {
            url: url.to_string(),
            title: meta.title.unwrap_or_default(),
            content,
            description: meta.description,
            site_name: meta.site_name,
            published_time: meta.published_time,
        })
    }
}

/// Convert raw HTML bytes into clean markdown using Readability extraction.
fn html_to_markdown(html: &[u8], url: Option<&str>) -> String {
    let parsed_url = url.and_then(|u| url::Url::parse(u).ok());
    let config = TransformConfig {
        readability: true,
        main_content: true,
        return_format: ReturnFormat::Markdown,
        filter_images: true,
        filter_svg: true,
        clean_html: true,
    };
    let input = TransformInput {
        url: parsed_url.as_ref(),
        content: html,
        screenshot_bytes: None,
        encoding: None,
        selector_config: None,
        ignore_tags: None,
    };

    transform_content_input(input, &config)
}

#[derive(Debug, Default)]
struct PageMeta {
    title: Option<String>,
    description: Option<String>,
    site_name: Option<String>,
    published_time: Option<String>,
}

fn extract_page_meta(html: &str) -> PageMeta {
    // Only look at the <head> section (or first HEAD_LIMIT bytes)
    let head = if let Some(end) = html[..html.len().min(HEAD_LIMIT)].find("</head>") {
        &html[..end]
    } else {
        &html[..html.len().min(HEAD_LIMIT)]
    };

    let meta_re = Regex::new(
        r#"(?i)<meta\s+(?:[^>]*?\s)?(?:property|name)\s*=\s*["']([\w:.]+)["'][^>]*?\scontent\s*=\s*["']([^"']*)["'][^>]*/?\s*>"#,
    )
    .unwrap();

    let meta_rev_re = Regex::new(
        r#"(?i)<meta\s+(?:[^>]*?\s)?content\s*=\s*["']([^"']*)["'][^>]*?\s(?:property|name)\s*=\s*["']([\w:.]+)["'][^>]*/?\s*>"#,
    )
    .unwrap();

    let mut meta = PageMeta::default();

    // property/name before content
    for cap in meta_re.captures_iter(head) {
        let key = cap[1].to_lowercase();
        apply_meta(&mut meta, &key, &cap[2]);
    }

    // content before property/name
    for cap in meta_rev_re.captures_iter(head) {
        let key = cap[2].to_lowercase();
        apply_meta(&mut meta, &key, &cap[1]);
    }

    // Fallback to <title> tag
    if meta.title.is_none() {
        let title_re = Regex::new(r"(?i)<title[^>]*>([^<]+)</title>").unwrap();
        if let Some(cap) = title_re.captures(head) {
            meta.title = Some(cap[1].trim().to_string());
        }
    }

    meta
}

fn apply_meta(meta: &mut PageMeta, key: &str, value: &str) {
    let value = value.to_string();
    match key {
        "og:title" if meta.title.is_none() => meta.title = Some(value),
        "og:description" | "description" if meta.description.is_none() => {
            meta.description = Some(value)
        }
        "og:site_name" if meta.site_name.is_none() => meta.site_name = Some(value),
        "article:published_time" if meta.published_time.is_none() => {
            meta.published_time = Some(value)
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_og_tags_in_either_attribute_order() {
        let html = r#"<html><head>
            <meta property="og:title" content="Monstera Care Guide">
            <meta content="The Spruce" property="og:site_name">
            <meta name="description" content="Everything about monstera care.">
        </head><body></body></html>"#;

        let meta = extract_page_meta(html);
        assert_eq!(meta.title.as_deref(), Some("Monstera Care Guide"));
        assert_eq!(meta.site_name.as_deref(), Some("The Spruce"));
        assert_eq!(
            meta.description.as_deref(),
            Some("Everything about monstera care.")
        );
    }

    #[test]
    fn og_description_wins_over_meta_name() {
        let html = r#"<head>
            <meta property="og:description" content="OG wins">
            <meta name="description" content="plain loses">
        </head>"#;

        let meta = extract_page_meta(html);
        assert_eq!(meta.description.as_deref(), Some("OG wins"));
    }

    #[test]
    fn falls_back_to_title_tag() {
        let html = "<head><title> Watering Schedules </title></head>";
        let meta = extract_page_meta(html);
        assert_eq!(meta.title.as_deref(), Some("Watering Schedules"));
    }

    #[test]
    fn picks_up_published_time() {
        let html = r#"<head>
            <meta property="article:published_time" content="2026-03-14T09:00:00Z">
        </head>"#;

        let meta = extract_page_meta(html);
        assert_eq!(
            meta.published_time.as_deref(),
            Some("2026-03-14T09:00:00Z")
        );
    }

    #[test]
    fn empty_document_yields_nothing() {
        let meta = extract_page_meta("<html><body>no head</body></html>");
        assert!(meta.title.is_none());
        assert!(meta.description.is_none());
    }
}
