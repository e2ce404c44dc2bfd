use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use sightline_common::ReadablePage;

/// AI-readiness audit of one extracted page. Additive 0–100: depth,
/// question-style headings, list structure, FAQ markers, freshness, and
/// title length each contribute a fixed slice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentAudit {
    pub score: u8,
    pub word_count: u32,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
}

/// Word count above which a page counts as long-form.
const LONG_FORM_WORDS: u32 = 1500;
/// Word count above which a page counts as substantial.
const SOLID_WORDS: u32 = 600;
/// Below this the page is flagged as thin.
const THIN_WORDS: u32 = 300;

pub fn audit_content(page: &ReadablePage) -> ContentAudit {
    let content = page.content.to_lowercase();
    let word_count = page.content.split_whitespace().count() as u32;
    let mut score: u32 = 0;
    let mut strengths = Vec::new();
    let mut gaps = Vec::new();

    if word_count >= LONG_FORM_WORDS {
        score += 25;
        strengths.push(format!("long-form depth ({word_count} words)"));
    } else if word_count >= SOLID_WORDS {
        score += 15;
        strengths.push(format!("solid depth ({word_count} words)"));
    } else if word_count >= THIN_WORDS {
        score += 5;
    } else {
        gaps.push(format!("thin content ({word_count} words)"));
    }

    let question_headings = page
        .content
        .lines()
        .filter(|l| l.trim_start().starts_with('#') && l.contains('?'))
        .count();
    if question_headings > 0 {
        score += 20;
        strengths.push(format!("question-style headings ({question_headings})"));
    } else {
        gaps.push("no question-style headings".to_string());
    }

    let list_lines = page.content.lines().filter(|l| is_list_line(l)).count();
    if list_lines >= 3 {
        score += 15;
        strengths.push("scannable list structure".to_string());
    } else {
        gaps.push("no list structure for answer engines to lift".to_string());
    }

    if content.contains("faq") || content.contains("frequently asked") {
        score += 15;
        strengths.push("faq section".to_string());
    } else {
        gaps.push("no faq section".to_string());
    }

    let this_year = Utc::now().year();
    let last_year = this_year - 1;
    if content.contains(&this_year.to_string()) || content.contains(&last_year.to_string()) {
        score += 15;
        strengths.push("recent-year references".to_string());
    } else {
        gaps.push("no recent-year references".to_string());
    }

    let title_len = page.title.chars().count();
    if (30..=65).contains(&title_len) {
        score += 10;
        strengths.push("search-friendly title length".to_string());
    } else {
        gaps.push(format!("title length {title_len} outside the 30-65 range"));
    }

    ContentAudit {
        score: score.min(100) as u8,
        word_count,
        strengths,
        gaps,
    }
}

fn is_list_line(line: &str) -> bool {
    let line = line.trim_start();
    if line.starts_with("- ") || line.starts_with("* ") {
        return true;
    }
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    digits > 0 && line[digits..].starts_with(". ")
}
