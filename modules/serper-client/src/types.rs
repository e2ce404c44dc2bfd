//! Wire types for the Serper search response.
//!
//! Every block is optional on the wire: Serper omits `aiOverview`,
//! `answerBox`, and `peopleAlsoAsk` freely depending on the query, so every
//! field defaults rather than failing the whole deserialization.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerpResponse {
    #[serde(default)]
    pub organic: Vec<OrganicResult>,
    #[serde(default)]
    pub ai_overview: Option<AiOverviewBlock>,
    #[serde(default)]
    pub answer_box: Option<AnswerBox>,
    #[serde(default)]
    pub people_also_ask: Vec<RelatedQuestion>,
    #[serde(default)]
    pub related_searches: Vec<RelatedSearch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub position: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiOverviewBlock {
    #[serde(default)]
    pub text_blocks: Vec<TextBlock>,
    #[serde(default)]
    pub references: Vec<OverviewReference>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    #[serde(default, rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub snippet: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverviewReference {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub index: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswerBox {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub link: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RelatedQuestion {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RelatedSearch {
    #[serde(default)]
    pub query: String,
}
