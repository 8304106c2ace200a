//! OpenAI chat-completions vision client
//!
//! Sends either a bare barcode or a product photo to a multimodal model and
//! parses the strict JSON object it is asked to reply with.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{ProductRecord, ProductSource, VisualAnalysis};
use crate::domain::ports::VisionModel;
use crate::error::VisionError;

const GUESS_MAX_TOKENS: u32 = 300;
const ANALYZE_MAX_TOKENS: u32 = 600;

const ANALYZE_PROMPT: &str = r#"Identify the product in this photo. Output ONLY a JSON object, no markdown, no explanation.

Use exactly these keys:
- "name": product name without size or color
- "brand": brand name, or null if not visible
- "category": product category (e.g. "Shoes", "Snacks", "Skin care")
- "description": one or two sentences describing the product
- "color": main color, or null
- "material": main material, or null
- "gender": "men", "women", "unisex", or null
- "season": season or collection, or null
- "reference_code": any model, style or reference number printed on the product or label, or null"#;

// *************** Request/Response Types ***************

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: Vec<ContentPart>,
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum ContentPart {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrlDetail },
}

#[derive(Serialize)]
struct ImageUrlDetail {
    url: String,
    detail: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// What the model answers when asked about a bare barcode
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BarcodeGuess {
    name: Option<String>,
    brand: Option<String>,
    description: Option<String>,
    category: Option<String>,
}

// *************** Client ***************

pub struct OpenAiVisionClient {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiVisionClient {
    pub fn new(http: Client, base_url: String, api_key: String, model: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
        }
    }

    async fn complete(&self, content: Vec<ContentPart>, max_tokens: u32) -> Result<String, VisionError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content,
            }],
            max_tokens,
        };

        let response = self
            .http
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(VisionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| VisionError::Parse(e.to_string()))?;

        body.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or(VisionError::EmptyReply)
    }
}

#[async_trait]
impl VisionModel for OpenAiVisionClient {
    async fn guess_from_barcode(&self, code: &str) -> Result<Option<ProductRecord>, VisionError> {
        let reply = self
            .complete(
                vec![ContentPart::Text {
                    text: guess_prompt(code),
                }],
                GUESS_MAX_TOKENS,
            )
            .await?;

        parse_guess(&reply)
    }

    async fn analyze_image(&self, data_url: &str) -> Result<VisualAnalysis, VisionError> {
        let reply = self
            .complete(
                vec![
                    ContentPart::Text {
                        text: ANALYZE_PROMPT.to_string(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrlDetail {
                            url: data_url.to_string(),
                            detail: "high",
                        },
                    },
                ],
                ANALYZE_MAX_TOKENS,
            )
            .await?;

        parse_analysis(&reply)
    }
}

// *************** Internal Functions ***************

fn guess_prompt(code: &str) -> String {
    format!(
        r#"Which retail product has the barcode (UPC/EAN) {code}?
Output ONLY a JSON object with the keys "name", "brand", "description" and "category".
If you do not know the product, output {{}}."#
    )
}

/// Remove a surrounding markdown code fence (```json ... ```) if present
pub fn strip_code_fences(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the info string ("json"), whether or not a newline follows it
    let body = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    body.trim()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

fn parse_guess(reply: &str) -> Result<Option<ProductRecord>, VisionError> {
    let guess: BarcodeGuess = serde_json::from_str(strip_code_fences(reply))
        .map_err(|e| VisionError::Parse(e.to_string()))?;

    Ok(ProductRecord::from_parts(
        ProductSource::AiGuess,
        guess.name,
        guess.brand,
        guess.description,
        guess.category,
        None,
    ))
}

fn parse_analysis(reply: &str) -> Result<VisualAnalysis, VisionError> {
    let analysis: VisualAnalysis = serde_json::from_str(strip_code_fences(reply))
        .map_err(|e| VisionError::Parse(e.to_string()))?;

    if analysis.name.trim().is_empty() {
        return Err(VisionError::Parse("reply has no product name".to_string()));
    }
    Ok(analysis)
}

/// Vision model used when no OpenAI key is configured
pub struct NoopVisionModel;

#[async_trait]
impl VisionModel for NoopVisionModel {
    async fn guess_from_barcode(&self, _code: &str) -> Result<Option<ProductRecord>, VisionError> {
        Ok(None)
    }

    async fn analyze_image(&self, _data_url: &str) -> Result<VisualAnalysis, VisionError> {
        Err(VisionError::NotConfigured)
    }
}
