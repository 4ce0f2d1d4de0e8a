use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::{ChatCompletionReply, ChatCompletionResponse, RecipeDraft},
};

pub const DEFAULT_MEAL_IMAGE: &str = "/images/hero-bg.jpg";

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)```(?:json)?").expect("code fence pattern is valid"));

/// Static illustration for a meal type name, falling back to the hero image.
pub fn meal_image_url(meal_type: &str) -> &'static str {
    match meal_type.trim().to_ascii_lowercase().as_str() {
        "breakfast" => "/images/meal-breakfast.jpg",
        "lunch" => "/images/meal-lunch.jpg",
        "dinner" => "/images/meal-dinner.jpg",
        "snacks" => "/images/meal-snacks.jpg",
        "dessert" => "/images/meal-dessert.jpg",
        "healthy" => "/images/meal-healthy.jpg",
        _ => DEFAULT_MEAL_IMAGE,
    }
}

/// Removes markdown code fences the model wraps around its JSON.
pub fn strip_code_fences(content: &str) -> String {
    CODE_FENCE.replace_all(content, "").trim().to_string()
}

/// Maps the upstream HTTP status onto the gateway error taxonomy.
pub fn interpret_upstream_status(reply: &ChatCompletionReply) -> Result<(), CoreError> {
    if reply.is_success() {
        return Ok(());
    }

    match reply.status {
        429 => {
            tracing::warn!("AI gateway rate limited the request");
            Err(CoreError::RateLimited)
        }
        402 => {
            tracing::warn!("AI gateway reported exhausted credits");
            Err(CoreError::QuotaExhausted)
        }
        status => {
            tracing::error!(status, body = %reply.body, "AI gateway error");
            Err(CoreError::Upstream { status })
        }
    }
}

/// Pulls the assistant text out of a successful chat-completion body.
pub fn extract_message_content(body: &str) -> Result<String, CoreError> {
    let response: ChatCompletionResponse = serde_json::from_str(body).map_err(|e| {
        tracing::error!("Failed to decode AI gateway response: {}", e);
        CoreError::EmptyResponse
    })?;

    response
        .first_content()
        .map(str::to_string)
        .ok_or(CoreError::EmptyResponse)
}

/// Parses model output into a draft. The raw text only goes to the logs.
pub fn parse_recipe_draft(content: &str) -> Result<RecipeDraft, CoreError> {
    let cleaned = strip_code_fences(content);

    let value: serde_json::Value = serde_json::from_str(&cleaned).map_err(|e| {
        tracing::error!(raw = %content, "Failed to parse AI response: {}", e);
        CoreError::MalformedRecipe
    })?;

    if !value.is_object() {
        tracing::error!(raw = %content, "AI response is not a JSON object");
        return Err(CoreError::MalformedRecipe);
    }

    let draft: RecipeDraft = serde_json::from_value(value).map_err(|e| {
        tracing::error!(raw = %content, "Invalid recipe format: {}", e);
        CoreError::MalformedRecipe
    })?;

    if draft.title.trim().is_empty() {
        tracing::error!(raw = %content, "AI response has no recipe title");
        return Err(CoreError::MalformedRecipe);
    }

    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(status: u16, body: &str) -> ChatCompletionReply {
        ChatCompletionReply {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_meal_image_lookup() {
        assert_eq!(meal_image_url("dessert"), "/images/meal-dessert.jpg");
        assert_eq!(meal_image_url("Breakfast"), "/images/meal-breakfast.jpg");
        assert_eq!(meal_image_url("brunch"), DEFAULT_MEAL_IMAGE);
        assert_eq!(meal_image_url(""), DEFAULT_MEAL_IMAGE);
    }

    #[test]
    fn test_strip_code_fences() {
        let fenced = "```json\n{\"title\": \"Soup\"}\n```";
        assert_eq!(strip_code_fences(fenced), "{\"title\": \"Soup\"}");

        let bare_fence = "```\n{\"title\": \"Soup\"}\n```\n";
        assert_eq!(strip_code_fences(bare_fence), "{\"title\": \"Soup\"}");

        let unfenced = "  {\"title\": \"Soup\"}  ";
        assert_eq!(strip_code_fences(unfenced), "{\"title\": \"Soup\"}");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(interpret_upstream_status(&reply(200, "")), Ok(()));
        assert_eq!(
            interpret_upstream_status(&reply(429, "{\"anything\": true}")),
            Err(CoreError::RateLimited)
        );
        assert_eq!(
            interpret_upstream_status(&reply(402, "")),
            Err(CoreError::QuotaExhausted)
        );
        assert_eq!(
            interpret_upstream_status(&reply(503, "unavailable")),
            Err(CoreError::Upstream { status: 503 })
        );
    }

    #[test]
    fn test_extract_message_content() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"hello"}}]}"#;
        assert_eq!(extract_message_content(body).unwrap(), "hello");

        assert_eq!(
            extract_message_content(r#"{"choices":[]}"#),
            Err(CoreError::EmptyResponse)
        );
        assert_eq!(
            extract_message_content(r#"{"choices":[{"message":{"content":""}}]}"#),
            Err(CoreError::EmptyResponse)
        );
        assert_eq!(
            extract_message_content("<html>bad gateway</html>"),
            Err(CoreError::EmptyResponse)
        );
    }

    #[test]
    fn test_parse_recipe_draft_rejects_garbage() {
        assert_eq!(
            parse_recipe_draft("Here is your recipe!"),
            Err(CoreError::MalformedRecipe)
        );
        assert_eq!(
            parse_recipe_draft(r#"{"description": "no title"}"#),
            Err(CoreError::MalformedRecipe)
        );
        assert_eq!(parse_recipe_draft("[1, 2]"), Err(CoreError::MalformedRecipe));
    }
}
