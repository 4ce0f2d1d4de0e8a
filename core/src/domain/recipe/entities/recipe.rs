use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7},
    recipe::helpers::meal_image_url,
};

/// Serialized lowercase; parsed case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
    Dessert,
    Healthy,
}

impl MealType {
    pub const ALL: [MealType; 6] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snacks,
        MealType::Dessert,
        MealType::Healthy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snacks => "snacks",
            MealType::Dessert => "dessert",
            MealType::Healthy => "healthy",
        }
    }

    pub fn image_url(&self) -> &'static str {
        meal_image_url(self.as_str())
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MealType::ALL
            .into_iter()
            .find(|meal_type| meal_type.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::Invalid(format!("unknown meal type '{}'", s)))
    }
}

impl<'de> Deserialize<'de> for MealType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// Per-serving nutrition as reported by the model. Unknown keys are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NutritionalInfo {
    #[serde(
        default,
        deserialize_with = "optional_free_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub calories: Option<String>,
    #[serde(
        default,
        deserialize_with = "optional_free_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub protein: Option<String>,
    #[serde(
        default,
        deserialize_with = "optional_free_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub carbs: Option<String>,
    #[serde(
        default,
        deserialize_with = "optional_free_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub fat: Option<String>,
}

impl NutritionalInfo {
    /// Labelled fields that carry a non-blank value, in display order.
    pub fn present_fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("Calories", &self.calories),
            ("Protein", &self.protein),
            ("Carbs", &self.carbs),
            ("Fat", &self.fat),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .map(|v| (label, v))
        })
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.present_fields().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "free_text")]
    pub description: String,
    #[serde(default, deserialize_with = "text_lines")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "text_lines")]
    pub instructions: Vec<String>,
    #[serde(default, deserialize_with = "free_text")]
    pub cooking_time: String,
    #[serde(default, deserialize_with = "free_text")]
    pub servings: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutritional_info: Option<NutritionalInfo>,
    pub meal_type: MealType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Recipe {
    /// Turns the model's payload into a recipe with a fresh id and the
    /// requested meal type.
    pub fn from_draft(draft: RecipeDraft, meal_type: MealType) -> Self {
        Self {
            id: generate_uuid_v7().to_string(),
            title: draft.title.trim().to_string(),
            description: draft.description,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            cooking_time: draft.cooking_time,
            servings: draft.servings,
            nutritional_info: draft.nutritional_info.filter(|info| !info.is_empty()),
            meal_type,
            image_url: Some(meal_type.image_url().to_string()),
        }
    }
}

/// Recipe fields as returned by the language model, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    #[serde(default, deserialize_with = "free_text")]
    pub title: String,
    #[serde(default, deserialize_with = "free_text")]
    pub description: String,
    #[serde(default, deserialize_with = "text_lines")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "text_lines")]
    pub instructions: Vec<String>,
    #[serde(default, deserialize_with = "free_text")]
    pub cooking_time: String,
    #[serde(default, deserialize_with = "free_text")]
    pub servings: String,
    #[serde(default)]
    pub nutritional_info: Option<NutritionalInfo>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FreeText {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl From<FreeText> for String {
    fn from(value: FreeText) -> Self {
        match value {
            FreeText::Text(text) => text,
            FreeText::Number(number) => number.to_string(),
            FreeText::Flag(flag) => flag.to_string(),
        }
    }
}

// Models routinely emit `"servings": 4`; accept scalars and null as text.
fn free_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<FreeText>::deserialize(deserializer)?
        .map(String::from)
        .unwrap_or_default())
}

fn optional_free_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<FreeText>::deserialize(deserializer)?.map(String::from))
}

fn text_lines<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<FreeText>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(String::from)
        .collect())
}
