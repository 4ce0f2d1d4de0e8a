use crate::domain::recipe::value_objects::GenerateRecipeInput;

pub const CHEF_SYSTEM_PROMPT: &str = "You are an expert chef and nutritionist. Generate detailed, accurate, and delicious recipes. Always respond with valid JSON only, no additional text.";

/// Output contract appended to every prompt so the reply stays parseable.
pub const RECIPE_FORMAT_DIRECTIVE: &str = r#"

Please provide:
1. A creative recipe title
2. A brief description (1-2 sentences)
3. A complete list of ingredients with measurements
4. Step-by-step cooking instructions
5. Estimated cooking time
6. Number of servings
7. Basic nutritional information (calories, protein, carbs, fat per serving)

Format the response as a JSON object with this structure:
{
  "title": "Recipe Name",
  "description": "Brief description",
  "ingredients": ["ingredient 1", "ingredient 2"],
  "instructions": ["step 1", "step 2"],
  "cookingTime": "X minutes",
  "servings": "X servings",
  "nutritionalInfo": {
    "calories": "X kcal",
    "protein": "X g",
    "carbs": "X g",
    "fat": "X g"
  }
}"#;

/// Builds the user prompt for a generation request.
///
/// A surprise request ignores the ingredient and dietary constraints.
pub fn build_recipe_prompt(input: &GenerateRecipeInput) -> String {
    let mut prompt = if input.surprise_me {
        format!(
            "Generate a creative and delicious {} recipe. Surprise me with something unique and interesting!",
            input.meal_type
        )
    } else {
        let mut prompt = format!("Generate a {} recipe", input.meal_type);
        if let Some(ingredient) = input.ingredient() {
            prompt.push_str(&format!(" featuring {}", ingredient));
        }
        if let Some(dietary) = input.dietary() {
            prompt.push_str(&format!(" that is {}", dietary));
        }
        prompt.push('.');
        prompt
    };

    prompt.push_str(RECIPE_FORMAT_DIRECTIVE);
    prompt
}
