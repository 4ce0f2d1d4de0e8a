use crate::domain::recipe::entities::MealType;

/// Parameters of a single recipe generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRecipeInput {
    pub meal_type: MealType,
    pub ingredient: Option<String>,
    pub dietary: Option<String>,
    pub surprise_me: bool,
}

impl GenerateRecipeInput {
    pub fn ingredient(&self) -> Option<&str> {
        non_blank(self.ingredient.as_deref())
    }

    pub fn dietary(&self) -> Option<&str> {
        non_blank(self.dietary.as_deref())
    }

    /// A directed request needs something to steer the model with.
    pub fn has_constraints(&self) -> bool {
        self.ingredient().is_some() || self.dietary().is_some()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
