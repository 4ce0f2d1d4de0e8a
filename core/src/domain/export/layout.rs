use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{
    export::{
        entities::{DocumentLayout, FontWeight, LayoutLine, LayoutPage, PAGE_WIDTH_MM},
        metrics::{char_width_mm, text_width_mm},
    },
    recipe::entities::Recipe,
};

pub const MARGIN_MM: f32 = 20.0;
pub const LINE_HEIGHT_MM: f32 = 7.0;
/// Lines starting below this offset move to a fresh page.
pub const PAGE_BREAK_Y_MM: f32 = 270.0;
/// The nutrition block needs room for its header plus a few fields.
pub const NUTRITION_BREAK_Y_MM: f32 = 250.0;

const TITLE_SIZE: f32 = 20.0;
const DESCRIPTION_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 11.0;
const HEADING_SIZE: f32 = 14.0;
const INDENT_MM: f32 = 5.0;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static UNSAFE_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_-]").expect("filename pattern is valid"));
static HYPHEN_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").expect("hyphen pattern is valid"));

struct LayoutCursor {
    pages: Vec<LayoutPage>,
    y_mm: f32,
}

impl LayoutCursor {
    fn new() -> Self {
        Self {
            pages: vec![LayoutPage::default()],
            y_mm: MARGIN_MM,
        }
    }

    fn break_page_after(&mut self, threshold_mm: f32) {
        if self.y_mm > threshold_mm {
            self.pages.push(LayoutPage::default());
            self.y_mm = MARGIN_MM;
        }
    }

    fn write(&mut self, text: String, x_mm: f32, font_size: f32, weight: FontWeight) {
        let line = LayoutLine {
            text,
            x_mm,
            y_mm: self.y_mm,
            font_size,
            weight,
        };
        if let Some(page) = self.pages.last_mut() {
            page.lines.push(line);
        }
    }

    /// Writes wrapped text one line at a time, breaking pages as needed.
    fn write_wrapped(&mut self, text: &str, x_mm: f32, font_size: f32, weight: FontWeight) {
        let width = PAGE_WIDTH_MM - MARGIN_MM - x_mm;
        for line in wrap_text(text, width, font_size, weight) {
            self.break_page_after(PAGE_BREAK_Y_MM);
            self.write(line, x_mm, font_size, weight);
            self.advance(LINE_HEIGHT_MM);
        }
    }

    fn heading(&mut self, text: &str) {
        self.break_page_after(PAGE_BREAK_Y_MM);
        self.write(text.to_string(), MARGIN_MM, HEADING_SIZE, FontWeight::Bold);
        self.advance(10.0);
    }

    fn advance(&mut self, dy_mm: f32) {
        self.y_mm += dy_mm;
    }
}

/// Lays a recipe out on A4 pages: title, description, timings, ingredients,
/// numbered instructions and whichever nutrition fields are present.
pub fn layout_recipe(recipe: &Recipe) -> DocumentLayout {
    let mut cursor = LayoutCursor::new();

    let title_width = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
    for line in wrap_text(&recipe.title, title_width, TITLE_SIZE, FontWeight::Bold) {
        cursor.write(line, MARGIN_MM, TITLE_SIZE, FontWeight::Bold);
        cursor.advance(9.0);
    }
    cursor.advance(6.0);

    if !recipe.description.trim().is_empty() {
        cursor.write_wrapped(
            &recipe.description,
            MARGIN_MM,
            DESCRIPTION_SIZE,
            FontWeight::Normal,
        );
        cursor.advance(10.0);
    }

    cursor.write_wrapped(
        &format!("Cooking Time: {}", recipe.cooking_time),
        MARGIN_MM,
        BODY_SIZE,
        FontWeight::Normal,
    );
    cursor.write_wrapped(
        &format!("Servings: {}", recipe.servings),
        MARGIN_MM,
        BODY_SIZE,
        FontWeight::Normal,
    );
    cursor.advance(8.0);

    cursor.heading("Ingredients:");
    for ingredient in &recipe.ingredients {
        cursor.write_wrapped(
            &format!("- {}", ingredient),
            MARGIN_MM + INDENT_MM,
            BODY_SIZE,
            FontWeight::Normal,
        );
    }
    cursor.advance(10.0);

    cursor.heading("Instructions:");
    for (index, instruction) in recipe.instructions.iter().enumerate() {
        cursor.write_wrapped(
            &format!("{}. {}", index + 1, instruction),
            MARGIN_MM + INDENT_MM,
            BODY_SIZE,
            FontWeight::Normal,
        );
        cursor.advance(5.0);
    }

    let nutrition = recipe
        .nutritional_info
        .as_ref()
        .map(|info| info.present_fields())
        .unwrap_or_default();
    if !nutrition.is_empty() {
        cursor.advance(10.0);
        cursor.break_page_after(NUTRITION_BREAK_Y_MM);
        cursor.heading("Nutritional Information:");
        for (label, value) in nutrition {
            cursor.write_wrapped(
                &format!("{}: {}", label, value),
                MARGIN_MM + INDENT_MM,
                BODY_SIZE,
                FontWeight::Normal,
            );
        }
    }

    DocumentLayout {
        title: recipe.title.clone(),
        pages: cursor.pages,
    }
}

/// Greedy word wrap measured with the font's advance widths. Words wider
/// than a line are split between glyphs. Always yields at least one line.
pub fn wrap_text(
    text: &str,
    max_width_mm: f32,
    font_size: f32,
    weight: FontWeight,
) -> Vec<String> {
    let space_mm = char_width_mm(' ', font_size, weight);

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_mm = 0.0;

    for word in text.split_whitespace() {
        let word_mm = text_width_mm(word, font_size, weight);

        if !current.is_empty() && current_mm + space_mm + word_mm <= max_width_mm {
            current.push(' ');
            current.push_str(word);
            current_mm += space_mm + word_mm;
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_mm = 0.0;
        }
        if word_mm <= max_width_mm {
            current.push_str(word);
            current_mm = word_mm;
            continue;
        }

        for ch in word.chars() {
            let ch_mm = char_width_mm(ch, font_size, weight);
            if !current.is_empty() && current_mm + ch_mm > max_width_mm {
                lines.push(std::mem::take(&mut current));
                current_mm = 0.0;
            }
            current.push(ch);
            current_mm += ch_mm;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

/// Download name for an exported recipe, e.g. `"Oat Bowl"` -> `oat-bowl.pdf`.
pub fn export_filename(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(&lowered, "-");
    let cleaned = UNSAFE_FILENAME_CHARS.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUN.replace_all(&cleaned, "-");
    let stem = collapsed.trim_matches('-');

    if stem.is_empty() {
        "recipe.pdf".to_string()
    } else {
        format!("{}.pdf", stem)
    }
}
