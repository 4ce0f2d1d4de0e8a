use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};

use crate::domain::{
    common::entities::app_errors::CoreError,
    export::{
        entities::{DocumentLayout, FontWeight, PAGE_HEIGHT_MM, PAGE_WIDTH_MM},
        ports::DocumentRenderer,
    },
};

const LAYER_NAME: &str = "Layer 1";

/// Renders a [`DocumentLayout`] with the built-in Helvetica faces.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfDocumentRenderer;

fn export_error(context: &str, error: impl std::fmt::Debug) -> CoreError {
    tracing::error!("{}: {:?}", context, error);
    CoreError::ExportError(format!("{}: {:?}", context, error))
}

impl DocumentRenderer for PdfDocumentRenderer {
    fn render(&self, layout: &DocumentLayout) -> Result<Vec<u8>, CoreError> {
        let (document, first_page, first_layer) = PdfDocument::new(
            layout.title.as_str(),
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            LAYER_NAME,
        );

        let regular: IndirectFontRef = document
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| export_error("Failed to load regular font", e))?;
        let bold: IndirectFontRef = document
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| export_error("Failed to load bold font", e))?;

        for (index, page) in layout.pages.iter().enumerate() {
            let (page_index, layer_index) = if index == 0 {
                (first_page, first_layer)
            } else {
                document.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME)
            };
            let layer = document.get_page(page_index).get_layer(layer_index);

            for line in &page.lines {
                let font = match line.weight {
                    FontWeight::Normal => &regular,
                    FontWeight::Bold => &bold,
                };
                // Layout measures from the top edge, PDF from the bottom.
                layer.use_text(
                    line.text.as_str(),
                    line.font_size,
                    Mm(line.x_mm),
                    Mm(PAGE_HEIGHT_MM - line.y_mm),
                    font,
                );
            }
        }

        document
            .save_to_bytes()
            .map_err(|e| export_error("Failed to encode PDF", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::export::entities::{LayoutLine, LayoutPage};

    fn page(text: &str) -> LayoutPage {
        LayoutPage {
            lines: vec![LayoutLine {
                text: text.to_string(),
                x_mm: 20.0,
                y_mm: 20.0,
                font_size: 12.0,
                weight: FontWeight::Bold,
            }],
        }
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let layout = DocumentLayout {
            title: "Soup".to_string(),
            pages: vec![page("Soup"), page("More soup")],
        };

        let bytes = PdfDocumentRenderer.render(&layout).unwrap();

        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 100);
    }
}
