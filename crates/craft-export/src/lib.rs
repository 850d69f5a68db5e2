//! Printable PDF rendering of a craft idea.

mod data_uri;
mod error;
mod layout;

use std::fs;
use std::path::{Path, PathBuf};

use craft_core::CraftIdea;

pub use error::{ExportError, Result};

use layout::{FontStyle, PageWriter};

pub const IMAGE_PLACEHOLDER: &str = "[Image unavailable]";

const TITLE_SIZE: f32 = 20.0;
const HEADING_SIZE: f32 = 15.0;
const BODY_SIZE: f32 = 11.0;
const LIST_INDENT: f32 = 4.0;

/// Rendered document plus what went into it.
#[derive(Debug)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub pages: usize,
    pub images: usize,
    pub placeholders: usize,
}

/// `file_name` with spaces replaced by underscores, plus `.pdf`.
pub fn pdf_file_name(file_name: &str) -> String {
    format!("{}.pdf", file_name.replace(' ', "_"))
}

pub fn render_pdf(idea: &CraftIdea) -> Result<Vec<u8>> {
    Ok(render_document(idea)?.bytes)
}

/// Lay out title, materials and illustrated instructions on A4 pages.
pub fn render_document(idea: &CraftIdea) -> Result<RenderedPdf> {
    let mut writer = PageWriter::new(&idea.title)?;
    let mut images = 0;
    let mut placeholders = 0;

    writer.paragraph(&idea.title, TITLE_SIZE, FontStyle::Bold, 0.0);
    writer.gap(6.0);

    writer.paragraph("Materials Needed", HEADING_SIZE, FontStyle::Bold, 0.0);
    writer.gap(2.0);
    for material in &idea.materials {
        writer.paragraph(
            &format!("- {material}"),
            BODY_SIZE,
            FontStyle::Regular,
            LIST_INDENT,
        );
    }
    writer.gap(6.0);

    writer.paragraph("Instructions", HEADING_SIZE, FontStyle::Bold, 0.0);
    writer.gap(2.0);
    for (i, step) in idea.steps.iter().enumerate() {
        if let Some(uri) = &step.image_url {
            match data_uri::decode_image(uri) {
                Some(img) => {
                    writer.image(&img, LIST_INDENT);
                    writer.gap(2.0);
                    images += 1;
                }
                None => {
                    writer.paragraph(IMAGE_PLACEHOLDER, BODY_SIZE, FontStyle::Regular, LIST_INDENT);
                    placeholders += 1;
                }
            }
        }
        writer.paragraph(
            &format!("{}. {}", i + 1, step.text),
            BODY_SIZE,
            FontStyle::Regular,
            LIST_INDENT,
        );
        writer.gap(4.0);
    }

    let pages = writer.pages();
    let bytes = writer.finish()?;
    log::debug!(
        "Rendered '{}': {} pages, {} images, {} placeholders",
        idea.title,
        pages,
        images,
        placeholders
    );

    Ok(RenderedPdf {
        bytes,
        pages,
        images,
        placeholders,
    })
}

/// Render `idea` and write it to `out_dir`, returning the written path.
pub fn export_pdf(idea: &CraftIdea, file_name: &str, out_dir: &Path) -> Result<PathBuf> {
    let bytes = render_pdf(idea)?;
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(pdf_file_name(file_name));
    fs::write(&path, bytes)?;
    log::info!("Exported '{}' to {}", idea.title, path.display());
    Ok(path)
}
