use std::borrow::Cow;

use image::DynamicImage;
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference,
};

use crate::error::Result;

pub(crate) const PAGE_WIDTH: f32 = 210.0;
pub(crate) const PAGE_HEIGHT: f32 = 297.0;
pub(crate) const MARGIN: f32 = 15.0;
pub(crate) const PRINTABLE_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

const PT_TO_MM: f32 = 0.352_778;
const LINE_SPACING: f32 = 1.4;
/// Average Helvetica glyph advance as a fraction of the font size.
const AVG_GLYPH_WIDTH: f32 = 0.5;
const IMAGE_DPI: f32 = 300.0;
const MAX_IMAGE_WIDTH: f32 = 120.0;
const MAX_IMAGE_HEIGHT: f32 = 90.0;

#[derive(Debug, Clone, Copy)]
pub(crate) enum FontStyle {
    Regular,
    Bold,
}

/// Top-down writer over an A4 document that breaks pages at the bottom margin.
pub(crate) struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    /// Distance of the next element from the top edge.
    cursor: f32,
    pages: usize,
}

impl PageWriter {
    pub(crate) fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            cursor: MARGIN,
            pages: 1,
        })
    }

    pub(crate) fn pages(&self) -> usize {
        self.pages
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            format!("Layer {}", self.pages + 1),
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.cursor = MARGIN;
        self.pages += 1;
    }

    /// Start a new page if `height` more millimetres would cross the bottom margin.
    fn ensure_room(&mut self, height: f32) {
        if self.cursor + height > PAGE_HEIGHT - MARGIN && self.cursor > MARGIN {
            self.new_page();
        }
    }

    pub(crate) fn gap(&mut self, height: f32) {
        self.cursor += height;
    }

    /// Wrapped paragraph starting `indent` millimetres inside the left margin.
    pub(crate) fn paragraph(&mut self, text: &str, size: f32, style: FontStyle, indent: f32) {
        let line_height = size * PT_TO_MM * LINE_SPACING;
        let columns = wrap_columns(size, PRINTABLE_WIDTH - indent);

        let text = printable(text);
        for line in textwrap::wrap(&text, columns) {
            self.ensure_room(line_height);
            self.cursor += line_height;
            let font = match style {
                FontStyle::Regular => &self.regular,
                FontStyle::Bold => &self.bold,
            };
            self.layer.use_text(
                line.into_owned(),
                size,
                Mm(MARGIN + indent),
                Mm(PAGE_HEIGHT - self.cursor),
                font,
            );
        }
    }

    /// Image scaled to fit the illustration box, preserving aspect ratio.
    pub(crate) fn image(&mut self, img: &DynamicImage, indent: f32) {
        if img.width() == 0 || img.height() == 0 {
            return;
        }

        let (width, height) = fit_image(img.width(), img.height());
        let natural_width = img.width() as f32 / IMAGE_DPI * 25.4;
        let scale = width / natural_width;

        self.ensure_room(height);
        self.cursor += height;

        // Flatten alpha before embedding.
        let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
        Image::from_dynamic_image(&rgb).add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(MARGIN + indent)),
                translate_y: Some(Mm(PAGE_HEIGHT - self.cursor)),
                scale_x: Some(scale),
                scale_y: Some(scale),
                dpi: Some(IMAGE_DPI),
                ..Default::default()
            },
        );
    }

    pub(crate) fn finish(self) -> Result<Vec<u8>> {
        Ok(self.doc.save_to_bytes()?)
    }
}

/// The built-in fonts only cover ASCII reliably: typographic punctuation is
/// folded to its ASCII form and any other non-ASCII character becomes `?`.
pub(crate) fn printable(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => out.push('"'),
            '\u{2010}'..='\u{2015}' | '\u{2212}' => out.push('-'),
            '\u{2022}' | '\u{00B7}' => out.push('*'),
            '\u{2026}' => out.push_str("..."),
            '\u{00A0}' | '\u{2002}'..='\u{200A}' => out.push(' '),
            // Variation selectors and joiners trail emoji.
            '\u{200B}'..='\u{200D}' | '\u{FE00}'..='\u{FE0F}' => {}
            c if c.is_ascii() => out.push(c),
            _ => out.push('?'),
        }
    }
    Cow::Owned(out)
}

fn wrap_columns(size: f32, width: f32) -> usize {
    let glyph = size * PT_TO_MM * AVG_GLYPH_WIDTH;
    ((width / glyph) as usize).max(10)
}

/// Size in millimetres of an image box for the given pixel dimensions.
pub(crate) fn fit_image(px_width: u32, px_height: u32) -> (f32, f32) {
    let aspect = px_width as f32 / px_height as f32;
    let mut width = MAX_IMAGE_WIDTH;
    let mut height = width / aspect;
    if height > MAX_IMAGE_HEIGHT {
        height = MAX_IMAGE_HEIGHT;
        width = height * aspect;
    }
    (width, height)
}
