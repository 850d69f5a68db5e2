use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExportError>;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("An error occurred while generating the PDF: {0}")]
    Pdf(#[from] printpdf::Error),

    #[error("Could not write the PDF: {0}")]
    Io(#[from] std::io::Error),
}
