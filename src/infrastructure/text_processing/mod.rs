mod composite_file_loader;
mod docx_adapter;
mod numbered_boundary_segmenter;
mod ocr_pdf_adapter;
mod pdf_adapter;
mod pdf_rasterizer;
mod plain_text_adapter;

pub use composite_file_loader::CompositeFileLoader;
pub use docx_adapter::DocxAdapter;
pub use numbered_boundary_segmenter::NumberedBoundarySegmenter;
pub use ocr_pdf_adapter::OcrPdfAdapter;
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;

pub use numbered_boundary_segmenter::{
    collapse_line_breaks, fold_unicode, is_instructional_junk, is_metadata_leak,
    split_on_question_boundaries, strip_instructional_preambles, strip_mark_annotations,
    strip_metadata_labels, strip_section_headers,
};
