// Upload ingestion: file-type validation, text extraction, and the
// per-request pipeline that ties them to generation and persistence.

pub mod extract;
pub mod handlers;
pub mod pipeline;
pub mod validation;
