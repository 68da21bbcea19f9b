use crate::errors::AppError;

/// The role an uploaded document plays in a request. Job descriptions are
/// often pasted as plain text, so they additionally allow `.txt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Resume,
    JobDescription,
}

impl DocumentKind {
    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume",
            DocumentKind::JobDescription => "job description",
        }
    }

    fn allowed_extensions(self) -> &'static [&'static str] {
        match self {
            DocumentKind::Resume => &["pdf", "doc", "docx"],
            DocumentKind::JobDescription => &["pdf", "doc", "docx", "txt"],
        }
    }
}

/// Returns the lowercased substring after the last `.`, or an empty string
/// when there is no dot, which is never a permitted extension.
pub fn file_extension(filename: &str) -> String {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}

/// Pure predicate over the filename string; content is never inspected here.
pub fn validate_file_type(filename: &str, kind: DocumentKind) -> Result<(), AppError> {
    if filename.is_empty() {
        return Err(AppError::Validation(format!(
            "Filename is required for the {}",
            kind.label()
        )));
    }

    let ext = file_extension(filename);
    if !kind.allowed_extensions().contains(&ext.as_str()) {
        return Err(AppError::Validation(format!(
            "Invalid file type for the {}: only {} files are allowed. Got: .{ext}",
            kind.label(),
            kind.allowed_extensions().join(", "),
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permitted_extensions_pass_case_insensitively() {
        for kind in [DocumentKind::Resume, DocumentKind::JobDescription] {
            for ext in ["pdf", "doc", "docx"] {
                for variant in [
                    ext.to_string(),
                    ext.to_uppercase(),
                    format!("{}{}", &ext[..1].to_uppercase(), &ext[1..]),
                ] {
                    let filename = format!("file.{variant}");
                    assert!(
                        validate_file_type(&filename, kind).is_ok(),
                        "expected {filename} to pass for {kind:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_txt_allowed_only_for_job_descriptions() {
        assert!(validate_file_type("jd.txt", DocumentKind::JobDescription).is_ok());
        assert!(validate_file_type("resume.txt", DocumentKind::Resume).is_err());
    }

    #[test]
    fn test_generated_extension_alphabet_rejected() {
        // Every extension outside the allow-list fails, across a synthetic
        // alphabet of lengths 1..=3.
        let alphabet = ['a', 'e', 'x', 'p', '1'];
        let mut candidates: Vec<String> = Vec::new();
        for a in alphabet {
            candidates.push(a.to_string());
            for b in alphabet {
                candidates.push(format!("{a}{b}"));
                for c in alphabet {
                    candidates.push(format!("{a}{b}{c}"));
                }
            }
        }

        for ext in candidates {
            let filename = format!("upload.{ext}");
            for kind in [DocumentKind::Resume, DocumentKind::JobDescription] {
                let allowed = kind.allowed_extensions().contains(&ext.as_str());
                assert_eq!(
                    validate_file_type(&filename, kind).is_ok(),
                    allowed,
                    "extension .{ext} for {kind:?}"
                );
            }
        }
    }

    #[test]
    fn test_exe_rejected_with_actionable_detail() {
        let err = validate_file_type("resume.exe", DocumentKind::Resume).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Invalid file type"));
        assert!(message.contains(".exe"));
    }

    #[test]
    fn test_empty_filename_rejected() {
        assert!(validate_file_type("", DocumentKind::Resume).is_err());
    }

    #[test]
    fn test_filename_without_dot_rejected() {
        assert!(validate_file_type("resume", DocumentKind::Resume).is_err());
        assert_eq!(file_extension("resume"), "");
    }

    #[test]
    fn test_extension_taken_after_last_dot() {
        assert_eq!(file_extension("archive.tar.pdf"), "pdf");
        assert!(validate_file_type("archive.pdf.tar", DocumentKind::Resume).is_err());
    }
}
