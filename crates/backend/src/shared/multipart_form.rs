//! Collects a multipart/form-data body (the inline-create dialog form) into memory.

use super::errors::CreateError;
use axum::body::Bytes;
use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use std::collections::HashMap;

/// A file part of the submitted form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Text values and files of one submitted form, keyed by field name.
///
/// When a name repeats, the last part wins (select-one semantics).
#[derive(Debug, Default, Clone)]
pub struct SubmittedForm {
    texts: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl SubmittedForm {
    /// Reads every part of the body.
    ///
    /// File inputs left empty by the user arrive as a part with an empty
    /// filename and no content; those are dropped. A body cut off by the
    /// request size limit becomes [`CreateError::TooLarge`], naming the file
    /// part that was streaming when it is known.
    pub async fn read(multipart: &mut Multipart) -> Result<Self, CreateError> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| body_error(None, e))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                tracing::debug!("Skipping multipart part without a name");
                continue;
            };

            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| body_error(Some(&name), e))?;
                    if file_name.is_empty() && bytes.is_empty() {
                        continue;
                    }
                    form.files.insert(
                        name,
                        UploadedFile {
                            file_name,
                            content_type,
                            bytes,
                        },
                    );
                }
                None => {
                    let value = field.text().await.map_err(|e| body_error(None, e))?;
                    form.texts.insert(name, value);
                }
            }
        }

        Ok(form)
    }

    /// Trimmed text value; `None` when absent or blank.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.texts
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn file(&self, name: &str) -> Option<&UploadedFile> {
        self.files.get(name)
    }

    #[cfg(test)]
    pub fn with_text(mut self, name: &str, value: &str) -> Self {
        self.texts.insert(name.to_string(), value.to_string());
        self
    }

    #[cfg(test)]
    pub fn with_file(mut self, name: &str, file: UploadedFile) -> Self {
        self.files.insert(name.to_string(), file);
        self
    }
}

fn body_error(file_field: Option<&str>, e: MultipartError) -> CreateError {
    if e.status() != StatusCode::PAYLOAD_TOO_LARGE {
        return e.into();
    }
    CreateError::TooLarge {
        field: file_field.map(str::to_string),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::{header, Request};

    pub const BOUNDARY: &str = "X-INLINE-CREATE-BOUNDARY";

    pub enum Part<'a> {
        Text(&'a str, &'a str),
        File(&'a str, &'a str, &'a str, &'a [u8]),
    }

    /// Hand-built multipart body, the way a browser `FormData` would send it.
    pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match part {
                Part::Text(name, value) => {
                    body.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n")
                            .as_bytes(),
                    );
                    body.extend_from_slice(value.as_bytes());
                }
                Part::File(name, file_name, content_type, bytes) => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                             Content-Type: {content_type}\r\n\r\n"
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(bytes);
                }
            }
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    pub fn multipart_request(uri: &str, parts: &[Part<'_>]) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(parts)))
            .unwrap()
    }

    async fn read(parts: &[Part<'_>]) -> SubmittedForm {
        let request = multipart_request("/", parts);
        let mut multipart = Multipart::from_request(request, &()).await.unwrap();
        SubmittedForm::read(&mut multipart).await.unwrap()
    }

    #[tokio::test]
    async fn test_reads_text_and_file_parts() {
        let form = read(&[
            Part::Text("name", "  Beta Corp "),
            Part::Text("phone", ""),
            Part::File("logo", "logo.png", "image/png", b"\x89PNG"),
        ])
        .await;

        assert_eq!(form.text("name"), Some("Beta Corp"));
        assert_eq!(form.text("phone"), None);
        assert_eq!(form.text("missing"), None);

        let logo = form.file("logo").unwrap();
        assert_eq!(logo.file_name, "logo.png");
        assert_eq!(logo.content_type.as_deref(), Some("image/png"));
        assert_eq!(logo.len(), 4);
    }

    #[tokio::test]
    async fn test_empty_file_input_is_dropped() {
        let form = read(&[
            Part::Text("name", "Acme"),
            Part::File("logo", "", "application/octet-stream", b""),
        ])
        .await;
        assert!(form.file("logo").is_none());
    }
}
