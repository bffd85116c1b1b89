//! Analysis request types: the input side of a model invocation.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// SHA-256 digest of the raw image bytes, hex-encoded.
///
/// Reports carry the digest instead of the image so they stay loggable and
/// serializable without hauling megabytes of pixels around.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageDigest(pub String);

impl ImageDigest {
    /// Digest raw image bytes.
    pub fn of(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        Self(hex::encode(hasher.finalize()))
    }
}

impl std::fmt::Display for ImageDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A hint telling the capability what shape of reply is wanted.
///
/// Capabilities that support structured output feed `json_schema` to their
/// response-format parameter; capabilities that don't simply ignore the hint
/// and rely on the prompt text. Either way the normalizer re-validates, so
/// the hint is an optimization, never a trust boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredHint {
    /// MIME type of the desired reply, e.g. "application/json".
    pub mime_type: String,
    /// JSON Schema the reply should conform to.
    pub json_schema: serde_json::Value,
}

impl StructuredHint {
    /// A JSON hint for the given schema.
    pub fn json(json_schema: serde_json::Value) -> Self {
        Self {
            mime_type: "application/json".to_string(),
            json_schema,
        }
    }
}

/// One analysis request: an image plus the prompt and reply-shape hint.
///
/// Fields are private so a request is immutable once built — every adapter
/// in a cross-check sees byte-identical input.
#[derive(Clone)]
pub struct AnalysisRequest {
    image: Vec<u8>,
    prompt: String,
    hint: StructuredHint,
    digest: ImageDigest,
}

impl AnalysisRequest {
    /// Build a request, computing the image digest eagerly.
    pub fn new(image: Vec<u8>, prompt: impl Into<String>, hint: StructuredHint) -> Self {
        let digest = ImageDigest::of(&image);
        Self {
            image,
            prompt: prompt.into(),
            hint,
            digest,
        }
    }

    /// Raw image bytes.
    pub fn image(&self) -> &[u8] {
        &self.image
    }

    /// The instruction prompt sent alongside the image.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The reply-shape hint.
    pub fn hint(&self) -> &StructuredHint {
        &self.hint
    }

    /// Digest of the image bytes.
    pub fn digest(&self) -> &ImageDigest {
        &self.digest
    }
}

// Hand-written so logs carry the digest and sizes, never the image bytes.
impl std::fmt::Debug for AnalysisRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisRequest")
            .field("image_len", &self.image.len())
            .field("prompt_len", &self.prompt.len())
            .field("mime_type", &self.hint.mime_type)
            .field("digest", &self.digest)
            .finish()
    }
}
