//! Request body and path extractors that reject with [`Error`].
//!
//! Drop-in replacements for the axum extractors of the same name. Every
//! rejection renders the JSON error body instead of axum's plain text.
//!
//! [`Error`]: crate::handler::Error

mod enhanced_form;
mod enhanced_json;
mod enhanced_path;
mod validated_json;

pub use self::enhanced_form::Form;
pub use self::enhanced_json::Json;
pub use self::enhanced_path::Path;
pub use self::validated_json::ValidateJson;

/// Tracing target for extractor rejections.
const TRACING_TARGET: &str = "traveltax_server::extract";

/// Shortens a parser error to its first lines and at most 200 characters.
fn sanitize_error_message(message: &str) -> String {
    let lines = message.lines().take(3).collect::<Vec<_>>();
    lines.join(" ").chars().take(200).collect()
}
