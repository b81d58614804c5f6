use thiserror::Error;

/// Unified error type for the client bindings.
///
/// Server-side failures are deliberately absent: the daemon defines its own
/// status codes and error bodies, and bindings pass those through to the
/// caller unchanged instead of translating them into a local taxonomy.
#[derive(Debug, Error)]
pub enum Error {
    /// Connection, timeout, or protocol failure in the HTTP layer.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be decoded as JSON where JSON was
    /// required. Carries a snippet of the offending body for diagnosis.
    #[error("response decode error: {source} (body: {snippet:?})")]
    Decode {
        #[source]
        source: serde_json::Error,
        snippet: String,
    },

    /// Local file I/O failure while uploading or downloading file content.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid builder input, e.g. an unparseable base URL.
    #[error("configuration error: {0}")]
    Configuration(String),
}

const SNIPPET_MAX: usize = 256;

impl Error {
    pub(crate) fn decode(source: serde_json::Error, body: &[u8]) -> Self {
        let mut snippet = String::from_utf8_lossy(body).into_owned();
        if snippet.len() > SNIPPET_MAX {
            let mut cut = SNIPPET_MAX;
            while !snippet.is_char_boundary(cut) {
                cut -= 1;
            }
            snippet.truncate(cut);
        }
        Error::Decode { source, snippet }
    }
}
