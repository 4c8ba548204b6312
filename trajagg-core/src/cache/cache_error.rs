#[derive(thiserror::Error, Debug)]
pub enum CacheError {
    #[error("failed reading route cache '{filepath}': {source}")]
    ReadError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("failed writing route cache '{filepath}': {source}")]
    WriteError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("route cache '{filepath}' is not a valid key to route mapping: {source}")]
    DeserializeError {
        filepath: String,
        source: serde_json::Error,
    },
    #[error("failed serializing route cache '{filepath}': {source}")]
    SerializeError {
        filepath: String,
        source: serde_json::Error,
    },
}
