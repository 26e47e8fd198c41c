pub mod host_key;
pub mod validated_json;

pub use host_key::HostKey;
pub use validated_json::ValidatedJson;
