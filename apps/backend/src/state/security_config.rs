/// Server-held host credential.
///
/// The key authorizes lobby-lifecycle operations; it is supplied by the
/// environment at startup and compared byte-for-byte against the value a
/// request presents.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    host_key: Vec<u8>,
}

impl SecurityConfig {
    pub fn new(host_key: impl Into<Vec<u8>>) -> Self {
        Self {
            host_key: host_key.into(),
        }
    }

    /// Exact byte comparison. An empty configured key never verifies.
    pub fn verify_host_key(&self, presented: &str) -> bool {
        !self.host_key.is_empty() && presented.as_bytes() == self.host_key.as_slice()
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::new(b"test-host-key".to_vec())
    }
}
