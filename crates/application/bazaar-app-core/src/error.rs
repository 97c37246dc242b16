/// Misuse of the kernel by calling code. Always a programming error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("{store} store accessed before the admin kernel was initialized")]
    NotInitialized { store: &'static str },
}
