//! Error macros for vaultchat

/// Macro for returning validation errors
#[macro_export]
macro_rules! bail_validation {
    ($msg:expr) => {
        return Err($crate::error::VaultChatError::validation($msg))
    };
}

/// Macro for mapping note read failures
#[macro_export]
macro_rules! map_read_err {
    ($note:expr, $error:expr) => {
        $crate::error::VaultChatError::content_retrieval($note, $error)
    };
}
