//! Error types for the conversational engine.

use nivesh_core::error::NiveshError;

/// Errors from the conversation controller.
///
/// `EmptyMessage` and `ReplyPending` are the silent-rejection cases: the
/// front end drops them without user-visible feedback.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("a reply is already pending")]
    ReplyPending,
    #[error("no reply is pending")]
    NoPendingReply,
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<NiveshError> for ChatError {
    fn from(err: NiveshError) -> Self {
        ChatError::Storage(err.to_string())
    }
}

impl From<ChatError> for NiveshError {
    fn from(err: ChatError) -> Self {
        NiveshError::Chat(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_display() {
        assert_eq!(
            ChatError::EmptyMessage.to_string(),
            "message cannot be empty"
        );
        assert_eq!(
            ChatError::ReplyPending.to_string(),
            "a reply is already pending"
        );
        assert_eq!(
            ChatError::NoPendingReply.to_string(),
            "no reply is pending"
        );
        assert_eq!(
            ChatError::Storage("disk full".to_string()).to_string(),
            "storage error: disk full"
        );
    }

    #[test]
    fn test_chat_error_from_nivesh_error() {
        let err = NiveshError::Storage("write failed".to_string());
        let chat_err: ChatError = err.into();
        assert!(matches!(chat_err, ChatError::Storage(_)));
        assert!(chat_err.to_string().contains("write failed"));
    }

    #[test]
    fn test_nivesh_error_from_chat_error() {
        let err: NiveshError = ChatError::EmptyMessage.into();
        assert!(matches!(err, NiveshError::Chat(_)));
        assert!(err.to_string().contains("message cannot be empty"));
    }

    #[test]
    fn test_errors_implement_debug() {
        let dbg = format!("{:?}", ChatError::ReplyPending);
        assert!(dbg.contains("ReplyPending"));
    }
}
