#[derive(Debug, Clone, PartialEq, Eq)]
/// Decoded reply of `api/v1/send`.
pub struct ApiResponse {
    pub code: i64,
    pub message: String,
    pub count: i64,
    pub results: Vec<MessageResult>,
    pub has_errors: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Per-destination outcome inside [`ApiResponse::results`].
pub struct MessageResult {
    pub id: String,
    pub status_code: String,
    pub status_message: String,
    pub destination: String,
}
