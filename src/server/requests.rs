use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SmsRequest {
    /// SMS text content
    pub text: String,
    /// Sender phone number
    pub phone_number: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CallRequest {
    /// Phone number to check
    pub phone_number: String,
    /// Call duration in seconds (accepted for compatibility, unused)
    #[allow(dead_code)]
    pub call_duration: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct EmailRequest {
    /// Email subject
    pub subject: String,
    /// Email body content
    pub body: String,
    /// Sender email address
    pub sender: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UrlRequest {
    /// URL to scan
    pub url: String,
}
