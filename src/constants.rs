//! Application constants
//!
//! Centralized location for user-facing text and configuration defaults.

/// Default EmailJS API base URL
pub const DEFAULT_EMAILJS_API_URL: &str = "https://api.emailjs.com";

/// Path of the EmailJS send endpoint, relative to the API base URL
pub const EMAILJS_SEND_PATH: &str = "/api/v1.0/email/send";

/// Directory (under the home directory) holding the optional config file
pub const CONFIG_DIR_NAME: &str = ".contactform";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Log file written next to the working directory
pub const LOG_FILE_NAME: &str = "contactform.log";

// Form chrome
pub const FORM_TITLE: &str = "Get in Touch";
pub const FORM_SUBTITLE: &str = "Enter your details and I'll get back to you.";

// Status messages
pub const MSG_SENDING: &str = "Sending message...";
pub const MSG_SUCCESS: &str = "🚀 Success! Your data is successfully sent.";
pub const MSG_ERROR: &str = "❌ Oops! Something went wrong.";

// Submit control labels
pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUBMIT_LABEL_BUSY: &str = "Sending...";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
