use serde::{Deserialize, Serialize};

/// One of the three inputs on the contact form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FullName,
    Email,
    Message,
}

impl Field {
    /// Form order, top to bottom
    pub const ALL: [Field; 3] = [Field::FullName, Field::Email, Field::Message];

    /// Wire name used in the template parameters
    pub fn name(&self) -> &'static str {
        match self {
            Field::FullName => "user_name",
            Field::Email => "user_email",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Email => "Email Address",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::FullName => "Collins Oyiii",
            Field::Email => "benoyikocho@gmail.com",
            Field::Message => "How can I help you?",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Field::Message)
    }
}

/// The values the user typed, sent as EmailJS template parameters
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormPayload {
    pub user_name: String,
    pub user_email: String,
    pub message: String,
}

impl FormPayload {
    pub fn new(
        user_name: impl Into<String>,
        user_email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        FormPayload {
            user_name: user_name.into(),
            user_email: user_email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.user_name,
            Field::Email => &self.user_email,
            Field::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FullName => &mut self.user_name,
            Field::Email => &mut self.user_email,
            Field::Message => &mut self.message,
        }
    }

    /// Reset every field to empty
    pub fn clear(&mut self) {
        self.user_name.clear();
        self.user_email.clear();
        self.message.clear();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_wire_names() {
        let payload = FormPayload::new("Jo", "jo@example.com", "hi");
        let json = serde_json::to_value(&payload).unwrap();
        for field in Field::ALL {
            assert_eq!(json[field.name()], payload.get(field));
        }
    }

    #[test]
    fn test_clear() {
        let mut payload = FormPayload::new("Jo", "jo@example.com", "hi");
        assert!(!payload.is_empty());
        payload.clear();
        assert!(payload.is_empty());
    }
}
