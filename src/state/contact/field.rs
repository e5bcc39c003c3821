//! Contact form field values

use serde::Serialize;

/// Services offered in the "Service Needed" selector
pub const SERVICE_OPTIONS: &[&str] = &["Web Design", "Graphic Design", "Video Editing"];

/// Identifies one of the four contact form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Service,
    Message,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Service,
        FieldName::Message,
    ];

    /// Key used in the provider template
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Service => "service",
            Self::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Service => "Service Needed",
            Self::Message => "Your Message",
        }
    }

    /// Hint shown while the field is empty
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Name => None,
            Self::Email => Some("Enter your email address"),
            Self::Service => Some("Select a Service"),
            Self::Message => Some("Tell me about your project..."),
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }

    /// Choice fields are edited by cycling through [`SERVICE_OPTIONS`]
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Service)
    }
}

/// The four free-text values entered by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

impl FormFields {
    #[cfg(test)]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        service: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            service: service.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Service => &self.service,
            FieldName::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Service => &mut self.service,
            FieldName::Message => &mut self.message,
        }
    }

    /// Clear every field back to the empty string
    pub fn clear(&mut self) {
        for field in FieldName::ALL {
            self.get_mut(field).clear();
        }
    }

    /// True when all four fields are the empty string
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        FieldName::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Payload sent to the email provider.
///
/// Field names must match the placeholders of the provider-side template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

impl From<&FormFields> for ContactPayload {
    fn from(fields: &FormFields) -> Self {
        Self {
            name: fields.name.clone(),
            email: fields.email.clone(),
            service: fields.service.clone(),
            message: fields.message.clone(),
        }
    }
}

/// Next service option after `current` (wraps; empty selects the first)
pub fn next_service(current: &str) -> &'static str {
    match SERVICE_OPTIONS.iter().position(|s| *s == current) {
        Some(idx) => SERVICE_OPTIONS[(idx + 1) % SERVICE_OPTIONS.len()],
        None => SERVICE_OPTIONS[0],
    }
}

/// Previous service option before `current` (wraps; empty selects the last)
pub fn prev_service(current: &str) -> &'static str {
    match SERVICE_OPTIONS.iter().position(|s| *s == current) {
        Some(0) | None => SERVICE_OPTIONS[SERVICE_OPTIONS.len() - 1],
        Some(idx) => SERVICE_OPTIONS[idx - 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_fields_are_empty() {
        let fields = FormFields::default();
        assert!(fields.is_empty());
        for field in FieldName::ALL {
            assert_eq!(fields.get(field), "");
        }
    }

    #[test]
    fn test_get_mut_targets_matching_field() {
        let mut fields = FormFields::default();
        fields.get_mut(FieldName::Email).push_str("ada@example.com");
        fields.get_mut(FieldName::Message).push('x');

        assert_eq!(fields.email, "ada@example.com");
        assert_eq!(fields.message, "x");
        assert_eq!(fields.name, "");
        assert!(!fields.is_empty());
    }

    #[test]
    fn test_clear_empties_every_field() {
        let mut fields = FormFields::new("Ada", "ada@example.com", "Web Design", "Need a site");
        fields.clear();
        assert_eq!(fields, FormFields::default());
    }

    #[test]
    fn test_payload_uses_template_keys() {
        let fields = FormFields::new("Ada", "ada@example.com", "Web Design", "Need a site");
        let json = serde_json::to_value(ContactPayload::from(&fields)).unwrap();

        let keys: Vec<&str> = FieldName::ALL.iter().map(|f| f.key()).collect();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), keys.len());
        for key in keys {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert_eq!(json["service"], "Web Design");
    }

    #[test]
    fn test_service_cycle_forward() {
        assert_eq!(next_service(""), "Web Design");
        assert_eq!(next_service("Web Design"), "Graphic Design");
        assert_eq!(next_service("Graphic Design"), "Video Editing");
        assert_eq!(next_service("Video Editing"), "Web Design");
    }

    #[test]
    fn test_service_cycle_backward() {
        assert_eq!(prev_service(""), "Video Editing");
        assert_eq!(prev_service("Web Design"), "Video Editing");
        assert_eq!(prev_service("Video Editing"), "Graphic Design");
    }

    #[test]
    fn test_service_cycle_from_unknown_value() {
        assert_eq!(next_service("Something else"), "Web Design");
    }

    #[test]
    fn test_only_message_is_multiline() {
        let multiline: Vec<FieldName> = FieldName::ALL
            .into_iter()
            .filter(|f| f.is_multiline())
            .collect();
        assert_eq!(multiline, vec![FieldName::Message]);
        assert!(FieldName::Service.is_choice());
        assert!(!FieldName::Name.is_choice());
    }
}
