use axum::extract::Multipart;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use time::{
    Date, OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339,
    macros::format_description,
};

use crate::{config::UnorderedMap, response::error::ApiError};

#[derive(Debug, Clone, PartialEq, Eq)]
enum FormValue {
    Text(String),
    File {
        content_type: Option<String>,
        bytes: Vec<u8>,
    },
}

/// The parts of a `multipart/form-data` body, keyed by field name. A
/// repeated field keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    fields: UnorderedMap<String, FormValue>,
}

impl FormFields {
    pub async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut fields = UnorderedMap::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            let value = if field.file_name().is_some() {
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?.to_vec();
                FormValue::File {
                    content_type,
                    bytes,
                }
            } else {
                FormValue::Text(field.text().await?)
            };

            fields.insert(name, value);
        }

        Ok(Self { fields })
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.fields.get(name)? {
            FormValue::Text(text) => Some(text.as_str()),
            FormValue::File { .. } => None,
        }
    }

    pub fn required_text(&self, name: &str) -> Result<&str, ApiError> {
        self.text(name).ok_or_else(|| {
            ApiError::bad_request(format!("'{name}' is required"))
        })
    }

    /// `None` when the field is absent or an empty upload, `Some(None)` for
    /// an empty text value, otherwise the image as stored.
    pub fn image(&self, name: &str) -> Option<Option<String>> {
        match self.fields.get(name)? {
            FormValue::Text(text) if text.is_empty() => Some(None),
            FormValue::Text(text) => Some(Some(text.clone())),
            FormValue::File { bytes, .. } if bytes.is_empty() => None,
            FormValue::File {
                content_type,
                bytes,
            } => Some(Some(data_url(content_type.as_deref(), bytes))),
        }
    }

    #[cfg(test)]
    fn from_values(values: Vec<(&str, FormValue)>) -> Self {
        Self {
            fields: values
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        }
    }
}

fn data_url(content_type: Option<&str>, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        content_type.unwrap_or("application/octet-stream"),
        STANDARD.encode(bytes)
    )
}

/// Treats empty query values as absent.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

/// Accepts a calendar date or an RFC 3339 instant, reduced to its UTC day.
pub fn parse_due_date(value: &str) -> Result<Date, ApiError> {
    let value = value.trim();

    if let Ok(date) =
        Date::parse(value, format_description!("[year]-[month]-[day]"))
    {
        return Ok(date);
    }

    OffsetDateTime::parse(value, &Rfc3339)
        .map(|instant| instant.to_offset(UtcOffset::UTC).date())
        .map_err(|_| {
            ApiError::bad_request(format!("Invalid due date '{value}'"))
        })
}
