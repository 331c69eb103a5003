use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which body representation of a descriptor is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BodyType {
    #[default]
    Raw,
    #[serde(rename = "Form-Data", alias = "FormData")]
    FormData,
}

impl BodyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyType::Raw => "Raw",
            BodyType::FormData => "Form-Data",
        }
    }
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Raw" => Ok(BodyType::Raw),
            "Form-Data" | "FormData" => Ok(BodyType::FormData),
            other => Err(format!("Unknown body type: {}", other)),
        }
    }
}

/// One row of a form-data body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub name: String,
    /// Literal value, or a filesystem path when `is_file` is set.
    pub value: String,
    #[serde(default)]
    pub is_file: bool,
}

impl FormField {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            is_file: false,
        }
    }

    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: path.into(),
            is_file: true,
        }
    }
}

/// A request as composed by the user, before transmission.
///
/// Only one of `raw_body` / `form_fields` is meaningful, selected by
/// `body_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDescriptor {
    pub method: String,
    pub url: String,
    /// Raw `Name: Value` lines, in editor order.
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub body_type: BodyType,
    #[serde(default)]
    pub raw_body: String,
    #[serde(default)]
    pub form_fields: Vec<FormField>,
}

impl Default for RequestDescriptor {
    fn default() -> Self {
        Self {
            method: "GET".to_string(),
            url: String::new(),
            headers: Vec::new(),
            body_type: BodyType::Raw,
            raw_body: String::new(),
            form_fields: Vec::new(),
        }
    }
}

impl RequestDescriptor {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_header(mut self, line: impl Into<String>) -> Self {
        self.headers.push(line.into());
        self
    }

    pub fn with_raw_body(mut self, body: impl Into<String>) -> Self {
        self.body_type = BodyType::Raw;
        self.raw_body = body.into();
        self
    }

    pub fn with_form_field(mut self, field: FormField) -> Self {
        self.body_type = BodyType::FormData;
        self.form_fields.push(field);
        self
    }

    /// GET and DELETE never carry a body, whatever the descriptor holds.
    pub fn allows_body(&self) -> bool {
        !method_forbids_body(&self.method)
    }
}

pub(crate) fn method_forbids_body(method: &str) -> bool {
    method == "GET" || method == "DELETE"
}

/// Best-effort result of importing a curl command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedCurlResult {
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// `Name:Value` strings in encounter order.
    pub headers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Default for ParsedCurlResult {
    fn default() -> Self {
        Self {
            method: "GET".to_string(),
            url: None,
            headers: Vec::new(),
            body: None,
        }
    }
}

impl ParsedCurlResult {
    /// Fills an editor descriptor from the import. A seen body selects the
    /// Raw body type, otherwise Form-Data is selected with no fields.
    pub fn into_descriptor(self) -> RequestDescriptor {
        let body_type = if self.body.is_some() {
            BodyType::Raw
        } else {
            BodyType::FormData
        };
        RequestDescriptor {
            method: self.method,
            url: self.url.unwrap_or_default(),
            headers: self.headers,
            body_type,
            raw_body: self.body.unwrap_or_default(),
            form_fields: Vec::new(),
        }
    }
}
