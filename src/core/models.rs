use serde::{Deserialize, Serialize};

/// One catalog record, as authored in `demos.json`. Field names are the
/// external file contract and stay snake_case on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoEntryDto {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub launch_type: Option<String>,
    #[serde(default)]
    pub command: Option<String>,
}

impl DemoEntryDto {
    /// Display label for logs and user-facing messages; entries without a
    /// name fall back to their id.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchType {
    Url,
    Script,
    Video,
    Container,
}

impl LaunchType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "url" => Some(Self::Url),
            "script" => Some(Self::Script),
            "video" => Some(Self::Video),
            "container" => Some(Self::Container),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchStatusDto {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchResultDto {
    pub status: LaunchStatusDto,
    pub message: String,
}

impl LaunchResultDto {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: LaunchStatusDto::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: LaunchStatusDto::Error,
            message: message.into(),
        }
    }

    pub fn ok(&self) -> bool {
        self.status == LaunchStatusDto::Success
    }
}
