use serde::{Deserialize, Serialize};

/// Metadata for one registered video.
///
/// `id` is `0` until the coordinator assigns one. `data_url` is always
/// computed by the coordinator; whatever a client sends is overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    /// Length in seconds
    #[serde(default)]
    pub duration: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_url: Option<String>,
}

impl Video {
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn with_duration(mut self, seconds: u64) -> Self {
        self.duration = seconds;
        self
    }

    pub fn with_location<S: Into<String>>(mut self, location: S) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_subject<S: Into<String>>(mut self, subject: S) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_content_type<S: Into<String>>(mut self, content_type: S) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Whether an id has been assigned
    pub fn has_id(&self) -> bool {
        self.id != 0
    }
}

/// Processing state of an uploaded payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VideoState {
    Ready,
    /// Reserved for asynchronous backends; never produced here.
    Processing,
}

/// Result of a successful upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoStatus {
    pub state: VideoState,
}

impl VideoStatus {
    pub fn ready() -> Self {
        Self {
            state: VideoState::Ready,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_take_defaults() {
        let video: Video = serde_json::from_value(json!({"title": "demo"})).unwrap();
        assert_eq!(video.id, 0);
        assert_eq!(video.duration, 0);
        assert!(!video.has_id());
        assert!(video.data_url.is_none());
    }

    #[test]
    fn serializes_camel_case() {
        let mut video = Video::new("demo")
            .with_id(2)
            .with_duration(90)
            .with_subject("talks")
            .with_content_type("video/mp4");
        video.data_url = Some("http://host/video/2/data".to_string());

        let value = serde_json::to_value(&video).unwrap();
        assert_eq!(value["contentType"], "video/mp4");
        assert_eq!(value["dataUrl"], "http://host/video/2/data");
        assert_eq!(value["subject"], "talks");
        assert_eq!(value["duration"], 90);
        assert!(value.get("location").is_none());

        let located = Video::new("x").with_location("Nashville");
        assert_eq!(serde_json::to_value(&located).unwrap()["location"], "Nashville");
    }

    #[test]
    fn status_uses_upper_case_state() {
        let value = serde_json::to_value(VideoStatus::ready()).unwrap();
        assert_eq!(value, json!({"state": "READY"}));
    }
}
