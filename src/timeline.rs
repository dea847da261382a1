//! Payload inspection helpers for the timeline endpoint.
//!
//! The endpoint returns a post wrapped as `data.post`, carrying the numeric
//! `user_id` and `post_id` plus a media key under one of several field names
//! depending on the post's age. Those three together address the HLS manifest
//! on the video host.

use serde_json::Value;

const VIDEO_HOST: &str = "https://video.candfans.jp";

/// Derive the HLS manifest URL for the post in a timeline payload.
///
/// Returns `None` when the payload does not carry a post with the required
/// identifiers. The media key is taken from `default_path`, falling back to
/// the first attachment's `uuid`, then `video_key`.
pub fn stream_url(payload: &Value) -> Option<String> {
    let post = payload.get("data")?.get("post")?;

    let user_id = id_field(post.get("user_id")?)?;
    let post_id = id_field(post.get("post_id")?)?;
    let key = media_key(post)?;

    Some(format!(
        "{}/user/{}/post/{}/{}.m3u8",
        VIDEO_HOST, user_id, post_id, key
    ))
}

/// Numeric ids sometimes arrive as JSON strings
fn id_field(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn media_key(post: &Value) -> Option<String> {
    if let Some(path) = post.get("default_path").and_then(Value::as_str) {
        if !path.is_empty() {
            return Some(path.to_string());
        }
    }

    if let Some(uuid) = post
        .get("attachments")
        .and_then(Value::as_array)
        .and_then(|a| a.first())
        .and_then(|a| a.get("uuid"))
        .and_then(Value::as_str)
    {
        if !uuid.is_empty() {
            return Some(uuid.to_string());
        }
    }

    post.get("video_key")
        .and_then(Value::as_str)
        .filter(|k| !k.is_empty())
        .map(|k| k.to_string())
}
