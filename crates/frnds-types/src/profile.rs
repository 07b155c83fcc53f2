//! Permissive readers for registration and profile-update payloads.
//!
//! Fields are taken only when present with the expected JSON type; anything
//! else falls back to a default (registration) or is left untouched (update).
//! These readers never fail.

use serde_json::Value;
use uuid::Uuid;

use crate::models::{Gender, MAX_PHOTOS, Profile, Socials};

/// A registration request after coercion. Empty `username`/`password` mean
/// the field was missing or not a string; the directory rejects those.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub profile: Profile,
}

impl Registration {
    pub fn from_json(body: &Value) -> Self {
        Self {
            username: string_field(body, "username").unwrap_or_default(),
            password: string_field(body, "password").unwrap_or_default(),
            profile: Profile {
                age: body.get("age").and_then(coerce_age),
                gender: match body.get("gender").and_then(Value::as_str) {
                    Some("vrouw") => Gender::Vrouw,
                    _ => Gender::Man,
                },
                photos: body.get("photos").map(photo_list).unwrap_or_default(),
                photo_captions: body.get("photoCaptions").map(caption_list).unwrap_or_default(),
                bio: string_field(body, "bio").unwrap_or_default(),
                interests: body
                    .get("interests")
                    .and_then(Value::as_array)
                    .map(|items| {
                        items
                            .iter()
                            .filter_map(Value::as_str)
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default(),
                socials: body
                    .get("socials")
                    .map(|s| SocialsPatch::from_json(s).apply_to(&Socials::default()))
                    .unwrap_or_default(),
                status_text: string_field(body, "statusText").unwrap_or_default(),
                anthem_url: string_field(body, "anthemUrl").unwrap_or_default(),
                spotify_url: string_field(body, "spotifyUrl").unwrap_or_default(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialsPatch {
    pub instagram: Option<String>,
    pub snapchat: Option<String>,
    pub tiktok: Option<String>,
}

impl SocialsPatch {
    pub fn from_json(value: &Value) -> Self {
        Self {
            instagram: string_field(value, "instagram"),
            snapchat: string_field(value, "snapchat"),
            tiktok: string_field(value, "tiktok"),
        }
    }

    pub fn apply_to(&self, current: &Socials) -> Socials {
        Socials {
            instagram: self.instagram.clone().unwrap_or_else(|| current.instagram.clone()),
            snapchat: self.snapchat.clone().unwrap_or_else(|| current.snapchat.clone()),
            tiktok: self.tiktok.clone().unwrap_or_else(|| current.tiktok.clone()),
        }
    }
}

/// The well-typed subset of a profile-update payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub status_text: Option<String>,
    pub socials: Option<SocialsPatch>,
    pub anthem_url: Option<String>,
    pub spotify_url: Option<String>,
    pub photos: Option<Vec<String>>,
    pub photo_captions: Option<Vec<String>>,
}

impl ProfilePatch {
    pub fn from_json(body: &Value) -> Self {
        Self {
            status_text: string_field(body, "statusText"),
            socials: body
                .get("socials")
                .filter(|v| v.is_object())
                .map(SocialsPatch::from_json),
            anthem_url: string_field(body, "anthemUrl"),
            spotify_url: string_field(body, "spotifyUrl"),
            // An empty photo array never wipes the existing photos.
            photos: body
                .get("photos")
                .filter(|v| v.as_array().is_some_and(|a| !a.is_empty()))
                .map(photo_list),
            photo_captions: body
                .get("photoCaptions")
                .filter(|v| v.is_array())
                .map(caption_list),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(&self, profile: &mut Profile) {
        if let Some(status_text) = &self.status_text {
            profile.status_text = status_text.clone();
        }
        if let Some(socials) = &self.socials {
            profile.socials = socials.apply_to(&profile.socials);
        }
        if let Some(anthem_url) = &self.anthem_url {
            profile.anthem_url = anthem_url.clone();
        }
        if let Some(spotify_url) = &self.spotify_url {
            profile.spotify_url = spotify_url.clone();
        }
        if let Some(photos) = &self.photos {
            profile.photos = photos.clone();
        }
        if let Some(captions) = &self.photo_captions {
            profile.photo_captions = captions.clone();
        }
    }
}

/// Reads an identifier field given as a UUID string.
pub fn id_field(body: &Value, key: &str) -> Option<Uuid> {
    body.get(key)?.as_str()?.parse().ok()
}

fn string_field(body: &Value, key: &str) -> Option<String> {
    body.get(key)?.as_str().map(str::to_string)
}

/// Whole, non-negative years from a number or numeric string. Blank, null,
/// negative and non-numeric input leave the age unset; fractions truncate.
fn coerce_age(value: &Value) -> Option<u32> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if n.is_finite() && n >= 0.0 && n <= u32::MAX as f64 {
        Some(n as u32)
    } else {
        None
    }
}

fn photo_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .take(MAX_PHOTOS)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn caption_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .take(MAX_PHOTOS)
                .map(|c| c.as_str().unwrap_or_default().to_string())
                .collect()
        })
        .unwrap_or_default()
}
