//! Outbound payload models for the strand bot client.
//!
//! Every record is a plain value built by the caller, converted with
//! [`Payload::to_json`] at submission time and dropped afterwards. Unset
//! fields are `None` and never reach the wire; nested records that report
//! themselves invalid are left out of their parent entirely.

pub mod embed;
pub mod gateway;
pub mod presence;
pub mod snowflake;

use serde::Serialize;
use serde_json::Value;

pub use embed::{
    Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedImage, EmbedProvider, EmbedThumbnail,
    EmbedType, EmbedVideo,
};
pub use presence::{
    Activity, ActivityAssets, ActivityEmoji, ActivityFlags, ActivityParty, ActivitySecrets,
    ActivityTimestamps, ActivityType, PartySize, PresenceStatus, StatusKind,
};

/// A value that can be submitted to the remote API.
pub trait Payload: Serialize {
    /// True iff at least one field differs from its default.
    fn is_valid(&self) -> bool;

    /// Canonical JSON form. Never mutates `self`.
    fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// `skip_serializing_if` predicate shared by every nested record.
pub(crate) fn is_unset<T: Payload>(value: &T) -> bool {
    !value.is_valid()
}
