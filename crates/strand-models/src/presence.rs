use serde::{Deserialize, Serialize, Serializer};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::{is_unset, Payload};

/// Presence broadcast, sent with the presence update opcode.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PresenceStatus {
    /// Unix time (ms) the client went idle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<Activity>,
    pub status: StatusKind,
    pub afk: bool,
}

impl PresenceStatus {
    pub fn new(status: StatusKind) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }
}

impl Payload for PresenceStatus {
    fn is_valid(&self) -> bool {
        self.since.is_some() || self.game.is_some() || self.status != StatusKind::Online || self.afk
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    #[default]
    Online,
    Dnd,
    Idle,
    Invisible,
    Offline,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum ActivityType {
    #[default]
    Game = 0,
    Streaming = 1,
    Listening = 2,
    Custom = 3,
}

/// A single presence activity. `name` and `type` are always emitted; every
/// other field follows the omission rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Activity {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    /// Stream URL, only honoured for [`ActivityType::Streaming`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(skip_serializing_if = "is_unset")]
    pub timestamps: ActivityTimestamps,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::snowflake::serialize_opt"
    )]
    pub application_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "is_unset")]
    pub emoji: ActivityEmoji,
    #[serde(skip_serializing_if = "is_unset")]
    pub party: ActivityParty,
    #[serde(skip_serializing_if = "is_unset")]
    pub assets: ActivityAssets,
    #[serde(skip_serializing_if = "is_unset")]
    pub secrets: ActivitySecrets,
    /// Tri-state: `None` leaves the key out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<bool>,
    #[serde(skip_serializing_if = "is_unset")]
    pub flags: ActivityFlags,
}

impl Activity {
    pub fn new(name: impl Into<String>, kind: ActivityType) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Self::default()
        }
    }
}

impl Payload for Activity {
    fn is_valid(&self) -> bool {
        !self.name.is_empty()
            || self.kind != ActivityType::Game
            || self.url.is_some()
            || self.created_at.is_some()
            || self.timestamps.is_valid()
            || self.application_id.is_some()
            || self.details.is_some()
            || self.state.is_some()
            || self.emoji.is_valid()
            || self.party.is_valid()
            || self.assets.is_valid()
            || self.secrets.is_valid()
            || self.instance.is_some()
            || self.flags.is_valid()
    }
}

/// Unix times (ms) bounding the activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActivityTimestamps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
}

impl Payload for ActivityTimestamps {
    fn is_valid(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActivityEmoji {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::snowflake::serialize_opt"
    )]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animated: Option<bool>,
}

impl Payload for ActivityEmoji {
    fn is_valid(&self) -> bool {
        self.name.is_some() || self.id.is_some() || self.animated.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActivityParty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<PartySize>,
}

impl Payload for ActivityParty {
    fn is_valid(&self) -> bool {
        self.id.is_some() || self.size.is_some()
    }
}

/// Emitted as a `[current, max]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartySize {
    pub current: u32,
    pub max: u32,
}

impl Serialize for PartySize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.current, self.max).serialize(serializer)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActivityAssets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_text: Option<String>,
}

impl Payload for ActivityAssets {
    fn is_valid(&self) -> bool {
        self.large_image.is_some()
            || self.large_text.is_some()
            || self.small_image.is_some()
            || self.small_text.is_some()
    }
}

/// Each secret is emitted only when it is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActivitySecrets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spectate: Option<String>,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_secret: Option<String>,
}

impl Payload for ActivitySecrets {
    fn is_valid(&self) -> bool {
        self.join.is_some() || self.spectate.is_some() || self.match_secret.is_some()
    }
}

bitflags::bitflags! {
    /// Packed MSB-first: instance is bit 5, play is bit 0.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ActivityFlags: u8 {
        const INSTANCE     = 1 << 5;
        const JOIN         = 1 << 4;
        const SPECTATE     = 1 << 3;
        const JOIN_REQUEST = 1 << 2;
        const SYNC         = 1 << 1;
        const PLAY         = 1 << 0;
    }
}

impl ActivityFlags {
    /// Shift each bit in, instance first.
    pub fn pack(
        instance: bool,
        join: bool,
        spectate: bool,
        join_request: bool,
        sync: bool,
        play: bool,
    ) -> Self {
        let bits = [instance, join, spectate, join_request, sync, play]
            .into_iter()
            .fold(0u8, |acc, bit| (acc << 1) | u8::from(bit));
        Self::from_bits_retain(bits)
    }
}

impl Default for ActivityFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl Serialize for ActivityFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.bits())
    }
}

impl Payload for ActivityFlags {
    fn is_valid(&self) -> bool {
        !self.is_empty()
    }
}
