//! Outbound message model.
//!
//! A [`Message`] is one event headed for the front-end: a chat line, a
//! nicklist snapshot, a whois result. Messages are write-once — built via
//! [`MessageBuilder`], then immutable until dropped — so one instance can
//! be serialized once and delivered to any number of clients.

use std::collections::HashMap;

use crate::utils::time::unix_now;

/// Wire-visible message kinds.
///
/// Each variant maps to a fixed `type` string in the JSON wire format via
/// [`MessageType::as_str`]. `Unknown` is the stringifier fallback — it
/// never originates inside the gateway, but the mapping is total so a
/// future variant can never silently produce an unmapped tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    /// Authentication acknowledgement — the one kind deliverable before
    /// the client's `authenticated` flag is set.
    AuthOk,
    /// Chat message (channel or query line).
    Chat,
    ServerStatus,
    ChannelJoin,
    ChannelPart,
    ChannelKick,
    UserQuit,
    Topic,
    ChannelMode,
    /// Full nicklist snapshot for a channel.
    Nicklist,
    /// Incremental nicklist change; serializes its text field as `task`.
    NicklistUpdate,
    NickChange,
    UserMode,
    Away,
    Whois,
    ChannelList,
    StateDump,
    Error,
    Pong,
    QueryOpened,
    QueryClosed,
    ActivityUpdate,
    MarkRead,
    /// Catch-all; renders as `"unknown"` on the wire.
    Unknown,
}

impl MessageType {
    /// The `type` field value in the wire JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            MessageType::AuthOk => "auth_ok",
            MessageType::Chat => "message",
            MessageType::ServerStatus => "server_status",
            MessageType::ChannelJoin => "channel_join",
            MessageType::ChannelPart => "channel_part",
            MessageType::ChannelKick => "channel_kick",
            MessageType::UserQuit => "user_quit",
            MessageType::Topic => "topic",
            MessageType::ChannelMode => "channel_mode",
            MessageType::Nicklist => "nicklist",
            MessageType::NicklistUpdate => "nicklist_update",
            MessageType::NickChange => "nick_change",
            MessageType::UserMode => "user_mode",
            MessageType::Away => "away",
            MessageType::Whois => "whois",
            MessageType::ChannelList => "channel_list",
            MessageType::StateDump => "state_dump",
            MessageType::Error => "error",
            MessageType::Pong => "pong",
            MessageType::QueryOpened => "query_opened",
            MessageType::QueryClosed => "query_closed",
            MessageType::ActivityUpdate => "activity_update",
            MessageType::MarkRead => "mark_read",
            MessageType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value slot for the extension map.
///
/// Most entries are plain strings; a few (command parameter lists) are
/// pre-formed JSON arrays that must reach the wire unescaped. Making the
/// distinction a variant at construction time keeps the serializer free
/// of content sniffing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtraValue {
    /// Plain text — escaped and quoted on the wire.
    Text(String),
    /// Pre-formed JSON fragment — emitted verbatim.
    RawJson(String),
}

impl ExtraValue {
    /// Classify a `params` value the way the wire contract demands: a
    /// value opening with `[` is a pre-formed JSON array, anything else
    /// is treated as plain text.
    pub fn params(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.starts_with('[') {
            ExtraValue::RawJson(value)
        } else {
            ExtraValue::Text(value)
        }
    }
}

/// Reserved extension-map key whose value may be a raw JSON array.
pub const PARAMS_KEY: &str = "params";

/// One outbound event, fully owned and immutable after construction.
#[derive(Debug, Clone)]
pub struct Message {
    kind: MessageType,
    id: Option<String>,
    timestamp: i64,
    server_tag: Option<String>,
    target: Option<String>,
    nick: Option<String>,
    text: Option<String>,
    response_to: Option<String>,
    level: i32,
    is_own: bool,
    extra: HashMap<String, ExtraValue>,
}

impl Message {
    /// Start building a message of the given kind. The timestamp is
    /// captured here, at construction.
    pub fn builder(kind: MessageType) -> MessageBuilder {
        MessageBuilder {
            msg: Message {
                kind,
                id: None,
                timestamp: unix_now(),
                server_tag: None,
                target: None,
                nick: None,
                text: None,
                response_to: None,
                level: 0,
                is_own: false,
                extra: HashMap::new(),
            },
        }
    }

    pub fn kind(&self) -> MessageType {
        self.kind
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn server_tag(&self) -> Option<&str> {
        self.server_tag.as_deref()
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn nick(&self) -> Option<&str> {
        self.nick.as_deref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn response_to(&self) -> Option<&str> {
        self.response_to.as_deref()
    }

    /// Message level; 0 means "absent" for serialization purposes.
    pub fn level(&self) -> i32 {
        self.level
    }

    /// Whether the chat line was written by the gateway's own user.
    /// Only meaningful for [`MessageType::Chat`].
    pub fn is_own(&self) -> bool {
        self.is_own
    }

    pub fn extra(&self) -> &HashMap<String, ExtraValue> {
        &self.extra
    }
}

/// Builder producing a fully-formed, immutable [`Message`].
#[derive(Debug)]
pub struct MessageBuilder {
    msg: Message,
}

impl MessageBuilder {
    /// Set the unique message ID (see `core::id`). Absent for message
    /// kinds that need no correlation.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.msg.id = Some(id.into());
        self
    }

    /// Override the construction timestamp. Mostly for tests that need
    /// byte-stable output.
    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.msg.timestamp = timestamp;
        self
    }

    /// Tag of the IRC server this event originated from.
    pub fn server(mut self, tag: impl Into<String>) -> Self {
        self.msg.server_tag = Some(tag.into());
        self
    }

    /// Channel or query name the event belongs to.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.msg.target = Some(target.into());
        self
    }

    pub fn nick(mut self, nick: impl Into<String>) -> Self {
        self.msg.nick = Some(nick.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.msg.text = Some(text.into());
        self
    }

    /// Correlate with the request that triggered this event (whois,
    /// channel_list).
    pub fn response_to(mut self, id: impl Into<String>) -> Self {
        self.msg.response_to = Some(id.into());
        self
    }

    /// Message level. 0 is the "absent" sentinel and is never serialized.
    pub fn level(mut self, level: i32) -> Self {
        self.msg.level = level;
        self
    }

    /// Mark a chat line as written by the gateway's own user.
    pub fn own(mut self, is_own: bool) -> Self {
        self.msg.is_own = is_own;
        self
    }

    /// Attach a plain-text extension entry.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.msg
            .extra
            .insert(key.into(), ExtraValue::Text(value.into()));
        self
    }

    /// Attach a pre-formed JSON fragment as an extension entry.
    pub fn extra_raw(mut self, key: impl Into<String>, json: impl Into<String>) -> Self {
        self.msg
            .extra
            .insert(key.into(), ExtraValue::RawJson(json.into()));
        self
    }

    /// Attach a `params` entry, classified per the wire contract.
    pub fn params(mut self, value: impl Into<String>) -> Self {
        self.msg
            .extra
            .insert(PARAMS_KEY.to_string(), ExtraValue::params(value));
        self
    }

    /// Finish construction. The message is immutable from here on.
    pub fn build(self) -> Message {
        self.msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let msg = Message::builder(MessageType::Pong).build();
        assert_eq!(msg.kind(), MessageType::Pong);
        assert!(msg.id().is_none());
        assert!(msg.text().is_none());
        assert_eq!(msg.level(), 0);
        assert!(!msg.is_own());
        assert!(msg.extra().is_empty());
        assert!(msg.timestamp() > 0);
    }

    #[test]
    fn builder_sets_all_fields() {
        let msg = Message::builder(MessageType::Chat)
            .id("123-0001")
            .timestamp(1700000000)
            .server("libera")
            .target("#rust")
            .nick("ferris")
            .text("hello")
            .response_to("123-0000")
            .level(4)
            .own(true)
            .extra("note", "x")
            .build();

        assert_eq!(msg.id(), Some("123-0001"));
        assert_eq!(msg.timestamp(), 1700000000);
        assert_eq!(msg.server_tag(), Some("libera"));
        assert_eq!(msg.target(), Some("#rust"));
        assert_eq!(msg.nick(), Some("ferris"));
        assert_eq!(msg.text(), Some("hello"));
        assert_eq!(msg.response_to(), Some("123-0000"));
        assert_eq!(msg.level(), 4);
        assert!(msg.is_own());
        assert_eq!(
            msg.extra().get("note"),
            Some(&ExtraValue::Text("x".to_string()))
        );
    }

    #[test]
    fn params_classification() {
        assert_eq!(
            ExtraValue::params("[1,2,3]"),
            ExtraValue::RawJson("[1,2,3]".to_string())
        );
        assert_eq!(
            ExtraValue::params("not an array"),
            ExtraValue::Text("not an array".to_string())
        );
    }

    #[test]
    fn type_names_match_wire_table() {
        assert_eq!(MessageType::AuthOk.as_str(), "auth_ok");
        assert_eq!(MessageType::Chat.as_str(), "message");
        assert_eq!(MessageType::NicklistUpdate.as_str(), "nicklist_update");
        assert_eq!(MessageType::MarkRead.as_str(), "mark_read");
        assert_eq!(MessageType::Unknown.as_str(), "unknown");
    }
}
