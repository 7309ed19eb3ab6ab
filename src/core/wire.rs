//! Wire JSON serialization.
//!
//! The JSON object produced here is the external contract consumed by the
//! front-end clients: field names, field order and escaping are fixed and
//! must be reproduced byte-for-byte. That rules out generic serializers —
//! the object is assembled by hand in the one order the contract allows:
//!
//! `id, type, response_to, server, channel, nick, text|task, timestamp,
//! level, is_own, extra`
//!
//! Optional fields are skipped entirely when absent; commas exist only
//! between fields actually present.

use crate::core::escape::escape_json;
use crate::core::message::{ExtraValue, Message, MessageType};

impl Message {
    /// Serialize to a single-line JSON object.
    ///
    /// Never mutates the message — a fanout serializes once per client
    /// from the same instance and every call yields identical bytes.
    pub fn to_json(&self) -> String {
        let mut json = String::from("{");

        // id leads when present; type is the first unconditional field
        if let Some(id) = self.id() {
            json.push_str(&format!("\"id\":\"{}\",", escape_json(Some(id))));
        }

        json.push_str(&format!("\"type\":\"{}\"", self.kind().as_str()));

        if let Some(response_to) = self.response_to() {
            json.push_str(&format!(
                ",\"response_to\":\"{}\"",
                escape_json(Some(response_to))
            ));
        }

        if let Some(server) = self.server_tag() {
            json.push_str(&format!(",\"server\":\"{}\"", escape_json(Some(server))));
        }

        if let Some(target) = self.target() {
            json.push_str(&format!(",\"channel\":\"{}\"", escape_json(Some(target))));
        }

        if let Some(nick) = self.nick() {
            json.push_str(&format!(",\"nick\":\"{}\"", escape_json(Some(nick))));
        }

        // nicklist_update repurposes the text field as a task descriptor
        if let Some(text) = self.text() {
            let key = if self.kind() == MessageType::NicklistUpdate {
                "task"
            } else {
                "text"
            };
            json.push_str(&format!(",\"{}\":\"{}\"", key, escape_json(Some(text))));
        }

        json.push_str(&format!(",\"timestamp\":{}", self.timestamp()));

        // level 0 is the "absent" sentinel
        if self.level() != 0 {
            json.push_str(&format!(",\"level\":{}", self.level()));
        }

        if self.kind() == MessageType::Chat {
            json.push_str(&format!(
                ",\"is_own\":{}",
                if self.is_own() { "true" } else { "false" }
            ));
        }

        if !self.extra().is_empty() {
            json.push_str(",\"extra\":{");

            let mut first = true;
            for (key, value) in self.extra() {
                if !first {
                    json.push(',');
                }
                first = false;

                let escaped_key = escape_json(Some(key.as_str()));
                match value {
                    ExtraValue::RawJson(raw) => {
                        json.push_str(&format!("\"{}\":{}", escaped_key, raw));
                    }
                    ExtraValue::Text(text) => {
                        json.push_str(&format!(
                            "\"{}\":\"{}\"",
                            escaped_key,
                            escape_json(Some(text.as_str()))
                        ));
                    }
                }
            }

            json.push('}');
        }

        json.push('}');

        json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::MessageBuilder;

    fn base(kind: MessageType) -> MessageBuilder {
        Message::builder(kind).timestamp(1700000000)
    }

    #[test]
    fn minimal_message_has_type_and_timestamp_only() {
        let msg = base(MessageType::Pong).build();
        assert_eq!(msg.to_json(), r#"{"type":"pong","timestamp":1700000000}"#);
    }

    #[test]
    fn id_leads_the_object() {
        let msg = base(MessageType::ServerStatus).id("1700000000-0007").build();
        assert_eq!(
            msg.to_json(),
            r#"{"id":"1700000000-0007","type":"server_status","timestamp":1700000000}"#
        );
    }

    #[test]
    fn full_field_order_is_stable() {
        let msg = base(MessageType::Whois)
            .id("1-0000")
            .response_to("1-0001")
            .server("libera")
            .target("#rust")
            .nick("ferris")
            .text("idle 5s")
            .build();
        assert_eq!(
            msg.to_json(),
            concat!(
                r##"{"id":"1-0000","type":"whois","response_to":"1-0001","##,
                r##""server":"libera","channel":"#rust","nick":"ferris","##,
                r##""text":"idle 5s","timestamp":1700000000}"##
            )
        );
    }

    #[test]
    fn nicklist_update_renders_text_as_task() {
        let msg = base(MessageType::NicklistUpdate).text("add").build();
        assert_eq!(
            msg.to_json(),
            r#"{"type":"nicklist_update","task":"add","timestamp":1700000000}"#
        );

        let msg = base(MessageType::Topic).text("add").build();
        assert_eq!(
            msg.to_json(),
            r#"{"type":"topic","text":"add","timestamp":1700000000}"#
        );
    }

    #[test]
    fn level_zero_is_omitted() {
        let msg = base(MessageType::ServerStatus).level(0).build();
        assert!(!msg.to_json().contains("level"));

        let msg = base(MessageType::ServerStatus).level(4).build();
        assert_eq!(
            msg.to_json(),
            r#"{"type":"server_status","timestamp":1700000000,"level":4}"#
        );
    }

    #[test]
    fn is_own_only_for_chat_messages() {
        let msg = base(MessageType::Chat).build();
        assert_eq!(
            msg.to_json(),
            r#"{"type":"message","timestamp":1700000000,"is_own":false}"#
        );

        let msg = base(MessageType::Chat).own(true).build();
        assert!(msg.to_json().ends_with(r#""is_own":true}"#));

        let msg = base(MessageType::Topic).own(true).build();
        assert!(!msg.to_json().contains("is_own"));
    }

    #[test]
    fn empty_extra_map_is_omitted() {
        let msg = base(MessageType::Pong).build();
        assert!(!msg.to_json().contains("extra"));
    }

    #[test]
    fn params_array_is_emitted_raw() {
        let msg = base(MessageType::Error).params("[1,2,3]").build();
        assert_eq!(
            msg.to_json(),
            r#"{"type":"error","timestamp":1700000000,"extra":{"params":[1,2,3]}}"#
        );
    }

    #[test]
    fn text_extra_values_are_escaped() {
        let msg = base(MessageType::Error).extra("note", "a\"b").build();
        assert_eq!(
            msg.to_json(),
            r#"{"type":"error","timestamp":1700000000,"extra":{"note":"a\"b"}}"#
        );
    }

    #[test]
    fn serialization_is_repeatable() {
        let msg = base(MessageType::Chat)
            .id("9-0001")
            .text("same bytes")
            .build();
        assert_eq!(msg.to_json(), msg.to_json());
    }
}
