//! Connected front-end clients.
//!
//! The connection lifecycle — accept, WebSocket handshake, authentication,
//! teardown — belongs to the host. The pipeline reads client state to gate
//! deliveries, writes frames through the client's transport capabilities,
//! and bumps the per-client sent counter. Structural changes to the
//! registry happen only between deliveries, on the host's single event
//! thread.

use crate::transport::{SecureChannel, TransportSink};

/// One connected front-end.
///
/// Fields are plain data owned by the host's connection layer; the
/// pipeline treats them as read-only except for `messages_sent`.
pub struct Client {
    /// Opaque identity, used in every diagnostic line.
    pub id: String,
    /// Authentication completed.
    pub authenticated: bool,
    /// WebSocket handshake completed.
    pub handshake_done: bool,
    /// Frames go through `ssl_channel` when set (and the channel is bound).
    pub use_ssl: bool,
    /// Payloads are encrypted before framing when set.
    pub encryption_enabled: bool,
    /// Receive events from every server, not just the bound one.
    pub wants_all_servers: bool,
    /// Tag of the IRC server this client is synced with.
    pub server: Option<String>,
    /// Deliveries completed to this client.
    pub messages_sent: u64,
    /// Plain write path; its absence aborts every send.
    pub handle: Option<Box<dyn TransportSink>>,
    /// SSL write path, bound only for `use_ssl` clients.
    pub ssl_channel: Option<Box<dyn SecureChannel>>,
}

impl Client {
    /// A client fresh off the accept loop: nothing negotiated yet.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            authenticated: false,
            handshake_done: false,
            use_ssl: false,
            encryption_enabled: false,
            wants_all_servers: false,
            server: None,
            messages_sent: 0,
            handle: None,
            ssl_channel: None,
        }
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("id", &self.id)
            .field("authenticated", &self.authenticated)
            .field("handshake_done", &self.handshake_done)
            .field("use_ssl", &self.use_ssl)
            .field("encryption_enabled", &self.encryption_enabled)
            .field("wants_all_servers", &self.wants_all_servers)
            .field("server", &self.server)
            .field("messages_sent", &self.messages_sent)
            .field("handle", &self.handle.is_some())
            .field("ssl_channel", &self.ssl_channel.is_some())
            .finish()
    }
}

/// Process-wide set of connected clients.
///
/// Additions and removals come from the host's connection lifecycle; the
/// pipeline only traverses. Exclusive access (`&mut`) stands in for the
/// single-threaded cooperative model of the host event loop.
#[derive(Debug, Default)]
pub struct ClientRegistry {
    clients: Vec<Client>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a client. Host lifecycle only.
    pub fn add(&mut self, client: Client) {
        self.clients.push(client);
    }

    /// Deregister a client by id. Host lifecycle only.
    pub fn remove(&mut self, id: &str) -> Option<Client> {
        let index = self.clients.iter().position(|c| c.id == id)?;
        Some(self.clients.remove(index))
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Client> {
        self.clients.iter_mut().find(|c| c.id == id)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Client> {
        self.clients.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_client_starts_unnegotiated() {
        let client = Client::new("c1");
        assert!(!client.authenticated);
        assert!(!client.handshake_done);
        assert!(client.handle.is_none());
        assert_eq!(client.messages_sent, 0);
    }

    #[test]
    fn registry_add_remove_lookup() {
        let mut registry = ClientRegistry::new();
        registry.add(Client::new("a"));
        registry.add(Client::new("b"));
        assert_eq!(registry.len(), 2);

        assert!(registry.get_mut("a").is_some());
        assert!(registry.get_mut("missing").is_none());

        let removed = registry.remove("a");
        assert_eq!(removed.map(|c| c.id), Some("a".to_string()));
        assert_eq!(registry.len(), 1);
        assert!(registry.remove("a").is_none());
    }
}
