//! Message fanout across the client registry.
//!
//! One serialized-once message, many clients. Both traversals visit the
//! whole registry — a failed delivery to one client (dropped by the send
//! pipeline, never raised) has no effect on the clients after it.

use tracing::debug;

use crate::core::message::Message;
use crate::protocol::client::ClientRegistry;
use crate::protocol::send::Sender;
use crate::utils::metrics::global_metrics;

impl Sender {
    /// Deliver to every authenticated client synced with `server` — plus
    /// those following all servers. No-op when `server` is absent.
    pub fn send_to_server_clients(
        &self,
        registry: &mut ClientRegistry,
        server: Option<&str>,
        msg: &Message,
    ) {
        let Some(server) = server else {
            return;
        };

        global_metrics().fanout_traversal();
        debug!(server, kind = %msg.kind(), "fanout to server clients");

        for client in registry.iter_mut() {
            if client.authenticated
                && (client.server.as_deref() == Some(server) || client.wants_all_servers)
            {
                self.send(Some(client), msg);
            }
        }
    }

    /// Deliver to every authenticated client regardless of server binding.
    pub fn send_to_all_clients(&self, registry: &mut ClientRegistry, msg: &Message) {
        global_metrics().fanout_traversal();
        debug!(kind = %msg.kind(), "fanout to all clients");

        for client in registry.iter_mut() {
            if client.authenticated {
                self.send(Some(client), msg);
            }
        }
    }
}
