use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::info;
use uuid::Uuid;

/// Domain events emitted by commands after a successful mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    BlueprintCreated(Uuid),
    BlueprintUpdated(Uuid),
    BlueprintDeleted(Uuid),

    RackCreated {
        rack_id: Uuid,
        blueprint_id: Uuid,
        location_count: usize,
    },
    RackUpdated {
        rack_id: Uuid,
        locations_regenerated: bool,
    },
    RackDeleted(Uuid),
    RackRotated {
        rack_id: Uuid,
        degrees: i32,
    },

    ProductCreated(Uuid),
    ProductUpdated(Uuid),
    ProductDeleted(Uuid),
    CategoryCreated(Uuid),
    CategoryDeleted(Uuid),
    SupplierCreated(Uuid),
    SupplierDeleted(Uuid),
    InventoryUpdated {
        inventory_id: Uuid,
        current_stock: i32,
    },
    OrderCreated(Uuid),
    OrderUpdated(Uuid),
    OrderDeleted(Uuid),
    OrderLineAdded {
        order_id: Uuid,
        order_line_id: Uuid,
    },
}

/// Cloneable handle used by commands to publish events.
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }
}

/// Background consumer. Events are currently observability-only; integrations
/// subscribe here if they ever need to react to mutations.
pub async fn process_events(mut receiver: mpsc::Receiver<Event>) {
    while let Some(event) = receiver.recv().await {
        info!(event = ?event, "domain event");
    }
    info!("event channel closed, processor exiting");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sender_delivers_to_receiver() {
        let (tx, mut rx) = mpsc::channel(8);
        let sender = EventSender::new(tx);
        let id = Uuid::new_v4();
        sender.send(Event::BlueprintCreated(id)).await.unwrap();

        match rx.recv().await {
            Some(Event::BlueprintCreated(got)) => assert_eq!(got, id),
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
