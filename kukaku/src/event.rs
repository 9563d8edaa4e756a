use std::sync::mpsc;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutEvent {
    ZonesChanged { layout_id: Uuid, zone_count: usize },
}

/// Subscribers interested in changes to one layout.
///
/// Subscribers whose receiving end has been dropped are pruned on the next
/// notification.
#[derive(Debug, Default)]
pub struct Observers {
    senders: Vec<mpsc::Sender<LayoutEvent>>,
}

impl Observers {
    pub fn subscribe(&mut self) -> mpsc::Receiver<LayoutEvent> {
        let (tx, rx) = mpsc::channel();
        self.senders.push(tx);
        rx
    }

    pub fn notify(&mut self, event: LayoutEvent) {
        self.senders.retain(|tx| tx.send(event.clone()).is_ok());
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.senders.len()
    }
}
