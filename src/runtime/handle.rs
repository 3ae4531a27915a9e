//! Store-owning task, its command loop, and the handle callers talk to.

use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, info};

use crate::{
    contact::{Contact, ContactFilter, IndexedContact},
    core::{
        identity::IdentityFactory,
        store::{PhonebookStore, PutOutcome},
    },
    types::ContactId,
};

use super::events::ContactEvent;

/// Failure to reach the store task.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// The task has stopped, or stopped before replying.
    #[error("phonebook runtime is not running")]
    ChannelClosed,
}

/// Store task settings.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Commands that may wait in the queue before senders back off. Must be non-zero.
    pub command_queue_bound: usize,
    /// Events retained for slow subscribers before they lag.
    pub event_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            command_queue_bound: 256,
            event_capacity: 1024,
        }
    }
}

/// Cloneable entry point to the store task. Every clone talks to the same
/// store, and all of them observe mutations in one total order.
#[derive(Clone)]
pub struct PhonebookHandle {
    cmd_tx: mpsc::Sender<Command>,
    events_tx: broadcast::Sender<ContactEvent>,
}

enum Command {
    FindAll {
        resp: oneshot::Sender<Vec<IndexedContact>>,
    },
    FindById {
        id: ContactId,
        resp: oneshot::Sender<Option<IndexedContact>>,
    },
    FindFiltered {
        filter: ContactFilter,
        resp: oneshot::Sender<Vec<IndexedContact>>,
    },
    Create {
        contact: Contact,
        resp: oneshot::Sender<IndexedContact>,
    },
    Put {
        contact: IndexedContact,
        resp: oneshot::Sender<IndexedContact>,
    },
    Delete {
        id: ContactId,
        resp: oneshot::Sender<()>,
    },
    Count {
        resp: oneshot::Sender<usize>,
    },
    Shutdown {
        resp: oneshot::Sender<()>,
    },
}

/// Moves `store` into a new tokio task and returns a handle to it.
///
/// Must be called from within a tokio runtime.
pub fn spawn_phonebook<F: IdentityFactory>(
    store: PhonebookStore<F>,
    config: RuntimeConfig,
) -> PhonebookHandle {
    let (cmd_tx, mut cmd_rx) = mpsc::channel::<Command>(config.command_queue_bound);
    let (events_tx, _) = broadcast::channel::<ContactEvent>(config.event_capacity);

    let events_tx_loop = events_tx.clone();

    tokio::spawn(async move {
        let mut store = store;
        info!(contacts = store.len(), "phonebook runtime started");

        while let Some(cmd) = cmd_rx.recv().await {
            if handle_command(cmd, &mut store, &events_tx_loop) {
                break;
            }
        }

        info!(contacts = store.len(), "phonebook runtime stopped");
    });

    PhonebookHandle { cmd_tx, events_tx }
}

impl PhonebookHandle {
    /// Receiver for every event emitted after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<ContactEvent> {
        self.events_tx.subscribe()
    }

    /// Every stored contact, in no particular order.
    pub async fn find_all(&self) -> Result<Vec<IndexedContact>, RuntimeError> {
        self.request(|resp| Command::FindAll { resp }).await
    }

    /// Contact stored under `id`, if any.
    pub async fn find_by_id(&self, id: ContactId) -> Result<Option<IndexedContact>, RuntimeError> {
        self.request(|resp| Command::FindById { id, resp }).await
    }

    /// Contacts matching `filter`; all of them when it is empty.
    pub async fn find_filtered(
        &self,
        filter: ContactFilter,
    ) -> Result<Vec<IndexedContact>, RuntimeError> {
        self.request(|resp| Command::FindFiltered { filter, resp })
            .await
    }

    /// Stores `contact` under a freshly issued id.
    pub async fn create(&self, contact: Contact) -> Result<IndexedContact, RuntimeError> {
        self.request(|resp| Command::Create { contact, resp }).await
    }

    /// Stores `contact` under its own id, replacing any existing entry.
    pub async fn put(&self, contact: IndexedContact) -> Result<IndexedContact, RuntimeError> {
        self.request(|resp| Command::Put { contact, resp }).await
    }

    /// Removes the contact under `id`. Absent ids are a no-op.
    pub async fn delete(&self, id: ContactId) -> Result<(), RuntimeError> {
        self.request(|resp| Command::Delete { id, resp }).await
    }

    /// Number of stored contacts.
    pub async fn count(&self) -> Result<usize, RuntimeError> {
        self.request(|resp| Command::Count { resp }).await
    }

    /// Stops the store task after every queued command ahead of this one.
    pub async fn shutdown(&self) -> Result<(), RuntimeError> {
        self.request(|resp| Command::Shutdown { resp }).await
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(make(tx))
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }
}

fn handle_command<F: IdentityFactory>(
    cmd: Command,
    store: &mut PhonebookStore<F>,
    events_tx: &broadcast::Sender<ContactEvent>,
) -> bool {
    match cmd {
        Command::FindAll { resp } => {
            let _ = resp.send(store.find_all_cloned());
        }
        Command::FindById { id, resp } => {
            let _ = resp.send(store.find_by_id_cloned(id));
        }
        Command::FindFiltered { filter, resp } => {
            let out = store.find_filtered_cloned(&filter);
            debug!(?filter, matched = out.len(), "filtered lookup");
            let _ = resp.send(out);
        }
        Command::Create { contact, resp } => {
            let indexed = store.create(contact);
            debug!(id = indexed.id, "contact created");
            let _ = events_tx.send(ContactEvent::Created { id: indexed.id });
            let _ = resp.send(indexed);
        }
        Command::Put { contact, resp } => {
            let (stored, outcome) = store.put_entry(contact);
            let id = stored.id;
            debug!(id, ?outcome, "contact put");
            let evt = match outcome {
                PutOutcome::Inserted => ContactEvent::Inserted { id },
                PutOutcome::Replaced => ContactEvent::Replaced { id },
            };
            let _ = events_tx.send(evt);
            let _ = resp.send(stored);
        }
        Command::Delete { id, resp } => {
            if store.remove(id).is_some() {
                debug!(id, "contact deleted");
                let _ = events_tx.send(ContactEvent::Deleted { id });
            }
            let _ = resp.send(());
        }
        Command::Count { resp } => {
            let _ = resp.send(store.len());
        }
        Command::Shutdown { resp } => {
            let _ = resp.send(());
            return true;
        }
    }

    false
}
