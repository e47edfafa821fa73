use crate::{
    controllers::{ScreenState, Submission},
    models::{Cliente, CLIENTES_COLLECTION},
    ports::DocumentStore,
    request::FormRequest,
    views::ScreenView,
};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio::{sync::Mutex, task::JoinHandle};

/// Handle of a write the controller started without waiting for it.
pub type PendingWrite = JoinHandle<()>;

/// Screen controller for the cliente register.
///
/// Writes are spawned and never awaited before the form is reset and the list
/// reloaded, so a reload may observe the store before or after the write lands.
/// The returned [`PendingWrite`] lets a caller wait for it explicitly.
#[derive(Clone)]
pub struct ClientesController<D>
where
    D: DocumentStore,
{
    db: D,
    state: Arc<Mutex<ScreenState>>,
    mounted: Arc<AtomicBool>,
}

impl<D> ClientesController<D>
where
    D: DocumentStore + Send + Sync + Clone + 'static,
{
    pub fn new(db: D) -> Self {
        Self {
            db,
            state: Arc::new(Mutex::new(ScreenState::new())),
            mounted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Loads the list the first time the screen is shown. Returns whether it loaded.
    pub async fn mount(&self) -> bool {
        if self.mounted.swap(true, Ordering::SeqCst) {
            return false;
        }

        self.load().await;
        true
    }

    pub async fn load(&self) {
        match self.db.list(CLIENTES_COLLECTION).await {
            Ok(documents) => {
                let mut state = self.state.lock().await;
                state.replace_clientes(&documents);
            }
            Err(e) => {
                log::error!("error getting clientes: {}", e);
            }
        }
    }

    pub async fn update_form(&self, form: FormRequest) {
        self.state.lock().await.update_form(form);
    }

    /// Writes the form to the store, then resets it and reloads.
    ///
    /// Returns `None` without touching anything when a field is empty.
    pub async fn submit(&self) -> Option<PendingWrite> {
        let pending = {
            let mut state = self.state.lock().await;
            let submission = match state.submission() {
                Ok(submission) => submission,
                Err(e) => {
                    log::debug!("submit ignored: {}", e);
                    return None;
                }
            };

            let pending = self.spawn_write(submission);
            state.reset();
            pending
        };

        self.load().await;
        Some(pending)
    }

    pub async fn begin_edit(&self, cliente: &Cliente) {
        self.state.lock().await.begin_edit(cliente);

        self.load().await;
    }

    /// Deletes `cliente`, then resets the form and reloads.
    ///
    /// The reset also discards an edit in progress on a different record.
    pub async fn delete(&self, cliente: &Cliente) -> PendingWrite {
        let db = self.db.clone();
        let id = cliente.id.clone();
        let pending = tokio::spawn(async move {
            match db.delete(CLIENTES_COLLECTION, &id).await {
                Ok(()) => log::info!("cliente {} deleted", id),
                Err(e) => log::error!("error deleting cliente {}: {}", id, e),
            }
        });

        self.state.lock().await.reset();

        self.load().await;
        pending
    }

    pub async fn find(&self, id: &str) -> Option<Cliente> {
        self.state.lock().await.find(id).cloned()
    }

    pub async fn state(&self) -> ScreenState {
        self.state.lock().await.clone()
    }

    pub async fn view(&self) -> ScreenView {
        ScreenView::render(&*self.state.lock().await)
    }

    fn spawn_write(&self, submission: Submission) -> PendingWrite {
        let db = self.db.clone();
        tokio::spawn(async move {
            match submission {
                Submission::Add(fields) => match db.add(CLIENTES_COLLECTION, fields).await {
                    Ok(id) => log::info!("cliente added with id {}", id),
                    Err(e) => log::error!("error adding cliente: {}", e),
                },
                Submission::Set { id, fields } => {
                    match db.set(CLIENTES_COLLECTION, &id, fields).await {
                        Ok(()) => log::info!("cliente {} updated", id),
                        Err(e) => log::error!("error updating cliente {}: {}", id, e),
                    }
                }
            }
        })
    }
}
