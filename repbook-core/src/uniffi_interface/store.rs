use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use log::debug;

use crate::models::{FormField, SetField, Unit};
use crate::session::SessionStore;
use crate::store::MemoryStore;
use crate::uniffi_interface::errors::RepbookError;
use crate::uniffi_interface::objects::{ProgressPointRecord, SessionRecord, WorkoutFormRecord};

/// Foreign-facing handle on one [`SessionStore`].
#[derive(uniffi::Object)]
pub struct RepbookStore {
    inner: Mutex<SessionStore>,
}

impl RepbookStore {
    fn wrap(store: SessionStore) -> Arc<Self> {
        Arc::new(Self {
            inner: Mutex::new(store),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, SessionStore>, RepbookError> {
        self.inner
            .lock()
            .map_err(|_| RepbookError::from("session store lock poisoned"))
    }
}

#[uniffi::export]
impl RepbookStore {
    #[uniffi::constructor]
    pub fn open(path: String) -> Result<Arc<Self>, RepbookError> {
        debug!("Opening store at {}", path);
        let store = SessionStore::open_path(Path::new(&path))?;
        Ok(Self::wrap(store))
    }

    #[uniffi::constructor]
    pub fn in_memory() -> Arc<Self> {
        Self::wrap(SessionStore::open(Box::new(MemoryStore::new())))
    }

    pub fn form(&self) -> Result<WorkoutFormRecord, RepbookError> {
        Ok(WorkoutFormRecord::from(self.lock()?.form()))
    }

    pub fn update_field(
        &self,
        field: FormField,
        value: String,
    ) -> Result<WorkoutFormRecord, RepbookError> {
        let mut store = self.lock()?;
        Ok(WorkoutFormRecord::from(store.update_field(field, &value)))
    }

    pub fn update_set(
        &self,
        index: u32,
        field: SetField,
        value: String,
    ) -> Result<WorkoutFormRecord, RepbookError> {
        let mut store = self.lock()?;
        let form = store.update_set(index as usize, field, &value)?;
        Ok(WorkoutFormRecord::from(form))
    }

    pub fn commit_session(&self) -> Result<SessionRecord, RepbookError> {
        let session = self.lock()?.commit_session()?;
        Ok(SessionRecord::from(&session))
    }

    pub fn save_routine(&self) -> Result<(), RepbookError> {
        self.lock()?.save_routine()?;
        Ok(())
    }

    pub fn routines(&self) -> Result<Vec<WorkoutFormRecord>, RepbookError> {
        let store = self.lock()?;
        Ok(store.routines().iter().map(WorkoutFormRecord::from).collect())
    }

    pub fn load_routine(&self, index: u32) -> Result<WorkoutFormRecord, RepbookError> {
        let mut store = self.lock()?;
        let form = store.load_routine_at(index as usize)?;
        Ok(WorkoutFormRecord::from(form))
    }

    pub fn sessions(&self, date: Option<String>) -> Result<Vec<SessionRecord>, RepbookError> {
        let store = self.lock()?;
        Ok(store
            .sessions(date.as_deref())
            .into_iter()
            .map(SessionRecord::from)
            .collect())
    }

    pub fn progress(&self, date: Option<String>) -> Result<Vec<ProgressPointRecord>, RepbookError> {
        let store = self.lock()?;
        Ok(store
            .progress(date.as_deref())
            .into_iter()
            .map(ProgressPointRecord::from)
            .collect())
    }

    pub fn unit(&self) -> Result<Unit, RepbookError> {
        Ok(self.lock()?.unit())
    }

    pub fn set_unit(&self, unit: Unit) -> Result<(), RepbookError> {
        self.lock()?.set_unit(unit)?;
        Ok(())
    }
}
