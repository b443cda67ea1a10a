//! Application context combining store, catalog, session and page state.
//!
//! `MarqueeCore` is the single owner of all mutable state. Every mutation
//! persists synchronously before returning, so the next render (or a reopen)
//! observes the latest state.

use crate::core::catalog::Catalog;
use crate::core::session::{IdentityProvider, SimulatedIdentityProvider};
use crate::core::store::Store;
use crate::core::upload::{SelectedFile, UploadForm, UploadTask};
use crate::core::view::{PageState, PageStep, PageView};
use crate::error::Result;
use crate::types::{AppConfig, Config, MovieRecord, Session};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

pub mod catalog;
pub mod session;
pub mod store;
pub mod upload;
pub mod view;

pub struct MarqueeCore {
    base_path: PathBuf,
    app_config: AppConfig,
    store: Store,
    catalog: Catalog,
    session: Option<Session>,
    identity: Box<dyn IdentityProvider>,
    page: PageState,
}

impl MarqueeCore {
    /// Opens the store, restores any persisted session and catalog, and
    /// seeds the catalog on first run. The seed set is not written back
    /// until the first mutation.
    pub fn open(config: Config, now: DateTime<Utc>) -> Result<Self> {
        let app_config =
            AppConfig::load(&AppConfig::path(&config.base_path))?.with_defaults_for_invalid();
        let page = PageState::new(app_config.page_size);

        let store = Store::open(&config)?;
        let session = store.load_session()?;
        let catalog = match store.load_catalog()? {
            Some(records) => Catalog::from_records(records),
            None => Catalog::seeded(now),
        };

        Ok(Self {
            base_path: config.base_path,
            app_config,
            store,
            catalog,
            session,
            identity: Box::new(SimulatedIdentityProvider),
            page,
        })
    }

    /// Substitutes the identity source, e.g. a real provider or a test
    /// double.
    pub fn with_identity_provider(mut self, identity: Box<dyn IdentityProvider>) -> Self {
        self.identity = identity;
        self
    }

    /// Returns the base data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.base_path
    }

    pub fn app_config(&self) -> &AppConfig {
        &self.app_config
    }
}

/// Session operations.
impl MarqueeCore {
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// True when the signed-in user is the administrator account.
    pub fn is_administrator(&self) -> bool {
        self.session.as_ref().is_some_and(session::is_administrator)
    }

    /// Signs in through the identity provider and persists the session.
    pub fn sign_in(&mut self, raw_input: &str) -> Result<&Session> {
        let session = self.identity.sign_in(raw_input)?;
        self.store.save_session(&session)?;
        Ok(self.session.insert(session))
    }

    /// Clears the persisted session unconditionally. The interactive
    /// confirmation guard is the front-end's responsibility.
    pub fn sign_out(&mut self) -> Result<()> {
        self.store.clear_session()?;
        self.session = None;
        Ok(())
    }
}

/// Catalog operations.
impl MarqueeCore {
    pub fn movies(&self) -> &[MovieRecord] {
        self.catalog.movies()
    }

    /// Inserts a record and persists the whole catalog in the same turn.
    pub fn add_movie(&mut self, record: MovieRecord) -> Result<()> {
        self.catalog.insert(record)?;
        self.store.save_catalog(self.catalog.movies())?;
        Ok(())
    }
}

/// View operations.
impl MarqueeCore {
    /// Recomputes the visible page, clamping the page position against the
    /// current catalog.
    pub fn render(&mut self) -> PageView {
        view::compute_view(self.catalog.movies(), &mut self.page)
    }

    /// Steps one page and recomputes. Out-of-range steps are ignored.
    pub fn go_to_page(&mut self, step: PageStep) -> PageView {
        let catalog_len = self.catalog.len();
        self.page.step(step, catalog_len);
        self.render()
    }
}

/// Upload operations.
impl MarqueeCore {
    /// Authorizes and starts a simulated upload. The caller drives the
    /// returned task on its own tick schedule.
    pub fn begin_upload(&self, form: UploadForm, file: Option<SelectedFile>) -> Result<UploadTask> {
        Ok(UploadTask::begin(self.session.as_ref(), form, file)?)
    }

    /// Commits a finished upload: inserts the record, persists the catalog,
    /// returns to the first page and recomputes the view.
    pub fn complete_upload(&mut self, task: UploadTask, now: DateTime<Utc>) -> Result<PageView> {
        let record = task.into_record(now);
        self.add_movie(record)?;
        self.page.reset();
        Ok(self.render())
    }
}
