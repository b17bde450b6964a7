use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::{
    Error, Result,
    form::ProfileForm,
    repository::{
        config::{Cfg, CoreConfig},
        storage::Storage,
        store::{Store, SubscriptionId},
    },
    search::{self, FilterState},
};

pub mod config;
pub mod entities;
pub mod seed;
pub mod storage;
pub mod store;

pub use entities::{
    Certification, ContactInfo, Education, Experience, Gender, Language, Profile, ProfileId,
    Project, SocialChannel,
};

/// Central access point for a browsing session's data.
///
/// The [`Repository`] owns the roster and the current [`FilterState`], each held in an
/// observable [`Store`], and mirrors every change to [`Storage`]. The in-memory values are
/// authoritative: a failed write is logged and the session carries on.
#[derive(Clone, Debug)]
pub struct Repository {
    storage: Storage,
    cfg: Cfg,
    roster: Store<Vec<Profile>>,
    filters: Store<FilterState>,
}

impl Repository {
    /// Open the repository described by the configuration file.
    pub fn new() -> Result<Self> {
        let cfg = CoreConfig::load()?;
        let storage = cfg.open_storage();
        Ok(Self::open(storage, cfg))
    }

    /// Open a repository over `storage`, loading the persisted roster and filter state.
    pub fn open(storage: Storage, cfg: CoreConfig) -> Self {
        let roster: Vec<Profile> = storage.load(&cfg.roster_key, Self::default_roster(&cfg));
        let mut filters: FilterState = storage.load(&cfg.filters_key, FilterState::default());
        filters.search_term = storage.load(&cfg.search_key, String::new());

        debug!("Loaded {} profiles", roster.len());
        for profile in &roster {
            profile.id.reserve();
        }

        Self {
            storage,
            cfg: Arc::new(RwLock::new(cfg)),
            roster: Store::new(roster),
            filters: Store::new(filters),
        }
    }

    pub fn config(&self) -> CoreConfig {
        self.cfg.read().clone()
    }

    // Roster

    /// Every profile, most recently added first.
    pub fn profiles(&self) -> Vec<Profile> {
        self.roster.get()
    }

    pub fn profile(&self, id: &ProfileId) -> Result<Profile> {
        self.roster
            .with(|roster| roster.iter().find(|p| &p.id == id).cloned())
            .ok_or_else(|| Error::ProfileNotFound(id.clone()))
    }

    /// Assemble a profile from `form` and put it at the front of the roster.
    pub fn add_profile(&self, form: &ProfileForm) -> Result<Profile> {
        let profile = form.build()?;
        self.insert(profile.clone())?;
        Ok(profile)
    }

    /// Put an already assembled profile at the front of the roster.
    pub fn insert(&self, profile: Profile) -> Result<()> {
        let name = profile.name.clone();
        profile.id.reserve();

        self.roster.try_update(|roster| {
            if roster.iter().any(|p| p.id == profile.id) {
                return Err(Error::DuplicateId(profile.id));
            }

            let mut next = Vec::with_capacity(roster.len().saturating_add(1));
            next.push(profile);
            next.extend(roster.iter().cloned());
            Ok(next)
        })?;

        info!("Added profile: {name}");
        self.persist_roster();

        Ok(())
    }

    /// Throw away every profile and start over from the default roster.
    pub fn reset_roster(&self) {
        let cfg = self.cfg.read().clone();
        self.storage.remove(&cfg.roster_key);
        self.roster.set(Self::default_roster(&cfg));

        info!("Roster reset");
    }

    pub fn subscribe_roster(
        &self,
        subscriber: impl Fn(&Vec<Profile>) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.roster.subscribe(subscriber)
    }

    pub fn unsubscribe_roster(&self, id: SubscriptionId) -> bool {
        self.roster.unsubscribe(id)
    }

    // Filtering

    pub fn filters(&self) -> FilterState {
        self.filters.get()
    }

    pub fn set_filters(&self, filters: FilterState) {
        self.filters.set(filters);
        self.persist_filters();
    }

    pub fn set_search_term(&self, term: &str) {
        self.filters.update(|filters| FilterState {
            search_term: term.to_string(),
            ..filters.clone()
        });
        self.persist_filters();
    }

    /// Clear gender, area and year, keeping the search term.
    pub fn clear_filters(&self) {
        self.filters.update(|filters| {
            let mut next = filters.clone();
            next.clear_filters();
            next
        });
        self.persist_filters();
    }

    /// Clear every filter and the search term.
    pub fn reset_filters(&self) {
        self.set_filters(FilterState::default());
    }

    pub fn subscribe_filters(
        &self,
        subscriber: impl Fn(&FilterState) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.filters.subscribe(subscriber)
    }

    pub fn unsubscribe_filters(&self, id: SubscriptionId) -> bool {
        self.filters.unsubscribe(id)
    }

    /// The roster as seen through the current filter state.
    pub fn visible_profiles(&self) -> Vec<Profile> {
        let filters = self.filters.get();
        self.roster
            .with(|roster| search::visible_profiles(roster, &filters))
    }

    pub fn unique_areas(&self) -> Vec<String> {
        self.roster.with(|roster| search::unique_areas(roster))
    }

    pub fn year_options(&self) -> Vec<String> {
        search::year_options_from(self.cfg.read().first_year)
    }

    fn persist_roster(&self) {
        let key = self.cfg.read().roster_key.clone();
        self.roster.with(|roster| self.storage.save(&key, roster));
    }

    fn persist_filters(&self) {
        let cfg = self.cfg.read();
        let filters = self.filters.get();
        self.storage.save(&cfg.filters_key, &filters);
        self.storage.save(&cfg.search_key, &filters.search_term);
    }

    fn default_roster(cfg: &CoreConfig) -> Vec<Profile> {
        if cfg.seed_sample_roster {
            seed::sample_profiles()
        } else {
            Vec::new()
        }
    }

    #[cfg(test)]
    /// Return a mock version of a [`Repository`] with in-memory storage and an empty roster.
    pub(crate) fn mock() -> Self {
        Self::open(Storage::in_memory(), CoreConfig::mock())
    }
}
