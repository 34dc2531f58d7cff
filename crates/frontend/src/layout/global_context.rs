use leptos::prelude::*;
use web_sys::window;

/// Screen shown in the center zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Admins,
    Roles,
    Categories,
    ContentLibrary,
    LegalDocs,
    Cohorts,
    BlockedKeywords,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Admins,
        Section::Roles,
        Section::Categories,
        Section::ContentLibrary,
        Section::LegalDocs,
        Section::Cohorts,
        Section::BlockedKeywords,
    ];

    /// Key used in the location hash
    pub fn key(&self) -> &'static str {
        match self {
            Section::Admins => "admins",
            Section::Roles => "roles",
            Section::Categories => "categories",
            Section::ContentLibrary => "content-library",
            Section::LegalDocs => "legal-docs",
            Section::Cohorts => "cohorts",
            Section::BlockedKeywords => "blocked-keywords",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Admins => "Admins",
            Section::Roles => "Roles",
            Section::Categories => "Categories",
            Section::ContentLibrary => "Content library",
            Section::LegalDocs => "Legal & FAQ",
            Section::Cohorts => "User cohorts",
            Section::BlockedKeywords => "Blocked keywords",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Admins => "users",
            Section::Roles => "shield",
            Section::Categories => "folder",
            Section::ContentLibrary => "image",
            Section::LegalDocs => "file-text",
            Section::Cohorts => "target",
            Section::BlockedKeywords => "ban",
        }
    }

    pub fn from_key(key: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// Shell-wide UI state: the active section and sidebar visibility.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Section>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Section::Admins),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the section from `#key` and keeps the hash in sync afterwards.
    pub fn init_location_sync(&self) {
        let restored = window()
            .and_then(|w| w.location().hash().ok())
            .and_then(|hash| Section::from_key(hash.trim_start_matches('#')));
        if let Some(section) = restored {
            self.active.set(section);
        }

        let active = self.active;
        Effect::new(move |_| {
            let key = active.get().key();
            let Some(location) = window().map(|w| w.location()) else {
                return;
            };
            if location.hash().ok().as_deref() != Some(&format!("#{key}")) {
                if let Err(e) = location.set_hash(key) {
                    log::warn!("could not update location hash: {e:?}");
                }
            }
        });
    }

    pub fn activate(&self, section: Section) {
        log::debug!("activate section {}", section.key());
        self.active.set(section);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

/// The shell context, or a detached one outside the shell (tests, previews).
pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().unwrap_or_else(AppGlobalContext::new)
}
