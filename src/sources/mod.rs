use crate::model::DesktopEntryInfo;
use crate::store::ConfigDocument;
use log::info;

pub trait Source {
    fn scan(&self) -> Vec<DesktopEntryInfo>;
}

pub mod browse;
pub mod desktop;

/// Resolves the registered entries of a config document, in order.
pub struct RegisteredSource<'a> {
    pub document: &'a ConfigDocument,
}

impl<'a> RegisteredSource<'a> {
    pub fn new(document: &'a ConfigDocument) -> Self {
        Self { document }
    }
}

impl Source for RegisteredSource<'_> {
    fn scan(&self) -> Vec<DesktopEntryInfo> {
        let entries: Vec<DesktopEntryInfo> =
            self.document.items.iter().filter_map(desktop::resolve).collect();
        info!("RegisteredSource: resolved {} entries", entries.len());
        entries
    }
}
