use crate::localize::{Enricher, LocalizationSource};
use crate::model::{CatalogEntry, LocalizedInfo, OverlayDescriptor};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Hidden,
    Visible {
        entry: CatalogEntry,
        view: OverlayDescriptor,
    },
}

/// Where a click landed while the overlay is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayClick {
    Background,
    Content,
}

/// Detail view for one entry. Independent of pagination; every open re-fetches.
#[derive(Debug, Default)]
pub struct DetailOverlay {
    state: OverlayState,
}

impl DetailOverlay {
    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, OverlayState::Visible { .. })
    }

    pub fn view(&self) -> Option<&OverlayDescriptor> {
        match &self.state {
            OverlayState::Visible { view, .. } => Some(view),
            OverlayState::Hidden => None,
        }
    }

    /// Looks up localized text for `entry` and shows it, replacing whatever was visible.
    pub async fn open<S: LocalizationSource>(
        &mut self,
        entry: &CatalogEntry,
        enricher: &Enricher<S>,
    ) -> OverlayDescriptor {
        let info = enricher.localize(entry).await;
        self.show(entry, &info)
    }

    /// Shows `entry` with text that has already been looked up.
    pub fn show(&mut self, entry: &CatalogEntry, info: &LocalizedInfo) -> OverlayDescriptor {
        let view = OverlayDescriptor::new(
            entry,
            info.localized_name.as_deref(),
            info.localized_description.as_deref(),
        );
        self.state = OverlayState::Visible {
            entry: entry.clone(),
            view: view.clone(),
        };
        view
    }

    pub fn close(&mut self) {
        self.state = OverlayState::Hidden;
    }

    /// Clicking the background closes; clicking the content does nothing.
    pub fn click(&mut self, target: OverlayClick) {
        if target == OverlayClick::Background {
            self.close();
        }
    }
}

#[cfg(test)]
#[path = "tests/overlay_tests.rs"]
mod tests;
