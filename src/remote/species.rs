use super::*;
use crate::localize::LocalizationSource;
use crate::model::{EntryId, LocalizedInfo};

type LocResult<T> = std::result::Result<T, LocalizationError>;

impl RemoteClient {
    /// `check_status` is off for name lookups: any body that carries `names` is used.
    async fn fetch_species(&self, id: EntryId, check_status: bool) -> LocResult<SpeciesRecord> {
        let url = self.species_url(id);
        let resp = self
            .get(&url)
            .await
            .map_err(|e| LocalizationError::Request(e.to_string()))?;
        let status = resp.status();
        if check_status && !status.is_success() {
            return Err(LocalizationError::Status(status.as_u16()));
        }
        let value: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| LocalizationError::Decode(e.to_string()))?;
        if !status.is_success() && value.get("names").is_none() {
            return Err(LocalizationError::Status(status.as_u16()));
        }
        serde_json::from_value(value).map_err(|e| LocalizationError::Decode(e.to_string()))
    }

    /// Both localized fields from one species fetch. Never fails: any problem yields
    /// absent fields.
    pub async fn fetch_localized(&self, id: EntryId, locale: &str) -> LocalizedInfo {
        match self.fetch_species(id, true).await {
            Ok(species) => LocalizedInfo {
                localized_name: find_localized_name(&species, locale),
                localized_description: find_localized_description(&species, locale),
            },
            Err(err) => {
                tracing::debug!(id = id.get(), locale, error = %err, "localization unavailable");
                LocalizedInfo::default()
            }
        }
    }
}

impl LocalizationSource for RemoteClient {
    async fn localized_name(&self, id: EntryId, locale: &str) -> LocResult<Option<String>> {
        let species = self.fetch_species(id, false).await?;
        Ok(find_localized_name(&species, locale))
    }

    async fn localized_description(
        &self,
        id: EntryId,
        locale: &str,
    ) -> LocResult<Option<String>> {
        let species = self.fetch_species(id, true).await?;
        Ok(find_localized_description(&species, locale))
    }
}

pub fn find_localized_name(species: &SpeciesRecord, locale: &str) -> Option<String> {
    species
        .names
        .iter()
        .find(|n| n.language.name == locale)
        .map(|n| n.name.clone())
}

/// First flavor text for `locale`, with the API's hard line and page breaks flattened.
pub fn find_localized_description(species: &SpeciesRecord, locale: &str) -> Option<String> {
    species
        .flavor_text_entries
        .iter()
        .find(|e| e.language.name == locale)
        .map(|e| clean_flavor_text(&e.flavor_text))
}

pub fn clean_flavor_text(raw: &str) -> String {
    raw.replace(['\n', '\u{000C}'], " ")
}
