// ============================================================================
// LOOKUP - Resolver un id de catálogo a texto para la UI
// ============================================================================

use crate::models::CatalogEntry;
use crate::state::{CatalogState, LoadStatus};

pub const LOADING_TEXT: &str = "loading ...";
pub const UNKNOWN_TEXT: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupLabel {
    Loading,
    Name(String),
    Unknown,
}

impl LookupLabel {
    pub fn text(&self) -> &str {
        match self {
            LookupLabel::Loading => LOADING_TEXT,
            LookupLabel::Name(name) => name,
            LookupLabel::Unknown => UNKNOWN_TEXT,
        }
    }
}

/// Mientras la lista no esté cargada se muestra "loading ...". Si la carga
/// falló y no hay nada en vuelo, el placeholder.
pub fn lookup_label<T: CatalogEntry>(catalog: &CatalogState<T>, id: &str) -> LookupLabel {
    match catalog.status() {
        LoadStatus::Loaded => catalog
            .by_id(id)
            .map(|entry| LookupLabel::Name(entry.name().to_string()))
            .unwrap_or(LookupLabel::Unknown),
        LoadStatus::Idle if catalog.error.is_some() => LookupLabel::Unknown,
        LoadStatus::Loading | LoadStatus::Idle => LookupLabel::Loading,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::models::Profession;
    use crate::state::CatalogAction;
    use crate::testing::profession;

    #[test]
    fn label_follows_load_status() {
        let mut catalog = CatalogState::<Profession>::new();
        assert_eq!(lookup_label(&catalog, "p1"), LookupLabel::Loading);

        catalog.reduce(CatalogAction::Received {
            items: vec![profession("p1", "Doctor")],
            fetched_at: Utc::now(),
        });
        assert_eq!(lookup_label(&catalog, "p1").text(), "Doctor");
        assert_eq!(lookup_label(&catalog, "zz"), LookupLabel::Unknown);

        catalog.reduce(CatalogAction::Requested { at: Utc::now() });
        assert_eq!(lookup_label(&catalog, "p1").text(), LOADING_TEXT);
    }

    #[test]
    fn failed_load_shows_placeholder_until_retry() {
        let mut catalog = CatalogState::<Profession>::new();
        catalog.reduce(CatalogAction::Requested { at: Utc::now() });
        catalog.reduce(CatalogAction::RequestFailed("offline".to_string()));

        assert!(!catalog.is_loading());
        assert_eq!(lookup_label(&catalog, "p1"), LookupLabel::Unknown);
        assert_eq!(lookup_label(&catalog, "p1").text(), UNKNOWN_TEXT);

        catalog.reduce(CatalogAction::Requested { at: Utc::now() });
        assert_eq!(lookup_label(&catalog, "p1"), LookupLabel::Loading);
    }
}
