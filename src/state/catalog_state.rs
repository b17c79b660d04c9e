// ============================================================================
// CATALOG STATE - Datos de referencia (profesiones, cualidades)
// ============================================================================

use chrono::{DateTime, Duration, Utc};
use crate::models::CatalogEntry;
use crate::state::LoadStatus;

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogAction<T> {
    Requested { at: DateTime<Utc> },
    Received { items: Vec<T>, fetched_at: DateTime<Utc> },
    RequestFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState<T> {
    pub entities: Option<Vec<T>>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub last_fetch: Option<DateTime<Utc>>,
    pub last_attempt: Option<DateTime<Utc>>,
}

impl<T: CatalogEntry> CatalogState<T> {
    pub fn new() -> Self {
        Self {
            entities: None,
            is_loading: false,
            error: None,
            last_fetch: None,
            last_attempt: None,
        }
    }

    pub fn reduce(&mut self, action: CatalogAction<T>) {
        match action {
            CatalogAction::Requested { at } => {
                self.is_loading = true;
                self.last_attempt = Some(at);
            }
            CatalogAction::Received { items, fetched_at } => {
                self.entities = Some(items);
                self.last_fetch = Some(fetched_at);
                self.error = None;
                self.is_loading = false;
            }
            CatalogAction::RequestFailed(error) => {
                self.error = Some(error);
                self.is_loading = false;
            }
        }
    }

    pub fn list(&self) -> Option<&[T]> {
        self.entities.as_deref()
    }

    pub fn by_id(&self, id: &str) -> Option<&T> {
        self.entities.as_ref()?.iter().find(|e| e.id() == id)
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn status(&self) -> LoadStatus {
        LoadStatus::from_flags(self.is_loading, self.entities.is_some())
    }

    /// Hay que pedir la lista si nunca se pidió o el último intento es más
    /// viejo que `ttl`. Con una carga en curso no se pide otra, y tras un
    /// fallo se espera al ttl antes de reintentar (cada render vuelve a
    /// preguntar).
    pub fn needs_fetch(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        if self.is_loading {
            return false;
        }
        match self.last_attempt {
            Some(attempted_at) => now - attempted_at >= ttl,
            None => true,
        }
    }
}

impl<T: CatalogEntry> Default for CatalogState<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Profession;
    use crate::testing::profession;

    #[test]
    fn received_items_are_searchable() {
        let mut state = CatalogState::<Profession>::new();
        assert_eq!(state.status(), LoadStatus::Idle);

        state.reduce(CatalogAction::Requested { at: Utc::now() });
        assert_eq!(state.status(), LoadStatus::Loading);

        state.reduce(CatalogAction::Received {
            items: vec![profession("p1", "Doctor"), profession("p2", "Cook")],
            fetched_at: Utc::now(),
        });
        assert_eq!(state.status(), LoadStatus::Loaded);
        assert_eq!(state.by_id("p2").map(|p| p.name.as_str()), Some("Cook"));
        assert!(state.by_id("p3").is_none());
    }

    #[test]
    fn failure_keeps_previous_items() {
        let mut state = CatalogState::<Profession>::new();
        state.reduce(CatalogAction::Received {
            items: vec![profession("p1", "Doctor")],
            fetched_at: Utc::now(),
        });
        state.reduce(CatalogAction::Requested { at: Utc::now() });
        state.reduce(CatalogAction::RequestFailed("offline".to_string()));

        assert_eq!(state.error.as_deref(), Some("offline"));
        assert_eq!(state.list().map(|l| l.len()), Some(1));
        assert!(!state.is_loading());
    }

    #[test]
    fn needs_fetch_respects_ttl_and_in_flight() {
        let ttl = Duration::minutes(10);
        let t0 = Utc::now();
        let mut state = CatalogState::<Profession>::new();
        assert!(state.needs_fetch(t0, ttl));

        state.reduce(CatalogAction::Requested { at: t0 });
        assert!(!state.needs_fetch(t0, ttl));

        state.reduce(CatalogAction::Received { items: vec![], fetched_at: t0 });
        assert!(!state.needs_fetch(t0 + Duration::minutes(9), ttl));
        assert!(state.needs_fetch(t0 + Duration::minutes(10), ttl));
    }

    #[test]
    fn failed_fetch_waits_for_ttl_before_retry() {
        let ttl = Duration::minutes(10);
        let t0 = Utc::now();
        let mut state = CatalogState::<Profession>::new();
        state.reduce(CatalogAction::Requested { at: t0 });
        state.reduce(CatalogAction::RequestFailed("offline".to_string()));

        assert!(!state.needs_fetch(t0 + Duration::minutes(1), ttl));
        assert!(state.needs_fetch(t0 + Duration::minutes(10), ttl));
    }
}
