// ============================================================================
// CATALOG VIEWMODEL - Carga de profesiones y cualidades
// ============================================================================

use std::future::Future;
use std::rc::Rc;
use chrono::{Duration, Utc};
use crate::config::CONFIG;
use crate::context::AppContext;
use crate::services::{ApiError, Backend};
use crate::state::{Action, CatalogAction, Store};

#[derive(Clone)]
pub struct CatalogViewModel {
    store: Store,
    backend: Rc<dyn Backend>,
    ttl: Duration,
}

impl CatalogViewModel {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            store: ctx.store.clone(),
            backend: ctx.backend.clone(),
            ttl: Duration::minutes(CONFIG.catalog_ttl_minutes),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    async fn load<T, F>(&self, label: &str, wrap: fn(CatalogAction<T>) -> Action, fetch: F) -> Result<(), ApiError>
    where
        F: Future<Output = Result<Vec<T>, ApiError>>,
    {
        log::info!("📋 Cargando {}...", label);
        self.store.dispatch(wrap(CatalogAction::Requested { at: Utc::now() }));
        match fetch.await {
            Ok(items) => {
                log::info!("✅ {} {} cargadas", items.len(), label);
                self.store.dispatch(wrap(CatalogAction::Received {
                    items,
                    fetched_at: Utc::now(),
                }));
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Error cargando {}: {}", label, e);
                self.store.dispatch(wrap(CatalogAction::RequestFailed(e.to_string())));
                Err(e)
            }
        }
    }

    /// Siempre pide la lista (lo usa el app loader)
    pub async fn load_professions_list(&self) -> Result<(), ApiError> {
        self.load("profesiones", Action::Professions, self.backend.fetch_professions()).await
    }

    pub async fn load_qualities_list(&self) -> Result<(), ApiError> {
        self.load("cualidades", Action::Qualities, self.backend.fetch_qualities()).await
    }

    /// Pide la lista solo si falta o está vieja
    pub async fn ensure_professions_loaded(&self) -> Result<(), ApiError> {
        let now = Utc::now();
        if self.store.select(|s| s.professions.needs_fetch(now, self.ttl)) {
            self.load_professions_list().await
        } else {
            Ok(())
        }
    }

    pub async fn ensure_qualities_loaded(&self) -> Result<(), ApiError> {
        let now = Utc::now();
        if self.store.select(|s| s.qualities.needs_fetch(now, self.ttl)) {
            self.load_qualities_list().await
        } else {
            Ok(())
        }
    }
}
