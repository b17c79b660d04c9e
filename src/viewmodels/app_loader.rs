// ============================================================================
// APP LOADER - Cargas iniciales según el estado de login
// ============================================================================
// Corre al montar y cada vez que cambia is_logged_in (solo entonces):
// usuarios si hay sesión, cualidades y profesiones siempre. Las tres cargas
// van en paralelo y pueden terminar en cualquier orden.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use crate::context::AppContext;
use crate::state::Store;
use crate::viewmodels::{CatalogViewModel, UsersViewModel};

/// Qué pinta el loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderView {
    Loading,
    Ready,
}

#[derive(Clone)]
pub struct AppLoader {
    store: Store,
    users: UsersViewModel,
    catalog: CatalogViewModel,
    last_logged_in: Rc<Cell<Option<bool>>>,
}

impl AppLoader {
    pub fn new(ctx: &AppContext) -> Self {
        Self::with_viewmodels(ctx, UsersViewModel::new(ctx), CatalogViewModel::new(ctx))
    }

    pub fn with_viewmodels(ctx: &AppContext, users: UsersViewModel, catalog: CatalogViewModel) -> Self {
        Self {
            store: ctx.store.clone(),
            users,
            catalog,
            last_logged_in: Rc::new(Cell::new(None)),
        }
    }

    /// Devuelve el nuevo valor de is_logged_in si cambió desde la última
    /// vez y lo marca como visto (síncrono, antes de cualquier await)
    pub fn take_change(&self) -> Option<bool> {
        let is_logged_in = self.store.select(|s| s.users.is_logged_in());
        if self.last_logged_in.get() == Some(is_logged_in) {
            return None;
        }
        self.last_logged_in.set(Some(is_logged_in));
        Some(is_logged_in)
    }

    /// Lanza las cargas iniciales; los errores ya quedan en el store
    pub async fn run(&self, is_logged_in: bool) {
        log::info!("🚀 [LOADER] Cargas iniciales (logged_in={})", is_logged_in);
        let users = async {
            if is_logged_in {
                let _ = self.users.load_users_list().await;
            }
        };
        let (_, qualities, professions) = futures::join!(
            users,
            self.catalog.load_qualities_list(),
            self.catalog.load_professions_list()
        );
        if qualities.is_err() || professions.is_err() {
            log::warn!("⚠️ [LOADER] Datos de referencia incompletos");
        }
    }

    /// `take_change` + `run`; true si hubo cargas
    pub async fn sync(&self) -> bool {
        match self.take_change() {
            Some(is_logged_in) => {
                self.run(is_logged_in).await;
                true
            }
            None => false,
        }
    }

    pub fn view(&self) -> LoaderView {
        if self.store.select(|s| s.users.loading_status()) {
            LoaderView::Loading
        } else {
            LoaderView::Ready
        }
    }
}
