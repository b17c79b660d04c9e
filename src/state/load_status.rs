/// Estado de carga de un recurso, lo que decide qué pinta la UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded,
}

impl LoadStatus {
    /// `is_loading` manda sobre `loaded`: un refetch vuelve a Loading
    pub fn from_flags(is_loading: bool, loaded: bool) -> Self {
        match (is_loading, loaded) {
            (true, _) => LoadStatus::Loading,
            (false, true) => LoadStatus::Loaded,
            (false, false) => LoadStatus::Idle,
        }
    }
}
