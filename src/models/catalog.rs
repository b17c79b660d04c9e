use serde::{Deserialize, Serialize};

/// Entrada de datos de referencia (profesión, cualidad) buscable por id
pub trait CatalogEntry: Clone {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profession {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quality {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Clase de color bootstrap (primary, danger, ...)
    #[serde(default)]
    pub color: String,
}

impl CatalogEntry for Profession {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl CatalogEntry for Quality {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
