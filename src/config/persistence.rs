//! File persistence and serialization configuration

/// Configuration for Application State Persistence
pub struct AppPersistenceConfig {
    /// Path for saving/loading application UI state
    pub state_path: &'static str,
}

/// Configuration for the JSON chart export
pub struct ExportPersistenceConfig {
    /// Current version of the exported chart document format
    pub version: u32,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub app: AppPersistenceConfig,
    pub export: ExportPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    app: AppPersistenceConfig {
        state_path: ".states.json",
    },
    export: ExportPersistenceConfig { version: 1 },
};
