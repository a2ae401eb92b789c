// =============================================================================
// Application Identity
// =============================================================================

/// Application name in title case (for display and platform directories)
pub const APP_NAME: &str = "PlayerRegistry";

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "player_registry_server";

/// Unix-style dotfile folder name
pub const APP_DOT_FOLDER: &str = ".player-registry";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "player-registry.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "PLAYER_REGISTRY_CONFIG";

// =============================================================================
// Environment Variables - Server
// =============================================================================

/// Environment variable for server host
pub const ENV_HOST: &str = "PLAYER_REGISTRY_HOST";

/// Environment variable for server port
pub const ENV_PORT: &str = "PLAYER_REGISTRY_PORT";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "PLAYER_REGISTRY_LOG";

// =============================================================================
// Server Defaults
// =============================================================================

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 8080;

/// Default request body limit (1MB)
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

// =============================================================================
// Environment Variables - Storage
// =============================================================================

/// Environment variable to override data directory
pub const ENV_DATA_DIR: &str = "PLAYER_REGISTRY_DATA_DIR";

/// Environment variable for the player store backend (sqlite or memory)
pub const ENV_DATABASE_BACKEND: &str = "PLAYER_REGISTRY_DATABASE_BACKEND";

// =============================================================================
// SQLite
// =============================================================================

/// SQLite database filename
pub const SQLITE_DB_FILENAME: &str = "players.db";

/// Maximum pooled connections
pub const SQLITE_MAX_CONNECTIONS: u32 = 8;

/// Busy timeout for locked database
pub const SQLITE_BUSY_TIMEOUT_SECS: u64 = 5;

/// Page cache size (negative = KiB)
pub const SQLITE_CACHE_SIZE: &str = "-16000";

/// Pages between automatic WAL checkpoints
pub const SQLITE_WAL_AUTOCHECKPOINT: &str = "1000";

/// Interval for the background WAL checkpoint task
pub const SQLITE_CHECKPOINT_INTERVAL_SECS: u64 = 300;

// =============================================================================
// Player Listing
// =============================================================================

/// Default page number for player listing (zero-based)
pub const DEFAULT_PAGE_NUMBER: u32 = 0;

/// Default page size for player listing
pub const DEFAULT_PAGE_SIZE: u32 = 3;

/// Maximum page size for player listing
pub const MAX_PAGE_SIZE: u32 = 500;

// =============================================================================
// Shutdown
// =============================================================================

/// Maximum time to wait for background tasks during shutdown
pub const SHUTDOWN_TIMEOUT_SECS: u64 = 10;
