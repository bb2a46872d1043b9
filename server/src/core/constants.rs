// =============================================================================
// Application Identity
// =============================================================================

/// Application name in title case (for display and platform directories)
pub const APP_NAME: &str = "StringAnalyzer";

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "string-analyzer";

/// Unix-style dotfile folder name
pub const APP_DOT_FOLDER: &str = ".string-analyzer";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "string-analyzer.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "STRING_ANALYZER_CONFIG";

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable for debug mode
pub const ENV_DEBUG: &str = "STRING_ANALYZER_DEBUG";

/// Environment variable for server host
pub const ENV_HOST: &str = "STRING_ANALYZER_HOST";

/// Environment variable for server port
pub const ENV_PORT: &str = "STRING_ANALYZER_PORT";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "STRING_ANALYZER_LOG";

/// Environment variable for the storage backend (json or memory)
pub const ENV_STORAGE: &str = "STRING_ANALYZER_STORAGE";

/// Environment variable to override data directory
pub const ENV_DATA_DIR: &str = "STRING_ANALYZER_DATA_DIR";

// =============================================================================
// Server Defaults
// =============================================================================

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 8080;

/// Maximum accepted request body size
pub const MAX_BODY_SIZE: usize = 1024 * 1024;

// =============================================================================
// Strings
// =============================================================================

/// File holding the persisted string collection
pub const STRINGS_FILE_NAME: &str = "strings.json";

