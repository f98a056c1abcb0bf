// BizDir - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "BizDir";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "BizDir";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Data file
// =============================================================================

/// Default location of the static business data file.
pub const DEFAULT_DATA_PATH: &str = "./data/businesses.json";

/// Default maximum size of the data file in bytes.
pub const DEFAULT_MAX_DATA_FILE_SIZE: u64 = 16 * 1024 * 1024; // 16 MB

/// Smallest configurable data file limit.
pub const MIN_MAX_DATA_FILE_SIZE: u64 = 1024; // 1 KB

/// Hard upper bound on the data file limit (prevents configuration mistakes).
pub const ABSOLUTE_MAX_DATA_FILE_SIZE: u64 = 256 * 1024 * 1024; // 256 MB

// =============================================================================
// Record defaults
// =============================================================================

/// Name used when a record carries no usable name.
pub const UNKNOWN_BUSINESS: &str = "Unknown Business";

/// Industry used when neither `industry` nor a first category is present.
pub const UNKNOWN_INDUSTRY: &str = "Unknown Industry";

/// Location used when a record carries no usable location.
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// Description used when a record carries no usable description.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Website marker meaning "no link".
pub const NO_WEBSITE: &str = "#";

/// Prefix for ids synthesised from the record's position in the input.
pub const GENERATED_ID_PREFIX: &str = "gen-";

/// Initials shown when a name yields no letters.
pub const UNKNOWN_INITIALS: &str = "??";

/// Search URL offered on cards without a website; the query is appended.
pub const WEBSITE_SEARCH_URL: &str = "https://www.google.com/search?q=";

/// Locality appended to the business name in the website search query.
pub const WEBSITE_SEARCH_LOCALITY: &str = "ottawa";

// =============================================================================
// Award winners
// =============================================================================

/// Built-in list of award recipients, as published.
///
/// Replaced wholesale by `[awards] winners` in config.toml.
pub const DEFAULT_AWARD_WINNERS: &[&str] = &[
    "Calian Group",
    "Roger Neilson Children's Hospice",
    "Pluvo (formerly Rain Technologies)",
    "BioTalentCanada",
    "Brookstreet Hotel",
    "Giatec Scientific",
    "GIATESCIENTIFICINC.",
    "Branch Audiovisual",
    "CanadaWheels",
    "CFT Group",
    "Warner Brothers Discovery",
    "Fidus",
    "Telesat",
    "Bloks",
    "Enurgen",
    "Sparrow Bio",
    "Carlingwood Shopping Centre",
    "Live Nation Canada",
    "Air Canada",
];

/// Maximum number of award winner names accepted from config.
pub const MAX_AWARD_WINNERS: usize = 10_000;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Export
// =============================================================================

/// Maximum number of entities that can be exported in a single operation.
pub const MAX_EXPORT_ENTRIES: usize = 1_000_000;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Hint appended to load failures shown to the user.
pub const LOAD_FAILURE_HINT: &str =
    "Please ensure the data file exists, is valid JSON and is accessible.";
