//! Table-wide constants.
//!
//! Centralizes defaults and limits so the controller, options and renderer
//! agree on them.

// ============================================================================
// Pagination
// ============================================================================

/// First page number (pages are 1-indexed)
pub const FIRST_PAGE: usize = 1;

/// Rows per page when `paginate` is given without a usable size
pub const DEFAULT_PAGE_SIZE: usize = 25;

// ============================================================================
// Themes
// ============================================================================

/// Theme used when no style is configured or the id is unknown
pub const DEFAULT_THEME_ID: u8 = 1;

// ============================================================================
// Data Loading
// ============================================================================

/// Maximum number of records accepted by a single bulk load
pub const MAX_LOAD_ROWS: usize = 100_000;

/// Field delimiter for CSV records
pub const CSV_DELIMITER: char = ',';

/// Field delimiter for `.tsv` record files
pub const TSV_DELIMITER: char = '\t';

// ============================================================================
// Text Rendering
// ============================================================================

/// Minimum rendered column width in characters
pub const MIN_COLUMN_WIDTH: usize = 3;

/// Maximum rendered column width in characters (longer cells are truncated)
pub const MAX_COLUMN_WIDTH: usize = 32;

/// Column separator used by the text renderer
pub const COLUMN_SEPARATOR: &str = " | ";
