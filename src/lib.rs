//! Garden Planner Core
//!
//! Algorithmic core of the garden-planner application:
//! - `compatibility`: pairwise companion/antagonist classification of a
//!   plant selection, with aggregated reasons
//! - `calendar`: codec between month-index sets and compact range tokens
//!   (`"Apr"`, `"Mar-Jun"`, `"Nov-Feb"`)
//! - `data`: JSON-backed plant catalog and seed-calendar providers
//! - `report`: markdown rendering of a compatibility report
//!
//! The UI layer collects user selections, calls in here, and renders the
//! structured results. No I/O happens outside `data`; the two core
//! components are pure functions safe to call from any context.

pub mod calendar;
pub mod compatibility;
pub mod data;
pub mod report;

// Re-export commonly used types
pub use calendar::{decode_ranges, encode_ranges, MONTH_ABBREVS};
pub use compatibility::{classify, CompatibilityReport, Plant, RelationshipGroup};
pub use data::{CatalogError, PlantCatalog, SeedCalendar, SeedCalendarEntry, SeedCalendarMonths};
pub use report::render_markdown;
