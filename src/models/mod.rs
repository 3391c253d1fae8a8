// ============ Model implementations ============

pub(crate) mod modernbert;

// Public model structs and size enums (for type annotations)
pub use modernbert::ModernBertSize;
