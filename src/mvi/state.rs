//! Base trait for screen state in MVI architecture.

/// Marker trait for screen state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Constructible with every field absent (Default)
/// - Comparable (PartialEq for detecting changes)
/// - Shareable across the fetch tasks that update them (Send + Sync)
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
