/// Data layer: core types, loading, filtering, and statistics.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → SalesDataset (cached, loaded once)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ SalesDataset  │  Vec<Order>, size/topping indices, price bounds
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply criteria → FilteredView (indices + stats)
///   └──────────┘
/// ```
///
/// Everything here is UI-agnostic: the egui shell only supplies
/// `FilterCriteria` and renders the resulting `FilteredView`.

pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
