//! Generation and history services for Code Copilot.
//!
//! This crate holds the request pipeline that sits between the HTTP surface
//! and the store:
//!
//! ```text
//! POST /generate
//!          ↓
//! ┌─────────────────────────────────────────────┐
//! │              GenerationService              │
//! │                                             │
//! │  1. Validate prompt, language, user ID      │
//! │  2. Resolve language (exact name)           │
//! │  3. Check the user exists, if given         │
//! │  4. Call the CodeProvider                   │
//! │  5. Insert the generation                   │
//! │  6. Read it back joined with language/user  │
//! └─────────────────────────────────────────────┘
//!
//! GET /history → HistoryService (validate paging, count, slice, paginate)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use copilot::{GenerationRequest, GenerationService};
//! use database::Database;
//! use mock_provider::StaticProvider;
//!
//! let db = Database::connect("sqlite::memory:").await?;
//! db.migrate().await?;
//!
//! let service = GenerationService::new(db, Arc::new(StaticProvider::new("print('hi')")));
//! let view = service
//!     .create(&GenerationRequest::new("Print a friendly greeting", "Python"))
//!     .await?;
//! println!("#{}: {}", view.id, view.code);
//! ```

mod error;
mod generation;
mod history;
pub mod validation;

pub use error::{Result, ServiceError};
pub use generation::GenerationService;
pub use history::{HistoryPage, HistoryService, Pagination};
pub use validation::{GenerationRequest, HistoryCriteria, HistoryQuery};

// Re-export commonly used types from dependencies
pub use database::{GenerationView, HistoryFilter, UserSummary};
pub use provider_core::{CodeProvider, ProviderError};
