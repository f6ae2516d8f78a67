//! Platform-neutral pieces of the business dashboard: input formatting,
//! date handling, API result normalization, session state and wire models.

pub mod api;
pub mod config;
pub mod date;
pub mod form;
pub mod models;
pub mod number;
pub mod pagination;
pub mod phone;
pub mod session;

pub use api::{ApiResult, FieldErrors};
pub use config::DashboardConfig;
pub use date::{CalendarDate, DateError, DateFormat, GridCell, MaskedDate, MonthCursor};
pub use form::FieldChange;
pub use models::{Company, LoginRequest, LoginResponse, NewWorker, Worker};
pub use number::{NumberEdit, NumberError};
pub use pagination::{Page, PageRequest};
pub use session::{MemoryTokenStore, Session, TokenStore};
