//! Request and response DTOs for the relay API

pub mod metrics;
pub mod token;

pub use metrics::{CreateEntryRequest, CreateEntryResponse, DimensionDto, MetricDatumDto};
pub use token::IssueTokenResponse;
