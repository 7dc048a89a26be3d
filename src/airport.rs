use std::sync::Arc;

/// IATA-style airport code, e.g. `JFK`.
pub type AirportId = Arc<str>;
