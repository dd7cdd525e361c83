//! Populate command handlers.

mod logging;
mod run;

pub use logging::{mask_access_token, mask_endpoint_credentials};
pub use run::{
    check_record_count, load_vocabulary, populate_all, populate_orders, populate_products,
    populate_users, run_populate, SeedSummary,
};
