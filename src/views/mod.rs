pub mod query;
pub mod results;

pub use query::QueryForm;
pub use results::{ErrorBanner, LoadingBanner, ResultsCard};
