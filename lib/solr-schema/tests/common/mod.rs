#![allow(
    clippy::missing_errors_doc,
    dead_code,
    missing_docs,
    clippy::expect_used
)]
use rstest::fixture;
use tracing::info;

mod solr_stub;
pub use self::solr_stub::*;

pub fn init_tracing() {
    // should be run once, fail otherwise, we skip that error
    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    info!("Tracing initialized");
}

#[fixture]
pub async fn solr() -> SolrStub {
    init_tracing();
    match SolrStub::start().await {
        Ok(stub) => stub,
        Err(error) => {
            panic!("fail to start Solr stub: {error:?}");
        }
    }
}
