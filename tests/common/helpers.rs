// Test helper functions

use super::fixtures::TestDictionary;
use kotoba::core::config::Config;
use kotoba::core::services::Services;
use kotoba::core::types::SearchResponse;

/// Config pointing at the fixture database
#[allow(dead_code)] // Used in integration tests
pub fn test_config(dict: &TestDictionary) -> Config {
    let mut config = Config::default();
    config.storage.database_path = dict.path.clone();
    config
}

/// Create services over the fixture database
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services(dict: &TestDictionary) -> Services {
    Services::new(test_config(dict)).expect("Failed to open fixture dictionary")
}

/// Entry ids of a response, in rank order
#[allow(dead_code)] // Used in integration tests
pub fn result_ids(response: &SearchResponse) -> Vec<i64> {
    response.results.iter().map(|r| r.id).collect()
}
