use mongodb::{Client, Database};

/// Connection string used by test database handles.
///
/// Points at a conventional local MongoDB address. Nothing is ever sent to it
/// by the tests that use these handles; the driver only opens sockets once an
/// actual operation is issued.
pub const TEST_MONGO_URI: &str = "mongodb://localhost:27017/bookstore-test";

/// Creates a lazy database handle for tests.
///
/// The returned handle is fully usable for constructing application state,
/// repositories, and routers. Tests that use it must only exercise code paths
/// that reject a request before issuing a database operation.
///
/// # Panics
/// Panics if the test URI fails to parse, which indicates a bug in this crate.
pub async fn test_database() -> Database {
    let client = Client::with_uri_str(TEST_MONGO_URI)
        .await
        .expect("test MongoDB URI must parse");
    client
        .default_database()
        .expect("test MongoDB URI must name a database")
}
