pub mod http_backend_mock;
