pub mod resort_api;
