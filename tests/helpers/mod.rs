pub mod mock_delivery;
pub mod mock_transport;
