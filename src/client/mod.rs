pub mod service;
pub mod transport;

pub use service::{prepare_request, SendOutcome, Workbench};
pub use transport::{
    ReqwestTransport, Transport, TransportFuture, TransportRequest, TransportResponse,
};
