//! Data Transfer Objects exchanged with the transport
//!
//! Field names on the Rust side describe the data; the serde renames carry
//! the names the SOAP contract uses, so a transport can encode the DTOs
//! without its own mapping layer.

pub mod request;
pub mod response;

pub use request::{GetBulkReport, GetFullReport, GetValue, Login, Logout, SearchData, ValueParameter};
pub use response::{
    GetFullReportResponse, GetValueResponse, LoginResponse, LogoutResponse, SearchDataResponse,
};
