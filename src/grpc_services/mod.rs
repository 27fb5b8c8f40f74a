//! gRPC services of the mock gateway.
//!
//! One service per `gateway.v1` contract, each a thin layer over the shared
//! store and the same services the REST handlers use. `AppError`s become
//! `tonic::Status` codes through `From`.

pub mod accounts;
pub mod cards;
/// Model to proto conversions
pub mod convert;
pub mod documents;
pub mod operations;
pub mod users;

pub use accounts::AccountsService;
pub use cards::CardsService;
pub use documents::DocumentsService;
pub use operations::OperationsService;
pub use users::UsersService;
