// @generated
// Generated from: proto/gateway.proto
// Manual check-in for offline builds.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct User {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub email: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub last_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub first_name: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub middle_name: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub phone_number: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Card {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub pin: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub cvv: ::prost::alloc::string::String,
    #[prost(enumeration = "CardType", tag = "4")]
    pub r#type: i32,
    #[prost(enumeration = "CardStatus", tag = "5")]
    pub status: i32,
    #[prost(string, tag = "6")]
    pub account_id: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub card_number: ::prost::alloc::string::String,
    #[prost(string, tag = "8")]
    pub card_holder: ::prost::alloc::string::String,
    #[prost(string, tag = "9")]
    pub expiry_date: ::prost::alloc::string::String,
    #[prost(enumeration = "CardPaymentSystem", tag = "10")]
    pub payment_system: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Account {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(enumeration = "AccountType", tag = "2")]
    pub r#type: i32,
    #[prost(message, repeated, tag = "3")]
    pub cards: ::prost::alloc::vec::Vec<Card>,
    #[prost(enumeration = "AccountStatus", tag = "4")]
    pub status: i32,
    #[prost(double, tag = "5")]
    pub balance: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Operation {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(enumeration = "OperationType", tag = "2")]
    pub r#type: i32,
    #[prost(enumeration = "OperationStatus", tag = "3")]
    pub status: i32,
    #[prost(double, tag = "4")]
    pub amount: f64,
    #[prost(string, tag = "5")]
    pub card_id: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub category: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub created_at: ::prost::alloc::string::String,
    #[prost(string, tag = "8")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OperationReceipt {
    #[prost(string, tag = "1")]
    pub url: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub document: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OperationsSummary {
    #[prost(double, tag = "1")]
    pub spent_amount: f64,
    #[prost(double, tag = "2")]
    pub received_amount: f64,
    #[prost(double, tag = "3")]
    pub cashback_amount: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Document {
    #[prost(string, tag = "1")]
    pub url: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub document: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetUserRequest {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetUserResponse {
    #[prost(message, optional, tag = "1")]
    pub user: ::core::option::Option<User>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateUserRequest {
    #[prost(string, tag = "1")]
    pub email: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub last_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub first_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub middle_name: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub phone_number: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateUserResponse {
    #[prost(message, optional, tag = "1")]
    pub user: ::core::option::Option<User>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAccountsRequest {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAccountsResponse {
    #[prost(message, repeated, tag = "1")]
    pub accounts: ::prost::alloc::vec::Vec<Account>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpenDepositAccountRequest {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpenDepositAccountResponse {
    #[prost(message, optional, tag = "1")]
    pub account: ::core::option::Option<Account>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpenSavingsAccountRequest {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpenSavingsAccountResponse {
    #[prost(message, optional, tag = "1")]
    pub account: ::core::option::Option<Account>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpenDebitCardAccountRequest {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpenDebitCardAccountResponse {
    #[prost(message, optional, tag = "1")]
    pub account: ::core::option::Option<Account>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpenCreditCardAccountRequest {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpenCreditCardAccountResponse {
    #[prost(message, optional, tag = "1")]
    pub account: ::core::option::Option<Account>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IssueVirtualCardRequest {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IssueVirtualCardResponse {
    #[prost(message, optional, tag = "1")]
    pub card: ::core::option::Option<Card>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IssuePhysicalCardRequest {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IssuePhysicalCardResponse {
    #[prost(message, optional, tag = "1")]
    pub card: ::core::option::Option<Card>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOperationRequest {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOperationResponse {
    #[prost(message, optional, tag = "1")]
    pub operation: ::core::option::Option<Operation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOperationReceiptRequest {
    #[prost(string, tag = "1")]
    pub operation_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOperationReceiptResponse {
    #[prost(message, optional, tag = "1")]
    pub receipt: ::core::option::Option<OperationReceipt>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOperationsRequest {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOperationsResponse {
    #[prost(message, repeated, tag = "1")]
    pub operations: ::prost::alloc::vec::Vec<Operation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOperationsSummaryRequest {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOperationsSummaryResponse {
    #[prost(message, optional, tag = "1")]
    pub summary: ::core::option::Option<OperationsSummary>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakeFeeOperationRequest {
    #[prost(enumeration = "OperationStatus", tag = "1")]
    pub status: i32,
    #[prost(double, tag = "2")]
    pub amount: f64,
    #[prost(string, tag = "3")]
    pub card_id: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakeFeeOperationResponse {
    #[prost(message, optional, tag = "1")]
    pub operation: ::core::option::Option<Operation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakeTopUpOperationRequest {
    #[prost(enumeration = "OperationStatus", tag = "1")]
    pub status: i32,
    #[prost(double, tag = "2")]
    pub amount: f64,
    #[prost(string, tag = "3")]
    pub card_id: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakeTopUpOperationResponse {
    #[prost(message, optional, tag = "1")]
    pub operation: ::core::option::Option<Operation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakeCashbackOperationRequest {
    #[prost(enumeration = "OperationStatus", tag = "1")]
    pub status: i32,
    #[prost(double, tag = "2")]
    pub amount: f64,
    #[prost(string, tag = "3")]
    pub card_id: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakeCashbackOperationResponse {
    #[prost(message, optional, tag = "1")]
    pub operation: ::core::option::Option<Operation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakeTransferOperationRequest {
    #[prost(enumeration = "OperationStatus", tag = "1")]
    pub status: i32,
    #[prost(double, tag = "2")]
    pub amount: f64,
    #[prost(string, tag = "3")]
    pub card_id: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakeTransferOperationResponse {
    #[prost(message, optional, tag = "1")]
    pub operation: ::core::option::Option<Operation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakePurchaseOperationRequest {
    #[prost(enumeration = "OperationStatus", tag = "1")]
    pub status: i32,
    #[prost(double, tag = "2")]
    pub amount: f64,
    #[prost(string, tag = "3")]
    pub card_id: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub account_id: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub category: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakePurchaseOperationResponse {
    #[prost(message, optional, tag = "1")]
    pub operation: ::core::option::Option<Operation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakeBillPaymentOperationRequest {
    #[prost(enumeration = "OperationStatus", tag = "1")]
    pub status: i32,
    #[prost(double, tag = "2")]
    pub amount: f64,
    #[prost(string, tag = "3")]
    pub card_id: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakeBillPaymentOperationResponse {
    #[prost(message, optional, tag = "1")]
    pub operation: ::core::option::Option<Operation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakeCashWithdrawalOperationRequest {
    #[prost(enumeration = "OperationStatus", tag = "1")]
    pub status: i32,
    #[prost(double, tag = "2")]
    pub amount: f64,
    #[prost(string, tag = "3")]
    pub card_id: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakeCashWithdrawalOperationResponse {
    #[prost(message, optional, tag = "1")]
    pub operation: ::core::option::Option<Operation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTariffDocumentRequest {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTariffDocumentResponse {
    #[prost(message, optional, tag = "1")]
    pub tariff: ::core::option::Option<Document>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetContractDocumentRequest {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetContractDocumentResponse {
    #[prost(message, optional, tag = "1")]
    pub contract: ::core::option::Option<Document>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AccountType {
    Unspecified = 0,
    Deposit = 1,
    Savings = 2,
    DebitCard = 3,
    CreditCard = 4,
}

impl AccountType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "ACCOUNT_TYPE_UNSPECIFIED",
            Self::Deposit => "ACCOUNT_TYPE_DEPOSIT",
            Self::Savings => "ACCOUNT_TYPE_SAVINGS",
            Self::DebitCard => "ACCOUNT_TYPE_DEBIT_CARD",
            Self::CreditCard => "ACCOUNT_TYPE_CREDIT_CARD",
        }
    }

    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "ACCOUNT_TYPE_UNSPECIFIED" => Some(Self::Unspecified),
            "ACCOUNT_TYPE_DEPOSIT" => Some(Self::Deposit),
            "ACCOUNT_TYPE_SAVINGS" => Some(Self::Savings),
            "ACCOUNT_TYPE_DEBIT_CARD" => Some(Self::DebitCard),
            "ACCOUNT_TYPE_CREDIT_CARD" => Some(Self::CreditCard),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AccountStatus {
    Unspecified = 0,
    Active = 1,
    Closed = 2,
    PendingClosure = 3,
}

impl AccountStatus {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "ACCOUNT_STATUS_UNSPECIFIED",
            Self::Active => "ACCOUNT_STATUS_ACTIVE",
            Self::Closed => "ACCOUNT_STATUS_CLOSED",
            Self::PendingClosure => "ACCOUNT_STATUS_PENDING_CLOSURE",
        }
    }

    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "ACCOUNT_STATUS_UNSPECIFIED" => Some(Self::Unspecified),
            "ACCOUNT_STATUS_ACTIVE" => Some(Self::Active),
            "ACCOUNT_STATUS_CLOSED" => Some(Self::Closed),
            "ACCOUNT_STATUS_PENDING_CLOSURE" => Some(Self::PendingClosure),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CardType {
    Unspecified = 0,
    Virtual = 1,
    Physical = 2,
}

impl CardType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "CARD_TYPE_UNSPECIFIED",
            Self::Virtual => "CARD_TYPE_VIRTUAL",
            Self::Physical => "CARD_TYPE_PHYSICAL",
        }
    }

    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "CARD_TYPE_UNSPECIFIED" => Some(Self::Unspecified),
            "CARD_TYPE_VIRTUAL" => Some(Self::Virtual),
            "CARD_TYPE_PHYSICAL" => Some(Self::Physical),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CardStatus {
    Unspecified = 0,
    Active = 1,
    Frozen = 2,
    Closed = 3,
    Blocked = 4,
}

impl CardStatus {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "CARD_STATUS_UNSPECIFIED",
            Self::Active => "CARD_STATUS_ACTIVE",
            Self::Frozen => "CARD_STATUS_FROZEN",
            Self::Closed => "CARD_STATUS_CLOSED",
            Self::Blocked => "CARD_STATUS_BLOCKED",
        }
    }

    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "CARD_STATUS_UNSPECIFIED" => Some(Self::Unspecified),
            "CARD_STATUS_ACTIVE" => Some(Self::Active),
            "CARD_STATUS_FROZEN" => Some(Self::Frozen),
            "CARD_STATUS_CLOSED" => Some(Self::Closed),
            "CARD_STATUS_BLOCKED" => Some(Self::Blocked),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CardPaymentSystem {
    Unspecified = 0,
    Visa = 1,
    Mastercard = 2,
}

impl CardPaymentSystem {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "CARD_PAYMENT_SYSTEM_UNSPECIFIED",
            Self::Visa => "CARD_PAYMENT_SYSTEM_VISA",
            Self::Mastercard => "CARD_PAYMENT_SYSTEM_MASTERCARD",
        }
    }

    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "CARD_PAYMENT_SYSTEM_UNSPECIFIED" => Some(Self::Unspecified),
            "CARD_PAYMENT_SYSTEM_VISA" => Some(Self::Visa),
            "CARD_PAYMENT_SYSTEM_MASTERCARD" => Some(Self::Mastercard),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OperationType {
    Unspecified = 0,
    Fee = 1,
    TopUp = 2,
    Purchase = 3,
    Cashback = 4,
    Transfer = 5,
    BillPayment = 6,
    CashWithdrawal = 7,
}

impl OperationType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "OPERATION_TYPE_UNSPECIFIED",
            Self::Fee => "OPERATION_TYPE_FEE",
            Self::TopUp => "OPERATION_TYPE_TOP_UP",
            Self::Purchase => "OPERATION_TYPE_PURCHASE",
            Self::Cashback => "OPERATION_TYPE_CASHBACK",
            Self::Transfer => "OPERATION_TYPE_TRANSFER",
            Self::BillPayment => "OPERATION_TYPE_BILL_PAYMENT",
            Self::CashWithdrawal => "OPERATION_TYPE_CASH_WITHDRAWAL",
        }
    }

    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "OPERATION_TYPE_UNSPECIFIED" => Some(Self::Unspecified),
            "OPERATION_TYPE_FEE" => Some(Self::Fee),
            "OPERATION_TYPE_TOP_UP" => Some(Self::TopUp),
            "OPERATION_TYPE_PURCHASE" => Some(Self::Purchase),
            "OPERATION_TYPE_CASHBACK" => Some(Self::Cashback),
            "OPERATION_TYPE_TRANSFER" => Some(Self::Transfer),
            "OPERATION_TYPE_BILL_PAYMENT" => Some(Self::BillPayment),
            "OPERATION_TYPE_CASH_WITHDRAWAL" => Some(Self::CashWithdrawal),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OperationStatus {
    Unspecified = 0,
    Failed = 1,
    Completed = 2,
    InProgress = 3,
}

impl OperationStatus {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "OPERATION_STATUS_UNSPECIFIED",
            Self::Failed => "OPERATION_STATUS_FAILED",
            Self::Completed => "OPERATION_STATUS_COMPLETED",
            Self::InProgress => "OPERATION_STATUS_IN_PROGRESS",
        }
    }

    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "OPERATION_STATUS_UNSPECIFIED" => Some(Self::Unspecified),
            "OPERATION_STATUS_FAILED" => Some(Self::Failed),
            "OPERATION_STATUS_COMPLETED" => Some(Self::Completed),
            "OPERATION_STATUS_IN_PROGRESS" => Some(Self::InProgress),
            _ => None,
        }
    }
}

pub mod users_gateway_service_client {
    #![allow(clippy::derive_partial_eq_without_eq)]
    use tonic::codegen::*;

    #[derive(Debug, Clone)]
    pub struct UsersGatewayServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl UsersGatewayServiceClient<tonic::transport::Channel> {
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }

    impl<T> UsersGatewayServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::ResponseBody: Body + Send + 'static,
        T::Error: Into<StdError>,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
        <T::ResponseBody as Body>::Data: Into<Bytes> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }

        pub async fn get_user(
            &mut self,
            request: impl tonic::IntoRequest<super::GetUserRequest>,
        ) -> Result<tonic::Response<super::GetUserResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/gateway.v1.UsersGatewayService/GetUser",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn create_user(
            &mut self,
            request: impl tonic::IntoRequest<super::CreateUserRequest>,
        ) -> Result<tonic::Response<super::CreateUserResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/gateway.v1.UsersGatewayService/CreateUser",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
}

pub mod accounts_gateway_service_client {
    #![allow(clippy::derive_partial_eq_without_eq)]
    use tonic::codegen::*;

    #[derive(Debug, Clone)]
    pub struct AccountsGatewayServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl AccountsGatewayServiceClient<tonic::transport::Channel> {
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }

    impl<T> AccountsGatewayServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::ResponseBody: Body + Send + 'static,
        T::Error: Into<StdError>,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
        <T::ResponseBody as Body>::Data: Into<Bytes> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }

        pub async fn get_accounts(
            &mut self,
            request: impl tonic::IntoRequest<super::GetAccountsRequest>,
        ) -> Result<tonic::Response<super::GetAccountsResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/gateway.v1.AccountsGatewayService/GetAccounts",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn open_deposit_account(
            &mut self,
            request: impl tonic::IntoRequest<super::OpenDepositAccountRequest>,
        ) -> Result<tonic::Response<super::OpenDepositAccountResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/gateway.v1.AccountsGatewayService/OpenDepositAccount",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn open_savings_account(
            &mut self,
            request: impl tonic::IntoRequest<super::OpenSavingsAccountRequest>,
        ) -> Result<tonic::Response<super::OpenSavingsAccountResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/gateway.v1.AccountsGatewayService/OpenSavingsAccount",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn open_debit_card_account(
            &mut self,
            request: impl tonic::IntoRequest<super::OpenDebitCardAccountRequest>,
        ) -> Result<tonic::Response<super::OpenDebitCardAccountResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/gateway.v1.AccountsGatewayService/OpenDebitCardAccount",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn open_credit_card_account(
            &mut self,
            request: impl tonic::IntoRequest<super::OpenCreditCardAccountRequest>,
        ) -> Result<tonic::Response<super::OpenCreditCardAccountResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/gateway.v1.AccountsGatewayService/OpenCreditCardAccount",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
}

pub mod cards_gateway_service_client {
    #![allow(clippy::derive_partial_eq_without_eq)]
    use tonic::codegen::*;

    #[derive(Debug, Clone)]
    pub struct CardsGatewayServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl CardsGatewayServiceClient<tonic::transport::Channel> {
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }

    impl<T> CardsGatewayServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::ResponseBody: Body + Send + 'static,
        T::Error: Into<StdError>,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
        <T::ResponseBody as Body>::Data: Into<Bytes> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }

        pub async fn issue_virtual_card(
            &mut self,
            request: impl tonic::IntoRequest<super::IssueVirtualCardRequest>,
        ) -> Result<tonic::Response<super::IssueVirtualCardResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/gateway.v1.CardsGatewayService/IssueVirtualCard",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn issue_physical_card(
            &mut self,
            request: impl tonic::IntoRequest<super::IssuePhysicalCardRequest>,
        ) -> Result<tonic::Response<super::IssuePhysicalCardResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/gateway.v1.CardsGatewayService/IssuePhysicalCard",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
}

pub mod operations_gateway_service_client {
    #![allow(clippy::derive_partial_eq_without_eq)]
    use tonic::codegen::*;

    #[derive(Debug, Clone)]
    pub struct OperationsGatewayServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl OperationsGatewayServiceClient<tonic::transport::Channel> {
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }

    impl<T> OperationsGatewayServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::ResponseBody: Body + Send + 'static,
        T::Error: Into<StdError>,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
        <T::ResponseBody as Body>::Data: Into<Bytes> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }

        pub async fn get_operation(
            &mut self,
            request: impl tonic::IntoRequest<super::GetOperationRequest>,
        ) -> Result<tonic::Response<super::GetOperationResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/gateway.v1.OperationsGatewayService/GetOperation",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn get_operation_receipt(
            &mut self,
            request: impl tonic::IntoRequest<super::GetOperationReceiptRequest>,
        ) -> Result<tonic::Response<super::GetOperationReceiptResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/gateway.v1.OperationsGatewayService/GetOperationReceipt",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn get_operations(
            &mut self,
            request: impl tonic::IntoRequest<super::GetOperationsRequest>,
        ) -> Result<tonic::Response<super::GetOperationsResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/gateway.v1.OperationsGatewayService/GetOperations",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn get_operations_summary(
            &mut self,
            request: impl tonic::IntoRequest<super::GetOperationsSummaryRequest>,
        ) -> Result<tonic::Response<super::GetOperationsSummaryResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/gateway.v1.OperationsGatewayService/GetOperationsSummary",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn make_fee_operation(
            &mut self,
            request: impl tonic::IntoRequest<super::MakeFeeOperationRequest>,
        ) -> Result<tonic::Response<super::MakeFeeOperationResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/gateway.v1.OperationsGatewayService/MakeFeeOperation",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn make_top_up_operation(
            &mut self,
            request: impl tonic::IntoRequest<super::MakeTopUpOperationRequest>,
        ) -> Result<tonic::Response<super::MakeTopUpOperationResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/gateway.v1.OperationsGatewayService/MakeTopUpOperation",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn make_cashback_operation(
            &mut self,
            request: impl tonic::IntoRequest<super::MakeCashbackOperationRequest>,
        ) -> Result<tonic::Response<super::MakeCashbackOperationResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/gateway.v1.OperationsGatewayService/MakeCashbackOperation",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn make_transfer_operation(
            &mut self,
            request: impl tonic::IntoRequest<super::MakeTransferOperationRequest>,
        ) -> Result<tonic::Response<super::MakeTransferOperationResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/gateway.v1.OperationsGatewayService/MakeTransferOperation",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn make_purchase_operation(
            &mut self,
            request: impl tonic::IntoRequest<super::MakePurchaseOperationRequest>,
        ) -> Result<tonic::Response<super::MakePurchaseOperationResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/gateway.v1.OperationsGatewayService/MakePurchaseOperation",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn make_bill_payment_operation(
            &mut self,
            request: impl tonic::IntoRequest<super::MakeBillPaymentOperationRequest>,
        ) -> Result<tonic::Response<super::MakeBillPaymentOperationResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/gateway.v1.OperationsGatewayService/MakeBillPaymentOperation",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn make_cash_withdrawal_operation(
            &mut self,
            request: impl tonic::IntoRequest<super::MakeCashWithdrawalOperationRequest>,
        ) -> Result<tonic::Response<super::MakeCashWithdrawalOperationResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/gateway.v1.OperationsGatewayService/MakeCashWithdrawalOperation",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
}

pub mod documents_gateway_service_client {
    #![allow(clippy::derive_partial_eq_without_eq)]
    use tonic::codegen::*;

    #[derive(Debug, Clone)]
    pub struct DocumentsGatewayServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl DocumentsGatewayServiceClient<tonic::transport::Channel> {
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }

    impl<T> DocumentsGatewayServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::ResponseBody: Body + Send + 'static,
        T::Error: Into<StdError>,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
        <T::ResponseBody as Body>::Data: Into<Bytes> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }

        pub async fn get_tariff_document(
            &mut self,
            request: impl tonic::IntoRequest<super::GetTariffDocumentRequest>,
        ) -> Result<tonic::Response<super::GetTariffDocumentResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/gateway.v1.DocumentsGatewayService/GetTariffDocument",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn get_contract_document(
            &mut self,
            request: impl tonic::IntoRequest<super::GetContractDocumentRequest>,
        ) -> Result<tonic::Response<super::GetContractDocumentResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/gateway.v1.DocumentsGatewayService/GetContractDocument",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
}

pub mod users_gateway_service_server {
    #![allow(clippy::derive_partial_eq_without_eq)]
    use tonic::codegen::*;

    #[tonic::async_trait]
    pub trait UsersGatewayService: Send + Sync + 'static {
        async fn get_user(
            &self,
            request: tonic::Request<super::GetUserRequest>,
        ) -> std::result::Result<tonic::Response<super::GetUserResponse>, tonic::Status>;
        async fn create_user(
            &self,
            request: tonic::Request<super::CreateUserRequest>,
        ) -> std::result::Result<tonic::Response<super::CreateUserResponse>, tonic::Status>;
    }

    #[derive(Debug)]
    pub struct UsersGatewayServiceServer<T: UsersGatewayService> {
        inner: Arc<T>,
    }

    impl<T: UsersGatewayService> UsersGatewayServiceServer<T> {
        pub fn new(inner: T) -> Self {
            Self::from_arc(Arc::new(inner))
        }
        pub fn from_arc(inner: Arc<T>) -> Self {
            Self { inner }
        }
    }

    impl<T: UsersGatewayService> Clone for UsersGatewayServiceServer<T> {
        fn clone(&self) -> Self {
            Self {
                inner: self.inner.clone(),
            }
        }
    }

    impl<T: UsersGatewayService> Service<http::Request<tonic::body::BoxBody>> for UsersGatewayServiceServer<T> {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = std::convert::Infallible;
        type Future = BoxFuture<Self::Response, Self::Error>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, req: http::Request<tonic::body::BoxBody>) -> Self::Future {
            let inner = self.inner.clone();
            match req.uri().path() {
                "/gateway.v1.UsersGatewayService/GetUser" => {
                    #[allow(non_camel_case_types)]
                    struct GetUserSvc<T: UsersGatewayService>(pub Arc<T>);
                    impl<T: UsersGatewayService> tonic::server::UnaryService<super::GetUserRequest> for GetUserSvc<T> {
                        type Response = super::GetUserResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetUserRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.get_user(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = GetUserSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/gateway.v1.UsersGatewayService/CreateUser" => {
                    #[allow(non_camel_case_types)]
                    struct CreateUserSvc<T: UsersGatewayService>(pub Arc<T>);
                    impl<T: UsersGatewayService> tonic::server::UnaryService<super::CreateUserRequest> for CreateUserSvc<T> {
                        type Response = super::CreateUserResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::CreateUserRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.create_user(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = CreateUserSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                _ => Box::pin(async move {
                    let mut response = http::Response::new(tonic::body::empty_body());
                    let headers = response.headers_mut();
                    headers.insert("grpc-status", http::HeaderValue::from_static("12"));
                    headers.insert(
                        http::header::CONTENT_TYPE,
                        http::HeaderValue::from_static("application/grpc"),
                    );
                    Ok(response)
                }),
            }
        }
    }

    impl<T: UsersGatewayService> tonic::server::NamedService for UsersGatewayServiceServer<T> {
        const NAME: &'static str = "gateway.v1.UsersGatewayService";
    }
}

pub mod accounts_gateway_service_server {
    #![allow(clippy::derive_partial_eq_without_eq)]
    use tonic::codegen::*;

    #[tonic::async_trait]
    pub trait AccountsGatewayService: Send + Sync + 'static {
        async fn get_accounts(
            &self,
            request: tonic::Request<super::GetAccountsRequest>,
        ) -> std::result::Result<tonic::Response<super::GetAccountsResponse>, tonic::Status>;
        async fn open_deposit_account(
            &self,
            request: tonic::Request<super::OpenDepositAccountRequest>,
        ) -> std::result::Result<tonic::Response<super::OpenDepositAccountResponse>, tonic::Status>;
        async fn open_savings_account(
            &self,
            request: tonic::Request<super::OpenSavingsAccountRequest>,
        ) -> std::result::Result<tonic::Response<super::OpenSavingsAccountResponse>, tonic::Status>;
        async fn open_debit_card_account(
            &self,
            request: tonic::Request<super::OpenDebitCardAccountRequest>,
        ) -> std::result::Result<tonic::Response<super::OpenDebitCardAccountResponse>, tonic::Status>;
        async fn open_credit_card_account(
            &self,
            request: tonic::Request<super::OpenCreditCardAccountRequest>,
        ) -> std::result::Result<tonic::Response<super::OpenCreditCardAccountResponse>, tonic::Status>;
    }

    #[derive(Debug)]
    pub struct AccountsGatewayServiceServer<T: AccountsGatewayService> {
        inner: Arc<T>,
    }

    impl<T: AccountsGatewayService> AccountsGatewayServiceServer<T> {
        pub fn new(inner: T) -> Self {
            Self::from_arc(Arc::new(inner))
        }
        pub fn from_arc(inner: Arc<T>) -> Self {
            Self { inner }
        }
    }

    impl<T: AccountsGatewayService> Clone for AccountsGatewayServiceServer<T> {
        fn clone(&self) -> Self {
            Self {
                inner: self.inner.clone(),
            }
        }
    }

    impl<T: AccountsGatewayService> Service<http::Request<tonic::body::BoxBody>> for AccountsGatewayServiceServer<T> {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = std::convert::Infallible;
        type Future = BoxFuture<Self::Response, Self::Error>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, req: http::Request<tonic::body::BoxBody>) -> Self::Future {
            let inner = self.inner.clone();
            match req.uri().path() {
                "/gateway.v1.AccountsGatewayService/GetAccounts" => {
                    #[allow(non_camel_case_types)]
                    struct GetAccountsSvc<T: AccountsGatewayService>(pub Arc<T>);
                    impl<T: AccountsGatewayService> tonic::server::UnaryService<super::GetAccountsRequest> for GetAccountsSvc<T> {
                        type Response = super::GetAccountsResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetAccountsRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.get_accounts(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = GetAccountsSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/gateway.v1.AccountsGatewayService/OpenDepositAccount" => {
                    #[allow(non_camel_case_types)]
                    struct OpenDepositAccountSvc<T: AccountsGatewayService>(pub Arc<T>);
                    impl<T: AccountsGatewayService> tonic::server::UnaryService<super::OpenDepositAccountRequest> for OpenDepositAccountSvc<T> {
                        type Response = super::OpenDepositAccountResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::OpenDepositAccountRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.open_deposit_account(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = OpenDepositAccountSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/gateway.v1.AccountsGatewayService/OpenSavingsAccount" => {
                    #[allow(non_camel_case_types)]
                    struct OpenSavingsAccountSvc<T: AccountsGatewayService>(pub Arc<T>);
                    impl<T: AccountsGatewayService> tonic::server::UnaryService<super::OpenSavingsAccountRequest> for OpenSavingsAccountSvc<T> {
                        type Response = super::OpenSavingsAccountResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::OpenSavingsAccountRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.open_savings_account(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = OpenSavingsAccountSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/gateway.v1.AccountsGatewayService/OpenDebitCardAccount" => {
                    #[allow(non_camel_case_types)]
                    struct OpenDebitCardAccountSvc<T: AccountsGatewayService>(pub Arc<T>);
                    impl<T: AccountsGatewayService> tonic::server::UnaryService<super::OpenDebitCardAccountRequest> for OpenDebitCardAccountSvc<T> {
                        type Response = super::OpenDebitCardAccountResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::OpenDebitCardAccountRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.open_debit_card_account(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = OpenDebitCardAccountSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/gateway.v1.AccountsGatewayService/OpenCreditCardAccount" => {
                    #[allow(non_camel_case_types)]
                    struct OpenCreditCardAccountSvc<T: AccountsGatewayService>(pub Arc<T>);
                    impl<T: AccountsGatewayService> tonic::server::UnaryService<super::OpenCreditCardAccountRequest> for OpenCreditCardAccountSvc<T> {
                        type Response = super::OpenCreditCardAccountResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::OpenCreditCardAccountRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.open_credit_card_account(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = OpenCreditCardAccountSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                _ => Box::pin(async move {
                    let mut response = http::Response::new(tonic::body::empty_body());
                    let headers = response.headers_mut();
                    headers.insert("grpc-status", http::HeaderValue::from_static("12"));
                    headers.insert(
                        http::header::CONTENT_TYPE,
                        http::HeaderValue::from_static("application/grpc"),
                    );
                    Ok(response)
                }),
            }
        }
    }

    impl<T: AccountsGatewayService> tonic::server::NamedService for AccountsGatewayServiceServer<T> {
        const NAME: &'static str = "gateway.v1.AccountsGatewayService";
    }
}

pub mod cards_gateway_service_server {
    #![allow(clippy::derive_partial_eq_without_eq)]
    use tonic::codegen::*;

    #[tonic::async_trait]
    pub trait CardsGatewayService: Send + Sync + 'static {
        async fn issue_virtual_card(
            &self,
            request: tonic::Request<super::IssueVirtualCardRequest>,
        ) -> std::result::Result<tonic::Response<super::IssueVirtualCardResponse>, tonic::Status>;
        async fn issue_physical_card(
            &self,
            request: tonic::Request<super::IssuePhysicalCardRequest>,
        ) -> std::result::Result<tonic::Response<super::IssuePhysicalCardResponse>, tonic::Status>;
    }

    #[derive(Debug)]
    pub struct CardsGatewayServiceServer<T: CardsGatewayService> {
        inner: Arc<T>,
    }

    impl<T: CardsGatewayService> CardsGatewayServiceServer<T> {
        pub fn new(inner: T) -> Self {
            Self::from_arc(Arc::new(inner))
        }
        pub fn from_arc(inner: Arc<T>) -> Self {
            Self { inner }
        }
    }

    impl<T: CardsGatewayService> Clone for CardsGatewayServiceServer<T> {
        fn clone(&self) -> Self {
            Self {
                inner: self.inner.clone(),
            }
        }
    }

    impl<T: CardsGatewayService> Service<http::Request<tonic::body::BoxBody>> for CardsGatewayServiceServer<T> {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = std::convert::Infallible;
        type Future = BoxFuture<Self::Response, Self::Error>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, req: http::Request<tonic::body::BoxBody>) -> Self::Future {
            let inner = self.inner.clone();
            match req.uri().path() {
                "/gateway.v1.CardsGatewayService/IssueVirtualCard" => {
                    #[allow(non_camel_case_types)]
                    struct IssueVirtualCardSvc<T: CardsGatewayService>(pub Arc<T>);
                    impl<T: CardsGatewayService> tonic::server::UnaryService<super::IssueVirtualCardRequest> for IssueVirtualCardSvc<T> {
                        type Response = super::IssueVirtualCardResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::IssueVirtualCardRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.issue_virtual_card(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = IssueVirtualCardSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/gateway.v1.CardsGatewayService/IssuePhysicalCard" => {
                    #[allow(non_camel_case_types)]
                    struct IssuePhysicalCardSvc<T: CardsGatewayService>(pub Arc<T>);
                    impl<T: CardsGatewayService> tonic::server::UnaryService<super::IssuePhysicalCardRequest> for IssuePhysicalCardSvc<T> {
                        type Response = super::IssuePhysicalCardResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::IssuePhysicalCardRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.issue_physical_card(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = IssuePhysicalCardSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                _ => Box::pin(async move {
                    let mut response = http::Response::new(tonic::body::empty_body());
                    let headers = response.headers_mut();
                    headers.insert("grpc-status", http::HeaderValue::from_static("12"));
                    headers.insert(
                        http::header::CONTENT_TYPE,
                        http::HeaderValue::from_static("application/grpc"),
                    );
                    Ok(response)
                }),
            }
        }
    }

    impl<T: CardsGatewayService> tonic::server::NamedService for CardsGatewayServiceServer<T> {
        const NAME: &'static str = "gateway.v1.CardsGatewayService";
    }
}

pub mod operations_gateway_service_server {
    #![allow(clippy::derive_partial_eq_without_eq)]
    use tonic::codegen::*;

    #[tonic::async_trait]
    pub trait OperationsGatewayService: Send + Sync + 'static {
        async fn get_operation(
            &self,
            request: tonic::Request<super::GetOperationRequest>,
        ) -> std::result::Result<tonic::Response<super::GetOperationResponse>, tonic::Status>;
        async fn get_operation_receipt(
            &self,
            request: tonic::Request<super::GetOperationReceiptRequest>,
        ) -> std::result::Result<tonic::Response<super::GetOperationReceiptResponse>, tonic::Status>;
        async fn get_operations(
            &self,
            request: tonic::Request<super::GetOperationsRequest>,
        ) -> std::result::Result<tonic::Response<super::GetOperationsResponse>, tonic::Status>;
        async fn get_operations_summary(
            &self,
            request: tonic::Request<super::GetOperationsSummaryRequest>,
        ) -> std::result::Result<tonic::Response<super::GetOperationsSummaryResponse>, tonic::Status>;
        async fn make_fee_operation(
            &self,
            request: tonic::Request<super::MakeFeeOperationRequest>,
        ) -> std::result::Result<tonic::Response<super::MakeFeeOperationResponse>, tonic::Status>;
        async fn make_top_up_operation(
            &self,
            request: tonic::Request<super::MakeTopUpOperationRequest>,
        ) -> std::result::Result<tonic::Response<super::MakeTopUpOperationResponse>, tonic::Status>;
        async fn make_cashback_operation(
            &self,
            request: tonic::Request<super::MakeCashbackOperationRequest>,
        ) -> std::result::Result<tonic::Response<super::MakeCashbackOperationResponse>, tonic::Status>;
        async fn make_transfer_operation(
            &self,
            request: tonic::Request<super::MakeTransferOperationRequest>,
        ) -> std::result::Result<tonic::Response<super::MakeTransferOperationResponse>, tonic::Status>;
        async fn make_purchase_operation(
            &self,
            request: tonic::Request<super::MakePurchaseOperationRequest>,
        ) -> std::result::Result<tonic::Response<super::MakePurchaseOperationResponse>, tonic::Status>;
        async fn make_bill_payment_operation(
            &self,
            request: tonic::Request<super::MakeBillPaymentOperationRequest>,
        ) -> std::result::Result<tonic::Response<super::MakeBillPaymentOperationResponse>, tonic::Status>;
        async fn make_cash_withdrawal_operation(
            &self,
            request: tonic::Request<super::MakeCashWithdrawalOperationRequest>,
        ) -> std::result::Result<tonic::Response<super::MakeCashWithdrawalOperationResponse>, tonic::Status>;
    }

    #[derive(Debug)]
    pub struct OperationsGatewayServiceServer<T: OperationsGatewayService> {
        inner: Arc<T>,
    }

    impl<T: OperationsGatewayService> OperationsGatewayServiceServer<T> {
        pub fn new(inner: T) -> Self {
            Self::from_arc(Arc::new(inner))
        }
        pub fn from_arc(inner: Arc<T>) -> Self {
            Self { inner }
        }
    }

    impl<T: OperationsGatewayService> Clone for OperationsGatewayServiceServer<T> {
        fn clone(&self) -> Self {
            Self {
                inner: self.inner.clone(),
            }
        }
    }

    impl<T: OperationsGatewayService> Service<http::Request<tonic::body::BoxBody>> for OperationsGatewayServiceServer<T> {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = std::convert::Infallible;
        type Future = BoxFuture<Self::Response, Self::Error>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, req: http::Request<tonic::body::BoxBody>) -> Self::Future {
            let inner = self.inner.clone();
            match req.uri().path() {
                "/gateway.v1.OperationsGatewayService/GetOperation" => {
                    #[allow(non_camel_case_types)]
                    struct GetOperationSvc<T: OperationsGatewayService>(pub Arc<T>);
                    impl<T: OperationsGatewayService> tonic::server::UnaryService<super::GetOperationRequest> for GetOperationSvc<T> {
                        type Response = super::GetOperationResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetOperationRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.get_operation(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = GetOperationSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/gateway.v1.OperationsGatewayService/GetOperationReceipt" => {
                    #[allow(non_camel_case_types)]
                    struct GetOperationReceiptSvc<T: OperationsGatewayService>(pub Arc<T>);
                    impl<T: OperationsGatewayService> tonic::server::UnaryService<super::GetOperationReceiptRequest> for GetOperationReceiptSvc<T> {
                        type Response = super::GetOperationReceiptResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetOperationReceiptRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.get_operation_receipt(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = GetOperationReceiptSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/gateway.v1.OperationsGatewayService/GetOperations" => {
                    #[allow(non_camel_case_types)]
                    struct GetOperationsSvc<T: OperationsGatewayService>(pub Arc<T>);
                    impl<T: OperationsGatewayService> tonic::server::UnaryService<super::GetOperationsRequest> for GetOperationsSvc<T> {
                        type Response = super::GetOperationsResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetOperationsRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.get_operations(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = GetOperationsSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/gateway.v1.OperationsGatewayService/GetOperationsSummary" => {
                    #[allow(non_camel_case_types)]
                    struct GetOperationsSummarySvc<T: OperationsGatewayService>(pub Arc<T>);
                    impl<T: OperationsGatewayService> tonic::server::UnaryService<super::GetOperationsSummaryRequest> for GetOperationsSummarySvc<T> {
                        type Response = super::GetOperationsSummaryResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetOperationsSummaryRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.get_operations_summary(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = GetOperationsSummarySvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/gateway.v1.OperationsGatewayService/MakeFeeOperation" => {
                    #[allow(non_camel_case_types)]
                    struct MakeFeeOperationSvc<T: OperationsGatewayService>(pub Arc<T>);
                    impl<T: OperationsGatewayService> tonic::server::UnaryService<super::MakeFeeOperationRequest> for MakeFeeOperationSvc<T> {
                        type Response = super::MakeFeeOperationResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::MakeFeeOperationRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.make_fee_operation(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = MakeFeeOperationSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/gateway.v1.OperationsGatewayService/MakeTopUpOperation" => {
                    #[allow(non_camel_case_types)]
                    struct MakeTopUpOperationSvc<T: OperationsGatewayService>(pub Arc<T>);
                    impl<T: OperationsGatewayService> tonic::server::UnaryService<super::MakeTopUpOperationRequest> for MakeTopUpOperationSvc<T> {
                        type Response = super::MakeTopUpOperationResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::MakeTopUpOperationRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.make_top_up_operation(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = MakeTopUpOperationSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/gateway.v1.OperationsGatewayService/MakeCashbackOperation" => {
                    #[allow(non_camel_case_types)]
                    struct MakeCashbackOperationSvc<T: OperationsGatewayService>(pub Arc<T>);
                    impl<T: OperationsGatewayService> tonic::server::UnaryService<super::MakeCashbackOperationRequest> for MakeCashbackOperationSvc<T> {
                        type Response = super::MakeCashbackOperationResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::MakeCashbackOperationRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.make_cashback_operation(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = MakeCashbackOperationSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/gateway.v1.OperationsGatewayService/MakeTransferOperation" => {
                    #[allow(non_camel_case_types)]
                    struct MakeTransferOperationSvc<T: OperationsGatewayService>(pub Arc<T>);
                    impl<T: OperationsGatewayService> tonic::server::UnaryService<super::MakeTransferOperationRequest> for MakeTransferOperationSvc<T> {
                        type Response = super::MakeTransferOperationResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::MakeTransferOperationRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.make_transfer_operation(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = MakeTransferOperationSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/gateway.v1.OperationsGatewayService/MakePurchaseOperation" => {
                    #[allow(non_camel_case_types)]
                    struct MakePurchaseOperationSvc<T: OperationsGatewayService>(pub Arc<T>);
                    impl<T: OperationsGatewayService> tonic::server::UnaryService<super::MakePurchaseOperationRequest> for MakePurchaseOperationSvc<T> {
                        type Response = super::MakePurchaseOperationResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::MakePurchaseOperationRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.make_purchase_operation(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = MakePurchaseOperationSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/gateway.v1.OperationsGatewayService/MakeBillPaymentOperation" => {
                    #[allow(non_camel_case_types)]
                    struct MakeBillPaymentOperationSvc<T: OperationsGatewayService>(pub Arc<T>);
                    impl<T: OperationsGatewayService> tonic::server::UnaryService<super::MakeBillPaymentOperationRequest> for MakeBillPaymentOperationSvc<T> {
                        type Response = super::MakeBillPaymentOperationResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::MakeBillPaymentOperationRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.make_bill_payment_operation(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = MakeBillPaymentOperationSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/gateway.v1.OperationsGatewayService/MakeCashWithdrawalOperation" => {
                    #[allow(non_camel_case_types)]
                    struct MakeCashWithdrawalOperationSvc<T: OperationsGatewayService>(pub Arc<T>);
                    impl<T: OperationsGatewayService> tonic::server::UnaryService<super::MakeCashWithdrawalOperationRequest> for MakeCashWithdrawalOperationSvc<T> {
                        type Response = super::MakeCashWithdrawalOperationResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::MakeCashWithdrawalOperationRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.make_cash_withdrawal_operation(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = MakeCashWithdrawalOperationSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                _ => Box::pin(async move {
                    let mut response = http::Response::new(tonic::body::empty_body());
                    let headers = response.headers_mut();
                    headers.insert("grpc-status", http::HeaderValue::from_static("12"));
                    headers.insert(
                        http::header::CONTENT_TYPE,
                        http::HeaderValue::from_static("application/grpc"),
                    );
                    Ok(response)
                }),
            }
        }
    }

    impl<T: OperationsGatewayService> tonic::server::NamedService for OperationsGatewayServiceServer<T> {
        const NAME: &'static str = "gateway.v1.OperationsGatewayService";
    }
}

pub mod documents_gateway_service_server {
    #![allow(clippy::derive_partial_eq_without_eq)]
    use tonic::codegen::*;

    #[tonic::async_trait]
    pub trait DocumentsGatewayService: Send + Sync + 'static {
        async fn get_tariff_document(
            &self,
            request: tonic::Request<super::GetTariffDocumentRequest>,
        ) -> std::result::Result<tonic::Response<super::GetTariffDocumentResponse>, tonic::Status>;
        async fn get_contract_document(
            &self,
            request: tonic::Request<super::GetContractDocumentRequest>,
        ) -> std::result::Result<tonic::Response<super::GetContractDocumentResponse>, tonic::Status>;
    }

    #[derive(Debug)]
    pub struct DocumentsGatewayServiceServer<T: DocumentsGatewayService> {
        inner: Arc<T>,
    }

    impl<T: DocumentsGatewayService> DocumentsGatewayServiceServer<T> {
        pub fn new(inner: T) -> Self {
            Self::from_arc(Arc::new(inner))
        }
        pub fn from_arc(inner: Arc<T>) -> Self {
            Self { inner }
        }
    }

    impl<T: DocumentsGatewayService> Clone for DocumentsGatewayServiceServer<T> {
        fn clone(&self) -> Self {
            Self {
                inner: self.inner.clone(),
            }
        }
    }

    impl<T: DocumentsGatewayService> Service<http::Request<tonic::body::BoxBody>> for DocumentsGatewayServiceServer<T> {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = std::convert::Infallible;
        type Future = BoxFuture<Self::Response, Self::Error>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, req: http::Request<tonic::body::BoxBody>) -> Self::Future {
            let inner = self.inner.clone();
            match req.uri().path() {
                "/gateway.v1.DocumentsGatewayService/GetTariffDocument" => {
                    #[allow(non_camel_case_types)]
                    struct GetTariffDocumentSvc<T: DocumentsGatewayService>(pub Arc<T>);
                    impl<T: DocumentsGatewayService> tonic::server::UnaryService<super::GetTariffDocumentRequest> for GetTariffDocumentSvc<T> {
                        type Response = super::GetTariffDocumentResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetTariffDocumentRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.get_tariff_document(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = GetTariffDocumentSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                "/gateway.v1.DocumentsGatewayService/GetContractDocument" => {
                    #[allow(non_camel_case_types)]
                    struct GetContractDocumentSvc<T: DocumentsGatewayService>(pub Arc<T>);
                    impl<T: DocumentsGatewayService> tonic::server::UnaryService<super::GetContractDocumentRequest> for GetContractDocumentSvc<T> {
                        type Response = super::GetContractDocumentResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetContractDocumentRequest>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            Box::pin(async move { inner.get_contract_document(request).await })
                        }
                    }
                    Box::pin(async move {
                        let method = GetContractDocumentSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    })
                }
                _ => Box::pin(async move {
                    let mut response = http::Response::new(tonic::body::empty_body());
                    let headers = response.headers_mut();
                    headers.insert("grpc-status", http::HeaderValue::from_static("12"));
                    headers.insert(
                        http::header::CONTENT_TYPE,
                        http::HeaderValue::from_static("application/grpc"),
                    );
                    Ok(response)
                }),
            }
        }
    }

    impl<T: DocumentsGatewayService> tonic::server::NamedService for DocumentsGatewayServiceServer<T> {
        const NAME: &'static str = "gateway.v1.DocumentsGatewayService";
    }
}
