// @generated
// This file is @generated by prost-build.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateMicroVmRequest {
    #[prost(message, optional, tag = "1")]
    pub microvm: ::core::option::Option<
        super::super::super::super::flintlock::types::MicroVmSpec,
    >,
    #[prost(map = "string, message", tag = "2")]
    pub metadata: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        ::prost_types::Any,
    >,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateMicroVmResponse {
    #[prost(message, optional, tag = "1")]
    pub microvm: ::core::option::Option<
        super::super::super::super::flintlock::types::MicroVm,
    >,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteMicroVmRequest {
    #[prost(string, tag = "1")]
    pub uid: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetMicroVmRequest {
    #[prost(string, tag = "1")]
    pub uid: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetMicroVmResponse {
    #[prost(message, optional, tag = "1")]
    pub microvm: ::core::option::Option<
        super::super::super::super::flintlock::types::MicroVm,
    >,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListMicroVMsRequest {
    #[prost(string, tag = "1")]
    pub namespace: ::prost::alloc::string::String,
    #[prost(string, optional, tag = "2")]
    pub name: ::core::option::Option<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListMicroVMsResponse {
    #[prost(message, repeated, tag = "1")]
    pub microvm: ::prost::alloc::vec::Vec<
        super::super::super::super::flintlock::types::MicroVm,
    >,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListMessage {
    #[prost(message, optional, tag = "1")]
    pub microvm: ::core::option::Option<
        super::super::super::super::flintlock::types::MicroVm,
    >,
}
include!("microvm.services.api.v1alpha1.tonic.rs");
