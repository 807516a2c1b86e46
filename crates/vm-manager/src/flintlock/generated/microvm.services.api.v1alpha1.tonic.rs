// @generated
/// Generated client implementations.
pub mod micro_vm_client {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value,
    )]
    use tonic::codegen::*;
    use tonic::codegen::http::Uri;
    /** MicroVM providers a service to create and manage the lifecycle of microvms.
*/
    #[derive(Debug, Clone)]
    pub struct MicroVmClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl MicroVmClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> MicroVmClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }
        pub fn with_interceptor<F>(
            inner: T,
            interceptor: F,
        ) -> MicroVmClient<InterceptedService<T, F>>
        where
            F: tonic::service::Interceptor,
            T::ResponseBody: Default,
            T: tonic::codegen::Service<
                http::Request<tonic::body::BoxBody>,
                Response = http::Response<
                    <T as tonic::client::GrpcService<tonic::body::BoxBody>>::ResponseBody,
                >,
            >,
            <T as tonic::codegen::Service<
                http::Request<tonic::body::BoxBody>,
            >>::Error: Into<StdError> + std::marker::Send + std::marker::Sync,
        {
            MicroVmClient::new(InterceptedService::new(inner, interceptor))
        }
        /// Compress requests with the given encoding.
        ///
        /// This requires the server to support it otherwise it might respond with an
        /// error.
        #[must_use]
        pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.send_compressed(encoding);
            self
        }
        /// Enable decompressing responses.
        #[must_use]
        pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.accept_compressed(encoding);
            self
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_decoding_message_size(limit);
            self
        }
        /// Limits the maximum size of an encoded message.
        ///
        /// Default: `usize::MAX`
        #[must_use]
        pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_encoding_message_size(limit);
            self
        }
        pub async fn create_micro_vm(
            &mut self,
            request: impl tonic::IntoRequest<super::CreateMicroVmRequest>,
        ) -> std::result::Result<
            tonic::Response<super::CreateMicroVmResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/microvm.services.api.v1alpha1.MicroVM/CreateMicroVM",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new("microvm.services.api.v1alpha1.MicroVM", "CreateMicroVM"),
                );
            self.inner.unary(req, path, codec).await
        }
        pub async fn delete_micro_vm(
            &mut self,
            request: impl tonic::IntoRequest<super::DeleteMicroVmRequest>,
        ) -> std::result::Result<tonic::Response<()>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/microvm.services.api.v1alpha1.MicroVM/DeleteMicroVM",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new("microvm.services.api.v1alpha1.MicroVM", "DeleteMicroVM"),
                );
            self.inner.unary(req, path, codec).await
        }
        pub async fn get_micro_vm(
            &mut self,
            request: impl tonic::IntoRequest<super::GetMicroVmRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetMicroVmResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/microvm.services.api.v1alpha1.MicroVM/GetMicroVM",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new("microvm.services.api.v1alpha1.MicroVM", "GetMicroVM"),
                );
            self.inner.unary(req, path, codec).await
        }
        pub async fn list_micro_v_ms(
            &mut self,
            request: impl tonic::IntoRequest<super::ListMicroVMsRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ListMicroVMsResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/microvm.services.api.v1alpha1.MicroVM/ListMicroVMs",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new("microvm.services.api.v1alpha1.MicroVM", "ListMicroVMs"),
                );
            self.inner.unary(req, path, codec).await
        }
        pub async fn list_micro_v_ms_stream(
            &mut self,
            request: impl tonic::IntoRequest<super::ListMicroVMsRequest>,
        ) -> std::result::Result<
            tonic::Response<tonic::codec::Streaming<super::ListMessage>>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/microvm.services.api.v1alpha1.MicroVM/ListMicroVMsStream",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "microvm.services.api.v1alpha1.MicroVM",
                        "ListMicroVMsStream",
                    ),
                );
            self.inner.server_streaming(req, path, codec).await
        }
    }
}
