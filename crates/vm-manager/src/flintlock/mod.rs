pub mod auth;
pub mod client;
pub mod connector;
pub mod mac;
pub mod mapper;
pub mod metadata;
pub mod service;
pub mod transport;

pub use client::{FlintlockClient, MicroVmApi};
pub use mac::MacAddress;
pub use service::MicroVmService;
pub use transport::Transport;

/// Generated gRPC code
pub mod grpc {
    pub mod flintlock {
        pub mod types {
            include!("generated/flintlock.types.rs");
        }
    }

    pub mod microvm {
        pub mod services {
            pub mod api {
                pub mod v1alpha1 {
                    include!("generated/microvm.services.api.v1alpha1.rs");
                }
            }
        }
    }
}
