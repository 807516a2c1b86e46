// @generated
// This file is @generated by prost-build.
/// MicroVM represents a microvm machine that is created via a provider.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MicroVm {
    #[prost(int32, tag = "1")]
    pub version: i32,
    /// Spec is the specification of the microvm.
    #[prost(message, optional, tag = "2")]
    pub spec: ::core::option::Option<MicroVmSpec>,
    /// Status is the runtime status of the microvm.
    #[prost(message, optional, tag = "3")]
    pub status: ::core::option::Option<MicroVmStatus>,
}
/// MicroVMSpec represents the specification for a microvm.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MicroVmSpec {
    /// ID is the identifier of the microvm.
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    /// Namespace is the name of the namespace the microvm belongs to.
    #[prost(string, tag = "2")]
    pub namespace: ::prost::alloc::string::String,
    /// Labels allows you to include extra data for the microvms.
    #[prost(map = "string, string", tag = "3")]
    pub labels: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        ::prost::alloc::string::String,
    >,
    /// Vcpu specifies how many vcpu the machine will be allocated.
    #[prost(int32, tag = "4")]
    pub vcpu: i32,
    /// MemoryInMb is the amount of memory in megabytes that the machine will be allocated.
    #[prost(int32, tag = "5")]
    pub memory_in_mb: i32,
    /// Kernel is the details of the kernel to use.
    #[prost(message, optional, tag = "6")]
    pub kernel: ::core::option::Option<Kernel>,
    /// Initrd is the optional details of the initial ramdisk.
    #[prost(message, optional, tag = "7")]
    pub initrd: ::core::option::Option<Initrd>,
    /// RootVolume specifies the root volume mount for the MicroVM.
    #[prost(message, optional, tag = "8")]
    pub root_volume: ::core::option::Option<Volume>,
    /// AdditionalVolumes specifies the volumes to be attached to the microvm.
    #[prost(message, repeated, tag = "9")]
    pub additional_volumes: ::prost::alloc::vec::Vec<Volume>,
    /// Interfaces specifies the network interfaces to be attached to the microvm.
    #[prost(message, repeated, tag = "10")]
    pub interfaces: ::prost::alloc::vec::Vec<NetworkInterface>,
    /// Metadata allows you to specify data to be added to the metadata service.
    #[prost(map = "string, string", tag = "11")]
    pub metadata: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        ::prost::alloc::string::String,
    >,
    #[prost(message, optional, tag = "12")]
    pub created_at: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "13")]
    pub updated_at: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "14")]
    pub deleted_at: ::core::option::Option<::prost_types::Timestamp>,
    /// UID is a globally unique identifier of the microvm.
    #[prost(string, optional, tag = "15")]
    pub uid: ::core::option::Option<::prost::alloc::string::String>,
    /// Provider allows you to specify the name of the microvm provider to use.
    #[prost(string, optional, tag = "16")]
    pub provider: ::core::option::Option<::prost::alloc::string::String>,
}
/// Kernel represents the details of a kernel.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Kernel {
    /// Image is the container image to use.
    #[prost(string, tag = "1")]
    pub image: ::prost::alloc::string::String,
    /// Cmdline is the additional kernel command line args.
    #[prost(map = "string, string", tag = "2")]
    pub cmdline: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        ::prost::alloc::string::String,
    >,
    /// Filename is used to specify the name of the kernel file in the Image.
    #[prost(string, optional, tag = "3")]
    pub filename: ::core::option::Option<::prost::alloc::string::String>,
    /// AddNetworkConfig if set to true indicates that the network-config kernel argument should be generated.
    #[prost(bool, tag = "4")]
    pub add_network_config: bool,
}
/// Initrd represents the details of an initial ramdisk.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Initrd {
    /// Image is the container image to use.
    #[prost(string, tag = "1")]
    pub image: ::prost::alloc::string::String,
    /// Filename is used to specify the name of the initrd file in the Image.
    #[prost(string, optional, tag = "2")]
    pub filename: ::core::option::Option<::prost::alloc::string::String>,
}
/// NetworkInterface represents a network interface for the microvm.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NetworkInterface {
    /// DeviceID is the ID of the interface in the guest.
    #[prost(string, tag = "1")]
    pub device_id: ::prost::alloc::string::String,
    /// Type is the type of interface to create.
    #[prost(enumeration = "network_interface::IfaceType", tag = "2")]
    pub r#type: i32,
    /// GuestMAC allows the specifying of a specific MAC address to use for the interface.
    #[prost(string, optional, tag = "3")]
    pub guest_mac: ::core::option::Option<::prost::alloc::string::String>,
    /// Address is an optional static IP address to assign to this interface.
    #[prost(message, optional, tag = "4")]
    pub address: ::core::option::Option<StaticAddress>,
}
/// Nested message and enum types in `NetworkInterface`.
pub mod network_interface {
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration
    )]
    #[repr(i32)]
    pub enum IfaceType {
        /// MACVTAP represents a MACVTAP interface.
        Macvtap = 0,
        /// TAP represents a TAP interface.
        Tap = 1,
        /// UNSUPPORTED is a fallback for types the host cannot create.
        Unsupported = 2,
    }
    impl IfaceType {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::Macvtap => "MACVTAP",
                Self::Tap => "TAP",
                Self::Unsupported => "UNSUPPORTED",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "MACVTAP" => Some(Self::Macvtap),
                "TAP" => Some(Self::Tap),
                "UNSUPPORTED" => Some(Self::Unsupported),
                _ => None,
            }
        }
    }
}
/// StaticAddress represents a static IPv4 or IPv6 address.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StaticAddress {
    /// Address is the static IP address (IPv4 or IPv6) to assign to this interface.
    #[prost(string, tag = "1")]
    pub address: ::prost::alloc::string::String,
    /// Gateway is used to specify the gateway address.
    #[prost(string, optional, tag = "2")]
    pub gateway: ::core::option::Option<::prost::alloc::string::String>,
    /// Nameservers allows you to specify nameservers for the interface.
    #[prost(string, repeated, tag = "3")]
    pub nameservers: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
/// Volume represents a volume to be attached to a microvm machine.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Volume {
    /// ID is the uinique identifier of the volume.
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    /// IsReadOnly specifies that the volume is to be mounted readonly.
    #[prost(bool, tag = "2")]
    pub is_read_only: bool,
    /// MountPoint allows you to optionally specify a mount point for the volume.
    #[prost(string, optional, tag = "3")]
    pub mount_point: ::core::option::Option<::prost::alloc::string::String>,
    /// Source is where the volume will be sourced from.
    #[prost(message, optional, tag = "4")]
    pub source: ::core::option::Option<VolumeSource>,
    /// PartitionID is the uuid of the boot partition.
    #[prost(string, optional, tag = "5")]
    pub partition_id: ::core::option::Option<::prost::alloc::string::String>,
    /// Size is the size to resize this volume to.
    #[prost(int32, optional, tag = "6")]
    pub size_in_mb: ::core::option::Option<i32>,
}
/// VolumeSource is the source of a volume.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VolumeSource {
    /// Container is used to specify a source of a volume as a OCI container.
    #[prost(string, optional, tag = "1")]
    pub container_source: ::core::option::Option<::prost::alloc::string::String>,
}
/// MicroVMStatus contains the runtime status of the microvm.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct MicroVmStatus {
    /// State stores information about the last known state of the vm and the spec.
    #[prost(enumeration = "micro_vm_status::MicroVmState", tag = "1")]
    pub state: i32,
    /// Retry is a counter about how many times we retried to reconcile.
    #[prost(int32, tag = "2")]
    pub retry: i32,
}
/// Nested message and enum types in `MicroVMStatus`.
pub mod micro_vm_status {
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration
    )]
    #[repr(i32)]
    pub enum MicroVmState {
        Pending = 0,
        Created = 1,
        Failed = 2,
        Deleting = 3,
    }
    impl MicroVmState {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Self::Pending => "PENDING",
                Self::Created => "CREATED",
                Self::Failed => "FAILED",
                Self::Deleting => "DELETING",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "PENDING" => Some(Self::Pending),
                "CREATED" => Some(Self::Created),
                "FAILED" => Some(Self::Failed),
                "DELETING" => Some(Self::Deleting),
                _ => None,
            }
        }
    }
}
