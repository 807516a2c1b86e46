//! Declarative microVM specification.
//!
//! These types describe a machine the way an operator writes it: volumes and
//! kernels may be given either as explicit container image references or as
//! version strings that expand to well-known defaults. Resolution into the
//! wire format happens in `mvmkit-vm-manager`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Full declarative specification of a microVM.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VmSpec {
    /// Optional identifier of the provider that should run the microVM.
    pub provider: String,
    /// Number of vCPUs
    pub vcpu: i64,
    /// Memory in MB
    pub memory_mb: i64,
    /// Explicit root volume. Ignored when `os_version` is set.
    pub root_volume: Volume,
    /// OS image version used to derive the root volume.
    pub os_version: String,
    /// Explicit kernel. Ignored when `kernel_version` is set.
    pub kernel: ContainerFileSource,
    /// Kernel version used to derive the kernel and its modules volume.
    pub kernel_version: String,
    /// Kernel command line key/value pairs.
    pub kernel_cmdline: HashMap<String, String>,
    /// Volumes attached in addition to the root volume, in attach order.
    pub additional_volumes: Vec<Volume>,
    /// Optional initial ramdisk.
    pub initrd: Option<ContainerFileSource>,
    /// Guest network interfaces, in device order.
    pub network_interfaces: Vec<NetworkInterface>,
}

/// A file inside a container image (kernel binary, initrd).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerFileSource {
    /// Container image reference
    pub image: String,
    /// Path of the file inside the image
    pub filename: String,
}

impl ContainerFileSource {
    /// Create a new source from an image and a filename within it.
    pub fn new(image: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            filename: filename.into(),
        }
    }

    /// Both the image and the filename are set.
    pub fn is_configured(&self) -> bool {
        !self.image.is_empty() && !self.filename.is_empty()
    }
}

/// A volume backed by a container image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Volume {
    /// Volume identifier, unique within the microVM
    pub id: String,
    /// Container image reference
    pub image: String,
    /// Attach the volume read-only
    pub read_only: bool,
    /// Guest mount point (empty = not mounted by the guest agent)
    pub mount_point: String,
}

impl Volume {
    /// Create a writable volume with no mount point.
    pub fn new(id: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image: image.into(),
            ..Default::default()
        }
    }

    /// Mark the volume read-only.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Set the guest mount point.
    pub fn with_mount_point(mut self, mount_point: impl Into<String>) -> Self {
        self.mount_point = mount_point.into();
        self
    }

    /// Both the image and the id are set.
    pub fn is_configured(&self) -> bool {
        !self.image.is_empty() && !self.id.is_empty()
    }
}

/// Kind of host device backing a guest interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IfaceType {
    /// macvtap device on the host
    Macvtap,
    /// tap device on the host
    Tap,
    /// Anything else. Left at the wire default when translated.
    #[default]
    #[serde(other)]
    Unsupported,
}

/// A guest network interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkInterface {
    /// Device name inside the guest (e.g. `eth1`)
    pub guest_device_name: String,
    /// Guest MAC address. Empty means one is allocated at create time.
    #[serde(rename = "guestMAC")]
    pub guest_mac: String,
    /// Host device type
    #[serde(rename = "type")]
    pub kind: IfaceType,
    /// Static address in CIDR form. Empty means DHCP.
    pub address: String,
}

impl NetworkInterface {
    /// Create an interface with the given guest device name and type.
    pub fn new(guest_device_name: impl Into<String>, kind: IfaceType) -> Self {
        Self {
            guest_device_name: guest_device_name.into(),
            kind,
            ..Default::default()
        }
    }

    /// Set a static address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the guest MAC address.
    pub fn with_mac(mut self, mac: impl Into<String>) -> Self {
        self.guest_mac = mac.into();
        self
    }
}

/// SSH keys to install for a guest user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SshPublicKey {
    /// Guest user name
    pub user: String,
    /// Authorized keys in OpenSSH format
    pub authorized_keys: Vec<String>,
}

impl SshPublicKey {
    /// Create a key entry for a user.
    pub fn new<I, K>(user: impl Into<String>, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            user: user.into(),
            authorized_keys: keys.into_iter().map(Into::into).collect(),
        }
    }
}
