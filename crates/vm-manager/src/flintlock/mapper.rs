//! Type conversion between the declarative spec and Flintlock gRPC types.
//!
//! Translation runs as an ordered list of steps over a mutable
//! `MicroVmSpec`. Within the kernel and root volume steps the version
//! override is applied after the explicit value, so a version string always
//! wins.

use super::grpc::flintlock::types as flintlock;
use super::grpc::flintlock::types::network_interface::IfaceType as WireIfaceType;
use crate::scope::Scope;
use mvmkit_common::{IfaceType, VmSpec};
use std::collections::HashMap;

/// Image holding kernel binaries, by kernel version.
pub const DEFAULT_KERNEL_BIN_IMAGE: &str = "ghcr.io/weaveworks-liquidmetal/kernel-bin";
/// Image holding kernel modules, by kernel version.
pub const DEFAULT_KERNEL_MODULES_IMAGE: &str = "ghcr.io/weaveworks-liquidmetal/kernel-modules";
/// Image holding the root filesystem, by OS version.
pub const DEFAULT_OS_IMAGE: &str = "ghcr.io/weaveworks-liquidmetal/capmvm-k8s-os";
/// Kernel path inside the kernel-bin image.
pub const KERNEL_FILENAME: &str = "boot/vmlinux";
/// Id of the volume carrying kernel modules.
pub const MODULES_VOLUME_ID: &str = "modules";
/// Id of the root volume when derived from an OS version.
pub const ROOT_VOLUME_ID: &str = "root";

type Step = fn(&mut flintlock::MicroVmSpec, &VmSpec);

const STEPS: &[Step] = &[
    apply_provider,
    apply_resources,
    apply_initrd,
    apply_interfaces,
    apply_additional_volumes,
    apply_kernel,
    apply_root_volume,
];

/// Kernel image for a kernel version.
pub fn kernel_bin_image(version: &str) -> String {
    format!("{DEFAULT_KERNEL_BIN_IMAGE}:{version}")
}

/// Kernel modules image for a kernel version.
pub fn kernel_modules_image(version: &str) -> String {
    format!("{DEFAULT_KERNEL_MODULES_IMAGE}:{version}")
}

/// Guest mount point of the kernel modules volume.
pub fn modules_mount_point(version: &str) -> String {
    format!("/lib/modules/{version}")
}

/// Root filesystem image for an OS version.
pub fn os_image(version: &str) -> String {
    format!("{DEFAULT_OS_IMAGE}:{version}")
}

/// Build the wire spec for the machine described by a scope.
pub fn to_microvm_spec<S: Scope + ?Sized>(scope: &S) -> flintlock::MicroVmSpec {
    translate(
        scope.microvm_spec(),
        scope.name(),
        scope.namespace(),
        scope.labels(),
    )
}

/// Translate a declarative spec into a Flintlock `MicroVmSpec`.
///
/// Never fails: references are not validated here, the remote API rejects
/// what it cannot use. The returned spec has an empty metadata map.
pub fn translate(
    spec: &VmSpec,
    id: &str,
    namespace: &str,
    labels: HashMap<String, String>,
) -> flintlock::MicroVmSpec {
    let mut api = flintlock::MicroVmSpec {
        id: id.to_string(),
        namespace: namespace.to_string(),
        labels,
        metadata: HashMap::new(),
        ..Default::default()
    };

    for step in STEPS {
        step(&mut api, spec);
    }

    api
}

fn apply_provider(api: &mut flintlock::MicroVmSpec, spec: &VmSpec) {
    if !spec.provider.is_empty() {
        api.provider = Some(spec.provider.clone());
    }
}

fn apply_resources(api: &mut flintlock::MicroVmSpec, spec: &VmSpec) {
    api.vcpu = narrow("vcpu", spec.vcpu);
    api.memory_in_mb = narrow("memory_mb", spec.memory_mb);
}

// Saturates instead of wrapping so an oversized request stays oversized.
fn narrow(field: &'static str, value: i64) -> i32 {
    i32::try_from(value).unwrap_or_else(|_| {
        tracing::warn!(field, value, "value does not fit in 32 bits, saturating");
        if value.is_negative() {
            i32::MIN
        } else {
            i32::MAX
        }
    })
}

fn apply_initrd(api: &mut flintlock::MicroVmSpec, spec: &VmSpec) {
    if let Some(initrd) = &spec.initrd {
        api.initrd = Some(flintlock::Initrd {
            image: initrd.image.clone(),
            filename: Some(initrd.filename.clone()),
        });
    }
}

fn apply_interfaces(api: &mut flintlock::MicroVmSpec, spec: &VmSpec) {
    api.interfaces = spec
        .network_interfaces
        .iter()
        .map(|iface| {
            let mut api_iface = flintlock::NetworkInterface {
                device_id: iface.guest_device_name.clone(),
                guest_mac: Some(iface.guest_mac.clone()),
                ..Default::default()
            };

            if !iface.address.is_empty() {
                api_iface.address = Some(flintlock::StaticAddress {
                    address: iface.address.clone(),
                    ..Default::default()
                });
            }

            match iface.kind {
                IfaceType::Macvtap => api_iface.r#type = WireIfaceType::Macvtap as i32,
                IfaceType::Tap => api_iface.r#type = WireIfaceType::Tap as i32,
                IfaceType::Unsupported => {}
            }

            api_iface
        })
        .collect();
}

fn apply_additional_volumes(api: &mut flintlock::MicroVmSpec, spec: &VmSpec) {
    api.additional_volumes = spec
        .additional_volumes
        .iter()
        .map(|volume| {
            let mut api_volume = container_volume(&volume.id, &volume.image, volume.read_only);
            if !volume.mount_point.is_empty() {
                api_volume.mount_point = Some(volume.mount_point.clone());
            }
            api_volume
        })
        .collect();
}

fn apply_kernel(api: &mut flintlock::MicroVmSpec, spec: &VmSpec) {
    let mut kernel = flintlock::Kernel {
        cmdline: spec.kernel_cmdline.clone(),
        add_network_config: true,
        ..Default::default()
    };

    if spec.kernel.is_configured() {
        kernel.image = spec.kernel.image.clone();
        kernel.filename = Some(spec.kernel.filename.clone());
    }

    if !spec.kernel_version.is_empty() {
        let version = &spec.kernel_version;

        kernel.image = kernel_bin_image(version);
        kernel.filename = Some(KERNEL_FILENAME.to_string());

        let mut modules = container_volume(MODULES_VOLUME_ID, &kernel_modules_image(version), false);
        modules.mount_point = Some(modules_mount_point(version));
        api.additional_volumes.push(modules);
    }

    api.kernel = Some(kernel);
}

fn apply_root_volume(api: &mut flintlock::MicroVmSpec, spec: &VmSpec) {
    if spec.root_volume.is_configured() {
        api.root_volume = Some(container_volume(
            &spec.root_volume.id,
            &spec.root_volume.image,
            spec.root_volume.read_only,
        ));
    }

    if !spec.os_version.is_empty() {
        api.root_volume = Some(container_volume(
            ROOT_VOLUME_ID,
            &os_image(&spec.os_version),
            false,
        ));
    }
}

fn container_volume(id: &str, image: &str, read_only: bool) -> flintlock::Volume {
    flintlock::Volume {
        id: id.to_string(),
        is_read_only: read_only,
        source: Some(flintlock::VolumeSource {
            container_source: Some(image.to_string()),
        }),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mvmkit_common::{ContainerFileSource, NetworkInterface, Volume};

    const MACHINE_NAME: &str = "foo";
    const NAMESPACE: &str = "baz";

    fn convert(spec: VmSpec) -> flintlock::MicroVmSpec {
        translate(
            &spec,
            MACHINE_NAME,
            NAMESPACE,
            HashMap::from([("key1".to_string(), "value1".to_string())]),
        )
    }

    fn source(volume: &flintlock::Volume) -> &str {
        volume
            .source
            .as_ref()
            .and_then(|s| s.container_source.as_deref())
            .unwrap()
    }

    #[test]
    fn test_namespace_name() {
        let converted = translate(&VmSpec::default(), "foo", "baz", HashMap::new());

        assert_eq!(converted.id, "foo");
        assert_eq!(converted.namespace, "baz");
        assert!(converted.interfaces.is_empty());
        assert!(converted.additional_volumes.is_empty());
        assert!(converted.metadata.is_empty());
        assert!(converted.root_volume.is_none());
        assert!(converted.initrd.is_none());
        assert!(converted.provider.is_none());
    }

    #[test]
    fn test_labels() {
        let converted = convert(VmSpec::default());
        assert_eq!(converted.labels.get("key1"), Some(&"value1".to_string()));
    }

    #[test]
    fn test_provider() {
        let converted = convert(VmSpec {
            provider: "firecracker".to_string(),
            ..Default::default()
        });
        assert_eq!(converted.provider.as_deref(), Some("firecracker"));
    }

    #[test]
    fn test_resources() {
        let converted = convert(VmSpec {
            vcpu: 1,
            memory_mb: 2,
            ..Default::default()
        });
        assert_eq!(converted.vcpu, 1);
        assert_eq!(converted.memory_in_mb, 2);
    }

    #[test]
    fn test_resources_saturate() {
        let converted = convert(VmSpec {
            vcpu: i64::from(i32::MAX) + 1,
            memory_mb: i64::MIN,
            ..Default::default()
        });
        assert_eq!(converted.vcpu, i32::MAX);
        assert_eq!(converted.memory_in_mb, i32::MIN);
    }

    #[test]
    fn test_initrd() {
        let converted = convert(VmSpec {
            initrd: Some(ContainerFileSource::new("value1", "value2")),
            ..Default::default()
        });

        let initrd = converted.initrd.unwrap();
        assert_eq!(initrd.image, "value1");
        assert_eq!(initrd.filename.as_deref(), Some("value2"));
    }

    #[test]
    fn test_network_interfaces() {
        let converted = convert(VmSpec {
            network_interfaces: vec![
                NetworkInterface::new("value1", IfaceType::Macvtap).with_mac("value2"),
                NetworkInterface::new("value3", IfaceType::Tap).with_mac("value4"),
            ],
            ..Default::default()
        });

        assert_eq!(converted.interfaces.len(), 2);
        assert_eq!(converted.interfaces[0].device_id, "value1");
        assert_eq!(converted.interfaces[0].guest_mac.as_deref(), Some("value2"));
        assert_eq!(converted.interfaces[0].r#type, WireIfaceType::Macvtap as i32);
        assert_eq!(converted.interfaces[1].device_id, "value3");
        assert_eq!(converted.interfaces[1].guest_mac.as_deref(), Some("value4"));
        assert_eq!(converted.interfaces[1].r#type, WireIfaceType::Tap as i32);
    }

    #[test]
    fn test_network_interfaces_static_address() {
        let converted = convert(VmSpec {
            network_interfaces: vec![
                NetworkInterface::new("eth1", IfaceType::Macvtap).with_address("10.0.0.5"),
                NetworkInterface::new("eth2", IfaceType::Tap),
            ],
            ..Default::default()
        });

        let first = &converted.interfaces[0];
        assert_eq!(first.r#type, WireIfaceType::Macvtap as i32);
        assert_eq!(first.address.as_ref().unwrap().address, "10.0.0.5");

        let second = &converted.interfaces[1];
        assert_eq!(second.r#type, WireIfaceType::Tap as i32);
        assert!(second.address.is_none());
        assert_eq!(second.guest_mac.as_deref(), Some(""));
    }

    #[test]
    fn test_unsupported_interface_type_left_default() {
        let converted = convert(VmSpec {
            network_interfaces: vec![NetworkInterface::new("eth0", IfaceType::Unsupported)],
            ..Default::default()
        });

        assert_eq!(
            converted.interfaces[0].r#type,
            flintlock::NetworkInterface::default().r#type
        );
    }

    #[test]
    fn test_additional_volumes() {
        let converted = convert(VmSpec {
            additional_volumes: vec![
                Volume::new("value1", "value2"),
                Volume::new("value3", "value4").read_only(),
            ],
            ..Default::default()
        });

        assert_eq!(converted.additional_volumes.len(), 2);
        assert_eq!(converted.additional_volumes[0].id, "value1");
        assert_eq!(source(&converted.additional_volumes[0]), "value2");
        assert!(!converted.additional_volumes[0].is_read_only);
        assert!(converted.additional_volumes[0].mount_point.is_none());
        assert_eq!(converted.additional_volumes[1].id, "value3");
        assert_eq!(source(&converted.additional_volumes[1]), "value4");
        assert!(converted.additional_volumes[1].is_read_only);
    }

    #[test]
    fn test_additional_volumes_mount_point() {
        let converted = convert(VmSpec {
            additional_volumes: vec![Volume::new("value1", "value2").with_mount_point("value3")],
            ..Default::default()
        });

        assert_eq!(converted.additional_volumes.len(), 1);
        assert_eq!(
            converted.additional_volumes[0].mount_point.as_deref(),
            Some("value3")
        );
    }

    #[test]
    fn test_order_preserved() {
        let volumes: Vec<Volume> = (0..5)
            .map(|i| Volume::new(format!("vol{i}"), format!("image{i}")))
            .collect();
        let interfaces: Vec<NetworkInterface> = (0..4)
            .map(|i| NetworkInterface::new(format!("eth{i}"), IfaceType::Tap))
            .collect();

        let converted = convert(VmSpec {
            additional_volumes: volumes.clone(),
            network_interfaces: interfaces.clone(),
            ..Default::default()
        });

        let ids: Vec<_> = converted.additional_volumes.iter().map(|v| v.id.clone()).collect();
        let expected: Vec<_> = volumes.iter().map(|v| v.id.clone()).collect();
        assert_eq!(ids, expected);

        let devices: Vec<_> = converted.interfaces.iter().map(|i| i.device_id.clone()).collect();
        let expected: Vec<_> = interfaces.iter().map(|i| i.guest_device_name.clone()).collect();
        assert_eq!(devices, expected);
    }

    #[test]
    fn test_kernel_configured() {
        let converted = convert(VmSpec {
            kernel: ContainerFileSource::new("value1", "value2"),
            kernel_cmdline: HashMap::from([("value3".to_string(), "value4".to_string())]),
            ..Default::default()
        });

        let kernel = converted.kernel.unwrap();
        assert_eq!(kernel.image, "value1");
        assert_eq!(kernel.filename.as_deref(), Some("value2"));
        assert!(kernel.add_network_config);
        assert_eq!(kernel.cmdline.get("value3"), Some(&"value4".to_string()));
        assert!(converted.additional_volumes.is_empty());
    }

    #[test]
    fn test_kernel_not_configured() {
        let converted = convert(VmSpec {
            kernel: ContainerFileSource::new("value1", ""),
            ..Default::default()
        });

        let kernel = converted.kernel.unwrap();
        assert!(kernel.image.is_empty());
        assert!(kernel.filename.is_none());
        assert!(kernel.add_network_config);
    }

    #[test]
    fn test_kernel_version() {
        let converted = convert(VmSpec {
            kernel_version: "5.10".to_string(),
            kernel_cmdline: HashMap::from([("k".to_string(), "v".to_string())]),
            ..Default::default()
        });

        let kernel = converted.kernel.unwrap();
        assert_eq!(kernel.image, "ghcr.io/weaveworks-liquidmetal/kernel-bin:5.10");
        assert_eq!(kernel.filename.as_deref(), Some(KERNEL_FILENAME));
        assert!(kernel.add_network_config);
        assert_eq!(kernel.cmdline.get("k"), Some(&"v".to_string()));

        assert_eq!(converted.additional_volumes.len(), 1);
        let modules = &converted.additional_volumes[0];
        assert_eq!(modules.id, MODULES_VOLUME_ID);
        assert_eq!(source(modules), "ghcr.io/weaveworks-liquidmetal/kernel-modules:5.10");
        assert!(!modules.is_read_only);
        assert_eq!(modules.mount_point.as_deref(), Some("/lib/modules/5.10"));
    }

    #[test]
    fn test_kernel_version_overrides_explicit_kernel() {
        let converted = convert(VmSpec {
            kernel: ContainerFileSource::new("my-kernel:latest", "vmlinuz"),
            kernel_version: "6.1".to_string(),
            additional_volumes: vec![Volume::new("data", "data-image")],
            ..Default::default()
        });

        let kernel = converted.kernel.unwrap();
        assert_eq!(kernel.image, kernel_bin_image("6.1"));
        assert_eq!(kernel.filename.as_deref(), Some(KERNEL_FILENAME));

        let modules: Vec<_> = converted
            .additional_volumes
            .iter()
            .filter(|v| v.id == MODULES_VOLUME_ID)
            .collect();
        assert_eq!(modules.len(), 1);
        assert_eq!(converted.additional_volumes.last().unwrap().id, MODULES_VOLUME_ID);
        assert_eq!(converted.additional_volumes[0].id, "data");
    }

    #[test]
    fn test_root_volume_configured() {
        let converted = convert(VmSpec {
            root_volume: Volume::new("value1", "value2"),
            ..Default::default()
        });

        let root = converted.root_volume.unwrap();
        assert_eq!(root.id, "value1");
        assert_eq!(source(&root), "value2");
        assert!(!root.is_read_only);
    }

    #[test]
    fn test_root_volume_os_version() {
        let converted = convert(VmSpec {
            os_version: "value1".to_string(),
            ..Default::default()
        });

        let root = converted.root_volume.unwrap();
        assert_eq!(root.id, ROOT_VOLUME_ID);
        assert_eq!(source(&root), os_image("value1"));
        assert!(!root.is_read_only);
    }

    #[test]
    fn test_os_version_overrides_explicit_root() {
        let converted = convert(VmSpec {
            root_volume: Volume::new("custom-root", "my-os:1.0").read_only(),
            os_version: "22.04".to_string(),
            ..Default::default()
        });

        let root = converted.root_volume.unwrap();
        assert_eq!(root.id, ROOT_VOLUME_ID);
        assert_eq!(
            source(&root),
            "ghcr.io/weaveworks-liquidmetal/capmvm-k8s-os:22.04"
        );
        assert!(!root.is_read_only);
    }

    #[test]
    fn test_root_volume_not_configured() {
        for root_volume in [Volume::new("", "image"), Volume::new("root", ""), Volume::default()] {
            let converted = convert(VmSpec {
                root_volume,
                ..Default::default()
            });
            assert!(converted.root_volume.is_none());
        }
    }
}
