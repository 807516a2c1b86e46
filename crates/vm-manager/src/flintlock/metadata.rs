//! Cloud-init metadata for Flintlock's metadata service.
//!
//! Flintlock serves three documents to the guest, each stored base64
//! encoded in the microvm spec's metadata map:
//! - `user-data`: the caller's bootstrap data, untouched
//! - `vendor-data`: a `#cloud-config` document with hostname, users and boot fixes
//! - `meta-data`: instance metadata (local hostname, platform, host binding)

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use mvmkit_common::SshPublicKey;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Metadata key holding the caller's bootstrap data.
pub const USER_DATA_KEY: &str = "user-data";
/// Metadata key holding generated vendor data.
pub const VENDOR_DATA_KEY: &str = "vendor-data";
/// Metadata key holding generated instance metadata.
pub const META_DATA_KEY: &str = "meta-data";

/// Platform reported to cloud-init.
pub const PLATFORM_LIQUID_METAL: &str = "liquid_metal";

const CLOUD_INIT_HEADER: &str = "#cloud-config\n";
const FINAL_MESSAGE: &str = "The Liquid Metal booted system is good to go after $UPTIME seconds";
const RESOLV_CONF_FIX: &str = "ln -sf /run/systemd/resolve/stub-resolv.conf /etc/resolv.conf";

const LOCAL_HOSTNAME_KEY: &str = "local_hostname";
const PLATFORM_KEY: &str = "platform";
const VM_HOST_KEY: &str = "vm_host";

/// Cloud-config document sent as vendor data.
///
/// Run commands belong to the caller's user data, so only boot commands are
/// carried here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    /// Guest hostname, set to the machine name
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hostname: String,
    /// Users to create, each with its authorized keys
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<User>,
    /// Message cloud-init logs once boot completes
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub final_message: String,
    /// Commands run early on every boot
    #[serde(rename = "bootcmd", default, skip_serializing_if = "Vec::is_empty")]
    pub boot_commands: Vec<String>,
}

/// A guest user entry in a cloud-config document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login name
    pub name: String,
    /// Public keys allowed to log in as this user
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_authorized_keys: Vec<String>,
}

/// Instance metadata document (`meta-data`).
///
/// Serialized as a flat YAML map with keys in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceMetadata(BTreeMap<String, String>);

impl InstanceMetadata {
    /// An empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `local_hostname`.
    pub fn with_local_hostname(self, hostname: impl Into<String>) -> Self {
        self.with_key_value(LOCAL_HOSTNAME_KEY, hostname)
    }

    /// Set `platform`.
    pub fn with_platform(self, platform: impl Into<String>) -> Self {
        self.with_key_value(PLATFORM_KEY, platform)
    }

    /// Set an arbitrary key, replacing any previous value.
    pub fn with_key_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Look up a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

/// Encode the caller's bootstrap data verbatim.
pub fn user_data(raw: &str) -> String {
    STANDARD.encode(raw)
}

/// Build the vendor data cloud-config for a machine.
///
/// Users appear in the same order as `keys`.
pub fn vendor_data(hostname: &str, keys: &[SshPublicKey]) -> Result<String> {
    let document = UserData {
        hostname: hostname.to_string(),
        users: keys
            .iter()
            .map(|key| User {
                name: key.user.clone(),
                ssh_authorized_keys: key.authorized_keys.clone(),
            })
            .collect(),
        final_message: FINAL_MESSAGE.to_string(),
        // TODO: drop once the OS images link resolv.conf to the systemd stub themselves.
        boot_commands: vec![RESOLV_CONF_FIX.to_string()],
    };

    let yaml = serde_yaml::to_string(&document).map_err(|source| Error::Serialization {
        document: "vendor data",
        source,
    })?;

    Ok(STANDARD.encode(format!("{CLOUD_INIT_HEADER}{yaml}")))
}

/// Build the instance metadata binding a machine to the host running it.
pub fn instance_data(hostname: &str, host_id: &str) -> Result<String> {
    let document = InstanceMetadata::new()
        .with_local_hostname(hostname)
        .with_platform(PLATFORM_LIQUID_METAL)
        .with_key_value(VM_HOST_KEY, host_id);

    let yaml = serde_yaml::to_string(&document).map_err(|source| Error::Serialization {
        document: "instance metadata",
        source,
    })?;

    Ok(STANDARD.encode(yaml))
}

/// Produce all three metadata entries.
///
/// Either every entry is returned or none is.
pub fn generate(
    hostname: &str,
    raw_bootstrap_data: &str,
    keys: &[SshPublicKey],
    host_id: &str,
) -> Result<HashMap<String, String>> {
    let vendor = vendor_data(hostname, keys)?;
    let instance = instance_data(hostname, host_id)?;

    Ok(HashMap::from([
        (USER_DATA_KEY.to_string(), user_data(raw_bootstrap_data)),
        (VENDOR_DATA_KEY.to_string(), vendor),
        (META_DATA_KEY.to_string(), instance),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(value: &str) -> String {
        String::from_utf8(STANDARD.decode(value).unwrap()).unwrap()
    }

    #[test]
    fn test_user_data_verbatim() {
        let raw = "#!/bin/bash\necho hello\n";
        assert_eq!(decode(&user_data(raw)), raw);
        assert_eq!(user_data(""), "");
    }

    #[test]
    fn test_vendor_data() {
        let keys = vec![
            SshPublicKey::new("root", ["ssh-ed25519 AAAA root@host"]),
            SshPublicKey::new("ubuntu", ["ssh-rsa BBBB one", "ssh-rsa CCCC two"]),
        ];

        let decoded = decode(&vendor_data("mvm-0", &keys).unwrap());
        assert!(decoded.starts_with("#cloud-config\n"));

        let document: UserData = serde_yaml::from_str(&decoded).unwrap();
        assert_eq!(document.hostname, "mvm-0");
        assert_eq!(document.final_message, FINAL_MESSAGE);
        assert_eq!(document.boot_commands, vec![RESOLV_CONF_FIX.to_string()]);
        assert_eq!(document.users.len(), 2);
        assert_eq!(document.users[0].name, "root");
        assert_eq!(document.users[1].name, "ubuntu");
        assert_eq!(
            document.users[1].ssh_authorized_keys,
            vec!["ssh-rsa BBBB one".to_string(), "ssh-rsa CCCC two".to_string()]
        );
    }

    #[test]
    fn test_vendor_data_without_keys() {
        let decoded = decode(&vendor_data("mvm-0", &[]).unwrap());
        let document: UserData = serde_yaml::from_str(&decoded).unwrap();

        assert!(document.users.is_empty());
        assert!(!decoded.contains("users"));
    }

    #[test]
    fn test_vendor_data_leaves_runcmd_to_user_data() {
        let decoded = decode(&vendor_data("mvm-0", &[]).unwrap());
        let document: serde_yaml::Mapping = serde_yaml::from_str(&decoded).unwrap();

        assert!(!document.contains_key("runcmd"));
        assert!(document.contains_key("bootcmd"));
        assert!(document.contains_key("final_message"));
    }

    #[test]
    fn test_instance_data() {
        let decoded = decode(&instance_data("mvm-0", "host-a").unwrap());
        let document: InstanceMetadata = serde_yaml::from_str(&decoded).unwrap();

        assert_eq!(document.get("local_hostname"), Some("mvm-0"));
        assert_eq!(document.get("platform"), Some(PLATFORM_LIQUID_METAL));
        assert_eq!(document.get("vm_host"), Some("host-a"));
    }

    #[test]
    fn test_generate_keys() {
        let metadata = generate("mvm-0", "data", &[], "host-a").unwrap();

        assert_eq!(metadata.len(), 3);
        assert_eq!(decode(&metadata[USER_DATA_KEY]), "data");
        assert!(decode(&metadata[VENDOR_DATA_KEY]).starts_with("#cloud-config\n"));
        assert!(decode(&metadata[META_DATA_KEY]).contains("vm_host: host-a"));
    }
}
