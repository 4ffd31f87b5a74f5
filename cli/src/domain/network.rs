//! Concrete network interfaces for managed machines.

use serde::{Deserialize, Serialize};

use crate::domain::machine::NetworkInterface;

/// A VirtualBox internal network attached as an extra adapter.
///
/// Vagrant's guest auto-configuration is disabled; the machine's provisioning
/// scripts assign the address with `ip a add` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalNetwork {
    /// Address with prefix length, e.g. `"10.11.12.13/24"`.
    pub address: String,
    /// Name of the VirtualBox internal network to join.
    pub network: String,
}

impl InternalNetwork {
    #[must_use]
    pub fn new(address: impl Into<String>, network: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            network: network.into(),
        }
    }

    /// Address without the `/prefix` suffix, as Vagrant's `ip:` option wants it.
    #[must_use]
    pub fn host_address(&self) -> &str {
        self.address
            .split_once('/')
            .map_or(self.address.as_str(), |(host, _)| host)
    }
}

impl NetworkInterface for InternalNetwork {
    fn address(&self) -> &str {
        &self.address
    }

    fn config_lines(&self, index: usize, machine: &str) -> String {
        // VirtualBox adapters are 1-based and adapter 1 is the NAT interface.
        let adapter = index + 1;
        format!(
            "    {machine}.vm.network :private_network, ip: \"{}\", \
             virtualbox__intnet: \"{}\", adapter: {adapter}, auto_config: false\n",
            self.host_address(),
            self.network,
        )
    }
}
