//! System inventory adapter
//!
//! Host hardware and OS details gathered through sysinfo, plus DMI
//! vendor strings on Linux.

use crate::error::ServiceResult;
use async_trait::async_trait;
use std::path::Path;
use sysinfo::{Disks, System};
use tracing::debug;

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;
const DMI_DIR: &str = "/sys/class/dmi/id";

/// Snapshot of the host
#[derive(Debug, Clone, PartialEq)]
pub struct SystemInventory {
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub processor: Option<String>,
    pub os: String,
    pub runtime_version: String,
    pub total_ram_bytes: u64,
    /// Capacity of each fixed (non-removable) volume
    pub fixed_storage_bytes: Vec<u64>,
}

impl SystemInventory {
    /// One spoken description of the host
    pub fn describe(&self) -> String {
        let machine = match (&self.manufacturer, &self.model) {
            (Some(vendor), Some(model)) => format!("a {} {}", vendor, model),
            (Some(one), None) | (None, Some(one)) => format!("a {}", one),
            (None, None) => "an unidentified machine".to_string(),
        };
        let processor = self
            .processor
            .as_deref()
            .unwrap_or("unknown processor");
        let storage = if self.fixed_storage_bytes.is_empty() {
            "none detected".to_string()
        } else {
            self.fixed_storage_bytes
                .iter()
                .map(|b| format!("{:.2} GB", *b as f64 / GIB))
                .collect::<Vec<_>>()
                .join(", ")
        };

        format!(
            "I am running on {}. The Processor is an {}. Available RAM is {:.2} GB. \
             Storage details: {}. The Operating System is {}, and the assistant version is {}.",
            machine,
            processor,
            self.total_ram_bytes as f64 / GIB,
            storage,
            self.os,
            self.runtime_version
        )
    }
}

#[async_trait]
pub trait InventoryProbe: Send + Sync {
    async fn fetch(&self) -> ServiceResult<SystemInventory>;
}

/// Probe backed by sysinfo
#[derive(Debug, Clone, Copy, Default)]
pub struct SysinfoProbe;

#[async_trait]
impl InventoryProbe for SysinfoProbe {
    async fn fetch(&self) -> ServiceResult<SystemInventory> {
        let sys = System::new_all();

        let processor = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty());

        let disks = Disks::new_with_refreshed_list();
        let fixed_storage_bytes = disks
            .list()
            .iter()
            .filter(|disk| !disk.is_removable() && disk.total_space() > 0)
            .map(|disk| disk.total_space())
            .collect();

        let os = System::long_os_version()
            .or_else(System::name)
            .unwrap_or_else(|| std::env::consts::OS.to_string());
        let os = match System::kernel_version() {
            Some(kernel) => format!("{} with kernel {}", os, kernel),
            None => os,
        };

        let inventory = SystemInventory {
            manufacturer: read_dmi(Path::new(DMI_DIR), "sys_vendor"),
            model: read_dmi(Path::new(DMI_DIR), "product_name"),
            processor,
            os,
            runtime_version: env!("CARGO_PKG_VERSION").to_string(),
            total_ram_bytes: sys.total_memory(),
            fixed_storage_bytes,
        };
        debug!("🖥️ Inventory: {:?}", inventory);
        Ok(inventory)
    }
}

/// Read one DMI attribute, ignoring placeholder vendor strings
fn read_dmi(dir: &Path, attribute: &str) -> Option<String> {
    let value = std::fs::read_to_string(dir.join(attribute)).ok()?;
    let value = value.trim();
    let placeholder = value.is_empty()
        || value.eq_ignore_ascii_case("to be filled by o.e.m.")
        || value.eq_ignore_ascii_case("system product name")
        || value.eq_ignore_ascii_case("default string");
    (!placeholder).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SystemInventory {
        SystemInventory {
            manufacturer: Some("LENOVO".into()),
            model: Some("ThinkPad X1".into()),
            processor: Some("Intel(R) Core(TM) i7-8650U CPU @ 1.90GHz".into()),
            os: "Linux 6.1 Debian".into(),
            runtime_version: "0.1.0".into(),
            total_ram_bytes: 16 * 1024 * 1024 * 1024,
            fixed_storage_bytes: vec![512 * 1024 * 1024 * 1024, 1024 * 1024 * 1024],
        }
    }

    #[test]
    fn test_describe_sentence() {
        let text = sample().describe();
        assert!(text.starts_with("I am running on a LENOVO ThinkPad X1."));
        assert!(text.contains("Available RAM is 16.00 GB."));
        assert!(text.contains("Storage details: 512.00 GB, 1.00 GB."));
        assert!(text.contains("The Operating System is Linux 6.1 Debian"));
    }

    #[test]
    fn test_describe_unknown_hardware() {
        let mut inv = sample();
        inv.manufacturer = None;
        inv.model = None;
        inv.fixed_storage_bytes.clear();
        let text = inv.describe();
        assert!(text.starts_with("I am running on an unidentified machine."));
        assert!(text.contains("Storage details: none detected."));
    }

    #[test]
    fn test_read_dmi_filters_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("sys_vendor"), "Dell Inc.\n").unwrap();
        std::fs::write(dir.path().join("product_name"), "To be filled by O.E.M.\n").unwrap();

        assert_eq!(read_dmi(dir.path(), "sys_vendor").as_deref(), Some("Dell Inc."));
        assert_eq!(read_dmi(dir.path(), "product_name"), None);
        assert_eq!(read_dmi(dir.path(), "missing"), None);
    }

    #[tokio::test]
    async fn test_sysinfo_reports_memory() {
        let inv = SysinfoProbe.fetch().await.unwrap();
        assert!(inv.total_ram_bytes > 0);
        assert!(!inv.os.is_empty());
    }
}
