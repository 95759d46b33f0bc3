use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use super::{Axis, DetectorKind, FlagCode, Severity};
use crate::error::{FrameError, Result};

const BUNDLED_SPEC: &str = include_str!("../../reference/frame_spec.yaml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisInfo {
    pub id: Axis,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub tier: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlagDefinition {
    pub code: FlagCode,
    pub severity: Severity,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorInfo {
    pub id: DetectorKind,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub axes: Vec<Axis>,
}

/// Flag entries are read with a free-form code so that retired codes in an
/// older bundle do not reject the whole file.
#[derive(Debug, Deserialize)]
struct RawFlag {
    code: String,
    severity: Severity,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct RawBundle {
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    axes: Vec<AxisInfo>,
    #[serde(default)]
    flags: Vec<RawFlag>,
    #[serde(default)]
    detectors: Vec<DetectorInfo>,
}

/// Validated, immutable reference data.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceSpec {
    pub version: String,
    pub axes: BTreeMap<Axis, AxisInfo>,
    pub flags: BTreeMap<FlagCode, FlagDefinition>,
    pub detectors: Vec<DetectorInfo>,
}

impl ReferenceSpec {
    /// The bundle compiled into the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_yaml_str(BUNDLED_SPEC)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let raw: RawBundle = serde_yaml::from_str(yaml)?;

        if raw.axes.is_empty() {
            return Err(FrameError::InvalidSpec("no axes declared".to_string()));
        }

        let axes: BTreeMap<Axis, AxisInfo> = raw.axes.into_iter().map(|a| (a.id, a)).collect();
        let missing: Vec<&str> = Axis::KEY
            .iter()
            .filter(|a| !axes.contains_key(a))
            .map(|a| a.id())
            .collect();
        if !missing.is_empty() {
            return Err(FrameError::InvalidSpec(format!(
                "missing key axes: {}",
                missing.join(", ")
            )));
        }

        let mut flags = BTreeMap::new();
        for raw_flag in raw.flags {
            match raw_flag.code.parse::<FlagCode>() {
                Ok(code) => {
                    flags.insert(
                        code,
                        FlagDefinition {
                            code,
                            severity: raw_flag.severity,
                            description: raw_flag.description,
                        },
                    );
                }
                Err(e) => warn!("Ignoring reference flag entry: {}", e),
            }
        }

        Ok(Self {
            version: raw.version.unwrap_or_else(|| "unversioned".to_string()),
            axes,
            flags,
            detectors: raw.detectors,
        })
    }

    pub fn flag(&self, code: FlagCode) -> Option<&FlagDefinition> {
        self.flags.get(&code)
    }

    pub fn detector(&self, kind: DetectorKind) -> Option<&DetectorInfo> {
        self.detectors.iter().find(|d| d.id == kind)
    }
}
