use crate::error::{BfResult, BlockForgeError};
use crate::instance::Instance;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// One function entry as it appears in the instance description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawInstance {
    pub c: Vec<Vec<f64>>,
    pub s: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<usize>,
}

impl RawInstance {
    pub fn validate(&self) -> BfResult<Instance> {
        if let Some(n) = self.n {
            if n != self.s.len() {
                return Err(BlockForgeError::validation(format!(
                    "declared block count {} does not match {} sizes",
                    n,
                    self.s.len()
                )));
            }
        }
        Instance::new(self.c.clone(), self.s.clone())
    }
}

impl From<&Instance> for RawInstance {
    fn from(inst: &Instance) -> Self {
        Self {
            c: inst.call_rows(),
            s: inst.sizes().to_vec(),
            n: Some(inst.block_count()),
        }
    }
}

/// Function name -> profiling data. Names are kept sorted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceSet {
    functions: BTreeMap<String, RawInstance>,
}

impl InstanceSet {
    pub fn from_reader<R: Read>(reader: R) -> BfResult<Self> {
        let set: Self = serde_json::from_reader(reader)?;
        debug!("Parsed instance description with {} functions", set.len());
        Ok(set)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> BfResult<Self> {
        let path = path.as_ref();
        info!("📂 Loading instance: {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn insert(&mut self, name: impl Into<String>, instance: &Instance) {
        self.functions.insert(name.into(), RawInstance::from(instance));
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.functions.keys().cloned().collect()
    }

    /// Looks up and validates one function.
    pub fn get(&self, name: &str) -> BfResult<Instance> {
        let raw = self
            .functions
            .get(name)
            .ok_or_else(|| BlockForgeError::Lookup {
                name: name.to_string(),
                available: self.names(),
            })?;

        let inst = raw.validate().map_err(|e| match e {
            BlockForgeError::Validation(msg) => {
                BlockForgeError::Validation(format!("function '{}': {}", name, msg))
            }
            other => other,
        })?;

        debug!(
            "Function '{}': {} blocks, total size {}",
            name,
            inst.block_count(),
            inst.total_size()
        );
        Ok(inst)
    }

    /// Every function in name order, each validated on its own.
    pub fn iter(&self) -> impl Iterator<Item = (&str, BfResult<Instance>)> + '_ {
        self.functions
            .iter()
            .map(|(name, raw)| (name.as_str(), raw.validate()))
    }
}
