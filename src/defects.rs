//! Defect-type catalog.
//!
//! The catalog is an ordered list of defect names offered at step 2 of the
//! workflow. Values are opaque strings to the workflow itself; order is
//! preserved because the UI lays the tiles out in catalog order.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefectCatalog {
    pub defects: Vec<String>,
}

impl Default for DefectCatalog {
    fn default() -> Self {
        Self {
            defects: [
                "Drop in Mold",
                "Stains",
                "Marking NOK",
                "Burns",
                "Crush",
                "Other",
                "Lack of Materials",
                "Mismatch",
                "Pilot Crush",
                "Drum Thickness",
                "Cracks",
                "Short Pours",
                "Stickers",
                "Damage",
                "Core Set",
                "Inclusion (sand)",
                "Heavy Dry Core",
                "Pinholes",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl DefectCatalog {
    pub fn contains(&self, name: &str) -> bool {
        self.defects.iter().any(|d| d == name)
    }
}

/// Load the defect catalog from YAML.
///
/// Search order:
///   1) explicit path (if provided)
///   2) ./defects.yaml in the working directory
///   3) ~/.config/defect-logger/defects.yaml
/// falling back to the bundled file and finally the built-in defaults.
pub fn load_catalog(path: Option<&str>) -> DefectCatalog {
    let mut search_paths: Vec<String> = Vec::new();
    if let Some(p) = path {
        search_paths.push(p.to_string());
    }
    search_paths.push("./defects.yaml".to_string());
    search_paths.push("~/.config/defect-logger/defects.yaml".to_string());

    for candidate in search_paths {
        let expanded = shellexpand::tilde(&candidate);
        let path_obj = Path::new(expanded.as_ref());
        if !path_obj.exists() {
            continue;
        }

        match try_load_catalog_file(path_obj) {
            Ok(catalog) => return catalog,
            Err(e) => eprintln!(
                "Failed to parse defect catalog '{}': {}",
                path_obj.display(),
                e
            ),
        }
    }

    if let Ok(catalog) = parse_catalog_content(include_str!("../defects.yaml")) {
        return catalog;
    }

    eprintln!("No defect catalog found; using defaults.");
    DefectCatalog::default()
}

fn try_load_catalog_file(path: &Path) -> Result<DefectCatalog, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("read error {}: {}", path.display(), e))?;

    parse_catalog_content(&content)
}

/// Parse catalog YAML, accepting either a bare list of names or a full
/// `defects:` mapping.
fn parse_catalog_content(content: &str) -> Result<DefectCatalog, String> {
    if let Ok(defects) = serde_yaml::from_str::<Vec<String>>(content) {
        return Ok(DefectCatalog { defects });
    }

    match serde_yaml::from_str::<DefectCatalog>(content) {
        Ok(catalog) => Ok(catalog),
        Err(e) => Err(format!("yaml parse error: {}", e)),
    }
}
