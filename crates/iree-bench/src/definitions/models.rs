use serde::{Deserialize, Serialize};
use std::fmt;

use super::unique_ids::hash_composite_id;
use crate::errors::{util::ensure_non_empty, BenchResult};

/// Format the model source was exported in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelSourceType {
    ExportedTflite,
    ExportedTf,
    ExportedLinalgMlir,
}

/// MLIR dialect a model is imported into before compilation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MlirDialectType {
    Linalg,
    Tosa,
    Mhlo,
}

impl MlirDialectType {
    /// Value passed to `--iree-input-type`
    pub fn input_type(&self) -> &'static str {
        match self {
            MlirDialectType::Linalg => "none",
            MlirDialectType::Tosa => "tosa",
            MlirDialectType::Mhlo => "mhlo",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    pub name: String,
    pub tags: Vec<String>,
    pub source_type: ModelSourceType,
    pub source_url: String,
    pub entry_function: String,
    pub input_types: Vec<String>,
}

impl Model {
    pub fn build(
        id: impl Into<String>,
        name: impl Into<String>,
        tags: &[&str],
        source_type: ModelSourceType,
        source_url: impl Into<String>,
        entry_function: impl Into<String>,
        input_types: &[&str],
    ) -> BenchResult<Self> {
        let id = id.into();
        let name = name.into();
        ensure_non_empty(&id, "model id")?;
        ensure_non_empty(&name, "model name")?;
        Ok(Self {
            id,
            name,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            source_type,
            source_url: source_url.into(),
            entry_function: entry_function.into(),
            input_types: input_types.iter().map(|t| t.to_string()).collect(),
        })
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tags.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}({})", self.name, self.tags.join(","))
        }
    }
}

/// A model after it has been imported into an MLIR dialect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedModel {
    pub composite_id: String,
    pub model: Model,
    pub dialect_type: MlirDialectType,
}

impl ImportedModel {
    /// Import with the dialect that matches the model's source format.
    pub fn from_model(model: Model) -> Self {
        let dialect_type = match model.source_type {
            ModelSourceType::ExportedTflite => MlirDialectType::Tosa,
            ModelSourceType::ExportedTf => MlirDialectType::Mhlo,
            ModelSourceType::ExportedLinalgMlir => MlirDialectType::Linalg,
        };
        Self::with_dialect(model, dialect_type)
    }

    pub fn with_dialect(model: Model, dialect_type: MlirDialectType) -> Self {
        let import_config_id = format!("import-{}", dialect_type.input_type());
        let composite_id = hash_composite_id(&[model.id.as_str(), import_config_id.as_str()]);
        Self {
            composite_id,
            model,
            dialect_type,
        }
    }
}

impl fmt::Display for ImportedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.model)
    }
}

/// Input data fed to a model during a benchmark run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInputData {
    pub id: String,
    pub name: String,
    pub source_url: String,
}

impl ModelInputData {
    /// All-zero inputs generated by the benchmark tool itself
    pub fn zeros() -> Self {
        Self {
            id: "8d4a034e-944d-4725-8402-d6f6e61be93c".to_string(),
            name: "zeros".to_string(),
            source_url: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn model(source_type: ModelSourceType) -> Model {
        Model::build(
            "m-1",
            "MobileNetV2",
            &["fp32"],
            source_type,
            "https://example.com/mobilenet_v2.tflite",
            "main",
            &["1x224x224x3xf32"],
        )
        .unwrap()
    }

    #[test_case(ModelSourceType::ExportedTflite, MlirDialectType::Tosa ; "tflite imports to tosa")]
    #[test_case(ModelSourceType::ExportedTf, MlirDialectType::Mhlo ; "tf imports to mhlo")]
    #[test_case(ModelSourceType::ExportedLinalgMlir, MlirDialectType::Linalg ; "mlir stays linalg")]
    fn test_import_dialect(source_type: ModelSourceType, expected: MlirDialectType) {
        let imported = ImportedModel::from_model(model(source_type));
        assert_eq!(imported.dialect_type, expected);
    }

    #[test]
    fn test_imported_model_ids_differ_by_dialect() {
        let tflite = || model(ModelSourceType::ExportedTflite);
        let tosa = ImportedModel::with_dialect(tflite(), MlirDialectType::Tosa);
        let linalg = ImportedModel::with_dialect(tflite(), MlirDialectType::Linalg);
        assert_ne!(tosa.composite_id, linalg.composite_id);
        assert_eq!(tosa.to_string(), "MobileNetV2(fp32)");
    }

    #[test]
    fn test_model_requires_id() {
        let result = Model::build("", "x", &[], ModelSourceType::ExportedTf, "", "main", &[]);
        assert!(result.is_err());
    }
}
