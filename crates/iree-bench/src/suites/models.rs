use crate::definitions::{ImportedModel, Model, ModelSourceType};
use crate::errors::BenchResult;

const TFLITE_MODEL_ROOT: &str = "https://storage.googleapis.com/iree-model-artifacts";
const TF_MODEL_ROOT: &str = "https://storage.googleapis.com/iree-model-artifacts/tensorflow";

/// Static description of a model known to the benchmark suites
#[derive(Debug, Clone, Copy)]
pub struct ModelSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub tags: &'static [&'static str],
    pub source_type: ModelSourceType,
    pub file_name: &'static str,
    pub entry_function: &'static str,
    pub input_types: &'static [&'static str],
}

impl ModelSpec {
    pub fn build(&self) -> BenchResult<Model> {
        let root = match self.source_type {
            ModelSourceType::ExportedTf => TF_MODEL_ROOT,
            _ => TFLITE_MODEL_ROOT,
        };
        Model::build(
            self.id,
            self.name,
            self.tags,
            self.source_type,
            format!("{}/{}", root, self.file_name),
            self.entry_function,
            self.input_types,
        )
    }

    pub fn import(&self) -> BenchResult<ImportedModel> {
        Ok(ImportedModel::from_model(self.build()?))
    }
}

pub fn import_all(specs: &[ModelSpec]) -> BenchResult<Vec<ImportedModel>> {
    specs.iter().map(ModelSpec::import).collect()
}

pub const DEEPLAB_V3_FP32: ModelSpec = ModelSpec {
    id: "c36c63b0-220a-4d78-8ade-c45ce47d89d3",
    name: "DeepLabV3_fp32",
    tags: &["fp32"],
    source_type: ModelSourceType::ExportedTflite,
    file_name: "deeplabv3.tflite",
    entry_function: "main",
    input_types: &["1x257x257x3xf32"],
};

pub const MOBILESSD_FP32: ModelSpec = ModelSpec {
    id: "0e466f69-91d6-4e50-b62b-a82b6213a231",
    name: "MobileSSD_fp32",
    tags: &["fp32"],
    source_type: ModelSourceType::ExportedTflite,
    file_name: "mobile_ssd_v2_float_coco.tflite",
    entry_function: "main",
    input_types: &["1x320x320x3xf32"],
};

pub const POSENET_FP32: ModelSpec = ModelSpec {
    id: "5afc3014-d29d-4e88-a840-fbaf678acf2b",
    name: "PoseNet_fp32",
    tags: &["fp32"],
    source_type: ModelSourceType::ExportedTflite,
    file_name: "posenet.tflite",
    entry_function: "main",
    input_types: &["1x353x257x3xf32"],
};

pub const MOBILEBERT_FP32: ModelSpec = ModelSpec {
    id: "cc69d69f-6d1f-4a1a-a31e-e021888d0d28",
    name: "MobileBertSquad_fp32",
    tags: &["fp32"],
    source_type: ModelSourceType::ExportedTflite,
    file_name: "mobilebert-baseline-tf2-float.tflite",
    entry_function: "main",
    input_types: &["1x384xi32", "1x384xi32", "1x384xi32"],
};

pub const MOBILEBERT_FP16: ModelSpec = ModelSpec {
    id: "e3997104-a3d2-46b4-9fbf-39069906d123",
    name: "MobileBertSquad_fp16",
    tags: &["fp16"],
    source_type: ModelSourceType::ExportedTflite,
    file_name: "mobilebertsquad.tflite",
    entry_function: "main",
    input_types: &["1x384xi32", "1x384xi32", "1x384xi32"],
};

pub const MOBILEBERT_INT8: ModelSpec = ModelSpec {
    id: "e3997104-a3d2-46b4-9fbf-39069906d123-int8",
    name: "MobileBertSquad_int8",
    tags: &["int8"],
    source_type: ModelSourceType::ExportedTflite,
    file_name: "mobilebert-baseline-tf2-quant.tflite",
    entry_function: "main",
    input_types: &["1x384xi32", "1x384xi32", "1x384xi32"],
};

pub const MOBILENET_V2_FP32: ModelSpec = ModelSpec {
    id: "7d45f8e5-bb5e-48d0-928d-8f125104578f",
    name: "MobileNetV2_fp32",
    tags: &["fp32", "imagenet"],
    source_type: ModelSourceType::ExportedTflite,
    file_name: "mobilenet_v2_1.0_224.tflite",
    entry_function: "main",
    input_types: &["1x224x224x3xf32"],
};

pub const MOBILENET_V3SMALL_FP32: ModelSpec = ModelSpec {
    id: "58855e40-eba9-4a71-b878-6b35e3460244",
    name: "MobileNetV3Small_fp32",
    tags: &["fp32", "imagenet"],
    source_type: ModelSourceType::ExportedTflite,
    file_name: "MobileNetV3SmallStaticBatch.tflite",
    entry_function: "main",
    input_types: &["1x224x224x3xf32"],
};

pub const PERSON_DETECT_INT8: ModelSpec = ModelSpec {
    id: "bc1338be-e3df-44fd-82e4-40ba9560a073",
    name: "PersonDetect_int8",
    tags: &["int8"],
    source_type: ModelSourceType::ExportedTflite,
    file_name: "person_detect.tflite",
    entry_function: "main",
    input_types: &["1x96x96x1xi8"],
};

pub const EFFICIENTNET_INT8: ModelSpec = ModelSpec {
    id: "4a6f545e-1b4e-41a5-9236-792aa578184b",
    name: "EfficientNet_int8",
    tags: &["int8"],
    source_type: ModelSourceType::ExportedTflite,
    file_name: "efficientnet_lite0_int8_2.tflite",
    entry_function: "main",
    input_types: &["1x224x224x3xui8"],
};

pub const MINILM_L12_H384_UNCASED_INT32: ModelSpec = ModelSpec {
    id: "ecf5c970-ee97-49f0-a4ed-df1f34e9d493",
    name: "MiniLML12H384Uncased",
    tags: &["int32", "seqlen128"],
    source_type: ModelSourceType::ExportedTf,
    file_name: "minilm-l12-h384-uncased_seqlen128",
    entry_function: "predict",
    input_types: &["1x128xi32", "1x128xi32", "1x128xi32"],
};

pub const BERT_LARGE_TF_FP32_SEQLEN384: ModelSpec = ModelSpec {
    id: "8871f602-571c-4eb8-b94d-554cc8ceec5a",
    name: "BertLargeTF",
    tags: &["fp32", "seqlen384", "tensorflow", "bert-variant"],
    source_type: ModelSourceType::ExportedTf,
    file_name: "bert-large-seq384",
    entry_function: "serving_default",
    input_types: &["1x384xi32", "1x384xi32", "1x384xi32"],
};

pub const RESNET50_TF_FP32: ModelSpec = ModelSpec {
    id: "a122dabc-eb66-4d4f-b3a8-6e5a0b9f0fc6",
    name: "Resnet50TF",
    tags: &["fp32", "cnn", "resnet"],
    source_type: ModelSourceType::ExportedTf,
    file_name: "resnet50",
    entry_function: "forward",
    input_types: &["1x224x224x3xf32"],
};

pub const EFFICIENTNET_V2_S_TF_FP32: ModelSpec = ModelSpec {
    id: "ebe7897f-5613-435b-a330-3cb967704e5e",
    name: "EfficientNetV2STF",
    tags: &["fp32", "cnn", "efficientnet"],
    source_type: ModelSourceType::ExportedTf,
    file_name: "efficientnet-v2-s",
    entry_function: "forward",
    input_types: &["1x384x384x3xf32"],
};

/// TFLite models benchmarked on every CPU target that supports floats
pub const SMALL_CPU_MODELS: &[ModelSpec] = &[
    DEEPLAB_V3_FP32,
    MOBILESSD_FP32,
    POSENET_FP32,
    MOBILEBERT_FP32,
    MOBILEBERT_INT8,
    MOBILENET_V2_FP32,
    MOBILENET_V3SMALL_FP32,
    PERSON_DETECT_INT8,
    EFFICIENTNET_INT8,
];

pub const LARGE_MODELS: &[ModelSpec] = &[
    MINILM_L12_H384_UNCASED_INT32,
    BERT_LARGE_TF_FP32_SEQLEN384,
    RESNET50_TF_FP32,
    EFFICIENTNET_V2_S_TF_FP32,
];

pub const SMALL_GPU_MODELS: &[ModelSpec] = &[
    DEEPLAB_V3_FP32,
    MOBILESSD_FP32,
    POSENET_FP32,
    MOBILEBERT_FP32,
    MOBILENET_V2_FP32,
    MOBILENET_V3SMALL_FP32,
];

/// Quantized models small enough for 32-bit and interpreter targets
pub const QUANTIZED_MODELS: &[ModelSpec] = &[PERSON_DETECT_INT8, EFFICIENTNET_INT8];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::MlirDialectType;
    use std::collections::HashMap;

    #[test]
    fn test_model_ids_are_unique() {
        let mut ids = HashMap::new();
        for spec in SMALL_CPU_MODELS
            .iter()
            .chain(LARGE_MODELS)
            .chain(SMALL_GPU_MODELS)
            .chain(&[MOBILEBERT_FP16])
        {
            let name = ids.entry(spec.id).or_insert(spec.name);
            assert_eq!(*name, spec.name, "model id {} is reused", spec.id);
        }
    }

    #[test]
    fn test_import_all() {
        let imported = import_all(LARGE_MODELS).unwrap();
        assert_eq!(imported.len(), LARGE_MODELS.len());
        assert!(imported
            .iter()
            .all(|m| m.dialect_type == MlirDialectType::Mhlo));

        let model = DEEPLAB_V3_FP32.build().unwrap();
        assert_eq!(
            model.source_url,
            "https://storage.googleapis.com/iree-model-artifacts/deeplabv3.tflite"
        );
    }
}
