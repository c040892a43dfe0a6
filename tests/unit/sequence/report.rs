use super::*;
use crate::sequence::generator::{GeneratorConfig, SequenceGenerator, generate_sequence};

#[test]
fn filenames_are_zero_padded_with_two_decimal_t() {
    let cat = Catalog::builtin();
    let seq = generate_sequence(&cat, "Happy", "Sad", 10).unwrap();
    let meta = sequence_metadata(&seq);
    assert_eq!(meta.len(), 11);
    assert_eq!(meta[0].filename, "frame_000_t0.00.png");
    assert_eq!(meta[3].filename, "frame_003_t0.30.png");
    assert_eq!(meta[10].filename, "frame_010_t1.00.png");
    assert_eq!(meta[5].description, "开心→悲伤");
    assert_eq!(meta[5].params, seq.frames[5].expression);
}

#[test]
fn report_counts_sequences_and_frames() {
    let cat = Catalog::builtin();
    let pairs = SequenceGenerator::new(&cat, GeneratorConfig::default())
        .unwrap()
        .generate_all_pairs()
        .unwrap();
    let report = GenerationReport::new(&cat, &pairs, 10, Canvas::default());
    assert_eq!(report.generation_info.total_sequences, 42);
    assert_eq!(report.generation_info.total_frames, 42 * 11);
    assert_eq!(report.generation_info.image_size, [200, 200]);
    assert_eq!(report.expressions.len(), 7);
    assert_eq!(report.sequences.get("Alert_to_Neutral"), Some(&11));

    let v = serde_json::to_value(&report).unwrap();
    assert_eq!(v["generation_info"]["interpolation_steps"], 10);
}
