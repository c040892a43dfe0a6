use super::*;
use crate::{
    expression::catalog::Catalog,
    render::backend::RenderSettings,
    render::cpu::CpuRenderer,
    sequence::generator::generate_sequence,
    sequence::report::FrameMetadata,
};

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_export").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn metadata_only_when_no_renderer() {
    let out = scratch("metadata_only");
    let cat = Catalog::builtin();
    let seq = generate_sequence(&cat, "Happy", "Sad", 4).unwrap();
    let dir = write_sequence(&out, &seq, None).unwrap();
    assert_eq!(dir, out.join("Happy_to_Sad"));

    let f = File::open(dir.join(METADATA_FILE)).unwrap();
    let meta: Vec<FrameMetadata> = serde_json::from_reader(f).unwrap();
    assert_eq!(meta.len(), 5);
    assert_eq!(meta[4].filename, "frame_004_t1.00.png");
    assert!(!dir.join("frame_000_t0.00.png").exists());
}

#[test]
fn frames_are_rendered_to_png() {
    let out = scratch("with_png");
    let cat = Catalog::builtin();
    let seq = generate_sequence(&cat, "Alert", "Neutral", 2).unwrap();
    let mut renderer = CpuRenderer::new(RenderSettings::default()).unwrap();
    let dir = write_sequence(&out, &seq, Some(&mut renderer)).unwrap();

    for name in ["frame_000_t0.00.png", "frame_001_t0.50.png", "frame_002_t1.00.png"] {
        let img = image::open(dir.join(name)).unwrap();
        assert_eq!((img.width(), img.height()), (200, 200));
    }
}

#[test]
fn report_lands_in_output_root() {
    let out = scratch("report");
    let cat = Catalog::builtin();
    let pairs = crate::SequenceGenerator::new(&cat, crate::GeneratorConfig::with_steps(1))
        .unwrap()
        .generate_all_pairs()
        .unwrap();
    let report = GenerationReport::new(&cat, &pairs, 1, crate::Canvas::default());
    let path = write_report(&out, &report).unwrap();
    assert_eq!(path, out.join(REPORT_FILE));
    let back: GenerationReport =
        serde_json::from_reader(File::open(path).unwrap()).unwrap();
    assert_eq!(back.generation_info.total_sequences, 42);
}
