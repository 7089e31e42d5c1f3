//! Async service tests

use floorscan_algorithms::OutlineConfig;
use floorscan_combine::{AssetLoader, CombineConfig, FileSceneWriter};
use floorscan_core::{ErrorKind, MeshAsset, Point2d, Result};
use floorscan_io::SceneFormat;
use floorscan_service::*;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const ROOM_OBJ: &str = "\
o Floor
v 0 0 0
v 4 0 0
v 4 0 3
v 0 0 3
f 1 2 3 4
o Walls
v 0 2.5 0
v 4 2.5 0
v 4 2.5 3
f 1 5 6
f 2 6 7
";

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("floorscan_service_{}_{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

struct PanickingLoader;

impl AssetLoader for PanickingLoader {
    fn load(&self, _path: &Path) -> Result<MeshAsset> {
        panic!("loader exploded");
    }
}

#[tokio::test]
async fn test_outline_request_round_trip() {
    let dir = scratch_dir("outline");
    let scan = dir.join("room.obj");
    fs::write(&scan, ROOM_OBJ).unwrap();

    let service = OutlineService::new(OutlineConfig::default());
    let polygon = service.extract_outline_async(scan.clone()).await.unwrap();
    assert_eq!(
        polygon.points,
        vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(4.0, 0.0),
            Point2d::new(4.0, 3.0),
            Point2d::new(0.0, 3.0),
        ]
    );

    let response = service
        .handle_json(json!({ "path": scan.to_string_lossy() }))
        .await
        .unwrap();
    assert_eq!(response, json!({ "outline": [[0.0, 0.0], [4.0, 0.0], [4.0, 3.0], [0.0, 3.0]] }));

    assert_eq!(extract_outline_from_path(&scan, &OutlineConfig::default()).unwrap(), polygon);

    let _ = fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_outline_failures_are_reported() {
    let service = OutlineService::new(OutlineConfig::default());

    let report = service
        .extract_outline_async(std::env::temp_dir().join("floorscan_no_such_room.obj"))
        .await
        .unwrap_err();
    assert!(report.has_code(ErrorKind::LoadFailure));

    let report = service.handle_json(json!({ "floorEpsilon": 0.1 })).await.unwrap_err();
    assert!(report.has_code(ErrorKind::ValidationFailure));

    let dir = scratch_dir("flat");
    let scan = dir.join("line.obj");
    fs::write(&scan, "v 0 0 0\nv 1 0 0\nv 0 3 0\n").unwrap();
    let report = service.extract_outline_async(scan).await.unwrap_err();
    assert!(report.has_code(ErrorKind::InsufficientData));
    let _ = fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_panicking_worker_becomes_report() {
    let service = OutlineService::with_loader(Arc::new(PanickingLoader), OutlineConfig::default());
    let report = service.extract_outline_async("anything.obj").await.unwrap_err();
    assert!(report.has_code(ErrorKind::LoadFailure));
    assert!(report.message.starts_with("worker task failed"));

    let combiner = CombineService::with_collaborators(
        Arc::new(PanickingLoader),
        Arc::new(FileSceneWriter),
        CombineConfig::default(),
    );
    let request = CombineRequest {
        paths: vec!["a.obj".into(), "b.obj".into()],
        transforms: vec![Default::default(); 2],
        output_path: "out.json".into(),
    };
    let report = combiner.combine_scans_async(request).await.unwrap_err();
    assert!(report.has_code(ErrorKind::ExportFailure));
}

#[tokio::test]
async fn test_combine_request_end_to_end() {
    let dir = scratch_dir("combine");
    let first = dir.join("first.obj");
    let second = dir.join("second.obj");
    fs::write(&first, ROOM_OBJ).unwrap();
    fs::write(&second, ROOM_OBJ).unwrap();

    let output = generate_output_path("demo", &dir, SceneFormat::Json);
    let request = json!({
        "paths": [first.to_string_lossy(), second.to_string_lossy()],
        "transforms": [
            { "positionX": 0, "positionY": 0, "rotation": 0, "scale": 1 },
            { "positionX": 150, "positionY": 0, "rotation": 90, "scale": 1 }
        ],
        "outputPath": output.to_string_lossy()
    });

    let service = CombineService::new(CombineConfig::default());
    let response = service.handle_json(request).await.unwrap();
    assert_eq!(response["outputPath"], json!(output.to_string_lossy()));

    let combined = floorscan_io::read_asset(&output).unwrap();
    let names: Vec<_> = combined.root.children.iter().map(|c| c.name.clone().unwrap()).collect();
    assert_eq!(names, vec!["scan_0", "scan_1"]);
    assert_eq!(combined.root.children[1].children.len(), 2);

    let _ = fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_combine_validation_report_names_index() {
    let service = CombineService::new(CombineConfig::default());
    let report = service
        .handle_json(json!({
            "paths": ["a.obj", "b.obj"],
            "transforms": [
                { "positionX": 0, "positionY": 0, "rotation": 0, "scale": 1 },
                { "positionX": 0, "positionY": 0, "rotation": 0, "scale": -2 }
            ],
            "outputPath": "never-written.json"
        }))
        .await
        .unwrap_err();

    assert!(report.has_code(ErrorKind::ValidationFailure));
    assert_eq!(report.details, Some(json!({ "index": 1 })));
    assert!(!Path::new("never-written.json").exists());
}
