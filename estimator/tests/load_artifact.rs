use std::{fs, io};

use estimator::{Artifact, ArtifactErr};
use ndarray::array;

#[test]
fn reads_artifact_from_disk() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("insurancemodel.json");
    fs::write(
        &path,
        r#"{"format":1,"estimator":{"kind":"linear","coefficients":[1.0,1.0,1.0,1.0],"intercept":0.0}}"#,
    )
    .unwrap();

    let model = Artifact::read(&path).unwrap().into_regressor().unwrap();
    let y = model.predict(array![[1.0, 2.0, 3.0, 4.0]].view()).unwrap();

    assert_eq!(y, array![10.0]);
}

#[test]
fn missing_file_is_an_io_error() {
    let tmp = tempfile::tempdir().unwrap();
    let err = Artifact::read(tmp.path().join("nope.json")).unwrap_err();

    match err {
        ArtifactErr::Io(e) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
        other => panic!("expected an io error, got {other:?}"),
    }
}

#[test]
fn truncated_file_is_a_decode_error() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("insurancemodel.json");
    fs::write(&path, r#"{"format":1,"estimator":{"kind":"lin"#).unwrap();

    assert!(matches!(Artifact::read(&path), Err(ArtifactErr::Decode(_))));
}
