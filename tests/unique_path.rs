use std::fs;
use tmpgen::{CountNameGen, NamerKind, SYSTEM_TMP_HOME, TmpGen};

#[test]
fn hundred_unique_paths_for_each_strategy() {
    for mut tg in [TmpGen::default(), TmpGen::new(Box::new(CountNameGen::new()))] {
        for _ in 0..100 {
            let p = tg.unique_path();
            assert!(!p.exists(), "allocated path exists: {}", p.display());
            assert_eq!(p.parent(), Some(std::path::Path::new(SYSTEM_TMP_HOME)));
        }
    }
}

#[test]
fn unique_path_has_no_side_effects() {
    let td = tempfile::tempdir().unwrap();
    let mut tg = TmpGen::with_base(NamerKind::Count.build(), td.path());
    let p = tg.unique_path();
    assert_eq!(p, td.path().join("1"));
    assert_eq!(fs::read_dir(td.path()).unwrap().count(), 0);
}

#[test]
fn counting_skips_precreated_names() {
    let td = tempfile::tempdir().unwrap();
    fs::write(td.path().join("1"), b"taken").unwrap();
    fs::create_dir(td.path().join("2")).unwrap();

    let mut tg = TmpGen::with_base(Box::new(CountNameGen::new()), td.path());
    assert_eq!(tg.unique_path(), td.path().join("3"));
    // counter values are consumed even when taken
    assert_eq!(tg.unique_path(), td.path().join("4"));
}
