use std::fs;
use tmpgen::{CountNameGen, ObjectKind, TmpGen, UuidNameGen};

fn is_uuid_name(name: &str) -> bool {
    name.len() == 32 && name.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

#[test]
fn tmp_file_is_empty_regular_file() {
    let p = TmpGen::default().tmp_file().expect("create temp file");
    let meta = fs::symlink_metadata(&p).unwrap();
    assert!(meta.file_type().is_file());
    assert_eq!(meta.len(), 0);
    fs::remove_file(&p).unwrap();
}

#[test]
fn tmp_dir_is_empty_directory_with_uuid_name() {
    let p = TmpGen::default().tmp_dir().expect("create temp dir");
    assert!(p.is_dir());
    assert_eq!(fs::read_dir(&p).unwrap().count(), 0);
    let name = p.file_name().unwrap().to_str().unwrap();
    assert!(is_uuid_name(name), "unexpected name {name}");
    fs::remove_dir(&p).unwrap();
}

#[test]
fn convenience_functions_use_system_tmp() {
    let f = tmpgen::tmp_file().unwrap();
    let d = tmpgen::tmp_dir().unwrap();
    assert!(f.starts_with("/tmp") && f.is_file());
    assert!(d.starts_with("/tmp") && d.is_dir());
    fs::remove_file(f).unwrap();
    fs::remove_dir(d).unwrap();
}

#[test]
fn counting_twice_creates_files_one_and_two() {
    let td = assert_fs::TempDir::new().unwrap();
    let mut tg = TmpGen::with_base(Box::new(CountNameGen::new()), td.path());

    let first = tg.tmp_file().unwrap();
    let second = tg.tmp_file().unwrap();

    assert_eq!(first, td.path().join("1"));
    assert_eq!(second, td.path().join("2"));
    for p in [&first, &second] {
        assert!(p.is_file());
        assert_eq!(fs::read(p).unwrap().len(), 0);
    }
}

#[test]
fn counting_under_system_tmp_is_increasing() {
    let mut tg = TmpGen::new(Box::new(CountNameGen::new()));
    let a = tg.tmp_file().unwrap();
    let b = tg.tmp_file().unwrap();
    let num = |p: &std::path::Path| p.file_name().unwrap().to_str().unwrap().parse::<u64>().unwrap();
    assert!(num(&a) < num(&b));
    fs::remove_file(a).unwrap();
    fs::remove_file(b).unwrap();
}

#[test]
fn mixed_kinds_share_one_counter() {
    let td = assert_fs::TempDir::new().unwrap();
    let mut tg = TmpGen::with_base(Box::new(CountNameGen::new()), td.path());
    let d = tg.make(ObjectKind::Directory).unwrap();
    let f = tg.make(ObjectKind::File).unwrap();
    assert_eq!(d, td.path().join("1"));
    assert_eq!(f, td.path().join("2"));
    assert!(d.is_dir() && f.is_file());
}

#[test]
fn uuid_generator_in_scratch_base() {
    let td = assert_fs::TempDir::new().unwrap();
    let mut tg = TmpGen::with_base(Box::new(UuidNameGen::new()), td.path());
    let p = tg.tmp_file().unwrap();
    assert_eq!(p.parent(), Some(td.path()));
    assert!(is_uuid_name(p.file_name().unwrap().to_str().unwrap()));
}
