// tests/generate.rs

//! End to end generation tests: release feed in, repository files out.

use repogen::repofile::{APT_LIST_FILE, VERSIONS_FILE, YUM_REPO_FILE};
use repogen::{Error, ReleaseFeed, collect, generate};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_feed(dir: &Path, json: &str) -> ReleaseFeed {
    let feed_path = dir.join("full.json");
    fs::write(&feed_path, json).unwrap();
    ReleaseFeed::load(&feed_path).unwrap()
}

fn generate_from(json: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    let feed = write_feed(dir.path(), json);
    let summary = collect::scan(&feed).unwrap();
    generate(&summary, dir.path()).unwrap();
    dir
}

fn read(dir: &TempDir, name: &str) -> String {
    fs::read_to_string(dir.path().join(name)).unwrap()
}

const FEED: &str = r#"{
    "versions": [
        {
            "version": "3.5.0",
            "release_candidate": true,
            "downloads": [
                {"packages": ["https://repo.mongodb.org/yum/redhat/7/mongodb-org/3.5/x86_64/RPMS/mongodb-org-server-3.5.0.el7.x86_64.rpm"]}
            ]
        },
        {
            "version": "3.4.2",
            "release_candidate": false,
            "downloads": [
                {"packages": ["https://repo.mongodb.org/yum/redhat/7/mongodb-org/3.4/x86_64/RPMS/mongodb-org-server-3.4.2.el7.x86_64.rpm"]},
                {"packages": ["http://repo.mongodb.org/apt/ubuntu/dists/xenial/mongodb-org/3.4/multiverse/binary-amd64/mongodb-org-server_3.4.2_amd64.deb"]}
            ]
        },
        {
            "version": "3.4.1",
            "release_candidate": false,
            "downloads": [
                {"packages": ["https://repo.mongodb.org/yum/redhat/7/mongodb-org/3.4/x86_64/RPMS/mongodb-org-server-3.4.1.el7.x86_64.rpm"]},
                {"packages": ["http://repo.mongodb.org/apt/ubuntu/dists/xenial/mongodb-org/3.4/multiverse/binary-amd64/mongodb-org-server_3.4.1_amd64.deb"]}
            ]
        },
        {
            "version": "3.3.2",
            "release_candidate": false,
            "downloads": [
                {"packages": ["https://repo.mongodb.org/yum/redhat/7/mongodb-org/3.3/x86_64/RPMS/mongodb-org-server-3.3.2.el7.x86_64.rpm"]}
            ]
        },
        {
            "version": "3.2.12",
            "release_candidate": false
        }
    ]
}"#;

#[test]
fn test_full_feed_generates_all_three_files() {
    let dir = generate_from(FEED);

    // The 3.5 RC bumped the current branch without contributing URLs; the
    // two 3.4 patch releases deduplicate to one stanza per ecosystem; the
    // 3.3 directory is a stale development train and is dropped.
    assert_eq!(
        read(&dir, YUM_REPO_FILE),
        "[mongodb-org-redhat7-x86_64-3.4]\n\
         name=MongoDB Org redhat7 x86_64 Repository 3.4\n\
         baseurl=https://repo.mongodb.org/yum/redhat/7/mongodb-org/3.4/x86_64\n\
         gpgcheck=1\n\
         enabled=1\n\
         gpgkey=https://www.mongodb.org/static/pgp/server-3.4.asc\n\
         \n"
    );
    assert_eq!(
        read(&dir, APT_LIST_FILE),
        "# Org 3.4 ubuntu xenial amd64\n\
         deb [ arch=amd64 ] http://repo.mongodb.org/apt/ubuntu xenial/mongodb-org/3.4 multiverse\n\
         \n"
    );
    assert_eq!(read(&dir, VERSIONS_FILE), "3.0\n3.2\n3.4\n3.6\n");
}

#[test]
fn test_generation_is_deterministic() {
    let first = generate_from(FEED);
    let second = generate_from(FEED);

    for name in [YUM_REPO_FILE, APT_LIST_FILE, VERSIONS_FILE] {
        assert_eq!(read(&first, name), read(&second, name), "{name} differs");
    }
}

#[test]
fn test_empty_feed_still_writes_default_versions() {
    let dir = generate_from(r#"{"versions": []}"#);

    assert_eq!(read(&dir, YUM_REPO_FILE), "");
    assert_eq!(read(&dir, APT_LIST_FILE), "");
    assert_eq!(read(&dir, VERSIONS_FILE), "3.0\n");
}

#[test]
fn test_existing_output_is_truncated() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(YUM_REPO_FILE), "stale contents\n").unwrap();

    let feed = write_feed(dir.path(), r#"{"versions": []}"#);
    let summary = collect::scan(&feed).unwrap();
    generate(&summary, dir.path()).unwrap();

    assert_eq!(read(&dir, YUM_REPO_FILE), "");
}

#[test]
fn test_malformed_package_url_aborts_generation() {
    let dir = TempDir::new().unwrap();
    let feed = write_feed(
        dir.path(),
        r#"{
            "versions": [{
                "version": "3.4.1",
                "release_candidate": false,
                "downloads": [{"packages": ["https://repo.mongodb.org/yum/redhat/pkg.rpm"]}]
            }]
        }"#,
    );

    let summary = collect::scan(&feed).unwrap();
    let err = generate(&summary, dir.path()).unwrap_err();
    assert!(matches!(err, Error::MalformedUrl { .. }));
}
