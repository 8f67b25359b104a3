//! End-to-end generation against the in-memory and the local filesystem.

use std::path::{Path, PathBuf};

use cakkli_adapters::{LocalFilesystem, MemoryFilesystem};
use cakkli_core::{
    application::{ApplicationError, ports::Filesystem},
    prelude::*,
};
use serde_json::Value;
use tempfile::TempDir;

const VITE_PACKAGE_JSON: &str = r#"{
  "name": "client",
  "private": true,
  "version": "0.0.0",
  "type": "module",
  "scripts": {
    "dev": "vite",
    "build": "tsc -b && vite build"
  },
  "dependencies": {
    "react": "^18.3.1"
  },
  "devDependencies": {
    "vite": "^5.4.0"
  }
}"#;

const VITE_TSCONFIG: &str = r#"{
  "files": [],
  "compilerOptions": { "strict": true }
}"#;

// ── Fakes ────────────────────────────────────────────────────────────────────

/// Stands in for `npm create vite`: creates `client/` with its manifests.
struct FakeVite<F: Filesystem> {
    fs: F,
    package_json: &'static str,
    tsconfig: Option<&'static str>,
}

impl<F: Filesystem> FakeVite<F> {
    fn new(fs: F) -> Self {
        Self {
            fs,
            package_json: VITE_PACKAGE_JSON,
            tsconfig: Some(VITE_TSCONFIG),
        }
    }
}

impl<F: Filesystem> FrontendScaffold for FakeVite<F> {
    fn scaffold(&self, project_root: &Path) -> CakkliResult<()> {
        let client = project_root.join("client");
        self.fs.create_dir(&client)?;
        self.fs.write_file(&client.join("package.json"), self.package_json)?;
        if let Some(tsconfig) = self.tsconfig {
            self.fs.write_file(&client.join("tsconfig.json"), tsconfig)?;
        }
        Ok(())
    }

    fn describe(&self) -> String {
        "fake vite".into()
    }
}

struct FailingVite;

impl FrontendScaffold for FailingVite {
    fn scaffold(&self, _: &Path) -> CakkliResult<()> {
        Err(ApplicationError::ScaffoldToolFailed {
            command: self.describe(),
            code: Some(1),
        }
        .into())
    }

    fn describe(&self) -> String {
        "npm create vite@latest client -- --template react-ts".into()
    }
}

fn config(name: &str, style: StyleLibrary) -> ProjectConfig {
    ProjectConfig::new(ProjectName::new(name).unwrap(), style)
}

fn memory_service(fs: &MemoryFilesystem) -> ScaffoldService {
    ScaffoldService::new(Box::new(fs.clone()), Box::new(FakeVite::new(fs.clone())))
}

/// Every file under `root`, keyed by its path relative to `root`.
fn snapshot(fs: &MemoryFilesystem, root: &str) -> Vec<(PathBuf, String)> {
    fs.list_files()
        .into_iter()
        .filter_map(|p| {
            let rel = p.strip_prefix(root).ok()?.to_path_buf();
            let content = fs.read_file(&p)?;
            Some((rel, content))
        })
        .collect()
}

fn json(fs: &MemoryFilesystem, path: &str) -> Value {
    serde_json::from_str(&fs.read_file(path).unwrap()).unwrap()
}

// ── End-to-end ───────────────────────────────────────────────────────────────

#[test]
fn generates_demo_project() {
    let fs = MemoryFilesystem::new().with_dir("/work");
    let report = memory_service(&fs)
        .generate(&config("demo", StyleLibrary::Mantine), Path::new("/work"))
        .unwrap();

    assert_eq!(report.root, PathBuf::from("/work/demo"));
    assert_eq!(report.manifests_patched, 2);
    assert!(fs.exists(Path::new("/work/demo/client/src/services/user.service.ts")));
    assert!(fs.exists(Path::new("/work/demo/server/src/modules/user/user.service.ts")));
    assert!(fs.read_file("/work/demo/README.md").unwrap().contains("Mantine"));

    for dir in [
        "client/src/components/ui",
        "client/src/components/features",
        "client/src/components/layout",
        "client/src/hooks",
        "client/src/stores",
        "client/src/test",
        "server/src/modules/user",
        "server/src/modules/health",
        "server/src/shared/config",
        "server/src/shared/interfaces",
    ] {
        assert!(fs.exists(&Path::new("/work/demo").join(dir)), "missing {dir}");
    }
}

#[test]
fn client_manifest_keeps_scaffold_entries() {
    let fs = MemoryFilesystem::new().with_dir("/work");
    memory_service(&fs)
        .generate(&config("demo", StyleLibrary::Shadcn), Path::new("/work"))
        .unwrap();

    let manifest = json(&fs, "/work/demo/client/package.json");
    assert_eq!(manifest["name"], "client");
    assert_eq!(manifest["scripts"]["dev"], "vite");
    assert_eq!(manifest["scripts"]["test"], "vitest");
    assert_eq!(manifest["scripts"]["test:coverage"], "vitest --coverage");
    assert_eq!(manifest["dependencies"]["react"], "^18.3.1");
    assert_eq!(manifest["devDependencies"]["vite"], "^5.4.0");
    assert_eq!(manifest["devDependencies"]["jsdom"], "^23.0.1");

    let tsconfig = json(&fs, "/work/demo/client/tsconfig.json");
    assert_eq!(tsconfig["compilerOptions"]["strict"], true);
    assert_eq!(tsconfig["compilerOptions"]["baseUrl"], ".");
    assert_eq!(tsconfig["compilerOptions"]["paths"]["@hooks/*"][0], "src/hooks/*");
    assert_eq!(tsconfig["files"], serde_json::json!([]));
}

#[test]
fn tsconfig_patch_is_skipped_when_scaffold_produced_none() {
    let fs = MemoryFilesystem::new().with_dir("/work");
    let mut vite = FakeVite::new(fs.clone());
    vite.tsconfig = None;
    let service = ScaffoldService::new(Box::new(fs.clone()), Box::new(vite));

    let report = service
        .generate(&config("demo", StyleLibrary::Mantine), Path::new("/work"))
        .unwrap();

    assert_eq!(report.manifests_patched, 1);
    assert!(!fs.exists(Path::new("/work/demo/client/tsconfig.json")));
}

#[test]
fn env_files_come_in_identical_pairs() {
    let fs = MemoryFilesystem::new().with_dir("/work");
    memory_service(&fs)
        .generate(&config("demo", StyleLibrary::Mantine), Path::new("/work"))
        .unwrap();

    for pkg in ["client", "server"] {
        let env = fs.read_file(format!("/work/demo/{pkg}/.env")).unwrap();
        let example = fs.read_file(format!("/work/demo/{pkg}/.env.example")).unwrap();
        assert_eq!(env, example);
        assert!(env.lines().all(|l| l.contains('=')));
    }
}

// ── Properties ───────────────────────────────────────────────────────────────

#[test]
fn second_run_makes_no_writes() {
    let fs = MemoryFilesystem::new().with_dir("/work");
    let service = memory_service(&fs);
    let demo = config("demo", StyleLibrary::Mantine);
    service.generate(&demo, Path::new("/work")).unwrap();

    let before = fs.mutation_count();
    let err = service.generate(&demo, Path::new("/work")).unwrap_err();

    assert_eq!(err.kind(), FailureKind::DirectoryExists);
    assert_eq!(err.stage(), Some(Stage::Guard));
    assert_eq!(fs.mutation_count(), before);
}

#[test]
fn output_is_deterministic() {
    let fs = MemoryFilesystem::new().with_dir("/a").with_dir("/b");
    let service = memory_service(&fs);
    let demo = config("demo", StyleLibrary::Shadcn);

    service.generate(&demo, Path::new("/a")).unwrap();
    service.generate(&demo, Path::new("/b")).unwrap();

    let a = snapshot(&fs, "/a/demo");
    let b = snapshot(&fs, "/b/demo");
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn only_readme_depends_on_style_library() {
    let fs = MemoryFilesystem::new().with_dir("/shadcn").with_dir("/mantine");
    let service = memory_service(&fs);
    service
        .generate(&config("demo", StyleLibrary::Shadcn), Path::new("/shadcn"))
        .unwrap();
    service
        .generate(&config("demo", StyleLibrary::Mantine), Path::new("/mantine"))
        .unwrap();

    let shadcn = snapshot(&fs, "/shadcn/demo");
    let mantine = snapshot(&fs, "/mantine/demo");
    assert_eq!(shadcn.len(), mantine.len());

    let differing: Vec<_> = shadcn
        .iter()
        .zip(&mantine)
        .filter(|(s, m)| s != m)
        .map(|(s, _)| s.0.clone())
        .collect();
    assert_eq!(differing, vec![PathBuf::from("README.md")]);

    let readme_s = fs.read_file("/shadcn/demo/README.md").unwrap();
    let readme_m = fs.read_file("/mantine/demo/README.md").unwrap();
    assert!(readme_s.contains("### shadcn/ui Setup"));
    assert!(!readme_s.contains("Mantine"));
    assert!(readme_m.contains("- **Mantine** for UI components"));
    assert!(!readme_m.contains("shadcn"));
}

#[test]
fn directories_are_created_parent_first() {
    let fs = MemoryFilesystem::new().with_dir("/work");
    memory_service(&fs)
        .generate(&config("demo", StyleLibrary::Mantine), Path::new("/work"))
        .unwrap();

    let created = fs.created_dirs();
    for (i, dir) in created.iter().enumerate() {
        let parent = dir.parent().unwrap();
        let seeded = parent == Path::new("/work");
        let earlier = created[..i].iter().any(|d| d == parent);
        assert!(seeded || earlier, "{} created before its parent", dir.display());
    }

    let modules = created.iter().position(|d| d.ends_with("server/src/modules"));
    let user = created.iter().position(|d| d.ends_with("server/src/modules/user"));
    assert!(modules.unwrap() < user.unwrap());
}

// ── Failures ─────────────────────────────────────────────────────────────────

#[test]
fn scaffold_failure_leaves_partial_root() {
    let fs = MemoryFilesystem::new().with_dir("/work");
    let service = ScaffoldService::new(Box::new(fs.clone()), Box::new(FailingVite));

    let err = service
        .generate(&config("demo", StyleLibrary::Mantine), Path::new("/work"))
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::ScaffoldToolFailed);
    assert_eq!(err.stage(), Some(Stage::FrontendScaffold));
    // No rollback: the root stays and blocks a rerun.
    assert!(fs.exists(Path::new("/work/demo")));
    assert!(fs.list_files().is_empty());
}

#[test]
fn malformed_client_manifest_is_fatal_and_untouched() {
    let fs = MemoryFilesystem::new().with_dir("/work");
    let mut vite = FakeVite::new(fs.clone());
    vite.package_json = "{ \"name\": ";
    let service = ScaffoldService::new(Box::new(fs.clone()), Box::new(vite));

    let err = service
        .generate(&config("demo", StyleLibrary::Mantine), Path::new("/work"))
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::Io);
    assert_eq!(err.stage(), Some(Stage::ClientManifest));
    assert_eq!(
        fs.read_file("/work/demo/client/package.json").as_deref(),
        Some("{ \"name\": ")
    );
    assert!(!fs.exists(Path::new("/work/demo/server")));
}

// ── On disk ──────────────────────────────────────────────────────────────────

#[test]
fn generates_on_local_disk() {
    let tmp = TempDir::new().unwrap();
    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(FakeVite::new(LocalFilesystem::new())),
    );

    let report = service
        .generate(&config("demo", StyleLibrary::Shadcn), tmp.path())
        .unwrap();

    let root = tmp.path().join("demo");
    assert_eq!(report.root, root);
    assert!(root.join("client/src/hooks/useApi.ts").is_file());
    assert!(root.join("server/src/modules/user/__tests__/user.service.test.ts").is_file());

    let server: Value =
        serde_json::from_str(&std::fs::read_to_string(root.join("server/package.json")).unwrap())
            .unwrap();
    assert_eq!(server["name"], "demo-server");

    let readme = std::fs::read_to_string(root.join("README.md")).unwrap();
    assert!(readme.starts_with("# demo\n"));
    assert!(readme.contains("npx shadcn@latest init"));
}

#[test]
fn existing_directory_on_disk_is_left_alone() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("demo");
    std::fs::create_dir(&root).unwrap();
    std::fs::write(root.join("keep.txt"), "mine").unwrap();

    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(FakeVite::new(LocalFilesystem::new())),
    );
    let err = service
        .generate(&config("demo", StyleLibrary::Mantine), tmp.path())
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::DirectoryExists);
    assert_eq!(std::fs::read_dir(&root).unwrap().count(), 1);
    assert_eq!(std::fs::read_to_string(root.join("keep.txt")).unwrap(), "mine");
}
