//! Common test utilities for shapez-mod integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Raw declarations shaped like the host compiler's output
#[allow(dead_code)]
pub const RAW_DECLARATIONS: &str = r#"declare module "core/signal" {
    export class Signal {
        add(receiver: any, scope?: object): void;
        dispatch(...payload: any[]): string | void;
    }
}
declare module "game/component" {
    export class Component {
        /**
         * Returns the components unique id
         * @abstract
         */
        static getId(): string;
        copyAdditionalStateTo(otherComponent: Component): void;
    }
}
declare module "game/components/belt" {
    import { Component } from "../component.js";
    export class BeltComponent extends Component {
        getPath(): import("../belt_path").BeltPath;
        getLoader(): Promise;
    }
}
declare module "game/belt_path" {
    export class BeltPath {
        numCompressedItemsAfterFirstItem: number;
    }
}
declare module "core/config" {
    export namespace globalConfig {
        export const tileSize: number;
        export const maximumTickRate: number;
    }
}
"#;

/// A temporary mod project
#[allow(dead_code)]
pub struct TestProject {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create an empty project directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a project with a host build holding raw declarations
    pub fn with_host() -> Self {
        let project = Self::new();
        project.write_file("shapez/types_raw.d.ts", RAW_DECLARATIONS);
        project
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Add a mod package directory (with a manifest) under src/
    pub fn add_mod_root(&self, id: &str) {
        self.write_file(&format!("src/{id}/mod.json"), "{}");
    }

    /// Add a directory under src/ without a manifest
    pub fn add_shared_dir(&self, name: &str) {
        std::fs::create_dir_all(self.path.join("src").join(name))
            .expect("Failed to create directory");
    }

    /// Command running the binary against this project
    pub fn cmd(&self) -> Command {
        let mut cmd = shapez_mod_cmd();
        cmd.current_dir(&self.path).arg("--project").arg(&self.path);
        cmd
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn shapez_mod_cmd() -> Command {
    let mut cmd = Command::cargo_bin("shapez-mod").expect("binary should build");
    cmd.env_remove("SHAPEZ_MOD_PROJECT").env_remove("RUST_LOG");
    cmd
}
